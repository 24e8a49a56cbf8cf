//! Blob storage — uploads resume PDFs to S3-compatible object storage.

use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client as S3Client;
use tracing::info;

use crate::errors::AppError;

/// Uploads a PDF under the given key and returns its public URL.
pub async fn upload_pdf(
    s3: &S3Client,
    bucket: &str,
    endpoint: &str,
    key: &str,
    data: bytes::Bytes,
) -> Result<String, AppError> {
    s3.put_object()
        .bucket(bucket)
        .key(key)
        .content_type("application/pdf")
        .body(ByteStream::from(data))
        .send()
        .await
        .map_err(|e| AppError::Storage(format!("failed to upload '{key}': {e}")))?;

    info!(bucket = %bucket, key = %key, "resume stored");

    Ok(public_url(endpoint, bucket, key))
}

fn public_url(endpoint: &str, bucket: &str, key: &str) -> String {
    format!("{}/{}/{}", endpoint.trim_end_matches('/'), bucket, key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_url_joins_segments() {
        assert_eq!(
            public_url("http://localhost:9000", "resumes", "pdfs/a.pdf"),
            "http://localhost:9000/resumes/pdfs/a.pdf"
        );
    }

    #[test]
    fn test_public_url_tolerates_trailing_slash() {
        assert_eq!(
            public_url("http://localhost:9000/", "resumes", "pdfs/a.pdf"),
            "http://localhost:9000/resumes/pdfs/a.pdf"
        );
    }
}
