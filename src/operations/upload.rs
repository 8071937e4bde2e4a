use crate::client::{InstagramClient, InstagramClientError};
use log::{error, info};
use std::path::PathBuf;

/// Configuration options for uploading a photo
#[derive(Debug, Clone)]
pub struct UploadOptions {
    /// Path to the JPEG image file to upload
    pub image_path: PathBuf,
    /// Caption text for the post
    pub caption: String,
    /// Optional upload identifier; a random one is generated when absent
    pub upload_id: Option<String>,
}

/// Result of a photo upload operation
#[derive(Debug)]
pub struct UploadResult {
    /// Whether the upload completed all three steps
    pub success: bool,
    /// Identifier of the created media item (if reported by the server)
    pub media_id: Option<String>,
    /// Permalink of the created post (if the server returned a shortcode)
    pub permalink: Option<String>,
    /// Formatted message for CLI output
    pub message: String,
}

/// Operation for uploading a photo through the three-call chain
pub struct UploadOperation {
    /// Configuration options for the operation
    options: UploadOptions,
    /// Instagram client for API interactions
    client: InstagramClient,
}

impl UploadOperation {
    /// Create a new upload operation with the provided options
    pub fn new(options: UploadOptions) -> Self {
        let client = InstagramClient::new();
        Self { options, client }
    }

    /// Create a new upload operation with a custom Instagram client
    pub fn with_client(options: UploadOptions, client: InstagramClient) -> Self {
        Self { options, client }
    }

    /// Execute the upload operation
    pub async fn execute(&mut self) -> Result<UploadResult, InstagramClientError> {
        info!(
            "Uploading photo {} with caption: '{}'",
            self.options.image_path.display(),
            self.options.caption
        );

        let photo = std::fs::read(&self.options.image_path)?;

        match self
            .client
            .upload_photo(photo, &self.options.caption, self.options.upload_id.clone())
            .await
        {
            Ok(result) => {
                let media_id = result.media.as_ref().map(|media| media.id.clone());
                let permalink = result.media.as_ref().and_then(|media| media.permalink());
                let message = match (&media_id, &permalink) {
                    (Some(id), Some(link)) => {
                        format!("Photo uploaded successfully! Media ID: {}, URL: {}", id, link)
                    }
                    (Some(id), None) => {
                        format!("Photo uploaded successfully! Media ID: {}", id)
                    }
                    _ => "Photo uploaded successfully".to_string(),
                };

                Ok(UploadResult {
                    success: true,
                    media_id,
                    permalink,
                    message,
                })
            }
            Err(err) => {
                let message = format!("Error uploading photo: {}", err);

                Ok(UploadResult {
                    success: false,
                    media_id: None,
                    permalink: None,
                    message,
                })
            }
        }
    }
}

/// CLI handler function for the upload command
pub async fn handle_upload_command_with_client(
    image_path: PathBuf,
    caption: String,
    upload_id: Option<String>,
    client: InstagramClient,
) -> Result<(), InstagramClientError> {
    let options = UploadOptions {
        image_path,
        caption,
        upload_id,
    };

    let mut operation = UploadOperation::with_client(options, client);
    match operation.execute().await {
        Ok(result) => {
            if result.success {
                println!("{}", result.message);
            } else {
                eprintln!("{}", result.message);
            }
            Ok(())
        }
        Err(err) => {
            error!("Error executing upload operation: {:?}", err);
            Err(err)
        }
    }
}
