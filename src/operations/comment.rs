use crate::client::{InstagramClient, InstagramClientError};
use log::{error, info};

/// Configuration options for creating a comment on a media item
#[derive(Debug, Clone)]
pub struct CommentOptions {
    /// Numeric identifier of the media item to comment on
    pub media_id: u64,
    /// Text content of the comment
    pub text: String,
}

/// Result of a comment creation operation
#[derive(Debug)]
pub struct CommentResult {
    /// Whether the comment was successfully created
    pub success: bool,
    /// Formatted message for CLI output
    pub message: String,
}

/// Operation for creating a comment on a media item
pub struct CommentOperation {
    /// Configuration options for the operation
    options: CommentOptions,
    /// Instagram client for API interactions
    client: InstagramClient,
}

impl CommentOperation {
    /// Create a new comment operation with the provided options
    pub fn new(options: CommentOptions) -> Self {
        let client = InstagramClient::new();
        Self { options, client }
    }

    /// Create a new comment operation with a custom Instagram client
    pub fn with_client(options: CommentOptions, client: InstagramClient) -> Self {
        Self { options, client }
    }

    /// Execute the comment creation operation
    pub async fn execute(&mut self) -> Result<CommentResult, InstagramClientError> {
        info!("Creating a new comment on media {}", self.options.media_id);

        match self
            .client
            .post_comment(self.options.media_id, &self.options.text)
            .await
        {
            Ok(_) => Ok(CommentResult {
                success: true,
                message: "Comment created successfully!".to_string(),
            }),
            Err(err) => Ok(CommentResult {
                success: false,
                message: format!("Error creating comment: {}", err),
            }),
        }
    }
}

/// CLI handler function for the comment command
pub async fn handle_comment_command_with_client(
    media_id: u64,
    text: String,
    client: InstagramClient,
) -> Result<(), InstagramClientError> {
    let options = CommentOptions { media_id, text };

    let mut operation = CommentOperation::with_client(options, client);
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
            error!("Error executing comment operation: {:?}", err);
            Err(err)
        }
    }
}
