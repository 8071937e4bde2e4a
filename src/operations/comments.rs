use crate::client::{InstagramClient, InstagramClientError};
use crate::models::comment::MediaCommentsResult;
use log::{error, info};

/// Configuration options for fetching comments on a media item
#[derive(Debug, Clone)]
pub struct CommentsOptions {
    /// Numeric identifier of the media item
    pub media_id: u64,
    /// Pagination cursor from a previous response (None for the first page)
    pub max_id: Option<String>,
}

/// Result of a comments fetch operation
#[derive(Debug)]
pub struct CommentsResult {
    /// The number of comments returned in this page
    pub fetched_count: usize,
    /// Formatted output (for CLI display)
    pub formatted_output: String,
    /// The raw API response data
    pub raw_response: MediaCommentsResult,
}

/// Operation for fetching the comments on a media item
pub struct CommentsOperation {
    /// Configuration options for the operation
    options: CommentsOptions,
    /// Instagram client for API interactions
    client: InstagramClient,
}

impl CommentsOperation {
    /// Create a new comments operation with the provided options
    pub fn new(options: CommentsOptions) -> Self {
        let client = InstagramClient::new();
        Self { options, client }
    }

    /// Create a new comments operation with a custom Instagram client
    pub fn with_client(options: CommentsOptions, client: InstagramClient) -> Self {
        Self { options, client }
    }

    /// Execute the comments fetch operation
    pub async fn execute(&mut self) -> Result<CommentsResult, InstagramClientError> {
        info!("Fetching comments for media {}", self.options.media_id);

        let response = self
            .client
            .fetch_media_comments(self.options.media_id, self.options.max_id.as_deref())
            .await?;

        let mut output = format!(
            "Media {} has {} comments\n",
            self.options.media_id, response.comment_count
        );

        if let Some(caption) = &response.caption {
            output.push_str(&format!("Caption: {}\n", caption.text));
        }

        for comment in &response.comments {
            output.push_str(&comment.format_summary());
            output.push('\n');
        }

        if response.has_more_comments {
            if let Some(next_max_id) = &response.next_max_id {
                output.push_str(&format!(
                    "More comments available; pass --max-id {} for the next page\n",
                    next_max_id
                ));
            }
        }

        Ok(CommentsResult {
            fetched_count: response.comments.len(),
            formatted_output: output,
            raw_response: response,
        })
    }
}

/// CLI handler function for the comments command
pub async fn handle_comments_command_with_client(
    media_id: u64,
    max_id: Option<String>,
    client: InstagramClient,
) -> Result<(), InstagramClientError> {
    let options = CommentsOptions { media_id, max_id };

    let mut operation = CommentsOperation::with_client(options, client);
    match operation.execute().await {
        Ok(result) => {
            println!("{}", result.formatted_output);
            Ok(())
        }
        Err(err) => {
            error!("Error fetching comments: {:?}", err);
            Err(err)
        }
    }
}
