use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "gramrust",
    version = "0.1",
    about = "Rust wrapper for Instagram's private API."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Upload a photo with a caption.
    /// Runs the vendor's upload/configure/expose call chain.
    Upload {
        /// Path to the JPEG image file to upload.
        #[arg(help = "Path to the image file", required = true)]
        image: PathBuf,

        /// Caption text for the post.
        #[arg(help = "Caption text", required = true)]
        caption: String,

        /// Upload identifier tying the three calls together.
        /// A random one is generated if not provided.
        #[arg(long, help = "Upload identifier (optional)", required = false)]
        upload_id: Option<String>,
    },

    /// Fetch the comments on a media item.
    Comments {
        /// Numeric identifier of the media item.
        #[arg(help = "Media ID", required = true)]
        media_id: u64,

        /// Pagination cursor from a previous response's next_max_id.
        #[arg(long, help = "Pagination cursor (optional)", required = false)]
        max_id: Option<String>,
    },

    /// Post a comment on a media item.
    Comment {
        /// Numeric identifier of the media item to comment on.
        #[arg(help = "Media ID", required = true)]
        media_id: u64,

        /// Text content of the comment.
        #[arg(help = "Comment text", required = true)]
        text: String,
    },
}
