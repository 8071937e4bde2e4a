use clap::Parser;
use gramrust::cli::{Cli, Commands};
use gramrust::config::AppConfig;
use gramrust::operations;
use log::error;

#[tokio::main]
async fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let config = AppConfig::load();
    let client = config.create_client();

    let result = match cli.command {
        Commands::Upload {
            image,
            caption,
            upload_id,
        } => {
            operations::upload::handle_upload_command_with_client(image, caption, upload_id, client)
                .await
        }
        Commands::Comments { media_id, max_id } => {
            operations::comments::handle_comments_command_with_client(media_id, max_id, client)
                .await
        }
        Commands::Comment { media_id, text } => {
            operations::comment::handle_comment_command_with_client(media_id, text, client).await
        }
    };

    if let Err(err) = result {
        error!("Command failed: {}", err);
        std::process::exit(1);
    }
}
