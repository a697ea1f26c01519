// MeetCodeAI support chat - console front end
// Reads messages from stdin and answers through the support desk.

use anyhow::{Context, Result};
use meetcode_chat_core::fs_manager::PortablePathManager;
use meetcode_chat_core::logging::init_tracing;
use meetcode_chat_core::models::{ChatMessage, ChatUser, IncomingMessage, Sender};
use meetcode_chat_core::{database, AppError, ChatConfig, ChatDesk};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{error, info};

const CONSOLE_USER_ID: &str = "console";
const CONSOLE_USER_NAME: &str = "Console User";

fn print_message(msg: &ChatMessage) {
    let who = match msg.sender {
        Sender::User => "you",
        Sender::Support => "support",
    };
    println!("[{}] {}", who, msg.message);
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = ChatConfig::load().context("Invalid configuration")?;
    init_tracing(config.log_format);

    if let Err(e) = PortablePathManager::init() {
        error!("Failed to initialize data directory: {}", e);
    }

    let pool = database::init_db(&config.database_url)
        .await
        .with_context(|| format!("Failed to open {}", config.database_url))?;
    let desk = ChatDesk::from_config(&config, pool)?;
    let user = ChatUser::new(CONSOLE_USER_ID, CONSOLE_USER_NAME);

    info!(
        "Support desk ready ({} rules)",
        desk.classifier().table().rules().len()
    );
    println!("MeetCodeAI support chat. Commands: /history, /clear, /quit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    loop {
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match line.trim() {
            "" => continue,
            "/quit" | "/exit" => break,
            "/history" => {
                for msg in desk.history(&user.id, None).await? {
                    print_message(&msg);
                }
            }
            "/clear" => {
                let removed = desk.clear_history(&user.id).await?;
                println!("Cleared {} messages.", removed);
            }
            text => match desk.send_message(&user, IncomingMessage::new(text)).await {
                Ok(exchange) => {
                    let topic = exchange.reply_message.topic.as_deref().unwrap_or("-");
                    println!("[support:{}] {}", topic, exchange.reply_message.message);
                }
                Err(e @ (AppError::Validation(_) | AppError::RateLimited)) => {
                    println!("! {}", e);
                }
                Err(e) => return Err(e.into()),
            },
        }
    }

    info!("Support desk closed");
    Ok(())
}
