//! Terminal shell around one chat session.
//!
//! Presentational wiring only: reads the user id and message lines,
//! renders replies. All behavior lives in the library crates.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;

use backend_client::HttpQueryClient;
use chat_session::{ChatSession, SendOutcome};

#[derive(Parser)]
#[command(name = "chat-cli")]
#[command(about = "Single-session chat client for the Q&A backend")]
#[command(version)]
struct Cli {
    /// Backend query endpoint
    #[arg(
        long,
        env = "CHATBOX_ENDPOINT",
        default_value = "https://ca-chatbot.onrender.com/query"
    )]
    endpoint: String,

    /// User id; prompted for when omitted
    #[arg(long)]
    user_id: Option<String>,
}

fn prompt_line(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None); // EOF
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let client = HttpQueryClient::new(cli.endpoint);
    let mut session = ChatSession::new(client);

    // Start gate: blank ids are rejected by the session, keep asking.
    if let Some(user_id) = cli.user_id {
        session.start_chat(&user_id);
    }
    while !session.phase().is_active() {
        match prompt_line("Enter user id: ")? {
            Some(line) => {
                session.start_chat(&line);
            }
            None => return Ok(()),
        }
    }

    println!("Chatbot - {} (type /quit to exit)", session.user_id());

    loop {
        let line = match prompt_line(&format!("{}> ", session.user_id()))? {
            Some(line) => line,
            None => break,
        };
        if line == "/quit" {
            break;
        }

        session.update_input(line);
        if !session.pending_input().trim().is_empty() {
            println!("Chatbot is thinking...");
        }
        match session.send_message().await {
            SendOutcome::Completed => {
                if let Some(reply) = session.last_bot_message() {
                    println!("bot> {}", reply.content);
                }
            }
            // Blank input; nothing was sent.
            SendOutcome::Rejected => {}
            SendOutcome::Cancelled => break,
        }
    }

    session.shutdown();
    Ok(())
}
