use std::io::Write;

use anyhow::Result;
use assistant::{route, CareerAssistant, Route, Session};
use clap::Parser;
use llm::{OpenAiChatClient, DEFAULT_BASE_URL, DEFAULT_MODEL};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Chat with CareerAI from the terminal, one line per message.
#[derive(Parser, Debug)]
struct Args {
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    api_key: String,
    #[arg(long, env = "OPENAI_MODEL", default_value = DEFAULT_MODEL)]
    model: String,
    #[arg(long, env = "OPENAI_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let model = OpenAiChatClient::with_base_url(args.api_key, args.model, &args.base_url)?;
    let assistant = CareerAssistant::new(model);
    let mut session = Session::new();
    info!(session_id = %session.id(), "terminal session started");

    println!("💼 CareerAI");
    println!("Your AI assistant for resumes, interviews, job search & LinkedIn guidance.");
    println!("Ask CareerAI about jobs, resumes, interviews… (Ctrl-D to quit)");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.is_empty() {
            continue;
        }

        if route(&line) == Route::CareerQuery {
            println!("CareerAI is thinking...");
        }
        let turn = assistant.respond(&mut session, &line).await;
        println!("CareerAI: {}\n", turn.reply.content);
    }

    info!(
        session_id = %session.id(),
        messages = session.transcript().len(),
        "terminal session ended"
    );
    Ok(())
}
