//! ntfy-post - Send a message to an ntfy topic

use std::io::{self, Read};

use clap::Parser;
use libntfy::logging;
use libntfy::service::MessengerService;
use libntfy::store::{JsonFileStore, TopicStore};
use libntfy::{Config, NtfyError, Result};
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "ntfy-post")]
#[command(version, about = "Send a message to an ntfy topic")]
#[command(long_about = r#"Send a message to an ntfy topic.

The message is posted as plain text "TITLE: BODY" to SERVER/TOPIC.
Topics that were sent to successfully are remembered and can be
listed with --list-topics.

EXAMPLES:
    # Send a message
    ntfy-post -t alerts -T Build "passed ✅"

    # Read the body from stdin
    make test 2>&1 | tail -1 | ntfy-post -t builds -T "Test run"

    # Use a self-hosted server
    ntfy-post --server https://ntfy.example.com -t ops -T Disk "80% full"

    # JSON output for scripting
    ntfy-post -t alerts -T Build ok --format json | jq -r .id

    # Saved topics
    ntfy-post --list-topics

CONFIGURATION:
    Configuration file: ~/.config/ntfy-messenger/config.toml
    (override with NTFY_MESSENGER_CONFIG)
    Topic history: ~/.local/share/ntfy-messenger/topics.json

EXIT CODES:
    0 - Message sent
    1 - Delivery, configuration or storage error
    3 - Invalid input (topic, title or body missing)
"#)]
struct Cli {
    /// Message body (reads from stdin if not provided)
    body: Option<String>,

    /// Topic to publish to (defaults to the configured or first saved topic)
    #[arg(short, long, value_name = "TOPIC")]
    topic: Option<String>,

    /// Message title
    #[arg(short = 'T', long, value_name = "TITLE")]
    title: Option<String>,

    /// ntfy server URL (overrides config)
    #[arg(long, value_name = "URL")]
    server: Option<String>,

    /// Print saved topics and exit
    #[arg(long)]
    list_topics: bool,

    /// Output format
    #[arg(short, long, default_value = "text", value_name = "FORMAT")]
    #[arg(value_parser = ["text", "json"])]
    format: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    logging::from_env(cli.verbose).init();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        print_causes(&e);
        std::process::exit(e.exit_code());
    }
}

// Wrapping variants repeat their inner message, so only new text is shown.
fn print_causes(error: &NtfyError) {
    let mut last = error.to_string();
    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        let text = cause.to_string();
        if text != last {
            eprintln!("  Caused by: {}", text);
            last = text;
        }
        source = cause.source();
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load()?;
    if let Some(server) = cli.server.clone() {
        config.server.url = server;
    }

    if cli.list_topics {
        return list_topics(&config, &cli.format);
    }

    let body = match cli.body.clone() {
        Some(body) => body,
        None => read_stdin_body()?,
    };

    let service = MessengerService::from_config(config)?;
    let mut composer = service.new_composer();
    if let Some(topic) = cli.topic {
        composer.set_topic(topic);
    }
    composer.set_title(cli.title.unwrap_or_default());
    composer.set_body(body);

    let topic = composer.draft().topic.clone();
    let ack = service.submission().submit(&mut composer).await?;

    match cli.format.as_str() {
        "json" => {
            let output = serde_json::json!({
                "status": "sent",
                "topic": topic,
                "id": ack.id,
            });
            println!("{}", output);
        }
        _ => println!("{}", composer.status()),
    }

    Ok(())
}

fn read_stdin_body() -> Result<String> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(String::new());
    }

    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| NtfyError::InvalidInput(format!("Failed to read stdin: {}", e)))?;
    debug!("Read {} bytes from stdin", buffer.len());

    Ok(buffer.trim_end_matches(&['\r', '\n'][..]).to_string())
}

fn list_topics(config: &Config, format: &str) -> Result<()> {
    let store = JsonFileStore::new(config.topics_path()?);
    let topics = store.load();

    match format {
        "json" => println!("{}", serde_json::Value::from(topics)),
        _ => {
            for topic in topics {
                println!("{}", topic);
            }
        }
    }

    Ok(())
}
