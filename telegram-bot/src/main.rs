//! `metadata-bot run [--token TOKEN]`: replies to every text message and follows up with a
//! generated title, summary and tags.

use clap::Parser;
use telegram_bot::{load_config, run_bot, Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let Cli { command } = Cli::parse();
    let Commands::Run { token } = command;
    run_bot(load_config(token)?).await
}
