use clap::Parser;
use ssm_param_cache::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Get(args) => cli::get::run(args).await,
        Command::Watch(args) => cli::watch::run(args).await,
    }
}
