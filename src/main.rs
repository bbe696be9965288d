use clap::Parser;
use sitelyzer::errors::ErrorHandler;
use sitelyzer::structs::cli::Cli;
use sitelyzer::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(e) = CommandRunner::new().run_command(cli.command).await {
        ErrorHandler::handle_error(&e);
        std::process::exit(1);
    }
}
