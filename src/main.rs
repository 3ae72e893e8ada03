use clap::Parser;
use trigger_scheduler::cli::{self, Cli, Commands};

#[tokio::main]
async fn main() {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Serve(args) => cli::serve::execute(args).await,
        Commands::Execute(args) => cli::execute::execute(args).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
