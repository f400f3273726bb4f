mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "sky")]
#[command(about = "Declare it. Synthesize it. Ship it.", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Synthesize the stack and show the resulting plan
    Synth {
        /// Print the full declaration graph as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the stack outputs
    Outputs,
    /// Show version information
    Version,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Synth { json } => commands::synth::handle(json),
        Commands::Outputs => commands::outputs::handle(),
        Commands::Version => {
            println!("skystack {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
