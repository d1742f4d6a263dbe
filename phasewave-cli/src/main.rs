use clap::{Parser, Subcommand};
use phasewave_cli::{render, summary};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "phasewave")]
#[command(about = "Render benchmark phase statistics into zoomable chart data")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build chart panels from a samples file and write them as JSON
    Render {
        #[arg(long, short)]
        input: PathBuf,

        /// TOML file selecting the chart statistics
        #[arg(long, short)]
        config: Option<PathBuf>,

        /// Start of the visible range in epoch milliseconds
        #[arg(long)]
        from: Option<u64>,

        /// End of the visible range in epoch milliseconds
        #[arg(long)]
        to: Option<u64>,

        /// Defaults to stdout
        #[arg(long, short)]
        output: Option<PathBuf>,

        #[arg(long)]
        pretty: bool,
    },
    /// Print the fork/metric pairs found in a samples file
    Summary {
        #[arg(long, short)]
        input: PathBuf,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Render {
            input,
            config,
            from,
            to,
            output,
            pretty,
        } => render::run_render(render::RenderOptions {
            input,
            config,
            from,
            to,
            output,
            pretty,
        }),
        Commands::Summary { input } => summary::run_summary(&input),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(2);
    }
}
