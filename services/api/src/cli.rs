use crate::demo::{run_demo, run_generate, DemoArgs, GenerateArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use wardrobe_ai::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Wardrobe Stylist",
    about = "Generate weather- and activity-aware outfits from a personal wardrobe",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Generate outfits once from a wardrobe file and print them
    Generate(GenerateArgs),
    /// Run a styling demo against the built-in sample wardrobe
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Generate(args) => run_generate(args),
        Command::Demo(args) => run_demo(args),
    }
}
