use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tokio::io::BufReader;

use social_networking::infrastructure::adapters::{console, ConsoleAdapter};
use social_networking::infrastructure::config::Config;
use social_networking::Application;

#[derive(Parser)]
#[command(name = "social-networking")]
#[command(about = "A console-based social networking application", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "social-networking.yaml")]
    config: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive shell
    Run {
        /// Execute the commands in this file instead of reading stdin
        #[arg(short, long)]
        script: Option<PathBuf>,
    },
    /// Show version
    Version,
    /// Generate default config
    InitConfig,
}

fn main() {
    let cli = Cli::parse();

    let (config, config_error) = match Config::from_sources(&cli.config) {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level)),
        )
        .init();

    if let Some(e) = config_error {
        tracing::warn!("Failed to load config: {}, using defaults", e);
    }

    match cli.command {
        Commands::Run { script } => {
            if let Err(e) = run_shell(&config, script) {
                tracing::error!("Shell failed: {}", e);
                std::process::exit(1);
            }
        }
        Commands::Version => {
            println!("social-networking v{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::InitConfig => {
            init_config();
        }
    }
}

fn run_shell(config: &Config, script: Option<PathBuf>) -> std::io::Result<()> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let result = rt.block_on(async {
        let mut app = Application::default();
        let mut stdout = std::io::stdout();

        match script {
            Some(path) => {
                let file = tokio::fs::File::open(&path).await?;
                ConsoleAdapter::new(&config.shell)
                    .without_prompt()
                    .run(&mut app, console::async_lines(BufReader::new(file)), &mut stdout)
                    .await?;
            }
            None => {
                ConsoleAdapter::new(&config.shell)
                    .run(&mut app, console::stdin_lines(), &mut stdout)
                    .await?;
            }
        }
        Ok::<(), std::io::Error>(())
    });
    rt.shutdown_background();
    result
}

fn init_config() {
    match Config::template() {
        Ok(yaml) => {
            println!("{}", yaml);
            println!("\nSave this to social-networking.yaml and adjust as needed.");
        }
        Err(e) => tracing::error!("Failed to render config: {}", e),
    }
}
