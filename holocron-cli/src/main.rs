//! Main entry point for the Holocron CLI.

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use dotenv::dotenv;
use shared::models::EntityKind;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod context;
mod storage;

use commands::{
    contacts::ContactsCommand,
    session::{LoginArgs, SignupArgs},
};
use context::Context;

/// Holocron CLI
#[derive(Parser)]
#[command(name = "holocron")]
#[command(about = "Browse the Star Wars catalogue, keep favorites and manage contacts", long_about = None)]
struct Cli {
    /// Path to the configuration file (optional)
    #[arg(
        long,
        short,
        global = true,
        help = "Path to the configuration file (e.g., holocron.yaml or holocron.json). If not provided, defaults will be used."
    )]
    config: Option<PathBuf>,

    /// Directory holding favorites and the session token
    #[arg(
        long,
        global = true,
        help = "Directory holding favorites and the session token. Defaults to the user data directory."
    )]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Subcommands for the Holocron CLI
#[derive(Subcommand)]
enum Commands {
    /// List one page of people, planets or vehicles
    List {
        #[arg(help = "Catalogue kind: people, planets or vehicles")]
        kind: EntityKind,

        #[arg(long, help = "Cursor URL printed as `previous` or `next` by an earlier listing")]
        page: Option<String>,
    },
    /// Show every property of one catalogue item
    Detail {
        #[arg(help = "Catalogue kind: people, planets or vehicles")]
        kind: EntityKind,
        uid: String,
    },
    /// Add or remove a favorite
    Like {
        #[arg(help = "Catalogue kind: people, planets or vehicles")]
        kind: EntityKind,
        uid: String,

        #[arg(long, short, help = "Name stored with the favorite")]
        name: Option<String>,
    },
    /// List stored favorites
    Favorites,
    /// Manage the contact collection
    Contacts {
        #[command(subcommand)]
        command: ContactsCommand,
    },
    /// Sign in and store the session token
    Login(LoginArgs),
    /// Create an account and sign in
    Signup(SignupArgs),
    /// Forget the stored session token
    Logout,
    /// Show whether a session token is stored
    Whoami,

    /// Generate shell completion scripts for the CLI
    Completion {
        /// The shell type for which to generate the completion script (e.g., bash, zsh, fish, powershell)
        #[arg(
            long,
            short,
            value_enum,
            help = "The shell type for which to generate the completion script (e.g., bash, zsh, fish, powershell)"
        )]
        shell: Shell,
    },

    /// Generate a configuration file
    Config {
        /// Format of the configuration file to generate (yaml or json). Defaults to yaml.
        #[arg(
            long,
            short,
            help = "Format of the configuration file to generate (yaml or json). Defaults to yaml."
        )]
        format: Option<String>,
    },
}

fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenv().ok();
    let cli = Cli::parse();

    let context = match cli.command {
        Commands::Completion { shell } => {
            commands::completion::generate_completion(shell);
            return Ok(());
        }
        Commands::Config { format } => {
            let format = format.unwrap_or_else(|| "yaml".to_string());
            return commands::config::generate_config(&format);
        }
        _ => Context::load(cli.config.as_deref(), cli.data_dir.as_deref())?,
    };
    init_tracing(&context.config.log_level);

    match cli.command {
        Commands::List { kind, page } => {
            commands::catalogue::list(&context, kind, page.as_deref()).await?;
        }
        Commands::Detail { kind, uid } => {
            commands::catalogue::detail(&context, kind, &uid).await?;
        }
        Commands::Like { kind, uid, name } => {
            commands::catalogue::like(&context, kind, &uid, name);
        }
        Commands::Favorites => commands::catalogue::favorites(&context),
        Commands::Contacts { command } => commands::contacts::run(&context, command).await?,
        Commands::Login(args) => commands::session::login(&context, args).await?,
        Commands::Signup(args) => commands::session::signup(&context, args).await?,
        Commands::Logout => commands::session::logout(&context),
        Commands::Whoami => commands::session::whoami(&context),
        Commands::Completion { .. } | Commands::Config { .. } => {}
    }

    Ok(())
}
