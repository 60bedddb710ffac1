use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use colored::Colorize;
use lpgdesk::cli::{Session, SessionOptions};
use lpgdesk::{CallCenter, ConsoleListener, Context, DeskConfig, Result};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "lpgdesk")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "LPG cylinder service call center", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    run: RunArgs,
}

#[derive(Args, Debug, Clone)]
struct RunArgs {
    /// Config file (default: ./lpgdesk.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Listener to notify of state changes; repeat to add more
    #[arg(short, long = "listener", value_name = "NAME", global = true)]
    listeners: Vec<String>,

    /// Abort on non-numeric input instead of re-prompting
    #[arg(long, global = true)]
    strict: bool,

    /// Do not print the option list before each choice
    #[arg(long, global = true)]
    quiet_menu: bool,

    /// Use an arrow-key menu instead of typed numbers
    #[arg(long, global = true)]
    select: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the call-center menu (default)
    Run,

    /// Write a default lpgdesk.toml in the current directory
    Init {
        /// Overwrite an existing config
        #[arg(short, long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    lpgdesk::logging::init_tracing();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}", format!("Error: {:#}", e).red());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_desk(&cli.run),
        Commands::Init { force } => lpgdesk::cli::init::run(force),
        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "lpgdesk", &mut io::stdout());
            Ok(())
        }
    }
}

fn run_desk(args: &RunArgs) -> Result<()> {
    let mut config =
        DeskConfig::load(args.config.as_deref()).context("Failed to load configuration")?;
    if !args.listeners.is_empty() {
        config.listeners = args.listeners.clone();
    }
    if args.strict {
        config.strict_input = true;
    }
    if args.quiet_menu {
        config.show_menu = false;
    }
    tracing::debug!(?config, "configuration loaded");

    let mut center = CallCenter::new();
    for name in &config.listeners {
        center.attach(Arc::new(ConsoleListener::new(name.as_str())));
    }

    if args.select {
        return lpgdesk::cli::picker::run(&mut center);
    }

    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout(), SessionOptions::from(&config));
    let end = session.run(&mut center)?;
    tracing::debug!(?end, "session finished");
    Ok(())
}
