//! prdgen CLI entry point.
//!
//! Parses command-line arguments and dispatches to the wizard or one of the
//! utility subcommands.

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use prdgen::config::{load_global_config, WizardConfig};
use prdgen::output::{print_error, print_warning, BOLD, CYAN, GREEN, RESET};
use prdgen::prompt::ConsolePrompter;
use prdgen::signal::SignalHandler;
use prdgen::store::PrdStore;
use prdgen::wizard::Wizard;
use prdgen::Result;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "prdgen")]
#[command(
    version,
    about = "Interactive wizard that turns a feature description into a structured PRD",
    after_help = "EXAMPLES:
    # Run the wizard (writes ./tasks/prd-<slug>.md)
    prdgen

    # Write PRDs somewhere else, overwrite without asking
    prdgen --output-dir docs/prd --force

    # Is there already a PRD for this feature?
    prdgen check \"Add dark mode toggle\"

    # Shell completions
    prdgen completions zsh > ~/.zfunc/_prdgen"
)]
struct Cli {
    /// Directory PRD files are written to (default: ./tasks)
    #[arg(short, long, global = true)]
    output_dir: Option<PathBuf>,

    /// Overwrite an existing PRD file without asking
    #[arg(short, long)]
    force: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether a PRD already exists for a feature
    #[command(after_help = "EXAMPLES:
    prdgen check \"Add dark mode toggle\"
    prdgen check --output-dir docs/prd \"Export to CSV\"

EXIT CODES:
    0 if a PRD exists for the feature, 1 otherwise.")]
    Check {
        /// The feature description or name to look up
        feature: String,
    },

    /// Generate a shell completion script on stdout
    Completions {
        /// Target shell
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();

    let code = match run(cli) {
        Ok(code) => code,
        Err(e) => {
            print_error(&e.to_string());
            1
        }
    };
    process::exit(code);
}

fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "prdgen", &mut std::io::stdout());
            Ok(0)
        }
        Some(Commands::Check { feature }) => check_command(&feature, cli.output_dir),
        None => wizard_command(cli.output_dir, cli.force),
    }
}

/// Build the effective config: CLI flags over the global config file over
/// built-in defaults.
fn build_config(output_dir: Option<PathBuf>, force: bool) -> Result<WizardConfig> {
    let global = load_global_config()?;
    let mut config = WizardConfig::from_env()?
        .with_force(force)
        .with_global(&global);
    if let Some(dir) = output_dir {
        config = config.with_output_dir(dir);
    }
    Ok(config)
}

fn wizard_command(output_dir: Option<PathBuf>, force: bool) -> Result<i32> {
    let config = build_config(output_dir, force)?;

    // A failed handler registration degrades to no interrupt mapping; the
    // wizard itself still runs.
    let signals = match SignalHandler::new() {
        Ok(signals) => signals,
        Err(e) => {
            print_warning(&e.to_string());
            SignalHandler::disabled()
        }
    };

    let mut prompter = ConsolePrompter::new();
    let result = Wizard::new(config, &mut prompter)
        .with_signals(signals)
        .run();

    // Cancellation is a first-class outcome, not an error.
    Ok(if result.success || result.cancelled { 0 } else { 1 })
}

fn check_command(feature: &str, output_dir: Option<PathBuf>) -> Result<i32> {
    let config = build_config(output_dir, false)?;
    let store = PrdStore::from_config(&config);

    match store.prd_exists(feature) {
        Some(path) => {
            println!(
                "{GREEN}Found{RESET} PRD at {BOLD}{}{RESET}",
                path.display()
            );
            Ok(0)
        }
        None => {
            println!(
                "No PRD found for {CYAN}{}{RESET} under {}",
                feature,
                store.output_dir().display()
            );
            Ok(1)
        }
    }
}
