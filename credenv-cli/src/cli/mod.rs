//! # Command Line Interface
//!
//! Defines the CLI structure and command handlers for the credenv tool,
//! including the export, run, and setup subcommands.

mod check;
mod completion;
mod export;
mod init;
mod run;
mod shellenv;

use anyhow::Result;
use clap::builder::Styles;
use clap::builder::styling::AnsiColor;
use clap::{ArgAction, Parser, Subcommand};
use credenv_core::ColorMode;

/// Top-level CLI command for the credenv tool
#[derive(Parser)]
#[command(name = "credenv")]
#[command(display_name = "🔑 Credenv")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(about = "Export API credentials from a JSON credential file into your shell environment")]
#[command(
  long_about = "Credenv reads a JSON credential file and exports the recognized API keys\n\
        (ANTHROPIC_API_KEY and OPENAI_API_KEY) as environment variables.\n\n\
        The export command emits eval-able shell lines so the variables reach the\n\
        calling shell; the run command injects them into a child process instead."
)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(propagate_version = true)]
#[command(subcommand_required(true))]
#[command(disable_help_subcommand = true)]
#[command(max_term_width = 120)]
#[command(styles = Styles::styled()
    .header(AnsiColor::BrightGreen.on_default().bold().underline())
    .usage(AnsiColor::Green.on_default().bold())  // Make usage line stand out
    .literal(AnsiColor::BrightGreen.on_default().bold())  // Command names, flags bold
    .placeholder(AnsiColor::BrightWhite.on_default().italic())
    .valid(AnsiColor::Green.on_default())
    .invalid(AnsiColor::BrightRed.on_default().bold())
)]
pub struct Cli {
  /// Sets the level of verbosity (can be used multiple times)
  #[arg(
    short = 'v',
    long = "verbose",
    action = ArgAction::Count,
    long_help = "Sets the level of verbosity for tracing and logging output.\n\n\
             -v: Show info level messages\n\
             -vv: Show debug level messages\n\
             -vvv: Show trace level messages"
  )]
  pub verbose: u8,

  /// Controls when colored output is used
  #[arg(
    long,
    value_enum,
    ignore_case = true,
    default_value_t = ColorMode::Auto,
  )]
  pub colors: ColorMode,

  /// Subcommands
  #[command(subcommand)]
  pub command: Commands,
}

/// Subcommands for the credenv tool
#[derive(Subcommand)]
pub enum Commands {
  /// Check the credential file and report which keys it provides
  #[command(long_about = "Checks that the credential file exists, parses, and is kept private.\n\n\
            This command reports which recognized API keys the file provides, warns\n\
            about insecure file permissions, and shows an example credential file\n\
            format. It never modifies the file and never fails the shell session.")]
  Check(check::CheckArgs),

  /// Generate shell completions
  #[command(long_about = "Generates shell completion scripts for credenv commands.\n\n\
            This command generates completion scripts that provide tab completion for\n\
            credenv commands and options in your shell. Supported shells include bash,\n\
            zsh, fish, and powershell.")]
  Completion(completion::CompletionArgs),

  /// Emit eval-able export lines for the recognized credentials
  #[command(
    long_about = "Emits one eval-able export line per recognized credential on stdout.\n\n\
            Only ANTHROPIC_API_KEY and OPENAI_API_KEY are considered, in that order;\n\
            missing, null, and empty values are skipped silently. Confirmations are\n\
            written to stderr so they stay visible through an eval:\n\n\
            \x20   eval \"$(credenv export)\"\n\n\
            Use the wrapper from `credenv shellenv` to get this as a shell function."
  )]
  #[command(alias = "ex")]
  Export(export::ExportArgs),

  /// Create a template credential file
  #[command(long_about = "Creates a credential file with the recognized keys left blank.\n\n\
            The file is created with private permissions (600) on Unix. An existing\n\
            file is never overwritten unless --force is given.")]
  Init(init::InitArgs),

  /// Run a command with the recognized credentials in its environment
  #[command(
    long_about = "Runs a command with the recognized credentials exported into its\n\
            environment, without touching the calling shell:\n\n\
            \x20   credenv run -- python train.py\n\n\
            The child's exit status is propagated."
  )]
  Run(run::RunArgs),

  /// Print the shell wrapper that sources exports into the calling shell
  #[command(long_about = "Prints the credenv_load wrapper function for a shell.\n\n\
            The wrapper checks that the credenv binary is on PATH and then evaluates\n\
            the export output in the calling shell, so the variables persist for the\n\
            rest of the session. Add it to your shell configuration:\n\n\
            \x20   eval \"$(credenv shellenv bash)\"   # bash/zsh\n\
            \x20   credenv shellenv fish | source    # fish")]
  Shellenv(shellenv::ShellenvArgs),
}

pub fn handle_cli(cli: Cli) -> Result<()> {
  // Set global color override based on --colors argument
  match cli.colors {
    ColorMode::Always | ColorMode::Yes => owo_colors::set_override(true),
    ColorMode::Never | ColorMode::No => owo_colors::set_override(false),
    ColorMode::Auto => {
      // Let owo_colors use its default auto-detection
      // Don't call set_override, allowing it to detect terminal automatically
    }
  }

  match cli.command {
    Commands::Check(check) => check::handle_check_command(check),
    Commands::Completion(completion) => completion::handle_completion_command(completion),
    Commands::Export(export) => export::handle_export_command(export),
    Commands::Init(init) => init::handle_init_command(init),
    Commands::Run(run) => run::handle_run_command(run),
    Commands::Shellenv(shellenv) => shellenv::handle_shellenv_command(shellenv),
  }
}
