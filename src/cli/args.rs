use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use crate::features::focus::{DurationChoice, TimerMode};

#[derive(Parser)]
#[command(name = "focus-timer")]
#[command(about = "A Pomodoro focus timer with task tracking for the terminal")]
#[command(long_about = "focus-timer - A Pomodoro focus timer for the terminal

Counts down focus intervals and breaks, keeps a list of tasks to work
through, and rings when time is up. Finishing a focus interval counts a
session and completes the task you selected.

QUICK START:
  focus-timer                       Open the timer (25 minute focus)
  focus-timer --mode short          Open on a 5 minute short break
  focus-timer --minutes 45          Load a 45 minute countdown
  focus-timer --task \"Write report\" Start with a task in the list

KEYS (inside the timer):
  space start/pause   r reset   1/2/3 mode   [ ] duration
  a add task   c complete   s select   d remove   m mute   S stop alarm

Nothing is saved between runs. Settings are read from
~/.focus-timer/config.yaml (see 'focus-timer config').")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable output (default),
    /// or 'json' for machine-readable output suitable for scripting.
    #[arg(short, long, value_enum, default_value = "pretty", global = true)]
    pub output: OutputFormat,

    /// Config file path (defaults to ~/.focus-timer/config.yaml)
    #[arg(short, long, global = true, env = "FOCUS_TIMER_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub run: RunArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive timer (the default)
    ///
    /// # Examples
    ///
    ///   focus-timer run
    ///   focus-timer run --mode long --muted
    #[command(alias = "r")]
    Run(RunArgs),

    /// Inspect or create the configuration file
    Config(ConfigArgs),

    /// Generate shell completions
    ///
    /// # Examples
    ///
    ///   focus-timer completions bash > ~/.local/share/bash-completion/completions/focus-timer
    ///   focus-timer completions zsh > ~/.zsh/completions/_focus-timer
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Options for the interactive timer.
#[derive(Args, Clone, Debug, Default)]
pub struct RunArgs {
    /// Mode to open in: focus, short or long (overrides config)
    #[arg(short, long, value_name = "MODE", value_parser = parse_mode)]
    pub mode: Option<TimerMode>,

    /// Custom countdown length in minutes: 15, 25, 30, 45 or 60
    #[arg(long, value_parser = parse_minutes)]
    pub minutes: Option<DurationChoice>,

    /// Pre-populate the task list (repeatable)
    #[arg(short, long = "task", value_name = "TEXT")]
    pub tasks: Vec<String>,

    /// Start with the alarm muted
    #[arg(long)]
    pub muted: bool,

    /// Never make a sound; only the visual alert is shown
    #[arg(long)]
    pub no_sound: bool,

    /// Write logs here instead of ~/.focus-timer/focus-timer.log
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,
    /// Print the config file location
    Path,
    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

fn parse_mode(s: &str) -> Result<TimerMode, String> {
    TimerMode::parse(s).ok_or_else(|| format!("'{s}' is not a mode; choose focus, short or long"))
}

fn parse_minutes(s: &str) -> Result<DurationChoice, String> {
    let minutes: u32 = s
        .trim()
        .trim_end_matches('m')
        .parse()
        .map_err(|_| format!("'{s}' is not a number of minutes"))?;
    DurationChoice::from_minutes(minutes)
        .ok_or_else(|| format!("{minutes} is not offered; choose 15, 25, 30, 45 or 60"))
}
