use clap::Parser;
use colored::Colorize;

use focus_timer::cli::args::{Cli, Commands};
use focus_timer::cli::commands;
use focus_timer::config::ColorSetting;
use focus_timer::error::FocusError;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), FocusError> {
    let cli = Cli::parse();
    let config_file = cli.config.as_deref();
    let format = cli.output;

    let output = match cli.command {
        Some(Commands::Config(args)) => {
            // A broken file must not stop `config init --force` from replacing it.
            if let Ok(config) = commands::load_config(config_file) {
                apply_color(config.general.color);
            }
            commands::config(&args.command, config_file, format)?
        }
        Some(Commands::Completions { shell }) => commands::completions(shell)?,
        Some(Commands::Run(args)) => {
            let config = commands::load_config(config_file)?;
            apply_color(config.general.color);
            commands::run(&config, &args)?;
            String::new()
        }
        None => {
            let config = commands::load_config(config_file)?;
            apply_color(config.general.color);
            commands::run(&config, &cli.run)?;
            String::new()
        }
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

fn apply_color(setting: ColorSetting) {
    match setting {
        ColorSetting::Auto => {}
        ColorSetting::Always => colored::control::set_override(true),
        ColorSetting::Never => colored::control::set_override(false),
    }
}
