use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use env_switch::{Profile, switch};

/// Copy .env.<profile> over .env, backing up the current .env first.
#[derive(Debug, Parser)]
#[command(name = "env-switch", version, about)]
struct Cli {
    /// Environment to activate.
    #[arg(value_enum)]
    profile: Profile,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if !err.use_stderr() => {
            // --help / --version
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            let rendered = err.render().to_string();
            eprint!("{rendered}");
            // Invalid values are reported without the usage line.
            if !rendered.contains("Usage:") {
                eprintln!("\n{}", Cli::command().render_usage());
            }
            return ExitCode::FAILURE;
        }
    };

    let cwd = match std::env::current_dir() {
        Ok(cwd) => cwd,
        Err(err) => {
            eprintln!("Error: cannot read current directory: {err}");
            return ExitCode::FAILURE;
        }
    };

    match switch(&cwd, cli.profile) {
        Ok(outcome) => {
            for line in outcome.report() {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
