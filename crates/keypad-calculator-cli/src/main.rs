//! kcalc: keypad calculator for the terminal
//!
//! ## Usage
//!
//! ```bash
//! kcalc press 3 + 4 x 2 =          # prints 14
//! kcalc press --steps 12.5 / 5 =   # display after every key
//! kcalc press -f json 1000 -       # display plus raw state
//! kcalc repl                       # one key sequence per line
//! kcalc keypad                     # print the keypad layout
//! ```

use std::io;
use std::process::ExitCode;

use clap::Parser;
use kcalc::{build_config, Cli, CliResult, Commands, KeyRunner, OutputFormat, Verbosity};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbosity: Verbosity) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(verbosity.log_filter())),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = build_config(&cli)?;
    init_tracing(config.verbosity);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Press(args) => {
            KeyRunner::new(&config, args.format.into()).run_press(&args, &mut out)
        }
        Commands::Repl(args) => {
            let stdin = io::stdin();
            KeyRunner::new(&config, OutputFormat::Text).run_repl(
                &args,
                &mut stdin.lock(),
                &mut out,
            )
        }
        Commands::Keypad => KeyRunner::new(&config, OutputFormat::Text).run_keypad(&mut out),
    }
}
