use std::io::{self, BufRead, IsTerminal, Write};

use clap::Parser;
use toycalc::{
    config::{DisplayConfig, FormatMode, parse_precision},
    evaluate_with,
    shell::{Reply, Shell},
};
use tracing_subscriber::EnvFilter;

/// toycalc evaluates arithmetic expressions over complex numbers.
///
/// With an expression on the command line it prints the result and exits.
/// Without one it reads expressions and `set` commands from stdin, one per
/// line.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// How results are displayed.
    #[arg(short, long, value_enum)]
    format: Option<FormatMode>,

    /// Digits after the decimal point, 0 to 20.
    #[arg(short, long, value_parser = parse_precision)]
    precision: Option<u8>,

    /// The expression to evaluate. Words are joined with spaces.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    expression: Vec<String>,
}

fn main() {
    init_logging();
    let args = Args::parse();

    let mut config = DisplayConfig::default();
    if let Some(mode) = args.format {
        config.set_mode(mode);
    }
    if let Some(precision) = args.precision
       && let Err(e) = config.set_precision(precision)
    {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    if args.expression.is_empty() {
        run_shell(config);
        return;
    }

    match evaluate_with(&args.expression.join(" "), &config) {
        Ok(result) => println!("{result}"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        },
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("TOYCALC_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .without_time()
                             .with_target(false)
                             .init();
}

fn run_shell(config: DisplayConfig) {
    let interactive = io::stdin().is_terminal();
    let mut shell = Shell::new(config);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        if interactive {
            print!(">>> ");
            let _ = io::stdout().flush();
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("Failed to read input: {e}");
                std::process::exit(1);
            },
        };

        match shell.execute(&line) {
            Reply::Quit => break,
            Reply::Silent => {},
            Reply::Output(result) => println!("{result}"),
            Reply::Failure(message) => eprintln!("{message}"),
        }
    }
}
