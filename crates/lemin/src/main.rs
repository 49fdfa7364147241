mod cli;
mod parser;
mod routing;

use clap::Parser;
use colored::Colorize;

fn main() {
    // clap renders its own usage text; --help and --version exit cleanly,
    // real usage mistakes exit 1 like every other failure.
    let cli = match cli::Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            std::process::exit(code);
        }
    };
    if let Err(err) = cli.run() {
        eprintln!("{} {err:#}", "error:".red().bold());
        std::process::exit(1);
    }
}
