use std::path::PathBuf;
use std::process;

use clap::Parser;
use scaffold_check::config::ValidatorConfig;

/// Verify that the extension scaffold has the expected files, interfaces and wiring.
#[derive(Parser)]
#[command(name = "scaffold-check")]
struct Cli {
    /// Directory the scaffold is resolved against (defaults to the current directory)
    #[arg(long)]
    root_dir: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let config = match cli.root_dir {
        Some(dir) => ValidatorConfig::from_root(&dir),
        None => match ValidatorConfig::current() {
            Ok(c) => c,
            Err(err) => {
                eprintln!("Error: Could not determine the working directory: {err}");
                process::exit(1);
            }
        },
    };

    let mut stdout = std::io::stdout();
    let all_passed = match scaffold_check::run(&mut stdout, &config) {
        Ok(passed) => passed,
        Err(err) => {
            eprintln!("{err}");
            false
        }
    };

    process::exit(if all_passed { 0 } else { 1 });
}
