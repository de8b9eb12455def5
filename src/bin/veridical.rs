//! veridical: orientation of one proposition in one parsed sentence.
//!
//! Reads an orientation request (parsed sentence + proposition tokens) from
//! the given file, or from stdin when no file or `-` is given, and prints
//! the report as JSON. Settings come from `--config` or from `VERIDICAL_*`
//! environment variables; `RUST_LOG=debug` traces every applied rule.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use veridical::{EngineConfig, OrientationRequest, Veridicity};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Request JSON file; `-` or nothing reads stdin
    input: Option<PathBuf>,
    /// Engine settings as JSON (overrides VERIDICAL_* variables)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

impl Cli {
    /// `None` means stdin.
    fn input_path(&self) -> Option<&Path> {
        self.input.as_deref().filter(|p| *p != Path::new("-"))
    }

    fn engine_config(&self) -> veridical::Result<EngineConfig> {
        match &self.config {
            Some(path) => EngineConfig::from_json_file(path),
            None => Ok(EngineConfig::from_env()),
        }
    }
}

fn read_request(path: Option<&Path>) -> veridical::Result<OrientationRequest> {
    let raw = match path {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut raw = String::new();
            io::stdin().read_to_string(&mut raw)?;
            raw
        }
    };
    Ok(serde_json::from_str(&raw)?)
}

fn run(cli: &Cli) -> veridical::Result<()> {
    let config = cli.engine_config()?;
    log::info!("lexicon: {}, solution cap: {}", config.lexicon, config.solution_cap);
    let engine = Veridicity::new(config)?;

    let request = read_request(cli.input_path())?;
    let report = engine.analyze_request(&request)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("veridical: {}", e);
        process::exit(1);
    }
}
