use anyhow::Result;
use clap::Parser;
use std::io;

use golang_hub::app::{self, OutputFormat};
use golang_hub::clock::SystemClock;
use golang_hub::config::Config;
use golang_hub::logging;

#[derive(Parser)]
#[command(name = "golang-hub")]
#[command(author = "Golang Hub Contributors")]
#[command(version)]
#[command(about = "Golang Hub - greeting and utility demo", long_about = None)]
struct Cli {
    #[arg(short, long, help = "Enable verbose output")]
    verbose: bool,

    #[arg(long, help = "Print the report as JSON")]
    json: bool,
}

impl Cli {
    fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_logging(cli.verbose)?;

    let config = Config::load();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    app::run(config, &SystemClock, cli.output_format(), &mut out)?;

    Ok(())
}
