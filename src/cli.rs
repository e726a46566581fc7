// src/cli.rs

use clap::Parser;
use scano_client::config::Overrides;
use std::path::PathBuf;

/// Terminal client for the Scano web security scanner
#[derive(Parser, Debug)]
#[command(name = "scano")]
#[command(version)]
#[command(about = "Request a Scano security scan and browse the report in the terminal", long_about = None)]
pub struct Args {
    /// URL or hostname to scan (pre-fills the input box in interactive mode)
    pub target: Option<String>,

    /// Scano backend address, e.g. http://10.0.0.5:8000 or https://tools.example.org/scano
    #[arg(long, env = "SCANO_BASE_URL", value_name = "URL")]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long = "timeout", env = "SCANO_TIMEOUT", value_name = "SECS")]
    pub timeout_secs: Option<u64>,

    /// Config file (defaults to config.toml in the platform config directory)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Scan TARGET once and print a plain-text report instead of starting the UI
    #[arg(long, requires = "target", conflicts_with = "pdf")]
    pub print: bool,

    /// Open the PDF report for TARGET in the browser and exit
    #[arg(long, requires = "target")]
    pub pdf: bool,
}

impl Args {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
        }
    }
}
