//! `fairsplit`: split a bill so drinkers cover their own extra drinks.
//!
//! ```text
//! fairsplit --total 30000 --people 6 --drinkers 3 --cups 6 --cup-price 500
//! fairsplit --query 'total=10001&people=4&drinkers=2&cups=1&cupPrice=500'
//! echo '{"total":1000,"people":3,"drinkers":1,"cups":1,"cupPrice":500}' | fairsplit --json -
//! ```

mod form;
mod query;
mod render;

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use fairsplit_core::{compute, Field, SplitRequest};
use tracing_subscriber::EnvFilter;

use crate::form::SplitForm;
use crate::render::{render, OutputFormat, RenderConfig};

#[derive(Parser, Debug)]
#[command(name = "fairsplit")]
#[command(version, about = "Split a bill fairly between drinkers and non-drinkers")]
struct Cli {
    /// Total bill in whole currency units
    #[arg(long, allow_hyphen_values = true)]
    total: Option<String>,

    /// Number of participants
    #[arg(long, allow_hyphen_values = true)]
    people: Option<String>,

    /// Participants who had extra drinks
    #[arg(long, allow_hyphen_values = true)]
    drinkers: Option<String>,

    /// Extra drinks per drinker
    #[arg(long, allow_hyphen_values = true)]
    cups: Option<String>,

    /// Price of one extra drink
    #[arg(long, allow_hyphen_values = true)]
    cup_price: Option<String>,

    /// Restore fields from a query string; explicit flags win
    #[arg(long, short = 'q')]
    query: Option<String>,

    /// Read a raw JSON request from a file ("-" for stdin), skipping sanitization
    #[arg(
        long,
        conflicts_with_all = ["total", "people", "drinkers", "cups", "cup_price", "query", "share"]
    )]
    json: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, env = "FAIRSPLIT_FORMAT", default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Currency suffix for text output
    #[arg(long, env = "FAIRSPLIT_CURRENCY", default_value = "yen")]
    currency: String,

    /// Print a shareable query string for the inputs
    #[arg(long)]
    share: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn render_config(&self) -> RenderConfig {
        RenderConfig {
            currency: self.currency.clone(),
            format: self.format,
            share: self.share,
        }
    }

    /// Fields from `--query`, overridden by explicit flags.
    fn form(&self) -> SplitForm {
        let mut form = self
            .query
            .as_deref()
            .map(SplitForm::from_query)
            .unwrap_or_default();

        let flags = [
            (Field::Total, &self.total),
            (Field::People, &self.people),
            (Field::Drinkers, &self.drinkers),
            (Field::Cups, &self.cups),
            (Field::CupPrice, &self.cup_price),
        ];
        for (field, value) in flags {
            if let Some(text) = value {
                form.set(field, text);
            }
        }

        form
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("fairsplit_core={level},fairsplit={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_json_request(path: &Path) -> Result<SplitRequest> {
    let contents = if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read request from stdin")?;
        buf
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read request file {}", path.display()))?
    };

    serde_json::from_str(&contents).context("Failed to parse JSON request")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.render_config();

    let (request, query) = match &cli.json {
        Some(path) => (read_json_request(path)?, None),
        None => {
            let form = cli.form();
            (form.to_request(), Some(form.to_query()))
        }
    };
    tracing::debug!(?request, "Computing split");

    let result = compute(&request)?;

    let output = render(&result, query.as_deref(), &config).context("Failed to render result")?;
    print!("{output}");

    Ok(())
}
