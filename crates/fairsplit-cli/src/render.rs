//! Rendering a split for the terminal.

use std::fmt::Write as _;

use clap::ValueEnum;
use fairsplit_core::SplitResult;
use serde::Serialize;

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    #[default]
    Text,
    /// The split result as JSON
    Json,
}

/// How results are rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Suffix appended to amounts (e.g. "yen")
    pub currency: String,

    /// Output format
    pub format: OutputFormat,

    /// Also print a shareable query string
    pub share: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            currency: "yen".to_string(),
            format: OutputFormat::Text,
            share: false,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    #[serde(flatten)]
    result: &'a SplitResult,
    drinkers_paying_base: i64,
    unassigned: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    query: Option<&'a str>,
}

/// Render a split. `query` is included when sharing is enabled.
pub fn render(
    result: &SplitResult,
    query: Option<&str>,
    config: &RenderConfig,
) -> Result<String, serde_json::Error> {
    let query = query.filter(|_| config.share);

    match config.format {
        OutputFormat::Json => {
            let report = JsonReport {
                result,
                drinkers_paying_base: result.drinkers_paying_base(),
                unassigned: result.unassigned(),
                query,
            };
            serde_json::to_string_pretty(&report)
        }
        OutputFormat::Text => Ok(render_text(result, query, &config.currency)),
    }
}

fn render_text(result: &SplitResult, query: Option<&str>, currency: &str) -> String {
    let mut out = String::new();
    let amount = |units: i64| {
        if currency.is_empty() {
            units.to_string()
        } else {
            format!("{units} {currency}")
        }
    };

    // Writing to a String cannot fail.
    if result.non_drinker_count > 0 {
        let _ = writeln!(
            out,
            "Non-drinkers ({}): {} each",
            result.non_drinker_count,
            amount(result.non_drinker_pay)
        );
    }

    let drinkers = |count: i64| if count == 1 { "drinker pays" } else { "drinkers pay" };

    if result.drinker_pay_plus_one_count > 0 {
        let base = result.drinkers_paying_base();
        let plus_one = result.drinker_pay_plus_one_count;
        let _ = writeln!(out, "Drinkers ({}):", result.drinker_count);
        if base > 0 {
            let _ = writeln!(out, "  {base} {} {}", drinkers(base), amount(result.drinker_pay));
        }
        let _ = writeln!(
            out,
            "  {plus_one} {} one extra unit: {}",
            drinkers(plus_one),
            amount(result.drinker_pay + 1)
        );
    } else if result.drinker_count > 0 {
        let _ = writeln!(
            out,
            "Drinkers ({}): {} each",
            result.drinker_count,
            amount(result.drinker_pay)
        );
    }

    let _ = writeln!(out, "Total: {}", amount(result.total_check));

    let unassigned = result.unassigned();
    if unassigned != 0 {
        let _ = writeln!(out, "Note: {} not assigned to anyone", amount(unassigned));
    }

    if let Some(query) = query {
        let _ = writeln!(out, "Share: ?{query}");
    }

    out
}
