use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use numeric_field::cli::{parse_script, CliArgs, ScriptKey};
use numeric_field::config::FieldConfig;
use numeric_field::editable::{EditConstraints, EditSession};
use numeric_field::field::{EditOutcome, NumericField};

/// One line of transcript output
#[derive(Debug, Serialize)]
struct StepReport<'a> {
    key: String,
    text: &'a str,
    cursor: usize,
    outcome: String,
    /// `null` when the text doesn't parse
    value: f64,
}

fn main() -> Result<()> {
    numeric_field::tracing::init();

    let args = CliArgs::parse();

    let base = match &args.config {
        Some(path) => FieldConfig::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => FieldConfig::load(),
    };
    let config = args.apply_to(base);
    tracing::debug!("Field config: {:?}", config);

    let field = NumericField::from_config(&config).context("Invalid field config")?;
    let constraints = EditConstraints::phone().with_max_length(args.max_length);
    let mut session = EditSession::with_constraints(field, constraints);
    if !session.field.default_text().is_empty() {
        session.clear();
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.keys.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line.context("Failed to read stdin")?;
            run_script(&mut session, &line, args.json, &mut out)?;
        }
    } else {
        for script in &args.keys {
            run_script(&mut session, script, args.json, &mut out)?;
        }
    }

    Ok(())
}

fn run_script(
    session: &mut EditSession,
    script: &str,
    json: bool,
    out: &mut impl Write,
) -> Result<()> {
    let keys = parse_script(script).map_err(anyhow::Error::msg)?;

    for key in keys {
        let label = format!("{:?}", key);
        let outcome = match key {
            ScriptKey::Edit(msg) => session.handle(msg),
            ScriptKey::Clear => {
                session.clear();
                None
            }
        };

        let report = StepReport {
            key: label,
            text: session.text(),
            cursor: session.cursor(),
            outcome: describe(outcome.as_ref()),
            value: session.numeric_value(),
        };

        if json {
            writeln!(out, "{}", serde_json::to_string(&report)?)?;
        } else {
            writeln!(
                out,
                "{:<16} {:<24} {:<28} {}",
                with_cursor(report.text, report.cursor),
                report.outcome,
                report.key,
                report.value
            )?;
        }
    }

    Ok(())
}

/// Render the text with a `|` at the cursor
fn with_cursor(text: &str, cursor: usize) -> String {
    let byte = numeric_field::util::char_to_byte(text, cursor);
    format!("{}|{}", &text[..byte], &text[byte..])
}

fn describe(outcome: Option<&EditOutcome>) -> String {
    match outcome {
        None => "-".to_string(),
        Some(EditOutcome::Committed(_)) => "commit".to_string(),
        Some(EditOutcome::Reverted(reason)) => format!("revert ({})", reason),
        Some(EditOutcome::Cleared) => "cleared".to_string(),
        Some(EditOutcome::Ignored) => "ignored".to_string(),
    }
}
