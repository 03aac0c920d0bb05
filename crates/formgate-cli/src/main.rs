//! formgate CLI
//!
//! Command-line tool for checking submission payloads against the
//! authentication form flows.

use std::collections::HashMap;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{warn, Level};
use tracing_subscriber::FmtSubscriber;

use formgate_dom::FieldValue;
use formgate_flows::Flow;
use formgate_forms::{FormValidator, Submission};

/// Client-side validation for the authentication pages, runnable headless.
#[derive(Parser)]
#[command(name = "formgate")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a submission payload against a flow.
    ///
    /// The payload is a JSON object mapping field ids to values: strings
    /// for text inputs, booleans for checkboxes. Exits with status 1 when
    /// the submission would be suppressed.
    Check {
        /// Flow to validate against (forgot, reset, registration).
        #[arg(short, long)]
        flow: Flow,

        /// Payload file (stdin if not given).
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Emit failures as JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// List the rules a flow enforces.
    Rules {
        /// Flow to describe (forgot, reset, registration).
        #[arg(short, long)]
        flow: Flow,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Check { flow, input, json } => check(flow, input.as_deref(), json),
        Commands::Rules { flow } => {
            rules(flow);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn check(flow: Flow, input: Option<&Path>, json: bool) -> anyhow::Result<ExitCode> {
    let payload = read_payload(input)?;

    let mut page = flow.blank_page();
    for (id, value) in &payload {
        match page.get_mut(id) {
            Some(element) => match value {
                FieldValue::Text(text) => element.set_value(text.clone()),
                FieldValue::Checked(checked) => element.set_checked(*checked),
            },
            None => warn!(field = %id, %flow, "payload field is not on the page"),
        }
    }

    let validator = FormValidator::attach(flow.binding(), &page)?;
    match validator.handle_submit(&mut page)? {
        Submission::Allowed => {
            println!("{flow}: submission allowed");
            Ok(ExitCode::SUCCESS)
        }
        Submission::Suppressed(errors) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&errors)?);
            } else {
                println!("{flow}: submission suppressed");
                // Report in rule declaration order.
                for rule in &validator.binding().rules {
                    if let Some(messages) = errors.get(&rule.field) {
                        for message in messages {
                            println!("  {}: {message}", rule.field);
                        }
                    }
                }
            }
            Ok(ExitCode::from(1))
        }
    }
}

fn read_payload(input: Option<&Path>) -> anyhow::Result<HashMap<String, FieldValue>> {
    match input {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
            serde_json::from_reader(file)
                .with_context(|| format!("{} is not a JSON object of field values", path.display()))
        }
        None => serde_json::from_reader(std::io::stdin())
            .context("stdin is not a JSON object of field values"),
    }
}

fn rules(flow: Flow) {
    let binding = flow.binding();
    println!("{flow} ({})", binding.form);
    for rule in &binding.rules {
        let container = rule.error_element.as_deref().unwrap_or("-");
        println!("  {:<18} {:<14} {}", rule.field, container, rule.rule.message());
    }
}
