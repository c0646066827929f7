use anyhow::{Context, Result};
use coderule_cli::reports::{
    LengthReport, PreviewReport, PreviewRequest, ValidationOutcome, kind_rows, length_report,
    preview_report, validation_outcome,
};
use coderule_cli::rules::load_rule;
use coderule_render::{FixedClock, PreviewOptions, Renderer, SystemClock};
use serde::Serialize;
use tracing::info_span;

use crate::cli::{LengthArgs, PreviewArgs, RuleArgs, ValidateArgs};
use crate::summary::{print_kinds, print_length, print_preview, print_validation};

pub fn run_kinds() -> Result<()> {
    print_kinds(&kind_rows());
    Ok(())
}

pub fn run_length(args: &LengthArgs) -> Result<LengthReport> {
    let _guard = info_span!("length", rule = %args.rule.rule.display()).entered();
    let rule = load_rule(&args.rule.rule)?;
    let report = length_report(&rule);
    emit(&args.rule, &report, print_length)?;
    Ok(report)
}

pub fn run_preview(args: &PreviewArgs) -> Result<PreviewReport> {
    let _guard = info_span!("preview", rule = %args.rule.rule.display()).entered();
    let rule = load_rule(&args.rule.rule)?;
    let request = PreviewRequest {
        options: PreviewOptions::new()
            .with_editable_text(args.editable || !args.fill.is_empty())
            .with_auto_increment_offset(args.offset),
        count: args.count,
        current: args.current,
        fills: args.fill.clone(),
        with_checksum: args.with_checksum,
    };
    let report = match args.date {
        Some(date) => preview_report(&rule, &request, &Renderer::with_clock(FixedClock::new(date))),
        None => preview_report(&rule, &request, &Renderer::<SystemClock>::new()),
    }
    .context("fill user input")?;
    emit(&args.rule, &report, print_preview)?;
    Ok(report)
}

pub fn run_validate(args: &ValidateArgs) -> Result<ValidationOutcome> {
    let _guard = info_span!("validate", rule = %args.rule.rule.display()).entered();
    let rule = load_rule(&args.rule.rule)?;
    let outcome = validation_outcome(&rule);
    emit(&args.rule, &outcome, print_validation)?;
    Ok(outcome)
}

fn emit<T: Serialize>(args: &RuleArgs, value: &T, print_table: fn(&T)) -> Result<()> {
    if args.json {
        let json = serde_json::to_string_pretty(value).context("serialize output")?;
        println!("{json}");
    } else {
        print_table(value);
    }
    Ok(())
}
