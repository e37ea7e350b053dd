//! Export command: retrieve the CrowdScore window, optionally display it,
//! and write it to CSV.

use std::path::PathBuf;

use anyhow::Result;
use crowdscore_core::{
    Credentials, CrowdScoreApi, ExportOutcome, Paginator, Region, ScoreRecord, ScoreSource,
    TableFormatter, TableStyle, export_csv, window_start,
};
use owo_colors::OwoColorize;
use tracing::debug;

#[derive(Debug)]
pub struct ExportOptions {
    pub credentials: Credentials,
    pub region: Region,
    pub time_window_days: u32,
    pub show_data: bool,
    pub reverse: bool,
    pub output: PathBuf,
}

/// Retrieve, display and export CrowdScores from the Falcon API.
pub fn run(options: ExportOptions) -> Result<()> {
    let mut api = CrowdScoreApi::new(options.credentials.clone(), options.region);
    debug!("Using endpoint {}", api.base_url());

    let outcome = run_with(&mut api, &options)?;
    print_outcome(&outcome);
    Ok(())
}

/// Retrieve the window from `source`, then display and export it.
///
/// A failed page aborts before anything is displayed or written; export
/// failures are only reported through the returned outcome.
pub fn run_with<S: ScoreSource + ?Sized>(
    source: &mut S,
    options: &ExportOptions,
) -> Result<ExportOutcome> {
    let since = window_start(options.time_window_days)?;

    eprintln!(
        "Retrieving CrowdScores since {} ({} days)...",
        since.format("%Y-%m-%d %H:%M:%SZ"),
        options.time_window_days
    );
    let scores = Paginator::new().collect(source, since)?;

    Ok(present(&scores, options))
}

/// Display (when requested) and export a complete result set.
pub fn present(scores: &[ScoreRecord], options: &ExportOptions) -> ExportOutcome {
    if options.show_data {
        let formatter = TableFormatter::new(TableStyle::default());
        let table = formatter.format(scores, options.reverse);
        println!("\n{}\n", formatter.render(&table));
    }

    export_csv(scores, &options.output)
}

fn print_outcome(outcome: &ExportOutcome) {
    match outcome {
        ExportOutcome::Written { .. } => println!("\n{}", outcome.green()),
        ExportOutcome::NoData => println!("{}", outcome.yellow()),
        ExportOutcome::Failed { .. } => println!("\n{}", outcome.red()),
    }
}
