//! Scan command handlers
//!
//! Handles starting, watching, checking and cancelling scans, and renders
//! the results for the terminal.

use anyhow::{Result, bail};
use colored::*;
use scanwatch_core::dto::scan::CancelScanResult;
use scanwatch_core::{Observation, Outcome, PollingReport, ScanId, ScanSession};
use tracing::warn;

use crate::prompt::prompt_scan_id;

/// Start a new scan, then watch it unless `no_wait` is set
pub async fn start(session: &ScanSession, no_wait: bool) -> Result<()> {
    let scan_id = session.start().await?;

    println!("{} Started scan {}", "✓".green(), scan_id.to_string().cyan());

    if no_wait {
        println!(
            "{}",
            format!("  Follow it with: scanwatch watch {}", scan_id).dimmed()
        );
        return Ok(());
    }

    watch(session, scan_id).await
}

/// Watch a scan until the polling session produces an outcome
///
/// Ctrl-C drops the session between probes.
pub async fn watch(session: &ScanSession, scan_id: ScanId) -> Result<()> {
    let config = session.config();
    println!(
        "{}",
        format!(
            "Watching scan {} (every {}s, up to {} checks)...",
            scan_id,
            config.poll_interval().as_secs(),
            config.max_attempts()
        )
        .dimmed()
    );

    tokio::select! {
        report = session.watch(&scan_id) => {
            print_report(&report);
            Ok(())
        }
        _ = tokio::signal::ctrl_c() => {
            warn!("Interrupted while watching scan {}", scan_id);
            bail!("Interrupted; scan {} may still be running", scan_id)
        }
    }
}

/// Probe a scan once and print what was observed
pub async fn status(session: &ScanSession, scan_id: ScanId) -> Result<()> {
    let observation = session.probe().probe(&scan_id).await;

    println!("Scan {}: {}", scan_id.to_string().cyan(), colorize_observation(observation));
    if observation == Observation::Indeterminate {
        println!(
            "{}",
            "  The service returned no status; the scan may not have started, or it may be gone."
                .dimmed()
        );
    }

    Ok(())
}

/// Report whether any scan is running
pub async fn active(session: &ScanSession) -> Result<()> {
    if session.probe().is_any_scan_active().await {
        println!("{}", "A scan is running (or its state could not be determined).".yellow());
    } else {
        println!("{}", "No scan is running.".green());
    }

    Ok(())
}

/// Cancel a scan, prompting for its ID when none was given
pub async fn cancel(session: &ScanSession, scan_id: Option<ScanId>) -> Result<()> {
    let scan_id = match scan_id {
        Some(id) => id,
        None => match prompt_scan_id().await? {
            Some(id) => id,
            None => bail!("No scan ID given"),
        },
    };

    let result = session.cancel(&scan_id).await?;
    print_cancel_result(&result);

    Ok(())
}

/// Print the outcome of a watch session
fn print_report(report: &PollingReport) {
    println!();
    println!("{}", "Scan Result:".bold());
    println!("  ID:        {}", report.scan_id.to_string().cyan());
    println!("  Outcome:   {}", colorize_outcome(report.outcome));
    println!("  Attempts:  {}", report.attempts);
    println!(
        "  Started:   {}",
        report.started_at.format("%Y-%m-%d %H:%M:%S")
    );
    println!("  Duration:  {}s", report.elapsed().num_seconds());

    if let Some(guidance) = report.outcome.guidance() {
        println!();
        println!("{}", guidance.yellow());
    }
}

/// Print the response of a cancel request
fn print_cancel_result(result: &CancelScanResult) {
    if result.canceled {
        println!("{} Cancelled scan {}", "✓".green(), result.scan_id.cyan());
    } else {
        println!("{} Scan {} was not cancelled", "✗".red(), result.scan_id.cyan());
    }

    if let Some(previous) = &result.previous_scan_id {
        println!("  Previous scan: {}", previous.dimmed());
    }

    if let Some(error) = &result.error {
        println!("\n{}", "Error:".bold());
        println!("{}", error.red());
    }
}

/// Colorize an outcome for display
fn colorize_outcome(outcome: Outcome) -> ColoredString {
    let label = outcome.to_string();
    match outcome {
        Outcome::Completed => label.green(),
        Outcome::Cancelled => label.dimmed(),
        Outcome::InitializationTimeout => label.red(),
        Outcome::MaxAttemptsReached => label.yellow(),
    }
}

/// Colorize an observation for display
fn colorize_observation(observation: Observation) -> ColoredString {
    let label = observation.to_string();
    match observation {
        Observation::Running => label.cyan(),
        Observation::Finished => label.green(),
        Observation::Indeterminate => label.yellow(),
    }
}
