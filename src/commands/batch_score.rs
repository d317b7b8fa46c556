//! Batch scoring command implementation

use std::path::{Path, PathBuf};

use crate::{
    batch::{
        base_value_table, load_value_table, rank_by_score, rank_by_score_then_time,
        score_submissions, timed_value_table, write_results, BatchMode,
    },
    error::Result,
};

/// Score a submission CSV, print the ranked report, and write the results
/// CSV.
pub fn handle_batch(
    input: &Path,
    values_path: Option<PathBuf>,
    timed: bool,
    output: Option<PathBuf>,
) -> Result<()> {
    let mode = if timed { BatchMode::Timed } else { BatchMode::Base };

    let values = match values_path {
        Some(path) => load_value_table(&path)?,
        None if timed => timed_value_table(),
        None => base_value_table(),
    };

    println!("Processing {}...", input.display());
    let mut results = score_submissions(input, &values, mode)?;

    if results.is_empty() {
        println!("No data processed.");
        return Ok(());
    }

    match mode {
        BatchMode::Base => rank_by_score(&mut results),
        BatchMode::Timed => rank_by_score_then_time(&mut results),
    }

    println!();
    println!("RANKED TEAMS:");
    for (i, row) in results.iter().enumerate() {
        match mode {
            BatchMode::Base => {
                println!("{}. {}: {} points", i + 1, row.team, row.total);
            }
            BatchMode::Timed => {
                let submitted = if row.timestamp.is_empty() {
                    "N/A"
                } else {
                    row.timestamp.as_str()
                };
                println!(
                    "{}. {}: {} points (Submitted: {})",
                    i + 1,
                    row.team,
                    row.total,
                    submitted
                );
                println!("   Team Members: {}", row.members);
            }
        }
    }

    let output = output.unwrap_or_else(|| {
        PathBuf::from(match mode {
            BatchMode::Base => "team_results.csv",
            BatchMode::Timed => "team_results_ranked.csv",
        })
    });
    write_results(&output, &results, mode)?;
    println!();
    println!("Results saved to '{}'", output.display());

    Ok(())
}
