//! Custom assertions for nimbus output.

use crate::world::CliResult;
use anyhow::Result;
use predicates::prelude::*;

/// Assert that the command succeeded, reporting stderr when it did not.
pub fn assert_success(result: &CliResult) -> Result<()> {
    if !result.success() {
        anyhow::bail!(
            "Command failed with {}:\nstdout: {}\nstderr: {}",
            result.status,
            result.stdout,
            result.stderr
        );
    }
    Ok(())
}

/// Assert that the command failed with the CLI's `Error:` prefix.
pub fn assert_cli_error(result: &CliResult, fragment: &str) -> Result<()> {
    if result.success() {
        anyhow::bail!("Expected failure, got success:\n{}", result.stdout);
    }

    let expected = predicate::str::starts_with("Error: ").and(predicate::str::contains(fragment));
    if !expected.eval(result.stderr.as_str()) {
        anyhow::bail!(
            "stderr does not report '{}':\n{}",
            fragment,
            result.stderr
        );
    }
    Ok(())
}

/// Assert the exact history lines printed by `history`, ignoring numbering.
pub fn assert_history_listing(result: &CliResult, expected: &[&str]) -> Result<()> {
    let lines: Vec<&str> = result
        .stdout
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| line.split_once(".  \t").map_or(line, |(_, rest)| rest))
        .collect();

    if lines != expected {
        anyhow::bail!("Expected history {:?}, got {:?}", expected, lines);
    }
    Ok(())
}
