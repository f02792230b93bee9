//! Plain-text rendering of suites, history and comparisons.

use std::io::{self, Write};
use std::path::PathBuf;

use testforge_core::template::supported_frameworks;
use testforge_core::{history_view, SessionStore, SuiteComparison, TestStatus, TestSuite, TestType};

fn status_marker(status: TestStatus) -> &'static str {
    match status {
        TestStatus::Passed => "PASS",
        TestStatus::Failed => "FAIL",
        TestStatus::Running => "RUN ",
        TestStatus::Skipped => "SKIP",
        TestStatus::Pending => "    ",
    }
}

pub fn print_suite(suite: &TestSuite, show_code: bool) {
    println!("{}", suite.name);
    println!("  ID: {}", suite.id);
    println!("  Framework: {}", suite.config.framework.display_name());
    println!("  Created: {}", suite.created_at.format("%Y-%m-%d %H:%M:%S"));

    let breakdown = suite.status_breakdown();
    println!(
        "  Tests: {} total, {} passed, {} failed, {} not run",
        suite.total_tests, breakdown.passed, breakdown.failed, breakdown.pending
    );
    println!("  Coverage: {}%  Duration: {}ms", suite.coverage, suite.duration_ms);
    println!();

    for case in &suite.tests {
        println!(
            "  [{}] {} ({} assertions, {}%, {}ms)",
            status_marker(case.status),
            case.name,
            case.assertions,
            case.coverage,
            case.duration_ms
        );
        if let Some(error) = &case.error {
            println!("         error: {}", error);
        }
        if let Some(fix) = &case.fix_suggestion {
            println!("         fix:   {}", fix);
        }
        if show_code {
            println!();
            for line in case.code.lines() {
                println!("    {}", line);
            }
            println!();
        }
    }
}

pub fn print_history(store: &SessionStore) {
    let rows = history_view(store);
    if rows.is_empty() {
        return;
    }

    println!();
    println!("Run history:");
    for row in rows {
        println!(
            "  {}  {:<24} {:>3} passed {:>3} failed {:>3}% {:>6}ms",
            row.timestamp.format("%H:%M:%S"),
            row.suite_name,
            row.results.passed,
            row.results.failed,
            row.results.coverage,
            row.results.duration_ms
        );
    }
}

pub fn print_comparison(diff: &SuiteComparison) {
    println!("{:<14} {:>16} {:>16} {:>8}", "", diff.left_name, diff.right_name, "delta");
    for row in &diff.rows {
        println!(
            "{:<14} {:>16} {:>16} {:>+8}",
            row.metric.display_name(),
            row.left,
            row.right,
            row.delta
        );
    }

    println!();
    let width = diff.left_cases.len().max(diff.right_cases.len());
    for i in 0..width {
        let left = diff
            .left_cases
            .get(i)
            .map(|c| format!("[{}] {}", status_marker(c.status), c.name))
            .unwrap_or_default();
        let right = diff
            .right_cases
            .get(i)
            .map(|c| format!("[{}] {}", status_marker(c.status), c.name))
            .unwrap_or_default();
        println!("  {:<40} {}", left, right);
    }
}

pub fn print_templates() {
    for test_type in TestType::ALL {
        let frameworks: Vec<&str> = supported_frameworks(test_type)
            .iter()
            .map(|fw| fw.as_str())
            .collect();
        println!("{:<14} {}", test_type.as_str(), frameworks.join(", "));
    }
}

/// Reports written files. With `json` set stdout carries the session dump,
/// so the notices go to stderr instead.
pub fn print_written(paths: &[PathBuf], json: bool) -> io::Result<()> {
    if json {
        write_written(&mut io::stderr().lock(), paths)
    } else {
        write_written(&mut io::stdout().lock(), paths)
    }
}

/// Prints the session store as pretty JSON on stdout.
pub fn print_session_json(store: &SessionStore) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_session_json(&mut out, store)
}

fn write_written(out: &mut impl Write, paths: &[PathBuf]) -> io::Result<()> {
    for path in paths {
        writeln!(out, "Wrote {}", path.display())?;
    }
    Ok(())
}

fn write_session_json(out: &mut impl Write, store: &SessionStore) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, store)?;
    writeln!(out)
}
