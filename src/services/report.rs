use crate::domain::{Comparison, Course, MetricRow, RecentComparisons};
use crate::services::eligibility::Eligibility;
use chrono::{Local, TimeZone};
use std::fmt::Write;

const MISSING: &str = "—";

fn fmt_opt(value: Option<f64>, fmt: impl Fn(f64) -> String) -> String {
    value.map(fmt).unwrap_or_else(|| MISSING.to_string())
}

/// Plain-text comparison table, one column per course.
pub fn render_comparison(comparison: &Comparison) -> String {
    let mut out = String::new();
    if comparison.rows.is_empty() {
        out.push_str("No courses to compare.\n");
        return out;
    }

    let _ = write!(out, "{:<22}", "");
    for row in &comparison.rows {
        let mut label = row.name.clone();
        if comparison.is_best(&row.id) {
            label.push_str(" ★");
        }
        let _ = write!(out, "{:<28}", truncate(&label, 26));
    }
    out.push('\n');

    let lines: [(&str, fn(&MetricRow) -> String); 4] = [
        ("Duration (years)", |r| fmt_opt(r.raw.duration, |v| format!("{v}"))),
        ("Lowest fee (KSh)", |r| fmt_opt(r.raw.cost, |v| format!("{v:.0}"))),
        ("Cluster points", |r| fmt_opt(r.raw.cluster, |v| format!("{v:.2}"))),
        ("Universities", |r| fmt_opt(r.raw.availability, |v| format!("{v:.0}"))),
    ];

    for (label, cell) in &lines {
        let _ = write!(out, "{:<22}", label);
        for row in &comparison.rows {
            let _ = write!(out, "{:<28}", cell(row));
        }
        out.push('\n');
    }

    if let Some(best) = &comparison.best {
        if let Some(row) = comparison.rows.iter().find(|row| row.id == best.id) {
            let _ = writeln!(out, "\nBest value: {} ({:.1}/100)", row.name, best.score);
        }
    }

    out
}

pub fn render_courses(courses: &[Course]) -> String {
    if courses.is_empty() {
        return "No results.\n".to_string();
    }

    courses.iter().fold(String::new(), |mut out, course| {
        let _ = writeln!(
            out,
            "{:<38} {:<40} {:<12} {}",
            course.id,
            truncate(&course.name, 38),
            course.duration.as_deref().unwrap_or(MISSING),
            fmt_opt(course.cluster_points, |v| format!("{v:.2}")),
        );
        out
    })
}

pub fn render_history(history: &RecentComparisons) -> String {
    if history.is_empty() {
        return "No saved comparisons.\n".to_string();
    }

    history
        .iter()
        .enumerate()
        .fold(String::new(), |mut out, (idx, entry)| {
            let when = Local
                .timestamp_millis_opt(entry.ts)
                .single()
                .map(|ts| ts.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|| entry.ts.to_string());
            let _ = writeln!(out, "[{idx}] {when}  {}", entry.ids.join(", "));
            out
        })
}

pub fn render_eligibility(eligibility: &Eligibility) -> String {
    format!(
        "{}\nYour points: {:.2}  Required: {:.2}  Difference: {:+.2}\n",
        eligibility.message,
        eligibility.user_points,
        eligibility.required_points,
        eligibility.difference
    )
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max.saturating_sub(1)).collect();
    cut.push('…');
    cut
}
