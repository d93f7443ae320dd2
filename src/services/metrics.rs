use crate::domain::{CourseUniversityLink, RawMetrics, SlotState};
use crate::error::{CompareError, Result};
use once_cell::sync::Lazy;
use regex::Regex;

static YEARS_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+(?:\.\d+)?)").expect("valid duration regex"));

/// Pulls the first numeral out of a free-text duration such as `"4 years"`.
pub fn parse_duration_years(duration: Option<&str>) -> Option<f64> {
    let duration = duration?;
    let numeral = YEARS_PATTERN.captures(duration)?.get(1)?;
    numeral.as_str().parse().ok()
}

/// Cheapest fee across the universities offering a course. NaN fees are
/// carried through so the caller can reject them.
pub fn min_fee(links: Option<&[CourseUniversityLink]>) -> Option<f64> {
    let links = links.filter(|links| !links.is_empty())?;
    Some(links.iter().map(|link| link.fees_ksh).fold(f64::INFINITY, |acc, fee| {
        if acc.is_nan() || fee.is_nan() {
            f64::NAN
        } else {
            acc.min(fee)
        }
    }))
}

/// Raw comparison dimensions for one filled slot.
///
/// Any non-finite value rejects the course instead of letting NaN leak into
/// the normalized scores.
pub fn extract_metrics(slot: &SlotState) -> Result<RawMetrics> {
    let course = &slot.course;
    let links = slot.links();

    let metrics = RawMetrics {
        duration: parse_duration_years(course.duration.as_deref()),
        cost: min_fee(links),
        cluster: course.cluster_points,
        availability: links.map(|links| links.len() as f64),
    };

    for (dimension, value) in [
        ("duration", metrics.duration),
        ("cost", metrics.cost),
        ("cluster", metrics.cluster),
    ] {
        if let Some(value) = value {
            if !value.is_finite() {
                return Err(CompareError::InvalidMetric {
                    course: course.id.clone(),
                    reason: format!("{dimension} is not a number ({value})"),
                });
            }
        }
    }

    Ok(metrics)
}
