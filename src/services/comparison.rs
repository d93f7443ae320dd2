use crate::domain::{Comparison, ComparisonSlots, MetricRow, NormalizedMetrics, RawMetrics};
use crate::services::metrics::extract_metrics;
use crate::services::normalize::min_max;
use crate::services::scoring::pick_best_value;
use tracing::warn;

/// One course ahead of normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct RawEntry {
    pub slot: usize,
    pub id: String,
    pub name: String,
    pub raw: RawMetrics,
}

/// Extracts, normalizes and scores every filled slot. Courses with malformed
/// numbers are left out of the comparison.
pub fn compare_slots(slots: &ComparisonSlots) -> Comparison {
    let entries = slots
        .filled()
        .filter_map(|(slot, state)| match extract_metrics(state) {
            Ok(raw) => Some(RawEntry {
                slot,
                id: state.course.id.clone(),
                name: state.course.name.clone(),
                raw,
            }),
            Err(e) => {
                warn!("Leaving slot {} out of the comparison: {}", slot, e);
                None
            }
        })
        .collect();

    compare_entries(entries)
}

pub fn compare_entries(entries: Vec<RawEntry>) -> Comparison {
    let column = |pick: fn(&RawMetrics) -> Option<f64>| -> Vec<Option<f64>> {
        entries.iter().map(|entry| pick(&entry.raw)).collect()
    };

    let duration = min_max(&column(|raw| raw.duration), true);
    let cost = min_max(&column(|raw| raw.cost), true);
    let cluster = min_max(&column(|raw| raw.cluster), true);
    let availability = min_max(&column(|raw| raw.availability), false);

    let rows: Vec<MetricRow> = entries
        .into_iter()
        .enumerate()
        .map(|(idx, entry)| MetricRow {
            slot: entry.slot,
            id: entry.id,
            name: entry.name,
            raw: entry.raw,
            norm: NormalizedMetrics {
                duration: duration[idx],
                cost: cost[idx],
                cluster: cluster[idx],
                availability: availability[idx],
            },
        })
        .collect();

    let best = pick_best_value(&rows);
    Comparison { rows, best }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{reduce_all, Course, CourseUniversityLink, SlotAction};
    use serde_json::json;

    fn entry(
        slot: usize,
        duration: f64,
        cost: Option<f64>,
        cluster: f64,
        availability: f64,
    ) -> RawEntry {
        RawEntry {
            slot,
            id: format!("c{}", slot + 1),
            name: format!("Course {}", slot + 1),
            raw: RawMetrics {
                duration: Some(duration),
                cost,
                cluster: Some(cluster),
                availability: Some(availability),
            },
        }
    }

    #[test]
    fn three_course_scenario() {
        let comparison = compare_entries(vec![
            entry(0, 4.0, Some(300000.0), 35.0, 3.0),
            entry(1, 4.0, Some(500000.0), 40.0, 1.0),
            entry(2, 2.0, None, 38.0, 2.0),
        ]);
        let norm: Vec<_> = comparison.rows.iter().map(|row| row.norm).collect();

        assert_eq!(norm[2].duration, 100.0);
        assert_eq!(norm[0].duration, 0.0);
        assert_eq!(norm[0].cost, 100.0);
        assert_eq!(norm[1].cost, 0.0);
        assert_eq!(norm[2].cost, 0.0);
        assert_eq!(norm[0].cluster, 100.0);
        assert_eq!(norm[1].cluster, 0.0);
        assert!((norm[2].cluster - 40.0).abs() < 1e-9);
        assert_eq!(norm[0].availability, 100.0);
        assert_eq!(norm[2].availability, 50.0);

        let best = comparison.best.unwrap();
        assert_eq!(best.id, "c1");
        assert!((best.score - 200.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn slots_flow_through_the_pipeline() {
        let course = |id: &str, duration: &str| -> Course {
            serde_json::from_value(json!({
                "id": id, "name": id, "duration": duration, "cluster_points": "38.00",
            }))
            .unwrap()
        };
        let link = |course: &str, fee: serde_json::Value| -> CourseUniversityLink {
            serde_json::from_value(json!({
                "id": format!("{course}-link"),
                "course": course,
                "university": "u",
                "fees_ksh": fee,
            }))
            .unwrap()
        };

        let select = |slot: usize, course: Course| SlotAction::Select { slot, course };
        let loaded = |slot: usize, link: CourseUniversityLink| SlotAction::LinksLoaded {
            slot,
            course_id: link.course.clone(),
            links: vec![link],
        };

        let slots = reduce_all(
            &ComparisonSlots::default(),
            vec![
                select(0, course("law", "4 years")),
                select(1, course("bad", "5 years")),
                select(2, course("nursing", "3 years")),
                loaded(0, link("law", json!("250000.00"))),
                loaded(1, link("bad", json!("TBA"))),
                loaded(2, link("nursing", json!(180000))),
            ],
        );

        let comparison = compare_slots(&slots);

        assert_eq!(comparison.ids(), vec!["law".to_string(), "nursing".to_string()]);
        assert_eq!(comparison.rows[1].slot, 2);
        assert!(comparison.is_best("nursing"));
    }

    #[test]
    fn empty_selection() {
        let comparison = compare_slots(&ComparisonSlots::default());
        assert!(comparison.rows.is_empty());
        assert_eq!(comparison.best, None);
    }
}
