use crate::domain::Course;
use crate::error::{CompareError, Result};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Eligibility {
    pub eligible: bool,
    pub user_points: f64,
    pub required_points: f64,
    pub difference: f64,
    pub message: String,
}

pub fn check_points(user_points: f64, required_points: f64) -> Result<Eligibility> {
    if !user_points.is_finite() || user_points < 0.0 {
        return Err(CompareError::InvalidInput(format!(
            "invalid cluster points: {user_points}"
        )));
    }

    let difference = user_points - required_points;
    let eligible = difference >= 0.0;
    let message = if eligible {
        "You are eligible!".to_string()
    } else {
        format!("You need {:?} more points", difference.abs())
    };

    Ok(Eligibility {
        eligible,
        user_points,
        required_points,
        difference,
        message,
    })
}

pub fn check_course(course: &Course, user_points: f64) -> Result<Eligibility> {
    match course.cluster_points {
        Some(required) if required.is_finite() => check_points(user_points, required),
        _ => Err(CompareError::InvalidMetric {
            course: course.id.clone(),
            reason: "no required cluster points published".to_string(),
        }),
    }
}
