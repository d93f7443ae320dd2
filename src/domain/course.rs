use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_f64")]
    pub cluster_points: Option<f64>,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "string_list")]
    pub modules: Vec<String>,
    #[serde(default, deserialize_with = "string_list")]
    pub career_paths: Vec<String>,
    #[serde(default, deserialize_with = "string_list")]
    pub mandatory_subjects: Vec<String>,
    #[serde(default, deserialize_with = "string_list")]
    pub alternative_subjects: Vec<String>,
    #[serde(default, deserialize_with = "string_list")]
    pub cluster_subjects: Vec<String>,
}

/// A course as offered by one university.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseUniversityLink {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    #[serde(deserialize_with = "id_string")]
    pub course: String,
    #[serde(deserialize_with = "id_string")]
    pub university: String,
    #[serde(deserialize_with = "lenient_f64")]
    pub fees_ksh: f64,
    #[serde(default, deserialize_with = "lenient_opt_f64")]
    pub cutoff_points: Option<f64>,
    #[serde(default)]
    pub application_deadline: Option<String>,
    #[serde(default)]
    pub course_url: Option<String>,
}

/// List endpoints answer either with a DRF page or a bare array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Listing<T> {
    Page { results: Vec<T> },
    Bare(Vec<T>),
}

impl<T> Listing<T> {
    pub fn into_results(self) -> Vec<T> {
        match self {
            Listing::Page { results } => results,
            Listing::Bare(results) => results,
        }
    }
}

/// Mirrors JavaScript `Number()`: numbers pass through, numeric strings are
/// parsed, anything else becomes NaN.
fn coerce_number(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) if s.trim().is_empty() => 0.0,
        Value::String(s) => s.trim().parse().unwrap_or(f64::NAN),
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Null => 0.0,
        _ => f64::NAN,
    }
}

fn lenient_f64<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_number(&value))
}

fn lenient_opt_f64<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(v) => Some(coerce_number(&v)),
    })
}

/// Accepts `"abc"`, `42` or a nested object carrying an `id`.
fn id_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Object(map) => match map.get("id") {
            Some(Value::String(s)) => Ok(s.clone()),
            Some(Value::Number(n)) => Ok(n.to_string()),
            _ => Err(serde::de::Error::custom("nested object without an id")),
        },
        other => Err(serde::de::Error::custom(format!(
            "expected an id, got {other}"
        ))),
    }
}

fn string_list<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
