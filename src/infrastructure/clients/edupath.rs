use crate::domain::{Course, CourseCatalog, CourseUniversityLink, Listing};
use crate::error::{CompareError, Result};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error};

pub struct EdupathClient {
    client: Client,
    base_url: String,
}

impl EdupathClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let url = self.url(endpoint);
        debug!("GET {} {:?}", url, query);

        let response = self.client.get(&url).query(query).send().await?;
        let response = Self::check_status(&url, response).await?;
        Ok(response.json().await?)
    }

    async fn check_status(url: &str, response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body: Value = response.json().await.unwrap_or(Value::Null);
        let detail = error_detail(&body);
        error!("EduPath API error: {} returned {} ({})", url, status, detail);

        Err(CompareError::Api {
            status: status.as_u16(),
            detail,
        })
    }
}

/// Picks the most useful message out of a DRF error body.
fn error_detail(body: &Value) -> String {
    ["detail", "message", "error"]
        .iter()
        .find_map(|key| body.get(*key).and_then(Value::as_str))
        .map(str::to_string)
        .unwrap_or_else(|| match body {
            Value::Null => "Request failed".to_string(),
            other => other.to_string(),
        })
}

impl CourseCatalog for EdupathClient {
    async fn list_courses(&self, search: Option<&str>) -> Result<Vec<Course>> {
        let query: Vec<(&str, &str)> = search.map(|q| vec![("search", q)]).unwrap_or_default();
        let listing: Listing<Course> = self.get_json("/courses/courses/", &query).await?;
        Ok(listing.into_results())
    }

    async fn list_course_universities(&self, course_id: &str) -> Result<Vec<CourseUniversityLink>> {
        let listing: Listing<CourseUniversityLink> = self
            .get_json("/courses/course-universities/", &[("course", course_id)])
            .await?;
        Ok(listing.into_results())
    }

    async fn get_course(&self, id: &str) -> Result<Course> {
        self.get_json(&format!("/courses/courses/{id}/"), &[]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = EdupathClient::new(Client::new(), "http://localhost:8000/api/");
        assert_eq!(client.base_url(), "http://localhost:8000/api");
        assert_eq!(
            client.url("/courses/courses/"),
            "http://localhost:8000/api/courses/courses/"
        );
    }

    #[test]
    fn error_detail_prefers_detail_field() {
        assert_eq!(error_detail(&json!({"detail": "Not found."})), "Not found.");
        assert_eq!(error_detail(&json!({"error": "bad"})), "bad");
        assert_eq!(error_detail(&Value::Null), "Request failed");
        assert_eq!(error_detail(&json!({"name": ["required"]})), r#"{"name":["required"]}"#);
    }
}
