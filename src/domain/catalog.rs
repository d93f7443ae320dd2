use super::{Course, CourseUniversityLink};
use crate::error::Result;
use std::future::Future;

/// Read side of the EduPath course API.
pub trait CourseCatalog: Send + Sync {
    fn list_courses(
        &self,
        search: Option<&str>,
    ) -> impl Future<Output = Result<Vec<Course>>> + Send;

    fn list_course_universities(
        &self,
        course_id: &str,
    ) -> impl Future<Output = Result<Vec<CourseUniversityLink>>> + Send;

    fn get_course(&self, id: &str) -> impl Future<Output = Result<Course>> + Send;
}
