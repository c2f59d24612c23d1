//! Candidate-side endpoints: browsing postings, the CV and its entries,
//! and applying to jobs.

use reqwest::Method;

use super::ApiClient;
use crate::errors::ServiceError;
use crate::models::job::JobPost;
use crate::models::profile::{
    CvUpdate, Education, EducationPayload, JobSeekerCv, WorkExperience, WorkExperiencePayload,
};

/// Published, unexpired postings the candidate has not yet applied to.
pub async fn available_job_posts(
    api: &ApiClient,
    token: &str,
) -> Result<Vec<JobPost>, ServiceError> {
    api.get_json(token, "/available-job-posts").await
}

pub async fn cv(api: &ApiClient, token: &str) -> Result<JobSeekerCv, ServiceError> {
    api.get_json(token, "/cv").await
}

/// Partial contact-detail update; the backend creates the CV on first use.
pub async fn update_cv(
    api: &ApiClient,
    token: &str,
    update: &CvUpdate,
) -> Result<JobSeekerCv, ServiceError> {
    api.send_json(Method::PATCH, Some(token), "/cv", update).await
}

pub async fn create_work_experience(
    api: &ApiClient,
    token: &str,
    payload: &WorkExperiencePayload,
) -> Result<WorkExperience, ServiceError> {
    api.send_json(Method::POST, Some(token), "/work-experiences", payload).await
}

pub async fn update_work_experience(
    api: &ApiClient,
    token: &str,
    id: i64,
    payload: &WorkExperiencePayload,
) -> Result<WorkExperience, ServiceError> {
    api.send_json(Method::PUT, Some(token), &format!("/work-experiences/{id}"), payload)
        .await
}

pub async fn delete_work_experience(
    api: &ApiClient,
    token: &str,
    id: i64,
) -> Result<(), ServiceError> {
    api.delete(token, &format!("/work-experiences/{id}")).await
}

pub async fn create_education(
    api: &ApiClient,
    token: &str,
    payload: &EducationPayload,
) -> Result<Education, ServiceError> {
    api.send_json(Method::POST, Some(token), "/educations", payload).await
}

pub async fn update_education(
    api: &ApiClient,
    token: &str,
    id: i64,
    payload: &EducationPayload,
) -> Result<Education, ServiceError> {
    api.send_json(Method::PUT, Some(token), &format!("/educations/{id}"), payload)
        .await
}

pub async fn delete_education(api: &ApiClient, token: &str, id: i64) -> Result<(), ServiceError> {
    api.delete(token, &format!("/educations/{id}")).await
}

/// Applies to a posting. The backend files the application against the
/// candidate's CV, creating the CV first if none exists.
pub async fn apply_to_job(api: &ApiClient, token: &str, job_id: i64) -> Result<(), ServiceError> {
    api.post_empty(token, &format!("/job-posts/{job_id}/apply")).await
}

/// Withdraws the candidate's application to the given posting.
pub async fn withdraw_application(
    api: &ApiClient,
    token: &str,
    job_id: i64,
) -> Result<(), ServiceError> {
    api.delete(token, &format!("/job-posts/{job_id}/application")).await
}
