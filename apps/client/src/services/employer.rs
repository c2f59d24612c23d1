//! Employer-side posting endpoints.

use reqwest::Method;

use super::ApiClient;
use crate::errors::ServiceError;
use crate::models::job::{JobPost, JobPostPayload};

/// All postings owned by the signed-in employer, applications included.
pub async fn job_posts(api: &ApiClient, token: &str) -> Result<Vec<JobPost>, ServiceError> {
    api.get_json(token, "/job-posts").await
}

pub async fn job_post(api: &ApiClient, token: &str, id: i64) -> Result<JobPost, ServiceError> {
    api.get_json(token, &format!("/job-posts/{id}")).await
}

pub async fn create_job_post(
    api: &ApiClient,
    token: &str,
    payload: &JobPostPayload,
) -> Result<JobPost, ServiceError> {
    api.send_json(Method::POST, Some(token), "/job-posts", payload).await
}

/// Partial update; the backend merges the given fields into the posting.
pub async fn update_job_post(
    api: &ApiClient,
    token: &str,
    id: i64,
    payload: &JobPostPayload,
) -> Result<JobPost, ServiceError> {
    api.send_json(Method::PATCH, Some(token), &format!("/job-posts/{id}"), payload)
        .await
}

/// Removes a posting and every application attached to it.
pub async fn delete_job_post(api: &ApiClient, token: &str, id: i64) -> Result<(), ServiceError> {
    api.delete(token, &format!("/job-posts/{id}")).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn post_body(id: i64, title: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "company_name": "Bygg & Anläggning AB",
            "job_post_title": title,
            "job_description": "Bygga hus i Göteborg",
            "location": "Göteborg",
            "employment_type": "Tillsvidareanställning",
            "expiration_date": "2025-03-01",
            "phone_number": "0701234567",
            "is_published": true,
            "applications": []
        })
    }

    #[tokio::test]
    async fn test_job_posts_lists_the_employers_postings() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/job-posts"))
            .and(header("Authorization", "Bearer access-123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                post_body(1, "Snickare"),
                post_body(2, "Målare")
            ])))
            .mount(&server)
            .await;

        let api = ApiClient::new(server.uri());
        let posts = job_posts(&api, "access-123").await.unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[1].job_post_title, "Målare");
    }

    #[tokio::test]
    async fn test_create_job_post_serializes_the_draft_payload() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/job-posts"))
            .and(body_json(serde_json::json!({
                "company_name": "Bygg & Anläggning AB",
                "job_post_title": "Snickare",
                "job_description": "Bygga hus i Göteborg",
                "location": "Göteborg",
                "employment_type": "Deltid",
                "expiration_date": "2025-03-01"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(post_body(5, "Snickare")))
            .mount(&server)
            .await;

        let api = ApiClient::new(server.uri());
        let payload = JobPostPayload {
            company_name: "Bygg & Anläggning AB".to_string(),
            job_post_title: "Snickare".to_string(),
            job_description: "Bygga hus i Göteborg".to_string(),
            location: "Göteborg".to_string(),
            employment_type: "Deltid".to_string(),
            expiration_date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        };
        let created = create_job_post(&api, "access-123", &payload).await.unwrap();
        assert_eq!(created.id, 5);
    }

    #[tokio::test]
    async fn test_update_job_post_patches_by_id() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/job-posts/5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(post_body(5, "Elektriker")))
            .mount(&server)
            .await;

        let api = ApiClient::new(server.uri());
        let payload = JobPostPayload {
            company_name: "Bygg & Anläggning AB".to_string(),
            job_post_title: "Elektriker".to_string(),
            job_description: "Dra el i nybyggen".to_string(),
            location: "Göteborg".to_string(),
            employment_type: "Deltid".to_string(),
            expiration_date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        };
        let updated = update_job_post(&api, "access-123", 5, &payload).await.unwrap();
        assert_eq!(updated.job_post_title, "Elektriker");
    }

    #[tokio::test]
    async fn test_delete_job_post_hits_the_id_route() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/job-posts/5"))
            .and(header("Authorization", "Bearer access-123"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let api = ApiClient::new(server.uri());
        delete_job_post(&api, "access-123", 5).await.unwrap();
    }

    #[tokio::test]
    async fn test_missing_posting_maps_to_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/job-posts/99"))
            .respond_with(
                ResponseTemplate::new(404)
                    .set_body_json(serde_json::json!({"detail": "Not found."})),
            )
            .mount(&server)
            .await;

        let api = ApiClient::new(server.uri());
        let err = job_post(&api, "access-123", 99).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        assert!(!err.invalidates_session());
    }
}
