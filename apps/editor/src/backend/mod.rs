//! Backend client — the single point of entry for every HTTP call this
//! layer makes.
//!
//! ARCHITECTURAL RULE: no component talks to the network directly; they all
//! go through `BackendClient`. The server's behavior is out of scope here —
//! only the contract the client relies on is encoded.

#![allow(dead_code)]

use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::EditorError;
use crate::models::record::Record;

pub mod sse;

use sse::SseLineBuffer;

const SAVE_EDITS_ENDPOINT: &str = "/save-cv-edits";
const CUSTOMIZE_ENDPOINT: &str = "/customize-cv-for-job";
const PROCESS_PDF_ENDPOINT: &str = "/process-pdf";
const ADD_FIELD_ENDPOINT: &str = "/add-field";
const SUMMARY_ENDPOINT: &str = "/generate-professional-summary";
const EXPERIENCE_ENDPOINT: &str = "/generate-experience-description";

#[derive(Debug, Deserialize)]
struct SaveResponse {
    status: String,
    message: Option<String>,
}

#[derive(Debug, Serialize)]
struct CustomizeRequest<'a> {
    #[serde(rename = "jobDescription")]
    job_description: &'a str,
    #[serde(rename = "careerGoals")]
    career_goals: &'a str,
    #[serde(rename = "cvData")]
    cv_data: &'a Record,
}

#[derive(Debug, Deserialize)]
struct CustomizeResponse {
    #[serde(rename = "customizedCV")]
    customized_cv: Record,
}

/// Best-effort shape of an error reply body.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, Deserialize)]
struct PdfResponse {
    redirect: Option<String>,
}

/// Where the export flow should send the user next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Redirect(String),
    /// No explicit redirect: fall through to the PDF preview page.
    PreviewPdf,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryRequest {
    pub first_name: String,
    pub last_name: String,
    pub guidance: String,
    pub ui_lang: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExperienceRequest {
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    pub ui_lang: String,
}

/// The HTTP client shared by all components.
#[derive(Clone)]
pub struct BackendClient {
    client: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: String, timeout_secs: u64) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .expect("Failed to build HTTP client"),
            base_url,
        }
    }

    /// Idempotent upsert of the résumé, keyed by server-side session
    /// identity. A 200 reply may still reject the save via its `status`
    /// field.
    pub async fn save_record(&self, record: &Record) -> Result<(), EditorError> {
        let url = format!("{}{SAVE_EDITS_ENDPOINT}", self.base_url);
        let response = self.client.post(&url).json(record).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(error_from(status, response).await);
        }

        let ack: SaveResponse = response.json().await?;
        if ack.status == "success" {
            debug!("résumé saved to backend");
            Ok(())
        } else {
            Err(EditorError::SaveRejected(
                ack.message.unwrap_or_else(|| "Unknown error".to_string()),
            ))
        }
    }

    /// Sends the current Record plus the job context; returns the tailored
    /// Record the model produced.
    pub async fn customize_for_job(
        &self,
        job_description: &str,
        career_goals: &str,
        cv_data: &Record,
    ) -> Result<Record, EditorError> {
        let url = format!("{}{CUSTOMIZE_ENDPOINT}", self.base_url);
        let request = CustomizeRequest {
            job_description,
            career_goals,
            cv_data,
        };

        let response = self.client.post(&url).json(&request).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(error_from(status, response).await);
        }

        let reply: CustomizeResponse = response.json().await?;
        Ok(reply.customized_cv)
    }

    /// Kicks off PDF generation for the résumé already saved server-side.
    /// The reply is either JSON with an optional redirect target or a
    /// plain navigation fall-through.
    pub async fn process_pdf(&self) -> Result<Navigation, EditorError> {
        let url = format!("{}{PROCESS_PDF_ENDPOINT}", self.base_url);
        let response = self.client.post(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(error_from(status, response).await);
        }

        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.contains("application/json"));
        if !is_json {
            return Ok(Navigation::PreviewPdf);
        }

        let reply: PdfResponse = response.json().await?;
        Ok(match reply.redirect {
            Some(target) => Navigation::Redirect(target),
            None => Navigation::PreviewPdf,
        })
    }

    /// Fetches the HTML fragment for one new repeatable entry.
    pub async fn field_fragment(&self, kind: &str) -> Result<String, EditorError> {
        let url = format!("{}{ADD_FIELD_ENDPOINT}/{kind}", self.base_url);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(error_from(status, response).await);
        }
        Ok(response.text().await?)
    }

    pub async fn stream_summary(
        &self,
        request: &SummaryRequest,
        on_text: &mut dyn FnMut(&str),
    ) -> Result<String, EditorError> {
        self.stream_field(SUMMARY_ENDPOINT, request, "summary", on_text)
            .await
    }

    pub async fn stream_experience_description(
        &self,
        request: &ExperienceRequest,
        on_text: &mut dyn FnMut(&str),
    ) -> Result<String, EditorError> {
        self.stream_field(EXPERIENCE_ENDPOINT, request, "description", on_text)
            .await
    }

    /// POSTs `payload` and consumes the SSE reply incrementally. Each
    /// `data:` line carries the cumulative text under `key`; every parsed
    /// payload replaces the previous one through `on_text`. Malformed
    /// payloads are logged and dropped, the stream continues, and the last
    /// successfully parsed text is what remains if the stream ends early.
    /// No retry, no cancellation.
    async fn stream_field<T: Serialize>(
        &self,
        endpoint: &str,
        payload: &T,
        key: &str,
        on_text: &mut dyn FnMut(&str),
    ) -> Result<String, EditorError> {
        let url = format!("{}{endpoint}", self.base_url);
        let mut response = self
            .client
            .post(&url)
            .header(ACCEPT, "text/event-stream")
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(error_from(status, response).await);
        }

        let mut lines = SseLineBuffer::new();
        let mut latest = String::new();
        while let Some(chunk) = response.chunk().await? {
            for data in lines.push(&chunk) {
                apply_payload(&data, key, &mut latest, on_text);
            }
        }
        if let Some(data) = lines.finish() {
            apply_payload(&data, key, &mut latest, on_text);
        }

        Ok(latest)
    }
}

fn apply_payload(data: &str, key: &str, latest: &mut String, on_text: &mut dyn FnMut(&str)) {
    match serde_json::from_str::<serde_json::Value>(data) {
        Ok(value) => {
            if let Some(text) = value.get(key).and_then(serde_json::Value::as_str) {
                latest.clear();
                latest.push_str(text);
                on_text(text);
            }
        }
        Err(e) => warn!("dropping malformed stream payload: {e}"),
    }
}

/// Best-effort message extraction from a non-OK reply: the `error` field if
/// the body parses, the raw body otherwise.
async fn error_from(status: StatusCode, response: Response) -> EditorError {
    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body)
        .map(|b| b.error)
        .unwrap_or(body);
    EditorError::Backend {
        status: status.as_u16(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header;
    use axum::response::IntoResponse;
    use axum::routing::{get, post};
    use axum::{Json, Router};

    async fn spawn_backend(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn client(base_url: String) -> BackendClient {
        BackendClient::new(base_url, 5)
    }

    #[tokio::test]
    async fn test_save_record_accepts_success_status() {
        let app = Router::new().route(
            "/save-cv-edits",
            post(|Json(_body): Json<serde_json::Value>| async {
                Json(serde_json::json!({"status": "success", "message": "CV data updated"}))
            }),
        );
        let backend = client(spawn_backend(app).await);
        backend.save_record(&Record::default()).await.unwrap();
    }

    #[tokio::test]
    async fn test_save_record_surfaces_rejection_message() {
        let app = Router::new().route(
            "/save-cv-edits",
            post(|| async { Json(serde_json::json!({"status": "error", "message": "boom"})) }),
        );
        let backend = client(spawn_backend(app).await);
        let err = backend.save_record(&Record::default()).await.unwrap_err();
        assert!(matches!(err, EditorError::SaveRejected(msg) if msg == "boom"));
    }

    #[tokio::test]
    async fn test_save_record_rejection_without_message_falls_back() {
        let app = Router::new().route(
            "/save-cv-edits",
            post(|| async { Json(serde_json::json!({"status": "error"})) }),
        );
        let backend = client(spawn_backend(app).await);
        let err = backend.save_record(&Record::default()).await.unwrap_err();
        assert!(matches!(err, EditorError::SaveRejected(msg) if msg == "Unknown error"));
    }

    #[tokio::test]
    async fn test_non_ok_reply_extracts_the_error_field() {
        let app = Router::new().route(
            "/customize-cv-for-job",
            post(|| async {
                (
                    axum::http::StatusCode::BAD_REQUEST,
                    Json(serde_json::json!({"error": "Job description and CV data are required"})),
                )
            }),
        );
        let backend = client(spawn_backend(app).await);
        let err = backend
            .customize_for_job("", "", &Record::default())
            .await
            .unwrap_err();
        match err {
            EditorError::Backend { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "Job description and CV data are required");
            }
            other => panic!("expected Backend error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_customize_round_trips_the_record() {
        let app = Router::new().route(
            "/customize-cv-for-job",
            post(|Json(body): Json<serde_json::Value>| async move {
                assert!(body.get("jobDescription").is_some());
                assert!(body.get("careerGoals").is_some());
                let mut cv = body["cvData"].clone();
                cv["personal_info"]["professional_summary"] =
                    serde_json::Value::String("Tailored".to_string());
                Json(serde_json::json!({ "customizedCV": cv }))
            }),
        );
        let backend = client(spawn_backend(app).await);
        let customized = backend
            .customize_for_job("Rust engineer", "", &Record::default())
            .await
            .unwrap();
        assert_eq!(
            customized.personal_field("professional_summary"),
            Some("Tailored")
        );
    }

    #[tokio::test]
    async fn test_process_pdf_follows_the_redirect_field() {
        let app = Router::new().route(
            "/process-pdf",
            post(|| async { Json(serde_json::json!({"redirect": "/payment"})) }),
        );
        let backend = client(spawn_backend(app).await);
        assert_eq!(
            backend.process_pdf().await.unwrap(),
            Navigation::Redirect("/payment".to_string())
        );
    }

    #[tokio::test]
    async fn test_process_pdf_without_redirect_defaults_to_preview() {
        let app = Router::new().route(
            "/process-pdf",
            post(|| async { Json(serde_json::json!({})) }),
        );
        let backend = client(spawn_backend(app).await);
        assert_eq!(backend.process_pdf().await.unwrap(), Navigation::PreviewPdf);
    }

    #[tokio::test]
    async fn test_process_pdf_non_json_reply_defaults_to_preview() {
        let app = Router::new().route("/process-pdf", post(|| async { "<html></html>" }));
        let backend = client(spawn_backend(app).await);
        assert_eq!(backend.process_pdf().await.unwrap(), Navigation::PreviewPdf);
    }

    #[tokio::test]
    async fn test_field_fragment_returns_the_html() {
        let app = Router::new().route(
            "/add-field/:kind",
            get(|axum::extract::Path(kind): axum::extract::Path<String>| async move {
                format!("<div class=\"{kind}-entry\"></div>")
            }),
        );
        let backend = client(spawn_backend(app).await);
        let html = backend.field_fragment("education").await.unwrap();
        assert_eq!(html, "<div class=\"education-entry\"></div>");
    }

    #[tokio::test]
    async fn test_stream_summary_keeps_the_last_cumulative_payload() {
        let app = Router::new().route(
            "/generate-professional-summary",
            post(|| async {
                (
                    [(header::CONTENT_TYPE, "text/event-stream")],
                    "data: {\"summary\": \"Seasoned\"}\n\ndata: {\"summary\": \"Seasoned engineer.\"}\n\n",
                )
                    .into_response()
            }),
        );
        let backend = client(spawn_backend(app).await);
        let request = SummaryRequest {
            first_name: "Ana".to_string(),
            last_name: "García".to_string(),
            guidance: "ten years of Rust".to_string(),
            ui_lang: "en".to_string(),
        };

        let mut seen = Vec::new();
        let mut sink = |text: &str| seen.push(text.to_string());
        let summary = backend.stream_summary(&request, &mut sink).await.unwrap();

        assert_eq!(summary, "Seasoned engineer.");
        assert_eq!(seen, vec!["Seasoned".to_string(), "Seasoned engineer.".to_string()]);
    }

    #[tokio::test]
    async fn test_stream_drops_malformed_payloads_and_continues() {
        let app = Router::new().route(
            "/generate-experience-description",
            post(|| async {
                (
                    [(header::CONTENT_TYPE, "text/event-stream")],
                    "data: {broken\n\ndata: {\"description\": \"ok\"}\n\n",
                )
                    .into_response()
            }),
        );
        let backend = client(spawn_backend(app).await);
        let request = ExperienceRequest {
            company: "Acme".to_string(),
            position: "Engineer".to_string(),
            start_date: "2020-01-01".to_string(),
            end_date: "Present".to_string(),
            ui_lang: "fr".to_string(),
        };

        let mut sink = |_: &str| {};
        let text = backend
            .stream_experience_description(&request, &mut sink)
            .await
            .unwrap();
        assert_eq!(text, "ok");
    }

    #[tokio::test]
    async fn test_stream_non_ok_reply_is_a_backend_error() {
        let app = Router::new().route(
            "/generate-professional-summary",
            post(|| async {
                (
                    axum::http::StatusCode::BAD_REQUEST,
                    Json(serde_json::json!({"error": "All fields are required"})),
                )
            }),
        );
        let backend = client(spawn_backend(app).await);
        let request = SummaryRequest {
            first_name: String::new(),
            last_name: String::new(),
            guidance: String::new(),
            ui_lang: "fr".to_string(),
        };
        let mut sink = |_: &str| {};
        let err = backend.stream_summary(&request, &mut sink).await.unwrap_err();
        assert!(matches!(err, EditorError::Backend { status: 400, .. }));
    }
}
