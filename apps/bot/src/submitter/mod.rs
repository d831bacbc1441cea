/// Submitter — the single point of entry for sending an application anywhere.
///
/// The applicant only ever talks to the `Submitter` trait. `HttpSubmitter` is
/// the real backend: one JSON POST, success means HTTP 200 and nothing else.
use async_trait::async_trait;
use reqwest::{header::CONTENT_TYPE, Client, StatusCode};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::models::application::Application;

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("JSON serialize error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to build request: {0}")]
    Request(#[source] reqwest::Error),

    #[error("HTTP error: {0}")]
    Transport(#[source] reqwest::Error),

    /// Any response other than 200, carrying the status text (e.g. `201 Created`).
    #[error("{0}")]
    Status(String),
}

/// Sends an application somewhere. Carried by reference into
/// `Applicant::apply_for_job` so tests can swap the backend.
#[async_trait]
pub trait Submitter: Send + Sync {
    async fn submit(&self, application: &Application<'_>) -> Result<(), SubmitError>;
}

/// POSTs the application as JSON to its own `url`.
#[derive(Clone, Default)]
pub struct HttpSubmitter {
    client: Client,
}

impl HttpSubmitter {
    /// Default client settings, no timeout of our own.
    pub fn new() -> Self {
        Self::with_client(Client::new())
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Submitter for HttpSubmitter {
    async fn submit(&self, application: &Application<'_>) -> Result<(), SubmitError> {
        // Serialize first: a bad payload never reaches the network.
        let body = serde_json::to_vec(application)?;

        let request = self
            .client
            .post(application.url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .build()
            .map_err(SubmitError::Request)?;

        info!("Submitting application to {}", application.url);

        let response = self
            .client
            .execute(request)
            .await
            .map_err(SubmitError::Transport)?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!("Application endpoint returned {status}");
            return Err(SubmitError::Status(status.to_string()));
        }

        debug!("Application accepted with {status}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        extract::State,
        http::{HeaderMap, StatusCode as AxumStatus},
        routing::post,
        Json, Router,
    };
    use serde_json::Value;

    use super::*;
    use crate::models::headshot::Headshot;

    #[derive(Clone, Default)]
    struct Received {
        body: Arc<Mutex<Option<Value>>>,
        content_type: Arc<Mutex<Option<String>>>,
    }

    /// Serves `POST /apply` on an ephemeral port, answering with `status`.
    async fn spawn_endpoint(status: AxumStatus) -> (String, Received) {
        let received = Received::default();

        let app = Router::new()
            .route(
                "/apply",
                post(
                    move |State(received): State<Received>,
                          headers: HeaderMap,
                          Json(body): Json<Value>| async move {
                        *received.content_type.lock().unwrap() = headers
                            .get("content-type")
                            .and_then(|v| v.to_str().ok())
                            .map(str::to_string);
                        *received.body.lock().unwrap() = Some(body);
                        status
                    },
                ),
            )
            .with_state(received.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (format!("http://{addr}/apply"), received)
    }

    /// Loopback only, so ambient proxy settings must not apply.
    fn submitter() -> HttpSubmitter {
        HttpSubmitter::with_client(Client::builder().no_proxy().build().unwrap())
    }

    fn skills() -> Vec<String> {
        vec!["docker".to_string(), "kubernetes".to_string()]
    }

    #[tokio::test]
    async fn test_200_is_success_and_body_is_json() {
        let (url, received) = spawn_endpoint(AxumStatus::OK).await;
        let skills = skills();
        let photo = Headshot::new("tastefulCableknit", "💁‍♂️");
        let application = Application {
            name: "Leon Brown".to_string(),
            skills: &skills,
            photo: Some(&photo),
            url: &url,
            job_title: "DevOps Engineer",
        };

        submitter().submit(&application).await.unwrap();

        assert_eq!(
            received.content_type.lock().unwrap().as_deref(),
            Some("application/json")
        );
        let body = received.body.lock().unwrap().clone().unwrap();
        assert_eq!(body["name"], "Leon Brown");
        assert_eq!(body["jobTitle"], "DevOps Engineer");
        assert_eq!(body["photo"], "💁‍♂️");
        assert_eq!(body["url"], url.as_str());
        assert_eq!(body["skills"][1], "kubernetes");
    }

    #[tokio::test]
    async fn test_201_is_failure_with_status_text() {
        let (url, received) = spawn_endpoint(AxumStatus::CREATED).await;
        let skills = skills();
        let application = Application {
            name: "Leon Brown".to_string(),
            skills: &skills,
            photo: None,
            url: &url,
            job_title: "DevOps Engineer",
        };

        let err = submitter().submit(&application).await.unwrap_err();

        assert!(matches!(err, SubmitError::Status(ref s) if s == "201 Created"));
        assert!(received.body.lock().unwrap().is_some());
    }

    #[tokio::test]
    async fn test_server_error_is_failure() {
        let (url, _) = spawn_endpoint(AxumStatus::INTERNAL_SERVER_ERROR).await;
        let application = Application {
            name: "Leon Brown".to_string(),
            skills: &[],
            photo: None,
            url: &url,
            job_title: "DevOps Engineer",
        };

        let err = submitter().submit(&application).await.unwrap_err();
        assert_eq!(err.to_string(), "500 Internal Server Error");
    }

    #[tokio::test]
    async fn test_unserializable_photo_fails_before_network() {
        let (url, received) = spawn_endpoint(AxumStatus::OK).await;
        let photo = Headshot::new("naughtiesBoyband.jpg", vec![0xff, 0xd8, 0xff]);
        let application = Application {
            name: "Leon Brown".to_string(),
            skills: &[],
            photo: Some(&photo),
            url: &url,
            job_title: "DevOps Engineer",
        };

        let err = submitter().submit(&application).await.unwrap_err();

        assert!(matches!(err, SubmitError::Serialize(_)));
        assert!(received.body.lock().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_invalid_url_is_request_error() {
        let application = Application {
            name: "Leon Brown".to_string(),
            skills: &[],
            photo: None,
            url: "not a url",
            job_title: "DevOps Engineer",
        };

        let err = submitter().submit(&application).await.unwrap_err();
        assert!(matches!(err, SubmitError::Request(_)));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        // Bind then drop to get a port with nothing listening.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let url = format!("http://{addr}/apply");
        let application = Application {
            name: "Leon Brown".to_string(),
            skills: &[],
            photo: None,
            url: &url,
            job_title: "DevOps Engineer",
        };

        let err = submitter().submit(&application).await.unwrap_err();
        assert!(matches!(err, SubmitError::Transport(_)));
    }
}
