//! Storage service adapter: `POST /database`

use super::client::describe;
use crate::config::ServiceEndpoint;
use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::debug;
use trivia_application::QuestionStore;
use trivia_domain::{DeliveryOutcome, Question};

/// Route served by the storage service
pub const DATABASE_PATH: &str = "/database";

/// [`QuestionStore`] backed by the HTTP storage service
pub struct HttpQuestionStore {
    client: reqwest::Client,
    url: String,
    timeout: Duration,
}

impl HttpQuestionStore {
    pub fn new(client: reqwest::Client, endpoint: &ServiceEndpoint, timeout: Duration) -> Self {
        Self {
            client,
            url: endpoint.url(DATABASE_PATH),
            timeout,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl QuestionStore for HttpQuestionStore {
    async fn deliver(&self, question: &Question) -> DeliveryOutcome {
        debug!("Sending question to storage: {}", question);

        match self
            .client
            .post(&self.url)
            .json(question)
            .timeout(self.timeout)
            .send()
            .await
        {
            Ok(response) => classify_status(response.status().as_u16()),
            Err(e) if e.is_timeout() => DeliveryOutcome::Timeout,
            Err(e) => DeliveryOutcome::NetworkError(describe(&e)),
        }
    }
}

/// Only 202 Accepted counts as a successful delivery
pub fn classify_status(status: u16) -> DeliveryOutcome {
    if status == StatusCode::ACCEPTED.as_u16() {
        DeliveryOutcome::Accepted
    } else {
        DeliveryOutcome::Rejected(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::client::build_http_client;
    use crate::http::test_support::{spawn_server, unused_endpoint};
    use axum::{Json, Router, extract::State, http::StatusCode as AxumStatus, routing::post};
    use std::sync::{Arc, Mutex};

    fn question() -> Question {
        Question::new(
            "What is the capital of Poland?",
            ["Warsaw", "Berlin", "Paris", "Oslo"],
            "Warsaw",
        )
    }

    fn store(endpoint: &ServiceEndpoint, timeout: Duration) -> HttpQuestionStore {
        let client = build_http_client(Duration::from_secs(5)).unwrap();
        HttpQuestionStore::new(client, endpoint, timeout)
    }

    #[test]
    fn test_classify_status() {
        assert_eq!(classify_status(202), DeliveryOutcome::Accepted);
        assert_eq!(classify_status(200), DeliveryOutcome::Rejected(200));
        assert_eq!(classify_status(500), DeliveryOutcome::Rejected(500));
    }

    #[tokio::test]
    async fn test_deliver_accepted_posts_question_json() {
        let received: Arc<Mutex<Vec<Question>>> = Arc::default();
        let router = Router::new()
            .route(
                DATABASE_PATH,
                post(
                    |State(received): State<Arc<Mutex<Vec<Question>>>>,
                     Json(question): Json<Question>| async move {
                        received.lock().unwrap().push(question);
                        AxumStatus::ACCEPTED
                    },
                ),
            )
            .with_state(Arc::clone(&received));
        let endpoint = spawn_server(router).await;

        let outcome = store(&endpoint, Duration::from_secs(5))
            .deliver(&question())
            .await;

        assert_eq!(outcome, DeliveryOutcome::Accepted);
        assert_eq!(received.lock().unwrap().as_slice(), &[question()]);
    }

    #[tokio::test]
    async fn test_deliver_rejected() {
        let router = Router::new().route(
            DATABASE_PATH,
            post(|| async { AxumStatus::INTERNAL_SERVER_ERROR }),
        );
        let endpoint = spawn_server(router).await;

        let outcome = store(&endpoint, Duration::from_secs(5))
            .deliver(&question())
            .await;

        assert_eq!(outcome, DeliveryOutcome::Rejected(500));
    }

    #[tokio::test]
    async fn test_deliver_ok_is_not_accepted() {
        let router = Router::new().route(DATABASE_PATH, post(|| async { AxumStatus::OK }));
        let endpoint = spawn_server(router).await;

        let outcome = store(&endpoint, Duration::from_secs(5))
            .deliver(&question())
            .await;

        assert_eq!(outcome, DeliveryOutcome::Rejected(200));
    }

    #[tokio::test]
    async fn test_deliver_timeout() {
        let router = Router::new().route(
            DATABASE_PATH,
            post(|| async {
                tokio::time::sleep(Duration::from_secs(2)).await;
                AxumStatus::ACCEPTED
            }),
        );
        let endpoint = spawn_server(router).await;

        let outcome = store(&endpoint, Duration::from_millis(100))
            .deliver(&question())
            .await;

        assert_eq!(outcome, DeliveryOutcome::Timeout);
    }

    #[tokio::test]
    async fn test_deliver_connection_refused() {
        let outcome = store(&unused_endpoint(), Duration::from_secs(5))
            .deliver(&question())
            .await;

        assert!(matches!(outcome, DeliveryOutcome::NetworkError(_)));
    }
}
