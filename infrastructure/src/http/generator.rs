//! Generation service adapter: `GET /trivia?category=<category>`

use super::client::describe;
use crate::config::ServiceEndpoint;
use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::debug;
use trivia_application::QuestionGenerator;
use trivia_domain::{GenerationOutcome, GenerationRequest, Question};

/// Route served by the generation service
pub const TRIVIA_PATH: &str = "/trivia";

/// [`QuestionGenerator`] backed by the HTTP generation service
pub struct HttpQuestionGenerator {
    client: reqwest::Client,
    url: String,
    timeout: Duration,
}

impl HttpQuestionGenerator {
    pub fn new(client: reqwest::Client, endpoint: &ServiceEndpoint, timeout: Duration) -> Self {
        Self {
            client,
            url: endpoint.url(TRIVIA_PATH),
            timeout,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl QuestionGenerator for HttpQuestionGenerator {
    async fn fetch(&self, request: &GenerationRequest) -> GenerationOutcome {
        debug!(
            "Fetching question {} for category '{}'",
            request.sequence_index, request.category
        );

        let response = match self
            .client
            .get(&self.url)
            .query(&[("category", request.category.as_str())])
            .timeout(self.timeout)
            .send()
            .await
        {
            Ok(r) => r,
            Err(e) => return transport_outcome(&e),
        };

        let status = response.status();
        if status != StatusCode::OK {
            return GenerationOutcome::BadStatus(status.as_u16());
        }

        // The timeout also covers reading the body.
        match response.bytes().await {
            Ok(body) => classify_response(status.as_u16(), &body),
            Err(e) => transport_outcome(&e),
        }
    }
}

/// Map a received status and body onto an outcome
///
/// Pure: the same response always maps to the same outcome.
pub fn classify_response(status: u16, body: &[u8]) -> GenerationOutcome {
    if status != StatusCode::OK.as_u16() {
        return GenerationOutcome::BadStatus(status);
    }

    match serde_json::from_slice::<Question>(body) {
        Ok(question) => GenerationOutcome::Success(question),
        Err(e) => GenerationOutcome::MalformedResponse(e.to_string()),
    }
}

fn transport_outcome(error: &reqwest::Error) -> GenerationOutcome {
    if error.is_timeout() {
        GenerationOutcome::Timeout
    } else {
        GenerationOutcome::NetworkError(describe(error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::client::build_http_client;
    use crate::http::test_support::{spawn_server, unused_endpoint};
    use axum::{Json, Router, extract::Query, http::StatusCode as AxumStatus, routing::get};
    use std::collections::HashMap;
    use trivia_domain::Category;

    const VALID_BODY: &str = r#"{
        "question": "What is the capital of Poland?",
        "answer_a": "Warsaw",
        "answer_b": "Berlin",
        "answer_c": "Paris",
        "answer_d": "Oslo",
        "correct_answer": "Warsaw"
    }"#;

    fn request(category: &str) -> GenerationRequest {
        GenerationRequest::new(Category::try_new(category).unwrap(), 0)
    }

    fn generator(endpoint: &ServiceEndpoint, timeout: Duration) -> HttpQuestionGenerator {
        let client = build_http_client(Duration::from_secs(5)).unwrap();
        HttpQuestionGenerator::new(client, endpoint, timeout)
    }

    #[test]
    fn test_classify_valid_body_is_success_every_time() {
        let first = classify_response(200, VALID_BODY.as_bytes());
        let second = classify_response(200, VALID_BODY.as_bytes());
        assert!(first.is_success());
        assert_eq!(first, second);
        assert_eq!(
            first.question().unwrap().question,
            "What is the capital of Poland?"
        );
    }

    #[test]
    fn test_classify_unparseable_body() {
        assert!(matches!(
            classify_response(200, b"What is the capital of Poland?, Warsaw"),
            GenerationOutcome::MalformedResponse(_)
        ));
        // Five fields instead of six
        assert!(matches!(
            classify_response(
                200,
                br#"{"question": "Q?", "answer_a": "A", "answer_b": "B", "answer_c": "C", "correct_answer": "A"}"#
            ),
            GenerationOutcome::MalformedResponse(_)
        ));
    }

    #[test]
    fn test_classify_non_200_status() {
        assert_eq!(
            classify_response(503, VALID_BODY.as_bytes()),
            GenerationOutcome::BadStatus(503)
        );
        assert_eq!(classify_response(201, b""), GenerationOutcome::BadStatus(201));
    }

    #[tokio::test]
    async fn test_fetch_success_sends_category() {
        let router = Router::new().route(
            TRIVIA_PATH,
            get(|Query(params): Query<HashMap<String, String>>| async move {
                let category = params.get("category").cloned().unwrap_or_default();
                Json(Question::new(
                    format!("A question about {}", category),
                    ["a", "b", "c", "d"],
                    "a",
                ))
            }),
        );
        let endpoint = spawn_server(router).await;

        let outcome = generator(&endpoint, Duration::from_secs(5))
            .fetch(&request("history"))
            .await;

        assert_eq!(
            outcome.question().map(|q| q.question.as_str()),
            Some("A question about history")
        );
    }

    #[tokio::test]
    async fn test_fetch_bad_status() {
        let router = Router::new().route(
            TRIVIA_PATH,
            get(|| async { (AxumStatus::SERVICE_UNAVAILABLE, "model offline") }),
        );
        let endpoint = spawn_server(router).await;

        let outcome = generator(&endpoint, Duration::from_secs(5))
            .fetch(&request("history"))
            .await;

        assert_eq!(outcome, GenerationOutcome::BadStatus(503));
    }

    #[tokio::test]
    async fn test_fetch_malformed_body() {
        let router = Router::new().route(TRIVIA_PATH, get(|| async { "not a question" }));
        let endpoint = spawn_server(router).await;

        let outcome = generator(&endpoint, Duration::from_secs(5))
            .fetch(&request("history"))
            .await;

        assert!(matches!(outcome, GenerationOutcome::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_fetch_timeout() {
        let router = Router::new().route(
            TRIVIA_PATH,
            get(|| async {
                tokio::time::sleep(Duration::from_secs(2)).await;
                VALID_BODY
            }),
        );
        let endpoint = spawn_server(router).await;

        let outcome = generator(&endpoint, Duration::from_millis(100))
            .fetch(&request("history"))
            .await;

        assert_eq!(outcome, GenerationOutcome::Timeout);
    }

    #[tokio::test]
    async fn test_fetch_connection_refused() {
        let endpoint = unused_endpoint();

        let outcome = generator(&endpoint, Duration::from_secs(5))
            .fetch(&request("history"))
            .await;

        assert!(matches!(outcome, GenerationOutcome::NetworkError(_)));
    }

    #[tokio::test]
    async fn test_fetch_replay_maps_identically() {
        let router = Router::new().route(TRIVIA_PATH, get(|| async { VALID_BODY }));
        let endpoint = spawn_server(router).await;
        let generator = generator(&endpoint, Duration::from_secs(5));

        let first = generator.fetch(&request("history")).await;
        let second = generator.fetch(&request("history")).await;

        assert!(first.is_success());
        assert_eq!(first, second);
    }
}
