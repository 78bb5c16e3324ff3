//! HTTP surface for the flashdeck server.
//!
//! This module exposes a compact Axum router with a handful of endpoints:
//!
//! - `POST /api/v1/flashcards/flashcard` – Validate a submission, infer its subject, persist the
//!   card, and return the inferred subject alongside a confirmation message.
//! - `GET /api/v1/flashcards/get-subject` – Return a student's flashcards, in full or as a
//!   uniform random sample when `limit` is supplied.
//! - `GET /` – Liveness probe reporting that the backend is up.
//! - `GET /metrics` – Observe ingestion and retrieval counters.
//!
//! Handlers stay thin: they translate between wire shapes and the service
//! contracts, and the single [`AppError`] boundary maps the service error
//! taxonomy onto status codes and `{success, message}` bodies. Diagnostic
//! detail is attached only in development configurations.

use crate::config::get_config;
use crate::flashcards::{CardSubmission, FlashcardApi, FlashcardError, FlashcardView, RetrieveQuery};
use crate::metrics::MetricsSnapshot;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// Build the HTTP router exposing the flashcard API surface.
pub fn create_router<S>(service: Arc<S>) -> Router
where
    S: FlashcardApi + 'static,
{
    let flashcards = Router::new()
        .route("/flashcard", post(submit_flashcard::<S>))
        .route("/get-subject", get(retrieve_flashcards::<S>));

    Router::new()
        .route("/", get(health))
        .route("/metrics", get(get_metrics::<S>))
        .nest("/api/v1/flashcards", flashcards)
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any))
        .with_state(service)
}

/// Request body for the `POST /api/v1/flashcards/flashcard` endpoint.
///
/// Fields are optional at the wire level so that missing values reach the
/// ingestion service, which owns the required-field check and its message.
#[derive(Deserialize)]
struct SubmitRequest {
    #[serde(default)]
    student_id: Option<String>,
    #[serde(default)]
    question: Option<String>,
    #[serde(default)]
    answer: Option<String>,
}

/// Success response for the submission endpoint.
#[derive(Serialize)]
struct SubmitResponse {
    message: &'static str,
    subject: String,
}

/// Validate and store a submitted flashcard, returning its inferred subject.
async fn submit_flashcard<S>(
    State(service): State<Arc<S>>,
    Json(request): Json<SubmitRequest>,
) -> Result<(StatusCode, Json<SubmitResponse>), AppError>
where
    S: FlashcardApi,
{
    let SubmitRequest {
        student_id,
        question,
        answer,
    } = request;
    let outcome = service
        .submit(CardSubmission {
            student_id,
            question,
            answer,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(SubmitResponse {
            message: "Flashcard added successfully",
            subject: outcome.subject,
        }),
    ))
}

/// Query parameters for the retrieval endpoint.
#[derive(Deserialize)]
struct RetrieveParams {
    #[serde(default)]
    student_id: Option<String>,
    /// Raw sample size, kept as a string so parse failures fall back to the
    /// service's default instead of rejecting the request at the wire.
    #[serde(default)]
    limit: Option<String>,
}

/// Return a student's flashcards, sampled when a limit is supplied.
async fn retrieve_flashcards<S>(
    State(service): State<Arc<S>>,
    Query(params): Query<RetrieveParams>,
) -> Result<Json<Vec<FlashcardView>>, AppError>
where
    S: FlashcardApi,
{
    let views = service
        .retrieve(RetrieveQuery {
            student_id: params.student_id,
            limit: params.limit,
        })
        .await?;
    Ok(Json(views))
}

/// Liveness response payload.
#[derive(Serialize)]
struct HealthResponse {
    success: bool,
    message: &'static str,
}

/// Report that the backend is reachable.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        success: true,
        message: "Backend is UP",
    })
}

/// Return the current traffic counters.
async fn get_metrics<S>(State(service): State<Arc<S>>) -> Json<MetricsSnapshot>
where
    S: FlashcardApi,
{
    Json(service.metrics_snapshot())
}

/// Body shared by every failure response.
#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    message: String,
    /// Diagnostic detail, attached only in development configurations.
    #[serde(skip_serializing_if = "Option::is_none")]
    stack: Option<String>,
}

struct AppError(FlashcardError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let expose_detail = get_config().environment.expose_error_detail();
        let (status, body) = error_response(&self.0, expose_detail);
        (status, Json(body)).into_response()
    }
}

impl From<FlashcardError> for AppError {
    fn from(inner: FlashcardError) -> Self {
        Self(inner)
    }
}

/// Map a service error onto its response status and body.
fn error_response(error: &FlashcardError, expose_detail: bool) -> (StatusCode, ErrorBody) {
    let (status, message, detail) = match error {
        FlashcardError::Validation { message } => {
            (StatusCode::BAD_REQUEST, message.clone(), None)
        }
        FlashcardError::NotFound { .. } => (StatusCode::NOT_FOUND, error.to_string(), None),
        FlashcardError::Storage(source) => {
            tracing::error!(error = %source, "Flashcard storage failure");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error".to_string(),
                Some(source.to_string()),
            )
        }
    };

    (
        status,
        ErrorBody {
            success: false,
            message,
            stack: detail.filter(|_| expose_detail),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::{create_router, error_response};
    use crate::config::{CONFIG, Config, Environment};
    use crate::flashcards::{
        CardSubmission, FlashcardApi, FlashcardError, FlashcardView, RetrieveQuery, SubmitOutcome,
    };
    use crate::metrics::MetricsSnapshot;
    use crate::store::StorageError;
    use async_trait::async_trait;
    use axum::{
        body::{Body, to_bytes},
        http::{Method, Request, StatusCode},
    };
    use serde_json::{Value, json};
    use std::sync::Arc;
    use tokio::sync::Mutex;
    use tower::ServiceExt;

    fn ensure_test_config() {
        let _ = CONFIG.set(Config {
            server_port: None,
            environment: Environment::Development,
            sample_default_limit: 5,
        });
    }

    /// Canned behavior for the stub service behind the router.
    enum StubBehavior {
        Subject(&'static str),
        Cards(Vec<FlashcardView>),
        Validation(&'static str),
        NotFound(&'static str),
        StorageFailure,
    }

    struct StubFlashcardService {
        behavior: StubBehavior,
        submissions: Mutex<Vec<CardSubmission>>,
        queries: Mutex<Vec<RetrieveQuery>>,
    }

    impl StubFlashcardService {
        fn new(behavior: StubBehavior) -> Self {
            Self {
                behavior,
                submissions: Mutex::new(Vec::new()),
                queries: Mutex::new(Vec::new()),
            }
        }

        fn error(&self) -> Option<FlashcardError> {
            match &self.behavior {
                StubBehavior::Validation(message) => Some(FlashcardError::Validation {
                    message: (*message).to_string(),
                }),
                StubBehavior::NotFound(student_id) => Some(FlashcardError::NotFound {
                    student_id: (*student_id).to_string(),
                }),
                StubBehavior::StorageFailure => Some(FlashcardError::Storage(
                    StorageError::Backend {
                        message: "connection reset".to_string(),
                    },
                )),
                _ => None,
            }
        }
    }

    #[async_trait]
    impl FlashcardApi for StubFlashcardService {
        async fn submit(
            &self,
            submission: CardSubmission,
        ) -> Result<SubmitOutcome, FlashcardError> {
            self.submissions.lock().await.push(submission);
            if let Some(error) = self.error() {
                return Err(error);
            }
            match &self.behavior {
                StubBehavior::Subject(subject) => Ok(SubmitOutcome {
                    subject: (*subject).to_string(),
                }),
                _ => panic!("stub not configured for submissions"),
            }
        }

        async fn retrieve(
            &self,
            query: RetrieveQuery,
        ) -> Result<Vec<FlashcardView>, FlashcardError> {
            self.queries.lock().await.push(query);
            if let Some(error) = self.error() {
                return Err(error);
            }
            match &self.behavior {
                StubBehavior::Cards(cards) => Ok(cards.clone()),
                _ => panic!("stub not configured for retrievals"),
            }
        }

        fn metrics_snapshot(&self) -> MetricsSnapshot {
            MetricsSnapshot {
                cards_ingested: 4,
                retrievals_served: 2,
                cards_served: 6,
            }
        }
    }

    async fn send(
        service: Arc<StubFlashcardService>,
        request: Request<Body>,
    ) -> (StatusCode, Value) {
        ensure_test_config();
        let app = create_router(service);
        let response = app.oneshot(request).await.expect("router response");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body bytes");
        let body = serde_json::from_slice(&bytes).expect("json body");
        (status, body)
    }

    fn post_flashcard(payload: Value) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri("/api/v1/flashcards/flashcard")
            .header("content-type", "application/json")
            .body(Body::from(payload.to_string()))
            .expect("request")
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).expect("request")
    }

    #[tokio::test]
    async fn submission_returns_created_with_subject() {
        let service = Arc::new(StubFlashcardService::new(StubBehavior::Subject("Biology")));
        let (status, body) = send(
            service.clone(),
            post_flashcard(json!({
                "student_id": "s1",
                "question": "What causes cell division?",
                "answer": "Mitosis"
            })),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["message"], "Flashcard added successfully");
        assert_eq!(body["subject"], "Biology");

        let submissions = service.submissions.lock().await;
        assert_eq!(submissions.len(), 1);
        assert_eq!(submissions[0].student_id.as_deref(), Some("s1"));
        assert_eq!(
            submissions[0].question.as_deref(),
            Some("What causes cell division?")
        );
        assert_eq!(submissions[0].answer.as_deref(), Some("Mitosis"));
    }

    #[tokio::test]
    async fn validation_failures_map_to_bad_request() {
        let service = Arc::new(StubFlashcardService::new(StubBehavior::Validation(
            "student_id, question, and answer are required.",
        )));
        let (status, body) = send(service, post_flashcard(json!({ "student_id": "s1" }))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(
            body["message"],
            "student_id, question, and answer are required."
        );
        assert!(body.get("stack").is_none());
    }

    #[tokio::test]
    async fn retrieval_returns_public_views() {
        let cards = vec![
            FlashcardView {
                question: "q1".into(),
                answer: "a1".into(),
                subject: "Math".into(),
            },
            FlashcardView {
                question: "q2".into(),
                answer: "a2".into(),
                subject: "History".into(),
            },
        ];
        let service = Arc::new(StubFlashcardService::new(StubBehavior::Cards(cards)));
        let (status, body) = send(
            service.clone(),
            get_request("/api/v1/flashcards/get-subject?student_id=s1&limit=2"),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([
            { "question": "q1", "answer": "a1", "subject": "Math" },
            { "question": "q2", "answer": "a2", "subject": "History" }
        ]));

        let queries = service.queries.lock().await;
        assert_eq!(queries.len(), 1);
        assert_eq!(queries[0].student_id.as_deref(), Some("s1"));
        assert_eq!(queries[0].limit.as_deref(), Some("2"));
    }

    #[tokio::test]
    async fn missing_records_map_to_not_found() {
        let service = Arc::new(StubFlashcardService::new(StubBehavior::NotFound("ghost")));
        let (status, body) = send(
            service,
            get_request("/api/v1/flashcards/get-subject?student_id=ghost"),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "No flashcards found for student_id 'ghost'.");
    }

    #[tokio::test]
    async fn storage_failures_map_to_internal_error_with_detail() {
        let service = Arc::new(StubFlashcardService::new(StubBehavior::StorageFailure));
        let (status, body) = send(
            service,
            get_request("/api/v1/flashcards/get-subject?student_id=s1"),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Internal Server Error");
        // Test config runs in development mode, so the detail is attached.
        assert_eq!(body["stack"], "storage backend failure: connection reset");
    }

    #[test]
    fn error_response_hides_detail_outside_development() {
        let error = FlashcardError::Storage(StorageError::Backend {
            message: "connection reset".to_string(),
        });
        let (status, body) = error_response(&error, false);
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.message, "Internal Server Error");
        assert!(body.stack.is_none());
    }

    #[tokio::test]
    async fn health_route_reports_up() {
        let service = Arc::new(StubFlashcardService::new(StubBehavior::Subject("General")));
        let (status, body) = send(service, get_request("/")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "success": true, "message": "Backend is UP" }));
    }

    #[tokio::test]
    async fn metrics_route_reports_counters() {
        let service = Arc::new(StubFlashcardService::new(StubBehavior::Subject("General")));
        let (status, body) = send(service, get_request("/metrics")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["cards_ingested"], 4);
        assert_eq!(body["retrievals_served"], 2);
        assert_eq!(body["cards_served"], 6);
    }
}
