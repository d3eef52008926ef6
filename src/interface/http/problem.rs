use crate::domain::entities::client::ClientValidationError;
use axum::Json;
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// RFC 7807 Problem Details payload. The human-readable detail is carried
/// under `mensagem`, the key every error body of this API exposes.
#[derive(Debug, Serialize)]
pub struct ProblemDetails {
    /// A URI reference that identifies the problem type.
    #[serde(rename = "type")]
    pub r#type: String,
    /// A short, human-readable summary of the problem type.
    pub title: String,
    /// The HTTP status code for this occurrence.
    pub status: u16,
    /// A human-readable explanation specific to this occurrence.
    pub mensagem: String,
    /// A URI reference that identifies this specific occurrence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
    /// The request id echoed in `x-request-id`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
    /// A stable, machine-readable application error code.
    pub code: String,
    /// Field-level validation failures.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldProblem>,
}

#[derive(Debug, Serialize)]
pub struct FieldProblem {
    pub field: String,
    pub message: String,
}

impl ProblemDetails {
    pub fn new(status: StatusCode, code: &str, mensagem: impl Into<String>) -> Self {
        Self {
            r#type: "about:blank".to_string(),
            title: status.canonical_reason().unwrap_or("Error").to_string(),
            status: status.as_u16(),
            mensagem: mensagem.into(),
            instance: None,
            trace_id: None,
            code: code.to_string(),
            errors: Vec::new(),
        }
    }
}

impl IntoResponse for ProblemDetails {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let mut response = (status, Json(self)).into_response();
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/problem+json"),
        );
        response
    }
}

/// Build a Problem Details response with the correct content-type.
pub fn problem(
    status: StatusCode,
    code: &str,
    mensagem: &str,
    instance: Option<String>,
    trace_id: Option<String>,
) -> Response {
    let mut payload = ProblemDetails::new(status, code, mensagem);
    payload.instance = instance;
    payload.trace_id = trace_id;
    payload.into_response()
}

/// 400 response listing every invalid client field.
pub fn validation_problem(err: &ClientValidationError, trace_id: Option<String>) -> Response {
    let mut payload = ProblemDetails::new(
        StatusCode::BAD_REQUEST,
        CLIENT_VALIDATION_FAILED,
        "Dados do cliente inválidos.",
    );
    payload.trace_id = trace_id;
    payload.errors = err
        .fields
        .iter()
        .map(|f| FieldProblem {
            field: f.field.to_string(),
            message: f.message.to_string(),
        })
        .collect();
    payload.into_response()
}

pub const REQUEST_MALFORMED: &str = "REQUEST_MALFORMED";
pub const CLIENT_VALIDATION_FAILED: &str = "CLIENT_VALIDATION_FAILED";
pub const CLIENT_NOT_FOUND: &str = "CLIENT_NOT_FOUND";
pub const STORAGE_DB_ERROR: &str = "STORAGE_DB_ERROR";
