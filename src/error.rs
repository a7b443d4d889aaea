use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use derive_more::From;
use serde::{Deserialize, Serialize};

use crate::person::{store::StoreError, validator::Violation, PersonId};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorVerbosity {
    /// Server returns only the appropriate status code.
    StatusCode,
    /// Server returns only the message with the appropriate status code.
    Message,
    /// Server returns the message, the error type with the error content and the appropriate status code.
    #[default]
    Full,
}

impl ErrorVerbosity {
    pub fn should_generate_error_reason(&self) -> bool {
        matches!(self, ErrorVerbosity::Full)
    }
}

/// API error
///
/// [`ApiError::Validation`], [`ApiError::PersonNotFound`] and [`ApiError::NotFound`] always render the same way.
/// The remaining variants are failures of the HTTP layer around the person routes and render as JSON
/// according to their [`ErrorVerbosity`].
#[derive(Debug, From)]
pub enum ApiError {
    /// Internal server error
    ///
    /// This error is returned when an internal server error occurs.
    InternalServerError(InternalServerError),
    /// Body error
    ///
    /// This error is returned when the body is not a JSON object.
    Body(BodyError),
    /// Path error
    ///
    /// This error is returned when the path parameters can not be decoded.
    Path(PathError),
    /// Validation error
    ///
    /// This error is returned when a candidate person breaks a schema rule.
    Validation(Violation),
    /// Person not found
    ///
    /// This error is returned when no person has the requested id.
    PersonNotFound(PersonNotFoundError),
    /// Not found error
    ///
    /// This error is returned when no route matches the request.
    NotFound(NotFoundError),
}

impl ApiError {
    pub fn from_store_error(verbosity: ErrorVerbosity, err: StoreError) -> Self {
        match err {
            StoreError::NotFound { id } => PersonNotFoundError { id }.into(),
            StoreError::Validation(violation) => violation.into(),
            err @ (StoreError::DuplicateId { .. } | StoreError::InvalidSeed { .. }) => {
                InternalServerError::from_generic_error(verbosity, err).into()
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::InternalServerError(err) => verbose_response(err),
            ApiError::Body(err) => verbose_response(err),
            ApiError::Path(err) => verbose_response(err),
            ApiError::Validation(violation) => {
                (StatusCode::BAD_REQUEST, violation.to_string()).into_response()
            }
            ApiError::PersonNotFound(_) => StatusCode::NOT_FOUND.into_response(),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "Not found").into_response(),
        }
    }
}

/// An error raised by the HTTP layer, rendered according to its [`ErrorVerbosity`].
trait VerboseError: Serialize {
    const ERROR_TYPE: &'static str;

    const MESSAGE: &'static str;

    fn verbosity(&self) -> ErrorVerbosity;

    fn status_code(&self) -> StatusCode;
}

#[derive(Debug, Serialize)]
struct ApiErrorMessage {
    message: &'static str,
}

#[derive(Debug, Serialize)]
struct ApiErrorResponse<E> {
    message: &'static str,
    error_type: &'static str,
    error: E,
}

fn verbose_response<E: VerboseError>(error: E) -> Response {
    let status_code = error.status_code();

    match error.verbosity() {
        ErrorVerbosity::StatusCode => status_code.into_response(),
        ErrorVerbosity::Message => (
            status_code,
            Json(ApiErrorMessage {
                message: E::MESSAGE,
            }),
        )
            .into_response(),
        ErrorVerbosity::Full => (
            status_code,
            Json(ApiErrorResponse {
                message: E::MESSAGE,
                error_type: E::ERROR_TYPE,
                error,
            }),
        )
            .into_response(),
    }
}

#[derive(Debug, Serialize)]
pub struct InternalServerError {
    #[serde(skip)]
    verbosity: ErrorVerbosity,
    internal_server_error: Option<String>,
}

impl InternalServerError {
    pub fn from_generic_error<E: Into<anyhow::Error>>(verbosity: ErrorVerbosity, err: E) -> Self {
        let err: anyhow::Error = err.into();
        let err = format!("{err:#}");
        tracing::error!(%err, "Internal server error");

        let internal_server_error = verbosity.should_generate_error_reason().then_some(err);

        InternalServerError {
            verbosity,
            internal_server_error,
        }
    }
}

impl VerboseError for InternalServerError {
    const ERROR_TYPE: &'static str = "InternalServerError";

    const MESSAGE: &'static str = "An internal server error has occurred";

    fn verbosity(&self) -> ErrorVerbosity {
        self.verbosity
    }

    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

#[derive(Debug, Serialize)]
pub struct BodyError {
    #[serde(skip)]
    verbosity: ErrorVerbosity,
    #[serde(skip)]
    status_code: StatusCode,
    body_error_reason: Option<String>,
    body_expected_schema: Option<String>,
}

impl BodyError {
    pub fn from_json_rejection(
        verbosity: ErrorVerbosity,
        json_rejection: JsonRejection,
        body_expected_schema: String,
    ) -> Self {
        let status_code = json_rejection.status();

        let (body_error_reason, body_expected_schema) =
            match verbosity.should_generate_error_reason() {
                true => (Some(json_rejection.body_text()), Some(body_expected_schema)),
                false => (None, None),
            };

        BodyError {
            verbosity,
            status_code,
            body_error_reason,
            body_expected_schema,
        }
    }
}

impl VerboseError for BodyError {
    const ERROR_TYPE: &'static str = "Body";

    const MESSAGE: &'static str = "Failed to parse request body";

    fn verbosity(&self) -> ErrorVerbosity {
        self.verbosity
    }

    fn status_code(&self) -> StatusCode {
        self.status_code
    }
}

#[derive(Debug, Serialize)]
pub struct PathError {
    #[serde(skip)]
    verbosity: ErrorVerbosity,
    #[serde(skip)]
    status_code: StatusCode,
    path_error_reason: Option<String>,
}

impl PathError {
    pub fn from_path_rejection(verbosity: ErrorVerbosity, path_rejection: PathRejection) -> Self {
        let status_code = path_rejection.status();

        let path_error_reason = verbosity
            .should_generate_error_reason()
            .then(|| path_rejection.body_text());

        PathError {
            verbosity,
            status_code,
            path_error_reason,
        }
    }
}

impl VerboseError for PathError {
    const ERROR_TYPE: &'static str = "Path";

    const MESSAGE: &'static str = "Failed to parse path parameters";

    fn verbosity(&self) -> ErrorVerbosity {
        self.verbosity
    }

    fn status_code(&self) -> StatusCode {
        self.status_code
    }
}

#[derive(Debug)]
pub struct PersonNotFoundError {
    pub id: PersonId,
}

#[derive(Debug)]
pub struct NotFoundError;
