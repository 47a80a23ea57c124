use crate::errors::{error::ErrorResponse, repository::RepositoryError, service::ServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, info, warn};

/// Boundary adapter: turns a typed service failure into the matching HTTP
/// client-error status (401/403/404/409), leaving everything untyped as a
/// generic 500.
#[derive(Debug)]
pub struct AppErrorHttp(pub ServiceError);

impl IntoResponse for AppErrorHttp {
    fn into_response(self) -> Response {
        let (status, msg) = match self.0 {
            ServiceError::Unauthorized(entity) => {
                warn!("🔐 Unauthorized: {entity}");
                (StatusCode::UNAUTHORIZED, format!("Unauthorized: {entity}"))
            }
            ServiceError::Forbidden(entity) => {
                warn!("⛔ Forbidden: {entity}");
                (StatusCode::FORBIDDEN, format!("Forbidden: {entity}"))
            }
            ServiceError::NotFound(entity) => {
                info!("🔍 Not found: {entity}");
                (StatusCode::NOT_FOUND, format!("Not found: {entity}"))
            }
            ServiceError::Conflict(entity) => {
                warn!("⚡ Conflict: {entity}");
                (StatusCode::CONFLICT, format!("Conflict: {entity}"))
            }
            ServiceError::Validation(errors) => {
                warn!("📝 Validation failed: {errors:?}");
                (
                    StatusCode::BAD_REQUEST,
                    format!("Validation failed: {errors:?}"),
                )
            }
            ServiceError::Repo(repo_err) => match repo_err {
                RepositoryError::NotFound => {
                    info!("🔍 Resource not found");
                    (StatusCode::NOT_FOUND, "Not found".to_string())
                }
                RepositoryError::Conflict(msg) => {
                    warn!("⚡ Conflict detected: {msg}");
                    (StatusCode::CONFLICT, msg)
                }
                RepositoryError::AlreadyExists(msg) => {
                    warn!("📦 Resource already exists: {msg}");
                    (StatusCode::CONFLICT, msg)
                }
                RepositoryError::ForeignKey(msg) => {
                    warn!("🔗 Foreign key violation: {msg}");
                    (
                        StatusCode::BAD_REQUEST,
                        format!("Foreign key violation: {msg}"),
                    )
                }
                RepositoryError::Sqlx(err) => {
                    error!("💾 Database error: {err}");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Database error".to_string(),
                    )
                }
                RepositoryError::Custom(msg) => {
                    error!("⚙️ Custom repository error: {msg}");
                    (StatusCode::INTERNAL_SERVER_ERROR, msg)
                }
            },
            ServiceError::Bcrypt(err) => {
                error!("🔒 Bcrypt error: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal hashing error".to_string(),
                )
            }
            ServiceError::InternalServerError(msg) => {
                error!("🔥 Internal server error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            ServiceError::Custom(msg) => {
                error!("⚙️ Custom service error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        let body = Json(ErrorResponse {
            status: "error".to_string(),
            message: msg,
        });

        (status, body).into_response()
    }
}

impl From<ServiceError> for AppErrorHttp {
    fn from(error: ServiceError) -> Self {
        AppErrorHttp(error)
    }
}

impl From<RepositoryError> for AppErrorHttp {
    fn from(error: RepositoryError) -> Self {
        AppErrorHttp(ServiceError::Repo(error))
    }
}
