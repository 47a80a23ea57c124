use axum::{http::StatusCode, response::IntoResponse};
use shared::errors::{AppErrorHttp, RepositoryError, ServiceError};

#[test]
fn typed_failures_map_to_the_client_error_family() {
    let cases = [
        (
            ServiceError::Unauthorized("CVC".to_string()),
            StatusCode::UNAUTHORIZED,
        ),
        (
            ServiceError::Forbidden("Balance".to_string()),
            StatusCode::FORBIDDEN,
        ),
        (
            ServiceError::NotFound("Card".to_string()),
            StatusCode::NOT_FOUND,
        ),
        (
            ServiceError::Conflict("Password".to_string()),
            StatusCode::CONFLICT,
        ),
        (
            ServiceError::Validation(vec!["amount: value out of range".to_string()]),
            StatusCode::BAD_REQUEST,
        ),
    ];

    for (err, expected) in cases {
        let response = AppErrorHttp(err).into_response();
        assert_eq!(response.status(), expected);
    }
}

#[test]
fn repository_absence_and_conflicts_pass_through() {
    let response = AppErrorHttp::from(RepositoryError::NotFound).into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response =
        AppErrorHttp::from(RepositoryError::AlreadyExists("card".to_string())).into_response();
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[test]
fn anything_untyped_is_a_generic_server_error() {
    let response =
        AppErrorHttp(ServiceError::InternalServerError("boom".to_string())).into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let response =
        AppErrorHttp(ServiceError::Custom("unexpected".to_string())).into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
