//! Application error type.
//!
//! Every failure raised by middleware or handlers is an [`AppError`]: an HTTP
//! status paired with an [`anyhow::Error`] describing the cause. The status
//! selects the error kind:
//!
//! | kind | status |
//! |------|--------|
//! | route not found | 404 |
//! | unauthorized | 401 |
//! | forbidden | 403 |
//! | bad request | 400 |
//! | internal failure | 500 |
//!
//! Any error type convertible into [`anyhow::Error`] turns into an internal
//! failure through `?`, so unexpected collaborator errors never escape
//! unclassified.

use std::fmt;

use anyhow::Error;
use axum::http::StatusCode;

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub error: Error,
}

impl AppError {
    pub fn new<E>(status: StatusCode, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            status,
            error: err.into(),
        }
    }

    fn with_message<M>(status: StatusCode, message: M) -> Self
    where
        M: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        Self::new(status, Error::msg(message))
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err)
    }

    pub fn not_found<M>(message: M) -> Self
    where
        M: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        Self::with_message(StatusCode::NOT_FOUND, message)
    }

    pub fn unauthorized<M>(message: M) -> Self
    where
        M: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        Self::with_message(StatusCode::UNAUTHORIZED, message)
    }

    pub fn forbidden<M>(message: M) -> Self
    where
        M: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        Self::with_message(StatusCode::FORBIDDEN, message)
    }

    pub fn bad_request<M>(message: M) -> Self
    where
        M: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        Self::with_message(StatusCode::BAD_REQUEST, message)
    }

    /// The message shown to clients for this error.
    pub fn message(&self) -> String {
        self.error.to_string()
    }

    pub fn is_server_error(&self) -> bool {
        self.status.is_server_error()
    }
}

impl<E> From<E> for AppError
where
    E: Into<Error>,
{
    fn from(err: E) -> Self {
        AppError::internal(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_status() {
        assert_eq!(AppError::not_found("x").status, StatusCode::NOT_FOUND);
        assert_eq!(AppError::unauthorized("x").status, StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::forbidden("x").status, StatusCode::FORBIDDEN);
        assert_eq!(AppError::bad_request("x").status, StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::internal(anyhow::anyhow!("boom")).status,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_message_is_preserved() {
        let err = AppError::bad_request("Missing lat/lng");
        assert_eq!(err.message(), "Missing lat/lng");
        assert!(!err.is_server_error());
    }

    #[test]
    fn test_question_mark_converts_to_internal() {
        fn parse() -> Result<i32, AppError> {
            let value: i32 = "not-a-number".parse()?;
            Ok(value)
        }

        let err = parse().unwrap_err();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.is_server_error());
    }
}
