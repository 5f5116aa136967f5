use glcore::error::StorageError;
use http::status::StatusCode;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum AppError {
    #[error("Browser storage is unavailable")]
    StorageUnavailable,
    #[error("Navigation failed")]
    NavigationFailed,
    #[error("500 Internal Server Error")]
    InternalServerError,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::StorageUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<glsession::error::Error> for AppError {
    fn from(e: glsession::error::Error) -> Self {
        log::error!("session resolution failed: {e}");
        match e {
            glsession::error::Error::Storage(StorageError::Unavailable(_)) => Self::StorageUnavailable,
            glsession::error::Error::Navigation(_) => Self::NavigationFailed,
            _ => Self::InternalServerError,
        }
    }
}

#[cfg(test)]
mod tests {
    use glcore::error::NavigationError;
    use super::*;

    #[test]
    fn from_session_error() {
        let e: AppError = glsession::error::Error::Storage(
            StorageError::Unavailable("no window".to_string())
        ).into();
        assert_eq!(e, AppError::StorageUnavailable);
        assert_eq!(e.status_code(), StatusCode::SERVICE_UNAVAILABLE);

        let e: AppError = glsession::error::Error::Storage(
            StorageError::Backend("quota exceeded".to_string())
        ).into();
        assert_eq!(e, AppError::InternalServerError);

        let e: AppError = glsession::error::Error::Navigation(
            NavigationError::Unavailable("no window".to_string())
        ).into();
        assert_eq!(e, AppError::NavigationFailed);
        assert_eq!(e.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let e: AppError = glsession::error::Error::Misconfiguration("store").into();
        assert_eq!(e.to_string(), "500 Internal Server Error");
    }
}
