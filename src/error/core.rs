use thiserror::Error as ThisError;

/// Failure taxonomy for the dispatch pipeline.
///
/// Errors propagate untouched through the middleware call stack; the front
/// controller is the single place that catches them and hands them to the
/// [`JsonErrorHandler`](crate::error::JsonErrorHandler).
#[derive(Debug, ThisError)]
pub enum Error {
    /// The request path could not be resolved to a controller.
    #[error("{0}")]
    Routing(String),

    /// The caller could not be authenticated.
    #[error("{0}")]
    Auth(String),

    /// The caller is authenticated but not permitted.
    #[error("{0}")]
    AccessDenied(String),

    /// An application error that carries its own HTTP status code.
    ///
    /// Codes outside the 400–599 range are not trusted and fall back to 500
    /// during translation.
    #[error("{msg}")]
    WithStatus { code: u16, msg: String },

    /// A panic caught at the dispatch boundary. Only the front controller's
    /// fatal trap constructs this variant.
    #[error("{0}")]
    Fatal(String),

    /// Any other application error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    pub fn routing(msg: impl Into<String>) -> Self {
        Error::Routing(msg.into())
    }

    pub fn auth(msg: impl Into<String>) -> Self {
        Error::Auth(msg.into())
    }

    pub fn access_denied(msg: impl Into<String>) -> Self {
        Error::AccessDenied(msg.into())
    }

    pub fn with_status(code: u16, msg: impl Into<String>) -> Self {
        Error::WithStatus {
            code,
            msg: msg.into(),
        }
    }

    /// Short category label used in logs and exposed error detail.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Routing(_) => "RoutingError",
            Error::Auth(_) => "AuthError",
            Error::AccessDenied(_) => "AccessDeniedError",
            Error::WithStatus { .. } => "ApplicationError",
            Error::Fatal(_) => "FatalError",
            Error::Other(_) => "ApplicationError",
        }
    }

    /// Classify this error into an HTTP status code.
    ///
    /// An explicit, in-range code on the error wins; the closed categories
    /// map to their fixed codes; everything else is a 500.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Error::WithStatus { code, .. } if (400..=599).contains(code) => *code,
            Error::Routing(_) => 404,
            Error::Auth(_) => 401,
            Error::AccessDenied(_) => 403,
            _ => 500,
        }
    }
}
