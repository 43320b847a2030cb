use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use std::fmt;
use yahoo_api::api::ChartError;

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

/// Failure of one proxy request. Every kind reaches the client as
/// `{"error": message}`; only the input error gets its own status.
#[derive(Debug)]
pub enum ProxyError {
    SymbolRequired,
    Chart(ChartError),
}

impl ProxyError {
    pub fn kind(&self) -> &'static str {
        match self {
            ProxyError::SymbolRequired => "input",
            ProxyError::Chart(ChartError::Timeout | ChartError::Transport(_)) => {
                "upstream_transport"
            }
            ProxyError::Chart(ChartError::Upstream(_)) => "upstream_semantic",
            ProxyError::Chart(ChartError::Parse(_)) => "local_parse",
        }
    }
}

impl fmt::Display for ProxyError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ProxyError::SymbolRequired => write!(f, "Symbol required"),
            ProxyError::Chart(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ProxyError {}

impl From<ChartError> for ProxyError {
    fn from(err: ChartError) -> ProxyError {
        ProxyError::Chart(err)
    }
}

impl From<serde_json::Error> for ProxyError {
    fn from(err: serde_json::Error) -> ProxyError {
        ProxyError::Chart(ChartError::from(err))
    }
}

impl ResponseError for ProxyError {
    fn status_code(&self) -> StatusCode {
        match self {
            ProxyError::SymbolRequired => StatusCode::BAD_REQUEST,
            ProxyError::Chart(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}
