use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::types::SeriesError;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid ticker: {0}")]
    InvalidTicker(String),

    #[error("No valid cryptocurrency tickers provided.")]
    NoValidTickers,

    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    #[error("No data received for the provided tickers: {0}")]
    DataUnavailable(String),

    #[error("External API error: {0}")]
    ExternalApi(String),

    #[error(transparent)]
    Series(#[from] SeriesError),

    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidTicker(_)
            | AppError::NoValidTickers
            | AppError::InvalidPeriod(_) => StatusCode::BAD_REQUEST,
            AppError::DataUnavailable(_)
            | AppError::ExternalApi(_)
            | AppError::Reqwest(_)
            | AppError::Series(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = Json(json!({
            "error": self.to_string(),
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::NoValidTickers.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::InvalidTicker("btc".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::DataUnavailable("BTC-USD".into()).status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            AppError::from(SeriesError::NonIncreasingTime { index: 3 }).status(),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            AppError::NoValidTickers.to_string(),
            "No valid cryptocurrency tickers provided."
        );
        assert_eq!(
            AppError::InvalidPeriod("7y".into()).to_string(),
            "Invalid period: 7y"
        );
    }

    #[test]
    fn test_into_response_status() {
        let response = AppError::NoValidTickers.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
