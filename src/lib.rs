//! Sneaker Ledger is a web app for tracking sneaker resale transactions.
//!
//! This library provides the server that renders the transactions table and
//! the add/edit modal as HTML pages, keeping the transactions in memory.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use tokio::signal;

mod alert;
mod app_state;
mod endpoints;
mod html;
mod internal_server_error;
mod not_found;
mod routing;
mod timezone;
mod transaction;

#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use routing::build_router;
pub use timezone::get_local_date;
pub use transaction::TransactionStore;

use crate::{
    alert::Alert, internal_server_error::InternalServerError,
    not_found::get_404_not_found_response,
};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A required form field was left empty.
    ///
    /// The string is the name of the field, e.g. "amount".
    #[error("{0} is required")]
    MissingField(&'static str),

    /// A transaction date that is not formatted as "YYYY-MM-DD".
    #[error("\"{0}\" is not a valid date, expected the format YYYY-MM-DD")]
    InvalidDate(String),

    /// A transaction type other than "Income" or "Expense".
    #[error("\"{0}\" is not a valid transaction type")]
    InvalidTransactionType(String),

    /// A brand that is not one of the supported sneaker brands.
    #[error("\"{0}\" is not a valid brand")]
    InvalidBrand(String),

    /// The requested resource was not found.
    ///
    /// For HTTP request handlers, the client should check that the parameters
    /// (e.g., ID) are correct and that the resource has been created.
    #[error("the requested resource could not be found")]
    NotFound,

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),

    /// Could not acquire the lock on the transaction store.
    #[error("could not acquire the transaction store lock")]
    StoreLockError,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => get_404_not_found_response(),
            Error::InvalidTimezoneError(timezone) => InternalServerError {
                description: "Invalid Timezone Settings",
                fix: &format!(
                    "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to valid, canonical timezone string"
                ),
            }
            .into_response(),
            Error::StoreLockError => InternalServerError::default().into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}

impl Error {
    fn into_alert_response(self) -> Response {
        let (status_code, message, details) = match self {
            Error::InvalidTimezoneError(timezone) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Invalid Timezone Settings",
                format!(
                    "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to valid, canonical timezone string"
                ),
            ),
            error @ (Error::MissingField(_)
            | Error::InvalidDate(_)
            | Error::InvalidTransactionType(_)
            | Error::InvalidBrand(_)) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "Invalid transaction",
                error.to_string(),
            ),
            Error::NotFound => (
                StatusCode::NOT_FOUND,
                "Transaction not found",
                "Try refreshing the page to see if the transaction has been deleted.".to_owned(),
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Something went wrong",
                "An unexpected error occurred, check the server logs for more details.".to_owned(),
            ),
        };

        let alert = Alert::Error {
            message: message.to_owned(),
            details,
        };

        (status_code, alert.into_html()).into_response()
    }
}
