//! Defines the modal and endpoint for adding a transaction.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
// Use axum_extra's Form for consistent handling of empty strings.
use axum_extra::extract::Form;
use axum_htmx::{HxRedirect, HxRequest};

use crate::{
    AppState, Error, endpoints,
    transaction::{
        form::{FormMode, TransactionForm, TransactionFormData, transaction_modal},
        transactions_page::transactions_view,
    },
};

/// Render the add transaction modal.
///
/// htmx requests get the modal on its own, other requests get the
/// transactions page with the modal open.
pub async fn get_new_transaction_modal(
    HxRequest(is_htmx_request): HxRequest,
    State(state): State<AppState>,
) -> Result<Response, Error> {
    let today = state
        .today()
        .inspect_err(|error| tracing::error!("Could not get today's date: {error}"))?;

    let modal = transaction_modal(&TransactionForm::open(None, today), None);

    if is_htmx_request {
        return Ok(modal.into_response());
    }

    let store = state.lock_store()?;

    Ok(transactions_view(store.transactions(), Some(modal)).into_response())
}

/// A route handler for adding a transaction, redirects to the transactions view on success.
pub async fn create_transaction_endpoint(
    State(state): State<AppState>,
    Form(data): Form<TransactionFormData>,
) -> Response {
    let form = TransactionForm::from_submission(FormMode::Create, data);

    let mut store = match state.lock_store() {
        Ok(store) => store,
        Err(error) => return error.into_alert_response(),
    };

    match form.submit(|draft| store.add(draft)) {
        Ok((next_store, _)) => {
            *store = next_store;

            (
                HxRedirect(endpoints::TRANSACTIONS_VIEW.to_owned()),
                StatusCode::SEE_OTHER,
            )
                .into_response()
        }
        Err(rejected) => rejected.into_response(),
    }
}
