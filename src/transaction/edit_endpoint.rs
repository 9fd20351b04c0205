//! Defines the modal and endpoint for editing a transaction.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;
use axum_htmx::{HxRedirect, HxRequest};

use crate::{
    AppState, Error, endpoints,
    transaction::{
        core::TransactionId,
        form::{FormMode, TransactionForm, TransactionFormData, transaction_modal},
        transactions_page::transactions_view,
    },
};

/// Render the edit transaction modal pre-filled with the transaction's values.
///
/// # Errors
///
/// If there is no transaction with `transaction_id`, htmx requests get a 404
/// alert and other requests get the 404 page.
pub async fn get_edit_transaction_modal(
    Path(transaction_id): Path<TransactionId>,
    HxRequest(is_htmx_request): HxRequest,
    State(state): State<AppState>,
) -> Result<Response, Error> {
    let today = state
        .today()
        .inspect_err(|error| tracing::error!("Could not get today's date: {error}"))?;
    let store = state.lock_store()?;

    let Some(transaction) = store.get(transaction_id) else {
        tracing::debug!("No transaction {transaction_id} to edit");

        if is_htmx_request {
            return Ok(Error::NotFound.into_alert_response());
        }

        return Err(Error::NotFound);
    };

    let modal = transaction_modal(&TransactionForm::open(Some(transaction), today), None);

    if is_htmx_request {
        Ok(modal.into_response())
    } else {
        Ok(transactions_view(store.transactions(), Some(modal)).into_response())
    }
}

/// A route handler for replacing a transaction, redirects to the transactions view on success.
///
/// Updating a transaction that no longer exists leaves the list unchanged.
pub async fn update_transaction_endpoint(
    Path(transaction_id): Path<TransactionId>,
    State(state): State<AppState>,
    Form(data): Form<TransactionFormData>,
) -> Response {
    let form = TransactionForm::from_submission(FormMode::Edit(transaction_id), data);

    let mut store = match state.lock_store() {
        Ok(store) => store,
        Err(error) => return error.into_alert_response(),
    };

    match form.submit(|draft| store.update(draft.with_id(transaction_id))) {
        Ok(next_store) => {
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
