//! Defines the endpoint for closing the transaction modal without saving.

use axum::response::Html;
use axum_extra::extract::Form;

use crate::transaction::form::{FormMode, TransactionForm, TransactionFormData};

/// Discard the values in the transaction modal and close it.
///
/// Responds with an empty body, which clears the modal container.
pub async fn cancel_transaction_form_endpoint(
    Form(data): Form<TransactionFormData>,
) -> Html<&'static str> {
    // Nothing is saved, so the mode of the discarded form does not matter.
    TransactionForm::from_submission(FormMode::Create, data).cancel();

    Html("")
}
