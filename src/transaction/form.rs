//! The add/edit transaction form and the modal that displays it.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use serde::{Deserialize, Serialize};
use time::Date;

use crate::{
    Error, endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, BUTTON_SECONDARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE,
        MODAL_STYLE,
    },
    transaction::core::{
        Amount, Brand, Transaction, TransactionDraft, TransactionId, TransactionType, format_date,
        parse_date,
    },
};

/// Whether the form creates a new transaction or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(TransactionId),
}

/// The form data posted by the transaction modal.
///
/// Every field is kept as text and checked when the form is submitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionFormData {
    pub date: String,
    pub amount: String,
    pub type_: String,
    pub brand: String,
}

/// An open transaction form.
///
/// A form is opened with [TransactionForm::open] and closed by either
/// [TransactionForm::submit] or [TransactionForm::cancel], both of which
/// consume it. The form never touches the store, it only hands a
/// [TransactionDraft] to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionForm {
    mode: FormMode,
    pub date: String,
    pub amount: String,
    pub type_: String,
    pub brand: String,
}

/// A submission that failed validation. The form stays open with the values
/// that were entered.
#[derive(Debug, PartialEq)]
pub struct Rejected {
    pub form: TransactionForm,
    pub error: Error,
}

impl IntoResponse for Rejected {
    /// Re-render the modal with the entered values and the reason the
    /// submission failed.
    fn into_response(self) -> Response {
        tracing::debug!("Rejected transaction form: {}", self.error);

        let error_message = format!("Error: {}", self.error);

        (
            StatusCode::UNPROCESSABLE_ENTITY,
            transaction_modal(&self.form, Some(&error_message)),
        )
            .into_response()
    }
}

impl TransactionForm {
    /// Open the form for editing `record`, or for a new transaction dated
    /// `today` if there is no record.
    pub fn open(record: Option<&Transaction>, today: Date) -> Self {
        match record {
            Some(transaction) => Self {
                mode: FormMode::Edit(transaction.id),
                date: format_date(transaction.date),
                amount: transaction.amount.to_string(),
                type_: transaction.type_.to_string(),
                brand: transaction.brand.to_string(),
            },
            None => Self {
                mode: FormMode::Create,
                date: format_date(today),
                amount: String::new(),
                type_: TransactionType::default().to_string(),
                brand: Brand::default().to_string(),
            },
        }
    }

    /// Rebuild an open form from the values a client posted.
    pub fn from_submission(mode: FormMode, data: TransactionFormData) -> Self {
        Self {
            mode,
            date: data.date,
            amount: data.amount,
            type_: data.type_,
            brand: data.brand,
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "Add Transaction",
            FormMode::Edit(_) => "Edit Transaction",
        }
    }

    /// Close the form by handing the draft to `on_save`.
    ///
    /// # Errors
    ///
    /// Returns the still open form if the date or amount is empty, if the
    /// date is not formatted as "YYYY-MM-DD", or if the type or brand is not
    /// one of the known values.
    pub fn submit<R>(self, on_save: impl FnOnce(TransactionDraft) -> R) -> Result<R, Rejected> {
        match self.draft() {
            Ok(draft) => Ok(on_save(draft)),
            Err(error) => Err(Rejected { form: self, error }),
        }
    }

    /// Close the form, discarding anything that was entered.
    pub fn cancel(self) {
        tracing::debug!("Discarded {:?} transaction form", self.mode);
    }

    fn draft(&self) -> Result<TransactionDraft, Error> {
        let date = self.date.trim();

        if date.is_empty() {
            return Err(Error::MissingField("date"));
        }

        let date = parse_date(date)?;
        let amount = Amount::new(&self.amount)?;
        let type_ = self.type_.parse::<TransactionType>()?;
        let brand = self.brand.parse::<Brand>()?;

        let id = match self.mode {
            FormMode::Create => None,
            FormMode::Edit(id) => Some(id),
        };

        Ok(TransactionDraft {
            id,
            date,
            amount,
            type_,
            brand,
        })
    }
}

/// The input fields of the transaction form.
pub fn transaction_form_fields(form: &TransactionForm) -> Markup {
    html! {
        div
        {
            label
                for="date"
                class=(FORM_LABEL_STYLE)
            {
                "Date"
            }

            input
                name="date"
                id="date"
                type="date"
                value=(form.date)
                required
                class=(FORM_TEXT_INPUT_STYLE);
        }

        div
        {
            label
                for="amount"
                class=(FORM_LABEL_STYLE)
            {
                "Amount"
            }

            div class="input-wrapper w-full"
            {
                input
                    name="amount"
                    id="amount"
                    type="number"
                    step="any"
                    placeholder="0"
                    value=(form.amount)
                    required
                    autofocus
                    class=(FORM_TEXT_INPUT_STYLE);
            }
        }

        div
        {
            label
                for="type_"
                class=(FORM_LABEL_STYLE)
            {
                "Type"
            }

            select
                name="type_"
                id="type_"
                class=(FORM_TEXT_INPUT_STYLE)
            {
                @for type_ in TransactionType::ALL {
                    option value=(type_) selected[type_.as_str() == form.type_] { (type_) }
                }
            }
        }

        div
        {
            label
                for="brand"
                class=(FORM_LABEL_STYLE)
            {
                "Brand"
            }

            select
                name="brand"
                id="brand"
                class=(FORM_TEXT_INPUT_STYLE)
            {
                @for brand in Brand::ALL {
                    option value=(brand) selected[brand.as_str() == form.brand] { (brand) }
                }
            }
        }
    }
}

/// The modal dialog holding the transaction form.
///
/// Validation errors are rendered below the fields. Failed submissions are
/// answered with an error status and swapped back into the modal container,
/// alerts in error responses are swapped out-of-band.
pub fn transaction_modal(form: &TransactionForm, error_message: Option<&str>) -> Markup {
    let body = html! {
        (transaction_form_fields(form))

        @if let Some(error_message) = error_message {
            p class="text-red-600 dark:text-red-400"
            {
                (error_message)
            }
        }

        div class="flex justify-end gap-2"
        {
            button
                type="button"
                hx-post=(endpoints::CANCEL_TRANSACTION_FORM)
                hx-include="closest form"
                hx-target="#modal-container"
                class=(BUTTON_SECONDARY_STYLE)
            {
                "Cancel"
            }

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Save" }
        }
    };

    html! {
        dialog
            open
            id="transaction-modal"
            class=(MODAL_STYLE)
        {
            h2 class="mb-4 text-xl font-bold" { (form.title()) }

            @match form.mode() {
                FormMode::Create => {
                    form
                        hx-post=(endpoints::TRANSACTIONS_API)
                        hx-target-error="#modal-container"
                        class="space-y-4"
                    {
                        (body)
                    }
                }
                FormMode::Edit(id) => {
                    form
                        hx-put=(endpoints::format_endpoint(endpoints::TRANSACTION, id))
                        hx-target-error="#modal-container"
                        class="space-y-4"
                    {
                        (body)
                    }
                }
            }
        }
    }
}
