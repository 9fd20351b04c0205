//! Sneaker transaction management.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and the closed `TransactionType` and `Brand` enums
//! - The in-memory `TransactionStore` that owns the list of transactions
//! - The `TransactionForm` that turns user input into drafts
//! - View handlers and endpoints for the transactions page and modal

mod cancel_endpoint;
mod core;
mod create_endpoint;
mod delete_endpoint;
mod edit_endpoint;
mod form;
mod store;
mod transactions_page;

pub use cancel_endpoint::cancel_transaction_form_endpoint;
pub use core::Amount;
pub use create_endpoint::{create_transaction_endpoint, get_new_transaction_modal};
pub use delete_endpoint::delete_transaction_endpoint;
pub use edit_endpoint::{get_edit_transaction_modal, update_transaction_endpoint};
pub use store::TransactionStore;
pub use transactions_page::get_transactions_page;

#[cfg(test)]
pub use core::{Brand, Transaction, TransactionDraft, TransactionType};
#[cfg(test)]
pub use form::TransactionFormData;
