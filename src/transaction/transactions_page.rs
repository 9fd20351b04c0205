//! The page listing every transaction in a table.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error, endpoints,
    html::{
        BUTTON_DELETE_STYLE, BUTTON_LINK_STYLE, BUTTON_PRIMARY_STYLE, PAGE_CONTAINER_STYLE,
        TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base, dollar_input_styles,
        format_amount,
    },
    transaction::core::{Transaction, format_date},
};

const TABLE_BODY_ID: &str = "transactions-table-body";

fn placeholder_row() -> Markup {
    html! {
        tr
        {
            td
                colspan="5"
                class="px-6 py-4 text-center text-gray-500 dark:text-gray-400"
            {
                "No transactions yet."
            }
        }
    }
}

/// An out-of-band swap that replaces the table body with the placeholder row.
///
/// Table elements cannot stand on their own in a response, so the body is
/// wrapped in a template for htmx.
pub(super) fn empty_table_body() -> Markup {
    html! {
        template
        {
            tbody id=(TABLE_BODY_ID) hx-swap-oob="true"
            {
                (placeholder_row())
            }
        }
    }
}

/// Render the transactions page.
pub async fn get_transactions_page(State(state): State<AppState>) -> Result<Response, Error> {
    let store = state.lock_store()?;

    Ok(transactions_view(store.transactions(), None).into_response())
}

/// The full transactions page, optionally with `modal` already open.
///
/// Rows are shown in insertion order.
pub(super) fn transactions_view(transactions: &[Transaction], modal: Option<Markup>) -> Markup {
    let table_row = |transaction: &Transaction| {
        let edit_url = endpoints::format_endpoint(endpoints::EDIT_TRANSACTION_VIEW, transaction.id);
        let delete_url = endpoints::format_endpoint(endpoints::TRANSACTION, transaction.id);

        html!(
            tr class=(TABLE_ROW_STYLE) data-transaction-id=(transaction.id)
            {
                td class=(TABLE_CELL_STYLE) { (format_date(transaction.date)) }
                td class=(TABLE_CELL_STYLE) { (format_amount(&transaction.amount)) }
                td class=(TABLE_CELL_STYLE) { (transaction.type_) }
                td class=(TABLE_CELL_STYLE) { (transaction.brand) }
                td class=(TABLE_CELL_STYLE)
                {
                    div class="flex gap-4"
                    {
                        button
                            type="button"
                            hx-get=(edit_url)
                            hx-target="#modal-container"
                            hx-target-error="#alert-container"
                            class=(BUTTON_LINK_STYLE)
                        {
                            "Edit"
                        }

                        button
                            type="button"
                            hx-delete=(delete_url)
                            hx-target="closest tr"
                            hx-swap="delete"
                            hx-target-error="#alert-container"
                            class=(BUTTON_DELETE_STYLE)
                        {
                            "Delete"
                        }
                    }
                }
            }
        )
    };

    let content = html!(
        main class=(PAGE_CONTAINER_STYLE)
        {
            section class="space-y-4 w-full max-w-5xl"
            {
                header class="flex justify-between flex-wrap items-end"
                {
                    h1 class="text-xl font-bold" { "Sneaker Transactions" }

                    button
                        type="button"
                        hx-get=(endpoints::NEW_TRANSACTION_VIEW)
                        hx-target="#modal-container"
                        class=(BUTTON_PRIMARY_STYLE)
                    {
                        "Add Transaction"
                    }
                }

                section class="dark:bg-gray-800 overflow-x-auto"
                {
                    table class="w-full text-sm text-left rtl:text-right
                        text-gray-500 dark:text-gray-400"
                    {
                        thead class=(TABLE_HEADER_STYLE)
                        {
                            tr
                            {
                                @for heading in ["Date", "Amount", "Type", "Brand", "Actions"] {
                                    th scope="col" class=(TABLE_CELL_STYLE) { (heading) }
                                }
                            }
                        }

                        tbody id=(TABLE_BODY_ID)
                        {
                            @for transaction in transactions {
                                (table_row(transaction))
                            }

                            @if transactions.is_empty() {
                                (placeholder_row())
                            }
                        }
                    }
                }
            }

            div id="modal-container"
            {
                @if let Some(modal) = modal {
                    (modal)
                }
            }
        }
    );

    base("Transactions", &[dollar_input_styles()], &content)
}
