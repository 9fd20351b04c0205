//! Defines the endpoint for deleting a transaction.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use maud::html;

use crate::{
    AppState,
    alert::Alert,
    transaction::{core::TransactionId, transactions_page::empty_table_body},
};

/// A route handler for deleting a transaction, responds with an alert.
///
/// Deleting a transaction that does not exist is not an error.
pub async fn delete_transaction_endpoint(
    Path(transaction_id): Path<TransactionId>,
    State(state): State<AppState>,
) -> Response {
    let mut store = match state.lock_store() {
        Ok(store) => store,
        Err(error) => return error.into_alert_response(),
    };

    *store = store.remove(transaction_id);

    let alert = Alert::SuccessSimple {
        message: "Transaction deleted successfully".to_owned(),
    };

    if !store.is_empty() {
        // The status code has to be 200 OK or HTMX will not delete the table row.
        return alert.into_response();
    }

    html! {
        (alert.into_html())
        (empty_table_body())
    }
    .into_response()
}

#[cfg(test)]
mod tests {
    use axum::{
        Router,
        extract::{Path, State},
        http::StatusCode,
        routing::delete,
    };
    use axum_test::TestServer;
    use time::macros::date;

    use crate::{
        AppState, endpoints,
        test_utils::{assert_valid_html, parse_html_fragment},
        transaction::{
            TransactionStore,
            core::{Amount, Brand, Transaction, TransactionType},
        },
    };

    use super::delete_transaction_endpoint;

    fn get_state() -> AppState {
        AppState::new(
            TransactionStore::with_transactions(vec![
                Transaction {
                    id: 1,
                    date: date!(2024 - 01 - 01),
                    amount: Amount::new_unchecked("100"),
                    type_: TransactionType::Income,
                    brand: Brand::Nike,
                },
                Transaction {
                    id: 2,
                    date: date!(2024 - 01 - 02),
                    amount: Amount::new_unchecked("200"),
                    type_: TransactionType::Expense,
                    brand: Brand::Adidas,
                },
            ]),
            "Etc/UTC",
        )
        .expect("Could not create app state")
    }

    #[tokio::test]
    async fn delete_removes_transaction() {
        let state = get_state();

        let response = delete_transaction_endpoint(Path(1), State(state.clone())).await;

        assert_eq!(response.status(), StatusCode::OK);
        let html = parse_html_fragment(response).await;
        assert_valid_html(&html);

        let store = state.lock_store().unwrap();
        let ids = store
            .transactions()
            .iter()
            .map(|transaction| transaction.id)
            .collect::<Vec<_>>();
        assert_eq!(ids, [2]);
    }

    #[tokio::test]
    async fn delete_twice_is_a_no_op() {
        let state = get_state();

        delete_transaction_endpoint(Path(1), State(state.clone())).await;
        let response = delete_transaction_endpoint(Path(1), State(state.clone())).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(state.lock_store().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn deleted_ids_are_not_reused() {
        let state = get_state();
        let app = Router::new()
            .route(endpoints::TRANSACTION, delete(delete_transaction_endpoint))
            .with_state(state.clone());

        let server = TestServer::new(app).expect("Could not create test server.");

        server
            .delete(&endpoints::format_endpoint(endpoints::TRANSACTION, 2))
            .await
            .assert_status_ok();

        let mut store = state.lock_store().unwrap();
        let (next_store, added) = store.add(crate::transaction::TransactionDraft {
            id: None,
            date: date!(2024 - 01 - 03),
            amount: Amount::new_unchecked("50"),
            type_: TransactionType::Income,
            brand: Brand::Puma,
        });
        *store = next_store;

        assert_eq!(added.id, 3);
    }

    #[tokio::test]
    async fn deleting_last_transaction_swaps_in_placeholder() {
        let state = get_state();
        let app = Router::new()
            .route(endpoints::TRANSACTION, delete(delete_transaction_endpoint))
            .with_state(state.clone());

        let server = TestServer::new(app).expect("Could not create test server.");

        let response = server
            .delete(&endpoints::format_endpoint(endpoints::TRANSACTION, 1))
            .await;
        response.assert_status_ok();
        assert!(!response.text().contains("No transactions yet."));

        let response = server
            .delete(&endpoints::format_endpoint(endpoints::TRANSACTION, 2))
            .await;
        response.assert_status_ok();
        let text = response.text();
        assert!(text.contains(r#"<tbody id="transactions-table-body" hx-swap-oob="true">"#));
        assert!(text.contains("No transactions yet."));
        assert!(text.contains("Transaction deleted successfully"));
    }
}
