//! Application router configuration.

use axum::{
    Router,
    response::Redirect,
    routing::{get, post, put},
};

use crate::{
    AppState, endpoints,
    internal_server_error::get_internal_server_error_page,
    not_found::get_404_not_found,
    transaction::{
        cancel_transaction_form_endpoint, create_transaction_endpoint,
        delete_transaction_endpoint, get_edit_transaction_modal, get_new_transaction_modal,
        get_transactions_page, update_transaction_endpoint,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::TRANSACTIONS_VIEW, get(get_transactions_page))
        .route(
            endpoints::NEW_TRANSACTION_VIEW,
            get(get_new_transaction_modal),
        )
        .route(
            endpoints::EDIT_TRANSACTION_VIEW,
            get(get_edit_transaction_modal),
        )
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        )
        .route(
            endpoints::TRANSACTIONS_API,
            post(create_transaction_endpoint),
        )
        .route(
            endpoints::CANCEL_TRANSACTION_FORM,
            post(cancel_transaction_form_endpoint),
        )
        .route(
            endpoints::TRANSACTION,
            put(update_transaction_endpoint).delete(delete_transaction_endpoint),
        )
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The root path '/' redirects to the transactions page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::TRANSACTIONS_VIEW)
}


#[cfg(test)]
mod router_tests {
    use axum_test::TestServer;
    use scraper::{Html, Selector};
    use time::macros::date;

    use crate::{
        AppState, build_router, endpoints,
        transaction::{
            Amount, Brand, Transaction, TransactionFormData, TransactionStore, TransactionType,
        },
    };

    fn get_server() -> (TestServer, AppState) {
        let state = AppState::new(
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
        .expect("Could not create app state");

        let server =
            TestServer::new(build_router(state.clone())).expect("Could not create test server.");

        (server, state)
    }

    async fn row_ids(server: &TestServer) -> Vec<String> {
        let text = server.get(endpoints::TRANSACTIONS_VIEW).await.text();
        let html = Html::parse_document(&text);

        html.select(&Selector::parse("tbody tr[data-transaction-id]").unwrap())
            .filter_map(|row| row.value().attr("data-transaction-id"))
            .map(str::to_owned)
            .collect()
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let (server, _) = get_server();

        server.get("/sneakers").await.assert_status_not_found();
    }

    #[tokio::test]
    async fn add_edit_delete_flow() {
        let (server, state) = get_server();

        server
            .post(endpoints::TRANSACTIONS_API)
            .form(&TransactionFormData {
                date: "2024-01-03".to_owned(),
                amount: "50".to_owned(),
                type_: "Income".to_owned(),
                brand: "Puma".to_owned(),
            })
            .await
            .assert_status_see_other();
        assert_eq!(row_ids(&server).await, ["1", "2", "3"]);

        server
            .put(&endpoints::format_endpoint(endpoints::TRANSACTION, 2))
            .form(&TransactionFormData {
                date: "2024-01-02".to_owned(),
                amount: "250".to_owned(),
                type_: "Expense".to_owned(),
                brand: "Reebok".to_owned(),
            })
            .await
            .assert_status_see_other();

        server
            .delete(&endpoints::format_endpoint(endpoints::TRANSACTION, 1))
            .await
            .assert_status_ok();
        assert_eq!(row_ids(&server).await, ["2", "3"]);

        let store = state.lock_store().unwrap();
        let edited = store.get(2).expect("transaction 2 should exist");
        assert_eq!(edited.amount, Amount::new_unchecked("250"));
        assert_eq!(edited.brand, Brand::Reebok);
    }

    #[tokio::test]
    async fn edit_modal_for_missing_transaction_is_not_found() {
        let (server, _) = get_server();

        server
            .get(&endpoints::format_endpoint(endpoints::EDIT_TRANSACTION_VIEW, 99))
            .await
            .assert_status_not_found();
    }
}
