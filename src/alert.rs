//! Alert system for displaying success and error messages to users.
//!
//! Alerts are swapped out-of-band into the `#alert-container` element that
//! every page includes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

/// A message shown to the user after an action.
#[derive(Debug, Clone, PartialEq)]
pub enum Alert {
    SuccessSimple { message: String },
    Error { message: String, details: String },
}

impl Alert {
    fn is_error(&self) -> bool {
        matches!(self, Alert::Error { .. })
    }

    pub fn into_html(self) -> Markup {
        let container_style = if self.is_error() {
            "p-4 mb-4 text-sm text-red-800 rounded-lg bg-red-50 \
            dark:bg-gray-800 dark:text-red-400"
        } else {
            "p-4 mb-4 text-sm text-green-800 rounded-lg bg-green-50 \
            dark:bg-gray-800 dark:text-green-400"
        };

        let (message, details) = match self {
            Alert::Error { message, details } => (message, details),
            Alert::SuccessSimple { message } => (message, String::new()),
        };

        html! {
            div
                id="alert-container"
                hx-swap-oob="true"
                class="w-full max-w-md px-4"
                style="position: fixed; bottom: 1rem; left: 50%; transform: translateX(-50%); z-index: 9999;"
            {
                div role="alert" class=(container_style)
                {
                    div class="flex justify-between items-start gap-2"
                    {
                        p class="font-medium" { (message) }

                        button
                            type="button"
                            aria-label="Close"
                            onclick="this.closest('#alert-container').classList.add('hidden')"
                        {
                            "×"
                        }
                    }

                    @if !details.is_empty() {
                        span { (details) }
                    }
                }
            }
        }
    }
}

impl IntoResponse for Alert {
    fn into_response(self) -> Response {
        let status_code = if self.is_error() {
            StatusCode::INTERNAL_SERVER_ERROR
        } else {
            StatusCode::OK
        };

        (status_code, self.into_html()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, response::IntoResponse};
    use scraper::{Html, Selector};

    use super::Alert;

    #[test]
    fn success_alert_renders_message() {
        let markup = Alert::SuccessSimple {
            message: "Transaction deleted".to_owned(),
        }
        .into_html();

        let html = Html::parse_fragment(&markup.into_string());
        let text = html
            .select(&Selector::parse("p").unwrap())
            .next()
            .expect("No message found")
            .text()
            .collect::<String>();
        assert_eq!(text, "Transaction deleted");
    }

    #[test]
    fn error_alert_uses_server_error_status() {
        let response = Alert::Error {
            message: "Something went wrong".to_owned(),
            details: "Try again".to_owned(),
        }
        .into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
