use std::net::{IpAddr, SocketAddr};

use axum::{
    Router,
    extract::{MatchedPath, Request},
};
use axum_server::Handle;
use clap::Parser;
use tower_http::trace::TraceLayer;

#[cfg(debug_assertions)]
use tower_livereload::LiveReloadLayer;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use sneaker_ledger::{AppState, TransactionStore, build_router, get_local_date, graceful_shutdown};

/// The web server for tracking sneaker resale transactions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The address to serve the app from.
    #[arg(long, default_value = "127.0.0.1")]
    host: IpAddr,

    /// The port to serve the app from.
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    ///
    /// Used to pick today's date for new transactions.
    #[arg(long, default_value = "Etc/UTC")]
    timezone: String,

    /// Start without the sample transactions.
    #[arg(long)]
    empty: bool,
}

#[tokio::main]
async fn main() {
    setup_logging();

    let args = Args::parse();

    let Some(today) = get_local_date(&args.timezone) else {
        tracing::error!(
            "Could not get local timezone \"{}\". Use a valid, canonical timezone name, e.g. \"Pacific/Auckland\"",
            args.timezone
        );
        std::process::exit(1);
    };

    let store = if args.empty {
        TransactionStore::new()
    } else {
        TransactionStore::sample(today)
    };

    let state = match AppState::new(store, &args.timezone) {
        Ok(state) => state,
        Err(error) => {
            tracing::error!("Could not create app state: {error}");
            std::process::exit(1);
        }
    };

    let handle = Handle::new();
    tokio::spawn(graceful_shutdown(handle.clone()));

    let router = add_tracing_layer(build_router(state));

    #[cfg(debug_assertions)]
    let router = router.layer(LiveReloadLayer::new());

    let addr = SocketAddr::from((args.host, args.port));

    tracing::info!("HTTP server listening on {}", addr);
    axum_server::bind(addr)
        .handle(handle)
        .serve(router.into_make_service())
        .await
        .expect("Server stopped unexpectedly");
}

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().pretty())
        .init();
}

fn add_tracing_layer(router: Router) -> Router {
    let tracing_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request| {
            let method = req.method();
            let uri = req.uri();

            let matched_path = req
                .extensions()
                .get::<MatchedPath>()
                .map(|matched_path| matched_path.as_str());

            tracing::debug_span!("request", %method, %uri, matched_path)
        })
        // By default, `TraceLayer` will log 5xx responses but we're doing our specific
        // logging of errors so disable that
        .on_failure(());

    router.layer(tracing_layer)
}
