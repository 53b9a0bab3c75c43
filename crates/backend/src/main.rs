pub mod dashboards;
pub mod domain;
pub mod handlers;
pub mod shared;

use std::sync::Arc;

use crate::shared::rates::{HttpRatesProvider, RatesProvider};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use axum::body::Body;
    use axum::http::{header, Method, Request};
    use axum::middleware::{self, Next};
    use axum::response::Response;
    use axum::{
        routing::{get, post},
        Router,
    };
    use std::net::SocketAddr;
    use tokio::net::TcpListener;
    use tower_http::cors::{Any, CorsLayer};
    use tower_http::services::ServeDir;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    // Log directory next to the database
    let log_dir = std::path::Path::new("target").join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file_path = log_dir.join("backend.log");
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| {
                // Mute SQL statement logs, keep application logs
                "info,sqlx=warn,sea_orm=warn".into()
            }),
        ))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
        .init();

    // Request logging middleware: status, latency and body size per request
    async fn request_logger(req: Request<Body>, next: Next) -> Response {
        use axum::body::to_bytes;
        use chrono::Utc;

        use crate::shared::format::format_number;

        let start = std::time::Instant::now();
        let method = req.method().clone();
        let uri = req.uri().clone();

        let response = next.run(req).await;

        let (parts, body) = response.into_parts();

        // Read the response body to learn the real size
        let bytes = match to_bytes(body, usize::MAX).await {
            Ok(b) => b,
            Err(_) => {
                let duration = start.elapsed();
                let timestamp = Utc::now();
                println!(
                    "\x1b[33m{}\x1b[0m | {:>5}ms | {:>12} | {} {:>6} {}",
                    timestamp.format("%H:%M:%S"),
                    duration.as_millis(),
                    "error",
                    parts.status.as_u16(),
                    method,
                    uri.path()
                );
                return Response::from_parts(parts, Body::default());
            }
        };

        let size = bytes.len();
        let duration = start.elapsed();
        let timestamp = Utc::now();

        // Cyan for 200, brown for everything else
        let color_code = if parts.status.as_u16() == 200 {
            "36"
        } else {
            "33"
        };

        println!(
            "\x1b[{}m{}\x1b[0m | {:>5}ms | {:>12} | {} {:>6} {}",
            color_code,
            timestamp.format("%H:%M:%S"),
            duration.as_millis(),
            format_number(size),
            parts.status.as_u16(),
            method,
            uri.path()
        );

        Response::from_parts(parts, Body::from(bytes))
    }

    // Load config and initialize the database
    let config = shared::config::load_config()?;
    let db_path = shared::config::get_database_path(&config)?;
    shared::data::db::initialize_database(&db_path)
        .await
        .map_err(|e| anyhow::anyhow!("db init failed: {e}"))?;

    let rates_provider: Arc<dyn RatesProvider> =
        Arc::new(HttpRatesProvider::new(config.rates.url.clone()));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION]);

    let app = Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // CATALOGS
        // ========================================
        .route(
            "/api/material",
            get(handlers::a001_material::list_all).post(handlers::a001_material::upsert),
        )
        .route(
            "/api/material/low-stock",
            get(handlers::a001_material::list_low_stock),
        )
        .route(
            "/api/material/testdata",
            post(handlers::a001_material::insert_test_data),
        )
        .route(
            "/api/material/:id",
            get(handlers::a001_material::get_by_id).delete(handlers::a001_material::delete),
        )
        .route(
            "/api/printer",
            get(handlers::a002_printer::list_all).post(handlers::a002_printer::upsert),
        )
        .route(
            "/api/printer/testdata",
            post(handlers::a002_printer::insert_test_data),
        )
        .route(
            "/api/printer/:id",
            get(handlers::a002_printer::get_by_id).delete(handlers::a002_printer::delete),
        )
        .route(
            "/api/part",
            get(handlers::a003_part::list).post(handlers::a003_part::upsert),
        )
        .route(
            "/api/part/:id",
            get(handlers::a003_part::get_by_id).delete(handlers::a003_part::delete),
        )
        // ========================================
        // DOCUMENTS
        // ========================================
        .route(
            "/api/order",
            get(handlers::a004_order::list).post(handlers::a004_order::create),
        )
        .route(
            "/api/order/:id",
            get(handlers::a004_order::get_by_id).delete(handlers::a004_order::delete),
        )
        .route(
            "/api/order/:id/status",
            post(handlers::a004_order::set_status),
        )
        .route(
            "/api/maintenance_log",
            get(handlers::a005_maintenance_log::list).post(handlers::a005_maintenance_log::create),
        )
        .route(
            "/api/maintenance_log/:id",
            get(handlers::a005_maintenance_log::get_by_id)
                .delete(handlers::a005_maintenance_log::delete),
        )
        .route(
            "/api/inventory",
            get(handlers::a006_inventory_transaction::list)
                .post(handlers::a006_inventory_transaction::create),
        )
        // ========================================
        // SETTINGS & RATES
        // ========================================
        .route(
            "/api/settings",
            get(handlers::a007_user_settings::get).post(handlers::a007_user_settings::save),
        )
        .route(
            "/api/exchange-rates",
            get(handlers::a008_exchange_rates::get).post(handlers::a008_exchange_rates::save),
        )
        .route(
            "/api/exchange-rates/refresh",
            post(handlers::a008_exchange_rates::refresh),
        )
        // ========================================
        // TOOLS & ANALYTICS
        // ========================================
        .route("/api/estimate", post(handlers::estimate::calculate))
        .route(
            "/api/d100/workshop-summary",
            get(handlers::d100_workshop_summary::get_summary),
        )
        .route("/api/reports/orders.csv", get(handlers::reports::orders_csv))
        .fallback_service(ServeDir::new("dist"))
        .layer(middleware::from_fn(request_logger))
        .layer(cors)
        .with_state(rates_provider);

    let addr: SocketAddr = ([0, 0, 0, 0], config.server.port).into();

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    config.server.port
                );
            } else {
                tracing::error!("Failed to bind to port {}. Error: {}", config.server.port, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
