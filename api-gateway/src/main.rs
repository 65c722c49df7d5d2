//! API Gateway for the ledger service

use std::sync::Arc;

use axum::Router;
use clap::Parser;
use dotenv::dotenv;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::{debug, info, Level};
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter, FmtSubscriber};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use ledger_service::LedgerService;

use api_gateway::config::AppConfig;
use api_gateway::{api, app, AppState};

/// API documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Customer routes
        api::customer::create_customer,
        api::customer::list_customers,
        api::customer::get_customer,
        api::customer::update_customer,
        api::customer::delete_customer,
        // Statement routes
        api::statement::get_statement,
        api::statement::get_statement_by_date,
        // Operation routes
        api::operation::deposit,
        api::operation::withdraw,
    ),
    components(
        schemas(
            // Request payloads
            common::model::request::CreateCustomerRequest,
            common::model::request::UpdateCustomerRequest,
            common::model::request::DepositRequest,
            common::model::request::WithdrawRequest,

            // Domain models
            common::model::customer::Customer,
            common::model::operation::Operation,
            common::model::operation::OperationKind,

            // Response models
            api::response::ApiResponse<common::model::customer::Customer>,
            api::response::ApiResponse<common::model::operation::Operation>,
            api::response::ApiListResponse<common::model::customer::Customer>,
            api::response::ApiListResponse<common::model::operation::Operation>,
            api::response::ResponseMetadata
        )
    ),
    tags(
        (name = "customer", description = "Customer management endpoints"),
        (name = "statement", description = "Statement read endpoints"),
        (name = "operation", description = "Deposit and withdrawal endpoints")
    ),
    info(
        title = "Ledger Service API",
        version = "1.0.0",
        description = "API for the in-memory bank-account ledger: customer management, deposits, withdrawals, and statements"
    )
)]
struct ApiDoc;

/// Ledger API server
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// Listening address, overrides the PORT environment variable
    #[clap(short, long)]
    addr: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging with debug level when DEBUG=1 env var is set
    let env = std::env::var("DEBUG").unwrap_or_else(|_| "0".to_string());
    let log_level = if env == "1" { Level::DEBUG } else { Level::INFO };

    let env_filter = EnvFilter::builder()
        .with_default_directive(log_level.into())
        .parse("tower_http=debug,api_gateway=debug,ledger_service=debug")
        .unwrap();

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    debug!("Debug logging enabled");

    // Initialize services
    let config = AppConfig::new();
    let ledger = Arc::new(LedgerService::new());

    // Create app state
    let state = Arc::new(AppState { ledger });

    // Set up CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Set up Swagger UI
    let swagger_ui = SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi());

    // Combine all routes
    let app: Router = app(state)
        .merge(swagger_ui)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(log_level))
                .on_request(DefaultOnRequest::new().level(log_level))
                .on_response(DefaultOnResponse::new().level(log_level)),
        );

    // Start the server
    let addr = args.addr.unwrap_or_else(|| format!("0.0.0.0:{}", config.port));
    let addr: std::net::SocketAddr = addr.parse().expect("Invalid address");
    let listener = TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);

    // Run until interrupt signal
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown");
}
