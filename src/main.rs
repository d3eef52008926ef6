use clientes_api::application::context::AppContext;
use clientes_api::config;
use clientes_api::infrastructure::db::postgres::PostgresDatabase;
use clientes_api::infrastructure::db::repositories::Repositories;
use clientes_api::interface::http;
use clientes_api::interface::http::state::AppState;
use clientes_api::observability;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    // Step 1: Load configuration.
    let settings = match config::load() {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("failed to load configuration: {err}");
            return ExitCode::FAILURE;
        }
    };

    // Step 2: Install logging and metrics.
    observability::init_tracing(&settings.observability);
    let metrics = observability::init_metrics(&settings.observability);

    // Step 3: Connect to the database.
    let db = match PostgresDatabase::connect(&settings.db).await {
        Ok(db) => Arc::new(db),
        Err(err) => {
            error!(error = %err, "database connection failed");
            return ExitCode::FAILURE;
        }
    };

    // Step 4: Assemble repositories, application context and HTTP state.
    let repos = Repositories::postgres(db);
    let ctx = AppContext::new(repos);
    let state = AppState {
        ctx: Arc::new(ctx),
        metrics,
    };

    // Step 5: Bind and serve.
    let bind_addr = settings.server.bind_addr();
    let listener = match tokio::net::TcpListener::bind(&bind_addr).await {
        Ok(listener) => listener,
        Err(err) => {
            error!(error = %err, bind_addr = %bind_addr, "bind failed");
            return ExitCode::FAILURE;
        }
    };
    info!(
        service = %settings.observability.service_name,
        bind_addr = %bind_addr,
        "server listening"
    );

    if let Err(err) = axum::serve(listener, http::app(state)).await {
        error!(error = %err, "server stopped");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
