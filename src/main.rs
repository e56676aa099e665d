use std::sync::Arc;

use clap::Parser;
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing::{error, info};

use schoolrun::logging::init_tracing;
use schoolrun::router::{build_route_table, init_router};
use schoolrun::routing::Dispatcher;
use schoolrun::state::init_app_state;
use schoolrun_config::{CorsConfig, JwtConfig, ServerConfig};

#[derive(Parser)]
#[command(name = "schoolrun")]
#[command(about = "Schoolrun API server", long_about = None)]
struct Args {
    /// Address to bind (overrides HOST)
    #[arg(long)]
    host: Option<String>,

    /// Port to bind (overrides PORT)
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let args = Args::parse();

    let mut server_config = ServerConfig::from_env()?;
    if let Some(host) = args.host {
        server_config.host = host;
    }
    if let Some(port) = args.port {
        server_config.port = port;
    }

    let _guard = init_tracing(&server_config)?;

    let jwt_config = JwtConfig::from_env()
        .inspect_err(|e| error!(error = %e, "Invalid token configuration"))?;
    let cors_config = CorsConfig::from_env();

    let state = init_app_state(&jwt_config);
    let table = build_route_table(&state.tokens)?;
    info!(routes = table.len(), "Route table built");

    let dispatcher = Dispatcher::new(table, state)
        .expose_internal_errors(server_config.expose_internal_errors());
    let app = init_router(Arc::new(dispatcher), &cors_config);

    let listener = TcpListener::bind(server_config.bind_address()).await?;
    info!(address = %server_config.bind_address(), "Server running");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
