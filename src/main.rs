use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info, warn};

use route_simulator::config::{DatabaseConfig, EnvironmentConfig};
use route_simulator::database::DatabaseConnection;
use route_simulator::repositories::Repositories;
use route_simulator::services::MapboxDirectionsService;
use route_simulator::{create_app_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let config = match EnvironmentConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Invalid configuration: {}", e);
            return Err(e.into());
        }
    };

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    info!("🚚 Route Simulator ({})", config.environment);
    info!("================================================");

    let db_connection = match DatabaseConnection::connect(&DatabaseConfig::from_environment(&config)).await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Database connection failed: {:#}", e);
            return Err(e);
        }
    };

    if config.mapbox_token.is_none() {
        warn!("⚠️ MAPBOX_API_KEY is not set, route creation will fail until it is configured");
    }
    let directions = MapboxDirectionsService::from_config(&config)?;

    let addr: SocketAddr = config.server_url().parse()?;
    let app_state = AppState::new(
        config,
        Repositories::postgres(db_connection.pool().clone()),
        Arc::new(directions),
    );
    let app = create_app_router(app_state);

    info!("🌐 Server listening on http://{}", addr);
    info!("   GET  /              - Landing");
    info!("   GET  /health        - Health check");
    info!("   GET  /game          - Dashboard (cities, vehicles, routes)");
    info!("   GET  /game/vehicles - Vehicle list");
    info!("   POST /create/city   - Create a city");
    info!("   POST /create/vehicle - Create a vehicle");
    info!("   POST /create/route  - Create a route");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Server error: {}", e);
    }

    db_connection.close().await;
    info!("👋 Server stopped");
    Ok(())
}

/// Señal de apagado ordenado
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("❌ Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Ctrl+C received, shutting down...");
        },
        _ = terminate => {
            info!("🛑 Termination signal received, shutting down...");
        },
    }
}
