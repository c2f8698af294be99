use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use ford_catalog::config::environment::EnvironmentConfig;
use ford_catalog::create_app;
use ford_catalog::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("🚗 Ford Catalog - Factory Method + Builder");
    info!("==========================================");

    let config = match EnvironmentConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("❌ Configuración inválida: {}", e);
            return Err(e);
        }
    };

    info!(
        "⛽ Política de combustible: capacidad={} incremento={} mínimo={} inicial={}",
        config.fuel.capacity, config.fuel.increment, config.fuel.min_to_start, config.fuel.initial_level
    );

    let addr: SocketAddr = config.server_url().parse()?;
    let app = create_app(AppState::new(config));

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  / - Listado de vehículos");
    info!("   GET  /add-mustang | /add-explorer | /add-escape - Agregar vehículo");
    info!("   GET  /start-engine?id= | /stop-engine?id= | /add-gas?id= - Acciones");
    info!("   GET  /privacy - Política de privacidad");
    info!("   GET  /health - Estado del servicio");
    info!("🚙 Endpoints JSON:");
    info!("   GET  /api/vehicles - Listar vehículos");
    info!("   GET  /api/vehicles/:id - Obtener vehículo");
    info!("   POST /api/vehicles/variants/:variant - Crear vehículo (mustang, explorer, escape)");
    info!("   POST /api/vehicles/:id/start-engine | stop-engine | add-gas");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Error del servidor: {}", e);
        return Err(e.into());
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
