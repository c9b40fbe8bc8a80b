use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use catalogo_viajes::bootstrap;
use catalogo_viajes::config::environment::EnvironmentConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::from_env()?;

    // Configurar logging
    let level = if config.is_production() {
        tracing::Level::INFO
    } else {
        tracing::Level::DEBUG
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    info!("✈️ Catálogo de viajes");
    info!("================================================");
    info!("📂 Snapshot: {}", config.data_file.display());

    let addr: SocketAddr = config.server_url().parse()?;

    // Sin catálogo no se arranca
    let app = match bootstrap(config).await {
        Ok(app) => app,
        Err(e) => {
            error!("❌ No se pudo cargar el catálogo: {}", e);
            return Err(anyhow::anyhow!("Error cargando el catálogo: {}", e));
        }
    };

    info!("🌐 Servidor levantado en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET    /admin - Panel de administración");
    info!("   POST   /insert - Crear viaje");
    info!("   DELETE /delete/:id - Borrar viaje");
    info!("   PUT    /update/:id - Actualizar viaje");
    info!("   GET    /health - Health check");
    info!("   GET    /<ruta> - Página de cada viaje");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            e
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo escuchar Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo instalar el handler de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
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
