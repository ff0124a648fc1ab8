use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{error, info};

use trackdesk_api::{build_router, AppState, Repositories};
use trackdesk_infrastructure::{
    SheetApiClient, SheetCustomerRepository, SheetSettingsRepository, SheetSettlementRepository,
    SheetTicketRepository, SheetUserRepository,
};
use trackdesk_shared::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Initialize telemetry
    trackdesk_shared::telemetry::init_telemetry();

    info!("TrackDesk server starting...");

    // Load configuration
    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Remote sheet API
    info!(
        base_url = %config.remote.base_url,
        timeout_seconds = config.remote.timeout_seconds,
        "Configuring sheet API client"
    );
    let client = SheetApiClient::new(&config.remote)?;

    let repos = Repositories {
        tickets: Arc::new(SheetTicketRepository::new(client.clone())),
        customers: Arc::new(SheetCustomerRepository::new(client.clone())),
        settlements: Arc::new(SheetSettlementRepository::new(client.clone())),
        users: Arc::new(SheetUserRepository::new(client.clone())),
        settings: Arc::new(SheetSettingsRepository::new(client)),
    };

    // Bind address
    let host: std::net::IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));

    let app = build_router(AppState::new(config, repos));

    info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
