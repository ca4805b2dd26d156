use tower_http::cors::CorsLayer;

use valantis_catalog::{AppState, CatalogClient, build_router, config::Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env().map_err(|e| anyhow::anyhow!("Configuration error: {}", e))?;

    let client = CatalogClient::new(config.client.clone());
    let app_state = AppState::new(client)
        .map_err(|e| anyhow::anyhow!("Failed to load templates: {}", e))?;

    // Configure CORS so a separate frontend can use the JSON endpoints
    let frontend_origin_header = config
        .frontend_origin
        .parse::<axum::http::HeaderValue>()
        .map_err(|e| {
            anyhow::anyhow!(
                "Invalid FRONTEND_ORIGIN '{}': {}",
                config.frontend_origin,
                e
            )
        })?;

    let cors = CorsLayer::new()
        .allow_origin(frontend_origin_header)
        .allow_methods([axum::http::Method::GET, axum::http::Method::POST])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
        ]);

    let app = build_router(app_state).layer(cors);

    let bind_address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to {}: {}", bind_address, e))?;

    log::info!(
        "Catalog viewer running on http://{} (remote API: {}, {} items per page)",
        bind_address,
        config.client.base_url,
        config.client.items_per_page
    );

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}
