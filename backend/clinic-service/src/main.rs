use actix_web::{web, App, HttpServer};
use clinic_service::{routes::configure_routes, AppState, Config};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,actix_web=info,sqlx=warn".into());
    let json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    init_logging();

    tracing::info!("Starting clinic-service");

    let config = Config::from_env().map_err(anyhow::Error::msg)?;
    tracing::info!(
        env = %config.app.env,
        host = %config.app.host,
        port = config.app.port,
        blog_enabled = config.app.blog_enabled,
        "Configuration loaded"
    );

    let bind_addr = (config.app.host.clone(), config.app.port);
    let state = web::Data::new(AppState::initialize(config).await?);

    let server_state = state.clone();
    HttpServer::new(move || {
        let state = server_state.clone();
        App::new()
            .wrap(TracingLogger::default())
            .configure(move |cfg| configure_routes(cfg, &state))
    })
    .bind(bind_addr)?
    .run()
    .await?;

    tracing::info!("HTTP server stopped, closing database pool");
    state.db.close().await;

    Ok(())
}
