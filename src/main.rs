use classtrack::config::server::ServerConfig;
use classtrack::router::init_router;
use classtrack::state::init_app_state;
use dotenvy::dotenv;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                // axum logs rejections from built-in extractors with the `axum::rejection`
                // target, at `TRACE` level. `axum::rejection=trace` enables showing those events
                format!(
                    "{}=debug,tower_http=debug,axum::rejection=trace",
                    env!("CARGO_CRATE_NAME")
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let server_config = ServerConfig::from_env();
    let state = init_app_state(&server_config);
    let app = init_router(state);

    let listener = tokio::net::TcpListener::bind(server_config.bind_addr())
        .await
        .expect("Failed to bind server address");
    println!("🚀 Server running on http://{}", server_config.bind_addr());
    println!(
        "📚 OpenAPI document available at http://{}/api-docs/openapi.json",
        server_config.bind_addr()
    );
    axum::serve(listener, app).await.expect("Server error");
}
