use std::net::SocketAddr;

use carbon_checker::carbon::RandomCarbon;
use carbon_checker::config::Config;
use carbon_checker::store::FileStore;
use carbon_checker::{build_app, AppState};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();
    dotenvy::dotenv().ok();

    let config = Config::from_env();
    tracing::info!("storing entries in {}", config.data_file.display());

    let state = AppState::new(FileStore::new(&config.data_file), RandomCarbon);
    let app = build_app(state, &config.static_dir);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr)
        .await
        .expect("Failed to bind listen address");

    tracing::info!("listening on {}", addr);
    axum::serve(listener, app).await.expect("Server error");
}
