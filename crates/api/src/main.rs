use bookshelf_api::app;
use bookshelf_api::config::ApiConfig;

#[tokio::main]
async fn main() {
    bookshelf_observability::init();

    let cfg = match ApiConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let router = match app::build_app(&cfg).await {
        Ok(router) => router,
        Err(e) => {
            tracing::error!(error = %e, "failed to build application");
            std::process::exit(1);
        }
    };

    let addr = format!("0.0.0.0:{}", cfg.port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, %addr, "failed to bind listener");
            std::process::exit(1);
        }
    };

    tracing::info!(%addr, "library server listening");

    if let Err(e) = axum::serve(listener, router).await {
        tracing::error!(error = %e, "server terminated");
        std::process::exit(1);
    }
}
