pub mod auth;
pub mod config;
pub mod i18n;
pub mod middleware;
pub mod pages;
pub mod pagination;
pub mod server;
pub mod tmdb;
pub mod util;

#[cfg(test)]
mod testing;

use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

use auth::SessionVerifier;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Session service error: {0}")]
    Auth(#[from] auth::AuthError),
    #[error("Metadata provider error: {0}")]
    Provider(#[from] tmdb::ProviderError),
    #[error("Server error: {0}")]
    Server(String),
}

pub async fn run(config_path: &str) -> Result<(), ServerError> {
    let config = config::Config::from_file(config_path)?;

    info!("Using config file: {}", config_path);
    info!("Metadata provider: {}", config.tmdb.base_url);

    let sessions: Arc<dyn SessionVerifier> = match &config.supabase {
        Some(supabase) => {
            info!("Verifying sessions against {}", supabase.url);
            Arc::new(auth::SupabaseVerifier::new(supabase)?)
        }
        None => {
            info!("No session service configured, all visitors are anonymous");
            Arc::new(auth::AnonymousVerifier)
        }
    };
    let locales = Arc::new(i18n::I18nLocaleResolver::new(&config.i18n));
    let provider = Arc::new(tmdb::TmdbClient::new(&config.tmdb)?);
    let loader = pages::PageLoader::new(sessions, locales, provider);

    let address = config.listen.address.as_deref().unwrap_or("[::]");
    let port = &config.listen.port;
    let addr: SocketAddr = format!("{}:{}", address, port)
        .parse()
        .map_err(|e| ServerError::Server(format!("Invalid address: {}", e)))?;

    let tls = match (&config.listen.tlscert, &config.listen.tlskey) {
        (Some(cert), Some(key)) => Some((cert.clone(), key.clone())),
        _ => None,
    };

    let state = server::AppState::new(config, loader);
    let app = middleware::with_path_normalization(server::build_router(state));

    if let Some((cert_path, key_path)) = tls {
        info!("Loading TLS certificate from {}", cert_path);
        info!("Loading TLS key from {}", key_path);

        let tls_config = axum_server::tls_rustls::RustlsConfig::from_pem_file(&cert_path, &key_path)
            .await
            .map_err(|e| ServerError::Server(format!("Failed to load TLS config: {}", e)))?;

        info!("Serving HTTPS on {}", addr);

        axum_server::bind_rustls(addr, tls_config)
            .serve(app.into_make_service())
            .await
            .map_err(|e| ServerError::Server(format!("Server error: {}", e)))?;
    } else {
        info!("Serving HTTP on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::Server(format!("Failed to bind: {}", e)))?;

        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::Server(format!("Server error: {}", e)))?;
    }

    Ok(())
}
