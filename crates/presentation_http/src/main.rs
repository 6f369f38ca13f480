//! Accessify HTTP Server
//!
//! Main entry point for the conversion API server.

use std::{sync::Arc, time::Duration};

use ai_core::HuggingFaceClient;
use application::{
    ChatService, ConversionService, InputResolver, MaintenanceService, ModelRegistry,
    OutputTransformer, SpeechService, TextExtractionService, TransientStorePort, UploadService,
};
use axum::http::{HeaderValue, Method};
use infrastructure::{
    AppConfig, DefaultCapabilityLoader, FsCachePruner, FsTransientStore,
    GoogleTtsAdapter, HttpContentFetcher, HuggingFaceChat, LogFormat, ServerConfig,
    TesseractOcrAdapter, init_tracing,
};
use presentation_http::{
    BackgroundTasks, RequestIdLayer, error::set_expose_internal_errors, routes, state::AppState,
};
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Config is read first so the log format can be honoured; a load
    // failure is reported once tracing is up.
    let loaded = AppConfig::load();
    let log_format = loaded
        .as_ref()
        .map_or(LogFormat::Text, |c| LogFormat::from_config(&c.server.log_format));
    init_tracing(log_format).map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {e}"))?;

    info!("♿ Accessify v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = loaded.unwrap_or_else(|e| {
        warn!("Failed to load config, using defaults: {}", e);
        AppConfig::default()
    });
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {e}"))?;
    set_expose_internal_errors(!config.environment.is_production());

    info!(
        environment = %config.environment,
        host = %config.server.host,
        port = config.server.port,
        scratch_root = %config.storage.scratch_root.display(),
        "Configuration loaded"
    );

    let state = build_state(&config).await?;
    let tasks = BackgroundTasks::start(
        &state.registry,
        &state.maintenance_service,
        &config.maintenance,
    );

    let app = routes::create_router(state).layer(TraceLayer::new_for_http());
    let app = if config.server.cors_enabled {
        app.layer(cors_layer(&config.server))
    } else {
        app
    };
    let app = app.layer(RequestIdLayer::new());

    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr).await?;
    info!("🚀 Server listening on http://{}", addr);

    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs.unwrap_or(30));
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_timeout))
        .await?;

    tasks.stop().await;
    info!("👋 Server shutdown complete");

    Ok(())
}

/// Wire adapters into services
async fn build_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let store = Arc::new(FsTransientStore::new(config.storage.clone()));
    store.ensure_dirs().await?;
    let store: Arc<dyn TransientStorePort> = store;

    let inference = Arc::new(
        HuggingFaceClient::new(config.inference.clone())
            .map_err(|e| anyhow::anyhow!("Failed to initialize inference client: {e}"))?,
    );
    if !config.inference.has_token() {
        warn!("No inference API token configured; chat answers with demo replies");
    }

    let loader = DefaultCapabilityLoader::with_client(config.speech.clone(), Arc::clone(&inference));
    let registry = Arc::new(ModelRegistry::new(Arc::new(loader)));

    let fetcher = Arc::new(HttpContentFetcher::new(&config.fetcher)?);
    let synthesizer = Arc::new(GoogleTtsAdapter::new(&config.speech)?);
    let speech_service = Arc::new(SpeechService::new(
        Arc::clone(&registry),
        synthesizer,
        Arc::clone(&store),
        config.server.public_base_url.clone(),
    ));

    let resolver = Arc::new(InputResolver::new(
        Arc::clone(&registry),
        fetcher,
        Arc::clone(&store),
    ));
    let transformer = Arc::new(OutputTransformer::new(
        Arc::clone(&registry),
        Arc::clone(&speech_service),
    ));

    let chat_service = if config.inference.has_token() {
        ChatService::new(Arc::new(HuggingFaceChat::new(inference)))
    } else {
        ChatService::unconfigured()
    };

    let ocr = Arc::new(TesseractOcrAdapter::new(config.ocr.clone())?);
    let pruner = Arc::new(FsCachePruner::new(
        config.maintenance.cache_roots.clone(),
        config.maintenance.cache_scratch_dirs.clone(),
    ));
    let maintenance_service = MaintenanceService::new(Arc::clone(&store), config.maintenance.retention())
        .with_cache_pruner(pruner);

    Ok(AppState {
        conversion_service: Arc::new(ConversionService::new(resolver, transformer)),
        chat_service: Arc::new(chat_service),
        speech_service,
        text_extraction_service: Arc::new(TextExtractionService::new(ocr, Arc::clone(&store))),
        upload_service: Arc::new(UploadService::new(store)),
        registry,
        maintenance_service: Arc::new(maintenance_service),
        config: Arc::new(config.clone()),
    })
}

/// Allow any origin unless specific origins are configured
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    if server.allowed_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<HeaderValue> = server
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers(Any)
    }
}

/// Wait for Ctrl+C or SIGTERM
async fn shutdown_signal(timeout: Duration) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("📥 Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("📥 Received SIGTERM, initiating graceful shutdown...");
        }
    }

    info!("⏳ Waiting up to {:?} for connections to close...", timeout);
}
