use crate::cli::ServeArgs;
use crate::infra::{
    AppState, InMemoryBookmarkRepository, InMemoryQuestionRepository, InMemoryQuizResultRepository,
};
use crate::routes::{cors_layer, with_club_routes};
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use club_compass::config::AppConfig;
use club_compass::error::AppError;
use club_compass::telemetry;
use club_compass::workflows::bookmarks::BookmarkService;
use club_compass::workflows::catalog::{ClubCatalogImporter, ClubRepository, InMemoryClubRepository};
use club_compass::workflows::qna::QnaService;
use club_compass::workflows::quiz::{QuestionBank, QuizService};
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let catalog = match &config.catalog.seed_path {
        Some(path) => ClubCatalogImporter::from_path(path)?,
        None => ClubCatalogImporter::standard()?,
    };
    let clubs = Arc::new(InMemoryClubRepository::default());
    let seeded = clubs.replace_all(catalog)?;
    info!(
        clubs = seeded,
        source = ?config.catalog.seed_path,
        "club catalog seeded"
    );

    let quiz_service = Arc::new(QuizService::new(
        Arc::new(QuestionBank::standard()),
        clubs.clone(),
        Arc::new(InMemoryQuizResultRepository::default()),
    ));
    let bookmark_service = Arc::new(BookmarkService::new(
        clubs.clone(),
        Arc::new(InMemoryBookmarkRepository::default()),
    ));

    let qna_service = Arc::new(QnaService::new(Arc::new(
        InMemoryQuestionRepository::default(),
    )));

    let app = with_club_routes(clubs, quiz_service, bookmark_service, qna_service)
        .layer(Extension(app_state))
        .layer(cors_layer(&config.cors))
        .layer(TraceLayer::new_for_http())
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "club recommendation service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
