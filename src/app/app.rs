use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    routing::get,
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tower_http::cors::CorsLayer;
use tracing::{error, info, warn};

use crate::config::app_conf::AppConfig;
use crate::config::cors_conf::CorsConfig;
use crate::config::jwt_conf::JwtConfig;
use crate::config::mongo_conf::MongoConfig;
use crate::config::admin_user_conf::AdminUserConfig;
use crate::middlewares::auth_middleware::AuthState;
use crate::model::user::{User, ROLE_ADMIN, STATUS_ACTIVE};
use crate::repository::contact_repo::{ContactRepository, MongoContactRepository};
use crate::repository::post_repo::{MongoPostRepository, PostRepository};
use crate::repository::project_repo::{MongoProjectRepository, ProjectRepository};
use crate::repository::user_repo::{MongoUserRepository, UserRepository};
use crate::repository::visit_repo::{MongoVisitRepository, VisitRepository};
use crate::router::admin_router::admin_router;
use crate::router::analytics_router::analytics_router;
use crate::router::auth_router::auth_router;
use crate::router::contact_router::contact_router;
use crate::router::content_router::content_router;
use crate::router::post_router::post_router;
use crate::router::project_router::project_router;
use crate::router::stats_router::stats_router;
use crate::router::user_router::user_router;
use crate::service::admin_service::AdminServiceImpl;
use crate::service::analytics_service::AnalyticsServiceImpl;
use crate::service::contact_service::ContactServiceImpl;
use crate::service::content_service::ContentServiceImpl;
use crate::service::post_service::PostServiceImpl;
use crate::service::project_service::ProjectServiceImpl;
use crate::service::stats_service::StatsServiceImpl;
use crate::service::user_service::UserServiceImpl;
use crate::util::jwt::JwtTokenUtilsImpl;
use crate::util::password::{PasswordUtils, PasswordUtilsImpl};

pub struct App {
    config: AppConfig,
    router: Router,
    pub user_repo: Arc<dyn UserRepository>,
}

impl App {
    pub async fn new() -> Self {
        let config = AppConfig::from_env();
        let jwt_config = JwtConfig::from_env().expect("JWT config error");
        let mongo_config = MongoConfig::from_env().expect("Mongo config error");
        let cors_config = CorsConfig::from_env();

        let db = crate::repository::connect(&mongo_config)
            .await
            .expect("MongoDB connection error");

        let user_repo: Arc<dyn UserRepository> = Arc::new(
            MongoUserRepository::new(&db)
                .await
                .expect("User repo error"),
        );
        let post_repo: Arc<dyn PostRepository> = Arc::new(MongoPostRepository::new(&db));
        let project_repo: Arc<dyn ProjectRepository> = Arc::new(MongoProjectRepository::new(&db));
        let contact_repo: Arc<dyn ContactRepository> = Arc::new(MongoContactRepository::new(&db));
        let visit_repo: Arc<dyn VisitRepository> = Arc::new(MongoVisitRepository::new(&db));

        let jwt_utils = Arc::new(JwtTokenUtilsImpl::new(jwt_config));
        let user_service = Arc::new(UserServiceImpl::new(user_repo.clone(), jwt_utils.clone()));
        let admin_service = Arc::new(AdminServiceImpl::new(user_repo.clone()));
        let post_service = Arc::new(PostServiceImpl::new(post_repo.clone()));
        let project_service = Arc::new(ProjectServiceImpl::new(project_repo.clone()));
        let contact_service = Arc::new(ContactServiceImpl::new(contact_repo.clone()));
        let content_service = Arc::new(ContentServiceImpl::new(
            post_repo.clone(),
            project_repo.clone(),
        ));
        let analytics_service = Arc::new(AnalyticsServiceImpl::new(visit_repo));
        let stats_service = Arc::new(StatsServiceImpl::new(
            user_repo.clone(),
            post_repo,
            project_repo,
            contact_repo,
        ));

        let auth_state = Arc::new(AuthState {
            jwt_utils,
            user_repo: user_repo.clone(),
        });

        let api = Router::new()
            .merge(auth_router(user_service.clone(), auth_state.clone()))
            .merge(user_router(user_service, auth_state.clone()))
            .merge(post_router(post_service, auth_state.clone()))
            .merge(project_router(project_service, auth_state.clone()))
            .merge(contact_router(contact_service, auth_state.clone()))
            .merge(admin_router(admin_service, auth_state.clone()))
            .merge(content_router(content_service, auth_state.clone()))
            .merge(analytics_router(analytics_service, auth_state.clone()))
            .merge(stats_router(stats_service, auth_state));

        let router = Router::new()
            .nest("/api", api)
            .route("/health", get(|| async { "OK" }))
            .layer(Self::build_cors(&cors_config));

        let app = App {
            config,
            router,
            user_repo,
        };
        app.create_first_admin_user().await;
        app
    }

    fn build_cors(config: &CorsConfig) -> CorsLayer {
        match config
            .origin
            .as_deref()
            .and_then(|o| o.parse::<HeaderValue>().ok())
        {
            Some(origin) => CorsLayer::new()
                .allow_origin(origin)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::PATCH,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([CONTENT_TYPE, AUTHORIZATION])
                .allow_credentials(true),
            None => CorsLayer::permissive(),
        }
    }

    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub async fn start(self) {
        let addr = SocketAddr::new(
            self.config.host.parse().expect("Invalid host"),
            self.config.port,
        );
        info!("🚀 Server running at http://{}", addr);
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .expect("Failed to bind address");
        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .expect("Failed to start server");
    }

    async fn create_first_admin_user(&self) {
        let admin_conf = match AdminUserConfig::from_env() {
            Ok(c) => c,
            Err(e) => {
                warn!("Admin user config not loaded: {e}");
                return;
            }
        };

        match self.user_repo.find_by_email(&admin_conf.email).await {
            Ok(Some(_)) => {
                info!("Admin user already exists, skipping creation.");
                return;
            }
            Ok(None) => {}
            Err(e) => {
                error!("Failed to check for existing admin user: {e}");
                return;
            }
        }

        let password_hash = match PasswordUtilsImpl::hash_password(&admin_conf.password) {
            Ok(h) => h,
            Err(e) => {
                error!("Failed to hash admin password: {e}");
                return;
            }
        };

        let user = User {
            id: None,
            email: admin_conf.email,
            password_hash,
            name: admin_conf.name,
            role: ROLE_ADMIN.to_string(),
            location: admin_conf.location,
            bio: None,
            profile_pic: None,
            status: STATUS_ACTIVE.to_string(),
            created_at: None,
            updated_at: None,
        };
        match self.user_repo.insert(user).await {
            Ok(_) => info!("First admin user created."),
            Err(e) => error!("Failed to create admin user: {e}"),
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Shutdown signal received");
}
