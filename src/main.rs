//! 계정 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 모든 서비스를 초기화합니다.
//! PostgreSQL 연결을 설정하고, 기능 모듈을 라우트 테이블로 조립해 REST API를 제공합니다.

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use account_service_backend::config::{ApiConfig, CorsConfig, ServerConfig};
use account_service_backend::core::RouteTable;
use account_service_backend::db::Database;
use account_service_backend::middlewares::AuthMiddleware;
use account_service_backend::repositories::UserRepository;
use account_service_backend::routes::{api_modules, build_route_table, configure_all_routes, dispatch_api};
use account_service_backend::services::auth::{BcryptHasher, TokenService};
use account_service_backend::services::users::UserService;
use account_service_backend::utils::display_terminal::print_server_banner;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 계정 서비스 시작중...");

    // 데이터 스토어 초기화
    info!("📡 데이터베이스 연결 중...");
    let database = Database::new().await.expect("데이터베이스 연결 실패");

    let user_repo = UserRepository::new(database.store());
    user_repo.create_schema().await.expect("스키마 준비 실패");

    // 서비스 조립
    let hasher = BcryptHasher::from_config();
    info!("🔐 bcrypt cost: {}", hasher.cost());
    let user_service = Arc::new(UserService::new(user_repo, Arc::new(hasher)));

    let root_path = ApiConfig::root_path();
    let route_table = web::Data::new(build_route_table(&root_path, api_modules(user_service)));
    route_table.print_summary();

    let token_service = Arc::new(TokenService::from_config());

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    // HTTP 서버 시작
    start_http_server(route_table, token_service, &root_path).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 로깅, 경로 정규화, 인증 미들웨어를 포함합니다.
/// 고정 엔드포인트(`/health`)가 처리하지 않은 요청은 모두 라우트 테이블로 디스패치됩니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(
    route_table: web::Data<RouteTable>,
    token_service: Arc<TokenService>,
    root_path: &str,
) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();
    let allowed_origins = CorsConfig::allowed_origins();

    print_server_banner(&bind_address, root_path);
    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(AuthMiddleware::new(token_service.clone()))
            .wrap(configure_cors(&allowed_origins))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(route_table.clone())
            .configure(configure_all_routes)
            .default_service(web::to(dispatch_api))
    })
    .bind(bind_address.as_str())?
    .workers(ServerConfig::workers())
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => {
            if let Err(e) = dotenv::from_filename(".env.prod") {
                error!(".env.prod 파일 로드 실패: {}", e);
            }
        }
        "dev" => {
            if let Err(e) = dotenv::from_filename(".env.dev") {
                error!(".env.dev 파일 로드 실패: {}", e);
            }
        }
        _ => {
            dotenv().ok();
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
///
/// ```bash
/// RUST_LOG=account_service_backend::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// CORS 설정을 구성합니다
///
/// 허용 Origin은 `CORS_ALLOWED_ORIGINS`(쉼표 구분)에서 읽습니다.
fn configure_cors(allowed_origins: &[String]) -> Cors {
    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .supports_credentials()
        .max_age(3600)
}
