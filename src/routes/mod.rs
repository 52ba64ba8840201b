//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 기능별로 그룹화하여 제공합니다.
//! 사용자 등록 관련 라우트와 헬스체크 엔드포인트를 포함합니다.
//!
//! # Features
//!
//! - 등록 제출 / 중복 확인 API 엔드포인트
//! - 리소스별 405 기본 핸들러 (각 리소스의 JSON 계약 유지)
//! - 잘못된 JSON 본문도 `{success, message}` 형태로 응답
//! - 헬스체크 엔드포인트
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(service))
//!     .configure(configure_all_routes);
//! ```

use actix_web::web;
use serde_json::json;

use crate::handlers;

/// 모든 라우트를 설정합니다
///
/// 기능별로 분할된 라우트들을 통합하여 애플리케이션에 등록합니다.
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // 잘못된 JSON 본문도 응답 계약을 따르도록 설정
    cfg.app_data(json_error_config());

    // Health check endpoint
    cfg.service(health_check);

    // Feature-specific routes
    configure_user_routes(cfg);
}

/// 사용자 등록 관련 라우트를 설정합니다
///
/// # Available Routes
///
/// - `POST /api/v1/users` - 등록/수정 제출
/// - `POST /api/v1/users/exists` - 자문용 중복 확인
///
/// 각 리소스에는 `default_service`로 405 핸들러가 연결되어,
/// 허용되지 않은 메서드도 해당 리소스의 JSON 형태로 응답합니다.
///
/// # Examples
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/users \
///   -H "Content-Type: application/json" \
///   -d '{"tipo_documento":"CC","documento":"12345678","nombre":"Ana Gomez",
///        "edad":"30","genero":"F","preferencias":["Deportes"]}'
///
/// curl -X POST http://localhost:8080/api/v1/users/exists \
///   -H "Content-Type: application/json" \
///   -d '{"tipo_documento":"CC","documento":"12345678"}'
/// ```
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/users")
            .service(
                web::resource("")
                    .route(web::post().to(handlers::users::submit_user))
                    .default_service(web::to(handlers::users::submit_method_not_allowed)),
            )
            .service(
                web::resource("/exists")
                    .route(web::post().to(handlers::users::check_user_exists))
                    .default_service(web::to(handlers::users::exists_method_not_allowed)),
            ),
    );
}

/// JSON 본문 파싱 실패를 응답 계약에 맞게 변환하는 설정
///
/// 구문 오류나 타입 불일치로 역직렬화가 실패해도 클라이언트는
/// `{success: false, message}` 형태의 400 응답을 받습니다.
fn json_error_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let response = actix_web::HttpResponse::BadRequest().json(json!({
            "success": false,
            "message": "Datos de solicitud inválidos"
        }));
        actix_web::error::InternalError::from_response(err, response).into()
    })
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "registration_service_backend",
///   "version": "0.1.0",
///   "timestamp": "2023-01-01T00:00:00Z",
///   "features": {
///     "database": "MySQL",
///     "validation": "validator"
///   }
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "registration_service_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MySQL",
            "validation": "validator"
        }
    }))
}
