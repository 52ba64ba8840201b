//! # User Registration HTTP Handlers
//!
//! 사용자 등록과 중복 확인 엔드포인트를 처리하는 핸들러 함수들입니다.
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/api/v1/users` | 등록/수정 제출 | 200 / 400 / 404 / 500 |
//! | `POST` | `/api/v1/users/exists` | 중복 확인 (자문) | 항상 200 |
//! | 기타 | 위 두 경로 | 허용되지 않은 메서드 | 405 |
//!
//! 핸들러는 속성 매크로 대신 일반 함수로 선언되어 라우트 모듈에서
//! `web::resource`와 `default_service`로 연결됩니다. 허용되지 않은
//! 메서드가 각 리소스의 JSON 계약대로 405를 받게 하기 위함입니다.

use actix_web::{web, HttpResponse};

use crate::domain::dto::users::request::{CheckUserRequest, SubmitUserRequest};
use crate::domain::dto::users::response::ExistsResponse;
use crate::errors::errors::AppError;
use crate::services::users::user_service::UserService;

/// 등록/수정 제출 핸들러
///
/// # 엔드포인트
///
/// `POST /api/v1/users`
///
/// # 요청 본문
///
/// ```json
/// {
///   "tipo_documento": "CC",
///   "documento": "12345678",
///   "nombre": "Ana Gomez",
///   "edad": "30",
///   "genero": "F",
///   "preferencias": ["Deportes"],
///   "latitud": "4.60971",
///   "longitud": "-74.08175",
///   "user_id": ""
/// }
/// ```
///
/// # 응답
///
/// ## 성공 (200 OK)
/// ```json
/// { "success": true, "message": "Usuario registrado exitosamente" }
/// ```
///
/// ## 검증/중복 실패 (400 Bad Request)
/// ```json
/// { "success": false, "message": "Documento inválido. Solo se permiten números" }
/// ```
pub async fn submit_user(
    service: web::Data<UserService>,
    payload: web::Json<SubmitUserRequest>,
) -> Result<HttpResponse, AppError> {
    let response = service.submit(payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}

/// 자문용 중복 확인 핸들러
///
/// # 엔드포인트
///
/// `POST /api/v1/users/exists`
///
/// 항상 HTTP 200으로 응답합니다. 입력 문제와 저장소 오류도
/// `existe: false`와 설명 메시지로 표현됩니다.
///
/// # 응답
///
/// ```json
/// { "existe": true, "message": "Usuario ya registrado" }
/// ```
pub async fn check_user_exists(
    service: web::Data<UserService>,
    payload: web::Json<CheckUserRequest>,
) -> HttpResponse {
    let response = service.check_exists(payload.into_inner()).await;
    HttpResponse::Ok().json(response)
}

/// 제출 리소스의 허용되지 않은 메서드 처리
///
/// `{success, message}` 계약으로 405를 반환합니다.
pub async fn submit_method_not_allowed() -> Result<HttpResponse, AppError> {
    Err(AppError::MethodNotAllowed("Método no permitido".to_string()))
}

/// 중복 확인 리소스의 허용되지 않은 메서드 처리
///
/// 이 리소스의 계약은 `{existe, message}`이므로 별도 본문을 만듭니다.
pub async fn exists_method_not_allowed() -> HttpResponse {
    HttpResponse::MethodNotAllowed().json(ExistsResponse::new(false, "Método no permitido"))
}
