//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 사용자 등록 서비스를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! 모든 에러는 클라이언트가 기대하는 고정된 JSON 형태로 렌더링됩니다:
//!
//! ```json
//! { "success": false, "message": "..." }
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn submit_user(request: SubmitUserRequest) -> Result<SubmitResponse, AppError> {
//!     if request.documento.trim().is_empty() {
//!         return Err(AppError::ValidationError(
//!             "Documento inválido. Solo se permiten números".to_string(),
//!         ));
//!     }
//!
//!     let id = user_repo.insert(&record).await?;
//!     Ok(SubmitResponse::ok("Usuario registrado exitosamente"))
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 등록 서비스에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    ///
    /// 내부 메시지는 로그로만 남기고, 클라이언트에는 일반화된
    /// 연결 오류 메시지만 노출합니다.
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    ///
    /// 메시지는 필드별 검증 오류를 ". "로 이어붙인 집계 결과입니다.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 자연키 중복 에러 (400 Bad Request)
    ///
    /// (tipo_documento, documento) 조합이 이미 등록된 경우입니다.
    /// 클라이언트 계약상 검증 실패와 동일하게 400으로 응답합니다.
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 허용되지 않은 HTTP 메서드 (405 Method Not Allowed)
    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),
}

impl AppError {
    /// 클라이언트에 노출할 메시지를 반환합니다.
    ///
    /// `DatabaseError`는 내부 진단 문자열 대신 일반화된 메시지로
    /// 대체됩니다. 진단 내용은 `error_response()`에서 로그로 남습니다.
    pub fn public_message(&self) -> String {
        match self {
            AppError::DatabaseError(_) => "Error de conexión a la base de datos".to_string(),
            AppError::ValidationError(msg)
            | AppError::NotFound(msg)
            | AppError::ConflictError(msg)
            | AppError::MethodNotAllowed(msg) => msg.clone(),
        }
    }
}

impl actix_web::ResponseError for AppError {
    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 에러 타입을 적절한 HTTP 상태 코드와 `{success, message}`
    /// JSON 응답으로 변환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::http::StatusCode;

        let status = match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::ConflictError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            AppError::DatabaseError(detail) => {
                log::error!("데이터베이스 오류: {}", detail);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        actix_web::HttpResponse::build(status).json(serde_json::json!({
            "success": false,
            "message": self.public_message()
        }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;
