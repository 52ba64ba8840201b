//! # 사용자 등록 서비스 구현
//!
//! 등록 제출 처리의 핵심 비즈니스 로직을 구현합니다.
//! 요청은 검증 → 중복 검사 → 영속화 → 응답의 순서로 처리되며,
//! 각 단계의 실패는 종결적입니다. 재시도는 없고 모든 실패는
//! 한 번만 보고됩니다.
//!
//! ## 처리 플로우
//!
//! ```text
//! SubmitUserRequest
//!       │ validate_all()      모든 필드 오류를 수집해 단일 메시지로
//!       ▼
//! Operation (Create | Update) ← 생성/수정 결정은 여기서 단 한 번
//!       │ exists()            자연키 중복 검사 (수정 시 자기 제외)
//!       ▼
//! UserStore::insert / update
//!       │
//!       ▼
//! SubmitResponse { success: true, message }
//! ```
//!
//! ## 중복 검사의 한계
//!
//! 애플리케이션 레벨 검사는 자문용입니다. 검사와 쓰기 사이에
//! 다른 요청이 끼어들 수 있으며, 그 경우 저장소의 UNIQUE 제약이
//! 동일한 중복 오류로 매핑됩니다. 호출자 입장에서는 두 경로가
//! 구분되지 않습니다.

use std::sync::Arc;

use log::{error, info};

use crate::domain::dto::users::request::{CheckUserRequest, SubmitUserRequest};
use crate::domain::dto::users::response::{ExistsResponse, SubmitResponse};
use crate::domain::entities::users::user::{DocumentType, Operation};
use crate::errors::errors::{AppError, AppResult};
use crate::repositories::users::user_repo::UserStore;
use crate::utils::validation::is_document_number;

/// 사용자 등록 비즈니스 로직 서비스
///
/// 저장소는 [`UserStore`] 트레이트로 추상화되어 있으며,
/// `main`에서 명시적으로 생성된 리포지토리를 주입받습니다.
///
/// # Examples
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use crate::services::users::user_service::UserService;
/// use crate::repositories::users::user_repo::UserRepository;
///
/// let repo = UserRepository::new(pool);
/// let service = UserService::new(Arc::new(repo));
/// ```
pub struct UserService {
    /// 사용자 저장소 (운영: MySQL 리포지토리, 테스트: 인메모리)
    store: Arc<dyn UserStore>,
}

impl UserService {
    /// 주어진 저장소로 서비스를 생성합니다.
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// 등록 제출을 처리합니다.
    ///
    /// # 처리 과정
    ///
    /// 1. **검증**: 모든 필드를 검사하고 오류를 단일 메시지로 집계
    /// 2. **모드 결정**: `user_id` 존재 여부로 생성/수정을 단 한 번 결정
    /// 3. **중복 검사**: 자연키 존재 확인, 수정 시 대상 id 제외
    /// 4. **영속화**: 저장소에 삽입 또는 수정 위임
    ///
    /// # 반환값
    ///
    /// * `Ok(SubmitResponse)` - 성공 메시지 포함
    /// * `Err(AppError::ValidationError)` - 집계된 필드 오류 (400)
    /// * `Err(AppError::ConflictError)` - 자연키 중복 (400)
    /// * `Err(AppError::NotFound)` - 수정 대상 없음 (404)
    /// * `Err(AppError::DatabaseError)` - 저장소 오류 (500, 일반화된 메시지)
    pub async fn submit(&self, request: SubmitUserRequest) -> AppResult<SubmitResponse> {
        request.validate_all()?;
        let operation = request.into_operation()?;

        let record = operation.record();
        let duplicated = self
            .store
            .exists(
                record.tipo_documento,
                &record.documento,
                operation.exclude_id(),
            )
            .await?;

        if duplicated {
            return Err(AppError::ConflictError(
                "Este usuario ya está registrado".to_string(),
            ));
        }

        match operation {
            Operation::Create(record) => {
                let id = self.store.insert(&record).await?;
                info!(
                    "✅ 사용자 등록 완료: id={} ({} {})",
                    id,
                    record.tipo_documento.as_str(),
                    record.documento
                );
                Ok(SubmitResponse::ok("Usuario registrado exitosamente"))
            }
            Operation::Update(id, record) => {
                self.store.update(id, &record).await?;
                info!("✅ 사용자 수정 완료: id={}", id);
                Ok(SubmitResponse::ok("Usuario actualizado exitosamente"))
            }
        }
    }

    /// 자문용 중복 확인을 처리합니다.
    ///
    /// 이 경로는 실패하지 않습니다. 입력 문제와 저장소 오류 모두
    /// `existe: false`와 설명 메시지로 표현되며, 호출자는 항상
    /// HTTP 200을 받습니다. `existe: true`는 자문일 뿐이며 제출 시점의
    /// 중복 검사를 대체하지 않습니다.
    pub async fn check_exists(&self, request: CheckUserRequest) -> ExistsResponse {
        let tipo_raw = request.tipo_documento.trim();
        let documento = request.documento.trim();

        if tipo_raw.is_empty() || documento.is_empty() {
            return ExistsResponse::new(false, "Datos incompletos");
        }

        if !is_document_number(documento) {
            return ExistsResponse::new(false, "Formato de documento inválido");
        }

        let tipo_documento = match DocumentType::parse(tipo_raw) {
            Some(tipo) => tipo,
            None => return ExistsResponse::new(false, "Tipo de documento inválido"),
        };

        match self.store.exists(tipo_documento, documento, None).await {
            Ok(true) => ExistsResponse::new(true, "Usuario ya registrado"),
            Ok(false) => ExistsResponse::new(false, "Usuario disponible"),
            Err(e) => {
                error!("중복 확인 중 저장소 오류: {}", e);
                ExistsResponse::new(false, "Error al verificar usuario")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::users::user_repo::memory::{FailingUserStore, MemoryUserStore};

    fn submit_request(documento: &str, user_id: &str) -> SubmitUserRequest {
        SubmitUserRequest {
            tipo_documento: "CC".to_string(),
            documento: documento.to_string(),
            nombre: "Ana Gomez".to_string(),
            edad: "30".to_string(),
            genero: "F".to_string(),
            preferencias: vec!["Deportes".to_string()],
            latitud: String::new(),
            longitud: String::new(),
            user_id: user_id.to_string(),
        }
    }

    fn check_request(tipo: &str, documento: &str) -> CheckUserRequest {
        CheckUserRequest {
            tipo_documento: tipo.to_string(),
            documento: documento.to_string(),
        }
    }

    fn service_with_memory() -> (UserService, Arc<MemoryUserStore>) {
        let store = Arc::new(MemoryUserStore::new());
        (UserService::new(store.clone()), store)
    }

    #[actix_web::test]
    async fn test_create_success() {
        let (service, store) = service_with_memory();

        let response = service.submit(submit_request("12345", "")).await.unwrap();

        assert!(response.success);
        assert_eq!(response.message, "Usuario registrado exitosamente");
        assert_eq!(store.len(), 1);
    }

    #[actix_web::test]
    async fn test_duplicate_create_conflicts() {
        let (service, _store) = service_with_memory();
        service.submit(submit_request("12345", "")).await.unwrap();

        let result = service.submit(submit_request("12345", "")).await;

        match result {
            Err(AppError::ConflictError(msg)) => {
                assert_eq!(msg, "Este usuario ya está registrado");
            }
            other => panic!("중복 오류를 기대했으나: {:?}", other),
        }
    }

    #[actix_web::test]
    async fn test_same_documento_different_tipo_succeeds() {
        let (service, store) = service_with_memory();
        service.submit(submit_request("12345", "")).await.unwrap();

        let mut request = submit_request("12345", "");
        request.tipo_documento = "CE".to_string();

        assert!(service.submit(request).await.is_ok());
        assert_eq!(store.len(), 2);
    }

    #[actix_web::test]
    async fn test_update_resubmitting_own_document_succeeds() {
        let (service, _store) = service_with_memory();
        service.submit(submit_request("12345", "")).await.unwrap();

        // id=1로 저장된 레코드가 자기 문서번호를 그대로 재제출
        let response = service.submit(submit_request("12345", "1")).await.unwrap();

        assert!(response.success);
        assert_eq!(response.message, "Usuario actualizado exitosamente");
    }

    #[actix_web::test]
    async fn test_identical_update_is_idempotent() {
        let (service, store) = service_with_memory();
        service.submit(submit_request("12345", "")).await.unwrap();

        service.submit(submit_request("12345", "1")).await.unwrap();
        service.submit(submit_request("12345", "1")).await.unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.get(1).unwrap().documento, "12345");
    }

    #[actix_web::test]
    async fn test_update_missing_id_is_not_found() {
        let (service, _store) = service_with_memory();

        let result = service.submit(submit_request("12345", "42")).await;

        match result {
            Err(AppError::NotFound(msg)) => assert_eq!(msg, "Usuario no encontrado"),
            other => panic!("NotFound를 기대했으나: {:?}", other),
        }
    }

    #[actix_web::test]
    async fn test_update_colliding_with_other_record_conflicts() {
        let (service, _store) = service_with_memory();
        service.submit(submit_request("11111", "")).await.unwrap();
        service.submit(submit_request("22222", "")).await.unwrap();

        // id=2 레코드를 id=1의 문서번호로 수정 시도
        let result = service.submit(submit_request("11111", "2")).await;

        assert!(matches!(result, Err(AppError::ConflictError(_))));
    }

    #[actix_web::test]
    async fn test_validation_failure_does_not_touch_store() {
        let (service, store) = service_with_memory();

        let mut request = submit_request("12345", "");
        request.genero = String::new();
        request.edad = "12".to_string();

        let result = service.submit(request).await;

        match result {
            Err(AppError::ValidationError(msg)) => {
                assert!(msg.contains("Edad inválida"));
                assert!(msg.contains("Género inválido"));
            }
            other => panic!("검증 오류를 기대했으나: {:?}", other),
        }
        assert_eq!(store.len(), 0);
    }

    #[actix_web::test]
    async fn test_check_exists_incomplete_data() {
        let (service, _store) = service_with_memory();

        let response = service.check_exists(check_request("", "12345")).await;
        assert!(!response.existe);
        assert_eq!(response.message, "Datos incompletos");

        let response = service.check_exists(check_request("CC", "")).await;
        assert!(!response.existe);
        assert_eq!(response.message, "Datos incompletos");
    }

    #[actix_web::test]
    async fn test_check_exists_bad_document_format() {
        let (service, _store) = service_with_memory();

        let response = service.check_exists(check_request("CC", "12a45")).await;

        assert!(!response.existe);
        assert_eq!(response.message, "Formato de documento inválido");
    }

    #[actix_web::test]
    async fn test_check_exists_bad_document_type() {
        let (service, _store) = service_with_memory();

        let response = service.check_exists(check_request("XX", "12345")).await;

        assert!(!response.existe);
        assert_eq!(response.message, "Tipo de documento inválido");
    }

    #[actix_web::test]
    async fn test_check_exists_found_and_available() {
        let (service, _store) = service_with_memory();
        service.submit(submit_request("12345", "")).await.unwrap();

        let response = service.check_exists(check_request("CC", "12345")).await;
        assert!(response.existe);
        assert_eq!(response.message, "Usuario ya registrado");

        let response = service.check_exists(check_request("CC", "99999")).await;
        assert!(!response.existe);
        assert_eq!(response.message, "Usuario disponible");
    }

    #[actix_web::test]
    async fn test_check_exists_store_error_is_soft() {
        let service = UserService::new(Arc::new(FailingUserStore));

        let response = service.check_exists(check_request("CC", "12345")).await;

        assert!(!response.existe);
        assert_eq!(response.message, "Error al verificar usuario");
    }
}
