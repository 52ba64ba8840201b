//! # 사용자 리포지토리 구현
//!
//! 사용자 레코드의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//! MySQL `usuarios` 테이블에 대한 존재 확인, 삽입, 수정 연산을 제공합니다.
//!
//! ## 테이블 스키마
//!
//! ```sql
//! CREATE TABLE usuarios (
//!     id BIGINT UNSIGNED AUTO_INCREMENT PRIMARY KEY,
//!     tipo_documento VARCHAR(2) NOT NULL,
//!     documento VARCHAR(20) NOT NULL,
//!     nombre VARCHAR(100) NOT NULL,
//!     edad INT UNSIGNED NOT NULL,
//!     genero VARCHAR(2) NOT NULL,
//!     preferencias TEXT NOT NULL,
//!     latitud DOUBLE NULL,
//!     longitud DOUBLE NULL,
//!     fecha_creacion DATETIME NOT NULL,
//!     fecha_actualizacion DATETIME NULL,
//!     UNIQUE KEY uk_documento (tipo_documento, documento)
//! );
//! ```
//!
//! 애플리케이션 레벨의 존재 확인은 자문(advisory)용 빠른 경로이고,
//! UNIQUE 제약이 실제 무결성을 보장합니다. 쓰기 중 발생한 유니크 위반은
//! 빠른 경로의 중복 오류와 동일하게 매핑됩니다.
//!
//! ## 에러 처리
//!
//! - **ConflictError**: 유니크 제약 위반 (자연키 중복)
//! - **NotFound**: 수정 대상 행이 존재하지 않음
//! - **DatabaseError**: 연결 오류, 쿼리 실행 오류 (진단은 로그로만)

use async_trait::async_trait;
use sqlx::mysql::MySqlPool;

use crate::domain::entities::users::user::{DocumentType, NewUser};
use crate::errors::errors::{AppError, AppResult};

/// 사용자 저장소 인터페이스
///
/// 서비스 계층이 의존하는 유일한 저장소 계약입니다.
/// 운영 환경에서는 [`UserRepository`]가, 테스트에서는 인메모리
/// 구현이 이 트레이트를 제공합니다.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// (tipo_documento, documento) 자연키를 가진 행이 존재하는지 확인합니다.
    ///
    /// `exclude_id`가 주어지면 해당 id의 행은 제외합니다
    /// (수정 시 자기 자신과의 충돌 방지).
    async fn exists(
        &self,
        tipo_documento: DocumentType,
        documento: &str,
        exclude_id: Option<u64>,
    ) -> AppResult<bool>;

    /// 새 레코드를 삽입하고 발급된 id를 반환합니다.
    async fn insert(&self, record: &NewUser) -> AppResult<u64>;

    /// 기존 레코드를 새 값으로 교체합니다.
    ///
    /// 대상 행이 없으면 `NotFound`를 반환합니다.
    async fn update(&self, id: u64, record: &NewUser) -> AppResult<()>;
}

/// MySQL 기반 사용자 리포지토리
///
/// sqlx 커넥션 풀을 소유하며 모든 쿼리는 바인드 파라미터를 사용합니다.
///
/// # Examples
///
/// ```rust,ignore
/// use crate::repositories::users::user_repo::UserRepository;
///
/// let repo = UserRepository::new(database.pool().clone());
/// let id = repo.insert(&record).await?;
/// ```
#[derive(Clone)]
pub struct UserRepository {
    pool: MySqlPool,
}

impl UserRepository {
    /// 주어진 커넥션 풀로 리포지토리를 생성합니다.
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// 선호 항목 목록을 저장용 JSON 배열 텍스트로 직렬화합니다.
    fn encode_preferencias(record: &NewUser) -> AppResult<String> {
        serde_json::to_string(&record.preferencias)
            .map_err(|e| AppError::DatabaseError(format!("preferencias 직렬화 실패: {}", e)))
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn exists(
        &self,
        tipo_documento: DocumentType,
        documento: &str,
        exclude_id: Option<u64>,
    ) -> AppResult<bool> {
        let row = match exclude_id {
            Some(id) => {
                sqlx::query(
                    "SELECT id FROM usuarios \
                     WHERE tipo_documento = ? AND documento = ? AND id != ?",
                )
                .bind(tipo_documento.as_str())
                .bind(documento)
                .bind(id)
                .fetch_optional(&self.pool)
                .await
            }
            None => {
                sqlx::query("SELECT id FROM usuarios WHERE tipo_documento = ? AND documento = ?")
                    .bind(tipo_documento.as_str())
                    .bind(documento)
                    .fetch_optional(&self.pool)
                    .await
            }
        }
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(row.is_some())
    }

    async fn insert(&self, record: &NewUser) -> AppResult<u64> {
        let preferencias = Self::encode_preferencias(record)?;

        let result = sqlx::query(
            "INSERT INTO usuarios \
             (tipo_documento, documento, nombre, edad, genero, preferencias, \
              latitud, longitud, fecha_creacion) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, NOW())",
        )
        .bind(record.tipo_documento.as_str())
        .bind(&record.documento)
        .bind(&record.nombre)
        .bind(record.edad)
        .bind(record.genero.as_str())
        .bind(&preferencias)
        .bind(record.coordenadas.map(|c| c.latitud))
        .bind(record.coordenadas.map(|c| c.longitud))
        .execute(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(result.last_insert_id())
    }

    async fn update(&self, id: u64, record: &NewUser) -> AppResult<()> {
        let preferencias = Self::encode_preferencias(record)?;

        let result = sqlx::query(
            "UPDATE usuarios SET \
             tipo_documento = ?, documento = ?, nombre = ?, edad = ?, genero = ?, \
             preferencias = ?, latitud = ?, longitud = ?, fecha_actualizacion = NOW() \
             WHERE id = ?",
        )
        .bind(record.tipo_documento.as_str())
        .bind(&record.documento)
        .bind(&record.nombre)
        .bind(record.edad)
        .bind(record.genero.as_str())
        .bind(&preferencias)
        .bind(record.coordenadas.map(|c| c.latitud))
        .bind(record.coordenadas.map(|c| c.longitud))
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_write_error)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Usuario no encontrado".to_string()));
        }

        Ok(())
    }
}

/// 쓰기 쿼리 에러를 도메인 에러로 매핑합니다.
///
/// 유니크 제약 위반은 자문 중복 검사를 통과한 뒤의 경합 상황이므로
/// 빠른 경로와 동일한 중복 오류로 변환합니다.
fn map_write_error(error: sqlx::Error) -> AppError {
    if let Some(db_error) = error.as_database_error() {
        if db_error.is_unique_violation() {
            return AppError::ConflictError("Este usuario ya está registrado".to_string());
        }
    }
    AppError::DatabaseError(error.to_string())
}
