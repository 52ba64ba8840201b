//! 데이터 및 서버 설정 관리 모듈
//!
//! 데이터베이스 연결 정보와 서버 바인딩 설정을 환경 변수에서 읽어 관리합니다.

use std::env;

/// 데이터베이스 연결 설정
///
/// `DATABASE_URL`이 설정되어 있으면 그대로 사용하고,
/// 없으면 개별 변수(`DB_HOST`, `DB_PORT`, `DB_USER`, `DB_PASS`, `DB_NAME`)로
/// MySQL 연결 URL을 조립합니다. 명시적으로 생성하여
/// [`Database::connect`](crate::db::Database::connect)에 전달합니다.
#[derive(Debug, Clone)]
pub struct DataConfig {
    /// 완성된 MySQL 연결 URL
    url: String,
    /// 대상 데이터베이스 이름 (로그 출력용)
    database_name: String,
}

impl DataConfig {
    /// 환경 변수에서 데이터베이스 설정을 로드합니다.
    ///
    /// # Environment Variables
    ///
    /// * `DATABASE_URL` - 완성된 연결 URL (우선 적용)
    /// * `DB_HOST` - 호스트 (기본값: "localhost")
    /// * `DB_PORT` - 포트 (기본값: "3306")
    /// * `DB_USER` - 사용자 (기본값: "root")
    /// * `DB_PASS` - 비밀번호 (기본값: 빈 문자열)
    /// * `DB_NAME` - 데이터베이스 이름 (기본값: "registro_usuarios")
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let config = DataConfig::from_env();
    /// let database = Database::connect(&config).await?;
    /// ```
    pub fn from_env() -> Self {
        let database_name =
            env::var("DB_NAME").unwrap_or_else(|_| "registro_usuarios".to_string());

        if let Ok(url) = env::var("DATABASE_URL") {
            return Self { url, database_name };
        }

        let host = env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string());
        let port = env::var("DB_PORT").unwrap_or_else(|_| "3306".to_string());
        let user = env::var("DB_USER").unwrap_or_else(|_| "root".to_string());
        let pass = env::var("DB_PASS").unwrap_or_default();

        let url = format!(
            "mysql://{}:{}@{}:{}/{}",
            user, pass, host, port, database_name
        );

        Self { url, database_name }
    }

    /// 명시적 값으로 설정을 생성합니다 (테스트용).
    pub fn new(url: impl Into<String>, database_name: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            database_name: database_name.into(),
        }
    }

    /// MySQL 연결 URL을 반환합니다.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// 데이터베이스 이름을 반환합니다.
    pub fn database_name(&self) -> &str {
        &self.database_name
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다.
    ///
    /// # Returns
    ///
    /// 포트 번호. 기본값: 8080
    ///
    /// # Environment Variables
    ///
    /// - `PORT`: 커스텀 포트 설정
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다.
    ///
    /// # Returns
    ///
    /// 호스트 주소. 기본값: "0.0.0.0" (모든 인터페이스)
    ///
    /// # Environment Variables
    ///
    /// - `HOST`: 커스텀 호스트 설정
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_config() {
        let config = DataConfig::new("mysql://root:pw@db:3306/registro", "registro");

        assert_eq!(config.url(), "mysql://root:pw@db:3306/registro");
        assert_eq!(config.database_name(), "registro");
    }

    #[test]
    fn test_server_config_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 8080);
        }

        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "0.0.0.0");
        }
    }
}
