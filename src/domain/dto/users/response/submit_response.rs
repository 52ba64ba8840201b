//! 제출/중복 확인 응답 DTO

use serde::{Deserialize, Serialize};

/// 등록/수정 제출 응답 DTO
///
/// 성공과 실패 모두 이 형태로 렌더링됩니다. 실패 경로는
/// [`AppError`](crate::errors::AppError)의 `ResponseError` 구현이
/// 동일한 JSON 형태를 생성합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub success: bool,
    pub message: String,
}

impl SubmitResponse {
    /// 성공 응답 생성
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// 중복 확인 응답 DTO
///
/// 항상 HTTP 200으로 반환되며, 입력 문제와 저장소 오류도
/// `existe: false`와 설명 메시지로 표현됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExistsResponse {
    pub existe: bool,
    pub message: String,
}

impl ExistsResponse {
    pub fn new(existe: bool, message: impl Into<String>) -> Self {
        Self {
            existe,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_response_serialization() {
        let response = SubmitResponse::ok("Usuario registrado exitosamente");
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Usuario registrado exitosamente");
    }

    #[test]
    fn test_exists_response_serialization() {
        let response = ExistsResponse::new(false, "Usuario disponible");
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["existe"], false);
        assert_eq!(json["message"], "Usuario disponible");
    }
}
