//! 사용자 중복 확인 요청 DTO

use serde::{Deserialize, Serialize};

/// 중복 확인 요청 DTO (`POST /api/v1/users/exists`)
///
/// 클라이언트가 문서 필드 입력 중 실시간 힌트를 위해 전송합니다.
/// 이 엔드포인트는 입력 문제를 검증 오류 대신 `existe: false`와
/// 설명 메시지로 응답하므로 validator 검증을 거치지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckUserRequest {
    /// 문서 타입 (CC, CE, PA, TI)
    #[serde(default)]
    pub tipo_documento: String,

    /// 문서 번호 (숫자만)
    #[serde(default)]
    pub documento: String,
}
