//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 데이터를 전송하기 위한 객체들을 정의하는 모듈입니다.
//! 클라이언트와 서버 간의 데이터 계약(Contract)을 명확히 정의하며,
//! 와이어 필드명은 기존 클라이언트가 사용하는 스페인어 이름을 그대로 따릅니다.
//!
//! ## 설계 원칙
//!
//! ### 1. 관대한 역직렬화, 엄격한 검증
//! 요청 DTO의 모든 필드는 `#[serde(default)]`로 선언되어 필드 누락이
//! 역직렬화 실패가 아닌 검증 오류로 이어집니다. 클라이언트는 항상
//! 어떤 필드가 왜 잘못되었는지 열거된 메시지를 받습니다.
//!
//! ### 2. 유효성 검증 내장
//! `validator` 크레이트의 derive와 커스텀 함수로 필드별 규칙을 선언하고,
//! 모든 오류를 수집하여 하나의 사용자 메시지로 집계합니다.
//!
//! ### 3. 도메인 분리
//! 원시 문자열 DTO와 검증 완료된 엔티티를 분리하여,
//! 하위 계층이 검증되지 않은 입력을 볼 수 없게 합니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! └── users/
//!     ├── request/     # 요청 DTO (클라이언트 → 서버)
//!     │   ├── submit_user_request.rs
//!     │   └── check_user_request.rs
//!     └── response/    # 응답 DTO (서버 → 클라이언트)
//!         └── submit_response.rs
//! ```

pub mod users;

pub use users::*;
