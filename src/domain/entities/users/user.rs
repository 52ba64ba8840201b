//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! 검증 계층을 통과한 등록 데이터와 그에 수반되는 값 객체들을 정의합니다.

use serde::{Deserialize, Serialize};

/// 신분 문서 타입
///
/// 클라이언트가 전송할 수 있는 닫힌 허용값 집합입니다.
/// 와이어 표현은 대문자 약어 그대로입니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentType {
    /// Cédula de ciudadanía
    CC,
    /// Cédula de extranjería
    CE,
    /// Pasaporte
    PA,
    /// Tarjeta de identidad
    TI,
}

impl DocumentType {
    /// 와이어 문자열에서 문서 타입을 파싱합니다.
    ///
    /// 허용값 집합 밖의 입력은 `None`을 반환하며,
    /// 호출자가 검증 오류로 변환합니다.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "CC" => Some(DocumentType::CC),
            "CE" => Some(DocumentType::CE),
            "PA" => Some(DocumentType::PA),
            "TI" => Some(DocumentType::TI),
            _ => None,
        }
    }

    /// 저장소 컬럼에 기록되는 문자열 표현을 반환합니다.
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::CC => "CC",
            DocumentType::CE => "CE",
            DocumentType::PA => "PA",
            DocumentType::TI => "TI",
        }
    }
}

/// 성별
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    /// Masculino
    M,
    /// Femenino
    F,
    /// Otro
    O,
    /// Prefiero no decir
    PN,
}

impl Gender {
    /// 와이어 문자열에서 성별을 파싱합니다.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "M" => Some(Gender::M),
            "F" => Some(Gender::F),
            "O" => Some(Gender::O),
            "PN" => Some(Gender::PN),
            _ => None,
        }
    }

    /// 저장소 컬럼에 기록되는 문자열 표현을 반환합니다.
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::M => "M",
            Gender::F => "F",
            Gender::O => "O",
            Gender::PN => "PN",
        }
    }
}

/// 위치 좌표 값 객체
///
/// 위도와 경도는 항상 쌍으로 존재합니다. 한쪽만 있는 상태는
/// 검증 단계에서 거부되므로 이 타입으로는 표현할 수 없습니다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitud: f64,
    pub longitud: f64,
}

/// 검증 완료된 사용자 레코드 (id 없음)
///
/// 모든 필드는 DTO 검증을 통과한 값입니다. `id`와 타임스탬프
/// (`fecha_creacion`, `fecha_actualizacion`)는 저장소가 발급/기록하므로
/// 엔티티에 포함되지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    pub tipo_documento: DocumentType,
    /// 문서 번호 (숫자만, 앞뒤 공백 제거됨)
    pub documento: String,
    /// 이름 (영문자/숫자/공백만, 앞뒤 공백 제거됨)
    pub nombre: String,
    /// 나이 (18 이상 120 이하)
    pub edad: u32,
    pub genero: Gender,
    /// 선호 항목 (최소 1개)
    pub preferencias: Vec<String>,
    /// 선택적 위치 좌표
    pub coordenadas: Option<Coordinates>,
}

/// 저장소에 요청할 연산
///
/// 생성과 수정은 요청 경계에서 단 한 번 결정됩니다.
/// 이후 어떤 계층도 `user_id` 필드의 존재 여부를 다시 검사하지 않습니다.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// 새 레코드 생성
    Create(NewUser),
    /// 기존 레코드 수정 (대상 id, 새 값)
    Update(u64, NewUser),
}

impl Operation {
    /// 연산이 수정하는 레코드를 반환합니다.
    pub fn record(&self) -> &NewUser {
        match self {
            Operation::Create(record) => record,
            Operation::Update(_, record) => record,
        }
    }

    /// 수정 연산인 경우 대상 id를 반환합니다.
    ///
    /// 중복 검사에서 자기 자신을 제외할 때 사용됩니다.
    pub fn exclude_id(&self) -> Option<u64> {
        match self {
            Operation::Create(_) => None,
            Operation::Update(id, _) => Some(*id),
        }
    }
}
