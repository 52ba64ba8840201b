//! 사용자 등록/수정 제출 요청 DTO
//!
//! 등록 폼 제출의 HTTP 요청 데이터 구조를 정의합니다.
//! 모든 필드는 클라이언트가 보낸 원시 문자열 그대로 수신되며,
//! 필드 누락은 역직렬화 실패가 아니라 빈 값에 대한 검증 오류로 처리됩니다.
use serde::{Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidationError, ValidationErrors, ValidationErrorsKind};

use crate::domain::entities::users::user::{
    Coordinates, DocumentType, Gender, NewUser, Operation,
};
use crate::errors::errors::{AppError, AppResult};
use crate::utils::validation::{
    is_document_number, is_valid_name, parse_age, parse_coordinate, parse_user_id,
};

pub(crate) const MSG_TIPO_DOCUMENTO: &str = "Tipo de documento inválido o no proporcionado";
pub(crate) const MSG_DOCUMENTO: &str = "Documento inválido. Solo se permiten números";
pub(crate) const MSG_NOMBRE: &str = "Nombre inválido. Solo se permiten letras, números y espacios";
pub(crate) const MSG_EDAD: &str = "Edad inválida. Debe ser mayor de 18 años y menor de 120";
pub(crate) const MSG_GENERO: &str = "Género inválido o no proporcionado";
pub(crate) const MSG_PREFERENCIAS: &str = "Debe seleccionar al menos una preferencia";
pub(crate) const MSG_LATITUD: &str = "Latitud inválida";
pub(crate) const MSG_LONGITUD: &str = "Longitud inválida";
pub(crate) const MSG_COORDENADAS: &str = "Latitud y longitud deben proporcionarse juntas";
pub(crate) const MSG_USER_ID: &str = "Identificador de usuario inválido";

/// 오류 메시지 집계 순서 (필드 선언 순서, 스키마 오류는 마지막)
const FIELD_ORDER: [&str; 10] = [
    "tipo_documento",
    "documento",
    "nombre",
    "edad",
    "genero",
    "preferencias",
    "latitud",
    "longitud",
    "user_id",
    "__all__",
];

/// 사용자 등록/수정 제출 요청 DTO
///
/// JSON 역직렬화와 입력 검증을 수행합니다. `user_id`가 비어 있지 않으면
/// 수정 요청이고, 비어 있으면 생성 요청입니다. 이 결정은
/// [`into_operation`](Self::into_operation)에서 단 한 번 내려집니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_coordinate_pair", skip_on_field_errors = false))]
pub struct SubmitUserRequest {
    /// 문서 타입 (CC, CE, PA, TI)
    #[serde(default)]
    #[validate(custom(function = "validate_tipo_documento"))]
    pub tipo_documento: String,

    /// 문서 번호 (숫자만)
    #[serde(default)]
    #[validate(custom(function = "validate_documento"))]
    pub documento: String,

    /// 이름 (영문자/숫자/공백만, 부정 문자는 정제하지 않고 거부)
    #[serde(default)]
    #[validate(custom(function = "validate_nombre"))]
    pub nombre: String,

    /// 나이 (18-120, 문자열 또는 JSON 숫자로 수신)
    #[serde(default, deserialize_with = "string_or_number")]
    #[validate(custom(function = "validate_edad"))]
    pub edad: String,

    /// 성별 (M, F, O, PN)
    #[serde(default)]
    #[validate(custom(function = "validate_genero"))]
    pub genero: String,

    /// 선호 항목 목록 (최소 1개)
    #[serde(default)]
    #[validate(custom(function = "validate_preferencias"))]
    pub preferencias: Vec<String>,

    /// 위도 (선택, 빈 문자열은 미제공으로 간주)
    #[serde(default, deserialize_with = "string_or_number")]
    #[validate(custom(function = "validate_latitud"))]
    pub latitud: String,

    /// 경도 (선택, 빈 문자열은 미제공으로 간주)
    #[serde(default, deserialize_with = "string_or_number")]
    #[validate(custom(function = "validate_longitud"))]
    pub longitud: String,

    /// 수정 대상 id (선택, 존재하면 수정 모드)
    #[serde(default, deserialize_with = "string_or_number")]
    #[validate(custom(function = "validate_user_id"))]
    pub user_id: String,
}

impl SubmitUserRequest {
    /// 모든 필드를 검증하고 오류 메시지를 하나로 집계합니다.
    ///
    /// 첫 번째 오류에서 중단하지 않고 모든 필드를 검사한 뒤,
    /// 필드 선언 순서대로 메시지를 ". "로 이어붙입니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(())` - 모든 필드가 유효한 경우
    /// * `Err(AppError::ValidationError)` - 집계된 오류 메시지
    pub fn validate_all(&self) -> AppResult<()> {
        match self.validate() {
            Ok(()) => Ok(()),
            Err(errors) => Err(AppError::ValidationError(aggregate_messages(&errors))),
        }
    }

    /// 검증된 요청을 저장소 연산으로 변환합니다.
    ///
    /// 생성/수정 결정은 여기에서 단 한 번 내려지며,
    /// 이후 계층은 `Operation` 변형으로만 분기합니다.
    /// [`validate_all`](Self::validate_all)을 먼저 통과한 요청에서는
    /// 실패하지 않지만, 방어적으로 동일한 검증 메시지를 반환합니다.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// request.validate_all()?;
    /// let operation = request.into_operation()?;
    /// match operation {
    ///     Operation::Create(record) => { /* INSERT */ }
    ///     Operation::Update(id, record) => { /* UPDATE */ }
    /// }
    /// ```
    pub fn into_operation(self) -> AppResult<Operation> {
        let tipo_documento = DocumentType::parse(self.tipo_documento.trim())
            .ok_or_else(|| AppError::ValidationError(MSG_TIPO_DOCUMENTO.to_string()))?;
        let genero = Gender::parse(self.genero.trim())
            .ok_or_else(|| AppError::ValidationError(MSG_GENERO.to_string()))?;
        let edad = parse_age(self.edad.trim())
            .ok_or_else(|| AppError::ValidationError(MSG_EDAD.to_string()))?;

        let coordenadas = match (self.latitud.trim(), self.longitud.trim()) {
            ("", "") => None,
            (lat, lon) => {
                let latitud = parse_coordinate(lat)
                    .ok_or_else(|| AppError::ValidationError(MSG_LATITUD.to_string()))?;
                let longitud = parse_coordinate(lon)
                    .ok_or_else(|| AppError::ValidationError(MSG_LONGITUD.to_string()))?;
                Some(Coordinates { latitud, longitud })
            }
        };

        let record = NewUser {
            tipo_documento,
            documento: self.documento.trim().to_string(),
            nombre: self.nombre.trim().to_string(),
            edad,
            genero,
            preferencias: self.preferencias,
            coordenadas,
        };

        match self.user_id.trim() {
            "" => Ok(Operation::Create(record)),
            raw => {
                let id = parse_user_id(raw)
                    .ok_or_else(|| AppError::ValidationError(MSG_USER_ID.to_string()))?;
                Ok(Operation::Update(id, record))
            }
        }
    }
}

/// 숫자로 전송된 값도 문자열로 수용하는 역직렬화 도우미
///
/// 클라이언트가 `"edad": 30`처럼 JSON 숫자를 보내도 일반 역직렬화
/// 오류 대신 필드별 검증 메시지를 받습니다. `null`과 필드 누락은
/// 빈 문자열과 동일하게 처리됩니다.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        None => String::new(),
        Some(Raw::Text(text)) => text,
        Some(Raw::Number(number)) => number.to_string(),
    })
}

/// ValidationErrors를 필드 선언 순서의 단일 메시지로 집계합니다.
fn aggregate_messages(errors: &ValidationErrors) -> String {
    let mut messages = Vec::new();

    for field in FIELD_ORDER {
        if let Some(ValidationErrorsKind::Field(list)) = errors.errors().get(field) {
            for error in list {
                match &error.message {
                    Some(message) => messages.push(message.to_string()),
                    None => messages.push(error.code.to_string()),
                }
            }
        }
    }

    messages.join(". ")
}

fn validate_tipo_documento(value: &str) -> Result<(), ValidationError> {
    if DocumentType::parse(value.trim()).is_none() {
        return Err(ValidationError::new("tipo_documento").with_message(MSG_TIPO_DOCUMENTO.into()));
    }
    Ok(())
}

fn validate_documento(value: &str) -> Result<(), ValidationError> {
    if !is_document_number(value.trim()) {
        return Err(ValidationError::new("documento").with_message(MSG_DOCUMENTO.into()));
    }
    Ok(())
}

fn validate_nombre(value: &str) -> Result<(), ValidationError> {
    if !is_valid_name(value.trim()) {
        return Err(ValidationError::new("nombre").with_message(MSG_NOMBRE.into()));
    }
    Ok(())
}

fn validate_edad(value: &str) -> Result<(), ValidationError> {
    if parse_age(value.trim()).is_none() {
        return Err(ValidationError::new("edad").with_message(MSG_EDAD.into()));
    }
    Ok(())
}

fn validate_genero(value: &str) -> Result<(), ValidationError> {
    if Gender::parse(value.trim()).is_none() {
        return Err(ValidationError::new("genero").with_message(MSG_GENERO.into()));
    }
    Ok(())
}

fn validate_preferencias(value: &[String]) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::new("preferencias").with_message(MSG_PREFERENCIAS.into()));
    }
    Ok(())
}

fn validate_latitud(value: &str) -> Result<(), ValidationError> {
    let trimmed = value.trim();
    if !trimmed.is_empty() && parse_coordinate(trimmed).is_none() {
        return Err(ValidationError::new("latitud").with_message(MSG_LATITUD.into()));
    }
    Ok(())
}

fn validate_longitud(value: &str) -> Result<(), ValidationError> {
    let trimmed = value.trim();
    if !trimmed.is_empty() && parse_coordinate(trimmed).is_none() {
        return Err(ValidationError::new("longitud").with_message(MSG_LONGITUD.into()));
    }
    Ok(())
}

fn validate_user_id(value: &str) -> Result<(), ValidationError> {
    let trimmed = value.trim();
    if !trimmed.is_empty() && parse_user_id(trimmed).is_none() {
        return Err(ValidationError::new("user_id").with_message(MSG_USER_ID.into()));
    }
    Ok(())
}

/// 좌표 쌍 동시 제공 여부를 검증
///
/// 위도와 경도 중 한쪽만 제공된 요청을 거부합니다.
fn validate_coordinate_pair(req: &SubmitUserRequest) -> Result<(), ValidationError> {
    let has_lat = !req.latitud.trim().is_empty();
    let has_lon = !req.longitud.trim().is_empty();

    if has_lat != has_lon {
        return Err(ValidationError::new("coordenadas").with_message(MSG_COORDENADAS.into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> SubmitUserRequest {
        SubmitUserRequest {
            tipo_documento: "CC".to_string(),
            documento: "12345678".to_string(),
            nombre: "Ana Gomez".to_string(),
            edad: "30".to_string(),
            genero: "F".to_string(),
            preferencias: vec!["Deportes".to_string(), "Lectura".to_string()],
            latitud: String::new(),
            longitud: String::new(),
            user_id: String::new(),
        }
    }

    fn validation_message(req: &SubmitUserRequest) -> String {
        match req.validate_all() {
            Err(AppError::ValidationError(msg)) => msg,
            other => panic!("검증 오류를 기대했으나: {:?}", other),
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(valid_request().validate_all().is_ok());
    }

    #[test]
    fn test_documento_rejects_non_digits() {
        let mut req = valid_request();
        req.documento = "12a45".to_string();

        assert_eq!(validation_message(&req), MSG_DOCUMENTO);
    }

    #[test]
    fn test_edad_inclusive_bounds() {
        for edad in ["18", "120"] {
            let mut req = valid_request();
            req.edad = edad.to_string();
            assert!(req.validate_all().is_ok(), "edad {} 는 유효해야 함", edad);
        }

        for edad in ["17", "121"] {
            let mut req = valid_request();
            req.edad = edad.to_string();
            assert_eq!(validation_message(&req), MSG_EDAD);
        }
    }

    #[test]
    fn test_nombre_rejected_not_sanitized() {
        let mut req = valid_request();
        req.nombre = "Ana<script>".to_string();

        assert_eq!(validation_message(&req), MSG_NOMBRE);
    }

    #[test]
    fn test_missing_genero_names_the_field() {
        let mut req = valid_request();
        req.genero = String::new();

        assert_eq!(validation_message(&req), MSG_GENERO);
    }

    #[test]
    fn test_empty_preferencias() {
        let mut req = valid_request();
        req.preferencias = Vec::new();

        assert_eq!(validation_message(&req), MSG_PREFERENCIAS);
    }

    #[test]
    fn test_errors_aggregated_in_field_order() {
        let req = SubmitUserRequest {
            tipo_documento: "XX".to_string(),
            documento: String::new(),
            nombre: String::new(),
            edad: "12".to_string(),
            genero: "Z".to_string(),
            preferencias: Vec::new(),
            latitud: String::new(),
            longitud: String::new(),
            user_id: String::new(),
        };

        let expected = [
            MSG_TIPO_DOCUMENTO,
            MSG_DOCUMENTO,
            MSG_NOMBRE,
            MSG_EDAD,
            MSG_GENERO,
            MSG_PREFERENCIAS,
        ]
        .join(". ");

        assert_eq!(validation_message(&req), expected);
    }

    #[test]
    fn test_one_sided_coordinates_rejected() {
        let mut req = valid_request();
        req.latitud = "4.60971".to_string();

        assert_eq!(validation_message(&req), MSG_COORDENADAS);

        let mut req = valid_request();
        req.longitud = "-74.08175".to_string();

        assert_eq!(validation_message(&req), MSG_COORDENADAS);
    }

    #[test]
    fn test_coordinate_pair_error_survives_field_errors() {
        // 필드 오류가 있어도 좌표 쌍 오류는 함께 집계되어야 함
        let mut req = valid_request();
        req.documento = "abc".to_string();
        req.latitud = "4.60971".to_string();

        let expected = [MSG_DOCUMENTO, MSG_COORDENADAS].join(". ");
        assert_eq!(validation_message(&req), expected);
    }

    #[test]
    fn test_numeric_json_values_accepted() {
        let req: SubmitUserRequest = serde_json::from_value(serde_json::json!({
            "tipo_documento": "CC",
            "documento": "12345678",
            "nombre": "Ana Gomez",
            "edad": 30,
            "genero": "F",
            "preferencias": ["Deportes"],
            "latitud": 4.60971,
            "longitud": -74.08175,
            "user_id": 7
        }))
        .unwrap();

        assert_eq!(req.edad, "30");
        assert!(req.validate_all().is_ok());

        match req.into_operation().unwrap() {
            Operation::Update(id, record) => {
                assert_eq!(id, 7);
                assert_eq!(record.edad, 30);
                assert_eq!(record.coordenadas.unwrap().latitud, 4.60971);
            }
            other => panic!("Update를 기대했으나: {:?}", other),
        }
    }

    #[test]
    fn test_null_numeric_fields_default_to_empty() {
        let req: SubmitUserRequest =
            serde_json::from_str(r#"{"edad": null, "latitud": null, "user_id": null}"#).unwrap();

        assert!(req.edad.is_empty());
        assert!(req.latitud.is_empty());
        assert!(req.user_id.is_empty());
    }

    #[test]
    fn test_non_numeric_coordinate_rejected() {
        let mut req = valid_request();
        req.latitud = "norte".to_string();
        req.longitud = "-74.0".to_string();

        assert_eq!(validation_message(&req), MSG_LATITUD);
    }

    #[test]
    fn test_invalid_user_id_is_an_error_not_create() {
        let mut req = valid_request();
        req.user_id = "abc".to_string();

        assert_eq!(validation_message(&req), MSG_USER_ID);
    }

    #[test]
    fn test_missing_fields_deserialize_as_empty() {
        let req: SubmitUserRequest = serde_json::from_str("{}").unwrap();

        assert!(req.tipo_documento.is_empty());
        assert!(req.preferencias.is_empty());
        assert!(req.validate_all().is_err());
    }

    #[test]
    fn test_into_operation_create() {
        let operation = valid_request().into_operation().unwrap();

        match operation {
            Operation::Create(record) => {
                assert_eq!(record.tipo_documento, DocumentType::CC);
                assert_eq!(record.documento, "12345678");
                assert_eq!(record.edad, 30);
                assert_eq!(record.coordenadas, None);
            }
            other => panic!("Create를 기대했으나: {:?}", other),
        }
    }

    #[test]
    fn test_into_operation_update_with_coordinates() {
        let mut req = valid_request();
        req.user_id = "7".to_string();
        req.latitud = "4.60971".to_string();
        req.longitud = "-74.08175".to_string();

        let operation = req.into_operation().unwrap();

        match operation {
            Operation::Update(id, record) => {
                assert_eq!(id, 7);
                let coords = record.coordenadas.unwrap();
                assert_eq!(coords.latitud, 4.60971);
                assert_eq!(coords.longitud, -74.08175);
            }
            other => panic!("Update를 기대했으나: {:?}", other),
        }
    }

    #[test]
    fn test_into_operation_trims_fields() {
        let mut req = valid_request();
        req.documento = "  12345678  ".to_string();
        req.nombre = "  Ana Gomez  ".to_string();

        let record = match req.into_operation().unwrap() {
            Operation::Create(record) => record,
            other => panic!("Create를 기대했으나: {:?}", other),
        };

        assert_eq!(record.documento, "12345678");
        assert_eq!(record.nombre, "Ana Gomez");
    }
}
