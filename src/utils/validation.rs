//! # 필드 형식 검증 유틸리티
//!
//! 요청 DTO의 검증 함수와 중복 확인 엔드포인트가 공유하는
//! 순수 술어 함수들입니다. 입력은 이미 trim 된 문자열을 가정합니다.

/// 문서 번호 형식 확인 (숫자만, 비어 있지 않음)
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::validation::is_document_number;
///
/// assert!(is_document_number("12345"));
/// assert!(!is_document_number("12a45"));
/// assert!(!is_document_number(""));
/// ```
pub fn is_document_number(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}

/// 이름 형식 확인 (영문자/숫자/공백만, 비어 있지 않음)
///
/// 허용되지 않는 문자가 있으면 전체를 거부합니다.
/// 서버는 입력을 정제하지 않습니다.
pub fn is_valid_name(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == ' ')
}

/// 나이 문자열 파싱 및 범위 확인 (18 이상 120 이하)
///
/// # 반환값
/// * `Some(u32)` - 범위 내의 유효한 나이
/// * `None` - 숫자가 아니거나 범위를 벗어난 경우
pub fn parse_age(value: &str) -> Option<u32> {
    let age = value.parse::<u32>().ok()?;
    if (18..=120).contains(&age) {
        Some(age)
    } else {
        None
    }
}

/// 좌표 문자열 파싱 (유한한 부동소수점만 허용)
///
/// NaN과 무한대는 저장소에 기록할 수 없으므로 거부합니다.
pub fn parse_coordinate(value: &str) -> Option<f64> {
    let parsed = value.parse::<f64>().ok()?;
    if parsed.is_finite() { Some(parsed) } else { None }
}

/// 수정 대상 id 파싱 (1 이상의 정수만 허용)
pub fn parse_user_id(value: &str) -> Option<u64> {
    let id = value.parse::<u64>().ok()?;
    if id > 0 { Some(id) } else { None }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_document_number() {
        assert!(is_document_number("12345"));
        assert!(is_document_number("0"));

        assert!(!is_document_number(""));
        assert!(!is_document_number("12a45"));
        assert!(!is_document_number("12 45"));
        assert!(!is_document_number("-123"));
        assert!(!is_document_number("١٢٣")); // 아라비아 숫자는 ASCII가 아님
    }

    #[test]
    fn test_is_valid_name() {
        assert!(is_valid_name("Ana Gomez"));
        assert!(is_valid_name("Usuario 2"));

        assert!(!is_valid_name(""));
        assert!(!is_valid_name("Ana<script>"));
        assert!(!is_valid_name("José")); // 악센트 문자는 허용 집합 밖
        assert!(!is_valid_name("O'Brien"));
    }

    #[test]
    fn test_parse_age_inclusive_bounds() {
        assert_eq!(parse_age("18"), Some(18));
        assert_eq!(parse_age("120"), Some(120));
        assert_eq!(parse_age("30"), Some(30));

        assert_eq!(parse_age("17"), None);
        assert_eq!(parse_age("121"), None);
        assert_eq!(parse_age("abc"), None);
        assert_eq!(parse_age("-5"), None);
        assert_eq!(parse_age("30.5"), None);
    }

    #[test]
    fn test_parse_coordinate() {
        assert_eq!(parse_coordinate("4.60971"), Some(4.60971));
        assert_eq!(parse_coordinate("-74.08175"), Some(-74.08175));
        assert_eq!(parse_coordinate("0"), Some(0.0));

        assert_eq!(parse_coordinate("norte"), None);
        assert_eq!(parse_coordinate("NaN"), None);
        assert_eq!(parse_coordinate("inf"), None);
        assert_eq!(parse_coordinate(""), None);
    }

    #[test]
    fn test_parse_user_id() {
        assert_eq!(parse_user_id("7"), Some(7));
        assert_eq!(parse_user_id("123456"), Some(123456));

        assert_eq!(parse_user_id("0"), None);
        assert_eq!(parse_user_id("-1"), None);
        assert_eq!(parse_user_id("abc"), None);
        assert_eq!(parse_user_id("7.5"), None);
    }
}
