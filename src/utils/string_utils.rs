//! # 문자열 유틸리티
//!
//! 이메일과 도메인 문자열 처리에 관련된 공통 유틸리티 함수들입니다.

/// 이메일 주소의 로컬 파트를 반환합니다.
///
/// 첫 번째 `@` 이전의 부분 문자열을 반환하며,
/// `@`가 없는 입력은 그대로 반환합니다.
///
/// # 인자
/// * `email` - 이메일 주소
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::local_part;
///
/// assert_eq!(local_part("ana@example-corp.example"), "ana");
/// assert_eq!(local_part("no-at-sign"), "no-at-sign");
/// ```
pub fn local_part(email: &str) -> &str {
    match email.find('@') {
        Some(idx) => &email[..idx],
        None => email,
    }
}

/// 도메인 접미사 앞에 `@`를 보장합니다.
///
/// 이미 `@`로 시작하면 그대로, 아니면 `@`를 앞에 붙여 반환합니다.
/// 대소문자나 공백은 변경하지 않습니다.
///
/// # 인자
/// * `domain` - 도메인 접미사 (예: `example-corp.example` 또는 `@example-corp.example`)
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::ensure_leading_at;
///
/// assert_eq!(ensure_leading_at("example-corp.example"), "@example-corp.example");
/// assert_eq!(ensure_leading_at("@example-corp.example"), "@example-corp.example");
/// ```
pub fn ensure_leading_at(domain: &str) -> String {
    if domain.starts_with('@') {
        domain.to_string()
    } else {
        format!("@{}", domain)
    }
}

/// 선택적 문자열 필드 정리
///
/// None 값이거나 빈 문자열/공백만 있는 경우 None을 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 Some 옵션으로 반환합니다.
///
/// # 인자
/// * `value` - 정리할 Option<String>
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::clean_optional_string;
///
/// assert_eq!(clean_optional_string(Some("  Ana  ".to_string())), Some("Ana".to_string()));
/// assert_eq!(clean_optional_string(Some("   ".to_string())), None);
/// assert_eq!(clean_optional_string(None), None);
/// ```
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}
