//! ID 토큰 클레임 모델
//!
//! 토큰의 페이로드 세그먼트에서 디코딩되는 클레임들을 정의합니다.
//! 한 번의 검증 호출 동안만 존재하며 절대 영속되지 않습니다.

use serde::Deserialize;

/// ID 토큰 페이로드에서 디코딩된 클레임
///
/// 아이덴티티 프로바이더가 발급한 토큰의 페이로드를 표현합니다.
/// 검증에 필요한 클레임만 역직렬화하며, 알 수 없는 클레임은 무시됩니다.
///
/// ## 필드 기본값
///
/// `email_verified`가 페이로드에 없으면 `false`로 간주합니다.
/// 인증 여부를 알 수 없는 이메일은 인증되지 않은 것으로 취급합니다.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenClaims {
    /// 사용자 이메일 주소
    pub email: Option<String>,

    /// 프로바이더의 이메일 인증 여부
    #[serde(default)]
    pub email_verified: bool,

    /// 표시 이름 (없으면 이메일 로컬 파트로 대체됨)
    pub name: Option<String>,

    /// 프로필 사진 URL
    pub picture: Option<String>,

    /// 토큰 발급자 (issuer)
    pub iss: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_claims() {
        let json = r#"{
            "email": "ana@example-corp.example",
            "email_verified": true,
            "name": "Ana Lima",
            "picture": "https://photos.example/ana.jpg",
            "iss": "https://accounts.google.com"
        }"#;

        let claims: TokenClaims = serde_json::from_str(json).unwrap();
        assert_eq!(claims.email.as_deref(), Some("ana@example-corp.example"));
        assert!(claims.email_verified);
        assert_eq!(claims.name.as_deref(), Some("Ana Lima"));
        assert_eq!(claims.picture.as_deref(), Some("https://photos.example/ana.jpg"));
        assert_eq!(claims.iss.as_deref(), Some("https://accounts.google.com"));
    }

    #[test]
    fn test_email_verified_defaults_to_false() {
        let json = r#"{"email": "ana@example-corp.example"}"#;
        let claims: TokenClaims = serde_json::from_str(json).unwrap();
        assert!(!claims.email_verified);
    }

    #[test]
    fn test_unknown_claims_are_ignored() {
        let json = r#"{
            "email": "ana@example-corp.example",
            "email_verified": true,
            "aud": "some-client-id",
            "exp": 1735689600,
            "sub": "1234567890"
        }"#;

        let claims: TokenClaims = serde_json::from_str(json).unwrap();
        assert_eq!(claims.email.as_deref(), Some("ana@example-corp.example"));
    }

    #[test]
    fn test_empty_payload_deserializes() {
        let claims: TokenClaims = serde_json::from_str("{}").unwrap();
        assert!(claims.email.is_none());
        assert!(!claims.email_verified);
        assert!(claims.name.is_none());
    }
}
