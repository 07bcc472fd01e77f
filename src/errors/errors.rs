//! 인증 서브시스템에서 사용하는 에러 시스템
//!
//! 로그인 플로우의 모든 실패를 포괄하는 통합 에러 처리 시스템입니다.
//! `thiserror`를 사용하여 타입 안전하고 일관된 에러 처리를 제공하며,
//! 각 에러 종류는 사용자에게 보여줄 단일 메시지로 변환됩니다.
//!
//! ## 전파 정책
//!
//! 검증 에러는 항상 검증기 경계에서 타입 있는 결과로 회수됩니다.
//! 처리되지 않은 패닉으로 UI 계층에 전파되는 경우는 없습니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::{AuthError, AuthResult};
//!
//! fn check_email(email: Option<&str>) -> AuthResult<&str> {
//!     email.ok_or(AuthError::MissingEmail)
//! }
//! ```

use thiserror::Error;

/// 인증 서브시스템 전역 에러 타입
///
/// 로그인 플로우에서 발생할 수 있는 모든 종류의 실패를 포괄하는 열거형입니다.
/// 어떤 변형도 애플리케이션을 중단시키지 않으며,
/// [`AuthError::user_message`]를 통해 사람이 읽을 수 있는 메시지로 변환됩니다.
#[derive(Error, Debug)]
pub enum AuthError {
    /// 설정 누락/불완전 에러 - 사용자에게 설정 가이드 표시
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// SDK 스크립트 로드 실패 (네트워크 오류, 전역 객체 누락, 타임아웃)
    #[error("SDK load error: {0}")]
    SdkLoad(String),

    /// 토큰 형식 오류 (세그먼트 수, Base64, JSON 파싱 실패)
    #[error("Malformed token: {0}")]
    MalformedToken(String),

    /// 토큰에 email 클레임 없음
    #[error("Email claim missing from token")]
    MissingEmail,

    /// 이메일이 허용 도메인으로 끝나지 않음
    ///
    /// 운영자 진단을 위해 문제의 이메일을 포함합니다.
    /// 도메인 소속 여부 이상의 계정 존재 추론에 사용해서는 안 됩니다.
    #[error("Email {email} is not in the allowed domain {suffix}")]
    DomainNotAllowed {
        /// 거부된 이메일 주소
        email: String,
        /// 설정된 허용 도메인 접미사
        suffix: String,
    },

    /// 아이덴티티 프로바이더가 이메일을 인증하지 않음
    #[error("Email has not been verified by the identity provider")]
    EmailNotVerified,
}

impl AuthError {
    /// 에러 종류 식별자를 반환합니다.
    ///
    /// UI 계층이 에러별 분기를 할 때 사용하는 안정적인 문자열 키입니다.
    pub fn kind(&self) -> &'static str {
        match self {
            AuthError::Configuration(_) => "configuration_error",
            AuthError::SdkLoad(_) => "sdk_load_error",
            AuthError::MalformedToken(_) => "malformed_token",
            AuthError::MissingEmail => "missing_email",
            AuthError::DomainNotAllowed { .. } => "domain_not_allowed",
            AuthError::EmailNotVerified => "email_not_verified",
        }
    }

    /// 사용자에게 표시할 단일 메시지를 반환합니다.
    ///
    /// - 설정 에러: 해결 방법 안내
    /// - SDK 로드 에러: 일반적인 재시도 안내
    /// - 검증 에러: 실패 사유 설명
    pub fn user_message(&self) -> String {
        match self {
            AuthError::Configuration(detail) => format!(
                "인증 설정이 완료되지 않았습니다. {} .env 파일 또는 배포 환경 변수를 확인해주세요.",
                detail
            ),
            AuthError::SdkLoad(_) => {
                "Google 로그인 모듈을 불러오지 못했습니다. 잠시 후 다시 시도해주세요.".to_string()
            }
            AuthError::MalformedToken(_) => {
                "로그인 토큰 형식이 올바르지 않습니다. 다시 로그인해주세요.".to_string()
            }
            AuthError::MissingEmail => {
                "토큰에서 이메일을 찾을 수 없습니다. 다시 로그인해주세요.".to_string()
            }
            AuthError::DomainNotAllowed { email, suffix } => format!(
                "이메일은 {}(으)로 끝나야 합니다 (받은 값: {})",
                suffix, email
            ),
            AuthError::EmailNotVerified => {
                "Google에서 인증되지 않은 이메일입니다. 이메일 인증 후 다시 시도해주세요.".to_string()
            }
        }
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AuthResult<T> = Result<T, AuthError>;

/// 외부 라이브러리 에러를 토큰 디코딩 에러로 변환하는 확장 trait
///
/// Base64 디코딩이나 JSON 파싱처럼 디코딩 체인에서 발생하는 에러를
/// 컨텍스트 메시지와 함께 [`AuthError::MalformedToken`]으로 변환합니다.
pub trait TokenErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 `MalformedToken`으로 변환합니다.
    fn token_context(self, msg: &str) -> AuthResult<T>;
}

impl<T, E> TokenErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn token_context(self, msg: &str) -> AuthResult<T> {
        self.map_err(|e| AuthError::MalformedToken(format!("{}: {}", msg, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_labels() {
        assert_eq!(AuthError::Configuration("x".into()).kind(), "configuration_error");
        assert_eq!(AuthError::SdkLoad("x".into()).kind(), "sdk_load_error");
        assert_eq!(AuthError::MalformedToken("x".into()).kind(), "malformed_token");
        assert_eq!(AuthError::MissingEmail.kind(), "missing_email");
        assert_eq!(
            AuthError::DomainNotAllowed {
                email: "a@b.c".into(),
                suffix: "@b.c".into()
            }
            .kind(),
            "domain_not_allowed"
        );
        assert_eq!(AuthError::EmailNotVerified.kind(), "email_not_verified");
    }

    #[test]
    fn test_domain_not_allowed_message_includes_email_and_suffix() {
        let err = AuthError::DomainNotAllowed {
            email: "bob@other.example".into(),
            suffix: "@example-corp.example".into(),
        };
        let msg = err.user_message();
        assert!(msg.contains("bob@other.example"));
        assert!(msg.contains("@example-corp.example"));
    }

    #[test]
    fn test_user_messages_are_never_empty() {
        let errors = [
            AuthError::Configuration("GOOGLE_CLIENT_ID 누락.".into()),
            AuthError::SdkLoad("timeout".into()),
            AuthError::MalformedToken("bad".into()),
            AuthError::MissingEmail,
            AuthError::EmailNotVerified,
        ];
        for err in errors {
            assert!(!err.user_message().is_empty());
        }
    }

    #[test]
    fn test_token_context_converts_to_malformed_token() {
        let result: Result<(), _> = Err("unexpected character");
        let converted = result.token_context("페이로드 파싱 실패");
        match converted {
            Err(AuthError::MalformedToken(msg)) => {
                assert!(msg.contains("페이로드 파싱 실패"));
                assert!(msg.contains("unexpected character"));
            }
            other => panic!("MalformedToken 변환 실패: {:?}", other),
        }
    }
}
