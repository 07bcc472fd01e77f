//! ID 토큰 검증 서비스
//!
//! 원시 ID 토큰 문자열을 받아 페이로드를 디코딩하고
//! 비즈니스 규칙(도메인 허용 목록, 이메일 인증 플래그)을 적용합니다.
//! 네트워크 호출은 전혀 수행하지 않습니다.
//!
//! ## 보안 한계
//!
//! 토큰 서명은 클라이언트 사이드에서 암호학적으로 검증되지 **않습니다**.
//! 이 설계는 권한이 필요한 동작을 허용하기 전에 신뢰할 수 있는
//! 백엔드의 재검증 단계와 짝지어질 때만 안전합니다.

use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use crate::config::AuthConfig;
use crate::domain::models::{TokenClaims, UserRecord};
use crate::errors::{AuthError, AuthResult, TokenErrorContext};
use crate::utils::string_utils::{clean_optional_string, local_part};

/// 아이덴티티 프로바이더의 알려진 발급자 문자열
///
/// 발급자 검사는 소프트 체크이며 보안 경계가 아닙니다.
const VALID_ISSUERS: [&str; 2] = ["https://accounts.google.com", "accounts.google.com"];

/// ID 토큰 검증 서비스
///
/// 한 번의 검증 호출은 `디코딩 → 이메일 존재 → 도메인 접미사 →
/// 인증 플래그 → 발급자(소프트)` 순서의 규칙을 적용하고,
/// 성공 시 정규화된 [`UserRecord`]를 반환합니다.
/// 실패 시 부분적인 레코드는 절대 반환되지 않습니다.
pub struct TokenValidator {
    /// 프로세스 전역 설정 (읽기 전용)
    config: Arc<AuthConfig>,
}

impl TokenValidator {
    /// 주입된 설정으로 검증기를 생성합니다.
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }

    /// 토큰 페이로드를 디코딩하여 클레임을 반환합니다.
    ///
    /// 토큰을 `.` 기준으로 분리하여 정확히 3개 세그먼트
    /// (헤더.페이로드.서명)인지 확인한 뒤, 가운데 세그먼트를
    /// Base64URL로 디코딩하고 JSON으로 파싱합니다.
    ///
    /// # Arguments
    ///
    /// * `token` - 원시 ID 토큰 문자열
    ///
    /// # Returns
    ///
    /// * `Ok(TokenClaims)` - 디코딩된 클레임
    ///
    /// # Errors
    ///
    /// * `AuthError::MalformedToken` - 세그먼트 수 불일치, Base64/JSON 파싱 실패
    pub fn decode(&self, token: &str) -> AuthResult<TokenClaims> {
        let segments: Vec<&str> = token.split('.').collect();
        if segments.len() != 3 {
            return Err(AuthError::MalformedToken(format!(
                "세그먼트가 3개가 아닙니다 (실제: {}개)",
                segments.len()
            )));
        }

        // 일부 발급자는 패딩을 포함하므로 제거 후 디코딩
        let payload = segments[1].trim_end_matches('=');
        let decoded = URL_SAFE_NO_PAD
            .decode(payload)
            .token_context("페이로드 Base64 디코딩 실패")?;

        serde_json::from_slice::<TokenClaims>(&decoded).token_context("페이로드 JSON 파싱 실패")
    }

    /// 원시 토큰을 검증하여 사용자 레코드를 반환합니다.
    ///
    /// 검증 규칙 (순서 고정):
    ///
    /// 1. 빈 토큰 → `MalformedToken`
    /// 2. 페이로드 디코딩 실패 → `MalformedToken`
    /// 3. email 클레임 없음 → `MissingEmail`
    /// 4. 허용 도메인 접미사 불일치 → `DomainNotAllowed`
    ///    (대소문자 구분, 정규화 없는 정확한 접미사 비교)
    /// 5. 이메일 미인증 → `EmailNotVerified`
    /// 6. 알 수 없는 발급자 → 경고 로그만 남기고 계속 (소프트 체크)
    /// 7. 성공 → `UserRecord` 반환. `name`이 없으면 이메일 로컬 파트로 대체
    ///
    /// # Arguments
    ///
    /// * `token` - 원시 ID 토큰 문자열
    ///
    /// # Returns
    ///
    /// * `Ok(UserRecord)` - 검증된 사용자 레코드
    ///
    /// # Errors
    ///
    /// 위 규칙의 각 실패는 구별 가능한 [`AuthError`] 변형으로 반환됩니다.
    pub fn validate(&self, token: &str) -> AuthResult<UserRecord> {
        if token.is_empty() {
            return Err(AuthError::MalformedToken("토큰이 비어 있습니다".to_string()));
        }

        let claims = self.decode(token)?;

        let email = match claims.email {
            Some(email) if !email.is_empty() => email,
            _ => return Err(AuthError::MissingEmail),
        };

        let suffix = self.config.allowed_domain();
        if !email.ends_with(suffix) {
            return Err(AuthError::DomainNotAllowed {
                email,
                suffix: suffix.to_string(),
            });
        }

        if !claims.email_verified {
            return Err(AuthError::EmailNotVerified);
        }

        if let Some(iss) = &claims.iss {
            if !VALID_ISSUERS.contains(&iss.as_str()) {
                log::warn!("알려진 발급자가 아니지만 계속 진행합니다: {}", iss);
            }
        }

        let name = clean_optional_string(claims.name)
            .unwrap_or_else(|| local_part(&email).to_string());

        Ok(UserRecord {
            email,
            name,
            picture: claims.picture,
        })
    }
}
