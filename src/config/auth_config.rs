//! # Authentication Configuration
//!
//! Google Identity SDK 클라이언트 식별자와 허용 도메인 접미사를 관리합니다.
//! 설정은 프로세스 시작 시 한 번 읽혀 불변으로 유지되며,
//! 조립 루트에서 `Arc<AuthConfig>`로 각 서비스에 주입됩니다.

use std::env;

use serde::Serialize;

use crate::errors::{AuthError, AuthResult};
use crate::utils::string_utils::{clean_optional_string, ensure_leading_at};

/// 인증 서브시스템 설정
///
/// 프로세스 전역 설정으로, 시작 시 한 번 생성된 뒤 불변입니다.
///
/// - `client_id`: 아이덴티티 프로바이더가 발급한 클라이언트 식별자
/// - `allowed_domain`: 접근이 허용되는 이메일 접미사 (항상 `@`로 시작)
/// - `environment`: 실행 환경 이름 (진단용)
#[derive(Debug, Clone)]
pub struct AuthConfig {
    client_id: String,
    allowed_domain: String,
    environment: String,
}

/// 디버그용 설정 스냅샷
///
/// 클라이언트 ID의 원본 값 대신 설정 여부 플래그만 노출합니다.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigSnapshot {
    /// 클라이언트 ID 설정 여부 (원본 값은 절대 포함되지 않음)
    pub client_id: &'static str,
    /// 허용 도메인 접미사
    pub domain: String,
    /// 실행 환경 이름
    pub environment: String,
}

impl AuthConfig {
    /// 허용 도메인 접미사 기본값
    pub const DEFAULT_ALLOWED_DOMAIN: &'static str = "@example-corp.example";

    /// 환경 변수에서 설정을 읽어 생성합니다.
    ///
    /// 프로세스 시작 시 한 번만 호출해야 합니다.
    /// 읽는 환경 변수:
    ///
    /// | 변수 | 필수 | 기본값 |
    /// |------|------|--------|
    /// | `GOOGLE_CLIENT_ID` | 예 (validate 시점에 검사) | 없음 |
    /// | `GOOGLE_WORKSPACE_DOMAIN` | 아니오 | `@example-corp.example` |
    /// | `APP_ENV` | 아니오 | `development` |
    ///
    /// 값 누락 시에도 생성 자체는 실패하지 않으며,
    /// 사용 가능 여부는 [`AuthConfig::validate`]로 검사합니다.
    pub fn from_env() -> Self {
        let client_id = env::var("GOOGLE_CLIENT_ID").unwrap_or_default();
        let allowed_domain = clean_optional_string(env::var("GOOGLE_WORKSPACE_DOMAIN").ok())
            .unwrap_or_else(|| Self::DEFAULT_ALLOWED_DOMAIN.to_string());
        let environment = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        Self::new(client_id, allowed_domain, environment)
    }

    /// 명시적인 값으로 설정을 생성합니다.
    ///
    /// 도메인 접미사는 `@`로 시작하도록 정규화됩니다.
    /// 대소문자나 내부 공백은 변경하지 않습니다.
    pub fn new(
        client_id: impl Into<String>,
        allowed_domain: impl Into<String>,
        environment: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            allowed_domain: ensure_leading_at(&allowed_domain.into()),
            environment: environment.into(),
        }
    }

    /// 서브시스템 사용 가능 여부를 검사합니다.
    ///
    /// 필수 설정이 비어 있으면 설정 가이드가 담긴
    /// [`AuthError::Configuration`]을 반환합니다.
    /// SDK 로드 등 어떤 외부 활동보다 먼저 호출되어야 합니다.
    ///
    /// # Errors
    ///
    /// * `AuthError::Configuration` - `GOOGLE_CLIENT_ID` 또는 허용 도메인이 비어 있는 경우
    pub fn validate(&self) -> AuthResult<()> {
        if self.client_id.is_empty() {
            return Err(AuthError::Configuration(
                "GOOGLE_CLIENT_ID가 설정되지 않았습니다.".to_string(),
            ));
        }

        // ensure_leading_at이 빈 입력을 "@"로 만들기 때문에 길이 1 이하는 무효
        if self.allowed_domain.len() <= 1 {
            return Err(AuthError::Configuration(
                "GOOGLE_WORKSPACE_DOMAIN이 설정되지 않았습니다.".to_string(),
            ));
        }

        Ok(())
    }

    /// 클라이언트 식별자를 반환합니다.
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// 허용 도메인 접미사를 반환합니다 (항상 `@`로 시작).
    pub fn allowed_domain(&self) -> &str {
        &self.allowed_domain
    }

    /// 실행 환경 이름을 반환합니다.
    pub fn environment(&self) -> &str {
        &self.environment
    }

    /// 진단용 읽기 전용 스냅샷을 반환합니다.
    ///
    /// 클라이언트 ID는 설정 여부 플래그로만 표시됩니다.
    pub fn snapshot(&self) -> ConfigSnapshot {
        ConfigSnapshot {
            client_id: if self.client_id.is_empty() {
                "설정되지 않음"
            } else {
                "***설정됨***"
            },
            domain: self.allowed_domain.clone(),
            environment: self.environment.clone(),
        }
    }
}
