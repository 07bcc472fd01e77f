//! # 아이덴티티 SDK 능력 인터페이스
//!
//! Google Identity SDK에 대한 좁은 능력 인터페이스를 정의합니다.
//! 부트스트래퍼는 이 trait을 통해서만 SDK와 상호작용하며,
//! 전역 객체가 어떻게 로드/구성되는지는 어댑터 구현의 책임입니다.
//!
//! ## 계약
//!
//! - `load`는 스크립트 주입을 시작하고 완료까지 대기합니다.
//!   타임아웃 처리는 호출자([`crate::services::auth::SignInBootstrapper`])의 몫입니다.
//! - `configure`는 크리덴셜 콜백을 정확히 한 번 등록합니다.
//!   콜백은 원시 토큰 문자열을 재전달할 뿐 검증을 수행하지 않습니다.
//! - `render_button`의 실패(마운트 포인트 없음 등)는 치명적이지 않습니다.

use async_trait::async_trait;

use crate::errors::AuthResult;

/// SDK 클라이언트 라이브러리 스크립트 URL
pub const SDK_SCRIPT_URL: &str = "https://accounts.google.com/gsi/client";

/// SDK가 크리덴셜을 전달할 때 호출되는 콜백
///
/// 인자는 원시 ID 토큰 문자열입니다.
pub type CredentialCallback = Box<dyn Fn(String) + Send + Sync>;

/// 로그인 버튼 테마
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonTheme {
    /// 외곽선 스타일
    Outline,
    /// 파란색 채움 (기본값)
    #[default]
    FilledBlue,
    /// 검은색 채움
    FilledBlack,
}

impl ButtonTheme {
    /// SDK에 전달하는 테마 문자열을 반환합니다.
    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonTheme::Outline => "outline",
            ButtonTheme::FilledBlue => "filled_blue",
            ButtonTheme::FilledBlack => "filled_black",
        }
    }
}

/// 로그인 버튼 렌더링 옵션
///
/// 테마를 제외한 로케일과 크기 옵션은 고정값입니다.
#[derive(Debug, Clone)]
pub struct ButtonOptions {
    /// 버튼 테마
    pub theme: ButtonTheme,
    /// 버튼 크기 (고정: large)
    pub size: &'static str,
    /// 버튼 문구 종류 (고정: signin_with)
    pub text: &'static str,
    /// 버튼 로케일 (고정: pt-BR)
    pub locale: &'static str,
    /// 로고 정렬 (고정: left)
    pub logo_alignment: &'static str,
    /// 버튼 너비 (고정: 100%)
    pub width: &'static str,
}

impl ButtonOptions {
    /// 지정한 테마와 고정 로케일/크기 옵션으로 생성합니다.
    pub fn with_theme(theme: ButtonTheme) -> Self {
        Self {
            theme,
            size: "large",
            text: "signin_with",
            locale: "pt-BR",
            logo_alignment: "left",
            width: "100%",
        }
    }
}

/// 외부 아이덴티티 SDK에 대한 좁은 능력 인터페이스
///
/// 전역 SDK 객체를 다루는 유일한 추상화 지점입니다.
/// 구현체는 브라우저 환경의 실제 어댑터이거나 테스트용 모의 객체입니다.
#[async_trait]
pub trait IdentitySdk: Send + Sync {
    /// SDK 전역 객체가 이미 사용 가능한지 확인합니다.
    fn is_loaded(&self) -> bool;

    /// SDK 스크립트를 주입하고 로드 완료까지 대기합니다.
    ///
    /// 브라우저 어댑터 구현은 [`SDK_SCRIPT_URL`]을 가리키는
    /// 스크립트 태그를 주입해야 합니다.
    /// 로드 후에도 전역 객체가 채워지지 않을 수 있으므로
    /// 호출자는 완료 후 [`IdentitySdk::is_loaded`]를 재확인해야 합니다.
    ///
    /// # Errors
    ///
    /// * `AuthError::SdkLoad` - 스크립트 로드 실패
    async fn load(&self) -> AuthResult<()>;

    /// 클라이언트 식별자와 크리덴셜 콜백으로 SDK를 구성합니다.
    ///
    /// 구성 시점에 단일 콜백이 등록되며, 콜백은 수신한 원시 토큰을
    /// 재전달하는 역할만 합니다 (검증 없음).
    ///
    /// # Errors
    ///
    /// * `AuthError::SdkLoad` - SDK 전역 객체가 사용 불가능한 경우
    fn configure(&self, client_id: &str, on_credential: CredentialCallback) -> AuthResult<()>;

    /// 지정한 마운트 포인트에 로그인 버튼을 렌더링합니다.
    ///
    /// # Errors
    ///
    /// * `AuthError::SdkLoad` - 마운트 포인트가 없거나 렌더링 실패.
    ///   호출자는 이 실패를 치명적이지 않은 것으로 취급해야 합니다.
    fn render_button(&self, element_id: &str, options: &ButtonOptions) -> AuthResult<()>;

    /// 자동 계정 선택을 비활성화합니다 (로그아웃 시 자동 재로그인 방지).
    fn disable_auto_select(&self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_theme_strings() {
        assert_eq!(ButtonTheme::Outline.as_str(), "outline");
        assert_eq!(ButtonTheme::FilledBlue.as_str(), "filled_blue");
        assert_eq!(ButtonTheme::FilledBlack.as_str(), "filled_black");
    }

    #[test]
    fn test_default_theme_is_filled_blue() {
        assert_eq!(ButtonTheme::default(), ButtonTheme::FilledBlue);
    }

    #[test]
    fn test_button_options_fixed_values() {
        let options = ButtonOptions::with_theme(ButtonTheme::Outline);
        assert_eq!(options.theme, ButtonTheme::Outline);
        assert_eq!(options.size, "large");
        assert_eq!(options.text, "signin_with");
        assert_eq!(options.locale, "pt-BR");
        assert_eq!(options.logo_alignment, "left");
        assert_eq!(options.width, "100%");
    }
}
