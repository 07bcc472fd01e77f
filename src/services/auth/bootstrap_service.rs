//! 로그인 부트스트랩 서비스
//!
//! 외부 아이덴티티 SDK를 페이지 세션당 정확히 한 번 로드/구성하고,
//! 로그인 버튼 렌더링과 크리덴셜 릴레이를 담당합니다.
//!
//! ## 동시성 모델
//!
//! - `initialize`는 대기 가능하며 정확히 한 번만 확정됩니다.
//!   동시/중복 호출은 `tokio::sync::OnceCell`로 중복 제거되어
//!   스크립트가 이중 주입되지 않습니다.
//! - 10초 로드 타임아웃이 지나면 대기 중이던 로드 future가 폐기되므로
//!   뒤늦은 로드 완료는 아무 효과도 없습니다 (이중 확정 없음).
//! - 크리덴셜 콜백은 수신한 원시 토큰을 용량 1의 단일 소비자 채널로
//!   재전달할 뿐, 검증은 수행하지 않습니다.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{OnceCell, mpsc};
use tokio::time;

use crate::config::AuthConfig;
use crate::errors::{AuthError, AuthResult};
use crate::sdk::{ButtonOptions, ButtonTheme, IdentitySdk};

/// SDK 스크립트 로드 최대 대기 시간
pub const SDK_LOAD_TIMEOUT: Duration = Duration::from_secs(10);

/// 원시 크리덴셜을 수신하는 단일 소비자 채널의 수신단
///
/// 활성 로그인 화면당 정확히 하나의 소비자가 존재해야 합니다.
pub type CredentialReceiver = mpsc::Receiver<String>;

/// 로그인 부트스트랩 서비스
///
/// "크리덴셜 수신"과 "입장 허용 결정"을 분리하기 위해
/// 이 서비스는 검증을 전혀 수행하지 않습니다.
/// 검증은 [`crate::services::auth::TokenValidator`]의 책임입니다.
pub struct SignInBootstrapper<S: IdentitySdk> {
    /// 프로세스 전역 설정 (읽기 전용)
    config: Arc<AuthConfig>,
    /// SDK 능력 인터페이스 어댑터
    sdk: Arc<S>,
    /// 1회 초기화 보장 및 진행 중 요청 중복 제거
    init: OnceCell<()>,
    /// 크리덴셜 릴레이 송신단 (용량 1)
    credential_tx: mpsc::Sender<String>,
}

impl<S: IdentitySdk> SignInBootstrapper<S> {
    /// 부트스트래퍼와 크리덴셜 수신단을 생성합니다.
    ///
    /// 반환된 수신단은 로그인 플로우([`crate::services::auth::LoginFlow`])에
    /// 넘겨 정확히 하나의 소비자만 크리덴셜을 받도록 합니다.
    pub fn new(config: Arc<AuthConfig>, sdk: Arc<S>) -> (Self, CredentialReceiver) {
        let (credential_tx, credential_rx) = mpsc::channel(1);
        let bootstrapper = Self {
            config,
            sdk,
            init: OnceCell::new(),
            credential_tx,
        };
        (bootstrapper, credential_rx)
    }

    /// SDK를 초기화합니다 (멱등, 중복 호출 안전).
    ///
    /// 처리 순서:
    ///
    /// 1. 어떤 로드 활동보다 먼저 설정을 검사합니다.
    /// 2. SDK 전역 객체가 이미 있으면 바로 구성합니다 (스크립트 재주입 없음).
    /// 3. 없으면 스크립트 로드를 시작하고 10초까지 대기합니다.
    ///    타임아웃 시 로드 future는 폐기되므로 뒤늦은 완료는 무시됩니다.
    /// 4. 로드 후에도 전역 객체가 없으면 실패로 처리합니다.
    /// 5. 구성 시점에 크리덴셜 콜백을 단 한 번 등록합니다.
    ///
    /// 초기화 실패 시 셀은 비어 있는 상태로 남으므로,
    /// 사용자가 로그인을 다시 시도하면 처음부터 재시도됩니다.
    ///
    /// # Errors
    ///
    /// * `AuthError::Configuration` - 필수 설정 누락
    /// * `AuthError::SdkLoad` - 스크립트 로드 실패, 전역 객체 누락, 타임아웃
    pub async fn initialize(&self) -> AuthResult<()> {
        self.config.validate()?;

        self.init
            .get_or_try_init(|| async {
                if self.sdk.is_loaded() {
                    return self.configure_sdk();
                }

                match time::timeout(SDK_LOAD_TIMEOUT, self.sdk.load()).await {
                    Ok(Ok(())) => {}
                    Ok(Err(err)) => return Err(err),
                    Err(_) => {
                        return Err(AuthError::SdkLoad(format!(
                            "SDK 로드가 {}초 안에 완료되지 않았습니다",
                            SDK_LOAD_TIMEOUT.as_secs()
                        )));
                    }
                }

                if !self.sdk.is_loaded() {
                    return Err(AuthError::SdkLoad(
                        "스크립트는 로드되었지만 SDK 전역 객체가 없습니다".to_string(),
                    ));
                }

                self.configure_sdk()
            })
            .await
            .map(|_| ())
    }

    /// 초기화 완료 여부를 반환합니다.
    pub fn is_initialized(&self) -> bool {
        self.init.initialized()
    }

    /// 지정한 마운트 포인트에 로그인 버튼을 렌더링합니다 (최선 노력).
    ///
    /// 마운트 포인트가 없거나 SDK가 로드되지 않은 경우
    /// 에러 로그만 남기고 반환합니다. 전체 플로우에 치명적이지 않습니다.
    ///
    /// # Arguments
    ///
    /// * `element_id` - 버튼을 렌더링할 DOM 요소 식별자
    /// * `theme` - 버튼 테마
    pub fn render_button(&self, element_id: &str, theme: ButtonTheme) {
        if !self.sdk.is_loaded() {
            log::error!("SDK가 로드되지 않아 로그인 버튼을 렌더링할 수 없습니다");
            return;
        }

        let options = ButtonOptions::with_theme(theme);
        if let Err(err) = self.sdk.render_button(element_id, &options) {
            log::error!("로그인 버튼 렌더링 실패 ({}): {}", element_id, err);
        }
    }

    /// 로그아웃 처리: 자동 계정 선택을 비활성화합니다.
    ///
    /// 자동 재로그인을 방지합니다. 인증 세션 상태 자체는
    /// UI 계층이 소유하므로 여기서 건드리지 않습니다.
    pub fn sign_out(&self) {
        self.sdk.disable_auto_select();
        log::info!("로그아웃: 자동 계정 선택을 비활성화했습니다");
    }

    /// 크리덴셜 콜백을 등록하며 SDK를 구성합니다.
    ///
    /// 콜백은 원시 토큰을 채널로 재전달하는 역할만 합니다.
    /// 소비자가 없거나 이전 크리덴셜이 아직 소비되지 않았으면
    /// 경고 로그를 남기고 버립니다.
    fn configure_sdk(&self) -> AuthResult<()> {
        let tx = self.credential_tx.clone();
        self.sdk.configure(
            self.config.client_id(),
            Box::new(move |credential| {
                if credential.is_empty() {
                    log::warn!("빈 크리덴셜 응답을 받아 무시합니다");
                    return;
                }
                if tx.try_send(credential).is_err() {
                    log::warn!("크리덴셜을 소비할 리스너가 없어 버립니다");
                }
            }),
        )
    }
}
