//! 로그인 시도 상태 머신
//!
//! 한 번의 로그인 시도를 `Idle → AwaitingCredential → Decoding →
//! {Allowed | Rejected}` 상태로 관리합니다.
//! `Allowed`는 사용자 레코드를, `Rejected`는 에러 사유를 호출자에게 전달하는
//! 종료 상태이며, 자동 재시도는 없습니다.

use crate::domain::models::UserRecord;
use crate::errors::{AuthError, AuthResult};
use crate::services::auth::{CredentialReceiver, TokenValidator};

/// 로그인 시도 상태
///
/// 새 시도는 항상 `Idle`에서 시작합니다.
/// 종료 상태에서 다시 시작하려면 사용자가 로그인 버튼을 다시 눌러야 하며,
/// 이때 [`LoginFlow::reset`]으로 `Idle`로 되돌립니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginAttemptState {
    /// 시도 전 초기 상태
    Idle,
    /// SDK 콜백의 크리덴셜 수신 대기 중
    AwaitingCredential,
    /// 수신한 토큰 디코딩/검증 중
    Decoding,
    /// 종료 상태: 검증 성공, 사용자 레코드 전달됨
    Allowed,
    /// 종료 상태: 검증 실패, 에러 사유 전달됨
    Rejected,
}

/// 로그인 플로우 코디네이터
///
/// 부트스트래퍼가 릴레이한 크리덴셜의 유일한 소비자입니다.
/// 크리덴셜을 하나 받아 검증기에 넘기고 종료 상태로 전이합니다.
pub struct LoginFlow {
    validator: TokenValidator,
    credentials: CredentialReceiver,
    state: LoginAttemptState,
}

impl LoginFlow {
    /// 검증기와 크리덴셜 수신단으로 플로우를 생성합니다.
    pub fn new(validator: TokenValidator, credentials: CredentialReceiver) -> Self {
        Self {
            validator,
            credentials,
            state: LoginAttemptState::Idle,
        }
    }

    /// 현재 시도 상태를 반환합니다.
    pub fn state(&self) -> LoginAttemptState {
        self.state
    }

    /// 다음 크리덴셜을 기다렸다가 검증하고 종료 상태로 전이합니다.
    ///
    /// # Returns
    ///
    /// * `Ok(UserRecord)` - 검증 성공 (`Allowed`)
    ///
    /// # Errors
    ///
    /// * 검증 실패 시 해당 [`AuthError`] 변형 (`Rejected`)
    /// * `AuthError::SdkLoad` - 크리덴셜 채널이 닫혀 로그인 수단이 사라진 경우
    pub async fn next_attempt(&mut self) -> AuthResult<UserRecord> {
        self.state = LoginAttemptState::AwaitingCredential;

        let Some(credential) = self.credentials.recv().await else {
            self.state = LoginAttemptState::Rejected;
            return Err(AuthError::SdkLoad(
                "크리덴셜 채널이 닫혔습니다".to_string(),
            ));
        };

        self.state = LoginAttemptState::Decoding;
        match self.validator.validate(&credential) {
            Ok(user) => {
                self.state = LoginAttemptState::Allowed;
                log::info!("로그인 허용: {}", user.email);
                Ok(user)
            }
            Err(err) => {
                self.state = LoginAttemptState::Rejected;
                log::warn!("로그인 거부 ({}): {}", err.kind(), err);
                Err(err)
            }
        }
    }

    /// 새 시도를 위해 상태를 `Idle`로 되돌립니다.
    pub fn reset(&mut self) {
        self.state = LoginAttemptState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use base64::Engine;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use tokio::sync::mpsc;

    use super::*;
    use crate::config::AuthConfig;

    fn make_token(payload: &str) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"RS256","typ":"JWT"}"#);
        let body = URL_SAFE_NO_PAD.encode(payload.as_bytes());
        format!("{}.{}.signature", header, body)
    }

    fn test_flow() -> (mpsc::Sender<String>, LoginFlow) {
        let config = Arc::new(AuthConfig::new(
            "test-client-id",
            "@example-corp.example",
            "test",
        ));
        let (tx, rx) = mpsc::channel(1);
        (tx, LoginFlow::new(TokenValidator::new(config), rx))
    }

    #[tokio::test]
    async fn test_flow_starts_idle() {
        let (_tx, flow) = test_flow();
        assert_eq!(flow.state(), LoginAttemptState::Idle);
    }

    #[tokio::test]
    async fn test_valid_credential_reaches_allowed() {
        let (tx, mut flow) = test_flow();
        let token = make_token(
            r#"{"email":"ana@example-corp.example","email_verified":true,"name":"Ana Lima"}"#,
        );
        tx.send(token).await.unwrap();

        let user = flow.next_attempt().await.unwrap();
        assert_eq!(flow.state(), LoginAttemptState::Allowed);
        assert_eq!(user.email, "ana@example-corp.example");
        assert_eq!(user.name, "Ana Lima");
    }

    #[tokio::test]
    async fn test_invalid_credential_reaches_rejected() {
        let (tx, mut flow) = test_flow();
        let token = make_token(r#"{"email":"bob@other.example","email_verified":true}"#);
        tx.send(token).await.unwrap();

        let result = flow.next_attempt().await;
        assert_eq!(flow.state(), LoginAttemptState::Rejected);
        assert!(matches!(result, Err(AuthError::DomainNotAllowed { .. })));
    }

    #[tokio::test]
    async fn test_closed_channel_is_rejected() {
        let (tx, mut flow) = test_flow();
        drop(tx);

        let result = flow.next_attempt().await;
        assert_eq!(flow.state(), LoginAttemptState::Rejected);
        assert!(matches!(result, Err(AuthError::SdkLoad(_))));
    }

    #[tokio::test]
    async fn test_reset_returns_to_idle_for_new_attempt() {
        let (tx, mut flow) = test_flow();
        let token = make_token(r#"{"email":"bob@other.example","email_verified":true}"#);
        tx.send(token).await.unwrap();
        let _ = flow.next_attempt().await;
        assert_eq!(flow.state(), LoginAttemptState::Rejected);

        // 자동 재시도 없음: 명시적으로 리셋해야 새 시도 시작
        flow.reset();
        assert_eq!(flow.state(), LoginAttemptState::Idle);

        let token = make_token(
            r#"{"email":"ana@example-corp.example","email_verified":true}"#,
        );
        tx.send(token).await.unwrap();
        let user = flow.next_attempt().await.unwrap();
        assert_eq!(flow.state(), LoginAttemptState::Allowed);
        assert_eq!(user.name, "ana");
    }
}
