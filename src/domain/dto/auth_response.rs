//! 인증 응답 DTO 모듈
//!
//! 토큰 검증 결과를 UI 계층이 소비하는 형태로 변환합니다.
//! 성공/실패 중 정확히 하나만 채워지며, 실패 시에는
//! 에러 종류 식별자와 사람이 읽을 수 있는 메시지를 함께 전달합니다.

use serde::Serialize;

use crate::domain::models::UserRecord;
use crate::errors::AuthResult;

/// 토큰 검증 결과 응답
///
/// 검증 성공 시 `user`가, 실패 시 `error`(종류 식별자)와
/// `message`(사용자 표시용)가 채워집니다.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    /// 검증 성공 여부
    pub success: bool,

    /// 검증된 사용자 레코드 (성공 시에만)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserRecord>,

    /// 에러 종류 식별자 (실패 시에만)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// 사용자에게 표시할 메시지 (실패 시에만)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<AuthResult<UserRecord>> for AuthResponse {
    fn from(outcome: AuthResult<UserRecord>) -> Self {
        match outcome {
            Ok(user) => Self {
                success: true,
                user: Some(user),
                error: None,
                message: None,
            },
            Err(err) => Self {
                success: false,
                user: None,
                error: Some(err.kind().to_string()),
                message: Some(err.user_message()),
            },
        }
    }
}
