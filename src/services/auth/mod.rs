//! 인증 서비스 모듈
//!
//! Google Workspace 로그인 플로우를 구성하는 세 서비스를 제공합니다.
//!
//! # Features
//!
//! - SDK 부트스트랩 (1회 로드, 10초 타임아웃, 중복 호출 방지)
//! - 크리덴셜 수신 → 단일 소비자 채널 릴레이
//! - 토큰 디코딩 및 비즈니스 규칙 검증
//! - 로그인 시도 상태 머신 (`Idle → AwaitingCredential → Decoding → {Allowed | Rejected}`)
//!
//! # Security
//!
//! 토큰 서명은 검증하지 않습니다. 백엔드 재검증과 함께 사용해야 합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::{LoginFlow, SignInBootstrapper, TokenValidator};
//!
//! let (bootstrapper, credentials) = SignInBootstrapper::new(config.clone(), sdk);
//! bootstrapper.initialize().await?;
//!
//! let mut flow = LoginFlow::new(TokenValidator::new(config), credentials);
//! let user = flow.next_attempt().await?;
//! ```

pub mod bootstrap_service;
pub mod login_flow;
pub mod validator_service;

pub use bootstrap_service::*;
pub use login_flow::*;
pub use validator_service::*;
