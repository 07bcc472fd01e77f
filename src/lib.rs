//! 헬프데스크 인증 서브시스템
//!
//! 헬프데스크 대시보드를 위한 Google Workspace 로그인 서브시스템입니다.
//! 외부 Google Identity SDK의 부트스트랩, 크리덴셜 수신,
//! 그리고 ID 토큰의 회사 도메인 허용 목록 검증을 담당합니다.
//!
//! # Features
//!
//! - **SDK 부트스트랩**: 외부 스크립트를 페이지 세션당 정확히 한 번 로드 (10초 타임아웃)
//! - **크리덴셜 릴레이**: SDK 콜백 → 단일 소비자 채널로 원샷 전달
//! - **토큰 검증**: Base64URL 페이로드 디코딩 + 회사 도메인 허용 목록 검사
//! - **명시적 DI**: 전역 싱글톤 없이 조립 루트에서 서비스 인스턴스를 직접 구성
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────┐
//! │   UI (로그인 화면)   │
//! └────────────────────┘
//!           │ initialize / render_button
//!           ▼
//! ┌────────────────────┐    크리덴셜 채널     ┌──────────────────┐
//! │ SignInBootstrapper │ ─────────────────► │    LoginFlow     │
//! └────────────────────┘                    └──────────────────┘
//!           │                                        │
//!           ▼                                        ▼
//! ┌────────────────────┐                    ┌──────────────────┐
//! │ IdentitySdk 어댑터  │                    │  TokenValidator  │
//! └────────────────────┘                    └──────────────────┘
//! ```
//!
//! # Security
//!
//! 이 서브시스템은 토큰 서명을 암호학적으로 검증하지 **않습니다**.
//! 페이로드 디코딩과 비즈니스 규칙(도메인 허용 목록, 이메일 인증 플래그)만
//! 적용하므로, 권한이 필요한 동작을 허용하기 전에 반드시 신뢰할 수 있는
//! 백엔드에서 토큰을 재검증해야 합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use helpdesk_auth_service::config::AuthConfig;
//! use helpdesk_auth_service::sdk::ButtonTheme;
//! use helpdesk_auth_service::services::auth::{LoginFlow, SignInBootstrapper, TokenValidator};
//!
//! // 조립 루트에서 명시적으로 구성 (전역 조회 없음)
//! let config = Arc::new(AuthConfig::from_env());
//! config.validate()?;
//!
//! let (bootstrapper, credentials) = SignInBootstrapper::new(config.clone(), sdk);
//! bootstrapper.initialize().await?;
//! bootstrapper.render_button("google-signin", ButtonTheme::FilledBlue);
//!
//! let mut flow = LoginFlow::new(TokenValidator::new(config), credentials);
//! let user = flow.next_attempt().await?;
//! ```

pub mod config;
pub mod domain;
pub mod errors;
pub mod sdk;
pub mod services;
pub mod utils;
