//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 조립 루트에서 명시적으로 생성되어 주입되는 서비스들을 제공합니다.
//! 전역 싱글톤 접근자는 사용하지 않으며, 의존성은 생성자 인자로 전달됩니다.
//!
//! # Features
//!
//! - Google Identity SDK 부트스트랩 및 크리덴셜 릴레이
//! - ID 토큰 디코딩 및 도메인 허용 목록 검증
//! - 로그인 시도 상태 머신
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::{SignInBootstrapper, TokenValidator};
//!
//! let (bootstrapper, credentials) = SignInBootstrapper::new(config.clone(), sdk);
//! let validator = TokenValidator::new(config);
//! ```

pub mod auth;
