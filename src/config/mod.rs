//! # Configuration Module
//!
//! 인증 서브시스템의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값을 프로세스 시작 시 **한 번만** 읽어
//! 불변 구조체로 보관하고, 조립 루트에서 참조로 전달합니다.
//!
//! ## 설계 원칙
//!
//! ### 1. 읽기 전용 (Read Once, Immutable)
//!
//! 설정은 시작 시 한 번 읽은 후 프로세스 수명 동안 변경되지 않습니다.
//! 호출마다 `env::var`를 조회하는 정적 접근자는 사용하지 않습니다.
//!
//! ### 2. 설정 오류 ≠ 런타임 오류
//!
//! 필수값 누락은 패닉이 아니라 사용자에게 안내되는
//! [`crate::errors::AuthError::Configuration`]으로 표현됩니다.
//!
//! ### 3. 민감 정보 보호
//!
//! 디버그 스냅샷은 클라이언트 ID의 원본 값을 절대 노출하지 않습니다.
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # Google Identity SDK 클라이언트 식별자 (필수)
//! export GOOGLE_CLIENT_ID="123456789-abcdef.apps.googleusercontent.com"
//!
//! # 허용 도메인 접미사 (선택, 기본값 @example-corp.example)
//! export GOOGLE_WORKSPACE_DOMAIN="@example-corp.example"
//!
//! # 실행 환경 (선택, 기본값 development)
//! export APP_ENV="production"
//! ```

pub mod auth_config;

pub use auth_config::*;
