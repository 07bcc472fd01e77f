//! 인증 서브시스템 전역 에러 모듈
//!
//! `thiserror` 기반의 타입 안전한 에러 시스템을 제공합니다.
//! 모든 실패 경로는 구별 가능한 에러 종류로 표현되어
//! 호출자(UI 계층)가 구체적인 메시지를 렌더링할 수 있습니다.

pub mod errors;

pub use errors::*;
