//! # Domain Layer Module
//!
//! 인증 서브시스템의 데이터 모델을 담당하는 모듈입니다.
//!
//! ## 모듈 구성
//!
//! - [`models`] - 토큰 클레임, 사용자 레코드 등 핵심 도메인 모델
//! - [`dto`] - UI 경계로 전달되는 데이터 전송 객체
//!
//! ## 생명주기
//!
//! - `TokenClaims`: 로그인 시도마다 생성되고 즉시 폐기됩니다.
//! - `UserRecord`: 검증 성공의 산출물로, 이후 소유권은 호출자에게 넘어갑니다.

pub mod dto;
pub mod models;

pub use dto::*;
pub use models::*;
