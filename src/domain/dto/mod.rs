//! 데이터 전송 객체 모듈
//!
//! 검증 결과를 UI 경계로 전달하기 위한 응답 DTO를 정의합니다.

pub mod auth_response;

pub use auth_response::*;
