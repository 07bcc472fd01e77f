//! 공통 유틸리티 함수 모듈
//!
//! 인증 서브시스템 전체에서 사용되는 문자열 처리 유틸리티를 제공합니다.
//!
//! # Modules
//!
//! - [`string_utils`] - 이메일/도메인 문자열 처리 유틸리티

pub mod string_utils;
