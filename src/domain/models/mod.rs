//! 핵심 도메인 모델 모듈
//!
//! 토큰 페이로드에서 디코딩되는 클레임과
//! 검증 성공 시 생성되는 사용자 레코드를 정의합니다.

pub mod claims;
pub mod user;

pub use claims::*;
pub use user::*;
