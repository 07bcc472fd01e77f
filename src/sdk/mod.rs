//! 외부 아이덴티티 SDK 어댑터 모듈
//!
//! 브라우저 전역에 붙는 서드파티 SDK 의존성을
//! 좁은 능력 인터페이스 뒤로 격리합니다.
//! 전역 객체에 대한 가정은 이 모듈의 어댑터 구현에만 존재하며,
//! 테스트에서는 모의 구현으로 대체할 수 있습니다.

pub mod identity_sdk;

pub use identity_sdk::*;
