//! 헬프데스크 인증 진단 도구
//!
//! 인자로 받은 ID 토큰을 오프라인으로 검증하고 결과를 JSON으로 출력합니다.
//! 조립 루트에서 설정과 검증기를 명시적으로 구성하는 예시이기도 합니다.
//!
//! # Usage
//!
//! ```bash
//! GOOGLE_CLIENT_ID=... helpdesk_auth_service <ID_TOKEN>
//! ```

use std::env;
use std::process::ExitCode;
use std::sync::Arc;

use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use helpdesk_auth_service::config::AuthConfig;
use helpdesk_auth_service::domain::dto::AuthResponse;
use helpdesk_auth_service::services::auth::TokenValidator;

fn main() -> ExitCode {
    load_env_file();
    init_logging();

    info!("🔐 헬프데스크 인증 진단 도구 시작중...");

    // 설정은 프로세스 시작 시 한 번만 읽음
    let config = Arc::new(AuthConfig::from_env());
    if let Err(err) = config.validate() {
        error!("{}", err.user_message());
        return ExitCode::from(2);
    }

    let snapshot =
        serde_json::to_string_pretty(&config.snapshot()).expect("설정 스냅샷 직렬화 실패");
    info!("설정 스냅샷:\n{}", snapshot);

    let Some(token) = env::args().nth(1) else {
        error!("사용법: helpdesk_auth_service <ID_TOKEN>");
        return ExitCode::from(2);
    };

    // 검증기는 조립 루트에서 명시적으로 구성하여 주입
    let validator = TokenValidator::new(config);
    let response = AuthResponse::from(validator.validate(&token));

    let output = serde_json::to_string_pretty(&response).expect("검증 결과 직렬화 실패");
    println!("{}", output);

    if response.success {
        info!("✅ 토큰 검증 성공");
        ExitCode::SUCCESS
    } else {
        error!("❌ 토큰 검증 실패");
        ExitCode::FAILURE
    }
}

/// .env 파일을 로드합니다 (없으면 시스템 환경 변수만 사용).
fn load_env_file() {
    match dotenv() {
        Ok(path) => println!("📄 .env 파일 로드: {}", path.display()),
        Err(_) => println!("📄 .env 파일 없음 - 시스템 환경 변수 사용"),
    }
}

/// 로깅을 초기화합니다 (기본 레벨: info).
fn init_logging() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
}
