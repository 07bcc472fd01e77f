//! 사용자 레코드 모델
//!
//! 검증 성공 시 생성되는 정규화된 사용자 레코드입니다.
//! 생성 이후의 생명주기(로그아웃 시 해제 등)는 호출자가 소유합니다.

use serde::Serialize;

/// 검증된 사용자 레코드
///
/// 토큰 검증에 성공했을 때 반환되는 최종 산출물입니다.
/// 실패 시에는 부분적인 레코드가 절대 반환되지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRecord {
    /// 인증된 이메일 주소
    pub email: String,

    /// 표시 이름 (클레임에 없으면 이메일 로컬 파트)
    pub name: String,

    /// 프로필 사진 URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_omits_missing_picture() {
        let user = UserRecord {
            email: "ana@example-corp.example".to_string(),
            name: "Ana Lima".to_string(),
            picture: None,
        };

        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("picture"));
    }

    #[test]
    fn test_serialize_includes_picture_when_present() {
        let user = UserRecord {
            email: "ana@example-corp.example".to_string(),
            name: "Ana Lima".to_string(),
            picture: Some("https://photos.example/ana.jpg".to_string()),
        };

        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("https://photos.example/ana.jpg"));
    }
}
