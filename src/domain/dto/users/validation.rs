//! 사용자 요청 본문 검증
//!
//! 모든 필드 검사는 서로 독립적으로 수행되며, 발견된 위반 사항은 모두
//! 누적되어 반환됩니다. 메시지는 `"; "`로 이어 붙여 클라이언트에게 전달합니다.
//!
//! | 검사 | 메시지 |
//! |------|--------|
//! | 필수 필드 누락 (생성 시) | `Missing required field: <field>` |
//! | `name` 타입 | `Field 'name' must be a string.` |
//! | `email` 타입 | `Field 'email' must be a string.` |
//! | `email` 형식 | `Field 'email' must be a valid email address.` |
//! | `age` 정수 변환 | `Field 'age' must be an integer.` |
//! | `age` 범위 | `Field 'age' must be a positive integer.` |

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

use super::request::{FieldValue, UserPayload};

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email pattern must compile"));

const REQUIRED_FIELDS: [&str; 3] = ["name", "email", "age"];

/// 검증 모드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    /// 모든 필드 필수 (생성)
    RequireAll,
    /// 전달된 필드만 검사 (부분 수정)
    Partial,
}

/// 요청 본문을 검증하고 위반 사항 목록을 반환합니다.
///
/// 빈 목록은 유효한 입력을 뜻합니다. 순수 함수이며 부수 효과가 없습니다.
pub fn validate_user_data(payload: &UserPayload, mode: ValidationMode) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if mode == ValidationMode::RequireAll {
        for field in REQUIRED_FIELDS {
            if field_of(payload, field).is_none() {
                errors.push(violation(
                    "required",
                    field,
                    format!("Missing required field: {}", field),
                ));
            }
        }
    }

    if let Some(name) = &payload.name {
        if name.as_text().is_none() {
            errors.push(violation("type", "name", "Field 'name' must be a string."));
        }
    }

    if let Some(email) = &payload.email {
        match email.as_text() {
            None => errors.push(violation("type", "email", "Field 'email' must be a string.")),
            Some(address) if !is_valid_email(address) => errors.push(violation(
                "email",
                "email",
                "Field 'email' must be a valid email address.",
            )),
            Some(_) => {}
        }
    }

    if let Some(age) = &payload.age {
        match age.coerce_integer() {
            None => errors.push(violation("type", "age", "Field 'age' must be an integer.")),
            Some(value) if value < 0 => errors.push(violation(
                "range",
                "age",
                "Field 'age' must be a positive integer.",
            )),
            Some(_) => {}
        }
    }

    errors
}

/// `<non-whitespace>@<non-whitespace>.<non-whitespace>` 형식인지 확인합니다.
pub fn is_valid_email(address: &str) -> bool {
    EMAIL_PATTERN.is_match(address)
}

/// 위반 사항의 메시지를 `"; "`로 연결합니다.
pub fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|error| match &error.message {
            Some(message) => message.to_string(),
            None => error.code.to_string(),
        })
        .collect::<Vec<_>>()
        .join("; ")
}

fn field_of<'a>(payload: &'a UserPayload, field: &str) -> Option<&'a FieldValue> {
    match field {
        "name" => payload.name.as_ref(),
        "email" => payload.email.as_ref(),
        "age" => payload.age.as_ref(),
        _ => None,
    }
}

fn violation(
    code: &'static str,
    field: &'static str,
    message: impl Into<Cow<'static, str>>,
) -> ValidationError {
    let mut error = ValidationError::new(code).with_message(message.into());
    error.add_param(Cow::Borrowed("field"), &field);
    error
}
