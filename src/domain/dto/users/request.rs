//! 사용자 생성/수정 요청 DTO
//!
//! 요청 본문은 필드별 선택값 구조체로 역직렬화됩니다.
//! 필드가 없으면 `None`, 필드가 있으면 JSON 값의 종류를 보존한
//! `Some(FieldValue)`가 되므로 "필드 없음"과 "필드는 있으나 타입이 틀림"을
//! 구분할 수 있습니다. `null` 역시 존재하는 값으로 취급됩니다.
//!
//! ```json
//! { "name": "Ann", "email": "ann@x.com", "age": "30" }
//! ```

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::domain::entities::users::UserChanges;
use crate::errors::{AppError, AppResult};

/// 요청 본문에 담긴 단일 필드 값
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Integer(i64),
    /// `i64` 범위를 넘는 양의 정수
    Unsigned(u64),
    Float(f64),
    Text(String),
    Other(Value),
}

impl FieldValue {
    /// 문자열 값이면 참조를 반환합니다.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            _ => None,
        }
    }

    /// 정수로 변환을 시도합니다.
    ///
    /// 문자열은 앞뒤 공백을 제거한 뒤 부호 있는 10진수로 해석하고,
    /// 유한한 실수는 0 방향으로 버림하며, 불리언은 0/1이 됩니다.
    /// `i64` 범위를 벗어나는 값은 변환하지 않습니다.
    pub fn coerce_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(value) => Some(*value),
            FieldValue::Unsigned(value) => i64::try_from(*value).ok(),
            FieldValue::Float(value) => float_to_i64(*value),
            FieldValue::Bool(value) => Some(i64::from(*value)),
            FieldValue::Text(text) => text.trim().parse::<i64>().ok(),
            _ => None,
        }
    }
}

// 2^63: i64::MAX as f64 로 반올림되는 값이므로 상한은 배타적으로 비교합니다.
const I64_UPPER_BOUND: f64 = 9_223_372_036_854_775_808.0;

fn float_to_i64(value: f64) -> Option<i64> {
    let truncated = value.trunc();
    if truncated.is_finite() && truncated >= i64::MIN as f64 && truncated < I64_UPPER_BOUND {
        Some(truncated as i64)
    } else {
        None
    }
}

fn present<'de, D>(deserializer: D) -> Result<Option<FieldValue>, D::Error>
where
    D: Deserializer<'de>,
{
    FieldValue::deserialize(deserializer).map(Some)
}

/// 사용자 생성/수정 요청 본문
///
/// 알 수 없는 필드는 무시합니다.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UserPayload {
    #[serde(default, deserialize_with = "present")]
    pub name: Option<FieldValue>,
    #[serde(default, deserialize_with = "present")]
    pub email: Option<FieldValue>,
    #[serde(default, deserialize_with = "present")]
    pub age: Option<FieldValue>,
}

impl UserPayload {
    /// 원시 요청 본문을 해석합니다.
    ///
    /// 본문이 비어 있거나 JSON 값이 비어 있는 경우(`null`, `{}`, `""`, `0`,
    /// `false`, `[]`)에는 `Ok(None)`을 반환하며, 본문 누락 메시지는
    /// 호출하는 쪽이 결정합니다.
    pub fn from_body(body: &[u8]) -> AppResult<Option<Self>> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }

        let value: Value = serde_json::from_slice(body)
            .map_err(|e| AppError::InvalidInput(format!("Failed to decode JSON object: {}", e)))?;

        if is_empty_value(&value) {
            return Ok(None);
        }

        if !value.is_object() {
            return Err(AppError::InvalidInput(
                "Request body must be a JSON object.".to_string(),
            ));
        }

        serde_json::from_value(value)
            .map(Some)
            .map_err(|e| AppError::InvalidInput(format!("Failed to decode JSON object: {}", e)))
    }

    /// 검증을 통과한 본문에서 변경 사항을 추출합니다.
    ///
    /// 타입이 맞지 않는 필드는 `None`이 되므로 반드시 검증 후에 호출해야 합니다.
    pub fn changes(&self) -> UserChanges {
        UserChanges {
            name: self.name.as_ref().and_then(FieldValue::as_text).map(str::to_string),
            email: self.email.as_ref().and_then(FieldValue::as_text).map(str::to_string),
            age: self.age.as_ref().and_then(FieldValue::coerce_integer),
        }
    }
}

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}
