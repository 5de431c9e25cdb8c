//! Request body extraction
//!
//! Bodies are read as a loose JSON object so a bad field can be reported by
//! name instead of as a generic deserialization failure.

use axum::Json;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use serde_json::{Map, Value};

use crate::error::{CtfError, CtfResult};

/// JSON object body
#[derive(Debug, Clone)]
pub struct JsonBody(pub Map<String, Value>);

impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = CtfError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| CtfError::MalformedBody(rejection.body_text()))?;

        match value {
            Value::Object(map) => Ok(Self(map)),
            _ => Err(CtfError::MalformedBody("expected a JSON object".into())),
        }
    }
}

impl JsonBody {
    /// Absent and `null` both count as missing
    fn field(&self, name: &str) -> Option<&Value> {
        self.0.get(name).filter(|v| !v.is_null())
    }

    pub fn string(&self, name: &'static str) -> CtfResult<&str> {
        self.optional_string(name)?.ok_or(CtfError::InvalidField {
            field: name,
            expected: "a string",
        })
    }

    pub fn optional_string(&self, name: &'static str) -> CtfResult<Option<&str>> {
        match self.field(name) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.as_str())),
            Some(_) => Err(CtfError::InvalidField {
                field: name,
                expected: "a string",
            }),
        }
    }

    /// Any JSON number; fractions truncate and out-of-range values saturate.
    /// Used for levels, which are clamped afterwards.
    pub fn number(&self, name: &'static str) -> CtfResult<i64> {
        self.optional_number(name)?.ok_or(CtfError::InvalidField {
            field: name,
            expected: "a number",
        })
    }

    pub fn optional_number(&self, name: &'static str) -> CtfResult<Option<i64>> {
        match self.field(name) {
            None => Ok(None),
            Some(Value::Number(n)) => Ok(n
                .as_i64()
                .or_else(|| n.as_u64().map(|_| i64::MAX))
                .or_else(|| n.as_f64().map(|f| f as i64))),
            Some(_) => Err(CtfError::InvalidField {
                field: name,
                expected: "a number",
            }),
        }
    }

    /// A puzzle id. Anything that is a number but not a whole `u32`
    /// (fractions, negatives, huge values) becomes 0, which no puzzle uses,
    /// so validation fails closed.
    pub fn puzzle_id(&self, name: &'static str) -> CtfResult<u32> {
        match self.field(name) {
            Some(Value::Number(n)) => Ok(n
                .as_u64()
                .and_then(|id| u32::try_from(id).ok())
                .unwrap_or(0)),
            _ => Err(CtfError::InvalidField {
                field: name,
                expected: "a number",
            }),
        }
    }
}

/// `{id}` path segment. Anything that is not a whole `u32` is a 404, not
/// a plain-text path rejection.
#[derive(Debug, Clone, Copy)]
pub struct PuzzlePath(pub u32);

impl<S> FromRequestParts<S> for PuzzlePath
where
    S: Send + Sync,
{
    type Rejection = CtfError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| CtfError::Internal(rejection.body_text()))?;

        raw.parse()
            .map(Self)
            .map_err(|_| CtfError::InvalidPuzzlePath(raw))
    }
}
