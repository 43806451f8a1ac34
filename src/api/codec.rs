//! JSON encoding and decoding for the HTTP surface
//!
//! Responses are JSON indented with one tab per level. Errors are written
//! as a plain message followed by a newline.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::{Map, Value};

use crate::types::Album;
use crate::{Error, Result};

/// Body returned when an album lookup misses
pub const NOT_FOUND_BODY: &str = r#"{"message": "album not found"}"#;

const JSON_CONTENT_TYPE: &str = "application/json";
const TEXT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

const ALBUM_FIELDS: [&str; 4] = ["id", "title", "artist", "price"];

/// Serialize `value` as tab-indented JSON
pub fn to_indented_json<T>(value: &T) -> Result<Vec<u8>>
where
    T: Serialize + ?Sized,
{
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"\t"));
    value.serialize(&mut serializer)?;
    Ok(buf)
}

/// Decode the first JSON value in `body` as an album
///
/// Anything after the first value is ignored. A JSON `null`, as the whole
/// body or as a member value, leaves the field at its zero value. Member
/// names match case-insensitively.
pub fn decode_album(body: &[u8]) -> Result<Album> {
    let mut values = serde_json::Deserializer::from_slice(body).into_iter::<Value>();

    let value = match values.next() {
        Some(Ok(value)) => value,
        Some(Err(err)) => return Err(Error::decode(err.to_string())),
        None => return Err(Error::decode("EOF")),
    };

    match value {
        Value::Null => Ok(Album::default()),
        Value::Object(fields) => Album::deserialize(Value::Object(normalize_fields(&fields)))
            .map_err(|e| Error::decode(e.to_string())),
        other => Err(Error::decode(format!(
            "invalid type: {}, expected an album object",
            json_type_name(&other)
        ))),
    }
}

/// Map member names onto album field names
///
/// An exact-case member wins over case-folded ones. Unknown and `null`
/// members are dropped.
fn normalize_fields(fields: &Map<String, Value>) -> Map<String, Value> {
    let mut normalized = Map::new();

    for name in ALBUM_FIELDS {
        let value = fields.get(name).or_else(|| {
            fields
                .iter()
                .filter(|(key, _)| key.eq_ignore_ascii_case(name))
                .map(|(_, value)| value)
                .last()
        });

        if let Some(value) = value.filter(|value| !value.is_null()) {
            normalized.insert(name.to_string(), value.clone());
        }
    }

    normalized
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Response wrapper that renders its payload as tab-indented JSON
#[derive(Debug, Clone)]
pub struct IndentedJson<T>(pub T);

impl<T: Serialize> IntoResponse for IndentedJson<T> {
    fn into_response(self) -> Response {
        match to_indented_json(&self.0) {
            Ok(body) => ([(header::CONTENT_TYPE, JSON_CONTENT_TYPE)], body).into_response(),
            Err(err) => err.into_response(),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, content_type, message) = match &self {
            Error::AlbumNotFound(_) => (
                StatusCode::NOT_FOUND,
                JSON_CONTENT_TYPE,
                NOT_FOUND_BODY.to_string(),
            ),
            Error::Decode(_) | Error::Encode(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                TEXT_CONTENT_TYPE,
                self.to_string(),
            ),
        };

        (
            status,
            [(header::CONTENT_TYPE, content_type)],
            format!("{}\n", message),
        )
            .into_response()
    }
}
