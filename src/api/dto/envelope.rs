//! Single-key response envelopes such as `{"course": {...}}`.

use axum::{
    Json,
    response::{IntoResponse, Response},
};
use serde::{Serialize, Serializer, ser::SerializeMap};

/// Wraps `data` under `key` in a one-entry JSON object.
#[derive(Debug)]
pub struct Envelope<T> {
    key: &'static str,
    data: T,
}

impl<T> Envelope<T> {
    pub fn new(key: &'static str, data: T) -> Self {
        Self { key, data }
    }
}

impl<T: Serialize> Serialize for Envelope<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.key, &self.data)?;
        map.end()
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

/// Body of a successful write.
#[derive(Debug, Serialize)]
pub struct WriteAck {
    pub ok: bool,
}

impl WriteAck {
    pub fn response() -> Envelope<WriteAck> {
        Envelope::new("response", WriteAck { ok: true })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_has_one_key() {
        let value = serde_json::to_value(Envelope::new("filters", vec![1, 2])).unwrap();
        assert_eq!(value, json!({ "filters": [1, 2] }));
    }

    #[test]
    fn test_write_ack() {
        let value = serde_json::to_value(WriteAck::response()).unwrap();
        assert_eq!(value, json!({ "response": { "ok": true } }));
    }
}
