use serde::{Deserialize, Serialize};

/// Confirmation payload returned by delete, form update and upload.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiResponse {
    pub code: u16,
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
}

impl ApiResponse {
    pub fn new(code: u16, message: impl Into<String>) -> Self {
        let kind = match code {
            200 => "ok",
            _ => "error",
        };
        Self { code, kind: kind.to_string(), message: message.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_follows_code() {
        assert_eq!(ApiResponse::new(200, "7").kind, "ok");
        assert_eq!(ApiResponse::new(404, "not found").kind, "error");
    }

    #[test]
    fn serializes_kind_as_type() {
        let json = serde_json::to_value(ApiResponse::new(405, "no data")).unwrap();
        assert_eq!(json["type"], "error");
        assert_eq!(json["code"], 405);
        assert_eq!(json["message"], "no data");
    }
}
