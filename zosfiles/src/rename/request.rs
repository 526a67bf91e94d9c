//! Pieces of a rename request: name checks, endpoint, body and headers.

use serde::Serialize;

use crate::constants;
use crate::error::{Result, ZosFilesError};
use crate::rest::{headers, Header};

/// Accepts any non-empty name. Whitespace is not trimmed.
pub(crate) fn require_name(name: Option<&str>) -> Result<&str> {
    match name {
        Some(name) if !name.is_empty() => Ok(name),
        _ => Err(ZosFilesError::MissingIdentifier),
    }
}

/// Joins path segments with `/`, collapsing the slash at each boundary.
/// Segments are not escaped.
pub fn join_path(segments: &[&str]) -> String {
    let mut path = String::new();
    for segment in segments {
        if path.is_empty() {
            path.push_str(segment);
            continue;
        }
        match (path.ends_with('/'), segment.starts_with('/')) {
            (true, true) => path.push_str(&segment[1..]),
            (false, false) => {
                path.push('/');
                path.push_str(segment);
            }
            _ => path.push_str(segment),
        }
    }
    path
}

/// `/zosmf/restfiles/ds/<target>`
pub fn data_set_endpoint(target: &str) -> String {
    join_path(&[constants::RESOURCE, constants::RES_DS_FILES, target])
}

/// `DATA.SET(MEMBER)`, parentheses taken literally.
pub fn member_target(data_set: &str, member: &str) -> String {
    format!("{}({})", data_set, member)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenamePayload<'a> {
    request: &'static str,
    #[serde(rename = "from-dataset")]
    from_dataset: FromDataSet<'a>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct FromDataSet<'a> {
    dsn: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    member: Option<&'a str>,
}

impl<'a> RenamePayload<'a> {
    pub fn data_set(dsn: &'a str) -> Self {
        Self {
            request: "rename",
            from_dataset: FromDataSet { dsn, member: None },
        }
    }

    pub fn member(dsn: &'a str, member: &'a str) -> Self {
        Self {
            request: "rename",
            from_dataset: FromDataSet {
                dsn,
                member: Some(member),
            },
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Content type first, then the body length in bytes.
pub fn request_headers(payload: &str) -> Vec<Header> {
    vec![
        Header::application_json(),
        Header::new(headers::CONTENT_LENGTH, payload.len().to_string()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_name() {
        assert_eq!(require_name(Some("USER.DATA")).unwrap(), "USER.DATA");
        assert_eq!(require_name(Some("   ")).unwrap(), "   ");
        assert!(matches!(require_name(Some("")), Err(ZosFilesError::MissingIdentifier)));
        assert!(matches!(require_name(None), Err(ZosFilesError::MissingIdentifier)));
    }

    #[test]
    fn test_join_path() {
        assert_eq!(join_path(&["/zosmf/restfiles", "/ds", "A.B"]), "/zosmf/restfiles/ds/A.B");
        assert_eq!(join_path(&["/root/", "/ds/", "A.B"]), "/root/ds/A.B");
        assert_eq!(join_path(&["/root", "ds", "A.B"]), "/root/ds/A.B");
    }

    #[test]
    fn test_endpoints() {
        assert_eq!(
            data_set_endpoint("USER.AFTER.SET"),
            "/zosmf/restfiles/ds/USER.AFTER.SET"
        );
        assert_eq!(
            data_set_endpoint(&member_target("USER.DATA.SET", "mem2")),
            "/zosmf/restfiles/ds/USER.DATA.SET(mem2)"
        );
    }

    #[test]
    fn test_no_escaping() {
        assert_eq!(
            data_set_endpoint(&member_target("A(B", "C D%")),
            "/zosmf/restfiles/ds/A(B(C D%)"
        );
    }

    #[test]
    fn test_payload_json() {
        let json = RenamePayload::data_set("USER.BEFORE.SET").to_json().unwrap();
        assert_eq!(json, r#"{"request":"rename","from-dataset":{"dsn":"USER.BEFORE.SET"}}"#);

        let json = RenamePayload::member("USER.DATA.SET", "mem1").to_json().unwrap();
        assert_eq!(
            json,
            r#"{"request":"rename","from-dataset":{"dsn":"USER.DATA.SET","member":"mem1"}}"#
        );
    }

    #[test]
    fn test_headers_use_byte_length() {
        let json = RenamePayload::data_set("DSN.\u{e9}\"Q\"").to_json().unwrap();
        let headers = request_headers(&json);
        assert_eq!(headers[0], Header::new("Content-Type", "application/json"));
        assert_eq!(headers[1].name, "Content-Length");
        assert_eq!(headers[1].value, json.len().to_string());
        assert_ne!(headers[1].value, json.chars().count().to_string());
    }
}
