//! Email record data model.

use serde::{Deserialize, Deserializer, Serialize};

/// Priority assigned to a message when it was composed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Low priority.
    Low,
    /// Normal priority.
    #[default]
    Medium,
    /// High priority.
    High,
}

impl Priority {
    /// Parse from string representation. Unknown values fall back to medium.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "low" => Self::Low,
            "high" => Self::High,
            _ => Self::Medium,
        }
    }

    /// Convert to string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl std::str::FromStr for Priority {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

/// An email record as handed over by the storage layer.
///
/// Only three fields are read by the filters: the recipient address, the
/// flag type and the folder names. The rest is carried through untouched.
/// Any of the three may be missing; a missing field never matches.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Email {
    /// Storage identifier, if the record has been persisted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Sender address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_address: Option<String>,
    /// Recipient address.
    #[serde(default)]
    pub to_address: Option<String>,
    /// Subject line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// Message body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Flag type such as `star` or `trash`. Free-form.
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    /// Folders the message is filed under, in storage order.
    #[serde(default, alias = "foldersNames", deserialize_with = "null_as_empty")]
    pub folder_names: Vec<String>,
    /// Message priority.
    #[serde(default)]
    pub priority: Priority,
    /// Whether the message is an unsent draft.
    #[serde(default)]
    pub is_draft: bool,
}

impl Email {
    /// Create a record addressed to `to_address` with no flag and no folders.
    #[must_use]
    pub fn new(to_address: impl Into<String>) -> Self {
        Self {
            to_address: Some(to_address.into()),
            ..Self::default()
        }
    }

    /// Set the flag type.
    #[must_use]
    pub fn with_type(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// File the record under one more folder.
    #[must_use]
    pub fn with_folder(mut self, folder: impl Into<String>) -> Self {
        self.folder_names.push(folder.into());
        self
    }

    /// Recipient address, if present.
    #[must_use]
    pub fn to_address(&self) -> Option<&str> {
        self.to_address.as_deref()
    }

    /// Flag type, if present.
    #[must_use]
    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    /// Check whether the record is filed under exactly `folder`.
    #[must_use]
    pub fn is_in_folder(&self, folder: &str) -> bool {
        self.folder_names.iter().any(|name| name == folder)
    }
}

/// Storage layers send `null` for an empty folder list.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_roundtrip() {
        for priority in [Priority::Low, Priority::Medium, Priority::High] {
            assert_eq!(Priority::parse(priority.as_str()), priority);
        }
        assert_eq!(Priority::parse("URGENT"), Priority::Medium);
    }

    #[test]
    fn test_email_builder() {
        let email = Email::new("a@x.com")
            .with_type("star")
            .with_folder("Inbox")
            .with_folder("Work");

        assert_eq!(email.to_address(), Some("a@x.com"));
        assert_eq!(email.kind(), Some("star"));
        assert!(email.is_in_folder("Inbox"));
        assert!(email.is_in_folder("Work"));
        assert!(!email.is_in_folder("inbox"));
    }

    #[test]
    fn test_deserialize_wire_names() {
        let json = r#"{
            "toAddress": "a@x.com",
            "fromAddress": "me@x.com",
            "type": "Star",
            "folderNames": ["Inbox"],
            "priority": "high",
            "isDraft": true
        }"#;

        let email: Email = serde_json::from_str(json).unwrap();
        assert_eq!(email.to_address(), Some("a@x.com"));
        assert_eq!(email.from_address.as_deref(), Some("me@x.com"));
        assert_eq!(email.kind(), Some("Star"));
        assert_eq!(email.folder_names, vec!["Inbox".to_string()]);
        assert_eq!(email.priority, Priority::High);
        assert!(email.is_draft);
    }

    #[test]
    fn test_deserialize_sparse_record() {
        let email: Email =
            serde_json::from_str(r#"{"toAddress": null, "type": null, "foldersNames": null}"#)
                .unwrap();

        assert_eq!(email.to_address(), None);
        assert_eq!(email.kind(), None);
        assert!(email.folder_names.is_empty());
        assert_eq!(email.priority, Priority::Medium);
        assert!(!email.is_draft);
    }

    #[test]
    fn test_folders_alias() {
        let email: Email = serde_json::from_str(r#"{"foldersNames": ["Work"]}"#).unwrap();
        assert!(email.is_in_folder("Work"));
    }

    #[test]
    fn test_serialize_uses_wire_names() {
        let email = Email::new("a@x.com").with_type("trash");
        let value = serde_json::to_value(&email).unwrap();

        assert_eq!(value["toAddress"], "a@x.com");
        assert_eq!(value["type"], "trash");
        assert_eq!(value["folderNames"], serde_json::json!([]));
        assert!(value.get("subject").is_none());
    }
}
