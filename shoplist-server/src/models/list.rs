//! Transfer representation of lists and list items

use serde::{Deserialize, Serialize};

use super::wire;
use crate::store::ListRecord;

/// Format used for `created_on` on the wire (UTC).
pub const CREATED_ON_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single entry on a list. Never persisted yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    #[serde(with = "wire::string_i64")]
    pub id: i64,
    #[serde(with = "wire::string_bool")]
    pub checked: bool,
    pub description: String,
}

/// Shopping list as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
    #[serde(with = "wire::string_i64")]
    pub id: i64,
    pub description: String,
    #[serde(default)]
    pub items: Option<Vec<ListItem>>,
    #[serde(default)]
    pub created_on: String,
}

impl List {
    /// A list carrying nothing but its id.
    pub fn with_id(id: i64) -> Self {
        Self {
            id,
            description: String::new(),
            items: None,
            created_on: String::new(),
        }
    }
}

impl From<ListRecord> for List {
    fn from(record: ListRecord) -> Self {
        Self {
            id: record.id,
            description: record.description,
            items: None,
            created_on: record.created_on.format(CREATED_ON_FORMAT).to_string(),
        }
    }
}

/// Request body for create and update.
///
/// Clients send a whole `List`; only `description` (and `id` on update)
/// are read, everything else is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ListBody {
    #[serde(default, with = "wire::string_i64_opt")]
    pub id: Option<i64>,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn list_wire_shape() {
        let record = ListRecord {
            id: 1,
            description: "Groceries".into(),
            created_on: Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 0).unwrap(),
        };
        let json = serde_json::to_value(List::from(record)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "1",
                "description": "Groceries",
                "items": null,
                "created_on": "2024-03-09 14:05:00"
            })
        );
    }

    #[test]
    fn item_wire_shape() {
        let item = ListItem {
            id: 5,
            checked: false,
            description: "milk".into(),
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["id"], "5");
        assert_eq!(json["checked"], "false");
    }

    #[test]
    fn body_ignores_unknown_fields() {
        let body: ListBody = serde_json::from_str(
            r#"{"id": "9", "description": "Hardware", "items": [], "created_on": "whenever"}"#,
        )
        .unwrap();
        assert_eq!(body.id, Some(9));
        assert_eq!(body.description, "Hardware");
    }

    #[test]
    fn body_requires_description() {
        assert!(serde_json::from_str::<ListBody>(r#"{"id": "9"}"#).is_err());
    }

    #[test]
    fn with_id_is_otherwise_empty() {
        let list = List::with_id(12);
        assert_eq!(list.id, 12);
        assert!(list.description.is_empty());
        assert!(list.items.is_none());
    }
}
