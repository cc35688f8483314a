//! Audit records and closure types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// How an assigned audit was closed.
///
/// The platform recognizes exactly four closure categories; anything
/// else on the wire is treated as unrecognized and excluded from ratio
/// computations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClosureType {
    /// The audit was handed to a different auditor.
    Reassigned,
    /// The audit slot was never used.
    Unused,
    /// The audit was completed successfully.
    Succeeded,
    /// The audit expired before completion.
    Expired,
}

impl ClosureType {
    /// All recognized closure types, in reporting order.
    pub const ALL: [ClosureType; 4] = [
        ClosureType::Succeeded,
        ClosureType::Expired,
        ClosureType::Reassigned,
        ClosureType::Unused,
    ];
}

impl FromStr for ClosureType {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reassigned" => Ok(Self::Reassigned),
            "unused" => Ok(Self::Unused),
            "succeeded" => Ok(Self::Succeeded),
            "expired" => Ok(Self::Expired),
            other => Err(TypeError::UnknownClosureType(other.to_string())),
        }
    }
}

impl fmt::Display for ClosureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reassigned => write!(f, "reassigned"),
            Self::Unused => write!(f, "unused"),
            Self::Succeeded => write!(f, "succeeded"),
            Self::Expired => write!(f, "expired"),
        }
    }
}

/// The path-bearing group an audit was assigned against.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditGroup {
    /// Record path of the audited group's object, when known.
    #[serde(default)]
    pub path: Option<String>,
}

/// One audit assignment as returned by the platform API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditRecord {
    pub id: i64,
    /// RFC 3339 timestamp, unparsed.
    pub audited_at: String,
    pub auditor_id: i64,
    /// Raw closure type; `None` or an unrecognized value excludes the
    /// record from ratio computations.
    #[serde(default)]
    pub closure_type: Option<String>,
    #[serde(default)]
    pub group: Option<AuditGroup>,
}

impl AuditRecord {
    /// The recognized closure type, if any.
    pub fn closure(&self) -> Option<ClosureType> {
        self.closure_type.as_deref()?.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn audit(closure_type: Option<&str>) -> AuditRecord {
        AuditRecord {
            id: 1,
            audited_at: "2024-02-01T09:00:00Z".into(),
            auditor_id: 42,
            closure_type: closure_type.map(String::from),
            group: None,
        }
    }

    #[test]
    fn parses_all_recognized_closures() {
        for (raw, expected) in [
            ("reassigned", ClosureType::Reassigned),
            ("unused", ClosureType::Unused),
            ("succeeded", ClosureType::Succeeded),
            ("expired", ClosureType::Expired),
        ] {
            assert_eq!(audit(Some(raw)).closure(), Some(expected));
        }
    }

    #[test]
    fn unrecognized_closure_is_none() {
        assert_eq!(audit(Some("vanished")).closure(), None);
        assert_eq!(audit(None).closure(), None);
    }

    #[test]
    fn from_str_rejects_unknown() {
        assert!(matches!(
            "vanished".parse::<ClosureType>(),
            Err(TypeError::UnknownClosureType(_))
        ));
    }

    #[test]
    fn serde_uses_lowercase() {
        let json = serde_json::to_string(&ClosureType::Succeeded).unwrap();
        assert_eq!(json, "\"succeeded\"");
    }

    #[test]
    fn deserializes_wire_shape() {
        let json = r#"{
            "id": 7,
            "auditedAt": "2024-02-01T09:00:00Z",
            "auditorId": 42,
            "closureType": "succeeded",
            "group": { "path": "/bahrain/bh-module/graphql" }
        }"#;
        let record: AuditRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.closure(), Some(ClosureType::Succeeded));
        assert_eq!(
            record.group.unwrap().path.as_deref(),
            Some("/bahrain/bh-module/graphql")
        );
    }

    #[test]
    fn null_closure_deserializes() {
        let json = r#"{"id": 7, "auditedAt": "x", "auditorId": 1, "closureType": null}"#;
        let record: AuditRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.closure(), None);
    }
}
