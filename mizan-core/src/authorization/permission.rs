use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use super::{Action, Resource};

/// One grantable capability: an action on a resource.
///
/// Serialized in the conventional `"resource:action"` form, e.g.
/// `clients:edit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Permission {
    pub resource: Resource,
    pub action: Action,
}

impl Permission {
    pub fn new(resource: Resource, action: Action) -> Self {
        Self { resource, action }
    }
}

/// Why a permission string failed to parse
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParsePermissionError {
    #[error("permission '{0}' is not of the form 'resource:action'")]
    Malformed(String),

    #[error("unknown resource '{0}'")]
    UnknownResource(String),

    #[error("unknown action '{0}'")]
    UnknownAction(String),
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.resource.as_str(), self.action.as_str())
    }
}

impl FromStr for Permission {
    type Err = ParsePermissionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (resource, action) = s
            .split_once(':')
            .ok_or_else(|| ParsePermissionError::Malformed(s.to_string()))?;

        let resource = Resource::from_str(resource)
            .ok_or_else(|| ParsePermissionError::UnknownResource(resource.to_string()))?;
        let action = Action::from_str(action)
            .ok_or_else(|| ParsePermissionError::UnknownAction(action.to_string()))?;

        Ok(Permission::new(resource, action))
    }
}

impl Serialize for Permission {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Permission {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_form() {
        let permission = Permission::new(Resource::Clients, Action::Edit);
        assert_eq!(permission.to_string(), "clients:edit");
    }

    #[test]
    fn test_parse_round_trip() {
        let permission: Permission = "cases:delete".parse().unwrap();
        assert_eq!(permission, Permission::new(Resource::Cases, Action::Delete));
        assert_eq!(permission.to_string().parse::<Permission>().unwrap(), permission);
    }

    #[test]
    fn test_parse_failures_are_typed() {
        assert_eq!(
            "clients".parse::<Permission>(),
            Err(ParsePermissionError::Malformed("clients".to_string()))
        );
        assert_eq!(
            "archives:view".parse::<Permission>(),
            Err(ParsePermissionError::UnknownResource("archives".to_string()))
        );
        assert_eq!(
            "clients:frobnicate".parse::<Permission>(),
            Err(ParsePermissionError::UnknownAction("frobnicate".to_string()))
        );
    }

    #[test]
    fn test_serde_string_form() {
        let permission = Permission::new(Resource::PowersOfAttorney, Action::View);
        let json = serde_json::to_string(&permission).unwrap();
        assert_eq!(json, "\"powers_of_attorney:view\"");
        assert_eq!(serde_json::from_str::<Permission>(&json).unwrap(), permission);
        assert!(serde_json::from_str::<Permission>("\"clients:frobnicate\"").is_err());
    }
}
