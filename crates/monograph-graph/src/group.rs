//! Pattern-based assignment of packages to named groups.

use std::collections::BTreeMap;

use monograph_util::errors::MonographError;
use regex::Regex;

/// Label for packages the group pattern does not match.
pub const FALLBACK_GROUP: &str = "others";

/// Classifies package names by the first capture group of a pattern.
#[derive(Debug, Clone)]
pub struct GroupAssigner {
    regex: Regex,
}

impl GroupAssigner {
    /// Compile `pattern`, which must have exactly one capture group.
    pub fn new(pattern: &str) -> Result<Self, MonographError> {
        let regex = Regex::new(pattern).map_err(|e| MonographError::InvalidPattern {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;
        // captures_len counts the implicit whole-match group
        let groups = regex.captures_len() - 1;
        if groups != 1 {
            return Err(MonographError::InvalidPattern {
                pattern: pattern.to_string(),
                message: format!("expected exactly one capture group, found {groups}"),
            });
        }
        Ok(Self { regex })
    }

    /// Group label for a package name.
    pub fn assign(&self, name: &str) -> String {
        self.regex
            .captures(name)
            .and_then(|caps| caps.get(1))
            .map_or_else(|| FALLBACK_GROUP.to_string(), |m| m.as_str().to_string())
    }
}

/// Group label to member package names, in registration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Groups {
    members: BTreeMap<String, Vec<String>>,
}

impl Groups {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add(&mut self, label: &str, package: &str) {
        self.members
            .entry(label.to_string())
            .or_default()
            .push(package.to_string());
    }

    /// Members of `label`, if the group exists.
    pub fn get(&self, label: &str) -> Option<&[String]> {
        self.members.get(label).map(Vec::as_slice)
    }

    /// Group labels in sorted order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.members.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.members
            .iter()
            .map(|(label, names)| (label.as_str(), names.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
