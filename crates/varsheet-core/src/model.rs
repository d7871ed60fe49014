// ABOUTME: Defines StyleKind, Declaration, and StyleGroup, the per-request export model.
// ABOUTME: Each kind carries its request identifier, its declaration prefix, and its section label.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The categories of style that can be exported, in default export order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StyleKind {
    Color,
    Shadow,
    Blur,
    FontSize,
    FontWeight,
    FontFamily,
    #[serde(rename = "local-variables")]
    Variable,
}

impl StyleKind {
    /// Every kind, in the order used when a request does not name any.
    pub const ALL: [StyleKind; 7] = [
        StyleKind::Color,
        StyleKind::Shadow,
        StyleKind::Blur,
        StyleKind::FontSize,
        StyleKind::FontWeight,
        StyleKind::FontFamily,
        StyleKind::Variable,
    ];

    /// The identifier used for this kind in request messages.
    pub fn id(self) -> &'static str {
        match self {
            StyleKind::Color => "color",
            StyleKind::Shadow => "shadow",
            StyleKind::Blur => "blur",
            StyleKind::FontSize => "font-size",
            StyleKind::FontWeight => "font-weight",
            StyleKind::FontFamily => "font-family",
            StyleKind::Variable => "local-variables",
        }
    }

    /// Prefix placed before each declaration name. Design variables carry
    /// their own namespacing in their names, so they get none.
    pub fn prefix(self) -> Option<&'static str> {
        match self {
            StyleKind::Variable => None,
            other => Some(other.id()),
        }
    }

    /// Label used in the section comment header.
    pub fn label(self) -> String {
        self.id().to_uppercase()
    }
}

impl fmt::Display for StyleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Returned when a request names a kind this exporter does not know.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown style kind: {0}")]
pub struct UnknownStyleKind(pub String);

impl FromStr for StyleKind {
    type Err = UnknownStyleKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StyleKind::ALL
            .into_iter()
            .find(|kind| kind.id() == s)
            .ok_or_else(|| UnknownStyleKind(s.to_string()))
    }
}

/// One name/value pair read from the registry. The value is already a
/// CSS value token ("12px", "#aabbcc"); the name is the raw host name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    pub name: String,
    pub value: String,
}

impl Declaration {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// All declarations of one kind, in registry order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleGroup {
    pub kind: StyleKind,
    pub prefix: Option<String>,
    pub entries: Vec<Declaration>,
}

impl StyleGroup {
    /// Create a group using the kind's default prefix.
    pub fn new(kind: StyleKind, entries: Vec<Declaration>) -> Self {
        Self {
            kind,
            prefix: kind.prefix().map(str::to_string),
            entries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_ids_round_trip_through_from_str() {
        for kind in StyleKind::ALL {
            assert_eq!(kind.id().parse::<StyleKind>().unwrap(), kind);
        }
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let err = "gradient".parse::<StyleKind>().unwrap_err();
        assert_eq!(err, UnknownStyleKind("gradient".to_string()));
        assert!(err.to_string().contains("gradient"));
    }

    #[test]
    fn kind_serde_matches_request_ids() {
        for kind in StyleKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.id()));
        }
    }

    #[test]
    fn labels_and_prefixes() {
        assert_eq!(StyleKind::Color.label(), "COLOR");
        assert_eq!(StyleKind::FontSize.label(), "FONT-SIZE");
        assert_eq!(StyleKind::Variable.label(), "LOCAL-VARIABLES");
        assert_eq!(StyleKind::FontWeight.prefix(), Some("font-weight"));
        assert_eq!(StyleKind::Variable.prefix(), None);
    }

    #[test]
    fn group_new_takes_prefix_from_kind() {
        let group = StyleGroup::new(StyleKind::Shadow, Vec::new());
        assert_eq!(group.prefix.as_deref(), Some("shadow"));
        assert!(group.entries.is_empty());

        let vars = StyleGroup::new(StyleKind::Variable, Vec::new());
        assert!(vars.prefix.is_none());
    }
}
