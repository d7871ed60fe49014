// ABOUTME: Closed message protocol between the dispatcher and the display surface.
// ABOUTME: Inbound requests are create-css and cancel; the only outbound message is generated.

use serde::{Deserialize, Serialize};

/// A message sent by the display surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum UiRequest {
    /// Generate the CSS document. `exported_variables` names the style kinds
    /// to include, in output order; older surfaces omit it to mean all kinds.
    CreateCss {
        #[serde(
            rename = "exportedVariables",
            default,
            skip_serializing_if = "Option::is_none"
        )]
        exported_variables: Option<Vec<String>>,
    },
    /// Close the session.
    Cancel,
    /// Any message type this dispatcher does not handle.
    #[serde(other)]
    Unknown,
}

impl UiRequest {
    /// Parse one inbound message.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

/// A message sent back to the display surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum UiResponse {
    Generated { css: String },
}
