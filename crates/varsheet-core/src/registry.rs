// ABOUTME: Host style registry shapes (paint, text, effect styles and design variables).
// ABOUTME: StyleRegistry is the read-only capability the extractors query; RegistrySnapshot is an in-memory implementation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Read-only access to the host document's local styles and variables.
/// Every accessor returns entries in the host's enumeration order.
pub trait StyleRegistry {
    fn paint_styles(&self) -> &[PaintStyle];
    fn text_styles(&self) -> &[TextStyle];
    fn effect_styles(&self) -> &[EffectStyle];
    fn variables(&self) -> &[LocalVariable];
}

/// A named paint (color) style with its stacked paint layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaintStyle {
    pub name: String,
    #[serde(default)]
    pub paints: Vec<Paint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Paint {
    Solid {
        color: Color,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        opacity: Option<f64>,
    },
    GradientLinear,
    GradientRadial,
    GradientAngular,
    GradientDiamond,
    Image,
    Video,
    /// Any paint type this exporter does not know about.
    #[serde(other)]
    Unknown,
}

/// A named text style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    pub name: String,
    pub font_size: f64,
    pub font_name: FontName,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontName {
    pub family: String,
    /// Style descriptor such as "Bold" or "Regular".
    pub style: String,
}

/// A named effect style with its stacked effects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectStyle {
    pub name: String,
    #[serde(default)]
    pub effects: Vec<Effect>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Effect {
    DropShadow(Shadow),
    InnerShadow(Shadow),
    LayerBlur(Blur),
    BackgroundBlur(Blur),
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    pub color: Color,
    pub offset: Vector,
    pub radius: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spread: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Blur {
    pub radius: f64,
}

/// A design variable: a named, typed value that may differ per mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalVariable {
    pub name: String,
    pub resolved_type: VariableType,
    #[serde(default)]
    pub values_by_mode: BTreeMap<String, VariableValue>,
}

/// Declared type of a design variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VariableType {
    Color,
    Float,
    String,
    Boolean,
    /// A type discriminant introduced by a newer host.
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for VariableType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            VariableType::Color => "COLOR",
            VariableType::Float => "FLOAT",
            VariableType::String => "STRING",
            VariableType::Boolean => "BOOLEAN",
            VariableType::Unknown => "UNKNOWN",
        };
        f.write_str(label)
    }
}

/// A stored variable value. The shape is not guaranteed to agree with the
/// declared [`VariableType`]; extractors check that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VariableValue {
    Boolean(bool),
    Float(f64),
    String(String),
    Color(Color),
    Alias(VariableAlias),
}

/// A reference to another variable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableAlias {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
}

/// An owned registry, as exported from a host document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrySnapshot {
    #[serde(default)]
    pub paint_styles: Vec<PaintStyle>,
    #[serde(default)]
    pub text_styles: Vec<TextStyle>,
    #[serde(default)]
    pub effect_styles: Vec<EffectStyle>,
    #[serde(default)]
    pub variables: Vec<LocalVariable>,
}

impl StyleRegistry for RegistrySnapshot {
    fn paint_styles(&self) -> &[PaintStyle] {
        &self.paint_styles
    }

    fn text_styles(&self) -> &[TextStyle] {
        &self.text_styles
    }

    fn effect_styles(&self) -> &[EffectStyle] {
        &self.effect_styles
    }

    fn variables(&self) -> &[LocalVariable] {
        &self.variables
    }
}
