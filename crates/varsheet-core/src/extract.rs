// ABOUTME: Style extractors that read one registry category each and map entries to Declarations.
// ABOUTME: Entries whose first paint or effect does not match the target kind are excluded.

use thiserror::Error;

use crate::model::{Declaration, StyleKind};
use crate::registry::{Effect, LocalVariable, Paint, StyleRegistry, VariableType, VariableValue};

/// Errors that abort a whole generation request.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExportError {
    #[error("variable '{name}' must have exactly one mode value, found {count}")]
    ModeCount { name: String, count: usize },

    #[error("variable '{name}' is declared {expected} but its value has a different shape")]
    ValueMismatch { name: String, expected: VariableType },
}

/// Run the extractor for `kind` against `registry`.
pub fn extract(
    kind: StyleKind,
    registry: &dyn StyleRegistry,
) -> Result<Vec<Declaration>, ExportError> {
    let declarations = match kind {
        StyleKind::Color => colors(registry),
        StyleKind::Shadow => shadows(registry),
        StyleKind::Blur => blurs(registry),
        StyleKind::FontSize => font_sizes(registry),
        StyleKind::FontWeight => font_weights(registry),
        StyleKind::FontFamily => font_families(registry),
        StyleKind::Variable => variables(registry)?,
    };
    Ok(declarations)
}

/// Paint styles whose first paint is a solid fill.
pub fn colors(registry: &dyn StyleRegistry) -> Vec<Declaration> {
    registry
        .paint_styles()
        .iter()
        .filter_map(|style| match style.paints.first() {
            Some(Paint::Solid { color, opacity }) => Some(Declaration::new(
                &style.name,
                color.with_alpha(*opacity).to_hex(),
            )),
            _ => {
                tracing::debug!(style = %style.name, "skipping paint style without a leading solid fill");
                None
            }
        })
        .collect()
}

/// Effect styles whose first effect is a drop or inner shadow.
pub fn shadows(registry: &dyn StyleRegistry) -> Vec<Declaration> {
    registry
        .effect_styles()
        .iter()
        .filter_map(|style| match style.effects.first() {
            Some(Effect::DropShadow(shadow) | Effect::InnerShadow(shadow)) => {
                let value = format!(
                    "{}px {}px {}px {}",
                    css_number(shadow.offset.x),
                    css_number(shadow.offset.y),
                    css_number(shadow.radius),
                    shadow.color.to_hex(),
                );
                Some(Declaration::new(&style.name, value))
            }
            _ => None,
        })
        .collect()
}

/// Effect styles whose first effect is a layer or background blur.
pub fn blurs(registry: &dyn StyleRegistry) -> Vec<Declaration> {
    registry
        .effect_styles()
        .iter()
        .filter_map(|style| match style.effects.first() {
            Some(Effect::LayerBlur(blur) | Effect::BackgroundBlur(blur)) => Some(
                Declaration::new(&style.name, format!("blur({}px)", css_number(blur.radius))),
            ),
            _ => None,
        })
        .collect()
}

pub fn font_sizes(registry: &dyn StyleRegistry) -> Vec<Declaration> {
    registry
        .text_styles()
        .iter()
        .map(|style| Declaration::new(&style.name, format!("{}px", css_number(style.font_size))))
        .collect()
}

pub fn font_weights(registry: &dyn StyleRegistry) -> Vec<Declaration> {
    registry
        .text_styles()
        .iter()
        .map(|style| Declaration::new(&style.name, style.font_name.style.to_lowercase()))
        .collect()
}

pub fn font_families(registry: &dyn StyleRegistry) -> Vec<Declaration> {
    registry
        .text_styles()
        .iter()
        .map(|style| Declaration::new(&style.name, style.font_name.family.clone()))
        .collect()
}

/// Design variables with a single resolvable value. Fails on the first
/// malformed variable; boolean and unknown types are skipped.
pub fn variables(registry: &dyn StyleRegistry) -> Result<Vec<Declaration>, ExportError> {
    let mut out = Vec::new();
    for variable in registry.variables() {
        if let Some(value) = variable_value(variable)? {
            out.push(Declaration::new(&variable.name, value));
        }
    }
    Ok(out)
}

/// Render one variable's value, or `None` if its type is not exported.
fn variable_value(variable: &LocalVariable) -> Result<Option<String>, ExportError> {
    let count = variable.values_by_mode.len();
    let value = match variable.values_by_mode.values().next() {
        Some(value) if count == 1 => value,
        _ => {
            return Err(ExportError::ModeCount {
                name: variable.name.clone(),
                count,
            });
        }
    };

    let mismatch = || ExportError::ValueMismatch {
        name: variable.name.clone(),
        expected: variable.resolved_type,
    };

    let rendered = match variable.resolved_type {
        VariableType::Color => match value {
            VariableValue::Color(color) => color.to_hex(),
            _ => return Err(mismatch()),
        },
        VariableType::String => match value {
            VariableValue::String(s) => s.clone(),
            _ => return Err(mismatch()),
        },
        VariableType::Float => match value {
            VariableValue::Float(n) => css_number(*n),
            _ => return Err(mismatch()),
        },
        VariableType::Boolean => {
            tracing::warn!(variable = %variable.name, "boolean variables are not supported yet, skipping");
            return Ok(None);
        }
        VariableType::Unknown => return Ok(None),
    };
    Ok(Some(rendered))
}

/// Print a number in its shortest form: `12`, `1.5`, never `12.0` or `-0`.
pub fn css_number(n: f64) -> String {
    if n == 0.0 {
        return "0".to_string();
    }
    n.to_string()
}
