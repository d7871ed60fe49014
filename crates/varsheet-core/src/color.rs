// ABOUTME: Defines the normalized Color value and the hex color codec.
// ABOUTME: Channels in [0,1] become #rrggbb, with an alpha byte only when not fully opaque.

use std::fmt::Write;

use serde::{Deserialize, Serialize};

/// A host color with channels in [0,1]. `a` is absent for paint colors,
/// whose opacity lives on the paint instead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a: Option<f64>,
}

impl Color {
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: None }
    }

    pub fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a: Some(a) }
    }

    /// Replace the alpha channel.
    pub fn with_alpha(self, a: Option<f64>) -> Self {
        Self { a, ..self }
    }

    /// Encode as `#rrggbb`, or `#rrggbbaa` when alpha rounds to anything
    /// below 0xff.
    pub fn to_hex(&self) -> String {
        let mut out = String::with_capacity(9);
        out.push('#');
        for channel in [self.r, self.g, self.b] {
            push_byte(&mut out, channel_byte(channel));
        }
        if let Some(alpha) = self.a.map(channel_byte).filter(|a| *a != u8::MAX) {
            push_byte(&mut out, alpha);
        }
        out
    }
}

/// Map a [0,1] channel to 0..=255. Out-of-range input is clamped, NaN maps to 0.
fn channel_byte(channel: f64) -> u8 {
    if channel.is_nan() {
        return 0;
    }
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn push_byte(out: &mut String, byte: u8) {
    // Writing into a String cannot fail.
    let _ = write!(out, "{byte:02x}");
}
