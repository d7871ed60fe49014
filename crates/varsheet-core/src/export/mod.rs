// ABOUTME: Module root for document exporters.
// ABOUTME: Re-exports the CSS custom-property exporter functions.

pub mod css;

pub use css::{assemble, format_declaration, normalize_name};
