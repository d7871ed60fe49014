// ABOUTME: Core library for varsheet: reads a host style registry and exports CSS custom properties.
// ABOUTME: Holds the registry model, color codec, extractors, CSS exporter, message protocol, and dispatcher.

pub mod color;
pub mod dispatcher;
pub mod export;
pub mod extract;
pub mod model;
pub mod protocol;
pub mod registry;
pub mod snapshot;

pub use color::Color;
pub use dispatcher::{Dispatcher, Outcome, SessionState, generate};
pub use extract::ExportError;
pub use model::{Declaration, StyleGroup, StyleKind};
pub use protocol::{UiRequest, UiResponse};
pub use registry::{RegistrySnapshot, StyleRegistry};
pub use snapshot::{SnapshotError, load_snapshot};
