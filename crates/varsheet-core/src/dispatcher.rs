// ABOUTME: Request dispatcher: turns create-css requests into a CSS document and handles cancel.
// ABOUTME: Runs extractors for the requested kinds in request order, then assembles the groups.

use crate::export::assemble;
use crate::extract::{ExportError, extract};
use crate::model::{StyleGroup, StyleKind};
use crate::protocol::{UiRequest, UiResponse};
use crate::registry::StyleRegistry;

/// Lifecycle of a dispatcher session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Terminated,
}

/// What the host should do after a request has been handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Send this message to the display surface.
    Reply(UiResponse),
    /// Close the session.
    Close,
    /// Nothing to do.
    Ignored,
}

/// Handles one inbound message at a time against a read-only registry.
pub struct Dispatcher<R> {
    registry: R,
    state: SessionState,
}

impl<R: StyleRegistry> Dispatcher<R> {
    pub fn new(registry: R) -> Self {
        Self {
            registry,
            state: SessionState::Idle,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Handle a single request. A generation failure leaves the session
    /// idle and produces no reply.
    pub fn handle(&mut self, request: UiRequest) -> Result<Outcome, ExportError> {
        if self.state == SessionState::Terminated {
            tracing::debug!(?request, "session terminated, ignoring request");
            return Ok(Outcome::Ignored);
        }

        match request {
            UiRequest::CreateCss { exported_variables } => {
                let kinds = resolve_kinds(exported_variables.as_deref());
                let css = generate(&self.registry, &kinds)?;
                Ok(Outcome::Reply(UiResponse::Generated { css }))
            }
            UiRequest::Cancel => {
                tracing::info!("cancel requested, closing session");
                self.state = SessionState::Terminated;
                Ok(Outcome::Close)
            }
            UiRequest::Unknown => {
                tracing::debug!("ignoring unknown request type");
                Ok(Outcome::Ignored)
            }
        }
    }

    /// Parse and handle a raw JSON message. Messages that do not parse are
    /// ignored like unknown types.
    pub fn handle_json(&mut self, raw: &str) -> Result<Outcome, ExportError> {
        match UiRequest::from_json(raw) {
            Ok(request) => self.handle(request),
            Err(e) => {
                tracing::debug!(error = %e, "ignoring malformed request");
                Ok(Outcome::Ignored)
            }
        }
    }
}

/// Map requested kind identifiers to kinds. `None` means every kind.
/// Unknown identifiers are dropped and repeats keep their first position.
pub fn resolve_kinds(requested: Option<&[String]>) -> Vec<StyleKind> {
    let Some(requested) = requested else {
        return StyleKind::ALL.to_vec();
    };

    let mut kinds = Vec::with_capacity(requested.len());
    for id in requested {
        match id.parse::<StyleKind>() {
            Ok(kind) if !kinds.contains(&kind) => kinds.push(kind),
            Ok(_) => {}
            Err(e) => tracing::debug!(error = %e, "skipping requested kind"),
        }
    }
    kinds
}

/// Extract one group per kind, in the given order.
pub fn build_groups(
    registry: &dyn StyleRegistry,
    kinds: &[StyleKind],
) -> Result<Vec<StyleGroup>, ExportError> {
    kinds
        .iter()
        .map(|&kind| -> Result<StyleGroup, ExportError> {
            let entries = extract(kind, registry)?;
            tracing::debug!(kind = %kind, entries = entries.len(), "extracted group");
            Ok(StyleGroup::new(kind, entries))
        })
        .collect()
}

/// Build the complete CSS document for `kinds`.
pub fn generate(registry: &dyn StyleRegistry, kinds: &[StyleKind]) -> Result<String, ExportError> {
    tracing::info!(kinds = kinds.len(), "generating css");
    let groups = build_groups(registry, kinds)?;
    let declarations: usize = groups.iter().map(|g| g.entries.len()).sum();
    let css = assemble(&groups);
    tracing::info!(groups = groups.len(), declarations, "css generated");
    Ok(css)
}
