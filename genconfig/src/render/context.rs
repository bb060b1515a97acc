//! Immutable state threaded through a render.

use crate::schema::FieldDescriptor;
use crate::value::{FieldValue, SampleConfig};

const INDENT: &str = "  ";

/// Position of the renderer within the type tree.
///
/// Each recursive step derives a fresh context instead of mutating a shared
/// one, so nested structures resolve their values against their own
/// instance rather than the root.
#[derive(Clone, Copy)]
pub(crate) struct RenderContext<'a> {
    pub depth: usize,
    source: Option<&'a dyn SampleConfig>,
    pub defaults_only: bool,
}

impl<'a> RenderContext<'a> {
    pub(crate) const fn root(source: &'a dyn SampleConfig, defaults_only: bool) -> Self {
        Self {
            depth: 0,
            source: Some(source),
            defaults_only,
        }
    }

    /// Context one level deeper, resolving values against `source`.
    ///
    /// `None` means the substructure has no live value, so every field
    /// below falls back to its default.
    pub(crate) const fn nested(self, source: Option<&'a dyn SampleConfig>) -> Self {
        Self {
            depth: self.depth + 1,
            source,
            defaults_only: self.defaults_only,
        }
    }

    /// Context one level deeper over the same substructure.
    pub(crate) const fn deeper(self) -> Self {
        Self {
            depth: self.depth + 1,
            ..self
        }
    }

    pub(crate) const fn is_top_level(&self) -> bool {
        self.depth == 0
    }

    /// Looks up the live value of `field` on the current substructure.
    pub(crate) fn resolve(&self, field: &FieldDescriptor) -> Option<FieldValue<'a>> {
        self.source
            .and_then(|source| source.field_value(field.ident))
    }

    pub(crate) fn indent(&self) -> String {
        INDENT.repeat(self.depth)
    }
}
