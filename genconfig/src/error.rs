//! Error types produced while rendering or writing sample configuration.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Fatal failures that abort a render or a sample file write.
///
/// Failures confined to a single field's live value are not represented
/// here; the renderer falls back to the declared default instead.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GenConfigError {
    /// A pointer or other indirection field was found in the type tree.
    #[error("field '{field}' of '{type_name}' is an indirection type; pointer fields cannot be described")]
    IndirectField {
        /// Type declaring the field.
        type_name: &'static str,
        /// Rust identifier of the offending field.
        field: &'static str,
    },

    /// A schema refers back to itself without indirection.
    #[error("cyclic schema detected: {cycle}")]
    CyclicSchema {
        /// Chain of type names forming the cycle.
        cycle: String,
    },

    /// A collection field resolved to a value of a different shape.
    #[error("field '{field}' of '{type_name}' expected a {expected} but resolved to a {found}")]
    ShapeMismatch {
        /// Type declaring the field.
        type_name: &'static str,
        /// Rust identifier of the field.
        field: &'static str,
        /// Shape declared by the schema.
        expected: &'static str,
        /// Shape of the live value.
        found: &'static str,
    },

    /// Filesystem failure while writing the sample file.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path being accessed.
        path: Utf8PathBuf,
        /// Underlying error reported by the filesystem.
        #[source]
        source: std::io::Error,
    },
}
