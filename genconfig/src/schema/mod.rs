//! Static descriptor tables describing the shape of a configuration type.
//!
//! A [`Schema`] is built once per type, normally by `#[derive(SampleConfig)]`,
//! and lives in a `static`. Every constructor is a `const fn` so the derive
//! can emit the whole table without runtime allocation.

use std::fmt;

use crate::error::GenConfigError;

/// Returns the schema of a nested or map value type.
pub type SchemaFn = fn() -> &'static Schema;

/// Descriptor table for one configuration type.
#[derive(Debug)]
pub struct Schema {
    /// Name of the Rust type, used in diagnostics.
    pub type_name: &'static str,
    /// Fields in declaration order.
    pub fields: &'static [FieldDescriptor],
}

impl Schema {
    /// Creates a schema from a type name and its field table.
    #[must_use]
    pub const fn new(type_name: &'static str, fields: &'static [FieldDescriptor]) -> Self {
        Self { type_name, fields }
    }

    /// Checks that no field anywhere below this schema is an indirection and
    /// that the tree does not refer back to itself.
    ///
    /// The walk covers nested structures and the value types of maps, so a
    /// pointer hidden inside an empty map's value type is still reported.
    ///
    /// # Errors
    ///
    /// Returns [`GenConfigError::IndirectField`] for the first indirection
    /// found and [`GenConfigError::CyclicSchema`] when a schema reappears on
    /// its own path.
    pub fn validate(&'static self) -> Result<(), GenConfigError> {
        let mut path = Vec::new();
        self.validate_on_path(&mut path)
    }

    fn validate_on_path(
        &'static self,
        path: &mut Vec<&'static Self>,
    ) -> Result<(), GenConfigError> {
        if path.iter().any(|seen| std::ptr::eq(*seen, self)) {
            let mut cycle: Vec<&str> = path.iter().map(|schema| schema.type_name).collect();
            cycle.push(self.type_name);
            return Err(GenConfigError::CyclicSchema {
                cycle: cycle.join(" -> "),
            });
        }

        path.push(self);
        for field in self.fields {
            match field.kind {
                FieldKind::Indirect => {
                    return Err(GenConfigError::IndirectField {
                        type_name: self.type_name,
                        field: field.ident,
                    });
                }
                FieldKind::Nested(schema) | FieldKind::Map(schema) => {
                    schema().validate_on_path(path)?;
                }
                FieldKind::Primitive | FieldKind::List | FieldKind::Unsupported => {}
            }
        }
        path.pop();
        Ok(())
    }
}

/// Structural category of a field.
#[derive(Clone, Copy)]
pub enum FieldKind {
    /// Text, integer, float, boolean or another `Display` leaf.
    Primitive,
    /// A nested structure rendered as an indented block.
    Nested(SchemaFn),
    /// A keyed collection whose values follow the given schema.
    Map(SchemaFn),
    /// An ordered list of primitives.
    List,
    /// A pointer or other indirection; rendering it is a fatal error.
    Indirect,
    /// Anything else. Skipped without output.
    Unsupported,
}

impl FieldKind {
    /// Short human-readable label used in diagnostics.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Primitive => "primitive",
            Self::Nested(_) => "nested structure",
            Self::Map(_) => "keyed collection",
            Self::List => "list",
            Self::Indirect => "indirection",
            Self::Unsupported => "unsupported",
        }
    }
}

impl fmt::Debug for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nested(schema) => write!(f, "Nested({})", schema().type_name),
            Self::Map(schema) => write!(f, "Map({})", schema().type_name),
            other => f.write_str(other.label()),
        }
    }
}

/// Per-field metadata recovered from `#[sample(...)]` annotations.
#[derive(Debug, Clone, Copy)]
pub struct FieldDescriptor {
    /// Rust identifier of the field, used to resolve live values.
    pub ident: &'static str,
    /// Key written to the sample document.
    pub name: &'static str,
    /// Structural category.
    pub kind: FieldKind,
    /// Default literal, written verbatim.
    pub default: Option<&'static str>,
    /// Human-readable comment appended after the value.
    pub comment: Option<&'static str>,
    /// Whether the field must be set; `false` marks it `(optional)`.
    pub required: bool,
}

impl FieldDescriptor {
    /// Creates a required field with no default and no comment.
    #[must_use]
    pub const fn new(ident: &'static str, name: &'static str, kind: FieldKind) -> Self {
        Self {
            ident,
            name,
            kind,
            default: None,
            comment: None,
            required: true,
        }
    }

    /// Sets the default literal.
    #[must_use]
    pub const fn with_default(self, default: &'static str) -> Self {
        Self {
            default: Some(default),
            ..self
        }
    }

    /// Sets the comment.
    #[must_use]
    pub const fn with_comment(self, comment: &'static str) -> Self {
        Self {
            comment: Some(comment),
            ..self
        }
    }

    /// Marks the field as optional.
    #[must_use]
    pub const fn optional(self) -> Self {
        Self {
            required: false,
            ..self
        }
    }

    /// Default literal split on commas, as used for list fields.
    ///
    /// A field without a default yields no items.
    pub fn default_items(&self) -> impl Iterator<Item = &'static str> {
        self.default.into_iter().flat_map(|raw| raw.split(','))
    }
}
