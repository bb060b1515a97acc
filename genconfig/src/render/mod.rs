//! Recursive renderer turning a [`SampleConfig`] value into sample text.
//!
//! The renderer walks the static [`Schema`] depth first in declaration order
//! and resolves live values against the substructure currently being
//! walked. Output uses two spaces of indentation per level and inserts a
//! blank line after each top-level structure or map block.

mod context;

use tracing::{debug, trace};

use crate::error::GenConfigError;
use crate::schema::{FieldDescriptor, FieldKind, Schema};
use crate::value::{FieldValue, SampleConfig};

use context::RenderContext;

/// Options controlling a render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Ignore live values and always emit declared defaults.
    pub defaults_only: bool,
}

/// Renders configuration values into commented, indented sample text.
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    options: RenderOptions,
}

impl Renderer {
    /// Creates a renderer with the given options.
    #[must_use]
    pub const fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Renders `value` and returns the trimmed document.
    ///
    /// # Errors
    ///
    /// Fails when the type tree contains an indirection field or a cycle, or
    /// when a map or list field resolves to a value of another shape. No
    /// partial output is returned in either case.
    pub fn render<T: SampleConfig>(&self, value: &T) -> Result<String, GenConfigError> {
        let schema = T::schema();
        schema.validate()?;

        let mut out = String::new();
        let context = RenderContext::root(value, self.options.defaults_only);
        render_fields(schema, context, &mut out)?;
        Ok(out.trim().to_owned())
    }
}

/// Renders `value`, optionally ignoring its live values.
///
/// # Errors
///
/// See [`Renderer::render`].
pub fn render<T: SampleConfig>(value: &T, defaults_only: bool) -> Result<String, GenConfigError> {
    Renderer::new(RenderOptions { defaults_only }).render(value)
}

fn render_fields(
    schema: &Schema,
    context: RenderContext<'_>,
    out: &mut String,
) -> Result<(), GenConfigError> {
    for field in schema.fields {
        render_field(schema, field, context, out)?;
    }
    Ok(())
}

fn render_field(
    schema: &Schema,
    field: &FieldDescriptor,
    context: RenderContext<'_>,
    out: &mut String,
) -> Result<(), GenConfigError> {
    match field.kind {
        FieldKind::Nested(nested) => render_nested(schema, field, nested(), context, out),
        FieldKind::Map(values) => render_map(schema, field, values(), context, out),
        FieldKind::List => render_list(schema, field, context, out),
        FieldKind::Primitive => {
            render_primitive(schema, field, context, out);
            Ok(())
        }
        FieldKind::Indirect => Err(GenConfigError::IndirectField {
            type_name: schema.type_name,
            field: field.ident,
        }),
        FieldKind::Unsupported => {
            trace!(
                type_name = schema.type_name,
                field = field.ident,
                "skipping unsupported field"
            );
            Ok(())
        }
    }
}

fn render_nested(
    schema: &Schema,
    field: &FieldDescriptor,
    nested: &Schema,
    context: RenderContext<'_>,
    out: &mut String,
) -> Result<(), GenConfigError> {
    push_header(out, &context, field.name);

    let source = match context.resolve(field) {
        Some(FieldValue::Struct(value)) => Some(value),
        Some(other) => {
            debug!(
                type_name = schema.type_name,
                field = field.ident,
                shape = other.shape(),
                "nested value has the wrong shape; rendering defaults"
            );
            None
        }
        None => None,
    };
    render_fields(nested, context.nested(source), out)?;

    if context.is_top_level() {
        out.push('\n');
    }
    Ok(())
}

fn render_map(
    schema: &Schema,
    field: &FieldDescriptor,
    values: &Schema,
    context: RenderContext<'_>,
    out: &mut String,
) -> Result<(), GenConfigError> {
    let entries = match context.resolve(field) {
        Some(FieldValue::Map(entries)) => entries,
        None => Vec::new(),
        Some(other) => return Err(shape_mismatch(schema, field, &other)),
    };

    push_header(out, &context, field.name);
    let key_context = context.deeper();
    for (key, value) in entries {
        push_header(out, &key_context, &key);
        render_fields(values, key_context.nested(Some(value)), out)?;
    }

    if context.is_top_level() {
        out.push('\n');
    }
    Ok(())
}

fn render_list(
    schema: &Schema,
    field: &FieldDescriptor,
    context: RenderContext<'_>,
    out: &mut String,
) -> Result<(), GenConfigError> {
    let live = match context.resolve(field) {
        Some(FieldValue::List(items)) => items,
        None => Vec::new(),
        Some(other) => return Err(shape_mismatch(schema, field, &other)),
    };

    let items: Vec<String> = if live.is_empty() || context.defaults_only {
        field.default_items().map(str::to_owned).collect()
    } else {
        live.into_iter()
            .map(|item| match field.comment {
                Some(comment) => format!("{item} # {comment}"),
                None => item,
            })
            .collect()
    };

    push_header(out, &context, field.name);
    let indent = context.deeper().indent();
    for item in items {
        out.push_str(&format!("{indent}- {}\n", item.trim()));
    }
    Ok(())
}

fn render_primitive(
    schema: &Schema,
    field: &FieldDescriptor,
    context: RenderContext<'_>,
    out: &mut String,
) {
    let live = if context.defaults_only {
        None
    } else {
        resolve_scalar(schema, field, &context)
    };
    let value = live.as_deref().or(field.default).unwrap_or_default();

    let mut line = context.indent();
    line.push_str(field.name);
    line.push(':');
    if !value.is_empty() {
        line.push(' ');
        line.push_str(value);
    }
    if let Some(comment) = field.comment {
        line.push_str(" # ");
        line.push_str(comment);
    }
    if !field.required {
        line.push_str(if field.comment.is_some() {
            " (optional)"
        } else {
            " # (optional)"
        });
    }
    line.push('\n');
    out.push_str(&line);
}

fn resolve_scalar(
    schema: &Schema,
    field: &FieldDescriptor,
    context: &RenderContext<'_>,
) -> Option<String> {
    match context.resolve(field) {
        Some(FieldValue::Scalar(text)) => Some(text),
        Some(other) => {
            debug!(
                type_name = schema.type_name,
                field = field.ident,
                shape = other.shape(),
                "primitive value has the wrong shape; using default"
            );
            None
        }
        None => {
            debug!(
                type_name = schema.type_name,
                field = field.ident,
                "no live value; using default"
            );
            None
        }
    }
}

fn push_header(out: &mut String, context: &RenderContext<'_>, name: &str) {
    out.push_str(&context.indent());
    out.push_str(name);
    out.push_str(":\n");
}

fn shape_mismatch(
    schema: &Schema,
    field: &FieldDescriptor,
    found: &FieldValue<'_>,
) -> GenConfigError {
    GenConfigError::ShapeMismatch {
        type_name: schema.type_name,
        field: field.ident,
        expected: field.kind.label(),
        found: found.shape(),
    }
}
