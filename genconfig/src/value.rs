//! Live field values and the [`SampleConfig`] trait.

use std::fmt::Display;

use crate::schema::Schema;

/// Implemented by configuration types that can be rendered as a sample file.
///
/// The derive macro generates both halves: a static [`Schema`] describing
/// the fields, and [`field_value`](Self::field_value), which resolves the
/// live value of one field by its Rust identifier.
///
/// ```
/// use genconfig::SampleConfig;
///
/// #[derive(SampleConfig)]
/// struct Server {
///     #[sample(default = "app")]
///     name: String,
///     #[sample(default = 8080, comment = "listen port")]
///     port: u16,
/// }
///
/// let server = Server { name: "app".into(), port: 8080 };
/// let text = genconfig::render(&server, false)?;
/// assert_eq!(text, "name: app\nport: 8080 # listen port");
/// # Ok::<(), genconfig::GenConfigError>(())
/// ```
pub trait SampleConfig {
    /// Returns the descriptor table for this type.
    fn schema() -> &'static Schema
    where
        Self: Sized;

    /// Resolves the live value of the field named `ident`.
    ///
    /// Returns `None` when the value is unavailable, for example an unset
    /// `Option` or an identifier the type does not know. Callers fall back
    /// to the declared default in that case.
    fn field_value(&self, ident: &str) -> Option<FieldValue<'_>>;
}

/// Live value of a single field.
pub enum FieldValue<'a> {
    /// Text form of a primitive.
    Scalar(String),
    /// A nested structure.
    Struct(&'a dyn SampleConfig),
    /// Entries of a keyed collection in rendering order.
    Map(Vec<(String, &'a dyn SampleConfig)>),
    /// Text form of each list element.
    List(Vec<String>),
}

impl<'a> FieldValue<'a> {
    /// Wraps the text form of a primitive value.
    pub fn scalar<T>(value: &T) -> Self
    where
        T: Display + ?Sized,
    {
        Self::Scalar(value.to_string())
    }

    /// Collects the text form of each list element.
    pub fn list<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = &'a T>,
        T: Display + 'a,
    {
        Self::List(items.into_iter().map(ToString::to_string).collect())
    }

    /// Collects map entries, keeping the collection's own iteration order.
    pub fn map<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a K, &'a V)>,
        K: Display + 'a,
        V: SampleConfig + 'a,
    {
        Self::Map(
            entries
                .into_iter()
                .map(|(key, value)| (key.to_string(), value as &dyn SampleConfig))
                .collect(),
        )
    }

    /// Collects map entries and sorts them by key text.
    ///
    /// Used for hash maps so repeated renders produce identical output.
    pub fn unordered_map<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a K, &'a V)>,
        K: Display + 'a,
        V: SampleConfig + 'a,
    {
        let mut collected: Vec<(String, &'a dyn SampleConfig)> = entries
            .into_iter()
            .map(|(key, value)| (key.to_string(), value as &dyn SampleConfig))
            .collect();
        collected.sort_by(|left, right| left.0.cmp(&right.0));
        Self::Map(collected)
    }

    /// Short label of the value's shape, used in diagnostics.
    #[must_use]
    pub const fn shape(&self) -> &'static str {
        match self {
            Self::Scalar(_) => "primitive",
            Self::Struct(_) => "nested structure",
            Self::Map(_) => "keyed collection",
            Self::List(_) => "list",
        }
    }
}
