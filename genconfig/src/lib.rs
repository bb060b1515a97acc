//! Core crate for generating commented sample configuration files.
//!
//! Annotate a configuration struct with `#[derive(SampleConfig)]` and
//! `#[sample(...)]` field attributes, then call [`render`] for the text or
//! [`generate_sample`] to write `config.yaml.sample`. The derive macro lives
//! in the companion `genconfig_macros` crate.
//!
//! ```
//! use std::collections::BTreeMap;
//! use genconfig::SampleConfig;
//!
//! #[derive(SampleConfig)]
//! struct Upstream {
//!     #[sample(default = "localhost")]
//!     host: String,
//! }
//!
//! #[derive(SampleConfig)]
//! struct Config {
//!     #[sample(default = "app")]
//!     name: String,
//!     upstreams: BTreeMap<String, Upstream>,
//! }
//!
//! let mut upstreams = BTreeMap::new();
//! upstreams.insert("primary".to_owned(), Upstream { host: "db1".into() });
//! let config = Config { name: "app".into(), upstreams };
//!
//! let text = genconfig::render(&config, false)?;
//! assert_eq!(text, "name: app\nupstreams:\n  primary:\n    host: db1");
//! # Ok::<(), genconfig::GenConfigError>(())
//! ```

// Generated code names this crate by path, including inside its own tests.
extern crate self as genconfig;

pub use genconfig_macros::SampleConfig;

mod error;
mod output;
mod render;
mod schema;
mod value;

pub use error::GenConfigError;
pub use output::{SAMPLE_FILE_NAME, SampleFile, generate_sample, write_sample};
pub use render::{RenderOptions, Renderer, render};
pub use schema::{FieldDescriptor, FieldKind, Schema, SchemaFn};
pub use value::{FieldValue, SampleConfig};
