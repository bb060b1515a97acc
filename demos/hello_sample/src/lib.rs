//! Configuration types for the `hello_sample` demo.
//!
//! The demo greets a list of recipients and forwards greetings to named
//! relays. Its configuration exercises every field shape the sample
//! generator understands.

use std::collections::BTreeMap;

use camino::Utf8Path;
use genconfig::{GenConfigError, SampleConfig, SampleFile};

/// Where greetings are forwarded.
#[derive(Debug, Clone, PartialEq, Eq, SampleConfig)]
pub struct Relay {
    /// Host receiving forwarded greetings.
    #[sample(default = "relay.local", comment = "relay host")]
    pub host: String,
    /// TCP port of the relay.
    #[sample(default = 7000)]
    pub port: u16,
}

/// Output formatting.
#[derive(Debug, Clone, PartialEq, Eq, SampleConfig)]
pub struct Style {
    /// Word placed before each recipient.
    #[sample(default = "Hello", comment = "greeting word")]
    pub salutation: String,
    /// Upper-case the whole greeting.
    #[sample(default = false, required = false)]
    pub shout: bool,
}

/// Top-level demo configuration.
#[derive(Debug, Clone, PartialEq, Eq, SampleConfig)]
pub struct HelloConfig {
    /// Recipients greeted on each run.
    #[sample(default = "World", comment = "who to greet")]
    pub recipients: Vec<String>,
    /// Formatting options.
    pub style: Style,
    /// Relays keyed by name.
    pub relays: BTreeMap<String, Relay>,
    /// Seconds between greetings; unset greets once.
    #[sample(comment = "repeat interval in seconds", required = false)]
    pub interval: Option<u64>,
}

impl Default for HelloConfig {
    fn default() -> Self {
        Self {
            recipients: vec!["World".to_owned()],
            style: Style {
                salutation: "Hello".to_owned(),
                shout: false,
            },
            relays: BTreeMap::from([(
                "primary".to_owned(),
                Relay {
                    host: "relay.local".to_owned(),
                    port: 7000,
                },
            )]),
            interval: None,
        }
    }
}

/// Writes `config.yaml.sample` for the default configuration into `dir`.
///
/// # Errors
///
/// Returns the render or write failure from `genconfig`.
pub fn emit_sample(dir: &Utf8Path) -> Result<camino::Utf8PathBuf, GenConfigError> {
    SampleFile::default()
        .in_dir(dir.to_path_buf())
        .generate(&HelloConfig::default())
}
