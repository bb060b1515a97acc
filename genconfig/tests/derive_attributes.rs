//! Tests for attribute handling in the `SampleConfig` derive.

use std::collections::HashMap;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr};

use anyhow::{Result, ensure};
use genconfig::{FieldKind, SampleConfig, render};
use serde::Serialize;

#[derive(Serialize, SampleConfig)]
#[serde(rename_all = "kebab-case")]
struct Server {
    #[sample(default = "0.0.0.0", comment = "bind address")]
    bind_address: IpAddr,
    #[serde(rename = "listenPort")]
    #[sample(default = 8080)]
    listen_port: u16,
    #[sample(name = "TLS", default = false, required = false)]
    tls_enabled: bool,
}

fn server() -> Server {
    Server {
        bind_address: IpAddr::V4(Ipv4Addr::LOCALHOST),
        listen_port: 9000,
        tls_enabled: true,
    }
}

#[test]
fn keys_follow_sample_then_serde_naming() -> Result<()> {
    let text = render(&server(), false)?;
    ensure!(
        text == "bind-address: 127.0.0.1 # bind address\nlistenPort: 9000\nTLS: true # (optional)",
        "unexpected output:\n{text}"
    );
    Ok(())
}

#[test]
fn serde_attributes_coexist_with_sample_names() -> Result<()> {
    let server = server();
    let names: Vec<&str> = Server::schema().fields.iter().map(|field| field.name).collect();
    ensure!(
        names == ["bind-address", "listenPort", "TLS"],
        "unexpected names {names:?}"
    );
    ensure!(
        server.listen_port == 9000 && server.tls_enabled,
        "fixture mismatch"
    );
    Ok(())
}

#[derive(Clone, Copy)]
enum Level {
    Info,
    Debug,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Info => "info",
            Self::Debug => "debug",
        })
    }
}

#[derive(SampleConfig)]
#[sample(rename_all = "SCREAMING_SNAKE_CASE")]
struct Logging {
    #[sample(scalar, default = "info", comment = "minimum level")]
    log_level: Level,
    #[sample(scalar)]
    fallback_level: Option<Level>,
    #[sample(skip)]
    sink: Vec<Box<dyn fmt::Debug>>,
}

#[test]
fn scalar_fields_render_through_display() -> Result<()> {
    let logging = Logging {
        log_level: Level::Debug,
        fallback_level: Some(Level::Info),
        sink: Vec::new(),
    };
    ensure!(logging.sink.is_empty(), "fixture should have no sinks");
    let text = render(&logging, false)?;
    ensure!(
        text == "LOG_LEVEL: debug # minimum level\nFALLBACK_LEVEL: info",
        "unexpected output:\n{text}"
    );
    Ok(())
}

#[test]
fn skipped_fields_are_absent_from_the_schema() {
    let fields = Logging::schema().fields;
    assert_eq!(fields.len(), 2);
    assert!(fields.iter().all(|field| field.name != "SINK"));
}

#[derive(SampleConfig)]
struct Keywords {
    #[sample(default = "auto")]
    r#type: String,
    #[sample(default = 'x')]
    marker: char,
    #[sample(default = -1)]
    offset: i32,
    #[sample(default = 0.5)]
    ratio: f64,
}

#[test]
fn literal_defaults_render_as_written() -> Result<()> {
    let keywords = Keywords {
        r#type: "manual".into(),
        marker: 'y',
        offset: 3,
        ratio: 1.0,
    };
    let text = render(&keywords, true)?;
    ensure!(
        text == "type: auto\nmarker: x\noffset: -1\nratio: 0.5",
        "unexpected output:\n{text}"
    );
    Ok(())
}

#[derive(SampleConfig)]
struct Endpoint {
    #[sample(default = "http")]
    scheme: String,
}

#[derive(SampleConfig)]
struct Gateway {
    endpoints: HashMap<String, Endpoint>,
    coordinates: [u8; 2],
    handler: Option<Box<Endpoint>>,
}

#[test]
fn schema_records_field_kinds() {
    let gateway = Gateway {
        endpoints: HashMap::from([(
            "public".to_owned(),
            Endpoint {
                scheme: "https".into(),
            },
        )]),
        coordinates: [1, 2],
        handler: None,
    };
    assert_eq!(gateway.coordinates, [1, 2]);
    assert!(gateway.handler.is_none());
    assert_eq!(gateway.endpoints.len(), 1);

    let kinds: Vec<&str> = Gateway::schema()
        .fields
        .iter()
        .map(|field| field.kind.label())
        .collect();
    assert_eq!(kinds, ["keyed collection", "unsupported", "indirection"]);
    assert!(matches!(
        Gateway::schema().fields.first().map(|field| field.kind),
        Some(FieldKind::Map(_))
    ));
}

mod aliased {
    //! Generated code honours `#[sample(crate = "...")]`.

    use genconfig as sample_gen;
    use sample_gen::SampleConfig;

    #[derive(SampleConfig)]
    #[sample(crate = "sample_gen")]
    pub(super) struct Aliased {
        #[sample(default = "yes")]
        pub(super) enabled: String,
    }
}

#[test]
fn crate_alias_resolves_runtime_paths() -> Result<()> {
    let aliased = aliased::Aliased {
        enabled: "no".into(),
    };
    let text = render(&aliased, true)?;
    ensure!(text == "enabled: yes", "unexpected output:\n{text}");
    Ok(())
}
