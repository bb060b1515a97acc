//! Sample file writer using `cap_std` for filesystem operations.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::{Dir, OpenOptions};
use std::io::Write;

use crate::error::GenConfigError;
use crate::render::{RenderOptions, Renderer};
use crate::value::SampleConfig;

/// Conventional name of the generated sample file.
pub const SAMPLE_FILE_NAME: &str = "config.yaml.sample";

/// Where and how a sample file is generated.
///
/// Defaults to `config.yaml.sample` in the working directory with
/// defaults-only rendering, so live values never leak into the sample.
///
/// ```no_run
/// use genconfig::{SampleConfig, SampleFile};
///
/// #[derive(SampleConfig)]
/// struct Config {
///     #[sample(default = "info", comment = "log level")]
///     log_level: String,
/// }
///
/// let config = Config { log_level: "debug".into() };
/// let path = SampleFile::default().in_dir("target").generate(&config)?;
/// # Ok::<(), genconfig::GenConfigError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleFile {
    dir: Utf8PathBuf,
    file_name: String,
    defaults_only: bool,
}

impl Default for SampleFile {
    fn default() -> Self {
        Self {
            dir: Utf8PathBuf::from("."),
            file_name: SAMPLE_FILE_NAME.to_owned(),
            defaults_only: true,
        }
    }
}

impl SampleFile {
    /// Writes into `dir` instead of the working directory.
    #[must_use]
    pub fn in_dir(mut self, dir: impl Into<Utf8PathBuf>) -> Self {
        self.dir = dir.into();
        self
    }

    /// Overrides the file name.
    #[must_use]
    pub fn file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    /// Chooses whether live values are ignored.
    #[must_use]
    pub const fn defaults_only(mut self, defaults_only: bool) -> Self {
        self.defaults_only = defaults_only;
        self
    }

    /// Full path of the file this configuration writes.
    #[must_use]
    pub fn path(&self) -> Utf8PathBuf {
        self.dir.join(&self.file_name)
    }

    /// Renders `config` and writes it, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns the render error unchanged, or [`GenConfigError::Io`] when the
    /// directory or file cannot be prepared or written.
    pub fn generate<T: SampleConfig>(&self, config: &T) -> Result<Utf8PathBuf, GenConfigError> {
        let renderer = Renderer::new(RenderOptions {
            defaults_only: self.defaults_only,
        });
        let contents = renderer.render(config)?;
        write_sample(&self.dir, &self.file_name, &contents)
    }
}

/// Writes `config.yaml.sample` for `config` into the working directory.
///
/// # Errors
///
/// See [`SampleFile::generate`].
pub fn generate_sample<T: SampleConfig>(config: &T) -> Result<Utf8PathBuf, GenConfigError> {
    SampleFile::default().generate(config)
}

/// Writes `contents` to `dir/file_name`.
///
/// A pre-existing file is removed before a fresh one is created, so no stale
/// content survives a shorter write. The directory is created when missing.
///
/// # Errors
///
/// Returns [`GenConfigError::Io`] for any filesystem failure.
pub fn write_sample(
    dir: &Utf8Path,
    file_name: &str,
    contents: &str,
) -> Result<Utf8PathBuf, GenConfigError> {
    let handle = open_output_dir(dir)?;
    let file_path = dir.join(file_name);

    match handle.remove_file(file_name) {
        Ok(()) => {}
        Err(io_err) if io_err.kind() == std::io::ErrorKind::NotFound => {}
        Err(io_err) => {
            return Err(GenConfigError::Io {
                path: file_path,
                source: io_err,
            });
        }
    }

    let mut file = handle
        .open_with(file_name, OpenOptions::new().write(true).create_new(true))
        .map_err(|io_err| GenConfigError::Io {
            path: file_path.clone(),
            source: io_err,
        })?;

    file.write_all(contents.as_bytes())
        .and_then(|()| file.sync_all())
        .map_err(|io_err| GenConfigError::Io {
            path: file_path.clone(),
            source: io_err,
        })?;

    tracing::info!(path = %file_path, bytes = contents.len(), "wrote sample configuration");
    Ok(file_path)
}

/// Opens `path` for writing, creating it and any missing parents first.
fn open_output_dir(path: &Utf8Path) -> Result<Dir, GenConfigError> {
    let at_path = |source: std::io::Error| GenConfigError::Io {
        path: path.to_path_buf(),
        source,
    };
    if !path.is_dir() {
        Dir::create_ambient_dir_all(path, ambient_authority()).map_err(at_path)?;
    }
    Dir::open_ambient_dir(path, ambient_authority()).map_err(at_path)
}
