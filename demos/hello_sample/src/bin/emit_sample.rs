//! Writes `config.yaml.sample` for the hello sample demo into the working
//! directory and prints its path.

use camino::Utf8Path;
use std::io::{self, Write};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = hello_sample::emit_sample(Utf8Path::new("."))?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{path}")?;
    Ok(())
}
