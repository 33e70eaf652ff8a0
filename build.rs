//! Build script for saavnfetch.
//!
//! Places the `.env.example` template next to where the binary looks for its
//! `.env` file, so users can copy and edit it in place:
//! - Linux: `~/.local/share/saavnfetch/.env.example`
//! - macOS: `~/Library/Application Support/saavnfetch/.env.example`
//! - Windows: `%LOCALAPPDATA%/saavnfetch/.env.example`
//!
//! A missing template only produces a cargo warning. Failing to create the
//! data directory or to write the copy fails the build.

use std::{env, fs, path::PathBuf};

const TEMPLATE: &str = ".env.example";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed={}", TEMPLATE);

    let template = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?).join(TEMPLATE);

    let mut data_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    data_dir.push("saavnfetch");
    fs::create_dir_all(&data_dir)?;

    if !template.is_file() {
        println!("cargo:warning={} not found at {}", TEMPLATE, template.display());
        return Ok(());
    }

    fs::copy(&template, data_dir.join(TEMPLATE))?;
    Ok(())
}
