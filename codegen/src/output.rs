//! Contains code to render, write and format the generated file.

use std::path::{Path, PathBuf};

use crate::Error;

/// Returns `<source dir>/<lowercase source stem>_enum.rs`.
pub fn default_output_path(source: &Path) -> PathBuf {
    let stem = source.file_stem()
        .map(|stem| stem.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    source.with_file_name(format!("{}_enum.rs", stem))
}

/// Prepends the header comment to the generated items.
pub fn render(tokens: &proc_macro2::TokenStream, timestamp: bool) -> String {
    let mut code = String::from("// Code generated by enumgen; DO NOT EDIT.\n");
    code.push_str(&format!("// Version: {}\n", env!("CARGO_PKG_VERSION")));
    if timestamp {
        code.push_str(&format!(
            "// Executed At: {}\n",
            chrono::Local::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, false)
        ));
    }
    code.push('\n');
    code.push_str(&tokens.to_string());
    code.push('\n');

    code
}

pub fn write(path: &Path, code: &str) -> Result<(), Error> {
    std::fs::write(path, code).map_err(|source| Error::Write { path: path.into(), source })
}

/// Formats the file at `path` in place.
pub fn rustfmt(path: &Path) -> Result<(), Error> {
    let output = std::process::Command::new("rustfmt")
        .args(["--edition", "2021"])
        .arg(path)
        .output()
        .map_err(|e| Error::Format { path: path.into(), message: e.to_string() })?;

    if output.status.success() {
        Ok(())
    } else {
        Err(Error::Format {
            path: path.into(),
            message: String::from_utf8_lossy(&output.stderr).trim().to_string()
        })
    }
}
