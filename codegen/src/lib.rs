//! This crate serves as the generator behind the [`enums`](../enums/index.html) runtime crate.
//!
//! It reads a Rust source file, finds a tuple struct wrapping an integer primitive and all
//! constants declared with its type, and writes a companion file with lookup and validation
//! helpers for the type. The companion file is meant to be pulled in next to the type:
//!
//! ```ignore
//! pub struct Light(u8);
//!
//! pub const LIGHT_OFF: Light = Light(0);
//! pub const LIGHT_ON: Light = Light(1);
//!
//! include!("light_enum.rs");
//! ```


mod config;
#[macro_use]
pub mod enumeration;
mod error;
mod eval;
pub mod output;
mod primitive;

use std::path::{Path, PathBuf};

pub use config::{Case, GeneratorConfig};
pub use enumeration::{Constant, Enumeration};
pub use error::Error;

/// The rendered companion file of a constant group.
#[derive(Clone, Debug)]
pub struct Generated {
    /// Where the file belongs.
    pub path: PathBuf,
    pub type_name: String,
    pub code: String
}

/// Parses `source` and renders the companion file of the type `type_name`, without writing it.
pub fn generate(source: &Path, type_name: &str, config: &GeneratorConfig) -> Result<Generated, Error> {
    let text = std::fs::read_to_string(source)
        .map_err(|e| Error::Read { path: source.into(), source: e })?;

    let file = syn::parse_file(&text).map_err(|e| Error::parse(source, e))?;

    let mut enumeration = Enumeration::parse(&file, type_name)
        .map_err(|e| Error::parse(source, e))?;
    enumeration.rename(config.case).map_err(|e| Error::parse(source, e))?;

    tracing::debug!(
        "found {} constants of type {} in {}", enumeration.constants.len(), type_name, source.display()
    );

    let runtime: syn::Path = syn::parse_str(&config.runtime)
        .map_err(|_| Error::Runtime(config.runtime.clone()))?;

    let tokens = enumeration.generate(&runtime, config.registry);

    Ok(Generated {
        path: config.output.clone().unwrap_or_else(|| output::default_output_path(source)),
        type_name: type_name.into(),
        code: output::render(&tokens, config.timestamp)
    })
}

/// Generates the companion file of the type `type_name` and writes it, returning its path.
///
/// A failing `rustfmt` only leaves the file unformatted.
pub fn generate_to_file(source: &Path, type_name: &str, config: &GeneratorConfig) -> Result<PathBuf, Error> {
    let generated = generate(source, type_name, config)?;

    output::write(&generated.path, &generated.code)?;

    if config.rustfmt {
        if let Err(e) = output::rustfmt(&generated.path) {
            tracing::warn!("{}", e);
        }
    }

    tracing::info!(
        "Successfully generated {} for {}::{}",
        generated.path.display(), source.display(), generated.type_name
    );

    Ok(generated.path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(dir: &Path, text: &str) -> PathBuf {
        let path = dir.join("Light.rs");
        std::fs::write(&path, text).unwrap();
        path
    }

    fn config() -> GeneratorConfig {
        GeneratorConfig { timestamp: false, rustfmt: false, ..Default::default() }
    }

    #[test]
    fn generate() {
        let dir = tempfile::tempdir().unwrap();
        let path = source(dir.path(), "pub struct Light(u8);\npub const LIGHT_ON: Light = Light(1);\n");

        let generated = super::generate(&path, "Light", &config()).unwrap();

        assert_eq!(generated.path, dir.path().join("light_enum.rs"));
        assert_eq!(generated.type_name, "Light");
        assert!(generated.code.starts_with("// Code generated by enumgen; DO NOT EDIT.\n"));
        assert!(generated.code.contains("LIGHT_ON"));
        assert!(!dir.path().join("light_enum.rs").exists());
    }

    #[test]
    fn generate_errors() {
        let dir = tempfile::tempdir().unwrap();

        let missing = dir.path().join("missing.rs");
        assert!(matches!(super::generate(&missing, "Light", &config()), Err(Error::Read { .. })));

        let path = source(dir.path(), "pub struct Light(u8);\n\npub const LIGHT_ON: Light = Dark(1);\n");
        match super::generate(&path, "Light", &config()) {
            Err(Error::Parse { line, message, .. }) => {
                assert_eq!(line, 3);
                assert_eq!(message, "expected `Light(..)`, `Self(..)` or another constant of type `Light`");
            },
            other => panic!("unexpected result {:?}", other)
        }

        let path = source(dir.path(), "pub struct Light(u8);\npub const LIGHT_ON: Light = Light(1);\n");
        let config = GeneratorConfig { runtime: "::".into(), ..config() };
        assert!(matches!(super::generate(&path, "Light", &config), Err(Error::Runtime(_))));
    }

    #[test]
    fn generate_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = source(dir.path(), "pub struct Light(u8);\npub const LIGHT_ON: Light = Light(1);\n");
        let output = dir.path().join("out.rs");

        let config = GeneratorConfig { output: Some(output.clone()), ..config() };
        assert_eq!(super::generate_to_file(&path, "Light", &config).unwrap(), output);
        assert!(std::fs::read_to_string(&output).unwrap().contains("LIGHT_ON"));
    }

    #[test]
    fn generate_to_file_keeps_unformatted() {
        let dir = tempfile::tempdir().unwrap();
        let path = source(dir.path(), "pub struct Light(u8);\npub const LIGHT_ON: Light = Light(1);\n");
        // rustfmt refuses to run with an unreadable config next to the output.
        std::fs::write(dir.path().join("rustfmt.toml"), "max_width = [\n").unwrap();

        let config = GeneratorConfig { rustfmt: true, ..config() };
        let output = super::generate_to_file(&path, "Light", &config).unwrap();

        assert_eq!(
            std::fs::read_to_string(output).unwrap(),
            super::generate(&path, "Light", &config).unwrap().code
        );
    }
}
