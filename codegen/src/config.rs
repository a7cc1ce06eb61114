//! Contains the settings of a generator run.

use std::path::PathBuf;

use heck::{ToKebabCase, ToShoutySnakeCase, ToSnakeCase, ToUpperCamelCase};

/// The case convention of the generated names.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, clap::ValueEnum)]
pub enum Case {
    /// Keep the constant identifier as it is.
    #[default]
    Verbatim,
    /// `LIGHT_ON` becomes `LightOn`.
    Pascal,
    /// `LIGHT_ON` becomes `light_on`.
    Snake,
    /// `LIGHT_ON` becomes `light-on`.
    Kebab,
    /// `LightOn` becomes `lighton`.
    Lower,
    /// `LightOn` becomes `LIGHT_ON`.
    Upper
}

impl Case {
    pub fn apply(self, ident: &str) -> String {
        match self {
            Self::Verbatim => ident.to_string(),
            Self::Pascal => ident.to_upper_camel_case(),
            Self::Snake => ident.to_snake_case(),
            Self::Kebab => ident.to_kebab_case(),
            Self::Lower => ident.to_lowercase(),
            Self::Upper => ident.to_shouty_snake_case()
        }
    }
}

/// Everything a generator run needs to know besides the source file and the type name.
#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    /// Where to write the generated file, `<source stem>_enum.rs` next to the source by default.
    pub output: Option<PathBuf>,
    pub case: Case,
    /// The path of the runtime crate in the generated code.
    pub runtime: String,
    /// Whether to generate the `enumeration()` accessor.
    pub registry: bool,
    /// Whether the header records the time of generation.
    pub timestamp: bool,
    /// Whether the written file is formatted with `rustfmt`.
    pub rustfmt: bool
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output: None,
            case: Case::default(),
            runtime: "::enums".into(),
            registry: false,
            timestamp: true,
            rustfmt: true
        }
    }
}
