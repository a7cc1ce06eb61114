//! `enumgen` writes lookup and validation helpers for a group of typed integer constants.

mod logging;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use enums_codegen::{Case, GeneratorConfig};

#[derive(Debug, Parser)]
#[command(name = "enumgen", version, about)]
struct Args {
    /// Name of the tuple struct whose constants are collected.
    #[arg(long = "type", value_name = "NAME")]
    type_name: String,

    /// Rust source file declaring the type and its constants.
    #[arg(long, env = "ENUMGEN_FILE")]
    source: PathBuf,

    /// Output file, `<source stem>_enum.rs` next to the source by default.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Case convention of the listed names.
    #[arg(long, value_enum, default_value_t = Case::Verbatim)]
    case: Case,

    /// Path of the runtime crate in the generated code.
    #[arg(long, default_value = "::enums")]
    runtime: String,

    /// Also generate the `enumeration()` accessor backed by the runtime registry.
    #[arg(long)]
    registry: bool,

    /// Leave the time of generation out of the header.
    #[arg(long)]
    no_timestamp: bool,

    /// Do not format the output with rustfmt.
    #[arg(long)]
    no_rustfmt: bool
}

impl From<Args> for GeneratorConfig {
    fn from(args: Args) -> Self {
        Self {
            output: args.output,
            case: args.case,
            runtime: args.runtime,
            registry: args.registry,
            timestamp: !args.no_timestamp,
            rustfmt: !args.no_rustfmt
        }
    }
}

fn main() -> anyhow::Result<()> {
    logging::init();

    let args = Args::parse();
    let source = args.source.clone();
    let type_name = args.type_name.clone();

    enums_codegen::generate_to_file(&source, &type_name, &args.into())
        .with_context(|| format!("failed to generate {} from {}", type_name, source.display()))?;

    Ok(())
}
