//! Generates the wrapper family into `$OUT_DIR/runnable_args.rs`.

use std::path::PathBuf;

use anyhow::Context;
use runnable_gen::{generate, GenConfig};

fn main() -> anyhow::Result<()> {
    println!("cargo:rerun-if-changed=build.rs");

    let generated = generate(&GenConfig::default())?;
    let out_dir = std::env::var_os("OUT_DIR").context("OUT_DIR is not set")?;
    let out = PathBuf::from(out_dir).join("runnable_args.rs");
    std::fs::write(&out, generated.render())
        .with_context(|| format!("failed to write {}", out.display()))?;
    Ok(())
}
