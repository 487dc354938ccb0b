//! Minimal CLI: configure → (generate | manifest)
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;

use crate::config::{GenConfig, Overrides};
use crate::driver::{generate, Generated};
use crate::ir::Target;
use crate::manifest::Manifest;

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// generate deferred-call wrapper types and factories for a range of arities
#[derive(Parser, Debug)]
#[command(name = "runnable-gen", version)]
pub struct CommandLineInterface {
    #[command(subcommand)]
    cmd: Command,

    /// more log output (-v info, -vv debug, -vvv trace); RUNNABLE_GEN_LOG wins when set
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// emit wrapper types followed by their factories
    Generate(GenerateOut),
    /// emit a JSON description of what `generate` would produce
    Manifest(ManifestOut),
}

#[derive(Args, Debug, Clone)]
struct GenSettings {
    /// JSON config file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// exclusive arity bound (arities 1..N-1 are generated)
    #[arg(long)]
    max_args: Option<usize>,

    /// output dialect
    #[arg(long, value_enum)]
    target: Option<Target>,

    /// Rust path resolving `Runnable`, `Status` and `ResultSlot`
    #[arg(long)]
    runtime_path: Option<String>,

    /// C++ include guard wrapped around the output
    #[arg(long)]
    include_guard: Option<String>,
}

#[derive(clap::Parser, Debug)]
struct GenerateOut {
    #[command(flatten)]
    settings: GenSettings,

    /// output file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// compare `--out` with fresh output instead of writing it
    #[arg(long, requires = "out")]
    check: bool,

    /// debugging
    #[arg(long)]
    no_op: bool,
}

#[derive(clap::Parser, Debug)]
struct ManifestOut {
    #[command(flatten)]
    settings: GenSettings,

    /// output .json file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// debugging
    #[arg(long)]
    no_op: bool,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl GenSettings {
    fn resolve(&self) -> Result<GenConfig> {
        let base = match self.config.as_ref() {
            Some(path) => GenConfig::load(path)?,
            None => GenConfig::default(),
        };
        let config = base.with_overrides(Overrides {
            max_args: self.max_args,
            target: self.target,
            runtime_path: self.runtime_path.clone(),
            include_guard: self.include_guard.clone(),
        })?;
        Ok(config)
    }

    fn run(&self) -> Result<Generated> {
        let config = self.resolve()?;
        let generated = generate(&config)?;
        if generated.is_empty() {
            tracing::warn!(max_args = config.max_args, "arity bound leaves nothing to generate");
        }
        Ok(generated)
    }
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }

    pub fn verbosity(&self) -> u8 {
        self.verbose
    }

    pub fn run(&self) -> Result<()> {
        match &self.cmd {
            Command::Generate(target) => {
                // debug path
                if target.no_op {
                    eprintln!("{self:#?}");
                    return Ok(());
                }

                let generated = target.settings.run()?;
                let source = generated.render();
                let count = generated.declarations().len();

                match target.out.as_ref() {
                    Some(out) if target.check => check_file(out, &source)?,
                    Some(out) => {
                        write_file(out, &source)?;
                        eprintln!(
                            "{} {} ({count} declarations, {})",
                            "wrote".green().bold(),
                            out.display(),
                            generated.target(),
                        );
                    }
                    None => print!("{source}"),
                }
            }
            Command::Manifest(target) => {
                // debug path
                if target.no_op {
                    eprintln!("{self:#?}");
                    return Ok(());
                }

                let generated = target.settings.run()?;
                let manifest_src = Manifest::from_generated(&generated)
                    .to_json_pretty()
                    .context("failed to serialize manifest")?;

                if let Some(out) = target.out.as_ref() {
                    write_file(out, &manifest_src)?;
                    eprintln!("{} {}", "wrote".green().bold(), out.display());
                } else {
                    println!("{manifest_src}");
                }
            }
        }
        Ok(())
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn write_file(out: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(out, contents).with_context(|| format!("failed to write {}", out.display()))
}

/// Reproducible-build check: the file on disk must equal fresh output.
fn check_file(out: &Path, expected: &str) -> Result<()> {
    let current = std::fs::read_to_string(out)
        .with_context(|| format!("failed to read {}", out.display()))?;
    if current != expected {
        eprintln!("{} {}", "stale".red().bold(), out.display());
        bail!("{} differs from generator output; rerun `runnable-gen generate`", out.display());
    }
    eprintln!("{} {}", "up to date".green().bold(), out.display());
    Ok(())
}

// ------------------------------- Tests ------------------------------------ //

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> CommandLineInterface {
        let mut argv = vec!["runnable-gen"];
        argv.extend_from_slice(args);
        CommandLineInterface::try_parse_from(argv).unwrap()
    }

    #[test]
    fn generate_writes_file_and_check_accepts_it() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nested/runnable_args.rs");
        let out_str = out.to_str().unwrap();

        cli(&["generate", "--max-args", "4", "-o", out_str]).run().unwrap();
        let written = std::fs::read_to_string(&out).unwrap();
        let fresh = generate(&GenConfig { max_args: 4, ..GenConfig::default() }).unwrap().render();
        assert_eq!(written, fresh);

        cli(&["generate", "--max-args", "4", "-o", out_str, "--check"]).run().unwrap();
    }

    #[test]
    fn check_rejects_stale_output() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("runnable_utils_generated.h");
        let out_str = out.to_str().unwrap();

        cli(&["generate", "--target", "cpp", "--max-args", "3", "-o", out_str]).run().unwrap();
        let err = cli(&["generate", "--target", "cpp", "--max-args", "4", "-o", out_str, "--check"])
            .run()
            .unwrap_err();
        assert!(err.to_string().contains("differs from generator output"));
    }

    #[test]
    fn check_requires_out() {
        let argv = ["runnable-gen", "generate", "--check"];
        assert!(CommandLineInterface::try_parse_from(argv).is_err());
    }

    #[test]
    fn config_file_then_flags() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("gen.json");
        std::fs::write(&config, r#"{"target": "cpp", "max_args": 9, "include_guard": "G_H"}"#).unwrap();
        let out = dir.path().join("manifest.json");

        cli(&[
            "manifest",
            "--config",
            config.to_str().unwrap(),
            "--max-args",
            "2",
            "-o",
            out.to_str().unwrap(),
        ])
        .run()
        .unwrap();

        let json: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(json["target"], "cpp");
        assert_eq!(json["max_args"], 2);
        assert!(json["declarations"]["WrapRunnable1Ret"].is_object());
    }

    #[test]
    fn bad_config_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("gen.json");
        std::fs::write(&config, r#"{"runtime_path": "not a path"}"#).unwrap();
        let err = cli(&["generate", "--config", config.to_str().unwrap()]).run().unwrap_err();
        assert!(err.to_string().contains("runtime_path"));
    }

    #[test]
    fn verbose_is_counted_globally() {
        assert_eq!(cli(&["generate", "-vv", "--no-op"]).verbosity(), 2);
    }
}
