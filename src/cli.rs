//! Minimal CLI: sample JSON → (dart | ir)
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use serde_json::Value;

use crate::{Error, NumberHints};

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// generate Dart model classes with fromJson/toJson from a sample JSON document
#[derive(Parser, Debug)]
#[command(name = "json-dart", version)]
pub struct CommandLineInterface {
    #[command(subcommand)]
    cmd: Command,

    /// more log output (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// generate a .dart file named after the class
    Dart(DartOut),
    /// print the inferred class descriptions as JSON
    Ir(IrOut),
}

#[derive(Args, Debug, Clone)]
pub struct InputSettings {
    /// root class name, e.g. `UserProfile`
    #[arg(long, short)]
    pub class_name: String,

    /// sample JSON file, or '-' for stdin
    #[arg(long, short, default_value = "-")]
    pub input: String,

    /// JSON Pointer to select a subnode of the document (e.g. /data/items/0)
    #[arg(long)]
    pub json_pointer: Option<String>,
}

#[derive(clap::Parser, Debug)]
struct DartOut {
    #[command(flatten)]
    input_settings: InputSettings,

    /// directory to write `<snake_case_name>.dart` into
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// print the generated code instead of writing a file
    #[arg(long)]
    stdout: bool,

    /// overwrite an existing file
    #[arg(short, long)]
    force: bool,

    /// debugging
    #[arg(long)]
    no_op: bool,
}

#[derive(clap::Parser, Debug)]
struct IrOut {
    #[command(flatten)]
    input_settings: InputSettings,

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

impl InputSettings {
    /// Read the raw text, parse it, sniff hints and apply the pointer.
    pub fn load(&self) -> crate::Result<(Value, NumberHints)> {
        crate::validate_class_name(&self.class_name)?;
        let raw = read_source(&self.input)?;
        let (value, hints) = crate::parse_sample(&raw)?;
        let value = crate::select(value, self.json_pointer.as_deref())?;
        Ok((value, hints))
    }
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }
    pub fn run(&self) -> anyhow::Result<()> {
        match &self.cmd {
            Command::Dart(target) => {
                // debug path
                if target.no_op {
                    eprintln!("{self:#?}");
                    return Ok(());
                }

                let settings = &target.input_settings;
                let (value, hints) = settings.load()?;
                let dart_src = crate::generate(&settings.class_name, &value, &hints)?;

                if target.stdout {
                    println!("{dart_src}");
                } else {
                    let path = write_output(&target.out_dir, &settings.class_name, &dart_src, target.force)?;
                    eprintln!("{} {}", "generated".green().bold(), path.display());
                }
            }
            Command::Ir(target) => {
                // debug path
                if target.no_op {
                    eprintln!("{self:#?}");
                    return Ok(());
                }

                let settings = &target.input_settings;
                let (value, hints) = settings.load()?;
                let generated = crate::infer(&settings.class_name, &value, &hints)?;
                let ir_src = serde_json::to_string_pretty(&generated)
                    .context("failed to serialize class descriptions")?;

                if let Some(out) = target.out.as_ref() {
                    if let Some(parent) = out.parent() {
                        std::fs::create_dir_all(parent)
                            .with_context(|| format!("failed to create {}", parent.display()))?;
                    }
                    std::fs::write(out, &ir_src)
                        .with_context(|| format!("failed to write {}", out.display()))?;
                } else {
                    println!("{ir_src}");
                }
            }
        }
        Ok(())
    }
}

/// Write generated code as `<dir>/<snake_case(class_name)>.dart`.
///
/// An existing file is only replaced when `force` is set.
pub fn write_output(dir: &Path, class_name: &str, code: &str, force: bool) -> crate::Result<PathBuf> {
    let path = dir.join(crate::file_name_for(class_name));
    if path.exists() {
        if !force {
            return Err(Error::OutputExists(path));
        }
        tracing::info!(path = %path.display(), "overwriting existing file");
    }
    std::fs::create_dir_all(dir).map_err(|source| Error::Io { path: dir.to_path_buf(), source })?;
    std::fs::write(&path, code).map_err(|source| Error::Io { path: path.clone(), source })?;
    tracing::info!(path = %path.display(), bytes = code.len(), "wrote dart file");
    Ok(path)
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn read_source(input: &str) -> crate::Result<String> {
    if input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|source| Error::Io { path: PathBuf::from("<stdin>"), source })?;
        return Ok(buf);
    }
    std::fs::read_to_string(input).map_err(|source| Error::Io { path: PathBuf::from(input), source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dart_subcommand() {
        let cli = CommandLineInterface::try_parse_from([
            "json-dart", "dart", "-c", "User", "-i", "user.json", "--force", "-vv",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        let Command::Dart(target) = cli.cmd else { panic!("expected dart subcommand") };
        assert_eq!(target.input_settings.class_name, "User");
        assert_eq!(target.input_settings.input, "user.json");
        assert_eq!(target.out_dir, PathBuf::from("."));
        assert!(target.force);
        assert!(!target.stdout);
    }

    #[test]
    fn input_defaults_to_stdin() {
        let cli = CommandLineInterface::try_parse_from(["json-dart", "ir", "--class-name", "Root"]).unwrap();
        let Command::Ir(target) = cli.cmd else { panic!("expected ir subcommand") };
        assert_eq!(target.input_settings.input, "-");
        assert!(target.out.is_none());
    }

    #[test]
    fn class_name_is_required() {
        assert!(CommandLineInterface::try_parse_from(["json-dart", "dart", "-i", "x.json"]).is_err());
    }
}
