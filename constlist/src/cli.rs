use std::{ffi::OsString, path::PathBuf};

use clap::{Parser, ValueEnum};
use constlist_codegen::OutputTarget;
use eyre::{Context, Result};

use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

/// Long flags that Go's `flag` package spells with a single dash.
const GO_STYLE_FLAGS: [&str; 2] = ["type", "output"];

/// Extension trait for reporting diagnostics without failing the process.
///
/// Source and naming problems are printed with miette's formatting and
/// processing stops, but the exit status stays 0.
pub(crate) trait OkOrReport<T> {
    fn ok_or_report(self) -> Option<T>;
}

impl<T> OkOrReport<T> for constlist_syntax::Result<T> {
    fn ok_or_report(self) -> Option<T> {
        self.map_err(|e| eprintln!("{:?}", miette::Report::new(*e)))
            .ok()
    }
}

impl<T> OkOrReport<T> for constlist_codegen::Result<T> {
    fn ok_or_report(self) -> Option<T> {
        self.map_err(|e| eprintln!("{:?}", miette::Report::new(*e)))
            .ok()
    }
}

/// Format of the `--explain` report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum Format {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "constlist")]
#[command(version)]
#[command(about = "Generate a Go function that lists every constant of a type")]
pub(crate) struct Cli {
    /// Go source file to scan
    pub source: PathBuf,

    /// Type whose constants are listed
    #[arg(short = 't', long = "type", default_value_t = String::new())]
    pub type_name: String,

    /// "stdout", a file name next to the source, or empty for <type>_list.go
    #[arg(short, long, default_value_t = String::new())]
    pub output: String,

    /// Show how each constant's type was resolved instead of generating
    #[arg(long)]
    pub explain: bool,

    /// Format of the --explain report
    #[arg(long, value_enum, default_value_t = Format::Text, requires = "explain")]
    pub format: Format,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        let Some(file) = constlist_syntax::parse_file(&self.source).ok_or_report() else {
            return Ok(());
        };

        if self.explain {
            let report = ops::explain(&file, &self.source, &self.type_name);
            match self.format {
                Format::Text => report.render(&mut TerminalOutput::new()),
                Format::Json => println!(
                    "{}",
                    serde_json::to_string_pretty(&report)
                        .wrap_err("failed to serialize explain report")?
                ),
            }
            return Ok(());
        }

        let options = self.generate_options();
        let Some(generation) = ops::prepare(&file, &options).ok_or_report() else {
            return Ok(());
        };

        let report = ops::generate(generation, &self.source, &options)?;
        tracing::info!(
            function = %report.function_name,
            constants = report.count,
            destination = ?report.destination,
            "generation finished"
        );
        report.render(&mut TerminalOutput::new());
        Ok(())
    }

    fn generate_options(&self) -> GenerateOptions {
        GenerateOptions {
            type_name: self.type_name.clone(),
            output: OutputTarget::from_flag(&self.output),
        }
    }
}

/// Rewrite Go-style `-type`/`-output` flags to their double-dash forms.
///
/// Arguments after a `--` separator are left untouched.
pub(crate) fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut after_separator = false;
    args.into_iter()
        .map(|arg| {
            if after_separator {
                return arg;
            }
            if arg == "--" {
                after_separator = true;
                return arg;
            }
            match arg.to_str().and_then(go_style_long_flag) {
                Some(long) => OsString::from(long),
                None => arg,
            }
        })
        .collect()
}

fn go_style_long_flag(arg: &str) -> Option<String> {
    let rest = arg.strip_prefix('-')?;
    if rest.starts_with('-') {
        return None;
    }
    let name = rest.split_once('=').map_or(rest, |(name, _)| name);
    GO_STYLE_FLAGS.contains(&name).then(|| format!("-{}", arg))
}
