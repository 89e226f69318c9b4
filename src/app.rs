// src/app.rs
use std::{
    io::{BufRead, Write},
    path::PathBuf,
};

use anyhow::Result;
use line_views_domain::LineStore;
use line_views_infra::TextFileReader;
use line_views_ports::source::LineSource;
use line_views_shared_kernel::{ErrorContext, InfrastructureError};
use line_views_usecase::{Messages, Report};

use crate::config::Config;

/// Load the configured file from disk and print the report.
pub fn run<R: BufRead, W: Write>(config: &Config, input: R, out: &mut W) -> Result<()> {
    run_with(&TextFileReader, config, input, out)
}

/// Same as [`run`], reading lines through `source`.
pub fn run_with<S, R, W>(source: &S, config: &Config, mut input: R, out: &mut W) -> Result<()>
where
    S: LineSource,
    R: BufRead,
    W: Write,
{
    let messages = config.locale.messages();
    let path = match &config.path {
        Some(path) => path.clone(),
        None => prompt_path(&mut input, out, messages)?,
    };

    let mut store = LineStore::new();
    if let Err(failure) = store.load(source, &path) {
        tracing::warn!(error = %failure, kept = store.count(), "file was read only partially");
        writeln!(out, "{failure}")?;
    }
    tracing::info!(path = %path.display(), lines = store.count(), "file loaded");

    Report::new(&store, config.locale).run(input, out).context("printing report")?;
    out.flush()?;
    Ok(())
}

/// Ask for the file name on `input`.
///
/// A failed read is reported and yields an empty path, which loads no data.
fn prompt_path<R: BufRead, W: Write>(input: &mut R, out: &mut W, messages: &Messages) -> Result<PathBuf> {
    writeln!(out, "{}", messages.file_prompt)?;
    out.flush()?;

    let mut answer = Vec::new();
    if let Err(source) = input.read_until(b'\n', &mut answer) {
        let failure = InfrastructureError::StdinRead { source };
        tracing::warn!(error = %failure, "continuing without a file");
        writeln!(out, "{failure}")?;
        return Ok(PathBuf::new());
    }
    while let Some(b'\n' | b'\r') = answer.last() {
        answer.pop();
    }
    Ok(path_from_bytes(answer))
}

#[cfg(unix)]
fn path_from_bytes(bytes: Vec<u8>) -> PathBuf {
    use std::{ffi::OsString, os::unix::ffi::OsStringExt};

    PathBuf::from(OsString::from_vec(bytes))
}

#[cfg(not(unix))]
fn path_from_bytes(bytes: Vec<u8>) -> PathBuf {
    PathBuf::from(String::from_utf8_lossy(&bytes).into_owned())
}
