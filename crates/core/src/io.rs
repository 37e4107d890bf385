//! Output handling with stdout/stderr separation contract
//!
//! Commands write user-facing results through [`Output`] instead of direct
//! `println!`; logs and diagnostics go to stderr via tracing. Keeping every
//! stdout write in one place also lets command handlers run against an
//! in-memory writer in tests.

use anyhow::Result;
use serde::Serialize;
use std::io::{self, Write};

/// Prefix of a section heading line
pub const HEADER_PREFIX: &str = "=====> ";

/// Indentation of the lines under a heading
pub const VERBOSE_PREFIX: &str = "       ";

/// Output helper that owns the stdout side of a command
///
/// # Examples
///
/// ```
/// use docker_options_core::io::Output;
///
/// let mut output = Output::new(Vec::new());
/// output.header("web docker options information").unwrap();
/// output.verbose("Docker options build: --squash").unwrap();
///
/// let text = String::from_utf8(output.into_inner()).unwrap();
/// assert_eq!(
///     text,
///     "=====> web docker options information\n       Docker options build: --squash\n"
/// );
/// ```
pub struct Output<W: Write = Box<dyn Write>> {
    writer: W,
}

impl Output {
    /// Output bound to the process stdout
    pub fn stdout() -> Self {
        Self {
            writer: Box::new(io::stdout()),
        }
    }
}

impl<W: Write> Output<W> {
    /// Output over an arbitrary writer
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write a text line
    pub fn write_line(&mut self, text: &str) -> Result<()> {
        writeln!(self.writer, "{}", text)?;
        Ok(())
    }

    /// Write a JSON-serializable value as a single line
    pub fn write_json<T: Serialize>(&mut self, value: &T) -> Result<()> {
        let json = serde_json::to_string(value)?;
        self.write_line(&json)
    }

    /// Write a `=====> ` heading
    pub fn header(&mut self, text: &str) -> Result<()> {
        self.write_line(&format!("{}{}", HEADER_PREFIX, text))
    }

    /// Write a line indented to sit under a heading
    pub fn verbose(&mut self, text: &str) -> Result<()> {
        self.write_line(&format!("{}{}", VERBOSE_PREFIX, text))
    }

    /// Flush any buffered output
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    /// Consume the helper and return the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}
