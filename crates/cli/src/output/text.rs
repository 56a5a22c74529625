// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text output formatter.
//!
//! One line per pattern with stale codes, the codes as a Python list literal:
//! ```text
//! <pattern>:['<code>', '<code>']
//! ```

use termcolor::WriteColor;

use crate::color::scheme;
use crate::report::{Report, StaleEntry};

/// Text output formatter with color support.
pub struct TextFormatter<W: WriteColor> {
    writer: W,
}

impl<W: WriteColor> TextFormatter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write every stale entry; a report without entries writes nothing.
    pub fn write(&mut self, report: &Report) -> std::io::Result<()> {
        for entry in report.entries() {
            self.write_entry(entry)?;
        }
        self.writer.flush()
    }

    fn write_entry(&mut self, entry: &StaleEntry) -> std::io::Result<()> {
        self.writer.set_color(&scheme::pattern())?;
        write!(self.writer, "{}", entry.pattern)?;
        self.writer.reset()?;

        write!(self.writer, ":")?;

        self.writer.set_color(&scheme::code())?;
        write!(self.writer, "{}", python_list(&entry.codes))?;
        self.writer.reset()?;
        writeln!(self.writer)
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Render strings the way Python's `repr()` renders a list of `str`.
pub fn python_list(items: &[String]) -> String {
    let quoted: Vec<String> = items.iter().map(|s| python_str(s)).collect();
    format!("[{}]", quoted.join(", "))
}

/// Render a string the way Python's `repr()` does.
///
/// Single quotes unless the text contains `'` but no `"`.
pub fn python_str(s: &str) -> String {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_control() && (c as u32) < 0x100 => {
                out.push_str(&format!("\\x{:02x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
