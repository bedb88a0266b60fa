//! Array emitter - renders bytes as a source-level array literal
//!
//! Output shape for the default layout:
//!
//! ```text
//! static unsigned char ast_das[] = {
//! 0x00,0x01,0x02,0x03,0x04,0x05,0x06,0x07,
//! 0x08,0x09,
//! };
//! ```
//!
//! Each inner line holds at most `group_size` literals and always ends with a
//! comma. Empty input produces only the opening and closing lines.

use crate::domain::value_objects::{ArrayLayout, ArrayName};

/// Rendered artifact text plus bookkeeping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedArray {
    name: ArrayName,
    text: String,
    byte_count: usize,
    line_count: usize,
}

impl EmittedArray {
    pub fn name(&self) -> &ArrayName {
        &self.name
    }

    /// Complete artifact: opening line, inner lines, closing line
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }

    /// Number of bytes rendered (equals the number of literals)
    pub fn byte_count(&self) -> usize {
        self.byte_count
    }

    /// Number of inner (literal) lines
    pub fn line_count(&self) -> usize {
        self.line_count
    }
}

/// Pure renderer from bytes to array text
#[derive(Debug, Clone, Default)]
pub struct ArrayEmitter {
    layout: ArrayLayout,
}

impl ArrayEmitter {
    pub fn new(layout: ArrayLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &ArrayLayout {
        &self.layout
    }

    /// Render `bytes` as an array declared under `name`
    pub fn render(&self, name: &ArrayName, bytes: &[u8]) -> EmittedArray {
        let language = self.layout.language;
        let group_size = self.layout.group_size();
        let open = language.open_line(name.as_str(), bytes.len());
        let close = language.close_line();

        // prefix + 2 digits + comma per byte, one newline per group
        let literal_width = self.layout.literal.prefix().len() + 3;
        let inner = bytes.len() * literal_width + bytes.len() / group_size + 1;
        let mut text = String::with_capacity(open.len() + close.len() + 2 + inner);

        text.push_str(&open);
        text.push('\n');

        let mut line_count = 0;
        for chunk in bytes.chunks(group_size) {
            for &byte in chunk {
                self.layout.literal.write_literal(&mut text, byte);
                text.push(',');
            }
            text.push('\n');
            line_count += 1;
        }

        text.push_str(close);
        text.push('\n');

        EmittedArray {
            name: name.clone(),
            text,
            byte_count: bytes.len(),
            line_count,
        }
    }

    /// Recover the bytes from artifact text rendered with this layout
    ///
    /// Returns `None` when the text does not have the emitted shape: missing
    /// opening or closing line, an inner line without its trailing comma, more
    /// than `group_size` literals on a line, or a malformed literal.
    pub fn decode(&self, text: &str) -> Option<Vec<u8>> {
        let mut lines: Vec<&str> = text.lines().collect();
        let language = self.layout.language;
        if lines.len() < 2 || lines.pop()? != language.close_line() {
            return None;
        }
        if !language.is_open_line(lines.remove(0)) {
            return None;
        }

        let mut bytes = Vec::with_capacity(lines.len() * self.layout.group_size());
        for line in lines {
            let body = line.strip_suffix(',')?;
            let literals: Vec<&str> = body.split(',').collect();
            if literals.len() > self.layout.group_size() {
                return None;
            }
            for literal in literals {
                bytes.push(self.layout.literal.parse_literal(literal)?);
            }
        }
        Some(bytes)
    }
}
