//! Byte literal format

use std::fmt::Write as _;

/// Default numeral marker in front of each byte
pub const DEFAULT_HEX_PREFIX: &str = "0x";

/// How a single byte is spelled in the artifact
///
/// Always two zero-padded hex digits after the prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiteralFormat {
    prefix: String,
    uppercase: bool,
}

impl Default for LiteralFormat {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_HEX_PREFIX.to_string(),
            uppercase: false,
        }
    }
}

impl LiteralFormat {
    pub fn new(prefix: impl Into<String>, uppercase: bool) -> Self {
        Self {
            prefix: prefix.into(),
            uppercase,
        }
    }

    /// Reject prefixes that would make literals unreadable or uncompilable
    ///
    /// The prefix must be non-empty and free of commas, whitespace and control
    /// characters. Without a prefix C reads `08` as a malformed octal literal.
    pub fn check_prefix(prefix: &str) -> Result<(), String> {
        if prefix.is_empty() {
            return Err("hex_prefix must not be empty".to_string());
        }
        if let Some(c) = prefix
            .chars()
            .find(|&c| c == ',' || c.is_whitespace() || c.is_control())
        {
            return Err(format!("hex_prefix must not contain {:?}", c));
        }
        Ok(())
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn uppercase(&self) -> bool {
        self.uppercase
    }

    /// Append one literal for `byte` to `out`
    pub fn write_literal(&self, out: &mut String, byte: u8) {
        out.push_str(&self.prefix);
        // Writing into a String cannot fail.
        let _ = if self.uppercase {
            write!(out, "{:02X}", byte)
        } else {
            write!(out, "{:02x}", byte)
        };
    }

    pub fn literal(&self, byte: u8) -> String {
        let mut out = String::with_capacity(self.prefix.len() + 2);
        self.write_literal(&mut out, byte);
        out
    }

    /// Parse one literal back into a byte
    ///
    /// Returns `None` unless the text is exactly the prefix followed by two hex
    /// digits of the configured case.
    pub fn parse_literal(&self, text: &str) -> Option<u8> {
        let digits = text.strip_prefix(self.prefix.as_str())?;
        if digits.len() != 2 {
            return None;
        }
        let case_ok = digits.chars().all(|c| {
            c.is_ascii_digit()
                || (self.uppercase && c.is_ascii_uppercase())
                || (!self.uppercase && c.is_ascii_lowercase())
        });
        if !case_ok {
            return None;
        }
        u8::from_str_radix(digits, 16).ok()
    }
}
