//! Array layout value object - every knob the emitter reads

use super::language::Language;
use super::literal_format::LiteralFormat;

/// Bytes per inner line unless configured otherwise
pub const DEFAULT_GROUP_SIZE: usize = 8;

/// Rendering configuration for [`ArrayEmitter`](crate::domain::services::ArrayEmitter)
///
/// Defaults reproduce the classic `static unsigned char x[] = {` layout with
/// eight lowercase `0x`-prefixed literals per line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayLayout {
    /// Bytes per inner line; never zero
    group_size: usize,
    pub language: Language,
    pub literal: LiteralFormat,
}

impl Default for ArrayLayout {
    fn default() -> Self {
        Self {
            group_size: DEFAULT_GROUP_SIZE,
            language: Language::default(),
            literal: LiteralFormat::default(),
        }
    }
}

impl ArrayLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the group size; zero is clamped to one
    pub fn with_group_size(mut self, group_size: usize) -> Self {
        self.group_size = group_size.max(1);
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn with_literal(mut self, literal: LiteralFormat) -> Self {
        self.literal = literal;
        self
    }

    pub fn group_size(&self) -> usize {
        self.group_size
    }
}
