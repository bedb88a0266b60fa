//! Language value object - which source language the array is emitted for

use serde::{Deserialize, Serialize};

/// Target embedding language
///
/// Decides the opening and closing lines wrapped around the byte literals.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// `static unsigned char name[] = { ... };`
    #[default]
    C,
    /// `static const unsigned char name[] = { ... };`
    #[serde(alias = "c++")]
    Cpp,
    /// `pub static NAME: [u8; N] = [ ... ];`
    Rust,
}

/// C11 and C23 keywords
const C_KEYWORDS: &[&str] = &[
    "_Alignas", "_Alignof", "_Atomic", "_Bool", "_Complex", "_Generic", "_Imaginary",
    "_Noreturn", "_Static_assert", "_Thread_local", "alignas", "alignof", "auto", "bool",
    "break", "case", "char", "const", "constexpr", "continue", "default", "do", "double",
    "else", "enum", "extern", "false", "float", "for", "goto", "if", "inline", "int", "long",
    "nullptr", "register", "restrict", "return", "short", "signed", "sizeof", "static",
    "static_assert", "struct", "switch", "thread_local", "true", "typedef", "typeof",
    "typeof_unqual", "union", "unsigned", "void", "volatile", "while",
];

/// C++ keywords and alternative tokens not already in C
const CPP_KEYWORDS: &[&str] = &[
    "and", "and_eq", "asm", "bitand", "bitor", "catch", "char8_t", "char16_t", "char32_t",
    "class", "co_await", "co_return", "co_yield", "compl", "concept", "const_cast", "consteval",
    "constinit", "decltype", "delete", "dynamic_cast", "explicit", "export", "friend",
    "mutable", "namespace", "new", "noexcept", "not", "not_eq", "operator", "or", "or_eq",
    "private", "protected", "public", "reinterpret_cast", "requires", "static_cast",
    "template", "this", "throw", "try", "typeid", "typename", "using", "virtual", "wchar_t",
    "xor", "xor_eq",
];

/// Strict and reserved Rust keywords
const RUST_KEYWORDS: &[&str] = &[
    "Self", "abstract", "as", "async", "await", "become", "box", "break", "const", "continue",
    "crate", "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if",
    "impl", "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv",
    "pub", "ref", "return", "self", "static", "struct", "super", "trait", "true", "try",
    "type", "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

impl Language {
    pub const ALL: [Language; 3] = [Language::C, Language::Cpp, Language::Rust];

    /// Opening declaration line (without the trailing newline)
    pub fn open_line(&self, name: &str, len: usize) -> String {
        match self {
            Language::C => format!("static unsigned char {}[] = {{", name),
            Language::Cpp => format!("static const unsigned char {}[] = {{", name),
            Language::Rust => format!("pub static {}: [u8; {}] = [", name, len),
        }
    }

    /// Closing delimiter line (without the trailing newline)
    pub fn close_line(&self) -> &'static str {
        match self {
            Language::C | Language::Cpp => "};",
            Language::Rust => "];",
        }
    }

    /// Whether derived identifiers are upper-cased (Rust statics)
    pub fn uppercase_identifiers(&self) -> bool {
        matches!(self, Language::Rust)
    }

    /// Words that cannot name a static in this language
    pub fn reserved_words(&self) -> &'static [&'static str] {
        match self {
            Language::C => C_KEYWORDS,
            Language::Cpp => CPP_KEYWORDS,
            Language::Rust => RUST_KEYWORDS,
        }
    }

    /// Whether `ident` is a keyword of this language
    ///
    /// C++ inherits every C keyword.
    pub fn is_reserved(&self, ident: &str) -> bool {
        self.reserved_words().contains(&ident)
            || (*self == Language::Cpp && C_KEYWORDS.contains(&ident))
    }

    /// Whether `line` looks like an opening line this language emits
    pub fn is_open_line(&self, line: &str) -> bool {
        let (declaration, delimiter) = match self {
            Language::C => ("static unsigned char ", '{'),
            Language::Cpp => ("static const unsigned char ", '{'),
            Language::Rust => ("pub static ", '['),
        };
        line.starts_with(declaration) && line.ends_with(delimiter)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Language::C => "C",
            Language::Cpp => "C++",
            Language::Rust => "Rust",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
