//! Source fixtures shared by CLI tests.

#![allow(dead_code)]

/// Valid SCSS using a variable and nesting
pub const VALID_SCSS: &str = "$accent: red;\n.card {\n  .title { color: $accent; }\n}\n";

/// SCSS with an unclosed block
pub const BROKEN_SCSS: &str = ".card {\n  color: red;\n";

/// Any ES6 source; the script compiler is never found in tests
pub const ES6_SOURCE: &str = "const greet = (name) => `hi ${name}`;\n";

/// A program name that is never installed
pub const MISSING_COMPILER: &str = "stylewatch-test-no-such-compiler";
