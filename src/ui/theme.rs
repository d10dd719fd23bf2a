//! Line markers and colors for rendered output.
//!
//! Every rendered line starts with a `Marker`. Each marker has a unicode
//! glyph, an ASCII fallback for C/POSIX locales and `TERM=dumb`, and a
//! color used only when the terminal supports it.

use crossterm::style::{Color, Stylize};

/// Color of the `error:` prefix on fatal errors
pub const ERROR: Color = Color::Red;
/// Color of the `hint:` prefix
pub const HINT: Color = Color::Cyan;

/// What a rendered line is about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// A source was written to its output
    Compiled,
    /// A source failed to compile
    Failed,
    /// Something worth reading that did not stop the run
    Notice,
    /// A batch build started
    Building,
    /// A watch root is absent
    Skipped,
    /// A filesystem change or a follow-up line
    Changed,
    /// A watch root is live, or watching stopped
    Watching,
}

impl Marker {
    fn glyph(self, unicode: bool) -> &'static str {
        let (fancy, plain) = match self {
            Marker::Compiled => ("✓", "[OK]"),
            Marker::Failed => ("✗", "[FAIL]"),
            Marker::Notice => ("⚠", "[WARN]"),
            Marker::Building => ("●", "[..]"),
            Marker::Skipped => ("○", "[ ]"),
            Marker::Changed => ("↳", "[>]"),
            Marker::Watching => ("⟳", "[~]"),
        };
        if unicode {
            fancy
        } else {
            plain
        }
    }

    fn color(self) -> Color {
        match self {
            Marker::Compiled => Color::Green,
            Marker::Failed => ERROR,
            Marker::Notice | Marker::Building => Color::Yellow,
            Marker::Skipped | Marker::Changed => Color::DarkGrey,
            Marker::Watching => HINT,
        }
    }

    /// Glyph for the current terminal
    pub fn render(self, color: bool, unicode: bool) -> String {
        let glyph = self.glyph(unicode);
        if color {
            glyph.with(self.color()).to_string()
        } else {
            glyph.to_string()
        }
    }
}
