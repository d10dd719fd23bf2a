//! Fatal error rendering

use crossterm::style::Stylize;
use stylewatch::StylewatchError;

use crate::ui::terminal::TerminalCapabilities;
use crate::ui::theme;

fn hint_for(err: &anyhow::Error) -> Option<&'static str> {
    err.downcast_ref::<StylewatchError>()
        .and_then(StylewatchError::hint)
}

pub fn format_error(err: &anyhow::Error, color: bool) -> String {
    let label = |text: &str, c: crossterm::style::Color| {
        if color {
            text.with(c).bold().to_string()
        } else {
            text.to_string()
        }
    };

    let mut out = format!("{} {err:#}\n", label("error:", theme::ERROR));
    if let Some(hint) = hint_for(err) {
        out.push_str(&format!("{} {hint}\n", label("hint:", theme::HINT)));
    }
    out
}

/// Report a fatal error: an `error` NDJSON event on stdout, or text on stderr
pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let mut event = serde_json::json!({
            "event": "error",
            "message": format!("{err:#}"),
        });
        if let Some(hint) = hint_for(err) {
            event["hint"] = serde_json::json!(hint);
        }
        let _ = crate::ui::json::emit(event);
        return;
    }

    let caps = TerminalCapabilities::detect();
    eprint!("{}", format_error(err, caps.supports_color && !caps.is_ci));
}
