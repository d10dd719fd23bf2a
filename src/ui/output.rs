use stylewatch::config::ConfigWarning;

use crate::ui::theme::Marker;

pub fn format_config_warning(w: &ConfigWarning, color: bool, unicode: bool) -> String {
    let location = match w.line {
        Some(line) => format!("{}:{}", w.file.display(), line),
        None => w.file.display().to_string(),
    };

    let mut out = format!(
        "{} Unknown config key '{}' in {location}\n",
        Marker::Notice.render(color, unicode),
        w.key
    );
    if let Some(suggestion) = &w.suggestion {
        out.push_str(&format!("   Did you mean '{suggestion}'?\n"));
    }
    out
}

pub fn print_config_warnings(warnings: &[ConfigWarning], color: bool, unicode: bool) {
    for w in warnings {
        eprint!("{}", format_config_warning(w, color, unicode));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn warning_with_line_and_suggestion() {
        let warning = ConfigWarning {
            key: "debounce_mss".to_string(),
            file: PathBuf::from("stylewatch.toml"),
            line: Some(2),
            suggestion: Some("debounce_ms".to_string()),
        };

        assert_eq!(
            format_config_warning(&warning, false, false),
            "[WARN] Unknown config key 'debounce_mss' in stylewatch.toml:2\n   Did you mean 'debounce_ms'?\n"
        );
    }

    #[test]
    fn warning_without_line_or_suggestion() {
        let warning = ConfigWarning {
            key: "zzz".to_string(),
            file: PathBuf::from("stylewatch.toml"),
            line: None,
            suggestion: None,
        };

        assert_eq!(
            format_config_warning(&warning, false, false),
            "[WARN] Unknown config key 'zzz' in stylewatch.toml\n"
        );
    }
}
