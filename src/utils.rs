use directories::ProjectDirs;
use std::path::PathBuf;

/// Profile mode for the application (dev or prod)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    Dev,
    Prod,
}

/// Get the configuration directory path for dayplan
/// If profile is Dev, uses "dayplan-dev" instead of "dayplan"
pub fn get_config_dir(profile: Profile) -> Option<PathBuf> {
    let app_name = match profile {
        Profile::Dev => "dayplan-dev",
        Profile::Prod => "dayplan",
    };
    // Use "com" as qualifier for better cross-platform compatibility
    ProjectDirs::from("com", "dayplan", app_name).map(|dirs| dirs.config_dir().to_path_buf())
}

/// Parse a date string in ISO 8601 format (YYYY-MM-DD)
pub fn parse_date(date_str: &str) -> Result<chrono::NaiveDate, chrono::ParseError> {
    chrono::NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d")
}

/// Format a date as an ISO 8601 string (YYYY-MM-DD)
pub fn format_date(date: chrono::NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// The current local calendar date.
pub fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}

/// The current local instant, for classification at the shell edge.
pub fn now() -> chrono::NaiveDateTime {
    chrono::Local::now().naive_local()
}

/// Parse an hour or minute text field into an integer.
///
/// Text that does not parse (empty, non-numeric) silently becomes 0; the
/// add action never fails on bad numeric input.
pub fn parse_clock_component(text: &str) -> u32 {
    text.trim().parse().unwrap_or(0)
}

/// Parsed key binding information
#[derive(Debug, Clone)]
pub struct ParsedKeyBinding {
    pub key_code: crossterm::event::KeyCode,
    pub requires_ctrl: bool,
}

/// Check if a key event has the primary modifier (Ctrl on Windows/Linux, Option/Alt on macOS)
pub fn has_primary_modifier(modifiers: crossterm::event::KeyModifiers) -> bool {
    #[cfg(target_os = "macos")]
    {
        modifiers.contains(crossterm::event::KeyModifiers::CONTROL)
            || modifiers.contains(crossterm::event::KeyModifiers::ALT)
    }

    #[cfg(not(target_os = "macos"))]
    {
        modifiers.contains(crossterm::event::KeyModifiers::CONTROL)
    }
}

/// Format a key binding string for display, showing the platform-appropriate modifier
/// On macOS, "Ctrl+" is replaced with "Opt+" (Option key)
pub fn format_key_binding_for_display(key_binding: &str) -> String {
    #[cfg(target_os = "macos")]
    {
        key_binding.replace("Ctrl+", "Opt+")
    }

    #[cfg(not(target_os = "macos"))]
    {
        key_binding.to_string()
    }
}

/// Parse a key binding string from config into a ParsedKeyBinding
/// Supports: single keys ("q", "n", "j"), special keys ("Enter", "Left",
/// "Space", "F1"), and the Ctrl modifier ("Ctrl+g")
pub fn parse_key_binding(key_str: &str) -> Result<ParsedKeyBinding, String> {
    let key_str = key_str.trim();

    if let Some(key_part) = key_str.strip_prefix("Ctrl+") {
        let key_code = parse_key_code(key_part)?;
        return Ok(ParsedKeyBinding {
            key_code,
            requires_ctrl: true,
        });
    }

    let key_code = parse_key_code(key_str)?;
    Ok(ParsedKeyBinding {
        key_code,
        requires_ctrl: false,
    })
}

/// Parse a key code from a string (without modifiers)
fn parse_key_code(key_str: &str) -> Result<crossterm::event::KeyCode, String> {
    match key_str {
        "Enter" => Ok(crossterm::event::KeyCode::Enter),
        "Esc" | "Escape" => Ok(crossterm::event::KeyCode::Esc),
        "Backspace" => Ok(crossterm::event::KeyCode::Backspace),
        "Tab" => Ok(crossterm::event::KeyCode::Tab),
        "Space" | " " => Ok(crossterm::event::KeyCode::Char(' ')),
        "Left" => Ok(crossterm::event::KeyCode::Left),
        "Right" => Ok(crossterm::event::KeyCode::Right),
        "Up" => Ok(crossterm::event::KeyCode::Up),
        "Down" => Ok(crossterm::event::KeyCode::Down),
        "Home" => Ok(crossterm::event::KeyCode::Home),
        "End" => Ok(crossterm::event::KeyCode::End),
        "PageUp" => Ok(crossterm::event::KeyCode::PageUp),
        "PageDown" => Ok(crossterm::event::KeyCode::PageDown),
        "Delete" => Ok(crossterm::event::KeyCode::Delete),
        "F1" => Ok(crossterm::event::KeyCode::F(1)),
        "F2" => Ok(crossterm::event::KeyCode::F(2)),
        "F3" => Ok(crossterm::event::KeyCode::F(3)),
        "F4" => Ok(crossterm::event::KeyCode::F(4)),
        _ => {
            let mut chars = key_str.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Ok(crossterm::event::KeyCode::Char(c)),
                _ => Err(format!("Unknown key binding: {}", key_str)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;

    #[test]
    fn clock_component_parses_digits() {
        assert_eq!(parse_clock_component("9"), 9);
        assert_eq!(parse_clock_component(" 23 "), 23);
        assert_eq!(parse_clock_component("05"), 5);
    }

    #[test]
    fn clock_component_falls_back_to_zero() {
        assert_eq!(parse_clock_component(""), 0);
        assert_eq!(parse_clock_component("abc"), 0);
        assert_eq!(parse_clock_component("1h"), 0);
        assert_eq!(parse_clock_component("-5"), 0);
    }

    #[test]
    fn dates_round_trip_through_iso_format() {
        let d = chrono::NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert_eq!(parse_date(&format_date(d)).unwrap(), d);
        assert_eq!(parse_date(" 2024-06-01 ").unwrap(), d);
        assert!(parse_date("06/01/2024").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn key_bindings_parse_plain_special_and_ctrl() {
        let b = parse_key_binding("q").unwrap();
        assert_eq!(b.key_code, KeyCode::Char('q'));
        assert!(!b.requires_ctrl);

        let b = parse_key_binding("Space").unwrap();
        assert_eq!(b.key_code, KeyCode::Char(' '));

        let b = parse_key_binding("Ctrl+g").unwrap();
        assert_eq!(b.key_code, KeyCode::Char('g'));
        assert!(b.requires_ctrl);

        assert!(parse_key_binding("NotAKey").is_err());
    }
}
