mod color;
mod core;

pub use self::core::*;
pub use color::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_from_hex_6() {
        let c = Color::from_hex("#ff8800").unwrap();
        assert_eq!(c, Color::from_rgba(255, 136, 0, 255));
    }

    #[test]
    fn color_from_hex_8() {
        let c = Color::from_hex("#ff880080").unwrap();
        assert_eq!(c, Color::from_rgba(255, 136, 0, 128));
    }

    #[test]
    fn color_from_hex_short_forms() {
        assert_eq!(Color::from_hex("#f80").unwrap(), Color::from_rgba(255, 136, 0, 255));
        assert_eq!(Color::from_hex("#f808").unwrap(), Color::from_rgba(255, 136, 0, 136));
    }

    #[test]
    fn color_from_hex_no_hash() {
        let c = Color::from_hex("00ff00").unwrap();
        assert_eq!(c, Color::from_rgba(0, 255, 0, 255));
    }

    #[test]
    fn color_from_hex_invalid() {
        assert!(Color::from_hex("zzzzzz").is_none());
        assert!(Color::from_hex("#abcde").is_none());
        assert!(Color::from_hex("").is_none());
        assert!(Color::from_hex("#éé").is_none());
    }

    #[test]
    fn color_scheme_parses_and_displays() {
        assert_eq!("dark".parse::<ColorScheme>().unwrap(), ColorScheme::Dark);
        assert_eq!(" Light ".parse::<ColorScheme>().unwrap(), ColorScheme::Light);
        assert!("sepia".parse::<ColorScheme>().is_err());
        assert_eq!(ColorScheme::Dark.to_string(), "dark");
        assert_eq!(ColorScheme::default(), ColorScheme::Light);
    }

    #[test]
    fn color_scheme_serialization() {
        let json = serde_json::to_string(&ColorScheme::Dark).unwrap();
        assert_eq!(json, "\"dark\"");
        let back: ColorScheme = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ColorScheme::Dark);
    }

    #[test]
    fn diagnostic_display_with_position() {
        let d = Diagnostic::error("unknown key 'foo'", Some(2), Some(5));
        assert_eq!(d.to_string(), "2:5 error: unknown key 'foo'");
        let w = Diagnostic::warning("spread", None, None);
        assert_eq!(w.to_string(), "warning: spread");
    }

    #[test]
    fn diagnostic_serialization_skips_missing_position() {
        let d = Diagnostic::warning("spread", None, None);
        let json = serde_json::to_value(&d).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "message": "spread", "severity": "warning" })
        );
    }
}
