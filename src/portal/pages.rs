//! `$token` substitution and portal page assembly.

use crate::infrastructure::config::DeviceConfig;

use super::templates;

/// Substitute `$token` placeholders in a template.
///
/// A token is `$` followed by one or more ASCII alphanumerics.
/// Known tokens are replaced with their value; unknown tokens and bare
/// `$` pass through untouched, so everything outside the substitution
/// map is preserved byte-for-byte.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(pos) = rest.find('$') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];

        let name_len = after
            .bytes()
            .take_while(|b| b.is_ascii_alphanumeric())
            .count();
        let name = &after[..name_len];

        match vars.iter().find(|(token, _)| *token == name) {
            Some((_, value)) if name_len > 0 => out.push_str(value),
            _ => {
                out.push('$');
                out.push_str(name);
            }
        }
        rest = &after[name_len..];
    }
    out.push_str(rest);
    out
}

/// Assemble the full portal page with the live configuration filled in.
///
/// `invalid` is echoed into the SSID form's message line; pass an empty
/// string when there is nothing to report.
pub fn portal_page(config: &DeviceConfig, invalid: &str) -> String {
    let red = config.leds.red.to_string();
    let green = config.leds.green.to_string();
    let blue = config.leds.blue.to_string();
    let (st1, st2) = config.time.mode.radio_markers();

    let vars: [(&str, &str); 6] = [
        ("red", &red),
        ("green", &green),
        ("blue", &blue),
        ("invalid", invalid),
        ("st1", st1),
        ("st2", st2),
    ];

    let mut page = String::with_capacity(8192);
    for fragment in [
        templates::PAGE_HEAD,
        templates::SET_LEDS_FORM,
        templates::SET_SSID_FORM,
        templates::SET_TIME_FORM,
        templates::UPLOAD_FIRMWARE_FORM,
        templates::SAVE_FILE_FORM,
        templates::RESET_DEVICE_FORM,
        templates::SLIDER_SCRIPT,
    ] {
        page.push_str(&render(fragment, &vars));
        page.push('\n');
    }
    page.push_str(templates::PAGE_TAIL);
    page
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ClockMode, LedColor, TimeSettings, UtcOffset};

    #[test]
    fn test_render_replaces_known_tokens() {
        assert_eq!(render("value='$red'", &[("red", "40")]), "value='40'");
        assert_eq!(
            render("$red $green", &[("red", "1"), ("green", "2")]),
            "1 2"
        );
    }

    #[test]
    fn test_render_keeps_unknown_tokens() {
        assert_eq!(render("$nope", &[("red", "1")]), "$nope");
        assert_eq!(render("cost: $5", &[]), "cost: $5");
    }

    #[test]
    fn test_render_bare_dollar_passes_through() {
        assert_eq!(render("100$", &[]), "100$");
        assert_eq!(render("$ red", &[("red", "1")]), "$ red");
    }

    #[test]
    fn test_render_empty_substitution() {
        assert_eq!(render("<p>$invalid</p>", &[("invalid", "")]), "<p></p>");
    }

    #[test]
    fn test_render_token_at_boundaries() {
        assert_eq!(render("$st1", &[("st1", "checked")]), "checked");
        assert_eq!(render("a$st1b", &[("st1", "x")]), "a$st1b"); // st1b is its own token
    }

    #[test]
    fn test_portal_page_fills_led_values() {
        let config = DeviceConfig {
            leds: LedColor::new(255, 0, 40),
            ..Default::default()
        };

        let page = portal_page(&config, "");
        assert!(page.contains("value='255' max='255' step='5' name='red'"));
        assert!(page.contains("value='0' max='255' step='5' name='green'"));
        assert!(page.contains("value='40' max='255' step='5' name='blue'"));
        assert!(!page.contains('$'));
    }

    #[test]
    fn test_portal_page_marks_active_clock_mode() {
        let mut config = DeviceConfig::default();
        let page = portal_page(&config, "");
        assert!(page.contains("<input type='radio' checked value='STD'"));
        assert!(page.contains("<input type='radio'  value='SUM'"));

        config.time = TimeSettings::new(ClockMode::Summer, UtcOffset::default());
        let page = portal_page(&config, "");
        assert!(page.contains("<input type='radio'  value='STD'"));
        assert!(page.contains("<input type='radio' checked value='SUM'"));
    }

    #[test]
    fn test_portal_page_echoes_invalid_message() {
        let page = portal_page(&DeviceConfig::default(), "SSID must not be empty");
        assert!(page.contains("<p style='color: red'>SSID must not be empty</p>"));
    }

    #[test]
    fn test_portal_page_shell() {
        let page = portal_page(&DeviceConfig::default(), "");
        assert!(page.starts_with("<html>"));
        assert!(page.ends_with("</html>"));
        assert!(page.contains("watch_outputs();"));
    }
}
