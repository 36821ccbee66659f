//! Golden tests for the portal markup.
//!
//! The page is a wire contract: clients of the original firmware parse
//! it, so rendering with a fixed substitution map must stay
//! byte-for-byte stable, and every form must keep its action/method
//! pair.

use wifi_button::domain::LedColor;
use wifi_button::infrastructure::config::DeviceConfig;
use wifi_button::portal::pages::{portal_page, render};
use wifi_button::portal::templates;

const GOLDEN_PAGE: &str = include_str!("golden/portal_page.html");

/// Substitution map the golden file was rendered with.
const GOLDEN_VARS: [(&str, &str); 6] = [
    ("red", "17"),
    ("green", "102"),
    ("blue", "204"),
    ("invalid", ""),
    ("st1", "checked"),
    ("st2", ""),
];

const ALL_FRAGMENTS: [&str; 9] = [
    templates::PAGE_HEAD,
    templates::SET_LEDS_FORM,
    templates::SET_SSID_FORM,
    templates::SET_TIME_FORM,
    templates::UPLOAD_FIRMWARE_FORM,
    templates::SAVE_FILE_FORM,
    templates::RESET_DEVICE_FORM,
    templates::SLIDER_SCRIPT,
    templates::PAGE_TAIL,
];

#[test]
fn portal_page_matches_golden_file() {
    let config = DeviceConfig {
        leds: LedColor::new(17, 102, 204),
        ..Default::default()
    };

    assert_eq!(portal_page(&config, ""), GOLDEN_PAGE);
}

#[test]
fn render_matches_plain_string_replacement() {
    // No token in the templates is a prefix of another, so a naive
    // search-and-replace is a valid oracle for the renderer.
    for fragment in ALL_FRAGMENTS {
        let mut expected = fragment.to_string();
        for (token, value) in GOLDEN_VARS {
            expected = expected.replace(&format!("${token}"), value);
        }
        assert_eq!(render(fragment, &GOLDEN_VARS), expected);
    }
}

#[test]
fn rendering_is_deterministic() {
    let config = DeviceConfig::default();
    assert_eq!(portal_page(&config, ""), portal_page(&config, ""));
}

#[test]
fn no_unsubstituted_tokens_remain() {
    let page = portal_page(&DeviceConfig::default(), "");
    assert!(!page.contains('$'), "leftover placeholder in: {page}");
}

/// Every form's action and method, exactly as existing clients expect.
#[test]
fn form_actions_and_methods_are_stable() {
    let page = portal_page(&DeviceConfig::default(), "");

    let expected = [
        ("/api/gpio/leds", "post"),
        ("/api/config/ssid", "post"),
        ("/api/time", "post"),
        ("/api/upload/firmware", "post"),
        ("/api/upload/path", "get"),
        ("/api/upload/file", "post"),
        ("/api/config/reset", "get"),
    ];

    for (action, method) in expected {
        let needle = format!("action='{action}' method='{method}'");
        assert!(page.contains(&needle), "missing form: {needle}");
    }
}

#[test]
fn upload_forms_are_multipart() {
    for action in ["/api/upload/firmware", "/api/upload/file"] {
        let needle =
            format!("action='{action}' method='post' enctype='multipart/form-data'");
        assert!(
            portal_page(&DeviceConfig::default(), "").contains(&needle),
            "missing multipart form: {needle}"
        );
    }
}

#[test]
fn input_names_are_stable() {
    let page = portal_page(&DeviceConfig::default(), "");

    for name in [
        "red",
        "green",
        "blue",
        "ssid",
        "ssid_pw",
        "sumTime",
        "utc",
        "updateProgram",
        "path",
        "saveFile",
    ] {
        let needle = format!("name='{name}'");
        assert!(page.contains(&needle), "missing input: {needle}");
    }
}

#[test]
fn time_form_lists_every_utc_option() {
    let page = portal_page(&DeviceConfig::default(), "");

    for value in [
        "14", "13", "12.45", "12", "11.30", "11", "10.30", "10", "9.30", "9", "8.45", "8.30",
        "8", "7", "6.30", "6", "5.45", "5.30", "5", "4.30", "4", "3.30", "3", "2", "0", "-1",
        "-2", "-2.30", "-3", "-3.30", "-4", "-4.30", "-5", "-6", "-7", "-8", "-9", "-9.30",
        "-10", "-11", "-12",
    ] {
        let needle = format!("<option value='{value}'>");
        assert!(page.contains(&needle), "missing option: {needle}");
    }

    // UTC+1 is the pre-selected default.
    assert!(page.contains("<option value='1' selected>UTC+1</option>"));
}
