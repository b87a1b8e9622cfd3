//! Small helpers for the detail page: owner gating, rating parsing, toast
//! notifications and navigation.

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use common::model::component::Component;
use common::model::user::User;

/// True when the viewer owns the loaded entry. Both must be present.
pub fn is_owner(user: Option<&User>, component: Option<&Component>) -> bool {
    match (user, component) {
        (Some(user), Some(component)) => {
            !user.id.is_empty() && user.id == component.owner_ref()
        }
        _ => false,
    }
}

/// Parses the rating field the way a numeric input is read: leading whitespace,
/// an optional sign, then the longest run of digits. Trailing garbage is
/// ignored (`"4 stars"` is 4); no digits at all yields `None`.
///
/// The value is not clamped to the advertised 1..=5 range.
pub fn parse_rating(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let magnitude = digits[..end].bytes().fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });
    Some(if negative { -magnitude } else { magnitude })
}

/// Displays a temporary notification at the bottom of the screen. The element
/// removes itself after three seconds.
pub fn show_toast(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message));
                let html_toast: HtmlElement = toast.unchecked_into();
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("bottom", "20px").ok();
                style.set_property("left", "50%").ok();
                style.set_property("transform", "translateX(-50%)").ok();
                style.set_property("background", "rgba(0, 0, 0, 0.8)").ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "10px 20px").ok();
                style.set_property("border-radius", "4px").ok();
                style.set_property("z-index", "10000").ok();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(3000).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}

/// Leaves the page for `path`.
pub fn navigate_to(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(err) = window.location().set_href(path) {
            gloo_console::error!("navigation failed:", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn component_owned_by(owner: &str) -> Component {
        serde_json::from_value(serde_json::json!({
            "_id": "c-1",
            "ownerId": owner,
            "owner": { "_id": owner, "name": "Ada", "email": "ada@example.com" }
        }))
        .unwrap()
    }

    fn user(id: &str) -> User {
        User {
            id: id.to_string(),
            name: "Viewer".to_string(),
            email: None,
        }
    }

    #[test]
    fn owner_gate_requires_both_sides() {
        let component = component_owned_by("u-1");
        assert!(is_owner(Some(&user("u-1")), Some(&component)));
        assert!(!is_owner(Some(&user("u-2")), Some(&component)));
        assert!(!is_owner(None, Some(&component)));
        assert!(!is_owner(Some(&user("u-1")), None));
    }

    #[test]
    fn rating_is_parsed_without_clamping() {
        assert_eq!(parse_rating("3"), Some(3));
        assert_eq!(parse_rating("  4 stars"), Some(4));
        assert_eq!(parse_rating("9"), Some(9));
        assert_eq!(parse_rating("-2"), Some(-2));
        assert_eq!(parse_rating("2.7"), Some(2));
    }

    #[test]
    fn non_numeric_rating_is_not_a_number() {
        assert_eq!(parse_rating("abc"), None);
        assert_eq!(parse_rating(""), None);
        assert_eq!(parse_rating("-"), None);
    }
}
