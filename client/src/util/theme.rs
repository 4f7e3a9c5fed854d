//! Apply a resolved event theme to the document root.
//!
//! Colors and font become CSS custom properties on `<html>`, and the mode
//! becomes its `data-theme` attribute. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Application is best-effort browser-only behavior; SSR paths no-op and the
//! stylesheet defaults stay in effect until hydration.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use eventkit::theme::EventTheme;

/// CSS custom properties for `theme`, in a stable order.
pub fn css_variables(theme: &EventTheme) -> [(&'static str, &str); 5] {
    [
        ("--ed-primary", theme.primary_color.as_str()),
        ("--ed-secondary", theme.secondary_color.as_str()),
        ("--ed-background", theme.background_color.as_str()),
        ("--ed-text", theme.text_color.as_str()),
        ("--ed-font", theme.font_family.as_str()),
    ]
}

/// Write `theme` onto the `<html>` element.
pub fn apply(theme: &EventTheme) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) else {
            return;
        };
        let _ = el.set_attribute("data-theme", theme.mode.as_str());
        if let Some(html) = el.dyn_ref::<web_sys::HtmlElement>() {
            let style = html.style();
            for (name, value) in css_variables(theme) {
                let _ = style.set_property(name, value);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}
