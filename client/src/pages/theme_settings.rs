//! Event-admin theme customization.
//!
//! The form starts from the event's resolved theme. Saving sends only the
//! values that differ from the chosen preset, so switching presets later
//! still picks up the new preset's colors.

#[cfg(test)]
#[path = "theme_settings_test.rs"]
mod theme_settings_test;

use eventkit::PageAccess;
use eventkit::theme::{EventTheme, FONTS, THEMES, ThemeMode, ThemeOverrides, theme_preset};
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::page_shell::PageShell;

/// Editable copy of an event theme.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ThemeForm {
    pub theme_key: String,
    pub primary_color: String,
    pub secondary_color: String,
    pub font_key: String,
    pub mode: ThemeMode,
}

impl ThemeForm {
    pub fn from_theme(theme: &EventTheme) -> Self {
        Self {
            theme_key: theme.theme_key.clone(),
            primary_color: theme.primary_color.clone(),
            secondary_color: theme.secondary_color.clone(),
            font_key: theme.font_key.clone(),
            mode: theme.mode,
        }
    }

    /// Switch preset and reset every preset-derived value.
    pub fn select_preset(&mut self, key: &str) {
        if let Some(preset) = theme_preset(key) {
            self.theme_key = preset.key.to_owned();
            self.primary_color = preset.primary_color.to_owned();
            self.secondary_color = preset.secondary_color.to_owned();
            self.font_key = preset.font_key.to_owned();
            self.mode = preset.mode;
        }
    }

    /// Overrides relative to the selected preset. Colors compare case-insensitively.
    pub fn to_overrides(&self) -> ThemeOverrides {
        let preset = theme_preset(&self.theme_key);
        let differs = |value: &str, preset_value: Option<&str>| {
            let value = value.trim();
            (!value.is_empty() && preset_value.is_none_or(|p| !p.eq_ignore_ascii_case(value))).then(|| value.to_owned())
        };
        ThemeOverrides {
            theme_key: differs(&self.theme_key, None),
            primary_color: differs(&self.primary_color, preset.map(|p| p.primary_color)),
            secondary_color: differs(&self.secondary_color, preset.map(|p| p.secondary_color)),
            font_key: differs(&self.font_key, preset.map(|p| p.font_key)),
            mode: Some(self.mode).filter(|m| preset.is_none_or(|p| p.mode != *m)),
        }
    }
}

#[component]
pub fn ThemeSettingsPage() -> impl IntoView {
    let params = use_params_map();
    let identifier = move || params.read().get("identifier").unwrap_or_default();
    let form = RwSignal::new(ThemeForm::default());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    Effect::new(move || {
        let identifier = identifier();
        if identifier.is_empty() {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_event_theme(&identifier).await {
                Ok(theme) => form.set(ThemeForm::from_theme(&theme)),
                Err(e) => info.set(format!("Could not load theme: {e}")),
            }
        });
    });

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let overrides = form.with(ThemeForm::to_overrides);
        if let Err(e) = overrides.validate() {
            info.set(e.to_string());
            return;
        }
        busy.set(true);
        info.set("Saving...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let identifier = identifier();
            leptos::task::spawn_local(async move {
                match crate::net::api::save_event_theme(&identifier, &overrides).await {
                    Ok(theme) => {
                        crate::util::theme::apply(&theme);
                        form.set(ThemeForm::from_theme(&theme));
                        info.set("Theme saved.".to_owned());
                    }
                    Err(e) => info.set(format!("Save failed: {e}")),
                }
                busy.set(false);
            });
        }
    };

    view! {
        <PageShell page=PageAccess::ThemeSettings>
            <form class="theme-form" on:submit=on_save>
                <label>
                    "Theme"
                    <select
                        prop:value=move || form.with(|f| f.theme_key.clone())
                        on:change=move |ev| form.update(|f| f.select_preset(&event_target_value(&ev)))
                    >
                        {THEMES.iter().map(|t| view! { <option value=t.key>{t.name}</option> }).collect_view()}
                    </select>
                </label>
                <label>
                    "Primary color"
                    <input
                        type="color"
                        prop:value=move || form.with(|f| f.primary_color.clone())
                        on:input=move |ev| form.update(|f| f.primary_color = event_target_value(&ev))
                    />
                </label>
                <label>
                    "Secondary color"
                    <input
                        type="color"
                        prop:value=move || form.with(|f| f.secondary_color.clone())
                        on:input=move |ev| form.update(|f| f.secondary_color = event_target_value(&ev))
                    />
                </label>
                <label>
                    "Font"
                    <select
                        prop:value=move || form.with(|f| f.font_key.clone())
                        on:change=move |ev| form.update(|f| f.font_key = event_target_value(&ev))
                    >
                        {FONTS.iter().map(|f| view! { <option value=f.key>{f.family}</option> }).collect_view()}
                    </select>
                </label>
                <label>
                    <input
                        type="checkbox"
                        prop:checked=move || form.with(|f| f.mode == ThemeMode::Dark)
                        on:change=move |ev| {
                            let dark = event_target_checked(&ev);
                            form.update(|f| f.mode = if dark { ThemeMode::Dark } else { ThemeMode::Light });
                        }
                    />
                    "Dark mode"
                </label>
                <button class="theme-form__save" type="submit" disabled=move || busy.get()>
                    "Save theme"
                </button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="theme-form__message">{move || info.get()}</p>
            </Show>
        </PageShell>
    }
}
