//! Event-admin field mapping: upload a file, review suggested standard
//! fields per header, and submit the confirmed mapping.
//!
//! The in-progress choices are kept as a per-event draft in `localStorage`
//! and dropped on logout.

#[cfg(test)]
#[path = "field_mapping_test.rs"]
mod field_mapping_test;

use eventkit::PageAccess;
use eventkit::fields::{self, FieldMapping, HeaderSuggestion, STANDARD_FIELDS};
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use serde::{Deserialize, Serialize};

use crate::components::page_shell::PageShell;
use crate::util::persistence;

const DRAFT_KIND: &str = "field-mapping";

/// One uploaded header and the standard field chosen for it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingChoice {
    pub header: String,
    pub field: Option<String>,
}

pub fn choices_from_suggestions(suggestions: &[HeaderSuggestion]) -> Vec<MappingChoice> {
    suggestions
        .iter()
        .map(|s| MappingChoice { header: s.header.clone(), field: s.suggested_field.clone() })
        .collect()
}

/// Choose `field` for row `index`. An empty value unmaps the row; a field
/// already chosen on another row moves to this one.
pub fn set_choice(choices: &mut [MappingChoice], index: usize, field: &str) {
    let field = (!field.is_empty()).then(|| field.to_owned());
    if let Some(key) = &field {
        for other in choices.iter_mut() {
            if other.field.as_ref() == Some(key) {
                other.field = None;
            }
        }
    }
    if let Some(choice) = choices.get_mut(index) {
        choice.field = field;
    }
}

/// Mapped rows as submission records; unmapped headers are skipped.
pub fn mappings_from_choices(choices: &[MappingChoice]) -> Vec<FieldMapping> {
    choices
        .iter()
        .filter_map(|c| {
            c.field
                .as_ref()
                .map(|f| FieldMapping { source_header: c.header.clone(), standard_field: f.clone() })
        })
        .collect()
}

/// What to do with the stored draft after `choices` changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftAction {
    /// The draft for this event has not been restored yet.
    Wait,
    Clear,
    Save,
}

pub fn draft_action(loaded_for: Option<&str>, identifier: &str, choices: &[MappingChoice]) -> DraftAction {
    if loaded_for != Some(identifier) {
        DraftAction::Wait
    } else if choices.is_empty() {
        DraftAction::Clear
    } else {
        DraftAction::Save
    }
}

#[component]
pub fn FieldMappingPage() -> impl IntoView {
    let params = use_params_map();
    let identifier = move || params.read().get("identifier").unwrap_or_default();
    let choices = RwSignal::new(Vec::<MappingChoice>::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let file_input = NodeRef::<leptos::html::Input>::new();

    // Restore the draft for this event once, then mirror every change into it.
    // Saving waits until the restore for the current event has run, so the
    // initial empty list never wipes a stored draft.
    let draft_loaded_for = RwSignal::new(None::<String>);
    Effect::new(move || {
        let identifier = identifier();
        choices.set(persistence::load_draft(DRAFT_KIND, &identifier).unwrap_or_default());
        draft_loaded_for.set(Some(identifier));
    });
    Effect::new(move || {
        let identifier = identifier();
        let loaded_for = draft_loaded_for.get();
        choices.with(|c| match draft_action(loaded_for.as_deref(), &identifier, c) {
            DraftAction::Wait => {}
            DraftAction::Clear => persistence::clear_draft(DRAFT_KIND, &identifier),
            DraftAction::Save => persistence::save_draft(DRAFT_KIND, &identifier, c),
        });
    });

    let on_upload = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let Some(file) = file_input.get().and_then(|input| input.files()).and_then(|files| files.get(0)) else {
                info.set("Choose a file first.".to_owned());
                return;
            };
            busy.set(true);
            info.set("Reading headers...".to_owned());
            let identifier = identifier();
            leptos::task::spawn_local(async move {
                match crate::net::api::suggest_mapping(&identifier, &file).await {
                    Ok(outcome) if outcome.suggestions.is_empty() => {
                        choices.set(Vec::new());
                        info.set("No header row found in the file.".to_owned());
                    }
                    Ok(outcome) => {
                        choices.set(choices_from_suggestions(&outcome.suggestions));
                        info.set(String::new());
                    }
                    Err(e) => info.set(format!("Upload failed: {e}")),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = file_input;
    };

    let on_submit = move |_| {
        if busy.get() {
            return;
        }
        let mappings = choices.with(|c| mappings_from_choices(c));
        if let Err(e) = fields::validate_mappings(&mappings) {
            info.set(e.to_string());
            return;
        }
        busy.set(true);
        info.set("Submitting...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let identifier = identifier();
            leptos::task::spawn_local(async move {
                match crate::net::api::submit_mapping(&identifier, &mappings).await {
                    Ok(outcome) => info.set(format!("Saved {} mapped fields.", outcome.mapped_count)),
                    Err(e) => info.set(format!("Submit failed: {e}")),
                }
                busy.set(false);
            });
        }
    };

    let rows = move || {
        choices
            .get()
            .into_iter()
            .enumerate()
            .map(|(index, choice)| {
                let selected = choice.field.clone().unwrap_or_default();
                view! {
                    <tr>
                        <td>{choice.header}</td>
                        <td>
                            <select
                                prop:value=selected
                                on:change=move |ev| {
                                    let value = event_target_value(&ev);
                                    choices.update(|c| set_choice(c, index, &value));
                                }
                            >
                                <option value="">"(ignore)"</option>
                                {STANDARD_FIELDS
                                    .iter()
                                    .map(|f| {
                                        let label = if f.required { format!("{} *", f.label) } else { f.label.to_owned() };
                                        view! { <option value=f.key>{label}</option> }
                                    })
                                    .collect_view()}
                            </select>
                        </td>
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <PageShell page=PageAccess::FieldMapping>
            <form class="mapping-upload" on:submit=on_upload>
                <input type="file" accept=".csv,text/csv" node_ref=file_input/>
                <button type="submit" disabled=move || busy.get()>"Suggest mapping"</button>
            </form>
            <Show when=move || choices.with(|c| !c.is_empty())>
                <table class="mapping-table">
                    <thead>
                        <tr>
                            <th>"File header"</th>
                            <th>"Standard field"</th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
                <button class="mapping-submit" on:click=on_submit disabled=move || busy.get()>
                    "Save mapping"
                </button>
            </Show>
            <Show when=move || !info.get().is_empty()>
                <p class="mapping-message">{move || info.get()}</p>
            </Show>
        </PageShell>
    }
}
