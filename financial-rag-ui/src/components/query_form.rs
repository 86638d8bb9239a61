//! Query input form

use leptos::{ev::SubmitEvent, prelude::*};

use crate::settings::use_settings;

/// Text currently typed into a [`QueryForm`]
///
/// Each input event replaces the whole value. Submitting hands out a copy and
/// leaves the draft untouched unless the caller resets it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryDraft {
    text: String,
}

impl QueryDraft {
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the draft with the input's current content, verbatim
    pub fn replace(&mut self, value: String) {
        self.text = value;
    }

    /// Value handed to the submit callback
    pub fn submission(&self) -> String {
        self.text.clone()
    }

    pub fn reset(&mut self) {
        self.text.clear();
    }
}

/// Query form component
///
/// Renders a text input and a submit button. The typed text is kept as
/// local state; submitting runs `on_submit` once with that text. Empty and
/// whitespace-only queries are passed through unchanged.
///
/// # Props
/// - `on_submit` - Callback receiving the submitted query
#[component]
pub fn QueryForm(
    /// Callback when the form is submitted
    on_submit: Callback<String, ()>,
) -> impl IntoView {
    let settings = use_settings();
    let clear_on_submit = settings.clear_on_submit;
    let draft = RwSignal::new(QueryDraft::default());

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let query = draft.with_untracked(QueryDraft::submission);
        log::debug!("query submitted ({} bytes)", query.len());
        on_submit.run(query);
        if clear_on_submit {
            draft.update(QueryDraft::reset);
        }
    };

    view! {
        <form class="query-form" on:submit=handle_submit>
            <input
                type="text"
                placeholder=settings.placeholder
                prop:value=move || draft.with(|d| d.text().to_string())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    draft.update(|d| d.replace(value));
                }
            />
            <button type="submit">{settings.submit_label}</button>
        </form>
    }
}
