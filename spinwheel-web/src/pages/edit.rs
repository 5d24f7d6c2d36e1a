use crate::i18n::{t, tr};
use crate::storage::config_store;
use spinwheel_game::{EditError, WheelEditor};
use std::collections::BTreeMap;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
enum SaveStatus {
    Idle,
    Saved,
    Rejected(EditError),
}

/// Localized explanation for a rejected save.
#[must_use]
pub fn edit_error_message(err: &EditError) -> String {
    match err {
        EditError::TooFewEntries { .. } => t("edit.error_too_few"),
        EditError::NoPositiveWeight => t("edit.error_no_weight"),
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct EditPageProps {
    /// Fired after the draft was validated and stored.
    pub on_saved: Callback<()>,
    #[prop_or_default]
    pub lang: AttrValue,
}

#[function_component(EditPage)]
pub fn edit_page(props: &EditPageProps) -> Html {
    let editor = use_state(|| WheelEditor::from_config(&config_store().load()));
    let status = use_state(|| SaveStatus::Idle);

    let edit = |apply: fn(&mut WheelEditor, usize, &str), index: usize| {
        let editor = editor.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            let mut next = (*editor).clone();
            apply(&mut next, index, &value);
            editor.set(next);
        })
    };

    let rows = editor
        .drafts()
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let on_remove = {
                let editor = editor.clone();
                Callback::from(move |_: MouseEvent| {
                    let mut next = (*editor).clone();
                    next.remove_entry(index);
                    editor.set(next);
                })
            };
            html! {
                <div class="edit-row" key={index.to_string()}>
                    <input
                        type="text"
                        class="edit-name"
                        placeholder={t("edit.name_placeholder")}
                        value={entry.name.clone()}
                        oninput={edit(WheelEditor::set_name, index)}
                    />
                    <input
                        type="number"
                        min="0"
                        step="0.01"
                        class="edit-weight"
                        aria-label={t("edit.weight_label")}
                        value={entry.weight().to_string()}
                        oninput={edit(WheelEditor::set_weight, index)}
                    />
                    <button
                        type="button"
                        class="danger"
                        aria-label={t("edit.remove")}
                        onclick={on_remove}
                    >
                        { "🗑" }
                    </button>
                </div>
            }
        })
        .collect::<Html>();

    let on_add = {
        let editor = editor.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*editor).clone();
            next.add_entry();
            editor.set(next);
        })
    };

    let on_save = {
        let editor = editor.clone();
        let status = status.clone();
        let cb = props.on_saved.clone();
        Callback::from(move |_: MouseEvent| match editor.commit(&config_store()) {
            Ok(config) => {
                log::debug!("saved wheel configuration with {} entries", config.len());
                status.set(SaveStatus::Saved);
                cb.emit(());
            }
            Err(err) => status.set(SaveStatus::Rejected(err)),
        })
    };

    let total = editor.total_weight().to_string();
    let mut args = BTreeMap::new();
    args.insert("total", total.as_str());

    let notice = match &*status {
        SaveStatus::Idle => html! {},
        SaveStatus::Saved => html! { <p class="notice success" role="status">{ t("edit.saved") }</p> },
        SaveStatus::Rejected(err) => html! {
            <p class="notice error" role="alert">{ edit_error_message(err) }</p>
        },
    };

    html! {
        <section class="page edit-page" lang={props.lang.clone()}>
            <h1>{ t("edit.title") }</h1>
            <div class="edit-rows">{ rows }</div>
            <p class="edit-total">{ tr("edit.total_weight", Some(&args)) }</p>
            { notice }
            <div class="page-actions">
                <button type="button" class="outline" onclick={on_add}>
                    { t("edit.add") }
                </button>
                <button type="button" class="primary" onclick={on_save}>
                    { t("edit.save") }
                </button>
            </div>
            <p class="edit-note">{ t("edit.note") }</p>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_validation_errors_to_messages() {
        crate::i18n::set_lang("en");
        assert_eq!(
            edit_error_message(&EditError::TooFewEntries { found: 1 }),
            "Please add at least two entries"
        );
        assert_eq!(
            edit_error_message(&EditError::NoPositiveWeight),
            "At least one entry needs a weight above 0"
        );
        crate::i18n::set_lang("th");
    }
}
