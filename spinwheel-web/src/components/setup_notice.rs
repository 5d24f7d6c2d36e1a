use crate::i18n::t;
use yew::prelude::*;

/// Shown instead of the wheel when the configuration cannot be spun.
#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub on_edit: Callback<()>,
}

#[function_component(SetupNotice)]
pub fn setup_notice(p: &Props) -> Html {
    let open_editor = {
        let cb = p.on_edit.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div class="setup-notice" role="alert">
            <p class="setup-notice-title">{ t("wheel.not_ready_title") }</p>
            <p class="setup-notice-hint">{ t("wheel.not_ready_hint") }</p>
            <button type="button" class="link-button" onclick={open_editor}>
                { t("wheel.open_editor") }
            </button>
        </div>
    }
}
