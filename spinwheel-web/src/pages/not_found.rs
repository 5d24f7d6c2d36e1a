use crate::i18n::t;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NotFoundProps {
    /// Navigates back to the wheel page.
    pub on_back_to_wheel: Callback<()>,
}

#[function_component(NotFound)]
pub fn not_found(props: &NotFoundProps) -> Html {
    let back_to_wheel = props.on_back_to_wheel.reform(|_: MouseEvent| ());

    html! {
        <section class="page not-found" aria-live="assertive">
            <p class="not-found-icon" aria-hidden="true">{ "🎡" }</p>
            <h1>{ t("not_found.title") }</h1>
            <p>{ t("not_found.message") }</p>
            <button type="button" class="primary" onclick={back_to_wheel}>
                { t("not_found.back") }
            </button>
        </section>
    }
}
