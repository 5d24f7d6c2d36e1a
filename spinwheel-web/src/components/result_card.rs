use crate::i18n::t;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Last winner; `None` shows the placeholder.
    #[prop_or_default]
    pub result: Option<AttrValue>,
}

#[function_component(ResultCard)]
pub fn result_card(p: &Props) -> Html {
    let won = p.result.is_some();
    let text = p
        .result
        .as_ref()
        .map_or_else(|| t("wheel.placeholder"), |name| format!("🎉 {name}"));
    html! {
        <section class={classes!("result-card", won.then_some("is-won"))} aria-live="polite">
            <h2 class="result-title">{ t("wheel.result_title") }</h2>
            <div class="result-value">{ text }</div>
        </section>
    }
}
