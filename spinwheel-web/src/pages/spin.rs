use crate::components::SpinWheel;
use crate::i18n::t;
use crate::storage::config_store;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SpinPageProps {
    pub on_history: Callback<()>,
    pub on_edit: Callback<()>,
    #[prop_or_default]
    pub seed: Option<u64>,
    #[prop_or_default]
    pub lang: AttrValue,
}

#[function_component(SpinPage)]
pub fn spin_page(props: &SpinPageProps) -> Html {
    let config = use_memo((), |()| config_store().load());

    let open_history = {
        let cb = props.on_history.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let open_editor = {
        let cb = props.on_edit.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <section class="page spin-page">
            <h1>{ t("app.title") }</h1>
            <SpinWheel
                config={(*config).clone()}
                on_edit={props.on_edit.clone()}
                seed={props.seed}
                lang={props.lang.clone()}
            />
            <nav class="page-actions">
                <button type="button" class="secondary" onclick={open_history}>
                    { t("nav.history") }
                </button>
                <button type="button" class="outline" onclick={open_editor}>
                    { t("nav.edit") }
                </button>
            </nav>
        </section>
    }
}
