use crate::i18n::{locales, set_lang, t};
use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub current_lang: AttrValue,
    pub on_lang_change: Callback<String>,
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let on_change = {
        let cb = p.on_lang_change.clone();
        Callback::from(move |e: web_sys::Event| {
            if let Some(sel) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
            {
                set_lang(&sel.value());
                cb.emit(sel.value());
            }
        })
    };
    html! {
        <header role="banner" class="app-header">
            <label for="lang-select" class="sr-only">{ t("lang.label") }</label>
            <select id="lang-select" onchange={on_change} aria-label={t("lang.label")}>
                { for locales().iter().map(|meta| html! {
                    <option value={meta.code} selected={meta.code == p.current_lang.as_str()}>
                        { meta.name }
                    </option>
                }) }
            </select>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn header_lists_locales_and_marks_current() {
        crate::i18n::set_lang("th");
        let props = Props {
            current_lang: AttrValue::from("en"),
            on_lang_change: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<Header>::with_props(props).render());
        assert!(html.contains("ไทย"));
        assert!(html.contains("English"));
        assert!(html.contains("ภาษา"));
    }
}
