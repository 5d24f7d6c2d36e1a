use crate::dom::confirm;
use crate::i18n::{fmt_timestamp, t, tr};
use crate::storage::history_log;
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct HistoryPageProps {
    pub on_back: Callback<()>,
    #[prop_or_default]
    pub lang: AttrValue,
}

#[function_component(HistoryPage)]
pub fn history_page(props: &HistoryPageProps) -> Html {
    let entries = use_state(|| history_log().load());

    let go_back = {
        let cb = props.on_back.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let on_clear = {
        let entries = entries.clone();
        Callback::from(move |_: MouseEvent| {
            if confirm(&t("history.confirm_clear")) {
                history_log().clear();
                entries.set(Vec::new());
            }
        })
    };

    let count = entries.len().to_string();
    let mut args = BTreeMap::new();
    args.insert("count", count.as_str());

    let body = if entries.is_empty() {
        html! {
            <div class="history-empty">
                <p>{ t("history.empty") }</p>
                <p>{ t("history.empty_hint") }</p>
            </div>
        }
    } else {
        html! {
            <table class="history-table">
                <thead>
                    <tr>
                        <th class="col-id">{ t("history.col_id") }</th>
                        <th>{ t("history.col_result") }</th>
                        <th class="col-time">{ t("history.col_time") }</th>
                    </tr>
                </thead>
                <tbody>
                    { for entries.iter().map(|entry| html! {
                        <tr key={entry.id.to_string()}>
                            <td class="col-id">{ entry.id.to_string() }</td>
                            <td class="col-result">{ entry.result_name.clone() }</td>
                            <td class="col-time">{ fmt_timestamp(&entry.timestamp) }</td>
                        </tr>
                    }) }
                </tbody>
            </table>
        }
    };

    html! {
        <section class="page history-page" lang={props.lang.clone()}>
            <div class="page-heading">
                <h1>{ t("history.title") }</h1>
                <button type="button" class="outline" onclick={go_back}>
                    { t("nav.back_to_wheel") }
                </button>
            </div>
            <div class="card">
                <div class="card-header">
                    <h2>{ tr("history.recent", Some(&args)) }</h2>
                    <button
                        type="button"
                        class="danger"
                        onclick={on_clear}
                        disabled={entries.is_empty()}
                    >
                        { t("history.clear") }
                    </button>
                </div>
                { body }
            </div>
        </section>
    }
}
