use crate::components::header::Header;
use crate::i18n;
use crate::pages::{
    edit::EditPage, history::HistoryPage, not_found::NotFound, spin::SpinPage,
};
use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

fn navigate(navigator: Option<&Navigator>, target: Route) -> Callback<()> {
    let navigator = navigator.cloned();
    Callback::from(move |()| {
        if let Some(nav) = navigator.as_ref() {
            nav.push(&target);
        }
    })
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <AppInner />
        </BrowserRouter>
    }
}

#[function_component(AppInner)]
pub fn app_inner() -> Html {
    let current_lang = use_state(i18n::current_lang);
    let navigator = use_navigator();
    let route = use_route::<Route>().unwrap_or(Route::NotFound);

    if route == Route::Home {
        return html! { <Redirect<Route> to={Route::Spin} /> };
    }

    let on_lang_change = {
        let current_lang = current_lang.clone();
        Callback::from(move |code: String| current_lang.set(code))
    };
    let lang = AttrValue::from((*current_lang).clone());

    let page = match route.canonical() {
        Route::Spin | Route::Home => html! {
            <SpinPage
                on_history={navigate(navigator.as_ref(), Route::History)}
                on_edit={navigate(navigator.as_ref(), Route::Edit)}
                lang={lang.clone()}
            />
        },
        Route::Edit => html! {
            <EditPage on_saved={navigate(navigator.as_ref(), Route::Spin)} lang={lang.clone()} />
        },
        Route::History => html! {
            <HistoryPage on_back={navigate(navigator.as_ref(), Route::Spin)} lang={lang.clone()} />
        },
        Route::NotFound => html! {
            <NotFound on_back_to_wheel={navigate(navigator.as_ref(), Route::Spin)} />
        },
    };

    html! {
        <>
            <Header current_lang={lang} {on_lang_change} />
            <main id="main">{ page }</main>
        </>
    }
}
