use crate::app::api::ApiCtx;
use crate::components::theme_toggle::ThemeToggle;
use crate::core::store::AppStore;
use crate::core::theme::{THEME_ATTRIBUTE, ThemeMode, load_on_start};
use crate::features::removal::view::{DeregisterPanel, UnsubscribePanel};
use crate::features::signup::view::SignupPanel;
use gloo::console;
use gloo::utils::document;
use preferences::{BrowserStorage, api_base_url};
pub(crate) use routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

mod api;
pub(crate) mod preferences;
mod routes;

#[function_component(MonitorApp)]
pub(crate) fn monitor_app() -> Html {
    let dispatch = Dispatch::<AppStore>::new();
    let theme = use_selector(|store: &AppStore| store.theme);
    let api_ctx = use_memo(|_| ApiCtx::new(api_base_url()), ());

    {
        let dispatch = dispatch.clone();
        use_effect_with_deps(
            move |_| {
                let theme = load_on_start(&BrowserStorage);
                dispatch.reduce_mut(|store| store.theme = theme);
                || ()
            },
            (),
        );
    }
    {
        let theme = *theme;
        use_effect_with_deps(
            move |_| {
                apply_theme(theme);
                || ()
            },
            theme,
        );
    }

    html! {
        <ContextProvider<ApiCtx> context={(*api_ctx).clone()}>
            <BrowserRouter>
                <header class="topbar">
                    <Link<Route> classes="brand" to={Route::Home}>{"TGTG_MONITOR"}</Link<Route>>
                    <ThemeToggle />
                </header>
                <main class="terminal">
                    <Switch<Route> render={switch} />
                </main>
            </BrowserRouter>
        </ContextProvider<ApiCtx>>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! {
            <>
                <SignupPanel />
                <UnsubscribePanel />
            </>
        },
        Route::Account => html! { <DeregisterPanel /> },
        Route::NotFound => html! {
            <section class="panel">
                <div class="line">
                    <span class="error">{"[✗]"}</span>{" "}
                    <span class="comment">{"404: route not found"}</span>
                </div>
                <Link<Route> to={Route::Home}>{"cd ~"}</Link<Route>>
            </section>
        },
    }
}

fn apply_theme(theme: ThemeMode) {
    if let Some(body) = document().body() {
        let applied = match theme.body_attribute() {
            Some(value) => body.set_attribute(THEME_ATTRIBUTE, value),
            None => body.remove_attribute(THEME_ATTRIBUTE),
        };
        if applied.is_err() {
            console::error!("theme attribute update failed", theme.as_str());
        }
    }
}

/// Mount the app on `#root`, or on `<body>` when the page has no root element.
pub fn run_app() {
    console_error_panic_hook::set_once();
    console::log!("tgtg monitor ui starting");
    if let Some(root) = document().get_element_by_id("root") {
        yew::Renderer::<MonitorApp>::with_root(root).render();
    } else {
        yew::Renderer::<MonitorApp>::new().render();
    }
}
