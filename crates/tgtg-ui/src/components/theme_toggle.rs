use crate::app::preferences::{BrowserStorage, log_storage_error};
use crate::core::store::{AppStore, apply_toggle};
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

#[function_component(ThemeToggle)]
pub(crate) fn theme_toggle() -> Html {
    let theme = *use_selector(|store: &AppStore| store.theme);
    let onclick = Callback::from(move |_: MouseEvent| {
        Dispatch::<AppStore>::new().reduce_mut(|store| {
            if let Err(err) = apply_toggle(store, &mut BrowserStorage) {
                log_storage_error(&err);
            }
        });
    });

    html! {
        <button type="button" class="theme-toggle" aria-label="Toggle theme" {onclick}>
            <span id="theme-icon">{theme.icon()}</span>
            <span id="theme-text">{theme.label()}</span>
        </button>
    }
}
