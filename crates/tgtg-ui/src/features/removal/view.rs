use crate::components::submit_form::{FieldSpec, SubmitForm};
use crate::core::submit::{DEREGISTER, UNSUBSCRIBE};
use tgtg_api_models::EMAIL_FIELD;
use yew::prelude::*;

fn email_field() -> FieldSpec {
    FieldSpec {
        name: EMAIL_FIELD,
        label: "$ email:",
        input_type: "email",
        placeholder: "user@example.com",
    }
}

#[function_component(UnsubscribePanel)]
pub(crate) fn unsubscribe_panel() -> Html {
    html! {
        <section class="panel" id="unsubscribe">
            <div class="panel-head">
                <p class="comment">{"# Stop monitoring for an address"}</p>
                <h2>{"./unsubscribe.sh"}</h2>
            </div>
            <SubmitForm config={UNSUBSCRIBE} fields={vec![email_field()]} />
        </section>
    }
}

#[function_component(DeregisterPanel)]
pub(crate) fn deregister_panel() -> Html {
    html! {
        <section class="panel danger" id="deregister">
            <div class="panel-head">
                <p class="comment">{"# Remove monitoring and purge all stored data"}</p>
                <h2>{"./deregister.sh --purge"}</h2>
            </div>
            <SubmitForm config={DEREGISTER} fields={vec![email_field()]} />
        </section>
    }
}
