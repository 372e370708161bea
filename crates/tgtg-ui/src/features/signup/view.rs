use crate::components::submit_form::{FieldSpec, SubmitForm};
use crate::core::submit::SIGNUP;
use tgtg_api_models::TGTG_EMAIL_FIELD;
use yew::prelude::*;

#[function_component(SignupPanel)]
pub(crate) fn signup_panel() -> Html {
    let fields = vec![FieldSpec {
        name: TGTG_EMAIL_FIELD,
        label: "$ tgtg_email:",
        input_type: "email",
        placeholder: "user@example.com",
    }];

    html! {
        <section class="panel" id="signup">
            <div class="panel-head">
                <p class="comment">{"# Register a TooGoodToGo account for surprise-bag alerts"}</p>
                <h2>{"./register.sh"}</h2>
            </div>
            <SubmitForm config={SIGNUP} {fields} />
        </section>
    }
}
