//! Form bound to a [`Submitter`] preset.
//!
//! # Design
//! - Inputs are controlled so a successful submission can reset them from state.
//! - The submitter lives in a `RefCell` owned by this component; no borrow spans an await.
//! - Showing a new line replaces any pending auto-hide timer.

use crate::app::api::ApiCtx;
use crate::components::feedback::FeedbackView;
use crate::core::feedback::{FeedbackLine, FeedbackSlot};
use crate::core::submit::{FormFields, SubmitError, Submitter, SubmitterConfig, dispatch};
use gloo::console;
use gloo::dialogs::confirm;
use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// One input rendered by [`SubmitForm`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct FieldSpec {
    /// Form field name sent to the endpoint.
    pub(crate) name: &'static str,
    /// Prompt-style label shown before the input.
    pub(crate) label: &'static str,
    /// HTML input type.
    pub(crate) input_type: &'static str,
    /// Placeholder text.
    pub(crate) placeholder: &'static str,
}

#[derive(Properties, PartialEq)]
pub(crate) struct SubmitFormProps {
    pub(crate) config: SubmitterConfig,
    pub(crate) fields: Vec<FieldSpec>,
}

#[function_component(SubmitForm)]
pub(crate) fn submit_form(props: &SubmitFormProps) -> Html {
    let api_ctx = use_context::<ApiCtx>();
    let config = props.config;
    let submitter = use_mut_ref(move || Submitter::new(config));
    let control = use_state(move || Submitter::new(config).control());
    let values = {
        let len = props.fields.len();
        use_state(move || vec![String::new(); len])
    };
    let feedback = use_state(|| None as Option<FeedbackLine>);
    let slot = use_mut_ref(FeedbackSlot::<Timeout>::default);

    let Some(api_ctx) = api_ctx else {
        return html! {
            <p class="error">{"Missing API context."}</p>
        };
    };

    let show = {
        let feedback = feedback.clone();
        let slot = slot.clone();
        Callback::from(move |line: FeedbackLine| {
            let hide = feedback.clone();
            slot.borrow_mut().show(&line, |millis| Timeout::new(millis, move || hide.set(None)));
            feedback.set(Some(line));
        })
    };

    let onsubmit = {
        let specs = props.fields.clone();
        let submitter = submitter.clone();
        let control = control.clone();
        let values = values.clone();
        let show = show.clone();
        let transport = api_ctx.transport.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let fields = specs
                .iter()
                .zip(values.iter())
                .fold(FormFields::new(), |fields, (spec, value)| {
                    fields.with(spec.name, value.as_str())
                });

            let begun = submitter.borrow_mut().begin(&fields, confirm);
            let request = match begun {
                Ok(request) => request,
                Err(err) => {
                    if let Some(line) = err.feedback() {
                        show.emit(line);
                    }
                    return;
                }
            };
            control.set(submitter.borrow().control());
            if let Some(line) = submitter.borrow().pending_feedback() {
                show.emit(line);
            }

            let submitter = submitter.clone();
            let control = control.clone();
            let values = values.clone();
            let show = show.clone();
            let transport = transport.clone();
            let field_count = specs.len();
            yew::platform::spawn_local(async move {
                let outcome = dispatch(&*transport, &request).await;
                if let Err(SubmitError::Decode { endpoint, detail }) = &outcome {
                    console::error!("form response decode failed", *endpoint, detail.as_str());
                }
                let completion = submitter.borrow_mut().finish(outcome);
                if completion.clear_form {
                    values.set(vec![String::new(); field_count]);
                }
                show.emit(completion.feedback);
                control.set(submitter.borrow().control());
            });
        })
    };

    html! {
        <form class="terminal-form" {onsubmit}>
            {for props.fields.iter().enumerate().map(|(index, spec)| {
                let oninput = {
                    let values = values.clone();
                    Callback::from(move |event: InputEvent| {
                        if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                            let mut next = (*values).clone();
                            if let Some(entry) = next.get_mut(index) {
                                *entry = input.value();
                            }
                            values.set(next);
                        }
                    })
                };
                let value = values.get(index).cloned().unwrap_or_default();
                html! {
                    <label class="prompt">
                        <span class="highlight">{spec.label}</span>
                        <input
                            type={spec.input_type}
                            name={spec.name}
                            placeholder={spec.placeholder}
                            {value}
                            {oninput}
                        />
                    </label>
                }
            })}
            <button type="submit" class="execute" disabled={control.disabled}>
                {control.label}
            </button>
            <FeedbackView line={(*feedback).clone()} />
        </form>
    }
}
