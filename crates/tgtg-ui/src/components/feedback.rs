use crate::core::feedback::FeedbackLine;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct FeedbackViewProps {
    pub(crate) line: Option<FeedbackLine>,
}

/// Terminal-style outcome line; the message is rendered as text, never as markup.
#[function_component(FeedbackView)]
pub(crate) fn feedback_view(props: &FeedbackViewProps) -> Html {
    let Some(line) = props.line.as_ref() else {
        return html! {};
    };

    html! {
        <div class="output" role="status" aria-live="polite">
            <div class="line">
                <span class={line.kind.css_class()}>{line.marker()}</span>
                {" "}
                <span class="highlight">{line.heading()}</span>
                {" "}
                <span class="comment">{line.message.clone()}</span>
            </div>
        </div>
    }
}
