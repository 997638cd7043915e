use shared::{submission, DataTransport, MessageFormInput, SubmitFailure, SEND_FAILURE_MESSAGE};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::use_error_banner::{use_error_banner, BannerState};
use crate::services::{logging::Logger, navigation::navigate_to};

const COMPONENT: &str = "MessageForm";

/// Handles to the three form fields, read only when the form is submitted
#[derive(Clone, Default, PartialEq)]
pub struct MessageFormRefs {
    pub name: NodeRef,
    pub value: NodeRef,
    pub description: NodeRef,
}

impl MessageFormRefs {
    pub fn read_input(&self) -> MessageFormInput {
        MessageFormInput {
            name: read_field(&self.name),
            value: read_field(&self.value),
            description: read_field(&self.description),
        }
    }
}

/// Current text of an `<input>` or `<textarea>`, empty when unmounted
pub fn read_field(node: &NodeRef) -> String {
    let Some(element) = node.get() else {
        return String::new();
    };

    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(textarea) = element.dyn_ref::<HtmlTextAreaElement>() {
        textarea.value()
    } else {
        String::new()
    }
}

pub struct UseMessageFormResult {
    /// True between a valid submit and its failure; the button is disabled meanwhile
    pub submitting: bool,
    pub banner: BannerState,
    pub refs: MessageFormRefs,
    pub on_submit: Callback<SubmitEvent>,
}

#[hook]
pub fn use_message_form<T>(transport: &T) -> UseMessageFormResult
where
    T: DataTransport + Clone + PartialEq + 'static,
{
    let refs = MessageFormRefs {
        name: use_node_ref(),
        value: use_node_ref(),
        description: use_node_ref(),
    };
    let submitting = use_state(|| false);
    let banner = use_error_banner();

    let on_submit = {
        let refs = refs.clone();
        let submitting = submitting.clone();
        let show_error = banner.show.clone();
        let hide_error = banner.hide.clone();

        use_callback(transport.clone(), move |e: SubmitEvent, transport: &T| {
            e.prevent_default();

            let payload = match refs.read_input().into_payload() {
                Ok(payload) => payload,
                Err(failure) => {
                    show_error.emit(failure.banner_message());
                    return;
                }
            };

            submitting.set(true);
            hide_error.emit(());

            let transport = transport.clone();
            let submitting = submitting.clone();
            let show_error = show_error.clone();

            spawn_local(async move {
                match submission::submit(&transport, &payload).await {
                    Ok(redirect) => {
                        // The page is replaced on success, so the loading state stays
                        if let Err(e) = navigate_to(&redirect) {
                            Logger::error_with_component(COMPONENT, &e);
                            show_error.emit(SEND_FAILURE_MESSAGE.to_string());
                            submitting.set(false);
                        }
                    }
                    Err(failure) => {
                        log_failure(&failure);
                        show_error.emit(failure.banner_message());
                        submitting.set(false);
                    }
                }
            });
        })
    };

    UseMessageFormResult {
        submitting: *submitting,
        banner: banner.state,
        refs,
        on_submit,
    }
}

fn log_failure(failure: &SubmitFailure) {
    let message = format!("Submission failed: {}", failure);
    match failure {
        SubmitFailure::Server { .. } => Logger::warn_with_component(COMPONENT, &message),
        _ => Logger::error_with_component(COMPONENT, &message),
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_unmounted_fields_read_as_empty() {
        let refs = MessageFormRefs::default();
        let input = refs.read_input();

        assert_eq!(input, MessageFormInput::default());
        assert_eq!(input.into_payload(), Err(SubmitFailure::MissingRequiredFields));
    }
}
