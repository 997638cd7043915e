use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub message: String,
    pub visible: bool,
}

/// The `#errorMessage` element; styling keys off the `show` class
#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    html! {
        <div
            id="errorMessage"
            class={classes!("error-message", props.visible.then_some("show"))}
            role="alert"
        >
            {&props.message}
        </div>
    }
}
