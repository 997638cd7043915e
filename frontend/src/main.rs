use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::message_form::MessageForm;
use services::api::ApiClient;

#[function_component(App)]
fn app() -> Html {
    let transport = ApiClient::new();

    html! {
        <main class="container">
            <h1>{"메시지 보내기"}</h1>
            <MessageForm<ApiClient> {transport} />
        </main>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
