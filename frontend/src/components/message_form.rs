use shared::DataTransport;
use yew::prelude::*;

use super::error_banner::ErrorBanner;
use crate::hooks::use_message_form::use_message_form;

/// `transport` carries valid submissions to the data endpoint
#[derive(Properties, PartialEq)]
pub struct MessageFormProps<T: PartialEq> {
    pub transport: T,
}

#[function_component(MessageForm)]
pub fn message_form<T>(props: &MessageFormProps<T>) -> Html
where
    T: DataTransport + Clone + PartialEq + 'static,
{
    let form = use_message_form(&props.transport);

    let (text_display, loading_display) = if form.submitting {
        ("display: none", "display: inline")
    } else {
        ("display: inline", "display: none")
    };

    html! {
        <section class="message-section">
            <ErrorBanner
                message={form.banner.message.clone()}
                visible={form.banner.visible}
            />

            <form id="messageForm" class="message-form" onsubmit={form.on_submit.clone()}>
                <div class="form-group">
                    <label for="name">{"이름"}</label>
                    <input
                        type="text"
                        id="name"
                        name="name"
                        placeholder="이름을 입력하세요"
                        ref={form.refs.name.clone()}
                    />
                </div>

                <div class="form-group">
                    <label for="value">{"메시지"}</label>
                    <textarea
                        id="value"
                        name="value"
                        rows="4"
                        placeholder="메시지를 입력하세요"
                        ref={form.refs.value.clone()}
                    />
                </div>

                <div class="form-group">
                    <label for="description">{"설명 (선택)"}</label>
                    <input
                        type="text"
                        id="description"
                        name="description"
                        placeholder="추가 설명"
                        ref={form.refs.description.clone()}
                    />
                </div>

                <button type="submit" class="submit-btn" disabled={form.submitting}>
                    <span class="btn-text" style={text_display}>{"전송하기"}</span>
                    <span class="btn-loading" style={loading_display}>{"전송 중..."}</span>
                </button>
            </form>
        </section>
    }
}
