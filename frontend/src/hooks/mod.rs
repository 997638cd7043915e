pub mod use_error_banner;
pub mod use_message_form;
