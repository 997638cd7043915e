pub mod error_banner;
pub mod message_form;
