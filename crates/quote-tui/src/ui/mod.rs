pub mod app;
pub mod footer;
pub mod header;
pub mod help_modal;
pub mod quote_card;
pub mod quote_list_modal;
