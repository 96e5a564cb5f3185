pub mod character_list;
pub mod detail_modal;
pub mod header;
