pub mod code_block;
pub mod data_table;
pub mod page_header;
pub mod stat_card;
