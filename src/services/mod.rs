pub mod column_service;
pub mod format_service;
pub mod item_data;
pub mod layout_sync;
pub mod table_service;
