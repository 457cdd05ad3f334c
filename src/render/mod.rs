pub mod export;
pub mod table;

pub use export::{export_to_path, write_csv, write_json, write_schedule};
pub use table::{DateFormats, write_table};
