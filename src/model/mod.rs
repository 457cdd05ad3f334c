pub mod output_format;
pub mod pay_entry;
pub mod reference_month;

pub use output_format::OutputFormat;
pub use pay_entry::PayEntry;
