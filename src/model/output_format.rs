use strum_macros::{Display, EnumString};

/// How a schedule is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum OutputFormat {
    Table,
    Csv,
    Json,
}
