pub mod progress_indicator;
pub mod records_table;

pub use progress_indicator::*;
pub use records_table::*;
