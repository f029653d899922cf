mod options;
mod size;
mod walker;

pub use options::{ErrorPolicy, ScanOptions};
pub use size::{format_size, parse_size, UNITS};
pub use walker::{directory_size, dirs_at_depth};
