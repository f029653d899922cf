pub mod evaluator;
pub mod recipient;
pub mod service;
pub mod types;

pub use evaluator::find_over_quota;
pub use recipient::{DirNameResolver, RecipientResolver};
pub use service::CheckRunner;
pub use types::{CheckOptions, CheckReport, DirectoryRecord, FilesystemSnapshot};
