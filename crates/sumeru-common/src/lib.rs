pub mod errors;
pub mod types;

pub use errors::{ConfigError, LayoutError, SumeruError};
pub use types::{Color, Rect, Region};

pub type Result<T> = std::result::Result<T, SumeruError>;
