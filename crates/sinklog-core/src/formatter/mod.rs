//! Record formatting
//!
//! - `Formatter` trait for custom layouts
//! - `SquareBracketFormatter`: the default `[field] [field] ...` layout

mod traits;
mod square_bracket;

pub use traits::{Formatter, SharedFormatter};
pub use square_bracket::{SquareBracketFormatter, DefaultFormatter};
