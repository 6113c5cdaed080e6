//! Case transformations: snake_case to PascalCase and case toggling.

mod pascal;
mod toggle;

pub use pascal::{batch_to_pascal_case, capitalize, to_pascal_case};
pub use toggle::{toggle_case, toggle_case_unicode};
