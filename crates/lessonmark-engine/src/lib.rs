pub mod annotations;
pub mod content;
pub mod io;
pub mod markup;
pub mod math;
pub mod validation;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use annotations::*;
pub use content::*;
pub use markup::{MarkupText, parse, parse_str};
pub use math::{MathEngine, MathOutput, MathRenderer};
pub use validation::{ValidationResult, validate};
