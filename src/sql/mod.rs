//! SQL builder: identifiers from table declarations only, values as parameters.

mod builder;
pub use builder::*;
