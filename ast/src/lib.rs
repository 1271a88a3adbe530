//! Tagged variants for every expression and statement the parser can
//! produce, plus the `Display` impls used for diagnostics and for the
//! precedence-faithfulness tests (§8 of the spec this crate implements).

pub mod expression;
pub mod program;
pub mod statement;

pub use expression::{Block, Expression, Identifier};
pub use program::Program;
pub use statement::Statement;
