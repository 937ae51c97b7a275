//! Calculator tools: `add`, `subtract`, `multiply`, `divide`.

pub mod arithmetic;
pub mod tools;

pub use arithmetic::ArithmeticError;
pub use tools::{ArithmeticTool, FloatOperands, IntOperands, Operation};
