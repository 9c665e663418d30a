pub use crate::board::*;
pub use crate::error::*;
pub use crate::solver::*;

#[cfg(test)]
pub use crate::testing::*;
