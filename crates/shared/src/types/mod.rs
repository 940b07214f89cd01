//! Common types used across the workspace.

pub mod price;
pub mod zero_major;

pub use price::Price;
pub use zero_major::ZeroMajor;
