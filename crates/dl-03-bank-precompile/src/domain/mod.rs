//! # Domain Layer - Bank Precompile

pub mod abi;
pub mod entities;
pub mod errors;
pub mod precompile;

pub use abi::{BankCall, IBank};
pub use entities::*;
pub use errors::*;
pub use precompile::*;
