//! Adapters layer for the bank precompile.

pub mod reconciler;
