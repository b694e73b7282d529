//! Cross-crate integration flows.

mod admission;
mod flows;
