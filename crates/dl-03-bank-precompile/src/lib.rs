//! # DL-03 Bank Precompile
//!
//! A fixed-function contract at `0x…1001` that lets EVM code move and query
//! native-ledger balances of associated accounts.
//!
//! ## Interface
//!
//! ```solidity
//! interface IBank {
//!     function send(address from, address to, string denom, uint256 amount) external returns (bool);
//!     function balance(address acc, string denom) external view returns (uint256);
//! }
//! ```
//!
//! ## Security Rules
//!
//! | Rule | Enforcement Location |
//! |------|---------------------|
//! | Only `send` and `balance` are callable | `domain/abi.rs` - closed `BankCall` decode |
//! | Zero address is never resolved | `domain/precompile.rs` - `resolve()` |
//! | Unassociated addresses are rejected | `domain/precompile.rs` - `resolve()` |
//! | `send` is refused in static calls | `domain/precompile.rs` - `run()` |
//! | Zero-amount `send` never touches the ledger | `domain/precompile.rs` - `send()` |
//!
//! ## Gas
//!
//! `required_gas` charges a flat cost plus a per-byte cost over the argument
//! bytes (input minus the 4-byte selector). `send` uses the write schedule,
//! `balance` the read schedule. Short input or an unknown selector costs
//! zero; the call then fails in `run`.
//!
//! ## Module Structure (Hexagonal Architecture)
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  adapters/reconciler.rs - BankKeeper for BalanceReconciler      │
//! └─────────────────────────────────────────────────────────────────┘
//!                          ↑ implements ↑
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  ports/inbound.rs  - PrecompiledContract                        │
//! │  ports/outbound.rs - BankKeeper                                 │
//! └─────────────────────────────────────────────────────────────────┘
//!                          ↑ uses ↑
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  domain/precompile.rs - BankPrecompile (gas + dispatch)         │
//! │  domain/abi.rs        - IBank bindings, BankCall decode         │
//! │  domain/entities.rs   - BankMethod, CallContext, config         │
//! │  domain/errors.rs     - PrecompileError                         │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;

pub use domain::*;
pub use ports::*;
