// Application layer - errors shared by every front end.
// The interactive shell drives the domain ledger directly.

pub mod error;

pub use error::*;
