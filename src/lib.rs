//! TUI Snake (workspace facade crate).
//!
//! Re-exports the member crates under one roof so the binary, the integration
//! tests and the benches can use `tui_snake::{core,input,store,term,types}`.

pub use tui_snake_core as core;
pub use tui_snake_input as input;
pub use tui_snake_store as store;
pub use tui_snake_term as term;
pub use tui_snake_types as types;
