//! term-blocks (workspace facade crate).
//!
//! Re-exports the workspace crates as `term_blocks::{core,input,term,types}`
//! so the binary, integration tests, and benches share one import surface.

pub use term_blocks_core as core;
pub use term_blocks_input as input;
pub use term_blocks_term as term;
pub use term_blocks_types as types;
