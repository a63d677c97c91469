//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Golden move lists and flipping
//! - `make_move.rs` - Castling, en passant, promotion and rights bookkeeping
//! - `search.rs` - Search outcomes on small fixtures
//! - `proptest.rs` - Property-based tests over random playouts

mod proptest;
