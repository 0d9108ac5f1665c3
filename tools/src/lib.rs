//! Command line tools rewriting input-method tables in place.
//!
//! Each tool reads one table, transforms it in memory and writes the result
//! only once everything succeeded:
//! - `improve_cangjie5` - demote unmarked competitors of `x`-prefixed keys
//! - `improve_jyutping` - backfill frequencies and add tone-letter keys
//! - `remove_cjk_compatibility_ideographs` - drop lines with compatibility ideographs

pub mod cangjie;
pub mod compat;
pub mod jyutping;
pub mod logging;
pub mod output;
