//! libtable-core
//!
//! Shared building blocks for the input-method table tools: a lossless
//! reader/writer for `BEGIN_TABLE`/`END_TABLE` table files, the in-memory
//! `Table`, marked-key priority adjustment, line filters and a small prefix
//! trie used by the language crates for longest-match lookups.
//!
//! Public API:
//! - `TableFile`, `parse`, `serialize` - table file codec
//! - `Table`, `TableEntry` - ordered `(key, character) -> weight` mapping
//! - `PriorityAdjuster`, `DemotionRule` - demotion of unmarked competitors
//! - `PrefixTrie` - longest-prefix lookup
//! - `TableError` - error type for everything above

pub mod codec;
pub use codec::{parse, serialize, TableFile, BEGIN_SENTINEL, END_SENTINEL};

pub mod config;
pub use config::DemotionRule;

pub mod error;
pub use error::{Result, TableError};

pub mod filter;
pub use filter::{is_cjk_compatibility_ideograph, remove_lines_containing};

pub mod priority;
pub use priority::{adjust, PriorityAdjuster};

pub mod table;
pub use table::{Table, TableEntry};

pub mod trie;
pub use trie::PrefixTrie;
