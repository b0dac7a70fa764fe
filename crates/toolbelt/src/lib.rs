//! Small utilities bundled together.
//!
//! - `geom2`: polygon collision (edge crossing or vertex containment), the
//!   only part with real algorithmic content.
//! - `store`: in-memory key-value map.
//! - `words`: top-k word frequencies.
//! - `files`: recursive directory copy and per-file line counts.
//! - `journal`: the explicit audit-log sink the three utilities above write to.
//!
//! The geometry core performs no I/O and no logging.

pub mod files;
pub mod geom2;
pub mod journal;
pub mod store;
pub mod words;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::files::{copy_dir, count_lines, CopyReport, FilesError, LineCount, ScanCfg};
    pub use crate::geom2::{detect, Contact, GeomError, Point, Polygon, Side};
    pub use crate::journal::{FileJournal, Journal, Level, MemoryJournal, NullJournal};
    pub use crate::store::DataStore;
    pub use crate::words::top_k_words;
}
