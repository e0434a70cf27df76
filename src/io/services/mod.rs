//! Import, normalization and export services.

pub mod export;
pub mod import;
pub mod normalize;

pub use export::ExportService;
pub use import::{ImportResult, ImportService, import_bookmarks, parse_bookmarks};
pub use normalize::{NormalizeSummary, normalize};
