// Catalog loading and budget filtering.
// The catalog is a static TSV file re-read on every request — no caching.

pub mod filter;
pub mod loader;
