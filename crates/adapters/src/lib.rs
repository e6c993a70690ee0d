//! # Reinhardt Admin Filters Adapters
//!
//! Backends for the admin filter contract:
//!
//! - [`SeaQueryExecutor`] (feature `query`): applies filters to a sea-query `SELECT`
//! - [`TeraRenderer`] (feature `templates`): renders filter widgets with Tera

#[cfg(feature = "query")]
pub mod executor;
#[cfg(feature = "templates")]
pub mod renderer;
#[cfg(feature = "templates")]
mod templates;

#[cfg(feature = "query")]
pub use executor::SeaQueryExecutor;
#[cfg(feature = "templates")]
pub use renderer::TeraRenderer;
