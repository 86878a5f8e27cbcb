//! File handling around the Quicksort configuration engine
//!
//! Provides first-run bootstrap of the config file, atomic writes, and a
//! reloadable snapshot handle. Resolution itself lives in `quicksort-config`.

pub mod error;
pub mod handle;
pub mod io;
pub mod store;

pub use error::{Error, Result};
pub use handle::ConfigHandle;
pub use store::ConfigStore;
