//! Store settings read and update.

mod errors;
pub(crate) mod get;
pub(crate) mod update;
