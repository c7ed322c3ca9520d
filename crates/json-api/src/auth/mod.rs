//! Admin login, logout, session checks and the session guard middleware.

mod errors;
pub(crate) mod login;
pub(crate) mod logout;
pub(crate) mod middleware;
pub(crate) mod verify;

pub(crate) use errors::into_status_error;
