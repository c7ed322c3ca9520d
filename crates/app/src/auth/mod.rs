//! Admin authentication: credential hashing, login throttling and
//! bearer sessions.

mod errors;
mod models;
mod password;
mod policy;
pub mod repository;
mod service;
mod token;

pub use errors::*;
pub use models::*;
pub use password::*;
pub use policy::*;
pub use repository::PgAuthRepository;
pub use service::*;
pub use token::*;
