//! Farm Stand admin authentication, store settings and their PostgreSQL
//! persistence, shared by the HTTP server and the admin CLI.

pub mod auth;
pub mod context;
pub mod database;
pub mod domain;

#[cfg(test)]
mod test;

mod uuids;
