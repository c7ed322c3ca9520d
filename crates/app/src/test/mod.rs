//! Test support: Postgres test databases and in-memory auth stores.

pub(crate) mod memory;

pub(crate) use context::TestContext;
