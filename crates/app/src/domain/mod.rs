//! Farm Stand Domain Concerns

pub mod stores;
