//! Shared response bodies.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

/// Acknowledgement for operations with nothing else to report.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OkResponse {
    pub ok: bool,
}

impl OkResponse {
    pub(crate) fn ok() -> Self {
        Self { ok: true }
    }
}
