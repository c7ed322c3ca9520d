//! Admin session middleware.

use jiff::Timestamp;
use salvo::prelude::*;

use crate::{auth::into_status_error, extensions::*};

/// Rejects requests that do not carry a live admin session.
#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let Some(token) = req.bearer_token().map(str::to_owned) else {
        res.render(StatusError::unauthorized().brief("Missing or invalid Authorization header"));
        ctrl.skip_rest();

        return;
    };

    let state = match depot.state_or_500() {
        Ok(state) => state,
        Err(error) => {
            res.render(error);
            ctrl.skip_rest();

            return;
        }
    };

    match state
        .app
        .auth
        .is_authenticated(state.store_uuid, &token, Timestamp::now())
        .await
    {
        Ok(true) => {
            ctrl.call_next(req, depot, res).await;
        }
        Ok(false) => {
            res.render(StatusError::unauthorized().brief("Session expired or invalid"));
            ctrl.skip_rest();
        }
        Err(error) => {
            res.render(into_status_error(error));
            ctrl.skip_rest();
        }
    }
}
