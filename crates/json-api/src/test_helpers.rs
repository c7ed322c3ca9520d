//! Test helpers.

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use farmstand_app::{
    auth::MockAuthService,
    context::AppContext,
    domain::stores::{MockStoresService, records::StoreUuid},
};
use salvo::{affix_state::inject, prelude::*};
use tracing::{Event, Level, Subscriber, subscriber::DefaultGuard};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

use crate::state::State;

pub(crate) const TEST_STORE_UUID: StoreUuid = StoreUuid::nil();

/// A token with the shape the guard issues.
pub(crate) const TEST_TOKEN: &str =
    "fs_00112233445566778899aabbccddeeff00112233445566778899aabbccddeeff";

pub(crate) fn strict_auth_mock() -> MockAuthService {
    let mut auth = MockAuthService::new();

    auth.expect_login().never();
    auth.expect_logout().never();
    auth.expect_is_authenticated().never();
    auth.expect_change_password().never();

    auth
}

pub(crate) fn strict_stores_mock() -> MockStoresService {
    let mut stores = MockStoresService::new();

    stores.expect_create_store().never();
    stores.expect_get_store().never();
    stores.expect_update_settings().never();
    stores.expect_reset_credential().never();

    stores
}

pub(crate) fn state_with(auth: MockAuthService, stores: MockStoresService) -> State {
    State::new(
        AppContext {
            auth: Arc::new(auth),
            stores: Arc::new(stores),
        },
        TEST_STORE_UUID,
    )
}

pub(crate) fn service_with_state(state: State, route: Router) -> Service {
    Service::new(Router::new().hoop(inject(Arc::new(state))).push(route))
}

pub(crate) fn service(auth: MockAuthService, stores: MockStoresService, route: Router) -> Service {
    service_with_state(state_with(auth, stores), route)
}

/// Counts ERROR-level events seen while installed.
#[derive(Clone, Default)]
pub(crate) struct ErrorEvents(Arc<AtomicUsize>);

impl ErrorEvents {
    pub(crate) fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

impl<S: Subscriber> Layer<S> for ErrorEvents {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == Level::ERROR {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

/// Install an [`ErrorEvents`] layer as the subscriber for the current thread
/// until the guard drops.
pub(crate) fn capture_error_events() -> (ErrorEvents, DefaultGuard) {
    let events = ErrorEvents::default();
    let guard =
        tracing::subscriber::set_default(tracing_subscriber::registry().with(events.clone()));

    (events, guard)
}
