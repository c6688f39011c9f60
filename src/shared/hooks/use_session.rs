use std::cell::Cell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::domain::models::SessionState;
use crate::shared::logging;
use crate::shared::services::SharedSessionClient;

/// Loads the current user once per mount and exposes the shell's
/// loading -> ready session state.
///
/// Fetch failures are logged and downgraded to an anonymous session; no
/// retry, no error surfaced to the UI. A drop flag guards the continuation:
/// if the shell unmounts before the fetch settles, the late result is
/// discarded instead of being written into a dead scope.
pub fn use_session() -> Signal<SessionState> {
    let client = use_context::<SharedSessionClient>();
    let state = use_signal(SessionState::new);
    let alive = use_hook(|| Rc::new(Cell::new(true)));

    use_drop({
        let alive = alive.clone();
        move || alive.set(false)
    });

    // One-shot: nothing reactive is read inside, so this runs on mount only.
    use_effect(move || {
        let client = client.clone();
        let alive = alive.clone();
        let mut state = state;
        logging::log_session_fetch_start();
        spawn(async move {
            let fetched = match client.current_user().await {
                Ok(user) => user,
                Err(e) => {
                    logging::log_session_fetch_error(&e.to_string());
                    None
                }
            };
            if !alive.get() {
                logging::log_session_fetch_discarded();
                return;
            }
            logging::log_session_fetch_settled(fetched.is_some());
            state.write().settle(fetched);
        });
    });

    state
}
