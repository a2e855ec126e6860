use std::future::Future;
use std::rc::Rc;

use ::common::{ApiError, RemoteResource, RequestTracker};
use yew::prelude::*;

/// Fetch on mount. See [`use_remote_keyed`].
#[hook]
pub fn use_remote<T, F, Fut>(fetch_fn: F) -> (UseStateHandle<RemoteResource<T>>, Callback<()>)
where
    T: 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    use_remote_keyed(Some(String::new()), move |_| fetch_fn())
}

/// Fetch whenever `key` changes; `None` keeps the resource `Idle` and issues
/// no request. Responses are dropped once the key has moved on or the
/// component has unmounted.
#[hook]
pub fn use_remote_keyed<T, F, Fut>(
    key: Option<String>,
    fetch_fn: F,
) -> (UseStateHandle<RemoteResource<T>>, Callback<()>)
where
    T: 'static,
    F: Fn(String) -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let state = use_state(|| RemoteResource::Idle);
    let tracker = use_memo((), |_| RequestTracker::new());
    let fetch_fn = use_state(|| Rc::new(fetch_fn));

    let refetch = {
        let state = state.clone();
        let tracker = tracker.clone();
        let fetch_fn = fetch_fn.clone();

        use_callback(key.clone(), move |_, key| {
            let Some(key) = key.clone() else {
                tracker.invalidate();
                state.set(RemoteResource::Idle);
                return;
            };

            let ticket = tracker.begin();
            state.set(RemoteResource::Loading);

            let state = state.clone();
            let tracker = tracker.clone();
            let fetch_fn = fetch_fn.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = (*fetch_fn)(key).await;
                if tracker.is_current(&ticket) {
                    state.set(RemoteResource::from(result));
                } else {
                    log::debug!("Discarding response for a closed or superseded request");
                }
            });
        })
    };

    {
        let refetch = refetch.clone();
        let tracker = tracker.clone();
        use_effect_with(key, move |_| {
            refetch.emit(());
            move || tracker.invalidate()
        });
    }

    (state, refetch)
}
