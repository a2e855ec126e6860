use serde::de::DeserializeOwned;
use yew::prelude::*;
use yew_router::prelude::*;

pub use ::common::RemoteResource;

/// Query string of the current location parsed into `Q`.
/// `None` when absent or malformed, so detail views fall back to their
/// "nothing selected" placeholder instead of fetching.
#[hook]
pub fn use_query<Q>() -> Option<Q>
where
    Q: DeserializeOwned + 'static,
{
    let location = use_location();
    location.and_then(|loc| match loc.query::<Q>() {
        Ok(query) => Some(query),
        Err(e) => {
            log::debug!("No usable query on {}: {}", loc.path(), e);
            None
        }
    })
}

/// Wall-clock text refreshed every second
#[hook]
pub fn use_clock() -> String {
    let now = use_state(current_time);

    {
        let now = now.clone();
        use_effect_with((), move |_| {
            let interval = gloo_timers::callback::Interval::new(1_000, move || now.set(current_time()));
            move || drop(interval)
        });
    }

    (*now).clone()
}

fn current_time() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}
