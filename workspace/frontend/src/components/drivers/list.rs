use ::common::filter::filter_drivers;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api_client::driver::get_drivers;
use crate::common::fetch_hook::use_remote;
use crate::router::DriverQuery;
use crate::Route;

#[function_component(DriverList)]
pub fn driver_list() -> Html {
    // A failed fetch just shows no rows.
    let (drivers, _) = use_remote(get_drivers);
    let filter = use_state(String::new);
    let navigator = use_navigator();

    let on_filter = {
        let filter = filter.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            filter.set(input.value());
        })
    };

    let open_schedule = Callback::from(move |driver_id: String| {
        let Some(navigator) = &navigator else {
            return;
        };
        log::debug!("Opening schedule for driver {}", driver_id);
        if let Err(e) = navigator.push_with_query(&Route::ScheduleDetails, &DriverQuery { driver_id }) {
            log::error!("Failed to navigate to schedule details: {:?}", e);
        }
    });

    let all = drivers.data().cloned().unwrap_or_default();
    let visible = filter_drivers(&all, &filter);

    html! {
        <div class="card bg-base-100 shadow-xl max-w-3xl mx-auto">
            <div class="card-body">
                <div class="flex justify-between items-center">
                    <h1 class="card-title text-3xl">{"All Drivers"}</h1>
                    <input
                        type="text"
                        class="input input-bordered w-56"
                        placeholder="Enter driver name or ID"
                        value={(*filter).clone()}
                        oninput={on_filter}
                    />
                </div>
                <table class="table">
                    <thead>
                        <tr>
                            <th>{"Driver ID"}</th>
                            <th>{"Driver Name"}</th>
                            <th class="text-right">{"Availability"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {for visible.into_iter().map(|driver| {
                            let onclick = {
                                let open_schedule = open_schedule.clone();
                                let driver_id = driver.driver_id.clone();
                                Callback::from(move |_: MouseEvent| open_schedule.emit(driver_id.clone()))
                            };
                            let availability = if driver.available { "text-success" } else { "text-error" };
                            html! {
                                <tr key={driver.driver_id.clone()} class="hover cursor-pointer" onclick={onclick}>
                                    <td class="text-emerald-800">{&driver.driver_id}</td>
                                    <td class="text-emerald-800">{&driver.driver_name}</td>
                                    <td class={classes!("text-right", availability)}>{driver.availability_label()}</td>
                                </tr>
                            }
                        })}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
