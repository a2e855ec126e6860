use yew::prelude::*;
use yew_router::prelude::*;

use crate::api_client::driver::get_drivers;
use crate::common::fetch_hook::use_remote;
use crate::Route;

#[function_component(AvailableDrivers)]
pub fn available_drivers() -> Html {
    // Failures are only logged; the table stays empty.
    let (drivers, _) = use_remote(get_drivers);
    let navigator = use_navigator();

    let on_add = Callback::from(move |_: MouseEvent| {
        if let Some(navigator) = &navigator {
            navigator.push(&Route::AddSchedule);
        }
    });

    html! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body">
                <h1 class="card-title text-3xl justify-center">{"Available Drivers"}</h1>
                <div class="overflow-x-auto">
                    <table class="table table-zebra">
                        <thead>
                            <tr>
                                <th>{"Driver ID"}</th>
                                <th>{"Name"}</th>
                                <th>{"Status"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {for drivers.data().into_iter().flatten().map(|driver| html! {
                                <tr key={driver.driver_id.clone()}>
                                    <td>{&driver.driver_id}</td>
                                    <td>{&driver.driver_name}</td>
                                    <td>{if driver.available { "Available" } else { "Unavailable" }}</td>
                                </tr>
                            })}
                        </tbody>
                    </table>
                </div>
                <div class="card-actions justify-center mt-6">
                    <button class="btn btn-success" onclick={on_add}>{"Add Schedule with Available Driver"}</button>
                </div>
            </div>
        </div>
    }
}
