use ::common::filter::schedules_for_driver;
use ::common::schedule_form::join_bin_list;
use ::common::ApiError;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api_client::schedule::get_schedules;
use crate::common::fetch_hook::use_remote_keyed;
use crate::hooks::use_query;
use crate::router::{DriverQuery, ScheduleQuery};
use crate::Route;

#[function_component(ScheduleDetails)]
pub fn schedule_details() -> Html {
    let driver_id = use_query::<DriverQuery>()
        .map(|q| q.driver_id)
        .filter(|id| !id.is_empty());

    // No driver in the URL means no request at all.
    let (schedules, _) = use_remote_keyed(driver_id.clone(), |_driver: String| get_schedules());
    let navigator = use_navigator();

    let open_waste = {
        let navigator = navigator.clone();
        Callback::from(move |schedule_id: String| {
            let Some(navigator) = &navigator else {
                return;
            };
            if let Err(e) = navigator.push_with_query(&Route::WasteDetails, &ScheduleQuery { schedule_id }) {
                log::error!("Failed to navigate to waste details: {:?}", e);
            }
        })
    };

    let Some(driver_id) = driver_id else {
        return html! { <h2 class="text-xl text-center">{format!("{}.", ApiError::MissingContext("driver"))}</h2> };
    };

    let all = schedules.data().cloned().unwrap_or_default();
    let rows = schedules_for_driver(&all, &driver_id);

    html! {
        <div class="card bg-base-100 shadow-xl w-4/5 mx-auto">
            <div class="card-body">
                <h1 class="card-title text-3xl justify-center">{format!("Schedule for Driver ID {}", driver_id)}</h1>
                <table class="table table-zebra">
                    <thead>
                        <tr>
                            <th>{"Time"}</th>
                            <th>{"Route"}</th>
                            <th>{"Smart Bins"}</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        if rows.is_empty() {
                            <tr>
                                <td colspan="4" class="text-center">{"No schedule available for this driver."}</td>
                            </tr>
                        } else {
                            {for rows.into_iter().map(|schedule| html! {
                                <tr key={schedule.schedule_id.clone()}>
                                    <td>{&schedule.time}</td>
                                    <td>{&schedule.route}</td>
                                    <td>{join_bin_list(&schedule.smart_bins)}</td>
                                    <td>
                                        <button class="btn btn-xs btn-ghost text-success" onclick={open_waste.reform({
                                            let schedule_id = schedule.schedule_id.clone();
                                            move |_: MouseEvent| schedule_id.clone()
                                        })}>
                                            {"Waste details"}
                                        </button>
                                    </td>
                                </tr>
                            })}
                        }
                    </tbody>
                </table>
            </div>
        </div>
    }
}
