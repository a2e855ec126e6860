use std::rc::Rc;

use ::common::filter::{filter_schedules, reduce_schedule_table, ScheduleTableAction};
use ::common::Schedule;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api_client::schedule::{delete_schedule, get_schedules};
use crate::common::fetch_hook::use_remote;
use crate::common::loading::Loading;
use crate::common::notify;
use crate::hooks::RemoteResource;
use crate::Route;

#[derive(Default, PartialEq)]
struct ScheduleTable(RemoteResource<Vec<Schedule>>);

impl Reducible for ScheduleTable {
    type Action = ScheduleTableAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        ScheduleTable(reduce_schedule_table(&self.0, action)).into()
    }
}

#[function_component(ScheduleList)]
pub fn schedule_list() -> Html {
    let (fetched, _refetch) = use_remote(get_schedules);
    let schedules = use_reducer(ScheduleTable::default);
    let filter = use_state(String::new);
    let navigator = use_navigator();

    let on_filter = {
        let filter = filter.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            filter.set(input.value());
        })
    };

    {
        let table = schedules.dispatcher();
        use_effect_with((*fetched).clone(), move |resource| {
            table.dispatch(ScheduleTableAction::Load(resource.clone()));
        });
    }

    let on_delete = {
        let table = schedules.dispatcher();
        Callback::from(move |schedule_id: String| {
            if !notify::confirm("Are you sure you want to delete this schedule?") {
                log::debug!("Delete of schedule {} cancelled", schedule_id);
                return;
            }

            let table = table.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match delete_schedule(&schedule_id).await {
                    Ok(_) => {
                        table.dispatch(ScheduleTableAction::Deleted(schedule_id));
                        notify::alert("Schedule deleted successfully!");
                    }
                    Err(_) => {
                        table.dispatch(ScheduleTableAction::DeleteFailed(schedule_id));
                        notify::alert("Failed to delete schedule. Please try again.");
                    }
                }
            });
        })
    };

    let go = |route: Route| {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(navigator) = &navigator {
                navigator.push(&route);
            }
        })
    };

    let items = match &schedules.0 {
        RemoteResource::Idle | RemoteResource::Loading => return html! { <Loading text="Loading schedules..." /> },
        RemoteResource::Failed(_) => return html! { <div>{"Failed to fetch schedules"}</div> },
        RemoteResource::Ready(items) => items,
    };

    let visible = filter_schedules(items, &filter);

    html! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body">
                <h1 class="card-title text-3xl justify-center">{"All Schedules"}</h1>
                <input
                    type="text"
                    class="input input-bordered w-72 mx-auto"
                    placeholder="Search by Schedule ID or Driver ID"
                    value={(*filter).clone()}
                    oninput={on_filter}
                />
                <div class="overflow-x-auto">
                    <table class="table table-zebra">
                        <thead>
                            <tr>
                                <th>{"Schedule Id"}</th>
                                <th>{"Smart Bins"}</th>
                                <th>{"Driver Id"}</th>
                                <th>{"Time"}</th>
                                <th>{"Route"}</th>
                                <th>{"Actions"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {for visible.into_iter().map(|schedule| schedule_row(schedule, &navigator, &on_delete))}
                        </tbody>
                    </table>
                </div>
                <div class="card-actions justify-center gap-8 mt-6">
                    <button class="btn btn-success" onclick={go(Route::AddSchedule)}>{"Add Schedule"}</button>
                    <button class="btn btn-success" onclick={go(Route::FullBins)}>{"View Full Bins"}</button>
                    <button class="btn btn-success" onclick={go(Route::AvailableDrivers)}>{"Availability Drivers"}</button>
                </div>
            </div>
        </div>
    }
}

fn schedule_row(schedule: &Schedule, navigator: &Option<Navigator>, on_delete: &Callback<String>) -> Html {
    let on_update = {
        let navigator = navigator.clone();
        let schedule_id = schedule.schedule_id.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(navigator) = &navigator {
                navigator.push(&Route::UpdateSchedule { schedule_id: schedule_id.clone() });
            }
        })
    };
    let on_delete = {
        let on_delete = on_delete.clone();
        let schedule_id = schedule.schedule_id.clone();
        Callback::from(move |_: MouseEvent| on_delete.emit(schedule_id.clone()))
    };

    html! {
        <tr key={schedule.schedule_id.clone()}>
            <td>{&schedule.schedule_id}</td>
            <td>
                {for schedule.smart_bins.iter().map(|bin| html! {
                    <span class="badge badge-success text-white mr-2 mb-2">{bin}</span>
                })}
            </td>
            <td>{&schedule.driver_id}</td>
            <td>{&schedule.time}</td>
            <td>{&schedule.route}</td>
            <td class="flex gap-2">
                <button class="btn btn-sm btn-success" onclick={on_update}>{"Update"}</button>
                <button class="btn btn-sm btn-error" onclick={on_delete}>{"Delete"}</button>
            </td>
        </tr>
    }
}
