use ::common::schedule_form::{join_bin_list, parse_bin_list, ScheduleDraft};
use ::common::Schedule;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api_client::schedule::{get_schedule, update_schedule};
use crate::common::error::InlineError;
use crate::common::fetch_hook::use_remote_keyed;
use crate::common::loading::Loading;
use crate::common::toast::use_toast;
use crate::hooks::RemoteResource;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct UpdateScheduleProps {
    pub schedule_id: AttrValue,
}

/// Loads the schedule named in the URL, then hands it to the editor.
#[function_component(UpdateSchedule)]
pub fn update_schedule_page(props: &UpdateScheduleProps) -> Html {
    let (schedule, refetch) = use_remote_keyed(Some(props.schedule_id.to_string()), |id: String| async move {
        get_schedule(&id).await
    });

    match &*schedule {
        RemoteResource::Idle | RemoteResource::Loading => html! { <Loading text="Loading schedule..." /> },
        RemoteResource::Failed(_) => html! {
            <InlineError message="Failed to fetch schedule details" on_retry={refetch.clone()} />
        },
        RemoteResource::Ready(schedule) => html! {
            <ScheduleEditor schedule_id={props.schedule_id.clone()} schedule={schedule.clone()} />
        },
    }
}

#[derive(Properties, PartialEq)]
struct ScheduleEditorProps {
    schedule_id: AttrValue,
    schedule: Schedule,
}

#[function_component(ScheduleEditor)]
fn schedule_editor(props: &ScheduleEditorProps) -> Html {
    let record = use_state(|| ScheduleDraft::from_schedule(&props.schedule));
    let error = use_state(|| None::<&'static str>);
    let navigator = use_navigator();
    let toast = use_toast();

    let edit = |apply: fn(&mut ScheduleDraft, String)| {
        let record = record.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*record).clone();
            apply(&mut next, input.value());
            record.set(next);
        })
    };

    let on_submit = {
        let record = record.clone();
        let error = error.clone();
        let schedule_id = props.schedule_id.to_string();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let schedule = record.to_schedule();
            let schedule_id = schedule_id.clone();
            let error = error.clone();
            let navigator = navigator.clone();
            let toast = toast.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match update_schedule(&schedule_id, &schedule).await {
                    Ok(_) => {
                        toast.show_success(format!("Schedule {} updated", schedule_id));
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Schedules);
                        }
                    }
                    Err(_) => error.set(Some("Failed to update schedule")),
                }
            });
        })
    };

    html! {
        <div class="card bg-base-100 shadow-xl max-w-xl mx-auto">
            <form class="card-body gap-4" onsubmit={on_submit}>
                <h1 class="card-title text-3xl justify-center">{"Update Schedule"}</h1>

                if let Some(message) = *error {
                    <div role="alert" class="alert alert-error"><span>{message}</span></div>
                }

                <label class="form-control">
                    <span class="label-text">{"Smart Bins"}</span>
                    <input
                        type="text"
                        class="input input-bordered"
                        placeholder="e.g., SB001, SB002"
                        required={true}
                        value={join_bin_list(&record.selected_bins)}
                        oninput={edit(|s, v| s.selected_bins = parse_bin_list(&v))}
                    />
                </label>

                <label class="form-control">
                    <span class="label-text">{"Driver Id"}</span>
                    <input
                        type="text"
                        class="input input-bordered"
                        placeholder="e.g., D001"
                        required={true}
                        value={record.driver_id.clone()}
                        oninput={edit(|s, v| s.driver_id = v)}
                    />
                </label>

                <label class="form-control">
                    <span class="label-text">{"Time"}</span>
                    <input
                        type="time"
                        class="input input-bordered"
                        required={true}
                        value={record.time.clone()}
                        oninput={edit(|s, v| s.time = v)}
                    />
                </label>

                <label class="form-control">
                    <span class="label-text">{"Route"}</span>
                    <input
                        type="text"
                        class="input input-bordered"
                        placeholder="e.g., City Center"
                        required={true}
                        value={record.route.clone()}
                        oninput={edit(|s, v| s.route = v)}
                    />
                </label>

                <div class="card-actions justify-center">
                    <button type="submit" class="btn btn-success btn-lg">{"Update Schedule"}</button>
                </div>
            </form>
        </div>
    }
}
