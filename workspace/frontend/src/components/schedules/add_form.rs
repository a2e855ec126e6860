use ::common::filter::available_drivers;
use ::common::schedule_form::{selectable_bins, ScheduleDraft};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::api_client::driver::get_drivers;
use crate::api_client::schedule::add_schedule;
use crate::common::fetch_hook::use_remote;
use crate::common::notify;

#[function_component(AddSchedule)]
pub fn add_schedule_form() -> Html {
    let draft = use_state(ScheduleDraft::default);
    let is_submitting = use_state(|| false);
    // A failed driver fetch leaves the select empty without telling the user.
    let (drivers, _) = use_remote(get_drivers);

    let edit = |apply: fn(&mut ScheduleDraft, String)| {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            apply(&mut next, input.value());
            draft.set(next);
        })
    };

    let on_driver = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.driver_id = select.value();
            draft.set(next);
        })
    };

    let on_bin = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.toggle_bin(&input.value(), input.checked());
            draft.set(next);
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let is_submitting = is_submitting.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_submitting {
                return;
            }

            let schedule = draft.to_schedule();
            let draft = draft.clone();
            let is_submitting = is_submitting.clone();
            is_submitting.set(true);

            wasm_bindgen_futures::spawn_local(async move {
                log::info!("Submitting schedule {}", schedule.schedule_id);
                match add_schedule(&schedule).await {
                    Ok(_) => {
                        notify::alert("Schedule added successfully!");
                        let mut next = (*draft).clone();
                        next.reset();
                        draft.set(next);
                    }
                    Err(_) => notify::alert("Failed to add schedule. Please try again."),
                }
                is_submitting.set(false);
            });
        })
    };

    let driver_options = drivers.data().map(|all| available_drivers(all)).unwrap_or_default();

    html! {
        <div class="card bg-base-100 shadow-xl max-w-xl mx-auto">
            <form class="card-body gap-4" onsubmit={on_submit}>
                <h1 class="card-title text-3xl justify-center">{"Add New Schedule"}</h1>

                <label class="form-control">
                    <span class="label-text">{"Schedule ID"}</span>
                    <input
                        type="text"
                        class="input input-bordered"
                        placeholder="e.g., S00003"
                        required={true}
                        value={draft.schedule_id.clone()}
                        oninput={edit(|d, v| d.schedule_id = v)}
                    />
                </label>

                <div>
                    <h2 class="text-lg font-semibold mb-2">{"Smart Bins"}</h2>
                    <div class="flex flex-wrap gap-4">
                        {for selectable_bins().into_iter().map(|bin| html! {
                            <label class="label cursor-pointer gap-2" key={bin}>
                                <input
                                    type="checkbox"
                                    class="checkbox checkbox-success"
                                    value={bin}
                                    checked={draft.is_selected(bin)}
                                    onchange={on_bin.clone()}
                                />
                                <span class="label-text">{bin}</span>
                            </label>
                        })}
                    </div>
                </div>

                <label class="form-control">
                    <span class="label-text">{"Driver ID"}</span>
                    <select class="select select-bordered" required={true} onchange={on_driver}>
                        <option value="" disabled={true} selected={draft.driver_id.is_empty()}>{"Select Driver"}</option>
                        {for driver_options.iter().map(|driver| html! {
                            <option
                                key={driver.driver_id.clone()}
                                value={driver.driver_id.clone()}
                                selected={draft.driver_id == driver.driver_id}
                            >
                                {format!("{} ({})", driver.driver_name, driver.driver_id)}
                            </option>
                        })}
                    </select>
                </label>

                <label class="form-control">
                    <span class="label-text">{"Time"}</span>
                    <input
                        type="time"
                        class="input input-bordered"
                        required={true}
                        value={draft.time.clone()}
                        oninput={edit(|d, v| d.time = v)}
                    />
                </label>

                <label class="form-control">
                    <span class="label-text">{"Route"}</span>
                    <input
                        type="text"
                        class="input input-bordered"
                        placeholder="e.g., City Center"
                        required={true}
                        value={draft.route.clone()}
                        oninput={edit(|d, v| d.route = v)}
                    />
                </label>

                <div class="card-actions justify-center">
                    <button type="submit" class="btn btn-success btn-lg" disabled={*is_submitting}>
                        {"Add Schedule"}
                    </button>
                </div>
            </form>
        </div>
    }
}
