use ::common::NewBinRequest;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::api_client::bin::register_bin;
use crate::common::toast::use_toast;

const BIN_TYPES: [(&str, &str); 3] = [
    ("general", "General Waste"),
    ("recycling", "Recycling"),
    ("organic", "Organic"),
];

const CAPACITIES: [&str; 3] = ["340L", "500L", "700L"];

#[derive(Properties, PartialEq)]
pub struct BinRegistrationModalProps {
    pub user_id: AttrValue,
    pub on_close: Callback<()>,
    /// Fired once the backend accepted the new bin
    pub on_registered: Callback<()>,
}

#[function_component(BinRegistrationModal)]
pub fn bin_registration_modal(props: &BinRegistrationModalProps) -> Html {
    let toast = use_toast();
    let bin_type = use_state(|| BIN_TYPES[0].0.to_string());
    let capacity = use_state(|| CAPACITIES[0].to_string());
    let is_submitting = use_state(|| false);

    let select_handler = |target: UseStateHandle<String>| {
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            target.set(select.value());
        })
    };
    let on_bin_type = select_handler(bin_type.clone());
    let on_capacity = select_handler(capacity.clone());

    let on_submit = {
        let user_id = props.user_id.clone();
        let bin_type = bin_type.clone();
        let capacity = capacity.clone();
        let is_submitting = is_submitting.clone();
        let on_registered = props.on_registered.clone();
        let toast = toast.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_submitting {
                return;
            }

            let request = NewBinRequest {
                user_id: user_id.to_string(),
                bin_type: (*bin_type).clone(),
                capacity: (*capacity).clone(),
            };
            log::debug!("Submitting bin registration: {:?}", request);
            is_submitting.set(true);

            let is_submitting = is_submitting.clone();
            let on_registered = on_registered.clone();
            let toast = toast.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match register_bin(&request).await {
                    Ok(_) => on_registered.emit(()),
                    Err(e) => {
                        log::error!("Bin registration failed: {}", e);
                        toast.show_error("Failed to register bin. Please try again.");
                        is_submitting.set(false);
                    }
                }
            });
        })
    };

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <dialog class="modal modal-open" id="bin_registration_modal">
            <div class="modal-box max-w-md">
                <div class="flex items-center justify-between mb-6">
                    <h3 class="text-2xl font-bold text-emerald-600">{"Register New Bin"}</h3>
                    <button class="btn btn-ghost btn-sm btn-circle" onclick={on_close.clone()}>
                        <i class="fas fa-times"></i>
                    </button>
                </div>

                <form onsubmit={on_submit} class="space-y-4">
                    <div class="form-control">
                        <label class="label" for="binType"><span class="label-text">{"Bin Type"}</span></label>
                        <select id="binType" name="binType" class="select select-bordered w-full" onchange={on_bin_type}>
                            {for BIN_TYPES.iter().map(|(value, label)| html! {
                                <option value={*value} selected={*bin_type == *value}>{*label}</option>
                            })}
                        </select>
                    </div>

                    <div class="form-control">
                        <label class="label" for="capacity"><span class="label-text">{"Capacity"}</span></label>
                        <select id="capacity" name="capacity" class="select select-bordered w-full" onchange={on_capacity}>
                            {for CAPACITIES.iter().map(|value| html! {
                                <option value={*value} selected={*capacity == *value}>{*value}</option>
                            })}
                        </select>
                    </div>

                    <div class="modal-action">
                        <button type="button" class="btn" onclick={on_close.clone()}>{"Cancel"}</button>
                        <button type="submit" class="btn btn-primary" disabled={*is_submitting}>
                            if *is_submitting {
                                <span class="loading loading-spinner loading-sm"></span>
                            }
                            {"Register Bin"}
                        </button>
                    </div>
                </form>
            </div>
            <form class="modal-backdrop" method="dialog">
                <button onclick={on_close}>{"close"}</button>
            </form>
        </dialog>
    }
}
