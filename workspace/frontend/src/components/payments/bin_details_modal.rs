use std::rc::Rc;

use ::common::charts::{fill_level, monthly_series};
use ::common::paging::{bin_id_from_key, BinCursor};
use ::common::{Bin, BinStatus};
use yew::prelude::*;

use super::chart::{bar_trace, PlotlyChart};
use crate::api_client::bin::{get_bins, get_monthly_collections, get_monthly_total, update_bin_status};
use crate::common::fetch_hook::use_remote_keyed;
use crate::common::notify::alert;

/// Shown until the backend reports when a bin was last emptied
const LAST_EMPTIED: &str = "2023-10-10";

#[derive(Properties, PartialEq)]
pub struct BinDetailsModalProps {
    pub user_id: AttrValue,
    pub on_close: Callback<()>,
}

/// Bin fields render as soon as the list arrives; fill level and the monthly
/// chart are fetched per bin and fill in independently.
#[function_component(BinDetailsModal)]
pub fn bin_details_modal(props: &BinDetailsModalProps) -> Html {
    let (bins, _refetch) = use_remote_keyed(Some(props.user_id.to_string()), |user: String| async move {
        get_bins(&user).await
    });
    let bin_count = bins.data().map(Vec::len).unwrap_or(0);

    let cursor = use_state(BinCursor::default);
    {
        let cursor = cursor.clone();
        use_effect_with(bin_count, move |count| {
            cursor.set(BinCursor::new(*count));
            || ()
        });
    }

    let current: Option<Bin> = cursor
        .index()
        .and_then(|i| bins.data().and_then(|list| list.get(i)))
        .cloned();
    let current_id = current.as_ref().map(|bin| bin.binid.clone());
    let detail_key = current_id.as_deref().map(|bin_id| cursor.detail_key(bin_id));

    let (total, _) = use_remote_keyed(detail_key.clone(), |key: String| async move {
        get_monthly_total(bin_id_from_key(&key)).await
    });
    let (monthly, _) = use_remote_keyed(detail_key, |key: String| async move {
        get_monthly_collections(bin_id_from_key(&key)).await
    });

    let page = |step: fn(&mut BinCursor) -> Option<usize>| {
        let cursor = cursor.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *cursor;
            if let Some(index) = step(&mut next) {
                log::debug!("Showing bin {} of {}", index + 1, next.len());
            }
            cursor.set(next);
        })
    };
    let on_previous = page(BinCursor::previous);
    let on_next = page(BinCursor::next);

    let on_schedule_pickup = {
        let current_id = current_id.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(bin_id) = current_id.clone() else {
                return;
            };
            wasm_bindgen_futures::spawn_local(async move {
                match update_bin_status(&bin_id, BinStatus::Scheduled).await {
                    Ok(_) => alert(&format!("Pickup for bin {} has been scheduled.", bin_id)),
                    Err(_) => alert("Failed to schedule pickup. Please try again later."),
                }
            });
        })
    };

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let (fill_text, fill_width) = total.data().map(fill_level).unwrap_or((0.0, 0.0));
    let traces: Rc<Vec<_>> = Rc::new(
        monthly
            .data()
            .and_then(|collections| bar_trace(&monthly_series(collections), "Collections", "#10B981"))
            .into_iter()
            .collect(),
    );

    let body = if bins.is_loading() || bins.is_idle() {
        html! { <div class="text-center py-8">{"Loading..."}</div> }
    } else if let Some(bin) = current {
        let field = |value: &Option<String>| value.clone().unwrap_or_default();
        html! {
            <>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                    <div class="bg-base-200 rounded-xl p-4 space-y-1">
                        <h4 class="text-lg font-semibold mb-2">{format!("Bin ID: {}", bin.binid)}</h4>
                        <p><span class="font-medium">{"Type: "}</span>{field(&bin.bin_type)}</p>
                        <p><span class="font-medium">{"Location: "}</span>{field(&bin.location)}</p>
                        <p><span class="font-medium">{"Capacity: "}</span>{field(&bin.capacity)}</p>
                        <p><span class="font-medium">{"Last Emptied: "}</span>{LAST_EMPTIED}</p>
                    </div>
                    <div class="bg-base-200 rounded-xl p-4">
                        <h4 class="text-lg font-semibold mb-2">{"Bin Collect Count"}</h4>
                        <div class="flex items-center gap-4">
                            <progress class="progress progress-success w-full" value={fill_width.to_string()} max="100"></progress>
                            <span class="font-bold">{format!("{}%", fill_text)}</span>
                        </div>
                    </div>
                </div>

                <h4 class="text-lg font-semibold mt-6 mb-2">{"Monthly Collection Data"}</h4>
                if traces.is_empty() {
                    <p class="text-sm opacity-60">{"No collection data."}</p>
                } else {
                    <PlotlyChart div_id="bin-monthly-chart" traces={traces} height={250} />
                }

                <div class="modal-action justify-between">
                    <div class="join">
                        <button class="btn join-item" onclick={on_previous}>{"Previous"}</button>
                        <button class="btn join-item" onclick={on_next}>{"Next"}</button>
                    </div>
                    <button class="btn btn-primary" onclick={on_schedule_pickup}>
                        <i class="fas fa-truck mr-2"></i>
                        {"Schedule Pickup"}
                    </button>
                </div>
            </>
        }
    } else {
        html! { <p class="text-center py-8 opacity-70">{"No bins registered for this user."}</p> }
    };

    html! {
        <dialog class="modal modal-open" id="bin_details_modal">
            <div class="modal-box w-11/12 max-w-3xl">
                <div class="flex items-center justify-between mb-6">
                    <h3 class="text-2xl font-bold text-emerald-600">{"Bin Details"}</h3>
                    <button class="btn btn-ghost btn-sm btn-circle" onclick={on_close.clone()}>
                        <i class="fas fa-times"></i>
                    </button>
                </div>
                {body}
            </div>
            <form class="modal-backdrop" method="dialog">
                <button onclick={on_close}>{"close"}</button>
            </form>
        </dialog>
    }
}
