use ::common::model::iso_day;
use ::common::ApiError;
use yew::prelude::*;

use crate::api_client::collector::get_waste_details;
use crate::common::fetch_hook::use_remote_keyed;
use crate::common::loading::Loading;
use crate::hooks::{use_query, RemoteResource};
use crate::router::ScheduleQuery;

#[function_component(WasteDetails)]
pub fn waste_details() -> Html {
    let schedule_id = use_query::<ScheduleQuery>()
        .map(|q| q.schedule_id)
        .filter(|id| !id.is_empty());

    let (details, _) = use_remote_keyed(schedule_id.clone(), |id: String| async move {
        get_waste_details(&id).await
    });

    if schedule_id.is_none() {
        return html! { <h2 class="text-xl text-center">{format!("{}.", ApiError::MissingContext("schedule"))}</h2> };
    }

    let records = match &*details {
        RemoteResource::Idle | RemoteResource::Loading => return html! { <Loading text="Loading waste details..." /> },
        RemoteResource::Failed(_) => return html! { <div>{"Error fetching waste details"}</div> },
        RemoteResource::Ready(records) => records,
    };

    html! {
        <div class="card bg-base-100 shadow-xl max-w-2xl mx-auto">
            <div class="card-body gap-4">
                <h2 class="card-title">{"Waste Collection Details"}</h2>
                if records.is_empty() {
                    <div>{"No waste details found."}</div>
                } else {
                    {for records.iter().enumerate().map(|(index, detail)| {
                        let date = detail.collection_date.as_deref().and_then(iso_day).unwrap_or_default();
                        html! {
                            <div key={index} class="border-b border-base-300 pb-3">
                                <h4 class="font-semibold">{format!("Collector ID: {}", detail.collector_id.as_deref().unwrap_or("-"))}</h4>
                                <p>{format!("Bin ID: {}", detail.bin_id)}</p>
                                <input type="date" class="input input-bordered input-sm" value={date} readonly={true} />
                            </div>
                        }
                    })}
                }
            </div>
        </div>
    }
}
