use ::common::FullBin;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(FullBins)]
pub fn full_bins() -> Html {
    let navigator = use_navigator();
    let bins = use_memo((), |_| FullBin::roster());

    let on_add = Callback::from(move |_: MouseEvent| {
        if let Some(navigator) = &navigator {
            navigator.push(&Route::AddSchedule);
        }
    });

    html! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body">
                <h1 class="card-title text-3xl justify-center">{"Full Bins"}</h1>
                <div class="overflow-x-auto">
                    <table class="table table-zebra">
                        <thead>
                            <tr>
                                <th>{"Bin ID"}</th>
                                <th>{"Location"}</th>
                                <th>{"Status"}</th>
                                <th>{"Last Collected"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {for bins.iter().map(|bin| html! {
                                <tr key={bin.bin_id.clone()}>
                                    <td>{&bin.bin_id}</td>
                                    <td>{&bin.location}</td>
                                    <td><span class="badge badge-error">{bin.status.as_str()}</span></td>
                                    <td>{&bin.last_collected}</td>
                                </tr>
                            })}
                        </tbody>
                    </table>
                </div>
                <div class="card-actions justify-center mt-6">
                    <button class="btn btn-success" onclick={on_add}>{"Add Schedule for Collecting this Bins"}</button>
                </div>
            </div>
        </div>
    }
}
