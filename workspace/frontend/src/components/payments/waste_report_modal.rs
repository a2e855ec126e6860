use ::common::charts::waste_report_series;
use yew::prelude::*;

use super::chart::{area_trace, PlotlyChart};

const FINDINGS: [&str; 4] = [
    "General waste peaked in 2012 but has been decreasing since then.",
    "Recyclable waste collection has been steadily increasing since 2006.",
    "Organic waste collection started in 2008 and has shown consistent growth.",
    "The overall trend shows a shift from general waste to more recyclable and organic waste collection.",
];

#[derive(Properties, PartialEq)]
pub struct WasteReportModalProps {
    pub on_close: Callback<()>,
}

#[function_component(WasteReportModal)]
pub fn waste_report_modal(props: &WasteReportModalProps) -> Html {
    let traces = use_memo((), |_| {
        let rows = waste_report_series();
        let years: Vec<String> = rows.iter().map(|r| r.year.to_string()).collect();
        let series = [
            ("General", "#EF4444", rows.iter().map(|r| r.general).collect::<Vec<_>>()),
            ("Recyclable", "#10B981", rows.iter().map(|r| r.recyclable).collect()),
            ("Organic", "#F59E0B", rows.iter().map(|r| r.organic).collect()),
        ];
        series
            .into_iter()
            .enumerate()
            .filter_map(|(i, (name, color, values))| area_trace(years.clone(), values, name, color, i == 0))
            .collect::<Vec<_>>()
    });

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <dialog class="modal modal-open" id="waste_report_modal">
            <div class="modal-box w-11/12 max-w-4xl">
                <div class="flex items-center justify-between mb-6">
                    <h3 class="text-2xl font-bold text-emerald-600">{"Waste Analysis Report"}</h3>
                    <button class="btn btn-ghost btn-sm btn-circle" onclick={on_close.clone()}>
                        <i class="fas fa-times"></i>
                    </button>
                </div>
                <PlotlyChart div_id="waste-report-chart" traces={traces.clone()} height={350} />
                <h4 class="text-xl font-semibold text-emerald-600 mt-6 mb-2">{"Key Findings"}</h4>
                <ul class="list-disc pl-6 space-y-1">
                    {for FINDINGS.iter().map(|finding| html! { <li>{*finding}</li> })}
                </ul>
            </div>
            <form class="modal-backdrop" method="dialog">
                <button onclick={on_close}>{"close"}</button>
            </form>
        </dialog>
    }
}
