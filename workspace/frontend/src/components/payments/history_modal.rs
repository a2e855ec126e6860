use std::rc::Rc;

use ::common::charts::{payment_rows, payment_series};
use ::common::dashboard::format_money;
use yew::prelude::*;

use super::chart::{line_trace, PlotlyChart};
use crate::api_client::payment::get_payment_history;
use crate::common::fetch_hook::use_remote_keyed;
use crate::common::loading::Loading;

#[derive(Properties, PartialEq)]
pub struct PaymentHistoryModalProps {
    pub user_id: AttrValue,
    pub on_close: Callback<()>,
}

/// Failures leave the list empty; the modal shows no error.
#[function_component(PaymentHistoryModal)]
pub fn payment_history_modal(props: &PaymentHistoryModalProps) -> Html {
    let (history, _refetch) = use_remote_keyed(Some(props.user_id.to_string()), |user: String| async move {
        get_payment_history(&user).await
    });

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let payments = history.data().cloned().unwrap_or_default();
    let rows = payment_rows(&payments);
    let traces: Rc<Vec<_>> = Rc::new(
        line_trace(&payment_series(&payments), "Amount", "#10B981")
            .into_iter()
            .collect(),
    );

    html! {
        <dialog class="modal modal-open" id="payment_history_modal">
            <div class="modal-box w-11/12 max-w-3xl">
                <div class="flex items-center justify-between mb-6">
                    <h3 class="text-2xl font-bold text-emerald-600">{"Payment History"}</h3>
                    <button class="btn btn-ghost btn-sm btn-circle" onclick={on_close.clone()}>
                        <i class="fas fa-times"></i>
                    </button>
                </div>

                if history.is_loading() {
                    <Loading text="Loading payments..." />
                } else {
                    <>
                    if !rows.is_empty() {
                        <PlotlyChart div_id="payment-history-chart" traces={traces} height={250} />
                    }
                    <ul class="space-y-3 mt-4 max-h-72 overflow-y-auto">
                        {for rows.iter().map(|row| html! {
                            <li key={row.id.clone()} class="flex items-center justify-between p-4 rounded-lg bg-base-200">
                                <div>
                                    <p class="font-semibold">{&row.date}</p>
                                    <p class="text-sm opacity-70">{row.status}</p>
                                </div>
                                <div class="flex items-center">
                                    <p class="text-lg font-bold text-emerald-600 mr-2">{format_money(row.amount)}</p>
                                    <i class="fas fa-file-alt"></i>
                                </div>
                            </li>
                        })}
                    </ul>
                    </>
                }
            </div>
            <form class="modal-backdrop" method="dialog">
                <button onclick={on_close}>{"close"}</button>
            </form>
        </dialog>
    }
}
