use ::common::dashboard::{format_account_status, format_money, format_next_payment, MONTHLY_BREAKDOWN};
use ::common::model::iso_day;
use ::common::ApiError;
use yew::prelude::*;

use super::bin_details_modal::BinDetailsModal;
use super::bin_registration_modal::BinRegistrationModal;
use super::completion_message::CompletionMessage;
use super::history_modal::PaymentHistoryModal;
use super::payment_modal::PaymentModal;
use super::stat_card::StatCard;
use super::waste_report_modal::WasteReportModal;
use crate::api_client::account::get_account_status;
use crate::api_client::bin::has_bin;
use crate::api_client::collector::get_recycling_activity;
use crate::api_client::payment::get_next_payment;
use crate::common::fetch_hook::use_remote_keyed;
use crate::common::theme::use_theme;
use crate::hooks::use_query;
use crate::router::UserQuery;
use crate::settings;

/// Which overlay is open. Only one at a time.
#[derive(Clone, Copy, PartialEq)]
enum Overlay {
    Payment,
    History,
    Registration,
    Completion,
    BinDetails,
    Report,
}

/// Card text while its request is in flight
const PENDING: &str = "...";

#[function_component(PaymentDashboard)]
pub fn payment_dashboard() -> Html {
    let theme = use_theme();
    let user_id = use_query::<UserQuery>()
        .map(|q| q.user_id)
        .filter(|id| !id.trim().is_empty())
        .unwrap_or_else(|| settings::get_settings().default_user_id);

    // Each card owns its request; one failing never blanks another.
    let (next_payment, _) = use_remote_keyed(Some(user_id.clone()), |user: String| async move {
        Ok::<_, ApiError>(format_next_payment(&get_next_payment(&user).await))
    });
    let (status, _) = use_remote_keyed(Some(user_id.clone()), |user: String| async move {
        Ok::<_, ApiError>(format_account_status(&get_account_status(&user).await))
    });
    let (activity, _) = use_remote_keyed(Some(user_id.clone()), |user: String| async move {
        Ok::<_, ApiError>(get_recycling_activity(&user).await.unwrap_or_default())
    });
    let (bin_check, _) = use_remote_keyed(Some(user_id.clone()), |user: String| async move {
        Ok::<_, ApiError>(has_bin(&user).await.unwrap_or(false))
    });

    let registered = use_state(|| false);
    let overlay = use_state(|| None::<Overlay>);

    let open = |target: Overlay| {
        let overlay = overlay.clone();
        Callback::from(move |_: ()| overlay.set(Some(target)))
    };
    let close = {
        let overlay = overlay.clone();
        Callback::from(move |_: ()| overlay.set(None))
    };
    let on_registered = {
        let overlay = overlay.clone();
        let registered = registered.clone();
        Callback::from(move |_: ()| {
            registered.set(true);
            overlay.set(Some(Overlay::Completion));
        })
    };

    let user_has_bin = *registered || bin_check.data().copied().unwrap_or(false);
    let card_text = |value: Option<&String>| value.cloned().unwrap_or_else(|| PENDING.to_string());
    let heading = if theme.dark { "text-emerald-300" } else { "text-emerald-700" };

    let records = activity.data().cloned().unwrap_or_default();

    let modal = match *overlay {
        Some(Overlay::Payment) => html! { <PaymentModal on_close={close.clone()} /> },
        Some(Overlay::History) => html! {
            <PaymentHistoryModal user_id={user_id.clone()} on_close={close.clone()} />
        },
        Some(Overlay::Registration) => html! {
            <BinRegistrationModal user_id={user_id.clone()} on_close={close.clone()} on_registered={on_registered} />
        },
        Some(Overlay::Completion) => html! { <CompletionMessage on_close={close.clone()} /> },
        Some(Overlay::BinDetails) => html! {
            <BinDetailsModal user_id={user_id.clone()} on_close={close.clone()} />
        },
        Some(Overlay::Report) => html! { <WasteReportModal on_close={close.clone()} /> },
        None => html! {},
    };

    let on_report = {
        let open_report = open(Overlay::Report);
        Callback::from(move |_: MouseEvent| open_report.emit(()))
    };

    html! {
        <div class="max-w-7xl mx-auto">
            <div class="flex items-center justify-between mb-10">
                <h2 class={classes!("text-4xl", "font-bold", heading)}>{"Recycling Dashboard"}</h2>
                <button class="btn btn-info rounded-full text-white">
                    <i class="fas fa-award mr-2"></i>
                    {"BLUE Badge"}
                </button>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-8 mb-12">
                <StatCard
                    title="Next Payment Date"
                    value={card_text(next_payment.data())}
                    icon="fas fa-trash-alt"
                    trend={5.3}
                />
                <StatCard
                    title="Recycling Bins"
                    value={if user_has_bin { "1" } else { "0" }}
                    icon="fas fa-archive"
                    trend={if user_has_bin { 100.0 } else { 0.0 }}
                    onclick={open(Overlay::Registration)}
                    on_view={open(Overlay::BinDetails)}
                />
                <StatCard
                    title="Active Status"
                    value={card_text(status.data())}
                    icon="fas fa-user"
                    trend={0.8}
                />
                <StatCard
                    title="Monthly Payment"
                    value={format_money(MONTHLY_BREAKDOWN.total)}
                    icon="fas fa-credit-card"
                    trend={7.2}
                    onclick={open(Overlay::Payment)}
                    on_view={open(Overlay::History)}
                />
            </div>

            <div class="card bg-base-100 shadow-lg mb-12">
                <div class="card-body">
                    <div class="flex justify-between items-center mb-6">
                        <h2 class={classes!("text-2xl", "font-semibold", heading)}>{"Recent Recycling Activity"}</h2>
                        <div class="flex gap-4">
                            <button class="btn btn-sm rounded-full btn-success btn-outline">{"View All"}</button>
                            <button class="btn btn-sm rounded-full btn-error btn-outline" onclick={on_report}>{"Report"}</button>
                        </div>
                    </div>

                    if activity.is_loading() {
                        <div class="flex justify-center py-4">
                            <span class="loading loading-spinner loading-md"></span>
                        </div>
                    } else if records.is_empty() {
                        <p class="opacity-60">{"No recent recycling activity."}</p>
                    } else {
                        <ul class="space-y-4">
                            {for records.iter().enumerate().map(|(i, record)| html! {
                                <li key={i} class="p-4 rounded-lg bg-base-200">
                                    <div class="flex items-center justify-between">
                                        <span class="font-semibold">{&record.bin_id}</span>
                                        <span class="font-semibold">{record.driver_name.clone().unwrap_or_default()}</span>
                                        <span class="text-sm opacity-60">
                                            {record.collection_date.as_deref().and_then(iso_day).unwrap_or_default()}
                                        </span>
                                    </div>
                                </li>
                            })}
                        </ul>
                    }
                </div>
            </div>

            {modal}
        </div>
    }
}
