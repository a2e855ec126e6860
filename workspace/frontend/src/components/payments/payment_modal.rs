use ::common::dashboard::{format_money, MONTHLY_BREAKDOWN, PAYMENT_PLANS};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PaymentModalProps {
    pub on_close: Callback<()>,
}

#[function_component(PaymentModal)]
pub fn payment_modal(props: &PaymentModalProps) -> Html {
    let selected_plan = use_state(|| PAYMENT_PLANS[0].name);

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let breakdown = [
        ("fas fa-dollar-sign text-emerald-500", "Monthly Payment", MONTHLY_BREAKDOWN.monthly),
        ("fas fa-info-circle text-blue-500", "Tax", MONTHLY_BREAKDOWN.tax),
        ("fas fa-cog text-gray-500", "Other Cost", MONTHLY_BREAKDOWN.other),
    ];

    html! {
        <dialog class="modal modal-open" id="payment_modal">
            <div class="modal-box w-11/12 max-w-3xl">
                <div class="flex items-center justify-between mb-6">
                    <h3 class="text-2xl font-bold text-emerald-700 flex items-center">
                        <i class="fas fa-credit-card mr-2"></i>
                        {"Waste Management Payment"}
                    </h3>
                    <button class="btn btn-ghost btn-sm btn-circle" onclick={on_close.clone()}>
                        <i class="fas fa-times"></i>
                    </button>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                    <div class="bg-base-200 rounded-xl p-6">
                        <div class="flex justify-between items-center mb-4">
                            <span class="text-lg">{"Total Amount"}</span>
                            <span class="text-2xl font-bold text-emerald-700">{format_money(MONTHLY_BREAKDOWN.total)}</span>
                        </div>
                        <ul class="space-y-3">
                            {for breakdown.iter().map(|(icon, label, amount)| html! {
                                <li class="flex justify-between">
                                    <span class="flex items-center"><i class={classes!(icon.to_string(), "mr-2")}></i>{*label}</span>
                                    <span>{format_money(*amount)}</span>
                                </li>
                            })}
                        </ul>
                    </div>

                    <div>
                        <h4 class="text-xl font-semibold mb-6 text-emerald-700">{"Payment Plan"}</h4>
                        <div class="space-y-3">
                            {for PAYMENT_PLANS.iter().map(|plan| {
                                let selected = *selected_plan == plan.name;
                                let onclick = {
                                    let selected_plan = selected_plan.clone();
                                    let name = plan.name;
                                    Callback::from(move |_: MouseEvent| selected_plan.set(name))
                                };
                                html! {
                                    <div
                                        key={plan.name}
                                        class={classes!(
                                            "p-4", "rounded-xl", "cursor-pointer", "flex", "justify-between", "border-2",
                                            if selected { "border-emerald-500 bg-emerald-50" } else { "border-transparent bg-base-200" },
                                        )}
                                        onclick={onclick}
                                    >
                                        <span class="font-medium">{plan.name}</span>
                                        <span class="font-bold text-emerald-600">{format_money(plan.amount)}</span>
                                    </div>
                                }
                            })}
                        </div>
                        <button class="btn btn-primary w-full mt-6 rounded-full">
                            <i class="fas fa-dollar-sign mr-2"></i>
                            {"Payment Go"}
                        </button>
                    </div>
                </div>
            </div>
            <form class="modal-backdrop" method="dialog">
                <button onclick={on_close}>{"close"}</button>
            </form>
        </dialog>
    }
}
