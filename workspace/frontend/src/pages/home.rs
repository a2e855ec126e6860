use yew::prelude::*;
use yew_router::prelude::*;
use crate::Route;

#[function_component(Home)]
pub fn home() -> Html {
    let navigator = use_navigator();

    let go = |route: Route| {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(navigator) = &navigator {
                navigator.push(&route);
            }
        })
    };

    html! {
        <div class="hero min-h-[70vh] bg-base-200 rounded-box">
            <div class="hero-content flex-col items-start">
                <h1 class="text-5xl font-bold">{"Waste Management System"}</h1>
                <p class="py-6 max-w-md">
                    {"Our platform provides innovative solutions to manage waste efficiently, ensuring a cleaner and more sustainable environment. "}
                    {"With features like smart scheduling and intelligent bin management, EcoSync helps communities and organizations optimize their waste handling processes."}
                </p>
                <div class="flex flex-col gap-3">
                    <button class="btn btn-success text-white" onclick={go(Route::Schedules)}>{"Schedule"}</button>
                    <button class="btn btn-success text-white" onclick={go(Route::DriverList)}>{"Driver List"}</button>
                    <button class="btn btn-success text-white" onclick={go(Route::Dashboard)}>{"Payment Dashboard"}</button>
                </div>
            </div>
        </div>
    }
}
