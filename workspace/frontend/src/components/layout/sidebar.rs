use yew::prelude::*;
use yew_router::prelude::*;
use crate::Route;

struct MenuItem {
    icon: &'static str,
    label: &'static str,
    route: Route,
}

fn menu() -> [MenuItem; 7] {
    [
        MenuItem { icon: "fas fa-chart-bar", label: "Dashboard", route: Route::Home },
        MenuItem { icon: "fas fa-user", label: "Users", route: Route::Home },
        MenuItem { icon: "fas fa-calendar", label: "Schedule", route: Route::Schedules },
        MenuItem { icon: "fas fa-truck", label: "Drivers", route: Route::DriverList },
        MenuItem { icon: "fas fa-archive", label: "Bins", route: Route::Home },
        MenuItem { icon: "fas fa-credit-card", label: "Payments", route: Route::Dashboard },
        MenuItem { icon: "fas fa-cog", label: "Settings", route: Route::Home },
    ]
}

#[function_component(Sidebar)]
pub fn sidebar() -> Html {
    html! {
        <div class="drawer-side z-50">
            <label aria-label="close sidebar" class="drawer-overlay" for="eco-drawer"></label>
            <ul class="menu p-4 w-28 min-h-full bg-base-100 text-base-content items-center gap-4 border-r border-base-300">
                <li class="mb-6 text-emerald-600">
                    <i class="fas fa-trash-alt text-4xl"></i>
                </li>
                {for menu().into_iter().map(|item| html! {
                    <li>
                        <Link<Route> to={item.route} classes="flex flex-col items-center rounded-2xl text-emerald-700 hover:bg-green-300">
                            <i class={classes!(item.icon, "text-xl")}></i>
                            <span class="text-xs">{item.label}</span>
                        </Link<Route>>
                    </li>
                })}
            </ul>
        </div>
    }
}
