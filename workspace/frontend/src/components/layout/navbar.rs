use yew::prelude::*;
use crate::common::theme::use_theme;
use crate::hooks::use_clock;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: AttrValue,
}

#[function_component(Navbar)]
pub fn navbar(props: &Props) -> Html {
    let theme = use_theme();
    let time = use_clock();

    let on_toggle = {
        let toggle = theme.toggle.clone();
        Callback::from(move |_: Event| toggle.emit(()))
    };

    html! {
        <div class="navbar bg-base-100/80 backdrop-blur-lg shadow-lg z-40 sticky top-0">
            <div class="flex-none lg:hidden">
                <label aria-label="open sidebar" class="btn btn-square btn-ghost" for="eco-drawer">
                    <i class="fas fa-bars text-xl"></i>
                </label>
            </div>
            <div class="flex-1 px-4 gap-4">
                <span class="text-3xl font-bold">{"Eco"}<span class="text-emerald-500">{"Sync"}</span></span>
                <span class="hidden md:inline text-lg opacity-70">{ &props.title }</span>
            </div>
            <div class="flex-none gap-3">
                <div class="text-lg font-semibold bg-emerald-100 text-emerald-800 rounded-full px-4 py-2 shadow-md">
                    { time }
                </div>
                <label class="swap swap-rotate btn btn-ghost btn-circle">
                    <input type="checkbox" checked={theme.dark} onchange={on_toggle} />
                    <i class="swap-on fill-current fas fa-sun text-xl"></i>
                    <i class="swap-off fill-current fas fa-moon text-xl"></i>
                </label>
            </div>
        </div>
    }
}
