use stylist::yew::styled_component;
use yew::prelude::*;

use crate::common::theme::use_theme;

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub title: AttrValue,
    pub value: AttrValue,
    /// Font Awesome class, e.g. `fas fa-trash`
    pub icon: AttrValue,
    pub trend: f64,
    #[prop_or_default]
    pub onclick: Option<Callback<()>>,
    /// Secondary action shown as an eye icon in the corner
    #[prop_or_default]
    pub on_view: Option<Callback<()>>,
}

#[styled_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    let theme = use_theme();

    let (from, to) = if theme.dark {
        ("#065f46", "#1f2937")
    } else {
        ("#d1fae5", "#ffffff")
    };
    let surface = css!(
        r#"
        background: linear-gradient(135deg, ${from}, ${to});
        position: relative;
        transition: transform 150ms ease-in-out;
        &:hover { transform: translateY(-4px); }
        "#,
        from = from,
        to = to,
    );

    let clickable = props.onclick.is_some();
    let onclick = props.onclick.clone().map(|cb| Callback::from(move |_: MouseEvent| cb.emit(())));

    let on_view = props.on_view.clone().map(|cb| {
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            cb.emit(());
        })
    });

    html! {
        <div
            class={classes!("card", "shadow-lg", surface, clickable.then_some("cursor-pointer"))}
            onclick={onclick}
        >
            <div class="card-body">
                <div class="flex items-center justify-between">
                    <h3 class="text-sm font-medium opacity-70">{&props.title}</h3>
                    <i class={classes!(props.icon.to_string(), "text-2xl", "text-emerald-600")}></i>
                </div>
                <p class="text-3xl font-bold">{&props.value}</p>
                <p class="text-sm text-emerald-600">
                    <i class="fas fa-arrow-up mr-1"></i>
                    {format!("{}%", props.trend)}
                </p>
                {if let Some(on_view) = on_view {
                    html! {
                        <button class="btn btn-ghost btn-sm btn-circle absolute bottom-2 right-2" onclick={on_view}>
                            <i class="fas fa-eye text-emerald-700"></i>
                        </button>
                    }
                } else {
                    html! {}
                }}
            </div>
        </div>
    }
}
