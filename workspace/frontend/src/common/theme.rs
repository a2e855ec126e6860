use yew::prelude::*;

use crate::settings::{self, AppSettings};

/// Dark mode flag shared by the shell and every themed view
#[derive(Clone, PartialEq)]
pub struct ThemeContext {
    pub dark: bool,
    pub toggle: Callback<()>,
}

impl ThemeContext {
    /// daisyUI theme name for `data-theme`
    pub fn theme_name(&self) -> &'static str {
        if self.dark { "dark" } else { "emerald" }
    }
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    pub children: Children,
}

#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let dark = use_state(|| settings::get_settings().dark_mode);

    let toggle = {
        let dark = dark.clone();
        Callback::from(move |_| {
            let next = !*dark;
            log::debug!("Dark mode toggled: {}", next);
            if let Err(e) = AppSettings::save_dark_mode(next) {
                log::warn!("Failed to persist dark mode: {:?}", e);
            }
            dark.set(next);
        })
    };

    let context = ThemeContext { dark: *dark, toggle };
    let theme = context.theme_name();

    html! {
        <ContextProvider<ThemeContext> context={context.clone()}>
            <div data-theme={theme} class={classes!("min-h-screen", context.dark.then_some("dark"))}>
                {props.children.clone()}
            </div>
        </ContextProvider<ThemeContext>>
    }
}

/// Current theme; light when rendered outside a provider
#[hook]
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().unwrap_or_else(|| ThemeContext {
        dark: false,
        toggle: Callback::noop(),
    })
}
