use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct InlineErrorProps {
    pub message: AttrValue,
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
}

/// Screen-level failure text, optionally with a retry button
#[function_component(InlineError)]
pub fn inline_error(props: &InlineErrorProps) -> Html {
    log::warn!("Displaying error to user: {}", props.message);

    html! {
        <div class="flex flex-col items-center gap-4 py-8">
            <div role="alert" class="alert alert-error max-w-lg">
                <i class="fas fa-exclamation-circle"></i>
                <span>{&props.message}</span>
            </div>
            if let Some(on_retry) = props.on_retry.clone() {
                <button class="btn btn-sm btn-outline" onclick={Callback::from(move |_| {
                    log::debug!("User clicked retry button");
                    on_retry.emit(());
                })}>
                    <i class="fas fa-redo"></i>
                    {" Try Again"}
                </button>
            }
        </div>
    }
}
