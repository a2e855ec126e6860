use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CompletionMessageProps {
    pub on_close: Callback<()>,
}

#[function_component(CompletionMessage)]
pub fn completion_message(props: &CompletionMessageProps) -> Html {
    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <dialog class="modal modal-open" id="completion_message">
            <div class="modal-box text-center">
                <i class="fas fa-check-circle text-5xl text-emerald-500 mb-4"></i>
                <h3 class="text-2xl font-bold text-emerald-600 mb-2">{"Registration Successful!"}</h3>
                <p class="opacity-70 mb-6">{"Your new recycling bin has been registered successfully."}</p>
                <button class="btn btn-primary" onclick={on_close}>{"Close"}</button>
            </div>
        </dialog>
    }
}
