use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::settings;

#[derive(Clone, Copy, PartialEq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn alert_class(self) -> &'static str {
        match self {
            ToastKind::Success => "alert-success",
            ToastKind::Error => "alert-error",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            ToastKind::Success => "fas fa-check-circle",
            ToastKind::Error => "fas fa-exclamation-circle",
        }
    }
}

#[derive(Clone, PartialEq)]
struct Toast {
    id: usize,
    message: String,
    kind: ToastKind,
}

enum ToastAction {
    Push(Toast),
    Dismiss(usize),
}

#[derive(Clone, PartialEq, Default)]
struct ToastQueue(Vec<Toast>);

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: std::rc::Rc<Self>, action: Self::Action) -> std::rc::Rc<Self> {
        let mut toasts = self.0.clone();
        match action {
            ToastAction::Push(toast) => toasts.push(toast),
            ToastAction::Dismiss(id) => toasts.retain(|t| t.id != id),
        }
        ToastQueue(toasts).into()
    }
}

/// Non-blocking notices. Screens that must block use `notify::alert` instead.
#[derive(Clone, PartialEq)]
pub struct ToastContext {
    push: Callback<(String, ToastKind)>,
}

impl ToastContext {
    pub fn show_success(&self, message: impl Into<String>) {
        self.push.emit((message.into(), ToastKind::Success));
    }

    pub fn show_error(&self, message: impl Into<String>) {
        self.push.emit((message.into(), ToastKind::Error));
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let queue = use_reducer(ToastQueue::default);
    let next_id = use_mut_ref(|| 0usize);

    let push = {
        let queue = queue.clone();
        use_callback((), move |(message, kind): (String, ToastKind), _| {
            let id = {
                let mut next = next_id.borrow_mut();
                *next += 1;
                *next
            };
            queue.dispatch(ToastAction::Push(Toast { id, message, kind }));

            let queue = queue.clone();
            Timeout::new(settings::get_settings().toast_duration_ms, move || {
                queue.dispatch(ToastAction::Dismiss(id));
            })
            .forget();
        })
    };

    let context = ToastContext { push };

    html! {
        <ContextProvider<ToastContext> context={context}>
            {props.children.clone()}
            <div class="toast toast-top toast-end z-[60]">
                {for queue.0.iter().map(|toast| {
                    let id = toast.id;
                    let on_close = {
                        let queue = queue.clone();
                        Callback::from(move |_| queue.dispatch(ToastAction::Dismiss(id)))
                    };

                    html! {
                        <div key={id} class={classes!("alert", toast.kind.alert_class(), "shadow-lg")}>
                            <i class={toast.kind.icon()}></i>
                            <span>{&toast.message}</span>
                            <button class="btn btn-sm btn-ghost btn-circle" onclick={on_close}>
                                <i class="fas fa-times"></i>
                            </button>
                        </div>
                    }
                })}
            </div>
        </ContextProvider<ToastContext>>
    }
}

/// Toast handle; a no-op outside the provider
#[hook]
pub fn use_toast() -> ToastContext {
    use_context::<ToastContext>().unwrap_or_else(|| ToastContext { push: Callback::noop() })
}
