use wasm_bindgen::JsCast;
use yew::{prelude::*, virtual_dom::AttrValue};

pub(crate) struct Modal {
    message_ref: NodeRef,
}

pub(crate) enum Msg {
    Copy,
    Dismiss,
}

#[derive(PartialEq, Properties)]
pub(crate) struct Props {
    pub(crate) message: AttrValue,
    pub(crate) on_dismiss: Callback<()>,
}

impl Component for Modal {
    type Message = Msg;
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            message_ref: Default::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Copy => {
                let notice = if self.copy_to_clipboard() {
                    "Copied!"
                } else {
                    "Copy failed"
                };
                if let Some(window) = web_sys::window() {
                    let _ = window.alert_with_message(notice);
                }
                false
            }
            Msg::Dismiss => {
                ctx.props().on_dismiss.emit(());
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div style="border: 2px solid black; padding: 8px; background: white;">
                <textarea
                    ref={self.message_ref.clone()}
                    value={ctx.props().message.clone()}
                    rows="12"
                    cols="48"
                />
                <div>
                    <button onclick={link.callback(|_| Msg::Copy)}>{ "Copy" }</button>
                    <button onclick={link.callback(|_| Msg::Dismiss)}>{ "Close" }</button>
                </div>
            </div>
        }
    }
}

impl Modal {
    // `execCommand` is deprecated and absent on some engines; the notice must
    // reflect the reported outcome instead of assuming success.
    fn copy_to_clipboard(&self) -> bool {
        let field = match self.message_ref.cast::<web_sys::HtmlTextAreaElement>() {
            Some(field) => field,
            None => return false,
        };
        field.select();
        web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.dyn_into::<web_sys::HtmlDocument>().ok())
            .and_then(|document| document.exec_command("copy").ok())
            .unwrap_or(false)
    }
}
