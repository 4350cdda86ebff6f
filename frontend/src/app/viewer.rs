use yew::prelude::*;

pub(crate) struct Viewer;

pub(crate) enum Msg {
    Remind,
    Paid,
}

#[derive(PartialEq, Properties)]
pub(crate) struct Props {
    pub(crate) summary: common::TenantSummary,
    pub(crate) on_remind: Callback<()>,
    pub(crate) on_paid: Callback<()>,
}

impl Component for Viewer {
    type Message = Msg;
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Remind => {
                ctx.props().on_remind.emit(());
                false
            }
            Msg::Paid => {
                ctx.props().on_paid.emit(());
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let summary = &ctx.props().summary;
        html! {
            <div style="padding: 4px; border: 1px dashed black;">
                <span>{ &summary.name }</span>
                { format!(" | Room {}", summary.room) }
                { format!(" | Rent ₹{}", summary.rent) }
                { format!(" | Late Fee ₹{}", summary.late_fee) }
                { format!(" | Total ₹{}", summary.total) }
                { format!(" | {}", summary.status.as_str()) }
                <button onclick={link.callback(|_| Msg::Remind)}>{ "Remind" }</button>
                <button onclick={link.callback(|_| Msg::Paid)}>{ "Paid" }</button>
            </div>
        }
    }
}
