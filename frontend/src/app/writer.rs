use yew::prelude::*;

pub(crate) struct Writer {
    name_ref: NodeRef,
    room_ref: NodeRef,
    phone_ref: NodeRef,
    rent_ref: NodeRef,
    due_date_ref: NodeRef,
    fee_kind_ref: NodeRef,
    fee_value_ref: NodeRef,
}

pub(crate) enum Msg {
    Submit,
}

#[derive(PartialEq, Properties)]
pub(crate) struct Props {
    pub(crate) on_submit: Callback<common::NewTenantPayload>,
}

impl Component for Writer {
    type Message = Msg;
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            name_ref: Default::default(),
            room_ref: Default::default(),
            phone_ref: Default::default(),
            rent_ref: Default::default(),
            due_date_ref: Default::default(),
            fee_kind_ref: Default::default(),
            fee_value_ref: Default::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Submit => {
                // nothing is emitted while the numeric or date fields do not parse
                if let Some(payload) = self.payload() {
                    ctx.props().on_submit.emit(payload);
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div style="border: 1px solid black; padding: 8px;">
                <div>{ "New Tenant" }</div>
                <input ref={self.name_ref.clone()} placeholder="Name"/>
                <input ref={self.room_ref.clone()} placeholder="Room"/>
                <input ref={self.phone_ref.clone()} placeholder="Phone"/>
                <input ref={self.rent_ref.clone()} placeholder="Rent"/>
                <input ref={self.due_date_ref.clone()} type="date"/>
                <select ref={self.fee_kind_ref.clone()}>
                    <option value="percentage">{ "Percentage" }</option>
                    <option value="flat">{ "Flat" }</option>
                </select>
                <input ref={self.fee_value_ref.clone()} placeholder="Late fee value"/>
                <button onclick={link.callback(|_| Msg::Submit)}>{ "Submit" }</button>
            </div>
        }
    }
}

impl Writer {
    fn payload(&self) -> Option<common::NewTenantPayload> {
        let rent = read_input(&self.rent_ref).parse::<f64>().ok()?;
        let due_date =
            chrono::NaiveDate::parse_from_str(&read_input(&self.due_date_ref), "%Y-%m-%d").ok()?;
        let fee_kind = self
            .fee_kind_ref
            .cast::<web_sys::HtmlSelectElement>()
            .and_then(|select| common::FeeKind::parse(&select.value()))?;
        let fee_value = read_input(&self.fee_value_ref).parse::<f64>().ok()?;
        Some(common::NewTenantPayload {
            name: read_input(&self.name_ref),
            room: read_input(&self.room_ref),
            phone: read_input(&self.phone_ref),
            rent,
            due_date,
            fee_kind,
            fee_value,
        })
    }
}

fn read_input(node: &NodeRef) -> String {
    node.cast::<web_sys::HtmlInputElement>()
        .map(|h| h.value())
        .unwrap_or(String::new())
}
