mod fetch;
mod modal;
mod viewer;
mod writer;

use yew::{prelude::*, virtual_dom::AttrValue};

pub(crate) struct App {
    tenants: Vec<common::TenantSummary>,
    // reminder modal is hidden while None
    reminder: Option<String>,
    error: Option<String>,
    reminder_seq: u32,
}

pub(crate) enum Msg {
    CreateTenant(common::NewTenantPayload),
    OnTenantCreated(common::Tenant),
    OnTenantsFetched(Vec<common::TenantSummary>),
    MarkPaid(uuid::Uuid),
    OnMarkedPaid,
    ShowReminder(uuid::Uuid),
    OnReminderFetched(u32, String),
    DismissReminder,
    OnError(String),
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        fetch::get_tenants(ctx);
        Self {
            tenants: vec![],
            reminder: None,
            error: None,
            reminder_seq: 0,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::CreateTenant(payload) => {
                fetch::create_tenant(ctx, payload);
                false
            }
            Msg::OnTenantCreated(_) => {
                fetch::get_tenants(ctx);
                false
            }
            Msg::OnTenantsFetched(tenants) => {
                self.tenants = tenants;
                self.error = None;
                true
            }
            Msg::MarkPaid(id) => {
                fetch::mark_paid(ctx, id);
                false
            }
            Msg::OnMarkedPaid => {
                fetch::get_tenants(ctx);
                false
            }
            Msg::ShowReminder(id) => {
                self.reminder_seq += 1;
                fetch::get_reminder(ctx, id, self.reminder_seq);
                false
            }
            Msg::OnReminderFetched(seq, message) => {
                // a newer request supersedes this response
                if seq != self.reminder_seq {
                    return false;
                }
                self.reminder = Some(message);
                true
            }
            Msg::DismissReminder => {
                self.reminder = None;
                true
            }
            Msg::OnError(error) => {
                self.error = Some(error);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div>
                { for self.error.iter().map(|error| {
                    html!(
                        <div style="color: red; padding: 4px;">{ error }</div>
                    )
                })}
                <writer::Writer on_submit={link.callback(Msg::CreateTenant)}/>
                { for self.tenants.iter().map(|tenant| {
                    let id = tenant.id;
                    html!(
                        <viewer::Viewer
                            summary={tenant.clone()}
                            on_remind={link.callback(move |_| Msg::ShowReminder(id))}
                            on_paid={link.callback(move |_| Msg::MarkPaid(id))}
                        />
                    )
                })}
                { for self.reminder.iter().map(|message| {
                    html!(
                        <modal::Modal
                            message={AttrValue::from(message.clone())}
                            on_dismiss={link.callback(|_| Msg::DismissReminder)}
                        />
                    )
                })}
            </div>
        }
    }
}
