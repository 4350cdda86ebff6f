use super::{App, Msg};

const BACKEND_URL: &'static str = "http://localhost:3000";

pub(crate) fn get_tenants(ctx: &yew::Context<App>) {
    let link = ctx.link().clone();
    wasm_bindgen_futures::spawn_local(async move {
        let response = reqwasm::http::Request::get(&format!("{}/tenants", BACKEND_URL))
            .send()
            .await;
        match response {
            Ok(body) => match body.json::<Vec<common::TenantSummary>>().await {
                Ok(tenants) => {
                    link.send_message(Msg::OnTenantsFetched(tenants));
                }
                Err(error) => {
                    link.send_message(Msg::OnError(error.to_string()));
                }
            },
            Err(error) => {
                link.send_message(Msg::OnError(error.to_string()));
            }
        }
    });
}

pub(crate) fn create_tenant(ctx: &yew::Context<App>, new_tenant: common::NewTenantPayload) {
    let link = ctx.link().clone();
    match serde_json::to_string(&new_tenant) {
        Ok(payload) => {
            wasm_bindgen_futures::spawn_local(async move {
                let response = reqwasm::http::Request::post(&format!("{}/add", BACKEND_URL))
                    .body(payload)
                    .header("content-type", "application/json")
                    .send()
                    .await;
                match response {
                    Ok(body) => match body.json::<common::Tenant>().await {
                        Ok(tenant) => {
                            link.send_message(Msg::OnTenantCreated(tenant));
                        }
                        Err(error) => {
                            link.send_message(Msg::OnError(error.to_string()));
                        }
                    },
                    Err(error) => {
                        link.send_message(Msg::OnError(error.to_string()));
                    }
                }
            });
        }
        Err(error) => {
            link.send_message(Msg::OnError(error.to_string()));
        }
    }
}

pub(crate) fn mark_paid(ctx: &yew::Context<App>, id: uuid::Uuid) {
    let link = ctx.link().clone();
    wasm_bindgen_futures::spawn_local(async move {
        let response = reqwasm::http::Request::put(&format!("{}/mark_paid/{}", BACKEND_URL, id))
            .send()
            .await;
        match response {
            Ok(body) => {
                if body.ok() {
                    link.send_message(Msg::OnMarkedPaid);
                } else {
                    link.send_message(Msg::OnError(format!(
                        "could not mark tenant as paid: {}",
                        body.status()
                    )));
                }
            }
            Err(error) => {
                link.send_message(Msg::OnError(error.to_string()));
            }
        }
    });
}

/// Issues `GET /reminder/{id}`. The sequence number identifies this request;
/// the app discards the response if a newer reminder has been requested since.
pub(crate) fn get_reminder(ctx: &yew::Context<App>, id: uuid::Uuid, seq: u32) {
    let link = ctx.link().clone();
    wasm_bindgen_futures::spawn_local(async move {
        let response = reqwasm::http::Request::get(&format!("{}/reminder/{}", BACKEND_URL, id))
            .send()
            .await;
        match response {
            Ok(body) => {
                if !body.ok() {
                    link.send_message(Msg::OnError(format!(
                        "could not fetch the reminder: {}",
                        body.status()
                    )));
                    return;
                }
                match body.json::<common::ReminderPayload>().await {
                    Ok(payload) => {
                        link.send_message(Msg::OnReminderFetched(seq, payload.message));
                    }
                    Err(error) => {
                        link.send_message(Msg::OnError(error.to_string()));
                    }
                }
            }
            Err(error) => {
                link.send_message(Msg::OnError(error.to_string()));
            }
        }
    });
}
