#[derive(Clone, Copy, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FeeKind {
    Percentage,
    Flat,
}

impl FeeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeeKind::Percentage => "percentage",
            FeeKind::Flat => "flat",
        }
    }

    pub fn parse(value: &str) -> Option<FeeKind> {
        match value {
            "percentage" => Some(FeeKind::Percentage),
            "flat" => Some(FeeKind::Flat),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum RentStatus {
    Paid,
    Late,
    Pending,
}

impl RentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RentStatus::Paid => "Paid",
            RentStatus::Late => "Late",
            RentStatus::Pending => "Pending",
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Tenant {
    pub id: uuid::Uuid,
    pub name: String,
    pub room: String,
    pub phone: String,
    pub rent: f64,
    pub due_date: chrono::NaiveDate,
    pub fee_kind: FeeKind,
    pub fee_value: f64,
    pub last_paid: Option<chrono::NaiveDate>,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct TenantSummary {
    pub id: uuid::Uuid,
    pub name: String,
    pub room: String,
    pub rent: f64,
    pub late_fee: f64,
    pub total: f64,
    pub status: RentStatus,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct NewTenantPayload {
    pub name: String,
    pub room: String,
    pub phone: String,
    pub rent: f64,
    pub due_date: chrono::NaiveDate,
    pub fee_kind: FeeKind,
    pub fee_value: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ReminderPayload {
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ErrorPayload {
    pub error: String,
}
