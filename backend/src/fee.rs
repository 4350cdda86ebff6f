use chrono::Datelike;

/// Whole months elapsed since the due date, ignoring the day of month.
/// Never negative.
pub(crate) fn months_late(due_date: chrono::NaiveDate, today: chrono::NaiveDate) -> i32 {
    let months = (today.year() - due_date.year()) * 12 + today.month() as i32
        - due_date.month() as i32;
    months.max(0)
}

pub(crate) fn late_fee(tenant: &common::Tenant, months: i32) -> f64 {
    if months <= 0 {
        return 0.0;
    }
    match tenant.fee_kind {
        common::FeeKind::Percentage => tenant.rent * (tenant.fee_value / 100.0) * months as f64,
        common::FeeKind::Flat => tenant.fee_value * months as f64,
    }
}

pub(crate) fn status(tenant: &common::Tenant, months: i32) -> common::RentStatus {
    if tenant.last_paid.is_some() {
        common::RentStatus::Paid
    } else if months > 0 {
        common::RentStatus::Late
    } else {
        common::RentStatus::Pending
    }
}

pub(crate) fn summarize(tenant: &common::Tenant, today: chrono::NaiveDate) -> common::TenantSummary {
    let months = months_late(tenant.due_date, today);
    let fee = late_fee(tenant, months);
    common::TenantSummary {
        id: tenant.id,
        name: tenant.name.clone(),
        room: tenant.room.clone(),
        rent: tenant.rent,
        late_fee: round2(fee),
        total: round2(tenant.rent + fee),
        status: status(tenant, months),
    }
}

fn policy_line(tenant: &common::Tenant, months: i32) -> String {
    if months <= 0 {
        return "No Late Fee".to_string();
    }
    match tenant.fee_kind {
        common::FeeKind::Percentage => format!("{}% per month", tenant.fee_value),
        common::FeeKind::Flat => format!("₹{} per month", tenant.fee_value),
    }
}

pub(crate) fn reminder_message(tenant: &common::Tenant, today: chrono::NaiveDate) -> String {
    let months = months_late(tenant.due_date, today);
    let fee = late_fee(tenant, months);
    format!(
        "Hi {},\n\n\
         Your rent of ₹{} for Room {} is pending.\n\n\
         Late Fee Policy: {}\n\
         Late Fee Applied: ₹{}\n\n\
         Total Payable: ₹{}\n\n\
         Kindly clear the payment soon.\n\n\
         Thank you.",
        tenant.name,
        tenant.rent,
        tenant.room,
        policy_line(tenant, months),
        round2(fee),
        round2(tenant.rent + fee),
    )
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> chrono::NaiveDate {
        chrono::NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn tenant(fee_kind: common::FeeKind, fee_value: f64) -> common::Tenant {
        common::Tenant {
            id: uuid::Uuid::new_v4(),
            name: "Asha".to_string(),
            room: "12".to_string(),
            phone: "5550101".to_string(),
            rent: 5000.0,
            due_date: date(2026, 5, 15),
            fee_kind,
            fee_value,
            last_paid: None,
        }
    }

    #[test]
    fn months_late_clamps_to_zero_before_due() {
        assert_eq!(months_late(date(2026, 9, 1), date(2026, 8, 30)), 0);
    }

    #[test]
    fn months_late_counts_whole_months_across_years() {
        assert_eq!(months_late(date(2025, 11, 1), date(2026, 2, 20)), 3);
    }

    #[test]
    fn months_late_ignores_day_of_month() {
        assert_eq!(months_late(date(2026, 5, 31), date(2026, 6, 1)), 1);
    }

    #[test]
    fn percentage_fee_accumulates_per_month() {
        let tenant = tenant(common::FeeKind::Percentage, 5.0);
        assert_eq!(late_fee(&tenant, 3), 750.0);
    }

    #[test]
    fn flat_fee_accumulates_per_month() {
        let tenant = tenant(common::FeeKind::Flat, 200.0);
        assert_eq!(late_fee(&tenant, 2), 400.0);
    }

    #[test]
    fn no_fee_when_not_late() {
        let tenant = tenant(common::FeeKind::Percentage, 5.0);
        assert_eq!(late_fee(&tenant, 0), 0.0);
    }

    #[test]
    fn paid_tenant_is_paid_even_when_overdue() {
        let mut tenant = tenant(common::FeeKind::Flat, 200.0);
        tenant.last_paid = Some(date(2026, 8, 1));
        assert_eq!(status(&tenant, 3), common::RentStatus::Paid);
    }

    #[test]
    fn unpaid_tenant_status_tracks_delay() {
        let tenant = tenant(common::FeeKind::Flat, 200.0);
        assert_eq!(status(&tenant, 0), common::RentStatus::Pending);
        assert_eq!(status(&tenant, 1), common::RentStatus::Late);
    }

    #[test]
    fn summary_rounds_fee_and_total() {
        let mut tenant = tenant(common::FeeKind::Percentage, 3.333);
        tenant.rent = 1000.0;
        let summary = summarize(&tenant, date(2026, 6, 20));
        assert_eq!(summary.late_fee, 33.33);
        assert_eq!(summary.total, 1033.33);
        assert_eq!(summary.status, common::RentStatus::Late);
    }

    #[test]
    fn message_names_policy_fee_and_total() {
        let tenant = tenant(common::FeeKind::Percentage, 5.0);
        let message = reminder_message(&tenant, date(2026, 8, 30));
        assert!(message.starts_with("Hi Asha,"));
        assert!(message.contains("Your rent of ₹5000 for Room 12 is pending."));
        assert!(message.contains("Late Fee Policy: 5% per month"));
        assert!(message.contains("Late Fee Applied: ₹750"));
        assert!(message.contains("Total Payable: ₹5750"));
        assert!(message.ends_with("Thank you."));
    }

    #[test]
    fn message_reports_no_late_fee_when_on_time() {
        let tenant = tenant(common::FeeKind::Flat, 200.0);
        let message = reminder_message(&tenant, date(2026, 5, 1));
        assert!(message.contains("Late Fee Policy: No Late Fee"));
        assert!(message.contains("Late Fee Applied: ₹0"));
        assert!(message.contains("Total Payable: ₹5000"));
    }
}
