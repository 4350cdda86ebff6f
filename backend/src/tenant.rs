pub(crate) async fn init_schema(pool: &sqlx::SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
    CREATE TABLE IF NOT EXISTS tenants (
        id TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        room TEXT NOT NULL,
        phone TEXT NOT NULL,
        rent REAL NOT NULL,
        due_date TEXT NOT NULL,
        fee_kind TEXT NOT NULL,
        fee_value REAL NOT NULL,
        last_paid TEXT
    )
        "#,
    )
    .execute(pool)
    .await
    .map(|_| ())
}

#[derive(sqlx::FromRow)]
struct TenantRow {
    id: String,
    name: String,
    room: String,
    phone: String,
    rent: f64,
    due_date: chrono::NaiveDate,
    fee_kind: String,
    fee_value: f64,
    last_paid: Option<chrono::NaiveDate>,
}

impl TenantRow {
    fn decode(self) -> Result<common::Tenant, sqlx::Error> {
        let id = uuid::Uuid::parse_str(&self.id)
            .map_err(|error| sqlx::Error::Decode(Box::new(error)))?;
        let fee_kind = common::FeeKind::parse(&self.fee_kind).ok_or_else(|| {
            sqlx::Error::Decode(format!("unknown fee kind {:?}", self.fee_kind).into())
        })?;
        Ok(common::Tenant {
            id,
            name: self.name,
            room: self.room,
            phone: self.phone,
            rent: self.rent,
            due_date: self.due_date,
            fee_kind,
            fee_value: self.fee_value,
            last_paid: self.last_paid,
        })
    }
}

struct TenantManager;

impl TenantManager {
    async fn index(
        executor: impl sqlx::SqliteExecutor<'_>,
    ) -> Result<Vec<common::Tenant>, sqlx::Error> {
        let rows = sqlx::query_as::<_, TenantRow>(
            r#"
        SELECT
            id, name, room, phone, rent, due_date, fee_kind, fee_value, last_paid
        FROM tenants
        ORDER BY name
            "#,
        )
        .fetch_all(executor)
        .await?;
        rows.into_iter().map(TenantRow::decode).collect()
    }

    async fn fetch(
        executor: impl sqlx::SqliteExecutor<'_>,
        id: &uuid::Uuid,
    ) -> Result<Option<common::Tenant>, sqlx::Error> {
        let row = sqlx::query_as::<_, TenantRow>(
            r#"
        SELECT
            id, name, room, phone, rent, due_date, fee_kind, fee_value, last_paid
        FROM tenants
        WHERE id = ?1
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(executor)
        .await?;
        row.map(TenantRow::decode).transpose()
    }

    async fn insert(
        executor: impl sqlx::SqliteExecutor<'_>,
        tenant: &common::Tenant,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
        INSERT INTO tenants
            (id, name, room, phone, rent, due_date, fee_kind, fee_value, last_paid)
        VALUES(?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            "#,
        )
        .bind(tenant.id.to_string())
        .bind(&tenant.name)
        .bind(&tenant.room)
        .bind(&tenant.phone)
        .bind(tenant.rent)
        .bind(tenant.due_date)
        .bind(tenant.fee_kind.as_str())
        .bind(tenant.fee_value)
        .bind(tenant.last_paid)
        .execute(executor)
        .await
        .map(|_| ())
    }

    async fn mark_paid(
        executor: impl sqlx::SqliteExecutor<'_>,
        id: &uuid::Uuid,
        on: chrono::NaiveDate,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query(
            r#"
        UPDATE tenants
        SET last_paid = ?2
        WHERE id = ?1
            "#,
        )
        .bind(id.to_string())
        .bind(on)
        .execute(executor)
        .await
        .map(|result| result.rows_affected() > 0)
    }
}

pub(crate) async fn index(
    app_state: actix_web::web::Data<crate::AppState>,
) -> actix_web::HttpResponse {
    match TenantManager::index(&app_state.pool).await {
        Ok(tenants) => {
            let today = chrono::Utc::now().date_naive();
            let summaries: Vec<common::TenantSummary> = tenants
                .iter()
                .map(|tenant| crate::fee::summarize(tenant, today))
                .collect();
            actix_web::HttpResponse::Ok().json(summaries)
        }
        Err(_) => actix_web::HttpResponse::InternalServerError().finish(),
    }
}

pub(crate) async fn create(
    app_state: actix_web::web::Data<crate::AppState>,
    payload: actix_web::web::Json<common::NewTenantPayload>,
) -> actix_web::HttpResponse {
    let payload = payload.into_inner();
    let tenant = common::Tenant {
        id: uuid::Uuid::new_v4(),
        name: payload.name,
        room: payload.room,
        phone: payload.phone,
        rent: payload.rent,
        due_date: payload.due_date,
        fee_kind: payload.fee_kind,
        fee_value: payload.fee_value,
        last_paid: None,
    };
    match TenantManager::insert(&app_state.pool, &tenant).await {
        Ok(_) => actix_web::HttpResponse::Ok().json(tenant),
        Err(_) => actix_web::HttpResponse::InternalServerError().finish(),
    }
}

pub(crate) async fn mark_paid(
    app_state: actix_web::web::Data<crate::AppState>,
    id: actix_web::web::Path<uuid::Uuid>,
) -> actix_web::HttpResponse {
    let id = id.into_inner();
    let today = chrono::Utc::now().date_naive();
    match TenantManager::mark_paid(&app_state.pool, &id, today).await {
        Ok(updated) => {
            if updated {
                actix_web::HttpResponse::Ok().finish()
            } else {
                actix_web::HttpResponse::NotFound().finish()
            }
        }
        Err(_) => actix_web::HttpResponse::InternalServerError().finish(),
    }
}

pub(crate) async fn reminder(
    app_state: actix_web::web::Data<crate::AppState>,
    id: actix_web::web::Path<uuid::Uuid>,
) -> actix_web::HttpResponse {
    let id = id.into_inner();
    match TenantManager::fetch(&app_state.pool, &id).await {
        Ok(Some(tenant)) => {
            let message = crate::fee::reminder_message(&tenant, chrono::Utc::now().date_naive());
            actix_web::HttpResponse::Ok().json(common::ReminderPayload { message })
        }
        Ok(None) => actix_web::HttpResponse::NotFound().json(common::ErrorPayload {
            error: "Not found".to_string(),
        }),
        Err(_) => actix_web::HttpResponse::InternalServerError().finish(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn pool() -> sqlx::SqlitePool {
        let pool = sqlx::pool::PoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("in-memory sqlite");
        init_schema(&pool).await.expect("schema");
        pool
    }

    fn tenant(name: &str) -> common::Tenant {
        common::Tenant {
            id: uuid::Uuid::new_v4(),
            name: name.to_string(),
            room: "12".to_string(),
            phone: "5550101".to_string(),
            rent: 5000.0,
            due_date: chrono::NaiveDate::from_ymd_opt(2026, 5, 15).unwrap(),
            fee_kind: common::FeeKind::Percentage,
            fee_value: 5.0,
            last_paid: None,
        }
    }

    #[actix_web::test]
    async fn insert_then_fetch_returns_the_tenant() {
        let pool = pool().await;
        let tenant = tenant("Asha");
        TenantManager::insert(&pool, &tenant).await.unwrap();

        let fetched = TenantManager::fetch(&pool, &tenant.id).await.unwrap();
        assert_eq!(fetched, Some(tenant));
    }

    #[actix_web::test]
    async fn fetch_unknown_id_is_none() {
        let pool = pool().await;
        let fetched = TenantManager::fetch(&pool, &uuid::Uuid::new_v4())
            .await
            .unwrap();
        assert_eq!(fetched, None);
    }

    #[actix_web::test]
    async fn index_lists_tenants_by_name() {
        let pool = pool().await;
        TenantManager::insert(&pool, &tenant("Ravi")).await.unwrap();
        TenantManager::insert(&pool, &tenant("Asha")).await.unwrap();

        let tenants = TenantManager::index(&pool).await.unwrap();
        let names: Vec<&str> = tenants.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Asha", "Ravi"]);
    }

    #[actix_web::test]
    async fn mark_paid_sets_the_payment_date() {
        let pool = pool().await;
        let tenant = tenant("Asha");
        TenantManager::insert(&pool, &tenant).await.unwrap();

        let on = chrono::NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
        let updated = TenantManager::mark_paid(&pool, &tenant.id, on).await.unwrap();
        assert!(updated);

        let fetched = TenantManager::fetch(&pool, &tenant.id).await.unwrap().unwrap();
        assert_eq!(fetched.last_paid, Some(on));
    }

    #[actix_web::test]
    async fn mark_paid_unknown_id_updates_nothing() {
        let pool = pool().await;
        let on = chrono::NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
        let updated = TenantManager::mark_paid(&pool, &uuid::Uuid::new_v4(), on)
            .await
            .unwrap();
        assert!(!updated);
    }

    #[actix_web::test]
    async fn reminder_route_serves_the_message_payload() {
        let pool = pool().await;
        let tenant = tenant("Asha");
        TenantManager::insert(&pool, &tenant).await.unwrap();

        let app_state = actix_web::web::Data::new(crate::AppState { pool });
        let app = actix_web::test::init_service(
            actix_web::App::new()
                .app_data(app_state)
                .route("/reminder/{id}", actix_web::web::get().to(reminder)),
        )
        .await;

        let request = actix_web::test::TestRequest::get()
            .uri(&format!("/reminder/{}", tenant.id))
            .to_request();
        let payload: common::ReminderPayload =
            actix_web::test::call_and_read_body_json(&app, request).await;
        assert!(payload.message.starts_with("Hi Asha,"));
        assert!(payload.message.contains("Room 12"));
    }

    #[actix_web::test]
    async fn reminder_route_unknown_id_is_not_found() {
        let pool = pool().await;
        let app_state = actix_web::web::Data::new(crate::AppState { pool });
        let app = actix_web::test::init_service(
            actix_web::App::new()
                .app_data(app_state)
                .route("/reminder/{id}", actix_web::web::get().to(reminder)),
        )
        .await;

        let request = actix_web::test::TestRequest::get()
            .uri(&format!("/reminder/{}", uuid::Uuid::new_v4()))
            .to_request();
        let response = actix_web::test::call_service(&app, request).await;
        assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn mark_paid_route_flips_status_to_paid() {
        let pool = pool().await;
        let tenant = tenant("Asha");
        TenantManager::insert(&pool, &tenant).await.unwrap();

        let app_state = actix_web::web::Data::new(crate::AppState { pool });
        let app = actix_web::test::init_service(
            actix_web::App::new()
                .app_data(app_state)
                .route(
                    "/mark_paid/{id}",
                    actix_web::web::put().to(mark_paid),
                )
                .route("/tenants", actix_web::web::get().to(index)),
        )
        .await;

        let request = actix_web::test::TestRequest::put()
            .uri(&format!("/mark_paid/{}", tenant.id))
            .to_request();
        let response = actix_web::test::call_service(&app, request).await;
        assert_eq!(response.status(), actix_web::http::StatusCode::OK);

        let request = actix_web::test::TestRequest::get().uri("/tenants").to_request();
        let summaries: Vec<common::TenantSummary> =
            actix_web::test::call_and_read_body_json(&app, request).await;
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].status, common::RentStatus::Paid);
    }
}
