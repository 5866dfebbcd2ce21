use super::ICallRequestRepo;
use sqlx::{FromRow, PgPool};
use tiffin_domain::{CallRequest, NewCallRequest, ID};
use tracing::error;

pub struct PostgresCallRequestRepo {
    pool: PgPool,
}

impl PostgresCallRequestRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CallRequestRaw {
    id: i64,
    name: String,
    phone: String,
    created: i64,
}

impl From<CallRequestRaw> for CallRequest {
    fn from(e: CallRequestRaw) -> Self {
        Self {
            id: e.id.into(),
            name: e.name,
            phone: e.phone,
            created: e.created,
        }
    }
}

#[async_trait::async_trait]
impl ICallRequestRepo for PostgresCallRequestRepo {
    async fn insert(&self, call_request: &NewCallRequest) -> anyhow::Result<CallRequest> {
        let raw: CallRequestRaw = sqlx::query_as(
            r#"
            INSERT INTO call_requests (name, phone, created)
            VALUES($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(&call_request.name)
        .bind(&call_request.phone)
        .bind(call_request.created)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to insert call request: {:?}. DB returned error: {:?}",
                call_request, e
            );
            e
        })?;
        Ok(raw.into())
    }

    async fn find_all(&self) -> anyhow::Result<Vec<CallRequest>> {
        let call_requests: Vec<CallRequestRaw> = sqlx::query_as(
            r#"
            SELECT * FROM call_requests
            ORDER BY created DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("Find all call requests failed. DB returned error: {:?}", e);
            e
        })?;
        Ok(call_requests.into_iter().map(|c| c.into()).collect())
    }

    async fn delete(&self, call_request_id: &ID) -> Option<CallRequest> {
        let res: Option<CallRequestRaw> = sqlx::query_as(
            r#"
            DELETE FROM call_requests
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(call_request_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Delete call request with id: {} failed. DB returned error: {:?}",
                call_request_id, e
            );
            e
        })
        .ok()?;
        res.map(|c| c.into())
    }

    async fn count(&self) -> anyhow::Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM call_requests")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn count_created_since(&self, since: i64) -> anyhow::Result<i64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM call_requests WHERE created >= $1")
                .bind(since)
                .fetch_one(&self.pool)
                .await?;
        Ok(count)
    }
}
