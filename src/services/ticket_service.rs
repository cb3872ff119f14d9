use chrono::Utc;
use sqlx::SqlitePool;

use crate::error::{AppError, AppResult};
use crate::models::{Ticket, TicketResponse};

#[derive(Clone)]
pub struct TicketService {
    pool: SqlitePool,
}

impl TicketService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// 登记一张新票：票号为 "T" + (现有票数 + 1)，在同一事务内取数与写入。
    /// ticket_id 上的唯一约束兜底并发场景下的重复编号。
    pub async fn register(&self, image_url: &str) -> AppResult<TicketResponse> {
        if image_url.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Image URL must not be empty".to_string(),
            ));
        }

        let mut tx = self.pool.begin().await?;

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tickets")
            .fetch_one(&mut *tx)
            .await?;
        let ticket_id = format!("T{}", count + 1);
        let now = Utc::now();

        let result =
            sqlx::query("INSERT INTO tickets (ticket_id, image_url, uploaded_at) VALUES (?, ?, ?)")
                .bind(&ticket_id)
                .bind(image_url)
                .bind(now)
                .execute(&mut *tx)
                .await?;
        let id = result.last_insert_rowid();

        tx.commit().await?;

        log::info!("Registered ticket {ticket_id}");

        Ok(TicketResponse {
            id,
            ticket_id,
            image_url: image_url.to_string(),
            uploaded_at: now,
        })
    }

    /// 全部票据，按票号数字顺序（即插入顺序）返回。
    /// 直接对 ticket_id 文本排序会得到 T1, T10, T2 ... 的错误顺序。
    pub async fn list(&self) -> AppResult<Vec<TicketResponse>> {
        let tickets = sqlx::query_as::<_, Ticket>(
            "SELECT id, ticket_id, image_url, uploaded_at FROM tickets ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(tickets.into_iter().map(TicketResponse::from).collect())
    }

    /// 按票号查找，不存在时返回 NotFound
    pub async fn find_by_ticket_id(&self, ticket_id: &str) -> AppResult<TicketResponse> {
        sqlx::query_as::<_, Ticket>(
            "SELECT id, ticket_id, image_url, uploaded_at FROM tickets WHERE ticket_id = ?",
        )
        .bind(ticket_id)
        .fetch_optional(&self.pool)
        .await?
        .map(TicketResponse::from)
        .ok_or_else(|| AppError::NotFound(format!("Ticket not found: {ticket_id}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn test_service() -> TicketService {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        sqlx::migrate!("./migrations").run(&pool).await.unwrap();
        TicketService::new(pool)
    }

    #[tokio::test]
    async fn test_ids_are_sequential() {
        let service = test_service().await;

        for expected in ["T1", "T2", "T3"] {
            let ticket = service.register("/uploads/a.jpg").await.unwrap();
            assert_eq!(ticket.ticket_id, expected);
        }
    }

    #[tokio::test]
    async fn test_list_returns_tickets_in_number_order() {
        let service = test_service().await;

        for i in 0..3 {
            service
                .register(&format!("/uploads/{i}.jpg"))
                .await
                .unwrap();
        }

        let tickets = service.list().await.unwrap();
        let ids: Vec<&str> = tickets.iter().map(|t| t.ticket_id.as_str()).collect();
        assert_eq!(ids, ["T1", "T2", "T3"]);
    }

    #[tokio::test]
    async fn test_blank_image_url_is_rejected() {
        let service = test_service().await;
        let err = service.register("   ").await.unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));

        // 校验失败不得写入任何记录
        assert!(service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_find_unknown_ticket_fails() {
        let service = test_service().await;
        let err = service.find_by_ticket_id("T99").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
