use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// tickets 表行记录
#[derive(Debug, Clone, FromRow)]
pub struct Ticket {
    pub id: i64,
    pub ticket_id: String,
    pub image_url: String,
    pub uploaded_at: DateTime<Utc>,
}

/// 票据信息响应
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TicketResponse {
    /// 记录ID
    pub id: i64,
    /// 人类可读票号 (T1, T2, ...)
    pub ticket_id: String,
    /// 票据图片的公开访问路径
    pub image_url: String,
    /// 上传时间
    pub uploaded_at: DateTime<Utc>,
}

impl From<Ticket> for TicketResponse {
    fn from(m: Ticket) -> Self {
        TicketResponse {
            id: m.id,
            ticket_id: m.ticket_id,
            image_url: m.image_url,
            uploaded_at: m.uploaded_at,
        }
    }
}
