use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// games 表行记录（called_numbers 以 JSON 数组文本存储）
#[derive(Debug, Clone, FromRow)]
pub struct Game {
    pub id: i64,
    pub called_numbers: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Game {
    /// 解码已叫号码列表
    pub fn decode_numbers(&self) -> Result<Vec<i64>, serde_json::Error> {
        serde_json::from_str(&self.called_numbers)
    }

    pub fn into_response(self) -> Result<GameResponse, serde_json::Error> {
        let called_numbers = self.decode_numbers()?;
        Ok(GameResponse {
            id: self.id,
            called_numbers,
            is_active: self.is_active,
            created_at: self.created_at,
        })
    }
}

/// 游戏状态响应
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GameResponse {
    /// 游戏ID
    pub id: i64,
    /// 已叫号码（按叫号顺序）
    pub called_numbers: Vec<i64>,
    /// 是否为当前进行中的游戏
    pub is_active: bool,
    /// 创建时间
    pub created_at: DateTime<Utc>,
}

/// 叫号响应
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CallNumberResponse {
    /// 本次叫出的号码
    pub called_number: i64,
    /// 包含本次号码的完整叫号列表
    pub called_numbers: Vec<i64>,
}
