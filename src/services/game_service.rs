use chrono::Utc;
use sqlx::SqlitePool;

use crate::error::{AppError, AppResult};
use crate::models::{CallNumberResponse, Game, GameResponse};
use crate::utils::draw_number;

/// 叫号更新的最大重试次数（并发叫号竞争失败时重读重试）
const MAX_CALL_ATTEMPTS: u32 = 5;

#[derive(Clone)]
pub struct GameService {
    pool: SqlitePool,
}

impl GameService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// 获取当前游戏（按创建时间取最新一局）。
    /// 空库时显式创建一局未激活、叫号为空的游戏并返回 —— 惰性创建带有写入副作用，
    /// 方法名刻意体现这一点。
    pub async fn get_or_create_current(&self) -> AppResult<GameResponse> {
        let latest = sqlx::query_as::<_, Game>(
            "SELECT id, called_numbers, is_active, created_at FROM games \
             ORDER BY created_at DESC, id DESC LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await?;

        let game = match latest {
            Some(game) => game,
            None => {
                let now = Utc::now();
                let result = sqlx::query(
                    "INSERT INTO games (called_numbers, is_active, created_at) VALUES ('[]', 0, ?)",
                )
                .bind(now)
                .execute(&self.pool)
                .await?;
                Game {
                    id: result.last_insert_rowid(),
                    called_numbers: "[]".to_string(),
                    is_active: false,
                    created_at: now,
                }
            }
        };

        Ok(game.into_response()?)
    }

    /// 开始新游戏：先将所有进行中的游戏置为结束（历史保留），再创建一局新游戏。
    /// 保证任一时刻最多只有一局 is_active = 1。
    pub async fn start(&self) -> AppResult<GameResponse> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("UPDATE games SET is_active = 0 WHERE is_active = 1")
            .execute(&mut *tx)
            .await?;

        let now = Utc::now();
        let result =
            sqlx::query("INSERT INTO games (called_numbers, is_active, created_at) VALUES ('[]', 1, ?)")
                .bind(now)
                .execute(&mut *tx)
                .await?;
        let id = result.last_insert_rowid();

        tx.commit().await?;

        log::info!("Started new game {id}");

        Ok(GameResponse {
            id,
            called_numbers: Vec::new(),
            is_active: true,
            created_at: now,
        })
    }

    /// 重新开始：与 start 完全一致，单独命名仅用于前端二次确认的入口
    pub async fn restart(&self) -> AppResult<GameResponse> {
        self.start().await
    }

    /// 查找进行中的游戏（is_active 为一等索引字段，创建时间仅作并列时的取舍）
    pub async fn active(&self) -> AppResult<Game> {
        sqlx::query_as::<_, Game>(
            "SELECT id, called_numbers, is_active, created_at FROM games \
             WHERE is_active = 1 ORDER BY created_at DESC, id DESC LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::NoActiveGame)
    }

    /// 叫号：从剩余号码中均匀随机抽取一个并追加到当前游戏。
    ///
    /// 写入采用条件更新（where called_numbers 等于读取时的值），并发叫号
    /// 相互竞争时乐观重试整个 读取-抽取-写入 过程，确保不会重复叫号。
    /// 号码叫完时返回 PoolExhausted 且不修改任何状态。
    pub async fn call_number(&self) -> AppResult<CallNumberResponse> {
        let mut attempts = 0;
        loop {
            attempts += 1;

            let game = self.active().await?;
            let mut called = game.decode_numbers()?;

            let number = draw_number(&called, &mut rand::thread_rng())?;
            called.push(number);
            let updated = serde_json::to_string(&called)?;

            let result =
                sqlx::query("UPDATE games SET called_numbers = ? WHERE id = ? AND called_numbers = ?")
                    .bind(&updated)
                    .bind(game.id)
                    .bind(&game.called_numbers)
                    .execute(&self.pool)
                    .await?;

            if result.rows_affected() == 1 {
                log::info!("Game {}: called number {number}", game.id);
                return Ok(CallNumberResponse {
                    called_number: number,
                    called_numbers: called,
                });
            }

            // 条件更新未命中：另一个叫号请求先行落库，重读后重试
            if attempts >= MAX_CALL_ATTEMPTS {
                return Err(AppError::InternalError(
                    "Concurrent number calls kept conflicting".to_string(),
                ));
            }
        }
    }
}
