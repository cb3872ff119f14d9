use crate::error::AppResult;
use crate::models::{ClaimType, VerifyClaimResponse};
use crate::services::{GameService, TicketService};

/// 报奖查询：把票据与当前游戏的叫号记录拼在一起返回给主持人。
/// 系统没有票面号码布局模型，真正的中奖判定由人工对照图片完成。
#[derive(Clone)]
pub struct ClaimService {
    tickets: TicketService,
    games: GameService,
}

impl ClaimService {
    pub fn new(tickets: TicketService, games: GameService) -> Self {
        Self { tickets, games }
    }

    pub async fn lookup(
        &self,
        ticket_id: &str,
        claim_type: ClaimType,
    ) -> AppResult<VerifyClaimResponse> {
        let ticket = self.tickets.find_by_ticket_id(ticket_id).await?;
        let game = self.games.active().await?;
        let called_numbers = game.decode_numbers()?;

        Ok(VerifyClaimResponse {
            ticket,
            called_numbers,
            claim_type,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use sqlx::SqlitePool;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn test_services() -> (ClaimService, TicketService, GameService) {
        let pool: SqlitePool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        sqlx::migrate!("./migrations").run(&pool).await.unwrap();

        let tickets = TicketService::new(pool.clone());
        let games = GameService::new(pool);
        (
            ClaimService::new(tickets.clone(), games.clone()),
            tickets,
            games,
        )
    }

    #[tokio::test]
    async fn test_unknown_ticket_fails() {
        let (claims, _, games) = test_services().await;
        games.start().await.unwrap();

        let err = claims.lookup("T99", ClaimType::Line).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_lookup_without_active_game_fails() {
        let (claims, tickets, _) = test_services().await;
        tickets.register("/uploads/t1.jpg").await.unwrap();

        let err = claims.lookup("T1", ClaimType::Early5).await.unwrap_err();
        assert!(matches!(err, AppError::NoActiveGame));
    }

    #[tokio::test]
    async fn test_lookup_returns_raw_data_unevaluated() {
        let (claims, tickets, games) = test_services().await;
        tickets.register("/uploads/t1.jpg").await.unwrap();
        games.start().await.unwrap();
        for _ in 0..5 {
            games.call_number().await.unwrap();
        }

        let result = claims.lookup("T1", ClaimType::FullHouse).await.unwrap();
        assert_eq!(result.ticket.ticket_id, "T1");
        assert_eq!(result.called_numbers.len(), 5);
        assert_eq!(result.claim_type, ClaimType::FullHouse);
    }
}
