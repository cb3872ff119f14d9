use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::TicketResponse;

/// 报奖类型 (Early 5 / Line / Full House)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ClaimType {
    Early5,
    Line,
    FullHouse,
}

/// 报奖查询请求
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VerifyClaimRequest {
    /// 票号 (如 T1)
    pub ticket_id: String,
    /// 报奖类型
    pub claim_type: ClaimType,
}

/// 报奖查询响应：仅返回人工核对所需的原始数据，不做任何判定
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VerifyClaimResponse {
    /// 票据信息（含图片路径）
    pub ticket: TicketResponse,
    /// 当前游戏已叫号码
    pub called_numbers: Vec<i64>,
    /// 请求的报奖类型（原样返回）
    pub claim_type: ClaimType,
}
