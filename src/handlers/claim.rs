use actix_web::{HttpResponse, ResponseError, Result, web};
use serde_json::json;

use crate::models::*;
use crate::services::ClaimService;

#[utoipa::path(
    post,
    path = "/verify-claim",
    tag = "claim",
    request_body = VerifyClaimRequest,
    responses(
        (status = 200, description = "报奖数据查询成功", body = VerifyClaimResponse),
        (status = 404, description = "票号不存在"),
        (status = 409, description = "无进行中的游戏")
    )
)]
/// 查询报奖所需原始数据：票据图片 + 已叫号码 + 报奖类型。
/// 不做任何中奖判定，由主持人对照票面人工核对。
pub async fn verify_claim(
    service: web::Data<ClaimService>,
    body: web::Json<VerifyClaimRequest>,
) -> Result<HttpResponse> {
    let request = body.into_inner();
    match service
        .lookup(request.ticket_id.trim(), request.claim_type)
        .await
    {
        Ok(result) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": result }))),
        Err(e) => Ok(e.error_response()),
    }
}

/// 路由配置
pub fn claim_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/verify-claim", web::post().to(verify_claim));
}
