use actix_web::{HttpResponse, ResponseError, Result, web};
use serde_json::json;

use crate::models::*;
use crate::services::GameService;

#[utoipa::path(
    get,
    path = "/game",
    tag = "game",
    responses(
        (status = 200, description = "获取当前游戏成功", body = GameResponse)
    )
)]
/// 获取当前游戏（最新一局）。空库时会创建一局未激活的游戏返回。
pub async fn get_game(service: web::Data<GameService>) -> Result<HttpResponse> {
    match service.get_or_create_current().await {
        Ok(game) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": game }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/game/start",
    tag = "game",
    responses(
        (status = 200, description = "开始新游戏成功", body = GameResponse)
    )
)]
/// 开始新游戏。如已有进行中的游戏则先将其结束（历史保留）。
pub async fn start_game(service: web::Data<GameService>) -> Result<HttpResponse> {
    match service.start().await {
        Ok(game) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": game }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/game/restart",
    tag = "game",
    responses(
        (status = 200, description = "重新开始成功", body = GameResponse)
    )
)]
/// 重新开始游戏，行为与 start 完全一致；前端在调用前弹出二次确认。
pub async fn restart_game(service: web::Data<GameService>) -> Result<HttpResponse> {
    match service.restart().await {
        Ok(game) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": game }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/game/call-number",
    tag = "game",
    responses(
        (status = 200, description = "叫号成功", body = CallNumberResponse),
        (status = 409, description = "无进行中的游戏，或号码已全部叫完")
    )
)]
/// 随机叫出一个尚未叫过的号码并返回完整叫号列表
pub async fn call_number(service: web::Data<GameService>) -> Result<HttpResponse> {
    match service.call_number().await {
        Ok(result) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": result }))),
        Err(e) => Ok(e.error_response()),
    }
}

/// 路由配置
pub fn game_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/game", web::get().to(get_game))
        .route("/game/start", web::post().to(start_game))
        .route("/game/restart", web::post().to(restart_game))
        .route("/game/call-number", web::post().to(call_number));
}
