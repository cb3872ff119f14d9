use actix_multipart::Multipart;
use actix_web::{HttpResponse, ResponseError, Result, web};
use futures_util::StreamExt;
use serde_json::json;

use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::services::TicketService;
use crate::storage::ImageStore;

#[utoipa::path(
    get,
    path = "/tickets",
    tag = "ticket",
    responses(
        (status = 200, description = "获取票据列表成功", body = [TicketResponse])
    )
)]
/// 全部已登记票据，按票号顺序返回
pub async fn list_tickets(service: web::Data<TicketService>) -> Result<HttpResponse> {
    match service.list().await {
        Ok(tickets) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": tickets }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/tickets/upload",
    tag = "ticket",
    responses(
        (status = 200, description = "票据上传成功", body = TicketResponse),
        (status = 400, description = "缺少图片或文件类型不是图片")
    )
)]
/// 上传票据照片（multipart 字段名 image），保存图片后分配下一个顺序票号
pub async fn upload_ticket(
    service: web::Data<TicketService>,
    store: web::Data<ImageStore>,
    payload: Multipart,
) -> Result<HttpResponse> {
    match save_upload(&service, &store, payload).await {
        Ok(ticket) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": ticket }))),
        Err(e) => Ok(e.error_response()),
    }
}

async fn save_upload(
    service: &TicketService,
    store: &ImageStore,
    mut payload: Multipart,
) -> AppResult<TicketResponse> {
    while let Some(item) = payload.next().await {
        let mut field = item
            .map_err(|e| AppError::ValidationError(format!("Invalid multipart payload: {e}")))?;

        if field.name() != "image" {
            continue;
        }

        // 与原 multer fileFilter 等价：只接受 image/* 类型
        let is_image = field
            .content_type()
            .map(|m| m.type_().as_str() == "image")
            .unwrap_or(false);
        if !is_image {
            return Err(AppError::ValidationError(
                "Only image files are allowed".to_string(),
            ));
        }

        let file_name = field
            .content_disposition()
            .get_filename()
            .unwrap_or("upload")
            .to_string();

        let mut bytes = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk
                .map_err(|e| AppError::ValidationError(format!("Failed to read upload: {e}")))?;
            bytes.extend_from_slice(&chunk);
        }
        if bytes.is_empty() {
            return Err(AppError::ValidationError(
                "Uploaded image is empty".to_string(),
            ));
        }

        // 先落盘再登记；登记失败时不会留下半条票据记录
        let image_url = store.save(&file_name, &bytes).await?;
        return service.register(&image_url).await;
    }

    Err(AppError::ValidationError(
        "No image file uploaded".to_string(),
    ))
}

/// 路由配置
pub fn ticket_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/tickets", web::get().to(list_tickets))
        .route("/tickets/upload", web::post().to(upload_ticket));
}
