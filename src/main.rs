use actix_web::{App, HttpServer, middleware::Logger, web};
use chrono::Local; // timestamp in log lines
use env_logger::{Env, Target};
use std::io::Write; // for env_logger custom formatter

use tambola_backend::{
    config::Config,
    database::{create_pool, run_migrations},
    handlers,
    middlewares::create_cors,
    services::{ClaimService, GameService, TicketService},
    storage::ImageStore,
    swagger::swagger_config,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let ts = Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z");
            let level = record.level().as_str().to_ascii_lowercase();
            let msg_json = serde_json::to_string(&format!("{}", record.args()))
                .unwrap_or_else(|_| "\"<invalid utf8>\"".to_string());
            writeln!(
                buf,
                "{{\"timestamp\":\"{}\",\"level\":\"{}\",\"message\":{},\"target\":\"{}\"}}",
                ts,
                level,
                msg_json,
                record.target(),
            )
        })
        .target(Target::Stdout)
        .init();

    // 加载配置
    let config = Config::from_toml().expect("Failed to load configuration file");

    // 创建数据库连接池
    let pool = create_pool(&config.database)
        .await
        .expect("Failed to create database connection pool");

    // 运行数据库迁移
    run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");

    // 确保上传目录存在（静态服务挂载前创建）
    std::fs::create_dir_all(&config.storage.upload_dir)
        .expect("Failed to create upload directory");

    // 创建服务
    let image_store = ImageStore::new(&config.storage);
    let ticket_service = TicketService::new(pool.clone());
    let game_service = GameService::new(pool.clone());
    let claim_service = ClaimService::new(ticket_service.clone(), game_service.clone());

    // 启动HTTP服务器
    log::info!(
        "Starting HTTP server at {}:{}",
        config.server.host,
        config.server.port
    );

    let storage_config = config.storage.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(create_cors())
            .app_data(web::Data::new(ticket_service.clone()))
            .app_data(web::Data::new(game_service.clone()))
            .app_data(web::Data::new(claim_service.clone()))
            .app_data(web::Data::new(image_store.clone()))
            .configure(swagger_config)
            .service(actix_files::Files::new(
                &storage_config.public_path,
                &storage_config.upload_dir,
            ))
            .service(
                web::scope("/api")
                    .configure(handlers::ticket_config)
                    .configure(handlers::game_config)
                    .configure(handlers::claim_config),
            )
    })
    .bind((config.server.host.as_str(), config.server.port))?
    .run()
    .await
}
