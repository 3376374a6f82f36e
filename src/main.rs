use biodosen_be::{app, database, upload};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Direktori upload harus ada sebelum request pertama.
    if let Err(e) = upload::ensure_upload_dirs() {
        log::error!("Gagal menyiapkan direktori upload: {:?}", e);
        std::process::exit(1);
    }

    let pool = match database::create_database_connection().await {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Gagal inisialisasi pool database: {:?}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = database::run_migrations(&pool).await {
        log::error!("Gagal menjalankan migrasi: {:?}", e);
        std::process::exit(1);
    }

    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string());
    log::info!("Server berjalan di http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Gagal binding listener");

    axum::serve(listener, app(pool))
        .await
        .expect("Gagal menjalankan server");
}
