use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

pub mod auth;
pub mod database;
pub mod models;
pub mod routes;
pub mod upload;
pub mod validation;

use database::Database;

// Batas body 50MB untuk upload cover/file buku dan dokumen hak cipta.
const MAX_BODY_SIZE: usize = 50 * 1024 * 1024;

pub fn app(pool: Database) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Auth admin
        .route("/api/auth/signup", post(routes::auth::signup))
        .route("/api/auth/login", post(routes::auth::login))
        // Entitas konten
        .route(
            "/api/buku",
            get(routes::buku::get_buku)
                .post(routes::buku::create_buku)
                .patch(routes::buku::update_buku)
                .delete(routes::buku::delete_buku),
        )
        .route(
            "/api/pengalaman",
            get(routes::pengalaman::get_pengalaman)
                .post(routes::pengalaman::create_pengalaman)
                .put(routes::pengalaman::replace_pengalaman)
                .patch(routes::pengalaman::patch_pengalaman)
                .delete(routes::pengalaman::delete_pengalaman),
        )
        .route(
            "/api/publikasi",
            get(routes::publikasi::get_publikasi)
                .post(routes::publikasi::create_publikasi)
                .put(routes::publikasi::update_publikasi)
                .delete(routes::publikasi::delete_publikasi),
        )
        .route(
            "/api/penelitian",
            get(routes::penelitian::get_penelitian)
                .post(routes::penelitian::create_penelitian)
                .patch(routes::penelitian::update_penelitian)
                .delete(routes::penelitian::delete_penelitian),
        )
        .route(
            "/api/pengabdian",
            get(routes::pengabdian::get_pengabdian)
                .post(routes::pengabdian::create_pengabdian)
                .patch(routes::pengabdian::update_pengabdian)
                .delete(routes::pengabdian::delete_pengabdian),
        )
        .route(
            "/api/hak-cipta",
            get(routes::hak_cipta::get_hak_cipta)
                .post(routes::hak_cipta::create_hak_cipta)
                .patch(routes::hak_cipta::update_hak_cipta)
                .delete(routes::hak_cipta::delete_hak_cipta),
        )
        // Profil dosen
        .route(
            "/api/dosen",
            get(routes::dosen::get_dosen)
                .post(routes::dosen::create_dosen)
                .put(routes::dosen::update_dosen),
        )
        .route(
            "/api/profile-edit",
            get(routes::profile_edit::get_profil).put(routes::profile_edit::save_profil),
        )
        // Konten halaman depan & dashboard admin
        .route(
            "/api/home-content",
            get(routes::home_content::get_home_content)
                .post(routes::home_content::create_home_content),
        )
        .route("/api/admin/stats", get(routes::stats::get_stats))
        // File upload dilayani sebagai aset statis
        .nest_service("/uploads", ServeDir::new(upload::UPLOAD_ROOT))
        .layer(DefaultBodyLimit::max(MAX_BODY_SIZE))
        .with_state(pool)
        .layer(cors)
}
