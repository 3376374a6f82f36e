use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;
use serde_json::{json, Value};

pub mod auth;
pub mod buku;
pub mod dosen;
pub mod hak_cipta;
pub mod home_content;
pub mod pengabdian;
pub mod pengalaman;
pub mod penelitian;
pub mod profile_edit;
pub mod publikasi;
pub mod stats;

// Endpoint mutasi menerima id lewat query string (?id=...).
#[derive(Debug, Deserialize)]
pub struct IdQuery {
    pub id: Option<i32>,
}

pub type ErrorResponse = (StatusCode, Json<Value>);

pub(crate) fn bad_request(pesan: impl Into<String>) -> ErrorResponse {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "error": pesan.into() })),
    )
}

pub(crate) fn not_found(pesan: &str) -> ErrorResponse {
    (StatusCode::NOT_FOUND, Json(json!({ "error": pesan })))
}

// Semua kegagalan tak terduga dipetakan ke 500 dengan pesan mentah
// di bawah key `detail`.
pub(crate) fn db_error(pesan: &str, err: sqlx::Error) -> ErrorResponse {
    log::error!("Database error: {:?}", err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": pesan, "detail": err.to_string() })),
    )
}

pub(crate) fn io_error(pesan: &str, err: std::io::Error) -> ErrorResponse {
    log::error!("Filesystem error: {:?}", err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": pesan, "detail": err.to_string() })),
    )
}

pub(crate) fn multipart_error(err: MultipartError) -> ErrorResponse {
    log::error!("Multipart error: {:?}", err);
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "error": "Gagal membaca form data", "detail": err.to_string() })),
    )
}

pub(crate) fn base_url() -> String {
    std::env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}
