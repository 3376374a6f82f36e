use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Publikasi {
    pub id: i32,
    pub judul: String,
    pub tahun: i32,
    pub jenis: Option<String>,
    pub link: Option<String>,
    pub deskripsi: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreatePublikasiRequest {
    pub judul: Option<String>,
    pub tahun: Option<i32>,
    pub jenis: Option<String>,
    pub link: Option<String>,
    pub deskripsi: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PublikasiListQuery {
    pub jenis: Option<String>,
}
