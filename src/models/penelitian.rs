use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Penelitian {
    pub id: i32,
    pub id_profil: Option<i32>,
    pub judul: String,
    pub tahun: i32,
    pub bidang: Option<String>,
    pub deskripsi: Option<String>,
    pub file_laporan: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreatePenelitianRequest {
    pub id_profil: Option<i32>,
    pub judul: Option<String>,
    pub tahun: Option<i32>,
    pub bidang: Option<String>,
    pub deskripsi: Option<String>,
    pub file_laporan: Option<String>,
}

// PATCH membawa id di body, mengikuti bentuk request lama.
#[derive(Debug, Deserialize)]
pub struct PatchPenelitianRequest {
    pub id: Option<i32>,
    pub id_profil: Option<i32>,
    pub judul: Option<String>,
    pub tahun: Option<i32>,
    pub bidang: Option<String>,
    pub deskripsi: Option<String>,
    pub file_laporan: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PenelitianListQuery {
    #[serde(default, deserialize_with = "crate::models::angka_opsional")]
    pub tahun: Option<i32>,
    pub search: Option<String>,
}
