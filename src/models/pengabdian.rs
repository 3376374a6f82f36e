use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Pengabdian {
    pub id: i32,
    pub id_profil: Option<i32>,
    pub judul: String,
    pub lokasi: String,
    pub tahun: i32,
    pub deskripsi: Option<String>,
    // URL foto kegiatan dari admin, bukan file upload.
    pub foto_kegiatan: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreatePengabdianRequest {
    pub id_profil: Option<i32>,
    pub judul: Option<String>,
    pub lokasi: Option<String>,
    pub tahun: Option<i32>,
    pub deskripsi: Option<String>,
    pub foto_kegiatan: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PatchPengabdianRequest {
    pub id: Option<i32>,
    pub id_profil: Option<i32>,
    pub judul: Option<String>,
    pub lokasi: Option<String>,
    pub tahun: Option<i32>,
    pub deskripsi: Option<String>,
    pub foto_kegiatan: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PengabdianListQuery {
    #[serde(default, deserialize_with = "crate::models::angka_opsional")]
    pub tahun: Option<i32>,
    pub lokasi: Option<String>,
    pub search: Option<String>,
}
