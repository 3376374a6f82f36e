use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct HakCipta {
    pub id: i32,
    pub judul: String,
    pub nomor_pendaftaran: String,
    pub tahun: i32,
    // URL publik dokumen yang diupload, mis. /uploads/copyrights/<nama>.
    pub link: Option<String>,
    pub deskripsi: Option<String>,
    pub id_profil: Option<i32>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

pub const MAX_FILE_SIZE: usize = 10 * 1024 * 1024;

pub const ALLOWED_MIME_TYPES: [&str; 5] = [
    "application/pdf",
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/webp",
];
