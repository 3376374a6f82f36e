use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProfilDosen {
    pub id_profil: i32,
    pub nama: String,
    pub nidn: Option<String>,
    pub jabatan: Option<String>,
    pub fakultas: Option<String>,
    pub prodi: Option<String>,
    pub email: String,
    pub telepon: Option<String>,
    pub alamat: Option<String>,
    pub pendidikan_terakhir: Option<String>,
    pub universitas: Option<String>,
    pub tahun_lulus: Option<i32>,
    pub deskripsi: Option<String>,
    pub foto: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
pub struct CreateProfilRequest {
    pub nama: Option<String>,
    pub nidn: Option<String>,
    pub jabatan: Option<String>,
    pub fakultas: Option<String>,
    pub prodi: Option<String>,
    pub email: Option<String>,
    pub telepon: Option<String>,
    pub alamat: Option<String>,
    pub pendidikan_terakhir: Option<String>,
    pub universitas: Option<String>,
    pub tahun_lulus: Option<i32>,
    pub deskripsi: Option<String>,
    pub foto: Option<String>,
}

// Update parsial: field yang tidak dikirim dipertahankan lewat COALESCE.
#[derive(Debug, Deserialize)]
pub struct UpdateProfilRequest {
    pub id: Option<i32>,
    pub nama: Option<String>,
    pub nidn: Option<String>,
    pub jabatan: Option<String>,
    pub fakultas: Option<String>,
    pub prodi: Option<String>,
    pub email: Option<String>,
    pub telepon: Option<String>,
    pub alamat: Option<String>,
    pub pendidikan_terakhir: Option<String>,
    pub universitas: Option<String>,
    pub tahun_lulus: Option<i32>,
    pub deskripsi: Option<String>,
    pub foto: Option<String>,
}

// Form edit profil menyimpan seluruh kolom sekaligus (upsert singleton).
#[derive(Debug, Deserialize)]
pub struct SaveProfilRequest {
    pub nama: Option<String>,
    pub nidn: Option<String>,
    pub jabatan: Option<String>,
    pub fakultas: Option<String>,
    pub prodi: Option<String>,
    pub email: Option<String>,
    pub telepon: Option<String>,
    pub alamat: Option<String>,
    pub pendidikan_terakhir: Option<String>,
    pub universitas: Option<String>,
    pub tahun_lulus: Option<i32>,
    pub deskripsi: Option<String>,
}
