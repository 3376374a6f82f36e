use serde::{Deserialize, Deserializer};

pub mod buku;
pub mod dosen;
pub mod hak_cipta;
pub mod home_content;
pub mod pengabdian;
pub mod pengalaman;
pub mod penelitian;
pub mod publikasi;
pub mod user;

// Query string mengirim angka sebagai teks. String kosong atau tidak
// numerik diperlakukan seperti parameter tidak dikirim, bukan 400.
pub(crate) fn angka_opsional<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.as_deref().map(str::trim).and_then(|v| v.parse().ok()))
}
