use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Pengalaman {
    pub id: i32,
    pub id_profil: Option<i32>,
    pub kategori: String,
    pub judul: String,
    pub instansi: String,
    pub tahun: i32,
    pub deskripsi: Option<String>,
}

// Field wajib dibiarkan Option supaya validasi menghasilkan pesan 400,
// bukan penolakan deserialisasi.
#[derive(Debug, Deserialize)]
pub struct CreatePengalamanRequest {
    pub id_profil: Option<i32>,
    pub kategori: Option<String>,
    pub judul: Option<String>,
    pub instansi: Option<String>,
    pub tahun: Option<i32>,
    pub deskripsi: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PatchPengalamanRequest {
    pub id_profil: Option<i32>,
    pub kategori: Option<String>,
    pub judul: Option<String>,
    pub instansi: Option<String>,
    pub tahun: Option<i32>,
    pub deskripsi: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PengalamanListQuery {
    pub kategori: Option<String>,
    #[serde(default, deserialize_with = "crate::models::angka_opsional")]
    pub tahun: Option<i32>,
    pub search: Option<String>,
    #[serde(default, deserialize_with = "crate::models::angka_opsional")]
    pub id_profil: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_id_profil_kosong_dianggap_tanpa_filter() {
        let q: PengalamanListQuery =
            serde_urlencoded::from_str("kategori=Speaker&id_profil=&tahun=").unwrap();
        assert_eq!(q.kategori.as_deref(), Some("Speaker"));
        assert_eq!(q.id_profil, None);
        assert_eq!(q.tahun, None);
    }
}
