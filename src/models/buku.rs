use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Buku {
    pub id: i32,
    pub judul: String,
    pub penerbit: Option<String>,
    pub tahun: i32,
    pub isbn: Option<String>,
    pub deskripsi: Option<String>,
    pub cover: Option<String>,
    pub link: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
pub struct BukuListQuery {
    pub search: Option<String>,
    #[serde(default, deserialize_with = "crate::models::angka_opsional")]
    pub tahun: Option<i32>,
}

impl Buku {
    // DB hanya menyimpan nama file; URL dirangkai saat dibaca.
    // Tidak ada pengecekan bahwa file masih ada di disk.
    pub fn with_urls(&self, base_url: &str) -> Value {
        let cover_url = self
            .cover
            .as_ref()
            .map(|c| format!("/uploads/buku/covers/{}", c));
        let file_url = self
            .link
            .as_ref()
            .map(|f| format!("/uploads/buku/files/{}", f));

        json!({
            "id": self.id,
            "judul": self.judul,
            "penerbit": self.penerbit,
            "tahun": self.tahun,
            "isbn": self.isbn,
            "deskripsi": self.deskripsi,
            "cover": self.cover,
            "link": self.link,
            "created_at": self.created_at,
            "cover_url": cover_url,
            "file_url": file_url,
            "cover_full_url": cover_url.as_ref().map(|u| format!("{}{}", base_url, u)),
            "file_full_url": file_url.as_ref().map(|u| format!("{}{}", base_url, u)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contoh() -> Buku {
        Buku {
            id: 1,
            judul: "Pemrograman Web".to_string(),
            penerbit: Some("Penerbit A".to_string()),
            tahun: 2023,
            isbn: Some("978-1234".to_string()),
            deskripsi: None,
            cover: Some("cover_1700000000123.png".to_string()),
            link: Some("file_1700000000123.pdf".to_string()),
            created_at: None,
        }
    }

    #[test]
    fn with_urls_builds_relative_and_full_urls() {
        let value = contoh().with_urls("http://localhost:3000");
        assert_eq!(
            value["cover_url"],
            json!("/uploads/buku/covers/cover_1700000000123.png")
        );
        assert_eq!(
            value["file_url"],
            json!("/uploads/buku/files/file_1700000000123.pdf")
        );
        assert_eq!(
            value["cover_full_url"],
            json!("http://localhost:3000/uploads/buku/covers/cover_1700000000123.png")
        );
    }

    #[test]
    fn query_tahun_kosong_dianggap_tanpa_filter() {
        let q: BukuListQuery = serde_urlencoded::from_str("tahun=&search=web").unwrap();
        assert_eq!(q.tahun, None);
        assert_eq!(q.search.as_deref(), Some("web"));
    }

    #[test]
    fn query_tahun_terisi_diparse() {
        let q: BukuListQuery = serde_urlencoded::from_str("tahun=2023").unwrap();
        assert_eq!(q.tahun, Some(2023));
    }

    #[test]
    fn query_tahun_bukan_angka_diabaikan() {
        let q: BukuListQuery = serde_urlencoded::from_str("tahun=abc").unwrap();
        assert_eq!(q.tahun, None);
    }

    #[test]
    fn with_urls_keeps_nulls_when_files_missing() {
        let mut buku = contoh();
        buku.cover = None;
        buku.link = None;
        let value = buku.with_urls("http://localhost:3000");
        assert_eq!(value["cover_url"], Value::Null);
        assert_eq!(value["file_full_url"], Value::Null);
    }
}
