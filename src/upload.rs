use std::io;
use std::path::{Path, PathBuf};

use chrono::Utc;
use uuid::Uuid;

// Struktur direktori upload tetap; DB hanya menyimpan nama file.
pub const UPLOAD_ROOT: &str = "public/uploads";
pub const BUKU_COVER_DIR: &str = "public/uploads/buku/covers";
pub const BUKU_FILE_DIR: &str = "public/uploads/buku/files";
pub const COPYRIGHT_DIR: &str = "public/uploads/copyrights";

pub fn ensure_upload_dirs() -> io::Result<()> {
    for dir in [BUKU_COVER_DIR, BUKU_FILE_DIR, COPYRIGHT_DIR] {
        std::fs::create_dir_all(dir)?;
    }
    Ok(())
}

pub fn timestamp_millis() -> i64 {
    Utc::now().timestamp_millis()
}

// Ekstensi diambil dari nama file asli kiriman client; fallback "bin".
pub fn file_extension(original_name: &str) -> String {
    Path::new(original_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
        .unwrap_or_else(|| "bin".to_string())
}

pub fn cover_filename(timestamp: i64, original_name: &str) -> String {
    sanitize_filename::sanitize(format!(
        "cover_{}.{}",
        timestamp,
        file_extension(original_name)
    ))
}

pub fn buku_filename(timestamp: i64, original_name: &str) -> String {
    sanitize_filename::sanitize(format!(
        "file_{}.{}",
        timestamp,
        file_extension(original_name)
    ))
}

pub fn copyright_filename(original_name: &str) -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    sanitize_filename::sanitize(format!(
        "copyright_{}_{}.{}",
        timestamp_millis(),
        &suffix[..7],
        file_extension(original_name)
    ))
}

pub async fn save_upload(dir: &str, filename: &str, data: &[u8]) -> io::Result<PathBuf> {
    tokio::fs::create_dir_all(dir).await?;
    let path = Path::new(dir).join(filename);
    tokio::fs::write(&path, data).await?;
    Ok(path)
}

// Hapus file fisik; error diabaikan oleh pemanggil kalau file sudah tidak ada.
pub async fn delete_upload(dir: &str, filename: &str) -> io::Result<()> {
    tokio::fs::remove_file(Path::new(dir).join(filename)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cover_filename_follows_pattern() {
        assert_eq!(cover_filename(1700000000123, "sampul.PNG"), "cover_1700000000123.png");
    }

    #[test]
    fn buku_filename_follows_pattern() {
        assert_eq!(buku_filename(1700000000123, "naskah.pdf"), "file_1700000000123.pdf");
    }

    #[test]
    fn extension_falls_back_when_missing() {
        assert_eq!(file_extension("tanpa-ekstensi"), "bin");
    }

    #[test]
    fn copyright_filename_has_timestamp_and_suffix() {
        let name = copyright_filename("sertifikat.pdf");
        assert!(name.starts_with("copyright_"));
        assert!(name.ends_with(".pdf"));
        // copyright_<ts>_<rand>.<ext>
        assert_eq!(name.matches('_').count(), 2);
    }

    #[test]
    fn generated_names_are_sanitized() {
        let name = cover_filename(1, "../../etc/passwd");
        assert!(!name.contains(".."));
        assert!(!name.contains('/'));
    }
}
