use chrono::{Datelike, Utc};

pub const KATEGORI_PENGALAMAN: [&str; 3] = ["Speaker", "Reviewer", "Professional"];

pub const TAHUN_MIN: i32 = 1900;

pub fn tahun_max() -> i32 {
    Utc::now().year() + 5
}

// Kolom tahun aslinya YEAR(4); batas atas longgar untuk entri yang akan datang.
pub fn validasi_tahun(tahun: i32) -> Result<i32, String> {
    let max = tahun_max();
    if tahun < TAHUN_MIN || tahun > max {
        return Err(format!("Tahun harus valid ({} - {})", TAHUN_MIN, max));
    }
    Ok(tahun)
}

pub fn validasi_kategori(kategori: &str) -> Result<(), String> {
    if !KATEGORI_PENGALAMAN.contains(&kategori) {
        return Err(format!(
            "Kategori harus salah satu dari: {}",
            KATEGORI_PENGALAMAN.join(", ")
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tahun_dalam_rentang_diterima() {
        assert_eq!(validasi_tahun(2020), Ok(2020));
        assert_eq!(validasi_tahun(1900), Ok(1900));
        assert_eq!(validasi_tahun(tahun_max()), Ok(tahun_max()));
    }

    #[test]
    fn tahun_di_luar_rentang_ditolak() {
        let err = validasi_tahun(1899).unwrap_err();
        assert!(err.contains("Tahun harus valid"));
        assert!(validasi_tahun(tahun_max() + 1).is_err());
    }

    #[test]
    fn kategori_valid_diterima() {
        for kategori in KATEGORI_PENGALAMAN {
            assert!(validasi_kategori(kategori).is_ok());
        }
    }

    #[test]
    fn kategori_tidak_dikenal_ditolak() {
        let err = validasi_kategori("InvalidValue").unwrap_err();
        assert!(err.contains("Speaker"));
        assert!(err.contains("Reviewer"));
        assert!(err.contains("Professional"));
    }
}
