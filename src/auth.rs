use sha2::{Digest, Sha256};

// Skema hash sederhana (SHA-256 hex) mengikuti tabel user_login yang sudah ada.
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

pub fn compare_password(password: &str, hash: &str) -> bool {
    hash_password(password) == hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_password_is_sha256_hex() {
        // echo -n "rahasia" | sha256sum
        assert_eq!(
            hash_password("rahasia"),
            "541e984103d4099bb8383050c56d511e733d85e6ab889a1c363ced651762eee0"
        );
    }

    #[test]
    fn compare_password_round_trip() {
        let hash = hash_password("password123");
        assert!(compare_password("password123", &hash));
        assert!(!compare_password("password124", &hash));
    }
}
