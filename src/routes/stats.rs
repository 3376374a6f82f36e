use axum::{extract::State, response::Json};
use serde_json::{json, Value};

use crate::database::Database;
use crate::routes::{db_error, ErrorResponse};

async fn count(db: &Database, table: &str) -> Result<i64, sqlx::Error> {
    // Nama tabel berasal dari daftar tetap di bawah, bukan input user.
    let (total,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {}", table))
        .fetch_one(db)
        .await?;
    Ok(total)
}

// GET /api/admin/stats — angka ringkasan untuk dashboard admin.
pub async fn get_stats(State(db): State<Database>) -> Result<Json<Value>, ErrorResponse> {
    let gagal = |err| db_error("Gagal mengambil data", err);

    let profil = count(&db, "profil_dosen").await.map_err(gagal)?;
    let publikasi = count(&db, "publikasi").await.map_err(gagal)?;
    let buku = count(&db, "buku").await.map_err(gagal)?;
    let pengalaman = count(&db, "pengalaman").await.map_err(gagal)?;
    let penelitian = count(&db, "penelitian").await.map_err(gagal)?;
    let pengabdian = count(&db, "pengabdian").await.map_err(gagal)?;
    let hak_cipta = count(&db, "hak_cipta").await.map_err(gagal)?;

    Ok(Json(json!({
        "profil": profil,
        "publikasi": publikasi,
        "buku": buku,
        "pengalaman": pengalaman,
        "penelitian": penelitian,
        "pengabdian": pengabdian,
        "copyright": hak_cipta,
    })))
}
