use axum::{extract::State, response::Json};
use serde_json::{json, Value};

use crate::database::Database;
use crate::models::dosen::{ProfilDosen, SaveProfilRequest};
use crate::routes::{db_error, ErrorResponse};

// GET /api/profile-edit (baris pertama atau null)
pub async fn get_profil(State(db): State<Database>) -> Result<Json<Value>, ErrorResponse> {
    let row: Option<ProfilDosen> = sqlx::query_as("SELECT * FROM profil_dosen LIMIT 1")
        .fetch_optional(&db)
        .await
        .map_err(|err| db_error("Gagal mengambil data profil", err))?;

    Ok(Json(json!({ "success": true, "data": row })))
}

// PUT /api/profile-edit — upsert baris singleton.
// Cek-lalu-tulis tanpa transaksi; race antar edit admin diterima apa adanya.
pub async fn save_profil(
    State(db): State<Database>,
    Json(payload): Json<SaveProfilRequest>,
) -> Result<Json<Value>, ErrorResponse> {
    let existing: Option<(i32,)> = sqlx::query_as("SELECT id_profil FROM profil_dosen LIMIT 1")
        .fetch_optional(&db)
        .await
        .map_err(|err| db_error("Gagal menyimpan profil", err))?;

    match existing {
        Some((id_profil,)) => {
            sqlx::query(
                "UPDATE profil_dosen SET
                   nama = $1, nidn = $2, jabatan = $3, fakultas = $4, prodi = $5,
                   email = $6, telepon = $7, alamat = $8, pendidikan_terakhir = $9,
                   universitas = $10, tahun_lulus = $11, deskripsi = $12,
                   updated_at = NOW()
                 WHERE id_profil = $13",
            )
            .bind(payload.nama.as_deref().unwrap_or_default())
            .bind(&payload.nidn)
            .bind(&payload.jabatan)
            .bind(&payload.fakultas)
            .bind(&payload.prodi)
            .bind(payload.email.as_deref().unwrap_or_default())
            .bind(&payload.telepon)
            .bind(&payload.alamat)
            .bind(&payload.pendidikan_terakhir)
            .bind(&payload.universitas)
            .bind(payload.tahun_lulus)
            .bind(&payload.deskripsi)
            .bind(id_profil)
            .execute(&db)
            .await
            .map_err(|err| db_error("Gagal menyimpan profil", err))?;
        }
        None => {
            sqlx::query(
                "INSERT INTO profil_dosen
                   (nama, nidn, jabatan, fakultas, prodi, email, telepon, alamat,
                    pendidikan_terakhir, universitas, tahun_lulus, deskripsi)
                 VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)",
            )
            .bind(payload.nama.as_deref().unwrap_or_default())
            .bind(&payload.nidn)
            .bind(&payload.jabatan)
            .bind(&payload.fakultas)
            .bind(&payload.prodi)
            .bind(payload.email.as_deref().unwrap_or_default())
            .bind(&payload.telepon)
            .bind(&payload.alamat)
            .bind(&payload.pendidikan_terakhir)
            .bind(&payload.universitas)
            .bind(payload.tahun_lulus)
            .bind(&payload.deskripsi)
            .execute(&db)
            .await
            .map_err(|err| db_error("Gagal menyimpan profil", err))?;
        }
    }

    Ok(Json(json!({
        "success": true,
        "message": "Profil berhasil disimpan"
    })))
}
