use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use serde_json::{json, Value};

use crate::database::Database;
use crate::models::dosen::{CreateProfilRequest, ProfilDosen, UpdateProfilRequest};
use crate::routes::{bad_request, db_error, ErrorResponse};

// GET /api/dosen (array kosong jika belum ada profil)
pub async fn get_dosen(State(db): State<Database>) -> Result<Json<Value>, ErrorResponse> {
    let rows: Vec<ProfilDosen> = sqlx::query_as("SELECT * FROM profil_dosen")
        .fetch_all(&db)
        .await
        .map_err(|err| db_error("Terjadi kesalahan saat mengambil data profil", err))?;

    Ok(Json(json!(rows)))
}

// POST /api/dosen
pub async fn create_dosen(
    State(db): State<Database>,
    Json(payload): Json<CreateProfilRequest>,
) -> Result<(StatusCode, Json<Value>), ErrorResponse> {
    let (nama, email) = match (payload.nama, payload.email) {
        (Some(nama), Some(email)) => (nama, email),
        _ => return Err(bad_request("Nama dan Email harus diisi")),
    };

    let (id,): (i32,) = sqlx::query_as(
        "INSERT INTO profil_dosen
           (nama, nidn, jabatan, fakultas, prodi, email, telepon, alamat,
            pendidikan_terakhir, universitas, tahun_lulus, deskripsi, foto)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
         RETURNING id_profil",
    )
    .bind(&nama)
    .bind(&payload.nidn)
    .bind(&payload.jabatan)
    .bind(&payload.fakultas)
    .bind(&payload.prodi)
    .bind(&email)
    .bind(&payload.telepon)
    .bind(&payload.alamat)
    .bind(&payload.pendidikan_terakhir)
    .bind(&payload.universitas)
    .bind(payload.tahun_lulus)
    .bind(&payload.deskripsi)
    .bind(&payload.foto)
    .fetch_one(&db)
    .await
    .map_err(|err| db_error("Terjadi kesalahan saat menambah data profil", err))?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "Data profil berhasil ditambahkan",
            "id": id
        })),
    ))
}

// PUT /api/dosen (id di body; field yang tidak dikirim dipertahankan)
pub async fn update_dosen(
    State(db): State<Database>,
    Json(payload): Json<UpdateProfilRequest>,
) -> Result<Json<Value>, ErrorResponse> {
    let id = payload
        .id
        .ok_or_else(|| bad_request("ID profil harus disediakan"))?;

    sqlx::query(
        "UPDATE profil_dosen SET
           nama = COALESCE($1, nama),
           nidn = COALESCE($2, nidn),
           jabatan = COALESCE($3, jabatan),
           fakultas = COALESCE($4, fakultas),
           prodi = COALESCE($5, prodi),
           email = COALESCE($6, email),
           telepon = COALESCE($7, telepon),
           alamat = COALESCE($8, alamat),
           pendidikan_terakhir = COALESCE($9, pendidikan_terakhir),
           universitas = COALESCE($10, universitas),
           tahun_lulus = COALESCE($11, tahun_lulus),
           deskripsi = COALESCE($12, deskripsi),
           foto = COALESCE($13, foto),
           updated_at = NOW()
         WHERE id_profil = $14",
    )
    .bind(&payload.nama)
    .bind(&payload.nidn)
    .bind(&payload.jabatan)
    .bind(&payload.fakultas)
    .bind(&payload.prodi)
    .bind(&payload.email)
    .bind(&payload.telepon)
    .bind(&payload.alamat)
    .bind(&payload.pendidikan_terakhir)
    .bind(&payload.universitas)
    .bind(payload.tahun_lulus)
    .bind(&payload.deskripsi)
    .bind(&payload.foto)
    .bind(id)
    .execute(&db)
    .await
    .map_err(|err| db_error("Terjadi kesalahan saat mengupdate data profil", err))?;

    Ok(Json(json!({
        "success": true,
        "message": "Data profil berhasil diperbarui"
    })))
}
