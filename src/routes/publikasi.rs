use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use serde_json::{json, Value};

use crate::database::Database;
use crate::models::publikasi::{CreatePublikasiRequest, Publikasi, PublikasiListQuery};
use crate::routes::{bad_request, db_error, not_found, ErrorResponse, IdQuery};

// GET /api/publikasi?jenis=
pub async fn get_publikasi(
    State(db): State<Database>,
    Query(params): Query<PublikasiListQuery>,
) -> Result<Json<Value>, ErrorResponse> {
    let rows: Vec<Publikasi> = match params.jenis.as_deref().filter(|j| !j.is_empty()) {
        Some(jenis) => {
            sqlx::query_as(
                "SELECT * FROM publikasi WHERE LOWER(jenis) = LOWER($1)
                 ORDER BY tahun DESC, judul ASC",
            )
            .bind(jenis)
            .fetch_all(&db)
            .await
        }
        None => {
            sqlx::query_as("SELECT * FROM publikasi ORDER BY tahun DESC, judul ASC")
                .fetch_all(&db)
                .await
        }
    }
    .map_err(|err| db_error("Gagal mengambil data publikasi", err))?;

    Ok(Json(json!({ "success": true, "data": rows })))
}

// POST /api/publikasi
pub async fn create_publikasi(
    State(db): State<Database>,
    Json(payload): Json<CreatePublikasiRequest>,
) -> Result<(StatusCode, Json<Value>), ErrorResponse> {
    let (judul, tahun, jenis) = match (payload.judul, payload.tahun, payload.jenis) {
        (Some(judul), Some(tahun), Some(jenis)) => (judul, tahun, jenis),
        _ => return Err(bad_request("Judul, tahun, dan jenis wajib diisi")),
    };

    let (id,): (i32,) = sqlx::query_as(
        "INSERT INTO publikasi (judul, tahun, jenis, link, deskripsi)
         VALUES ($1, $2, $3, $4, $5) RETURNING id",
    )
    .bind(&judul)
    .bind(tahun)
    .bind(&jenis)
    .bind(&payload.link)
    .bind(&payload.deskripsi)
    .fetch_one(&db)
    .await
    .map_err(|err| db_error("Gagal menambah publikasi", err))?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "Publikasi berhasil ditambahkan",
            "id": id
        })),
    ))
}

// PUT /api/publikasi?id=
pub async fn update_publikasi(
    State(db): State<Database>,
    Query(params): Query<IdQuery>,
    Json(payload): Json<CreatePublikasiRequest>,
) -> Result<Json<Value>, ErrorResponse> {
    let id = params
        .id
        .ok_or_else(|| bad_request("ID publikasi diperlukan"))?;

    let (judul, tahun, jenis) = match (payload.judul, payload.tahun, payload.jenis) {
        (Some(judul), Some(tahun), Some(jenis)) => (judul, tahun, jenis),
        _ => return Err(bad_request("Judul, tahun, dan jenis wajib diisi")),
    };

    let existing: Option<(i32,)> = sqlx::query_as("SELECT id FROM publikasi WHERE id = $1")
        .bind(id)
        .fetch_optional(&db)
        .await
        .map_err(|err| db_error("Gagal memperbarui publikasi", err))?;

    if existing.is_none() {
        return Err(not_found("Publikasi tidak ditemukan"));
    }

    sqlx::query(
        "UPDATE publikasi
         SET judul = $1, tahun = $2, jenis = $3, link = $4, deskripsi = $5
         WHERE id = $6",
    )
    .bind(&judul)
    .bind(tahun)
    .bind(&jenis)
    .bind(&payload.link)
    .bind(&payload.deskripsi)
    .bind(id)
    .execute(&db)
    .await
    .map_err(|err| db_error("Gagal memperbarui publikasi", err))?;

    Ok(Json(json!({
        "success": true,
        "message": "Publikasi berhasil diperbarui"
    })))
}

// DELETE /api/publikasi?id=
pub async fn delete_publikasi(
    State(db): State<Database>,
    Query(params): Query<IdQuery>,
) -> Result<Json<Value>, ErrorResponse> {
    let id = params
        .id
        .ok_or_else(|| bad_request("ID publikasi diperlukan"))?;

    let existing: Option<(i32,)> = sqlx::query_as("SELECT id FROM publikasi WHERE id = $1")
        .bind(id)
        .fetch_optional(&db)
        .await
        .map_err(|err| db_error("Gagal menghapus publikasi", err))?;

    if existing.is_none() {
        return Err(not_found("Publikasi tidak ditemukan"));
    }

    sqlx::query("DELETE FROM publikasi WHERE id = $1")
        .bind(id)
        .execute(&db)
        .await
        .map_err(|err| db_error("Gagal menghapus publikasi", err))?;

    Ok(Json(json!({
        "success": true,
        "message": "Publikasi berhasil dihapus"
    })))
}
