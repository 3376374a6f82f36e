use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use serde_json::{json, Value};
use sqlx::{Postgres, QueryBuilder};

use crate::database::Database;
use crate::models::pengabdian::{
    CreatePengabdianRequest, PatchPengabdianRequest, Pengabdian, PengabdianListQuery,
};
use crate::routes::{bad_request, db_error, not_found, ErrorResponse, IdQuery};
use crate::validation::validasi_tahun;

fn pengabdian_list_query(params: &PengabdianListQuery) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new("SELECT * FROM pengabdian WHERE 1=1");

    if let Some(tahun) = params.tahun {
        builder.push(" AND tahun = ").push_bind(tahun);
    }
    if let Some(lokasi) = params.lokasi.as_deref().filter(|l| !l.is_empty()) {
        builder
            .push(" AND lokasi ILIKE ")
            .push_bind(format!("%{}%", lokasi));
    }
    if let Some(search) = params.search.as_deref().filter(|s| !s.is_empty()) {
        let pattern = format!("%{}%", search);
        builder
            .push(" AND (judul ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR deskripsi ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR lokasi ILIKE ")
            .push_bind(pattern)
            .push(")");
    }

    builder.push(" ORDER BY tahun DESC, id DESC");
    builder
}

// GET /api/pengabdian?tahun=&lokasi=&search=
pub async fn get_pengabdian(
    State(db): State<Database>,
    Query(params): Query<PengabdianListQuery>,
) -> Result<Json<Value>, ErrorResponse> {
    let mut builder = pengabdian_list_query(&params);

    let rows: Vec<Pengabdian> = builder
        .build_query_as()
        .fetch_all(&db)
        .await
        .map_err(|err| db_error("Terjadi kesalahan saat mengambil data pengabdian", err))?;

    Ok(Json(json!({ "success": true, "data": rows })))
}

// POST /api/pengabdian
pub async fn create_pengabdian(
    State(db): State<Database>,
    Json(payload): Json<CreatePengabdianRequest>,
) -> Result<(StatusCode, Json<Value>), ErrorResponse> {
    let (judul, lokasi, tahun) = match (payload.judul, payload.lokasi, payload.tahun) {
        (Some(judul), Some(lokasi), Some(tahun)) => (judul, lokasi, tahun),
        _ => return Err(bad_request("Judul, lokasi, dan tahun harus diisi")),
    };

    let tahun = validasi_tahun(tahun).map_err(bad_request)?;

    let (id,): (i32,) = sqlx::query_as(
        "INSERT INTO pengabdian (id_profil, judul, lokasi, tahun, deskripsi, foto_kegiatan)
         VALUES ($1, $2, $3, $4, $5, $6) RETURNING id",
    )
    .bind(payload.id_profil)
    .bind(&judul)
    .bind(&lokasi)
    .bind(tahun)
    .bind(&payload.deskripsi)
    .bind(&payload.foto_kegiatan)
    .fetch_one(&db)
    .await
    .map_err(|err| db_error("Terjadi kesalahan saat menambah pengabdian", err))?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "Pengabdian berhasil ditambahkan",
            "id": id
        })),
    ))
}

// PATCH /api/pengabdian (id di body)
pub async fn update_pengabdian(
    State(db): State<Database>,
    Json(payload): Json<PatchPengabdianRequest>,
) -> Result<Json<Value>, ErrorResponse> {
    let id = payload
        .id
        .ok_or_else(|| bad_request("ID pengabdian diperlukan"))?;

    let (judul, lokasi, tahun) = match (payload.judul, payload.lokasi, payload.tahun) {
        (Some(judul), Some(lokasi), Some(tahun)) => (judul, lokasi, tahun),
        _ => return Err(bad_request("Judul, lokasi, dan tahun harus diisi")),
    };

    let tahun = validasi_tahun(tahun).map_err(bad_request)?;

    let existing: Option<(i32,)> = sqlx::query_as("SELECT id FROM pengabdian WHERE id = $1")
        .bind(id)
        .fetch_optional(&db)
        .await
        .map_err(|err| db_error("Terjadi kesalahan saat memperbarui pengabdian", err))?;

    if existing.is_none() {
        return Err(not_found("Pengabdian tidak ditemukan"));
    }

    sqlx::query(
        "UPDATE pengabdian
         SET id_profil = $1, judul = $2, lokasi = $3, tahun = $4, deskripsi = $5, foto_kegiatan = $6
         WHERE id = $7",
    )
    .bind(payload.id_profil)
    .bind(&judul)
    .bind(&lokasi)
    .bind(tahun)
    .bind(&payload.deskripsi)
    .bind(&payload.foto_kegiatan)
    .bind(id)
    .execute(&db)
    .await
    .map_err(|err| db_error("Terjadi kesalahan saat memperbarui pengabdian", err))?;

    Ok(Json(json!({
        "success": true,
        "message": "Pengabdian berhasil diperbarui"
    })))
}

// DELETE /api/pengabdian?id=
pub async fn delete_pengabdian(
    State(db): State<Database>,
    Query(params): Query<IdQuery>,
) -> Result<Json<Value>, ErrorResponse> {
    let id = params
        .id
        .ok_or_else(|| bad_request("ID pengabdian diperlukan"))?;

    let existing: Option<(i32,)> = sqlx::query_as("SELECT id FROM pengabdian WHERE id = $1")
        .bind(id)
        .fetch_optional(&db)
        .await
        .map_err(|err| db_error("Terjadi kesalahan saat menghapus pengabdian", err))?;

    if existing.is_none() {
        return Err(not_found("Pengabdian tidak ditemukan"));
    }

    sqlx::query("DELETE FROM pengabdian WHERE id = $1")
        .bind(id)
        .execute(&db)
        .await
        .map_err(|err| db_error("Terjadi kesalahan saat menghapus pengabdian", err))?;

    Ok(Json(json!({
        "success": true,
        "message": "Pengabdian berhasil dihapus"
    })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn daftar_pengabdian_terurut_tahun_terbaru() {
        let params = PengabdianListQuery {
            tahun: Some(2021),
            lokasi: Some("Bandung".to_string()),
            search: None,
        };
        let sql = pengabdian_list_query(&params).into_sql();
        assert!(sql.contains("tahun = "));
        assert!(sql.contains("lokasi ILIKE"));
        assert!(sql.ends_with("ORDER BY tahun DESC, id DESC"));
    }
}
