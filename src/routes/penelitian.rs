use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use serde_json::{json, Value};
use sqlx::{Postgres, QueryBuilder};

use crate::database::Database;
use crate::models::penelitian::{
    CreatePenelitianRequest, PatchPenelitianRequest, Penelitian, PenelitianListQuery,
};
use crate::routes::{bad_request, db_error, not_found, ErrorResponse, IdQuery};
use crate::validation::validasi_tahun;

fn penelitian_list_query(params: &PenelitianListQuery) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new("SELECT * FROM penelitian WHERE 1=1");

    if let Some(tahun) = params.tahun {
        builder.push(" AND tahun = ").push_bind(tahun);
    }
    if let Some(search) = params.search.as_deref().filter(|s| !s.is_empty()) {
        let pattern = format!("%{}%", search);
        builder
            .push(" AND (judul ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR bidang ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR deskripsi ILIKE ")
            .push_bind(pattern)
            .push(")");
    }

    builder.push(" ORDER BY tahun DESC, id DESC");
    builder
}

// GET /api/penelitian?tahun=&search=
pub async fn get_penelitian(
    State(db): State<Database>,
    Query(params): Query<PenelitianListQuery>,
) -> Result<Json<Value>, ErrorResponse> {
    let mut builder = penelitian_list_query(&params);

    let rows: Vec<Penelitian> = builder
        .build_query_as()
        .fetch_all(&db)
        .await
        .map_err(|err| db_error("Terjadi kesalahan saat mengambil data penelitian", err))?;

    Ok(Json(json!({ "success": true, "data": rows })))
}

// POST /api/penelitian
pub async fn create_penelitian(
    State(db): State<Database>,
    Json(payload): Json<CreatePenelitianRequest>,
) -> Result<(StatusCode, Json<Value>), ErrorResponse> {
    let (judul, tahun) = match (payload.judul, payload.tahun) {
        (Some(judul), Some(tahun)) => (judul, tahun),
        _ => return Err(bad_request("Judul dan tahun harus diisi")),
    };

    let tahun = validasi_tahun(tahun).map_err(bad_request)?;

    let (id,): (i32,) = sqlx::query_as(
        "INSERT INTO penelitian (id_profil, judul, tahun, bidang, deskripsi, file_laporan)
         VALUES ($1, $2, $3, $4, $5, $6) RETURNING id",
    )
    .bind(payload.id_profil)
    .bind(&judul)
    .bind(tahun)
    .bind(&payload.bidang)
    .bind(&payload.deskripsi)
    .bind(&payload.file_laporan)
    .fetch_one(&db)
    .await
    .map_err(|err| db_error("Terjadi kesalahan saat menambah penelitian", err))?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "Penelitian berhasil ditambahkan",
            "id": id
        })),
    ))
}

// PATCH /api/penelitian (id di body)
pub async fn update_penelitian(
    State(db): State<Database>,
    Json(payload): Json<PatchPenelitianRequest>,
) -> Result<Json<Value>, ErrorResponse> {
    let id = payload
        .id
        .ok_or_else(|| bad_request("ID penelitian diperlukan"))?;

    let (judul, tahun) = match (payload.judul, payload.tahun) {
        (Some(judul), Some(tahun)) => (judul, tahun),
        _ => return Err(bad_request("Judul dan tahun harus diisi")),
    };

    let tahun = validasi_tahun(tahun).map_err(bad_request)?;

    let existing: Option<(i32,)> = sqlx::query_as("SELECT id FROM penelitian WHERE id = $1")
        .bind(id)
        .fetch_optional(&db)
        .await
        .map_err(|err| db_error("Terjadi kesalahan saat memperbarui penelitian", err))?;

    if existing.is_none() {
        return Err(not_found("Penelitian tidak ditemukan"));
    }

    sqlx::query(
        "UPDATE penelitian
         SET id_profil = $1, judul = $2, tahun = $3, bidang = $4, deskripsi = $5, file_laporan = $6
         WHERE id = $7",
    )
    .bind(payload.id_profil)
    .bind(&judul)
    .bind(tahun)
    .bind(&payload.bidang)
    .bind(&payload.deskripsi)
    .bind(&payload.file_laporan)
    .bind(id)
    .execute(&db)
    .await
    .map_err(|err| db_error("Terjadi kesalahan saat memperbarui penelitian", err))?;

    Ok(Json(json!({
        "success": true,
        "message": "Penelitian berhasil diperbarui"
    })))
}

// DELETE /api/penelitian?id=
pub async fn delete_penelitian(
    State(db): State<Database>,
    Query(params): Query<IdQuery>,
) -> Result<Json<Value>, ErrorResponse> {
    let id = params
        .id
        .ok_or_else(|| bad_request("ID penelitian diperlukan"))?;

    let existing: Option<(i32,)> = sqlx::query_as("SELECT id FROM penelitian WHERE id = $1")
        .bind(id)
        .fetch_optional(&db)
        .await
        .map_err(|err| db_error("Terjadi kesalahan saat menghapus penelitian", err))?;

    if existing.is_none() {
        return Err(not_found("Penelitian tidak ditemukan"));
    }

    sqlx::query("DELETE FROM penelitian WHERE id = $1")
        .bind(id)
        .execute(&db)
        .await
        .map_err(|err| db_error("Terjadi kesalahan saat menghapus penelitian", err))?;

    Ok(Json(json!({
        "success": true,
        "message": "Penelitian berhasil dihapus"
    })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn daftar_penelitian_terurut_tahun_terbaru() {
        let params = PenelitianListQuery {
            tahun: None,
            search: Some("jaringan".to_string()),
        };
        let sql = penelitian_list_query(&params).into_sql();
        assert!(sql.contains("judul ILIKE"));
        assert!(sql.contains("bidang ILIKE"));
        assert!(sql.ends_with("ORDER BY tahun DESC, id DESC"));
    }
}
