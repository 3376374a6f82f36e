use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use serde_json::{json, Value};
use sqlx::{Postgres, QueryBuilder};

use crate::database::Database;
use crate::models::pengalaman::{
    CreatePengalamanRequest, PatchPengalamanRequest, Pengalaman, PengalamanListQuery,
};
use crate::routes::{bad_request, db_error, not_found, ErrorResponse, IdQuery};
use crate::validation::{validasi_kategori, validasi_tahun};

fn pengalaman_list_query(params: &PengalamanListQuery) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new("SELECT * FROM pengalaman WHERE 1=1");

    if let Some(id_profil) = params.id_profil {
        builder.push(" AND id_profil = ").push_bind(id_profil);
    }
    if let Some(kategori) = params.kategori.as_deref().filter(|k| !k.is_empty()) {
        builder.push(" AND kategori = ").push_bind(kategori.to_string());
    }
    if let Some(tahun) = params.tahun {
        builder.push(" AND tahun = ").push_bind(tahun);
    }
    if let Some(search) = params.search.as_deref().filter(|s| !s.is_empty()) {
        let pattern = format!("%{}%", search);
        builder
            .push(" AND (judul ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR instansi ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR deskripsi ILIKE ")
            .push_bind(pattern)
            .push(")");
    }

    builder.push(" ORDER BY tahun DESC, id DESC");
    builder
}

// GET /api/pengalaman?kategori=&tahun=&search=&id_profil=
pub async fn get_pengalaman(
    State(db): State<Database>,
    Query(params): Query<PengalamanListQuery>,
) -> Result<Json<Value>, ErrorResponse> {
    let mut builder = pengalaman_list_query(&params);

    let rows: Vec<Pengalaman> = builder
        .build_query_as()
        .fetch_all(&db)
        .await
        .map_err(|err| db_error("Terjadi kesalahan saat mengambil data pengalaman", err))?;

    Ok(Json(json!({ "success": true, "data": rows })))
}

// POST /api/pengalaman
pub async fn create_pengalaman(
    State(db): State<Database>,
    Json(payload): Json<CreatePengalamanRequest>,
) -> Result<(StatusCode, Json<Value>), ErrorResponse> {
    let (kategori, judul, instansi, tahun) = match (
        payload.kategori,
        payload.judul,
        payload.instansi,
        payload.tahun,
    ) {
        (Some(kategori), Some(judul), Some(instansi), Some(tahun)) => {
            (kategori, judul, instansi, tahun)
        }
        _ => return Err(bad_request("Kategori, judul, instansi, dan tahun harus diisi")),
    };

    validasi_kategori(&kategori).map_err(bad_request)?;
    let tahun = validasi_tahun(tahun).map_err(bad_request)?;

    let (id,): (i32,) = sqlx::query_as(
        "INSERT INTO pengalaman (id_profil, kategori, judul, instansi, tahun, deskripsi)
         VALUES ($1, $2, $3, $4, $5, $6) RETURNING id",
    )
    .bind(payload.id_profil)
    .bind(&kategori)
    .bind(&judul)
    .bind(&instansi)
    .bind(tahun)
    .bind(&payload.deskripsi)
    .fetch_one(&db)
    .await
    .map_err(|err| db_error("Terjadi kesalahan saat menambah pengalaman", err))?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "Pengalaman berhasil ditambahkan",
            "id": id
        })),
    ))
}

// PUT /api/pengalaman?id= (full update)
pub async fn replace_pengalaman(
    State(db): State<Database>,
    Query(params): Query<IdQuery>,
    Json(payload): Json<CreatePengalamanRequest>,
) -> Result<Json<Value>, ErrorResponse> {
    let id = params
        .id
        .ok_or_else(|| bad_request("ID pengalaman diperlukan"))?;

    let (kategori, judul, instansi, tahun) = match (
        payload.kategori,
        payload.judul,
        payload.instansi,
        payload.tahun,
    ) {
        (Some(kategori), Some(judul), Some(instansi), Some(tahun)) => {
            (kategori, judul, instansi, tahun)
        }
        _ => return Err(bad_request("Kategori, judul, instansi, dan tahun harus diisi")),
    };

    validasi_kategori(&kategori).map_err(bad_request)?;
    let tahun = validasi_tahun(tahun).map_err(bad_request)?;

    let existing: Option<(i32,)> = sqlx::query_as("SELECT id FROM pengalaman WHERE id = $1")
        .bind(id)
        .fetch_optional(&db)
        .await
        .map_err(|err| db_error("Terjadi kesalahan saat memperbarui pengalaman", err))?;

    if existing.is_none() {
        return Err(not_found("Pengalaman tidak ditemukan"));
    }

    sqlx::query(
        "UPDATE pengalaman
         SET id_profil = $1, kategori = $2, judul = $3, instansi = $4, tahun = $5, deskripsi = $6
         WHERE id = $7",
    )
    .bind(payload.id_profil)
    .bind(&kategori)
    .bind(&judul)
    .bind(&instansi)
    .bind(tahun)
    .bind(&payload.deskripsi)
    .bind(id)
    .execute(&db)
    .await
    .map_err(|err| db_error("Terjadi kesalahan saat memperbarui pengalaman", err))?;

    Ok(Json(json!({
        "success": true,
        "message": "Pengalaman berhasil diperbarui"
    })))
}

// PATCH /api/pengalaman?id= (merge baris lama dengan field yang dikirim)
pub async fn patch_pengalaman(
    State(db): State<Database>,
    Query(params): Query<IdQuery>,
    Json(payload): Json<PatchPengalamanRequest>,
) -> Result<Json<Value>, ErrorResponse> {
    let id = params
        .id
        .ok_or_else(|| bad_request("ID pengalaman diperlukan"))?;

    let existing: Option<Pengalaman> = sqlx::query_as("SELECT * FROM pengalaman WHERE id = $1")
        .bind(id)
        .fetch_optional(&db)
        .await
        .map_err(|err| db_error("Terjadi kesalahan saat memperbarui pengalaman", err))?;

    let existing = existing.ok_or_else(|| not_found("Pengalaman tidak ditemukan"))?;

    if let Some(kategori) = payload.kategori.as_deref() {
        validasi_kategori(kategori).map_err(bad_request)?;
    }
    if let Some(tahun) = payload.tahun {
        validasi_tahun(tahun).map_err(bad_request)?;
    }

    // Gabungkan data lama dengan override dari body, field demi field.
    let merged = Pengalaman {
        id: existing.id,
        id_profil: payload.id_profil.or(existing.id_profil),
        kategori: payload.kategori.unwrap_or(existing.kategori),
        judul: payload.judul.unwrap_or(existing.judul),
        instansi: payload.instansi.unwrap_or(existing.instansi),
        tahun: payload.tahun.unwrap_or(existing.tahun),
        deskripsi: payload.deskripsi.or(existing.deskripsi),
    };

    sqlx::query(
        "UPDATE pengalaman
         SET id_profil = $1, kategori = $2, judul = $3, instansi = $4, tahun = $5, deskripsi = $6
         WHERE id = $7",
    )
    .bind(merged.id_profil)
    .bind(&merged.kategori)
    .bind(&merged.judul)
    .bind(&merged.instansi)
    .bind(merged.tahun)
    .bind(&merged.deskripsi)
    .bind(id)
    .execute(&db)
    .await
    .map_err(|err| db_error("Terjadi kesalahan saat memperbarui pengalaman", err))?;

    Ok(Json(json!({
        "success": true,
        "message": "Pengalaman berhasil diperbarui"
    })))
}

// DELETE /api/pengalaman?id=
pub async fn delete_pengalaman(
    State(db): State<Database>,
    Query(params): Query<IdQuery>,
) -> Result<Json<Value>, ErrorResponse> {
    let id = params
        .id
        .ok_or_else(|| bad_request("ID pengalaman diperlukan"))?;

    let existing: Option<(i32,)> = sqlx::query_as("SELECT id FROM pengalaman WHERE id = $1")
        .bind(id)
        .fetch_optional(&db)
        .await
        .map_err(|err| db_error("Terjadi kesalahan saat menghapus pengalaman", err))?;

    if existing.is_none() {
        return Err(not_found("Pengalaman tidak ditemukan"));
    }

    sqlx::query("DELETE FROM pengalaman WHERE id = $1")
        .bind(id)
        .execute(&db)
        .await
        .map_err(|err| db_error("Terjadi kesalahan saat menghapus pengalaman", err))?;

    Ok(Json(json!({
        "success": true,
        "message": "Pengalaman berhasil dihapus"
    })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn daftar_pengalaman_terurut_tahun_terbaru() {
        let params = PengalamanListQuery {
            kategori: None,
            tahun: None,
            search: None,
            id_profil: None,
        };
        let sql = pengalaman_list_query(&params).into_sql();
        assert!(sql.ends_with("ORDER BY tahun DESC, id DESC"));
    }

    #[test]
    fn filter_pengalaman_masuk_klausa_where() {
        let params = PengalamanListQuery {
            kategori: Some("Speaker".to_string()),
            tahun: Some(2022),
            search: Some("seminar".to_string()),
            id_profil: Some(1),
        };
        let sql = pengalaman_list_query(&params).into_sql();
        assert!(sql.contains("id_profil = "));
        assert!(sql.contains("kategori = "));
        assert!(sql.contains("tahun = "));
        assert!(sql.contains("judul ILIKE"));
        assert!(sql.contains("instansi ILIKE"));
        assert!(sql.ends_with("ORDER BY tahun DESC, id DESC"));
    }
}
