use axum::{
    extract::{Multipart, Query, State},
    http::StatusCode,
    response::Json,
};
use serde_json::{json, Value};
use sqlx::{Postgres, QueryBuilder};

use crate::database::Database;
use crate::models::buku::{Buku, BukuListQuery};
use crate::routes::{
    bad_request, base_url, db_error, io_error, multipart_error, not_found, ErrorResponse, IdQuery,
};
use crate::upload;

// Field teks + dua file yang bisa dikirim form buku.
#[derive(Debug, Default)]
struct BukuForm {
    id: Option<String>,
    judul: Option<String>,
    penerbit: Option<String>,
    tahun: Option<String>,
    isbn: Option<String>,
    deskripsi: Option<String>,
    cover: Option<(String, Vec<u8>)>,
    file_buku: Option<(String, Vec<u8>)>,
}

async fn read_buku_form(mut multipart: Multipart) -> Result<BukuForm, ErrorResponse> {
    let mut form = BukuForm::default();

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "cover" => {
                let filename = field.file_name().unwrap_or("cover").to_string();
                let data = field.bytes().await.map_err(multipart_error)?;
                if !data.is_empty() {
                    form.cover = Some((filename, data.to_vec()));
                }
            }
            "fileBuku" => {
                let filename = field.file_name().unwrap_or("file").to_string();
                let data = field.bytes().await.map_err(multipart_error)?;
                if !data.is_empty() {
                    form.file_buku = Some((filename, data.to_vec()));
                }
            }
            _ => {
                let value = field.text().await.map_err(multipart_error)?;
                let value = value.trim().to_string();
                if value.is_empty() {
                    continue;
                }
                match name.as_str() {
                    "id" => form.id = Some(value),
                    "judul" => form.judul = Some(value),
                    "penerbit" => form.penerbit = Some(value),
                    "tahun" => form.tahun = Some(value),
                    "isbn" => form.isbn = Some(value),
                    "deskripsi" => form.deskripsi = Some(value),
                    _ => log::warn!("Field form buku tidak dikenal: {}", name),
                }
            }
        }
    }

    Ok(form)
}

fn buku_list_query(params: &BukuListQuery) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new("SELECT * FROM buku WHERE 1=1");

    if let Some(search) = params.search.as_deref().filter(|s| !s.is_empty()) {
        let pattern = format!("%{}%", search);
        builder
            .push(" AND (judul ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR penerbit ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR isbn ILIKE ")
            .push_bind(pattern)
            .push(")");
    }

    if let Some(tahun) = params.tahun {
        builder.push(" AND tahun = ").push_bind(tahun);
    }

    builder.push(" ORDER BY tahun DESC, judul ASC");
    builder
}

// GET /api/buku?search=&tahun=
pub async fn get_buku(
    State(db): State<Database>,
    Query(params): Query<BukuListQuery>,
) -> Result<Json<Value>, ErrorResponse> {
    let mut builder = buku_list_query(&params);

    let rows: Vec<Buku> = builder
        .build_query_as()
        .fetch_all(&db)
        .await
        .map_err(|err| db_error("Terjadi kesalahan saat mengambil data buku", err))?;

    let base = base_url();
    let data: Vec<Value> = rows.iter().map(|buku| buku.with_urls(&base)).collect();

    Ok(Json(json!({ "success": true, "data": data })))
}

// POST /api/buku (multipart: judul, penerbit, tahun, isbn, deskripsi, cover, fileBuku)
pub async fn create_buku(
    State(db): State<Database>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<Value>), ErrorResponse> {
    let form = read_buku_form(multipart).await?;

    let (judul, tahun) = match (form.judul, form.tahun) {
        (Some(judul), Some(tahun)) => (judul, tahun),
        _ => return Err(bad_request("Judul dan tahun harus diisi")),
    };
    let tahun: i32 = tahun
        .parse()
        .map_err(|_| bad_request("Tahun harus berupa angka"))?;

    let (cover_name, cover_data) = form
        .cover
        .ok_or_else(|| bad_request("Cover buku wajib diupload"))?;
    let (file_name, file_data) = form
        .file_buku
        .ok_or_else(|| bad_request("File buku wajib diupload"))?;

    // Satu timestamp untuk kedua nama file; tabrakan dalam milidetik yang
    // sama adalah keterbatasan yang diterima.
    let timestamp = upload::timestamp_millis();
    let cover_filename = upload::cover_filename(timestamp, &cover_name);
    let file_filename = upload::buku_filename(timestamp, &file_name);

    upload::save_upload(upload::BUKU_COVER_DIR, &cover_filename, &cover_data)
        .await
        .map_err(|err| io_error("Terjadi kesalahan saat menambah buku", err))?;
    upload::save_upload(upload::BUKU_FILE_DIR, &file_filename, &file_data)
        .await
        .map_err(|err| io_error("Terjadi kesalahan saat menambah buku", err))?;

    // Insert gagal setelah file tersimpan meninggalkan file yatim; tidak
    // ada jalur rollback.
    let (id,): (i32,) = sqlx::query_as(
        "INSERT INTO buku (judul, penerbit, tahun, isbn, deskripsi, cover, link)
         VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING id",
    )
    .bind(&judul)
    .bind(&form.penerbit)
    .bind(tahun)
    .bind(&form.isbn)
    .bind(&form.deskripsi)
    .bind(&cover_filename)
    .bind(&file_filename)
    .fetch_one(&db)
    .await
    .map_err(|err| db_error("Terjadi kesalahan saat menambah buku", err))?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "Buku berhasil ditambahkan",
            "id": id
        })),
    ))
}

// PATCH /api/buku (multipart dengan field id; file hanya diganti jika dikirim)
pub async fn update_buku(
    State(db): State<Database>,
    multipart: Multipart,
) -> Result<Json<Value>, ErrorResponse> {
    let form = read_buku_form(multipart).await?;

    let id: i32 = form
        .id
        .as_deref()
        .and_then(|id| id.parse().ok())
        .ok_or_else(|| bad_request("ID buku diperlukan"))?;

    let existing: Option<Buku> = sqlx::query_as("SELECT * FROM buku WHERE id = $1")
        .bind(id)
        .fetch_optional(&db)
        .await
        .map_err(|err| db_error("Terjadi kesalahan saat memperbarui buku", err))?;

    let existing = existing.ok_or_else(|| not_found("Buku tidak ditemukan"))?;

    let mut cover_filename = existing.cover.clone();
    if let Some((original_name, data)) = form.cover {
        let timestamp = upload::timestamp_millis();
        let filename = upload::cover_filename(timestamp, &original_name);
        upload::save_upload(upload::BUKU_COVER_DIR, &filename, &data)
            .await
            .map_err(|err| io_error("Terjadi kesalahan saat memperbarui buku", err))?;
        // Cover lama sengaja dibiarkan di disk.
        cover_filename = Some(filename);
    }

    let mut file_filename = existing.link.clone();
    if let Some((original_name, data)) = form.file_buku {
        let timestamp = upload::timestamp_millis();
        let filename = upload::buku_filename(timestamp, &original_name);
        upload::save_upload(upload::BUKU_FILE_DIR, &filename, &data)
            .await
            .map_err(|err| io_error("Terjadi kesalahan saat memperbarui buku", err))?;
        // File lama sengaja dibiarkan di disk.
        file_filename = Some(filename);
    }

    let tahun = match form.tahun.as_deref() {
        Some(t) => t
            .parse()
            .map_err(|_| bad_request("Tahun harus berupa angka"))?,
        None => existing.tahun,
    };

    sqlx::query(
        "UPDATE buku
         SET judul = $1, penerbit = $2, tahun = $3, isbn = $4, deskripsi = $5,
             cover = $6, link = $7
         WHERE id = $8",
    )
    .bind(form.judul.unwrap_or(existing.judul))
    .bind(&form.penerbit)
    .bind(tahun)
    .bind(&form.isbn)
    .bind(&form.deskripsi)
    .bind(&cover_filename)
    .bind(&file_filename)
    .bind(id)
    .execute(&db)
    .await
    .map_err(|err| db_error("Terjadi kesalahan saat memperbarui buku", err))?;

    Ok(Json(json!({
        "success": true,
        "message": "Buku berhasil diperbarui"
    })))
}

// DELETE /api/buku?id=
pub async fn delete_buku(
    State(db): State<Database>,
    Query(params): Query<IdQuery>,
) -> Result<Json<Value>, ErrorResponse> {
    let id = params.id.ok_or_else(|| bad_request("ID buku diperlukan"))?;

    let existing: Option<(i32,)> = sqlx::query_as("SELECT id FROM buku WHERE id = $1")
        .bind(id)
        .fetch_optional(&db)
        .await
        .map_err(|err| db_error("Terjadi kesalahan saat menghapus buku", err))?;

    if existing.is_none() {
        return Err(not_found("Buku tidak ditemukan"));
    }

    // Hanya baris DB yang dihapus; file upload dibiarkan menumpuk di disk.
    sqlx::query("DELETE FROM buku WHERE id = $1")
        .bind(id)
        .execute(&db)
        .await
        .map_err(|err| db_error("Terjadi kesalahan saat menghapus buku", err))?;

    Ok(Json(json!({
        "success": true,
        "message": "Buku berhasil dihapus"
    })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn daftar_buku_terurut_tahun_terbaru() {
        let params = BukuListQuery {
            search: None,
            tahun: None,
        };
        let sql = buku_list_query(&params).into_sql();
        assert!(sql.ends_with("ORDER BY tahun DESC, judul ASC"));
    }

    #[test]
    fn pencarian_buku_memakai_ilike() {
        let params = BukuListQuery {
            search: Some("978-1234".to_string()),
            tahun: Some(2023),
        };
        let sql = buku_list_query(&params).into_sql();
        assert!(sql.contains("judul ILIKE"));
        assert!(sql.contains("penerbit ILIKE"));
        assert!(sql.contains("isbn ILIKE"));
        assert!(sql.contains("tahun = "));
        assert!(sql.ends_with("ORDER BY tahun DESC, judul ASC"));
    }

    #[test]
    fn pencarian_kosong_tidak_menambah_klausa() {
        let params = BukuListQuery {
            search: Some(String::new()),
            tahun: None,
        };
        let sql = buku_list_query(&params).into_sql();
        assert!(!sql.contains("ILIKE"));
    }
}
