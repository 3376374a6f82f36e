use axum::{
    extract::{Multipart, Query, State},
    http::StatusCode,
    response::Json,
};
use chrono::{Datelike, Utc};
use serde_json::{json, Value};

use crate::database::Database;
use crate::models::hak_cipta::{HakCipta, ALLOWED_MIME_TYPES, MAX_FILE_SIZE};
use crate::routes::{
    bad_request, db_error, io_error, multipart_error, not_found, ErrorResponse, IdQuery,
};
use crate::upload;

#[derive(Debug, Default)]
struct HakCiptaForm {
    id: Option<String>,
    judul: Option<String>,
    nomor_pendaftaran: Option<String>,
    tahun: Option<String>,
    deskripsi: Option<String>,
    id_profil: Option<String>,
    file: Option<(String, String, Vec<u8>)>, // (nama asli, content type, isi)
}

async fn read_hak_cipta_form(mut multipart: Multipart) -> Result<HakCiptaForm, ErrorResponse> {
    let mut form = HakCiptaForm::default();

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().unwrap_or_default().to_string();
        if name == "file" {
            let filename = field.file_name().unwrap_or("dokumen").to_string();
            let content_type = field.content_type().unwrap_or_default().to_string();
            let data = field.bytes().await.map_err(multipart_error)?;
            if !data.is_empty() {
                form.file = Some((filename, content_type, data.to_vec()));
            }
            continue;
        }

        let value = field.text().await.map_err(multipart_error)?;
        let value = value.trim().to_string();
        if value.is_empty() {
            continue;
        }
        match name.as_str() {
            "id" => form.id = Some(value),
            "judul" => form.judul = Some(value),
            "nomor_pendaftaran" => form.nomor_pendaftaran = Some(value),
            "tahun" => form.tahun = Some(value),
            "deskripsi" => form.deskripsi = Some(value),
            "id_profil" => form.id_profil = Some(value),
            _ => log::warn!("Field form hak cipta tidak dikenal: {}", name),
        }
    }

    Ok(form)
}

fn validasi_file(content_type: &str, size: usize) -> Result<(), ErrorResponse> {
    if size > MAX_FILE_SIZE {
        return Err(bad_request("Ukuran file terlalu besar. Maksimal 10MB"));
    }
    if !ALLOWED_MIME_TYPES.contains(&content_type) {
        return Err(bad_request(
            "Format file tidak didukung. Gunakan PDF, JPG, JPEG, PNG, atau WebP",
        ));
    }
    Ok(())
}

// Simpan dokumen dan kembalikan URL publiknya.
async fn simpan_dokumen(
    original_name: &str,
    data: &[u8],
    pesan_gagal: &str,
) -> Result<String, ErrorResponse> {
    let filename = upload::copyright_filename(original_name);
    upload::save_upload(upload::COPYRIGHT_DIR, &filename, data)
        .await
        .map_err(|err| io_error(pesan_gagal, err))?;
    Ok(format!("/uploads/copyrights/{}", filename))
}

// GET /api/hak-cipta (array polos, terbaru dulu)
pub async fn get_hak_cipta(State(db): State<Database>) -> Result<Json<Value>, ErrorResponse> {
    let rows: Vec<HakCipta> =
        sqlx::query_as("SELECT * FROM hak_cipta ORDER BY created_at DESC, tahun DESC")
            .fetch_all(&db)
            .await
            .map_err(|err| db_error("Gagal mengambil data hak cipta", err))?;

    Ok(Json(json!(rows)))
}

// POST /api/hak-cipta (multipart; file opsional)
pub async fn create_hak_cipta(
    State(db): State<Database>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<Value>), ErrorResponse> {
    let form = read_hak_cipta_form(multipart).await?;

    let judul = form
        .judul
        .ok_or_else(|| bad_request("Judul hak cipta harus diisi"))?;
    let nomor_pendaftaran = form
        .nomor_pendaftaran
        .ok_or_else(|| bad_request("Nomor pendaftaran harus diisi"))?;

    let mut file_url: Option<String> = None;
    if let Some((original_name, content_type, data)) = form.file {
        validasi_file(&content_type, data.len())?;
        file_url = Some(simpan_dokumen(&original_name, &data, "Gagal menambahkan hak cipta").await?);
    }

    // Tahun yang kosong diisi tahun berjalan.
    let tahun: i32 = match form.tahun.as_deref() {
        Some(t) => t
            .parse()
            .map_err(|_| bad_request("Tahun harus berupa angka"))?,
        None => Utc::now().year(),
    };

    let id_profil: Option<i32> = form.id_profil.as_deref().and_then(|v| v.parse().ok());

    sqlx::query(
        "INSERT INTO hak_cipta (judul, nomor_pendaftaran, tahun, link, deskripsi, id_profil, created_at)
         VALUES ($1, $2, $3, $4, $5, $6, NOW())",
    )
    .bind(&judul)
    .bind(&nomor_pendaftaran)
    .bind(tahun)
    .bind(&file_url)
    .bind(&form.deskripsi)
    .bind(id_profil)
    .execute(&db)
    .await
    .map_err(|err| db_error("Gagal menambahkan hak cipta", err))?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Hak cipta berhasil ditambahkan",
            "fileUrl": file_url
        })),
    ))
}

// PATCH /api/hak-cipta (multipart dengan field id)
pub async fn update_hak_cipta(
    State(db): State<Database>,
    multipart: Multipart,
) -> Result<Json<Value>, ErrorResponse> {
    let form = read_hak_cipta_form(multipart).await?;

    let id: i32 = form
        .id
        .as_deref()
        .and_then(|id| id.parse().ok())
        .ok_or_else(|| bad_request("ID hak cipta diperlukan"))?;

    let existing: Option<(Option<String>,)> =
        sqlx::query_as("SELECT link FROM hak_cipta WHERE id = $1")
            .bind(id)
            .fetch_optional(&db)
            .await
            .map_err(|err| db_error("Gagal memperbarui hak cipta", err))?;

    let (existing_link,) = existing.ok_or_else(|| not_found("Hak cipta tidak ditemukan"))?;

    let mut file_url = existing_link;
    if let Some((original_name, content_type, data)) = form.file {
        validasi_file(&content_type, data.len())?;
        file_url = Some(simpan_dokumen(&original_name, &data, "Gagal memperbarui hak cipta").await?);
    }

    let tahun: i32 = match form.tahun.as_deref() {
        Some(t) => t
            .parse()
            .map_err(|_| bad_request("Tahun harus berupa angka"))?,
        None => Utc::now().year(),
    };

    sqlx::query(
        "UPDATE hak_cipta
         SET judul = $1, nomor_pendaftaran = $2, tahun = $3, link = $4, deskripsi = $5,
             updated_at = NOW()
         WHERE id = $6",
    )
    .bind(form.judul.unwrap_or_default())
    .bind(form.nomor_pendaftaran.unwrap_or_default())
    .bind(tahun)
    .bind(&file_url)
    .bind(&form.deskripsi)
    .bind(id)
    .execute(&db)
    .await
    .map_err(|err| db_error("Gagal memperbarui hak cipta", err))?;

    Ok(Json(json!({
        "message": "Hak cipta berhasil diperbarui",
        "fileUrl": file_url
    })))
}

// DELETE /api/hak-cipta?id= (berbeda dengan buku: file fisik ikut dihapus)
pub async fn delete_hak_cipta(
    State(db): State<Database>,
    Query(params): Query<IdQuery>,
) -> Result<Json<Value>, ErrorResponse> {
    let id = params
        .id
        .ok_or_else(|| bad_request("ID hak cipta diperlukan"))?;

    let existing: Option<(Option<String>,)> =
        sqlx::query_as("SELECT link FROM hak_cipta WHERE id = $1")
            .bind(id)
            .fetch_optional(&db)
            .await
            .map_err(|err| db_error("Gagal menghapus hak cipta", err))?;

    let (link,) = existing.ok_or_else(|| not_found("Hak cipta tidak ditemukan"))?;

    // Best effort; lanjut meski file sudah tidak ada.
    if let Some(link) = link {
        if let Some(filename) = link.rsplit('/').next() {
            if let Err(err) = upload::delete_upload(upload::COPYRIGHT_DIR, filename).await {
                log::warn!("Gagal menghapus file hak cipta {}: {}", filename, err);
            }
        }
    }

    sqlx::query("DELETE FROM hak_cipta WHERE id = $1")
        .bind(id)
        .execute(&db)
        .await
        .map_err(|err| db_error("Gagal menghapus hak cipta", err))?;

    Ok(Json(json!({ "message": "Hak cipta berhasil dihapus" })))
}
