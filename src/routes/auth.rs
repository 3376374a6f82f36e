use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use serde_json::{json, Value};

use crate::auth::{compare_password, hash_password};
use crate::database::Database;
use crate::models::user::{LoginRequest, SignupRequest, UserLogin};
use crate::routes::{bad_request, db_error, ErrorResponse};

// POST /api/auth/signup
pub async fn signup(
    State(db): State<Database>,
    Json(payload): Json<SignupRequest>,
) -> Result<Json<Value>, ErrorResponse> {
    let (username, password, nama_lengkap) = match (
        payload.username,
        payload.password,
        payload.nama_lengkap,
    ) {
        (Some(u), Some(p), Some(n)) if !u.is_empty() && !p.is_empty() && !n.is_empty() => (u, p, n),
        _ => {
            return Err(bad_request(
                "Username, password, dan nama lengkap harus diisi",
            ))
        }
    };

    if password.len() < 6 {
        return Err(bad_request("Password minimal 6 karakter"));
    }

    let existing: Option<(i32,)> =
        sqlx::query_as("SELECT id_user FROM user_login WHERE username = $1")
            .bind(&username)
            .fetch_optional(&db)
            .await
            .map_err(|err| db_error("Terjadi kesalahan saat membuat akun", err))?;

    if existing.is_some() {
        return Err(bad_request("Username sudah terdaftar"));
    }

    let (id,): (i32,) = sqlx::query_as(
        "INSERT INTO user_login (namalengkap, username, password)
         VALUES ($1, $2, $3) RETURNING id_user",
    )
    .bind(&nama_lengkap)
    .bind(&username)
    .bind(hash_password(&password))
    .fetch_one(&db)
    .await
    .map_err(|err| db_error("Terjadi kesalahan saat membuat akun", err))?;

    Ok(Json(json!({
        "success": true,
        "message": "Akun berhasil dibuat",
        "id": id
    })))
}

// POST /api/auth/login
// Sesi tetap di sisi client (blob localStorage); server hanya memverifikasi.
pub async fn login(
    State(db): State<Database>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<Value>, ErrorResponse> {
    let (username, password) = match (payload.username, payload.password) {
        (Some(u), Some(p)) if !u.is_empty() && !p.is_empty() => (u, p),
        _ => return Err(bad_request("Username dan password harus diisi")),
    };

    let user: Option<UserLogin> = sqlx::query_as("SELECT * FROM user_login WHERE username = $1")
        .bind(&username)
        .fetch_optional(&db)
        .await
        .map_err(|err| db_error("Terjadi kesalahan saat login", err))?;

    let user = match user {
        Some(user) if compare_password(&password, &user.password) => user,
        _ => {
            return Err((
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": "Username atau password salah" })),
            ))
        }
    };

    Ok(Json(json!({
        "success": true,
        "user": {
            "id": user.id_user,
            "username": user.username,
            "nama_lengkap": user.namalengkap
        }
    })))
}
