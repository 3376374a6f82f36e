use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use serde_json::{json, Value};

use crate::database::Database;
use crate::models::home_content::{CreateHomeContentRequest, HomeContent};
use crate::routes::{bad_request, db_error, ErrorResponse};

// GET /api/home-content
pub async fn get_home_content(State(db): State<Database>) -> Result<Json<Value>, ErrorResponse> {
    let rows: Vec<HomeContent> = sqlx::query_as("SELECT * FROM home_content ORDER BY id DESC")
        .fetch_all(&db)
        .await
        .map_err(|err| db_error("Failed to fetch home content", err))?;

    Ok(Json(json!(rows)))
}

// POST /api/home-content
pub async fn create_home_content(
    State(db): State<Database>,
    Json(payload): Json<CreateHomeContentRequest>,
) -> Result<(StatusCode, Json<Value>), ErrorResponse> {
    let (judul, isi) = match (payload.judul, payload.isi) {
        (Some(judul), Some(isi)) => (judul, isi),
        _ => return Err(bad_request("judul and isi are required")),
    };

    sqlx::query("INSERT INTO home_content (judul, isi, foto) VALUES ($1, $2, $3)")
        .bind(&judul)
        .bind(&isi)
        .bind(&payload.foto)
        .execute(&db)
        .await
        .map_err(|err| db_error("Failed to add home content", err))?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Home content added successfully" })),
    ))
}
