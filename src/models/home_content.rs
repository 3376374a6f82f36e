use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct HomeContent {
    pub id: i32,
    pub judul: String,
    pub isi: String,
    pub foto: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateHomeContentRequest {
    pub judul: Option<String>,
    pub isi: Option<String>,
    pub foto: Option<String>,
}
