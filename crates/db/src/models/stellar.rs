//! Stellar row model and request DTO.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use stellight_core::types::{DbId, Timestamp};

/// A row from the `stellars` table.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Stellar {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new stellar.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStellar {
    pub name: String,
}
