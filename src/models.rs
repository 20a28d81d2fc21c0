use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::errors::AppError;

// ============ Domain Models ============

/// Identity fields supplied by the caller on create.
#[derive(Debug, Clone, Default, PartialEq, Eq, FromRow, Serialize, Deserialize, ToSchema)]
pub struct Person {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub surname: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patronymic: Option<String>,
}

impl Person {
    /// Strips surrounding whitespace; a blank patronymic becomes `None`.
    pub fn trimmed(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            surname: self.surname.trim().to_string(),
            patronymic: self
                .patronymic
                .map(|p| p.trim().to_string())
                .filter(|p| !p.is_empty()),
        }
    }

    /// Name and surname must both be non-empty.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() || self.surname.trim().is_empty() {
            return Err(AppError::BadRequest("Invalid person data".to_string()));
        }
        Ok(())
    }
}

/// A person plus the inferred age, gender and nationality. This is the unit of storage.
///
/// `age == 0` and empty strings mean the lookup had no data.
#[derive(Debug, Clone, Default, PartialEq, Eq, FromRow, Serialize, Deserialize, ToSchema)]
pub struct EnrichedPerson {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub person: Person,
    #[serde(default)]
    pub age: i32,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub nationality: String,
}

impl EnrichedPerson {
    /// Wraps a person with empty enrichment fields.
    pub fn unenriched(person: Person) -> Self {
        Self {
            person,
            ..Default::default()
        }
    }

    /// Updates replace every field, so every field must be populated.
    pub fn validate_complete(&self) -> Result<(), AppError> {
        self.person
            .validate()
            .map_err(|_| AppError::BadRequest("Not all fields presented in JSON".to_string()))?;
        if self.age <= 0 || self.gender.trim().is_empty() || self.nationality.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Not all fields presented in JSON".to_string(),
            ));
        }
        Ok(())
    }
}

/// Body returned by `POST /`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CreatedPerson {
    pub id: i64,
}

// ============ Enrichment API Responses ============

/// Response from the age inference API.
#[derive(Debug, Clone, Deserialize)]
pub struct AgeResponse {
    #[serde(default)]
    pub count: i64,
    #[serde(default)]
    pub name: String,
    /// `null` when the service has no data for the name.
    pub age: Option<i32>,
}

/// Response from the gender inference API.
#[derive(Debug, Clone, Deserialize)]
pub struct GenderResponse {
    #[serde(default)]
    pub count: i64,
    #[serde(default)]
    pub name: String,
    pub gender: Option<String>,
    #[serde(default)]
    pub probability: f64,
}

/// Response from the nationality inference API.
#[derive(Debug, Clone, Deserialize)]
pub struct NationalityResponse {
    #[serde(default)]
    pub count: i64,
    #[serde(default)]
    pub name: String,
    /// Ordered by descending probability.
    #[serde(default)]
    pub country: Vec<CountryProbability>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CountryProbability {
    pub country_id: String,
    #[serde(default)]
    pub probability: f64,
}

impl NationalityResponse {
    /// Most probable country code, or empty when the list is empty.
    pub fn top_country(&self) -> String {
        self.country
            .first()
            .map(|c| c.country_id.clone())
            .unwrap_or_default()
    }
}
