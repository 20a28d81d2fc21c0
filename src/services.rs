use crate::config::Config;
use crate::errors::AppError;
use crate::models::{AgeResponse, GenderResponse, NationalityResponse};
use reqwest::Client;
use serde::de::DeserializeOwned;

/// Client for the three public name-inference APIs (age, gender, nationality).
#[derive(Clone)]
pub struct EnrichmentService {
    client: Client,
    agify_url: String,
    genderize_url: String,
    nationalize_url: String,
}

impl EnrichmentService {
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(config.enrichment_timeout)
            .build()
            .map_err(|e| {
                AppError::InternalError(format!("Failed to create enrichment client: {}", e))
            })?;

        Ok(Self {
            client,
            agify_url: config.agify_url.clone(),
            genderize_url: config.genderize_url.clone(),
            nationalize_url: config.nationalize_url.clone(),
        })
    }

    /// Looks up the inferred age for a name. Returns 0 when the service has no data.
    pub async fn lookup_age(&self, name: &str) -> Result<i32, AppError> {
        let response: AgeResponse = self.fetch("agify", &self.agify_url, name).await?;
        Ok(response.age.unwrap_or(0))
    }

    /// Looks up the inferred gender for a name. Returns "" when the service has no data.
    pub async fn lookup_gender(&self, name: &str) -> Result<String, AppError> {
        let response: GenderResponse = self.fetch("genderize", &self.genderize_url, name).await?;
        Ok(response.gender.unwrap_or_default())
    }

    /// Looks up the most probable country code for a name. Returns "" for an empty list.
    pub async fn lookup_nationality(&self, name: &str) -> Result<String, AppError> {
        let response: NationalityResponse =
            self.fetch("nationalize", &self.nationalize_url, name).await?;
        Ok(response.top_country())
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        service: &str,
        base_url: &str,
        name: &str,
    ) -> Result<T, AppError> {
        let url = format!("{}/", base_url);
        tracing::debug!("Querying {} for name: {}", service, name);

        let response = self
            .client
            .get(&url)
            .query(&[("name", name)])
            .send()
            .await
            .map_err(|e| AppError::ExternalApiError(format!("{} request failed: {}", service, e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::warn!("{} returned error {}: {}", service, status, error_text);
            return Err(AppError::ExternalApiError(format!(
                "{} returned status {}: {}",
                service, status, error_text
            )));
        }

        response.json::<T>().await.map_err(|e| {
            AppError::ExternalApiError(format!("Failed to parse {} response: {}", service, e))
        })
    }
}
