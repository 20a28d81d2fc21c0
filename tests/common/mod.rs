#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use people_enrichment_api::config::Config;
use people_enrichment_api::handlers::AppState;
use people_enrichment_api::memory_storage::InMemoryPersonStorage;
use people_enrichment_api::services::EnrichmentService;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Upstream stand-ins for the age, gender and nationality APIs.
pub struct Upstreams {
    pub agify: MockServer,
    pub genderize: MockServer,
    pub nationalize: MockServer,
}

impl Upstreams {
    pub async fn start() -> Self {
        Self {
            agify: MockServer::start().await,
            genderize: MockServer::start().await,
            nationalize: MockServer::start().await,
        }
    }

    pub fn config(&self) -> Config {
        Config {
            db_username: "test_user".to_string(),
            db_password: "test_pass".to_string(),
            db_name: "people_test".to_string(),
            db_host: "localhost".to_string(),
            db_port: 5432,
            db_max_connections: 5,
            server_addr: "localhost:8080".to_string(),
            agify_url: self.agify.uri(),
            genderize_url: self.genderize.uri(),
            nationalize_url: self.nationalize.uri(),
            enrichment_timeout: Duration::from_secs(5),
        }
    }

    pub fn service(&self) -> EnrichmentService {
        EnrichmentService::new(&self.config()).unwrap()
    }

    /// Mounts successful responses for `name` on all three services.
    pub async fn mount_known(&self, name: &str, age: i32, gender: &str, country: &str) {
        Mock::given(method("GET"))
            .and(path("/"))
            .and(query_param("name", name))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "count": 1000, "name": name, "age": age
            })))
            .mount(&self.agify)
            .await;

        Mock::given(method("GET"))
            .and(path("/"))
            .and(query_param("name", name))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "count": 1000, "name": name, "gender": gender, "probability": 0.99
            })))
            .mount(&self.genderize)
            .await;

        Mock::given(method("GET"))
            .and(path("/"))
            .and(query_param("name", name))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "count": 1000,
                "name": name,
                "country": [
                    {"country_id": country, "probability": 0.4},
                    {"country_id": "ZZ", "probability": 0.1}
                ]
            })))
            .mount(&self.nationalize)
            .await;
    }

    /// Fails the test if any service is called.
    pub async fn expect_no_calls(&self) {
        for server in [&self.agify, &self.genderize, &self.nationalize] {
            Mock::given(method("GET"))
                .respond_with(ResponseTemplate::new(500))
                .expect(0)
                .mount(server)
                .await;
        }
    }
}

pub fn app_state(upstreams: &Upstreams, storage: Arc<InMemoryPersonStorage>) -> Arc<AppState> {
    Arc::new(AppState {
        storage,
        enrichment: upstreams.service(),
    })
}
