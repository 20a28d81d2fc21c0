/// Tests for the enrichment client and the sequential enrichment workflow
/// against mocked age, gender and nationality APIs.
mod common;

use common::Upstreams;
use people_enrichment_api::enrichment::enrich_person;
use people_enrichment_api::errors::AppError;
use people_enrichment_api::models::Person;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

fn dmitriy() -> Person {
    Person {
        name: "Dmitriy".to_string(),
        surname: "Ivanov".to_string(),
        patronymic: Some("Vasilevich".to_string()),
    }
}

#[tokio::test]
async fn test_lookups_decode_each_service() {
    let upstreams = Upstreams::start().await;
    upstreams.mount_known("Dmitriy", 43, "male", "UA").await;
    let service = upstreams.service();

    assert_eq!(service.lookup_age("Dmitriy").await.unwrap(), 43);
    assert_eq!(service.lookup_gender("Dmitriy").await.unwrap(), "male");
    assert_eq!(service.lookup_nationality("Dmitriy").await.unwrap(), "UA");
}

#[tokio::test]
async fn test_missing_data_is_not_an_error() {
    let upstreams = Upstreams::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 0, "name": "Zzyzx", "age": null
        })))
        .mount(&upstreams.agify)
        .await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 0, "name": "Zzyzx", "gender": null, "probability": 0.0
        })))
        .mount(&upstreams.genderize)
        .await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 0, "name": "Zzyzx", "country": []
        })))
        .mount(&upstreams.nationalize)
        .await;

    let service = upstreams.service();
    assert_eq!(service.lookup_age("Zzyzx").await.unwrap(), 0);
    assert_eq!(service.lookup_gender("Zzyzx").await.unwrap(), "");
    assert_eq!(service.lookup_nationality("Zzyzx").await.unwrap(), "");
}

#[tokio::test]
async fn test_name_is_query_encoded() {
    let upstreams = Upstreams::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("name", "Anna Maria&x=1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 5, "name": "Anna Maria&x=1", "age": 31
        })))
        .expect(1)
        .mount(&upstreams.agify)
        .await;

    let age = upstreams.service().lookup_age("Anna Maria&x=1").await.unwrap();
    assert_eq!(age, 31);
}

#[tokio::test]
async fn test_upstream_error_status_is_external_error() {
    let upstreams = Upstreams::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(429).set_body_json(json!({"error": "Request limit reached"})),
        )
        .mount(&upstreams.genderize)
        .await;

    let err = upstreams.service().lookup_gender("Dmitriy").await.unwrap_err();
    assert!(matches!(err, AppError::ExternalApiError(ref msg) if msg.contains("429")));
}

#[tokio::test]
async fn test_unexpected_shape_is_external_error() {
    let upstreams = Upstreams::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&upstreams.nationalize)
        .await;

    let err = upstreams
        .service()
        .lookup_nationality("Dmitriy")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::ExternalApiError(_)));
}

#[tokio::test]
async fn test_enrich_person_merges_all_three() {
    let upstreams = Upstreams::start().await;
    upstreams.mount_known("Dmitriy", 43, "male", "UA").await;

    let enriched = enrich_person(&upstreams.service(), dmitriy()).await.unwrap();

    assert_eq!(enriched.person, dmitriy());
    assert_eq!(enriched.age, 43);
    assert_eq!(enriched.gender, "male");
    assert_eq!(enriched.nationality, "UA");
}

#[tokio::test]
async fn test_enrich_person_aborts_on_first_failure() {
    let upstreams = Upstreams::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&upstreams.agify)
        .await;
    for server in [&upstreams.genderize, &upstreams.nationalize] {
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(server)
            .await;
    }

    let err = enrich_person(&upstreams.service(), dmitriy())
        .await
        .unwrap_err();
    assert!(matches!(err.root(), AppError::ExternalApiError(_)));
    assert!(err.to_string().starts_with("age lookup"));
}
