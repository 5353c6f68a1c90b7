//! Phase 4 tests: service boundary, configuration files and catalog loading
//! from disk.

use std::path::Path;
use std::sync::Arc;
use std::thread;

use faq_match::{
    FaqCatalog, FaqEntry, FaqService, HealthStatus, InitializationError, MatcherConfig,
};

// ==================== Helpers ====================

const CATALOG_JSON: &str = r#"{
  "faqs": [
    {"id": 1, "question": "How do I reset my password?", "answer": "Use the reset link.", "category": "account"},
    {"id": 2, "question": "How can I track my order?", "answer": "Open Orders > Track.", "category": "orders"}
  ]
}"#;

fn write_catalog(dir: &Path, json: &str) -> std::path::PathBuf {
    let path = dir.join("faqs.json");
    std::fs::write(&path, json).unwrap();
    path
}

fn config_for(catalog: std::path::PathBuf) -> MatcherConfig {
    MatcherConfig {
        catalog,
        ..MatcherConfig::default()
    }
}

// ==================== Startup Tests ====================

#[test]
fn test_service_starts_from_disk() {
    let _ = env_logger::builder().is_test(true).try_init();
    let dir = tempfile::tempdir().unwrap();
    let service = FaqService::start(config_for(write_catalog(dir.path(), CATALOG_JSON)));

    assert!(service.is_available());
    let health = service.health();
    assert_eq!(health.status, HealthStatus::Healthy);
    assert!(health.chatbot_initialized);
    assert_eq!(health.faq_count, 2);

    let r = service.chat("where is my order? I want to track it").unwrap();
    assert_eq!(r.answer, "Open Orders > Track.");
    assert_eq!(r.category.as_deref(), Some("orders"));
}

#[test]
fn test_service_unavailable_on_malformed_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let service = FaqService::start(config_for(write_catalog(dir.path(), "{\"faqs\": [")));

    let err = service.chat("reset password").unwrap_err();
    assert!(err.reason.contains("malformed"), "reason: {}", err.reason);
    assert!(!service.health().chatbot_initialized);
}

#[test]
fn test_service_unavailable_on_empty_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let service = FaqService::start(config_for(write_catalog(dir.path(), r#"{"faqs": []}"#)));

    let err = service.entries().unwrap_err();
    assert!(err.reason.contains("no FAQs"), "reason: {}", err.reason);
}

#[test]
fn test_service_health_serializes_like_status_endpoint() {
    let dir = tempfile::tempdir().unwrap();
    let service = FaqService::start(config_for(write_catalog(dir.path(), CATALOG_JSON)));
    let json = serde_json::to_value(service.health()).unwrap();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["chatbot_initialized"], true);
    assert_eq!(json["faq_count"], 2);
}

// ==================== Entries Tests ====================

#[test]
fn test_service_entries_in_catalog_order() {
    let dir = tempfile::tempdir().unwrap();
    let service = FaqService::start(config_for(write_catalog(dir.path(), CATALOG_JSON)));
    let entries = service.entries().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].id, 1);
    assert_eq!(entries[1].question, "How can I track my order?");
}

// ==================== Reload Tests ====================

#[test]
fn test_reload_swaps_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_catalog(dir.path(), CATALOG_JSON);
    let service = FaqService::start(config_for(path.clone()));
    assert_eq!(service.health().faq_count, 2);

    std::fs::write(
        &path,
        r#"{"faqs": [{"id": 5, "question": "Do you ship internationally?", "answer": "Yes."}]}"#,
    )
    .unwrap();
    service.reload_from_disk().unwrap();

    assert_eq!(service.health().faq_count, 1);
    assert_eq!(service.chat("international shipping").unwrap().answer, "Yes.");
}

#[test]
fn test_failed_reload_keeps_previous_core() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_catalog(dir.path(), CATALOG_JSON);
    let service = FaqService::start(config_for(path.clone()));

    std::fs::write(&path, r#"{"faqs": []}"#).unwrap();
    let err = service.reload_from_disk().unwrap_err();
    assert!(matches!(err, InitializationError::EmptyCatalog));

    assert_eq!(service.health().faq_count, 2);
    assert_eq!(
        service.chat("reset my password").unwrap().answer,
        "Use the reset link."
    );
}

#[test]
fn test_queries_during_reload_see_a_complete_core() {
    let dir = tempfile::tempdir().unwrap();
    let service = Arc::new(FaqService::start(config_for(write_catalog(
        dir.path(),
        CATALOG_JSON,
    ))));

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let service = Arc::clone(&service);
            thread::spawn(move || {
                for _ in 0..200 {
                    let r = service.chat("reset my password").unwrap();
                    assert!(
                        r.answer == "Use the reset link." || r.answer == "Click 'Forgot password'.",
                        "unexpected answer {:?}",
                        r.answer
                    );
                }
            })
        })
        .collect();

    for i in 0..20 {
        let answer = if i % 2 == 0 {
            "Click 'Forgot password'."
        } else {
            "Use the reset link."
        };
        let catalog =
            FaqCatalog::new(vec![FaqEntry::new(1, "How do I reset my password?", answer)])
                .unwrap();
        service.reload(catalog).unwrap();
    }

    for r in readers {
        r.join().unwrap();
    }
}

// ==================== Configuration Tests ====================

#[test]
fn test_config_file_resolves_catalog_relative_to_itself() {
    let dir = tempfile::tempdir().unwrap();
    write_catalog(dir.path(), CATALOG_JSON);
    let config_path = dir.path().join("faqbot.toml");
    std::fs::write(
        &config_path,
        "catalog = \"faqs.json\"\nthreshold = 0.2\n[replies]\nempty = \"Ask away.\"\n",
    )
    .unwrap();

    let config = MatcherConfig::load(&config_path).unwrap();
    assert_eq!(config.catalog, dir.path().join("faqs.json"));
    assert_eq!(config.threshold, 0.2);

    let service = FaqService::start(config);
    assert_eq!(service.chat("  ").unwrap().answer, "Ask away.");
}

#[test]
fn test_config_missing_file_is_fatal() {
    let err = MatcherConfig::load("/no/such/faqbot.toml").unwrap_err();
    assert!(matches!(err, InitializationError::Config(_)));
}

#[test]
fn test_bundled_example_config_loads() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/faqbot.toml");
    let config = MatcherConfig::load(&path).unwrap();
    let service = FaqService::start(config);
    assert!(service.is_available());
    assert_eq!(service.health().faq_count, 12);
}

#[test]
fn test_missing_lemma_resource_makes_service_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = config_for(write_catalog(dir.path(), CATALOG_JSON));
    config.normalizer.lemma_overrides = Some(dir.path().join("missing.tsv"));

    let service = FaqService::start(config);
    let err = service.chat("hello").unwrap_err();
    assert!(err.reason.contains("normalization resource"));
}
