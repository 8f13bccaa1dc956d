//! End-to-end test for custom field create, update, archive, and listing
//! across service re-construction.

use fieldbook_fields::{CustomFieldService, FieldAttributes, FieldName, FieldsError};
use tempfile::TempDir;

fn name(s: &str) -> FieldName {
    FieldName::new(s).expect("valid field name")
}

fn attrs(pairs: &[(&str, serde_yaml::Value)]) -> FieldAttributes {
    pairs.iter().cloned().map(|(k, v)| (k.to_string(), v)).collect()
}

#[tokio::test]
async fn field_lifecycle_survives_reopen() {
    let tmp = TempDir::new().expect("temp dir");

    {
        let service = CustomFieldService::new(tmp.path());

        let options = serde_yaml::to_value(vec!["red", "blue"]).expect("yaml value");
        let created = service
            .create_field(&name("color"), attrs(&[("options", options.clone())]))
            .await
            .expect("create color");

        assert_eq!(created.field_name.as_str(), "color");
        assert!(!created.archived);
        assert_eq!(created.attributes.get("options"), Some(&options));

        service
            .update_field(
                &name("color"),
                attrs(&[("label", serde_yaml::Value::String("Colour".into()))]),
            )
            .await
            .expect("update color");

        service.archive_field(&name("color")).await.expect("archive color");
    }

    // A fresh service over the same root sees the persisted state
    let service = CustomFieldService::new(tmp.path());
    let field = service.get_field(&name("color")).await.expect("get color");

    assert!(field.archived);
    assert_eq!(
        field.attributes.get("label"),
        Some(&serde_yaml::Value::String("Colour".into()))
    );
    assert!(field.attributes.contains_key("options"));

    let listed = service.list_fields().await.expect("list");
    assert_eq!(listed.len(), 1);
}

#[tokio::test]
async fn duplicate_create_reports_conflict_with_code() {
    let tmp = TempDir::new().expect("temp dir");
    let service = CustomFieldService::new(tmp.path());

    service
        .create_field(&name("sku"), FieldAttributes::new())
        .await
        .expect("first create");

    let err = service
        .create_field(&name("sku"), FieldAttributes::new())
        .await
        .expect_err("second create must conflict");

    assert!(matches!(err, FieldsError::AlreadyExists { .. }));
    assert_eq!(err.code(), Some(100));
    assert_eq!(err.field_name(), Some("sku"));
}
