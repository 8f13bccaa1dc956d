//! End-to-end test for the template lifecycle against the custom field
//! registry: seed fields, build a template over them, mutate the field set,
//! and verify persistence across service re-construction.

use std::collections::BTreeSet;
use std::sync::Arc;

use fieldbook_fields::{CustomFieldService, FieldAttributes, FieldName};
use fieldbook_templates::{DataTemplateService, TemplateAttributes, TemplateKey, TemplatePatch, TemplatesError};
use tempfile::TempDir;

fn name(s: &str) -> FieldName {
    FieldName::new(s).expect("valid field name")
}

fn key(s: &str) -> TemplateKey {
    TemplateKey::new(s).expect("valid template key")
}

fn names(list: &[&str]) -> BTreeSet<FieldName> {
    list.iter().map(|s| name(s)).collect()
}

#[tokio::test]
async fn shirt_template_lifecycle() {
    let tmp = TempDir::new().expect("temp dir");
    let fields = Arc::new(CustomFieldService::new(tmp.path()));
    let templates = DataTemplateService::new(tmp.path(), fields.clone());

    // Seed a "color" field with options
    let options = serde_yaml::to_value(vec!["red", "blue"]).expect("yaml value");
    let mut attrs = FieldAttributes::new();
    attrs.insert("options".to_string(), options.clone());
    fields
        .create_field(&name("color"), attrs)
        .await
        .expect("create color field");

    let color = fields.get_field(&name("color")).await.expect("get color");
    assert_eq!(color.field_name.as_str(), "color");
    assert_eq!(color.attributes.get("options"), Some(&options));
    assert!(!color.archived);

    // A template referencing a missing field never lands in the store
    let err = templates
        .create(&key("shirt"), names(&["color", "fabric"]), TemplateAttributes::new())
        .await
        .expect_err("dangling reference must abort the create");
    assert!(matches!(err, TemplatesError::UnknownCustomField { .. }));
    assert!(!templates.exists(&key("shirt")).await.expect("exists"));

    // With only valid references the create goes through
    let shirt = templates
        .create(&key("shirt"), names(&["color"]), TemplateAttributes::new())
        .await
        .expect("create shirt template");
    assert_eq!(shirt.custom_fields, names(&["color"]));
    assert!(templates.exists(&key("shirt")).await.expect("exists"));

    // Grow the schema shape through the add view
    fields
        .create_field(&name("size"), FieldAttributes::new())
        .await
        .expect("create size field");
    let updated = templates
        .update(&key("shirt"), TemplatePatch::new().add_fields(names(&["size"])))
        .await
        .expect("update shirt template");
    assert_eq!(updated.custom_fields, names(&["color", "size"]));

    // Everything survives re-opening the services over the same root
    drop(templates);
    let fields = Arc::new(CustomFieldService::new(tmp.path()));
    let templates = DataTemplateService::new(tmp.path(), fields);

    let reloaded = templates.get(&key("shirt")).await.expect("get shirt");
    assert_eq!(reloaded.custom_fields, names(&["color", "size"]));

    templates.delete(&key("shirt")).await.expect("delete shirt");
    assert!(!templates.exists(&key("shirt")).await.expect("exists"));
}
