//! Integration tests for sluice-core

use proptest::prelude::*;
use sluice_core::*;

#[test]
fn test_schema_serialization() {
    let schema = Schema::with_columns(vec![
        Column::new("id", DataType::Int64).auto_increment(),
        Column::new("total", DataType::Float64).with_nullable(false),
    ]);

    let json = serde_json::to_string(&schema).unwrap();
    let restored: Schema = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, schema);
    assert!(restored.has_auto_increment());
}

#[test]
fn test_column_defaults() {
    let col = Column::new("note", DataType::Text);
    assert!(col.nullable);
    assert!(!col.auto_increment);
}

fn arb_identifier() -> impl Strategy<Value = String> {
    "[a-zA-Z_][a-zA-Z0-9_]{0,20}"
}

proptest! {
    #[test]
    fn prop_identifier_matches_any_casing(name in arb_identifier()) {
        prop_assert!(eq_ignore_case(&name, &name.to_uppercase()));
        prop_assert!(eq_ignore_case(&name.to_lowercase(), &name));
        prop_assert_eq!(normalize(&name), normalize(&name.to_uppercase()));
    }

    #[test]
    fn prop_schema_lookup_ignores_case(name in arb_identifier()) {
        let schema = Schema::with_columns(vec![Column::new(name.clone(), DataType::Int32)]);
        prop_assert!(schema.column(&name.to_uppercase()).is_some());
    }
}
