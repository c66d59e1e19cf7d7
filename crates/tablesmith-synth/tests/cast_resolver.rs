use tablesmith_core::{EnumCase, MemoryModel};
use tablesmith_synth::casts::{self, CastClass};
use tablesmith_synth::errors::SynthesisError;

fn model_with_status_enum() -> MemoryModel {
    MemoryModel::new().with_enum(
        "status",
        vec![EnumCase::pure("Active"), EnumCase::pure("Archived")],
    )
}

#[test]
fn date_tracked_wins_over_any_cast() {
    let model = MemoryModel::new();
    let class = casts::classify(Some("integer"), true, &model).expect("classifies");
    assert_eq!(class, CastClass::Date);
}

#[test]
fn missing_token_is_none() {
    let model = MemoryModel::new();
    let class = casts::classify(None, false, &model).expect("classifies");
    assert_eq!(class, CastClass::None);
}

#[test]
fn array_casts_classify_as_array() {
    let model = MemoryModel::new();
    for token in ["array", "json", "object", "collection", "encrypted:json"] {
        let class = casts::classify(Some(token), false, &model).expect("classifies");
        assert_eq!(class, CastClass::Array, "token {token}");
    }
}

#[test]
fn array_rule_wins_over_enum_lookup() {
    // `json` is in the array set even when an enum of the same name exists.
    let model = MemoryModel::new().with_enum("json", vec![EnumCase::pure("A")]);
    let class = casts::classify(Some("json"), false, &model).expect("classifies");
    assert_eq!(class, CastClass::Array);
}

#[test]
fn scalar_casts_classify_by_token() {
    let model = MemoryModel::new();
    assert_eq!(
        casts::classify(Some("int"), false, &model).expect("classifies"),
        CastClass::Integer
    );
    assert_eq!(
        casts::classify(Some("double"), false, &model).expect("classifies"),
        CastClass::Real
    );
    assert_eq!(
        casts::classify(Some("bool"), false, &model).expect("classifies"),
        CastClass::Boolean
    );
    assert_eq!(
        casts::classify(Some("immutable_datetime"), false, &model).expect("classifies"),
        CastClass::Date
    );
    assert_eq!(
        casts::classify(Some("timestamp"), false, &model).expect("classifies"),
        CastClass::Timestamp
    );
    assert_eq!(
        casts::classify(Some("encrypted"), false, &model).expect("classifies"),
        CastClass::String
    );
}

#[test]
fn decimal_cast_extracts_precision() {
    let model = MemoryModel::new();
    let class = casts::classify(Some("decimal:4"), false, &model).expect("classifies");
    assert_eq!(class, CastClass::Decimal(4));
}

#[test]
fn decimal_cast_without_precision_is_invalid() {
    let model = MemoryModel::new();
    let result = casts::classify(Some("decimal"), false, &model);
    assert!(matches!(result, Err(SynthesisError::InvalidCastSpec(_))));

    let result = casts::classify(Some("decimal:x"), false, &model);
    assert!(matches!(result, Err(SynthesisError::InvalidCastSpec(_))));
}

#[test]
fn enum_collection_requires_known_enum() {
    let model = model_with_status_enum();
    let class =
        casts::classify(Some("enum_collection:status"), false, &model).expect("classifies");
    assert_eq!(class, CastClass::EnumCollection("status".to_string()));

    let class =
        casts::classify(Some("enum_collection:missing"), false, &model).expect("classifies");
    assert_eq!(class, CastClass::None);
}

#[test]
fn known_enum_reference_classifies_as_enum() {
    let model = model_with_status_enum();
    let class = casts::classify(Some("status"), false, &model).expect("classifies");
    assert_eq!(class, CastClass::Enum("status".to_string()));
}

#[test]
fn unknown_token_falls_through_to_none() {
    let model = MemoryModel::new();
    let class = casts::classify(Some("custom_thing"), false, &model).expect("classifies");
    assert_eq!(class, CastClass::None);
}
