use tablesmith_core::{EnumCase, MemoryModel, Value};
use tablesmith_synth::generators;
use tablesmith_synth::{FakeData, FakeSource};

#[test]
fn array_value_has_five_words() {
    let mut faker = FakeData::seeded(1);
    let value = generators::array_value(&mut faker);
    let items = value.as_array().expect("array shape");
    assert_eq!(items.len(), 5);
    assert!(items.iter().all(|item| item.as_str().is_some()));
}

#[test]
fn decimal_value_respects_bounds_and_precision() {
    let mut faker = FakeData::seeded(2);
    for _ in 0..50 {
        let value = generators::decimal_value(&mut faker, 2, 100.0);
        let float = value.as_f64().expect("float shape");
        assert!((0.0..=100.0).contains(&float));
        let scaled = float * 100.0;
        assert!((scaled - scaled.round()).abs() < 1e-6);
    }
}

#[test]
fn integer_value_is_a_single_digit() {
    let mut faker = FakeData::seeded(3);
    for _ in 0..50 {
        let value = generators::integer_value(&mut faker);
        let digit = value.as_i64().expect("int shape");
        assert!((0..=9).contains(&digit));
    }
}

#[test]
fn json_value_encodes_an_array_of_words() {
    let mut faker = FakeData::seeded(4);
    let value = generators::json_value(&mut faker);
    let text = value.as_str().expect("text shape");
    let parsed: serde_json::Value = serde_json::from_str(text).expect("valid json");
    let items = parsed.as_array().expect("json array");
    assert_eq!(items.len(), 5);
}

#[test]
fn string_value_meets_minimum_length() {
    let mut faker = FakeData::seeded(5);
    let value = generators::string_value(&mut faker, Some(40));
    assert!(value.as_str().expect("text shape").chars().count() >= 40);

    let value = generators::string_value(&mut faker, None);
    assert!(value.as_str().expect("text shape").chars().count() >= 10);
}

#[test]
fn enum_value_prefers_backing_scalars() {
    let model = MemoryModel::new().with_enum(
        "priority",
        vec![EnumCase::backed_int("Low", 1), EnumCase::backed_int("High", 2)],
    );
    let mut faker = FakeData::seeded(6);
    for _ in 0..20 {
        let value = generators::enum_value(&mut faker, &model, "priority").expect("resolves");
        assert!(matches!(value, Value::Int(1) | Value::Int(2)));
    }
}

#[test]
fn pure_enum_cases_yield_their_names() {
    let model = MemoryModel::new().with_enum(
        "status",
        vec![EnumCase::pure("Active"), EnumCase::pure("Archived")],
    );
    let mut faker = FakeData::seeded(7);
    let value = generators::enum_value(&mut faker, &model, "status").expect("resolves");
    let name = value.as_str().expect("text shape");
    assert!(name == "Active" || name == "Archived");
}

#[test]
fn unresolvable_enum_produces_no_value() {
    let model = MemoryModel::new();
    let mut faker = FakeData::seeded(8);
    assert!(generators::enum_value(&mut faker, &model, "missing").is_none());
    assert!(generators::enum_collection_value(&mut faker, &model, "missing").is_none());
}

#[test]
fn enum_collection_draws_five_cases() {
    let model = MemoryModel::new().with_enum("status", vec![EnumCase::pure("Only")]);
    let mut faker = FakeData::seeded(9);
    let value = generators::enum_collection_value(&mut faker, &model, "status").expect("resolves");
    let items = value.as_array().expect("array shape");
    assert_eq!(items.len(), 5);
}

#[test]
fn fake_source_email_contains_one_at_sign() {
    let mut faker = FakeData::seeded(10);
    let email = faker.safe_email();
    assert_eq!(email.matches('@').count(), 1);
}
