use tablesmith_core::{TypeDescriptor, TypeKind};
use tablesmith_synth::typemap;

#[test]
fn decimal_maps_to_numeric_with_precision_and_scale() {
    let descriptor = typemap::classify("decimal(8,2)", "decimal");
    assert_eq!(descriptor.kind, TypeKind::Numeric);
    assert_eq!(descriptor.precision, Some(8));
    assert_eq!(descriptor.scale, Some(2));
}

#[test]
fn zero_scale_is_treated_as_absent() {
    let descriptor = typemap::classify("decimal(8,0)", "decimal");
    assert_eq!(descriptor.precision, Some(8));
    assert_eq!(descriptor.scale, None);
}

#[test]
fn enum_values_are_extracted_verbatim() {
    let descriptor = typemap::classify("enum('a','b','c')", "enum");
    assert_eq!(descriptor.kind, TypeKind::Enum);
    assert_eq!(
        descriptor.values,
        Some(vec!["a".to_string(), "b".to_string(), "c".to_string()])
    );
}

#[test]
fn enum_values_with_embedded_commas_are_not_mis_split() {
    let descriptor = typemap::classify("enum('a,b','c')", "enum");
    assert_eq!(
        descriptor.values,
        Some(vec!["a,b".to_string(), "c".to_string()])
    );
}

#[test]
fn enum_values_collapse_doubled_quotes() {
    let descriptor = typemap::classify("enum('O''Brien','Smith')", "enum");
    assert_eq!(
        descriptor.values,
        Some(vec!["O'Brien".to_string(), "Smith".to_string()])
    );
}

#[test]
fn tinyint_1_is_boolean_regardless_of_type_name() {
    let descriptor = typemap::classify("tinyint(1)", "tinyint");
    assert_eq!(descriptor, TypeDescriptor::new(TypeKind::Boolean));
}

#[test]
fn bit_is_boolean() {
    assert_eq!(typemap::classify("bit", "bit").kind, TypeKind::Boolean);
}

#[test]
fn varchar_max_is_text() {
    assert_eq!(
        typemap::classify("varchar(max)", "varchar").kind,
        TypeKind::Text
    );
    assert_eq!(
        typemap::classify("nvarchar(max)", "nvarchar").kind,
        TypeKind::Text
    );
}

#[test]
fn varchar_extracts_length() {
    let descriptor = typemap::classify("varchar(255)", "varchar");
    assert_eq!(descriptor.kind, TypeKind::String);
    assert_eq!(descriptor.length, Some(255));
}

#[test]
fn datetime_extracts_precision() {
    let descriptor = typemap::classify("datetime(6)", "datetime");
    assert_eq!(descriptor.kind, TypeKind::Datetime);
    assert_eq!(descriptor.precision, Some(6));
}

#[test]
fn geometry_extracts_subtype_and_srid() {
    let descriptor = typemap::classify("geometry(point,4326)", "geometry");
    assert_eq!(descriptor.kind, TypeKind::Geometry);
    assert_eq!(descriptor.subtype.as_deref(), Some("point"));
    assert_eq!(descriptor.srid, Some(4326));
}

#[test]
fn bare_geometry_subtype_has_no_parameters() {
    let descriptor = typemap::classify("point", "point");
    assert_eq!(descriptor.kind, TypeKind::Geometry);
    assert_eq!(descriptor.subtype, None);
    assert_eq!(descriptor.srid, None);
}

#[test]
fn integer_family_collapses_to_integer() {
    for name in ["int", "int2", "int4", "int8", "smallint", "mediumint", "bigint"] {
        assert_eq!(typemap::classify(name, name).kind, TypeKind::Integer);
    }
}

#[test]
fn unknown_types_classify_as_unknown_without_parameters() {
    let descriptor = typemap::classify("interval(6)", "interval");
    assert_eq!(descriptor, TypeDescriptor::new(TypeKind::Unknown));
}

#[test]
fn no_parentheses_means_no_parameters() {
    let descriptor = typemap::classify("varchar", "varchar");
    assert_eq!(descriptor.kind, TypeKind::String);
    assert_eq!(descriptor.length, None);
}
