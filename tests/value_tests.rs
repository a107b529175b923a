use gendiff::{Scalar, Value};

#[test]
fn test_type_name() {
    assert_eq!(Value::null().type_name(), "null");
    assert_eq!(Value::bool(true).type_name(), "boolean");
    assert_eq!(Value::number(42).type_name(), "number");
    assert_eq!(Value::string("test").type_name(), "string");
    assert_eq!(Value::object::<&str, _>([]).type_name(), "object");
}

#[test]
fn test_scalar_display() {
    assert_eq!(Scalar::Null.to_string(), "null");
    assert_eq!(Scalar::Bool(false).to_string(), "false");
    assert_eq!(Scalar::Number(12345.0).to_string(), "12345");
    assert_eq!(Scalar::Number(0.25).to_string(), "0.25");
    assert_eq!(Scalar::String("blah blah".to_string()).to_string(), "blah blah");
}

#[test]
fn test_semantic_equals_primitives() {
    assert!(Value::null().semantic_equals(&Value::null()));
    assert!(Value::bool(true).semantic_equals(&Value::bool(true)));
    assert!(!Value::bool(true).semantic_equals(&Value::bool(false)));
    assert!(!Value::null().semantic_equals(&Value::bool(false)));
    assert!(!Value::string("1").semantic_equals(&Value::number(1)));
}

#[test]
fn test_semantic_equals_numbers() {
    assert!(Value::number(1.0).semantic_equals(&Value::number(1.0 + 1e-15)));
    assert!(!Value::number(1.0).semantic_equals(&Value::number(1.1)));
}

#[test]
fn test_semantic_equals_nested() {
    let a = Value::object([
        ("key", Value::string("value")),
        ("doge", Value::object([("wow", Value::string(""))])),
    ]);
    let b = Value::object([
        ("doge", Value::object([("wow", Value::string(""))])),
        ("key", Value::string("value")),
    ]);
    let c = Value::object([
        ("key", Value::string("value")),
        ("doge", Value::object([("wow", Value::string("so much"))])),
    ]);
    assert!(a.semantic_equals(&b));
    assert!(!a.semantic_equals(&c));
}

#[test]
fn test_as_object() {
    assert!(Value::number(1).as_object().is_none());
    let value = Value::object([("a", Value::number(1))]);
    assert_eq!(value.as_object().unwrap().len(), 1);
    assert!(value.is_nested());
}
