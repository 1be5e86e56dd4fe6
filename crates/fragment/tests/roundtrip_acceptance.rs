use fragment::{codec, FragmentUriGenerator, RequestHead};
use proptest::prelude::*;
use serde_json::Value;
use shared::domain::ControllerReference;

#[test]
fn listener_contract_fields_are_recoverable() {
    let reference = ControllerReference::new("Cart::widget")
        .with_attribute("user", "alice")
        .with_attribute("limit", 10)
        .with_query_param("source", "sidebar");
    let context = RequestHead::new("https", "shop.example", "html").with_base_path("/store");

    let uri = FragmentUriGenerator::new()
        .generate(&reference, &context, true)
        .expect("uri");

    assert!(uri.starts_with("https://shop.example/store/_fragment?"));

    let query = uri.split_once('?').expect("query").1;
    let outer = codec::decode(query);
    assert_eq!(outer.get("source").map(String::as_str), Some("sidebar"));

    let attributes = codec::decode(outer.get("_path").expect("_path token"));
    assert_eq!(
        attributes.get("_controller").map(String::as_str),
        Some("Cart::widget")
    );
    assert_eq!(attributes.get("_format").map(String::as_str), Some("html"));
    assert_eq!(attributes.get("user").map(String::as_str), Some("alice"));
    assert_eq!(attributes.get("limit").map(String::as_str), Some("10"));
}

fn scalar_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "[ -~]{0,16}".prop_map(Value::from),
    ]
}

fn composite_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(serde_json::json!({"nested": 1})),
        Just(serde_json::json!(["a", "b"])),
        Just(Value::Null),
    ]
}

fn attribute_entries() -> impl Strategy<Value = Vec<(String, Value)>> {
    proptest::collection::vec(("[a-z][a-z0-9]{0,7}", scalar_value()), 0..6)
}

proptest! {
    #[test]
    fn scalar_attributes_round_trip(
        entries in attribute_entries(),
        controller in "[A-Za-z]{1,8}::[a-z]{1,8}",
    ) {
        let mut reference = ControllerReference::new(controller.clone());
        for (key, value) in entries {
            reference = reference.with_attribute(key, value);
        }

        let context = RequestHead::new("http", "localhost", "html");
        let uri = FragmentUriGenerator::new()
            .generate(&reference, &context, true)
            .expect("scalar attributes must serialize");

        let query = uri.split_once('?').expect("query").1;
        let outer = codec::decode(query);
        let decoded = codec::decode(outer.get("_path").expect("_path token"));

        prop_assert_eq!(
            decoded.get("_controller").map(String::as_str),
            Some(controller.as_str())
        );
        prop_assert_eq!(decoded.get("_format").map(String::as_str), Some("html"));
        for (key, value) in &reference.attributes {
            let canonical = codec::scalar_to_string(value).expect("scalar");
            prop_assert_eq!(decoded.get(key).map(String::as_str), Some(canonical.as_str()));
        }
    }

    #[test]
    fn composite_attribute_is_always_rejected(
        entries in attribute_entries(),
        bad in composite_value(),
        bad_key in "[a-z]{1,6}_x",
    ) {
        let mut reference = ControllerReference::new("Hello::index");
        for (key, value) in entries {
            reference = reference.with_attribute(key, value);
        }
        reference = reference.with_attribute(bad_key.clone(), bad);

        let context = RequestHead::new("http", "localhost", "html");
        let err = FragmentUriGenerator::new()
            .generate(&reference, &context, true)
            .expect_err("composite value must be rejected");

        prop_assert_eq!(err.key, bad_key);
    }
}
