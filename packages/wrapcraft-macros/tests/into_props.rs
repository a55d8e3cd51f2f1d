#![allow(dead_code)]

use wrapcraft::{IntoProps, PropValue, Props};

#[derive(IntoProps)]
struct Unit;

#[derive(IntoProps)]
struct Button {
    label: String,
    #[prop(rename = "aria-label")]
    aria_label: Option<String>,
    #[prop(skip)]
    on_click: fn(),
    r#type: &'static str,
    width: u32,
}

#[derive(IntoProps)]
struct Generic<T> {
    value: T,
}

#[derive(IntoProps)]
struct Pair<A, B>
where
    A: Clone,
{
    first: A,
    second: Option<B>,
}

#[derive(IntoProps)]
struct WithLifetime<'a> {
    title: &'a str,
}

fn noop() {}

#[test]
fn unit() {
    assert!(Props::from(Unit).is_empty());
}

#[test]
fn named_fields() {
    let props = Props::from(Button {
        label: "Save".to_string(),
        aria_label: None,
        on_click: noop,
        r#type: "submit",
        width: 10,
    });
    assert_eq!(
        props.keys().collect::<Vec<_>>(),
        ["label", "aria-label", "type", "width"]
    );
    assert_eq!(props["label"].as_str(), Some("Save"));
    assert!(props["aria-label"].is_null());
    assert_eq!(props["width"], PropValue::Int(10));
}

#[test]
fn generics() {
    assert_eq!(Props::from(Generic { value: 1.5 })["value"], PropValue::Float(1.5));

    let title = String::from("hi");
    let props = Props::from(WithLifetime { title: &title });
    assert_eq!(props["title"].as_str(), Some("hi"));
}

#[test]
fn generic_fields_with_where_clause() {
    let props = Props::from(Pair {
        first: "left",
        second: Some(2u32),
    });
    assert_eq!(props.keys().collect::<Vec<_>>(), ["first", "second"]);
    assert_eq!(props["first"].as_str(), Some("left"));
    assert_eq!(props["second"], PropValue::Int(2));

    let props = Props::from(Pair::<bool, String> {
        first: true,
        second: None,
    });
    assert!(props["second"].is_null());
}
