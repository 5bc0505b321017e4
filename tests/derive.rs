#![cfg(feature = "derive")]

use tesserae_responsive::{
    Breakpoint, IntoPropertyBag, PropertySpec, PropertyValues, Responsive, StyleFragment, Value,
    compile_infallible,
};

#[derive(IntoPropertyBag)]
struct StackProps {
    inline: Option<PropertySpec>,
    #[property(rename = "between")]
    gap: Option<PropertySpec>,
    align: PropertySpec,
    #[property(skip)]
    #[allow(dead_code)]
    label: String,
}

#[derive(IntoPropertyBag)]
#[property_value(u32)]
struct GridProps {
    columns: Responsive<u32>,
    gutter: Option<Responsive<u32>>,
}

#[test]
fn test_derive_collects_present_fields() {
    let props = StackProps {
        inline: None,
        gap: Some(Responsive::new().xs(1).md(3).into()),
        align: PropertySpec::scalar("center"),
        label: "toolbar".to_string(),
    };

    let bag = props.into_property_bag();
    let names: Vec<&str> = bag.iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["between", "align"]);
    assert_eq!(
        bag.get("between").and_then(|spec| spec.resolve_at(Breakpoint::Lg)),
        Some(&Value::from(3))
    );
}

#[test]
fn test_derive_with_custom_value_type() {
    let props = GridProps {
        columns: Responsive::new().xs(1u32).md(2u32).xl(4u32),
        gutter: None,
    };

    let bag = props.into_property_bag();
    assert_eq!(bag.len(), 1);

    let sheet = compile_infallible(&bag, |values: &PropertyValues<u32>, _from, _until| {
        values
            .iter()
            .map(|(name, columns)| (name.clone(), *columns))
            .collect::<StyleFragment>()
    });

    let columns: Vec<Option<&serde_json::Value>> = sheet
        .iter()
        .map(|(_, fragment)| fragment.get("columns"))
        .collect();
    assert_eq!(
        columns,
        vec![
            Some(&serde_json::json!(1)),
            Some(&serde_json::json!(2)),
            Some(&serde_json::json!(4)),
        ]
    );
}
