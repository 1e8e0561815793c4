use fieldmark_schema::{Dialect, SchemaGenerator, SchemaOrRef};
use fieldmark_validator::Describe;
use pretty_assertions::assert_eq;
use serde::Deserialize;
use serde_json::json;

/// A postal address.
#[derive(Describe, Deserialize)]
#[allow(dead_code)]
struct Address {
    #[validate("required,minlength=1")]
    street: String,
    #[validate("pattern=^[0-9]{5}$")]
    zip: String,
}

#[derive(Describe, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
struct Order {
    #[validate("required")]
    order_id: uuid::Uuid,
    shipping_address: Address,
    /// Where the invoice goes.
    billing_address: Option<Address>,
    #[validate("minItems=1,uniqueItems,enum=new|gift|rush")]
    tags: Vec<String>,
    #[validate("min=0.01,multipleOf=0.01")]
    #[schema(example = "19.99")]
    total: f64,
    placed_at: chrono::DateTime<chrono::Utc>,
}

#[test]
fn nested_record_is_registered_once() {
    let mut generator = SchemaGenerator::new(Dialect::Json);
    let body = generator.generate::<Order>();
    let components = generator.finish();

    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        json!({"$ref": "#/components/schemas/Order"})
    );
    assert_eq!(components.len(), 2);
    assert!(components.contains("Address"));

    let order = serde_json::to_value(components.get("Order").unwrap()).unwrap();
    assert_eq!(
        order,
        json!({
            "type": "object",
            "properties": {
                "orderId": {"type": "string", "format": "uuid"},
                "shippingAddress": {"$ref": "#/components/schemas/Address"},
                "billingAddress": {
                    "description": "Where the invoice goes.",
                    "allOf": [{"$ref": "#/components/schemas/Address"}],
                    "nullable": true,
                },
                "tags": {
                    "type": "array",
                    "items": {"type": "string", "enum": ["new", "gift", "rush"]},
                    "minItems": 1,
                    "uniqueItems": true,
                },
                "total": {
                    "type": "number",
                    "format": "double",
                    "minimum": 0.01,
                    "multipleOf": 0.01,
                    "example": 19.99,
                },
                "placedAt": {"type": "string", "format": "date-time"},
            },
            "required": ["orderId"],
        })
    );
}

#[test]
fn address_constraints_and_docs() {
    let mut generator = SchemaGenerator::new(Dialect::Json);
    generator.register::<Address>();
    let components = generator.finish();

    assert_eq!(
        components.to_value().unwrap(),
        json!({
            "schemas": {
                "Address": {
                    "type": "object",
                    "description": "A postal address.",
                    "properties": {
                        "street": {"type": "string", "minLength": 1},
                        "zip": {"type": "string", "pattern": "^[0-9]{5}$"},
                    },
                    "required": ["street"],
                },
            },
        })
    );
}

#[derive(Describe)]
#[allow(dead_code)]
struct TreeNode {
    label: String,
    children: Vec<TreeNode>,
    parent: Option<Box<TreeNode>>,
}

#[test]
fn recursive_records_terminate() {
    let mut generator = SchemaGenerator::new(Dialect::Json);
    generator.generate::<TreeNode>();
    let components = generator.finish();

    assert_eq!(components.len(), 1);
    let node = serde_json::to_value(components.get("TreeNode").unwrap()).unwrap();
    assert_eq!(
        node["properties"]["children"],
        json!({"type": "array", "items": {"$ref": "#/components/schemas/TreeNode"}})
    );
    assert_eq!(
        node["properties"]["parent"],
        json!({"allOf": [{"$ref": "#/components/schemas/TreeNode"}], "nullable": true})
    );
}

mod other {
    use fieldmark_validator::Describe;

    #[derive(Describe)]
    #[allow(dead_code)]
    pub struct Address {
        pub line: String,
    }
}

#[derive(Describe)]
#[allow(dead_code)]
struct Shipment {
    from: Address,
    to: other::Address,
}

#[test]
fn same_short_name_gets_a_suffix() {
    let mut generator = SchemaGenerator::new(Dialect::Json);
    generator.generate::<Shipment>();
    let components = generator.finish();

    let names: Vec<_> = components.iter().map(|(name, _)| name).collect();
    assert_eq!(names, ["Shipment", "Address", "Address2"]);
}

#[derive(Describe, Deserialize)]
#[serde(rename = "item")]
#[allow(dead_code)]
struct Item {
    #[serde(rename = "@id")]
    #[validate("required")]
    id: u32,
    #[validate("maxlength=40")]
    name: String,
}

#[test]
fn xml_dialect_places_attributes() {
    let mut generator = SchemaGenerator::new(Dialect::Xml);
    let body = generator.generate::<Item>();
    let components = generator.finish();

    let item = components.resolve(&body).unwrap();
    assert_eq!(
        serde_json::to_value(item).unwrap(),
        json!({
            "type": "object",
            "properties": {
                "id": {"type": "integer", "format": "int64", "xml": {"attribute": true}},
                "name": {"type": "string", "maxLength": 40},
            },
            "required": ["id"],
            "xml": {"name": "item"},
        })
    );
}

#[test]
fn json_dialect_keeps_wire_names() {
    let mut generator = SchemaGenerator::new(Dialect::Json);
    generator.generate::<Item>();
    let components = generator.finish();

    let item = components.get("Item").unwrap();
    assert!(item.properties.contains_key("@id"));
    assert!(item.xml.is_none());
}

#[test]
fn scalars_are_inline() {
    let mut generator = SchemaGenerator::new(Dialect::Json);
    assert!(matches!(generator.generate::<Vec<i16>>(), SchemaOrRef::Schema(_)));
    assert!(generator.finish().is_empty());
}
