//! Rule semantics through the derive.

use chrono::{DateTime, TimeZone, Utc};
use fieldmark_validator::prelude::*;
use pretty_assertions::assert_eq;
use uuid::Uuid;

fn fields(errors: &[FieldError]) -> Vec<&str> {
    errors.iter().map(|e| e.field.as_str()).collect()
}

// ============================================================================
// REQUIRED
// ============================================================================

#[derive(Describe, Default)]
struct Everything {
    #[validate("required")]
    text: String,
    #[validate("required")]
    number: u32,
    #[validate("required")]
    flag: bool,
    #[validate("required")]
    list: Vec<String>,
    #[validate("required")]
    when: DateTime<Utc>,
    #[validate("required")]
    id: Uuid,
}

#[test]
fn required_fails_on_every_zero_value() {
    let errors = validate(&Everything::default());
    assert_eq!(fields(&errors), ["text", "number", "flag", "list", "when", "id"]);
    assert!(errors.iter().all(|e| e.error == "is required"));
}

#[test]
fn required_passes_on_non_zero_values() {
    let value = Everything {
        text: "x".into(),
        number: 1,
        flag: true,
        list: vec![String::new()],
        when: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        id: Uuid::from_u128(1),
    };
    assert!(validate(&value).is_empty());
}

// ============================================================================
// STRINGS
// ============================================================================

#[derive(Describe)]
struct Paint {
    #[validate("enum=red|green|blue")]
    colour: String,
    #[validate("pattern=^[0-9]+$")]
    code: String,
}

#[test]
fn enum_lists_allowed_values() {
    let errors = validate(&Paint {
        colour: "purple".into(),
        code: "123".into(),
    });
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].error, "must be one of: red, green, blue");

    assert!(
        validate(&Paint {
            colour: "red".into(),
            code: "123".into(),
        })
        .is_empty()
    );
}

#[test]
fn pattern_must_match() {
    let errors = validate(&Paint {
        colour: "green".into(),
        code: "12a".into(),
    });
    assert_eq!(fields(&errors), ["code"]);
    assert_eq!(errors[0].error, "must match the pattern ^[0-9]+$");
}

// ============================================================================
// NUMBERS
// ============================================================================

#[derive(Describe)]
struct Money {
    #[validate("multipleOf=0.25")]
    amount: f64,
    #[validate("multipleOf=5,enum=5|10|15")]
    step: u8,
}

#[test]
fn float_multiple_of_uses_scaled_comparison() {
    for (amount, ok) in [(1.00, true), (1.25, true), (1.10, false)] {
        let errors = validate(&Money { amount, step: 5 });
        assert_eq!(errors.is_empty(), ok, "amount {amount}");
    }
}

#[test]
fn integer_enum_compares_numbers() {
    let errors = validate(&Money {
        amount: 0.5,
        step: 20,
    });
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].rule, "enum");
}

#[derive(Describe)]
struct Ratio {
    #[validate("enum=0.1|0.2")]
    share: f32,
    #[validate("min=0.1,max=0.3")]
    cap: f32,
}

#[test]
fn f32_literals_compare_at_field_width() {
    assert!(validate(&Ratio { share: 0.1, cap: 0.1 }).is_empty());
    assert!(validate(&Ratio { share: 0.2, cap: 0.3 }).is_empty());

    let errors = validate(&Ratio { share: 0.3, cap: 0.31 });
    assert_eq!(fields(&errors), ["share", "cap"]);
}

// ============================================================================
// NESTING
// ============================================================================

#[derive(Describe, Default)]
struct Address {
    #[validate("required")]
    zip: String,
}

#[derive(Describe, Default)]
struct Customer {
    address: Address,
    billing: Option<Address>,
    #[validate("minItems=1")]
    previous: Vec<Address>,
}

#[test]
fn nested_paths_are_dot_joined() {
    let errors = validate(&Customer {
        address: Address::default(),
        billing: Some(Address::default()),
        previous: vec![
            Address {
                zip: "12345".into(),
            },
            Address::default(),
        ],
    });
    assert_eq!(fields(&errors), ["address.zip", "billing.zip", "previous[1].zip"]);
}

#[test]
fn absent_optional_record_is_not_walked() {
    let errors = validate(&Customer {
        address: Address {
            zip: "1".into(),
        },
        billing: None,
        previous: Vec::new(),
    });
    assert_eq!(fields(&errors), ["previous"]);
}

// ============================================================================
// COLLECTIONS
// ============================================================================

#[derive(Describe)]
struct Batch {
    #[validate("uniqueItems,maxlength=3")]
    tags: Vec<String>,
    stamps: Vec<DateTime<Utc>>,
    #[validate("emptyItemsAllowed")]
    ids: Vec<Uuid>,
}

#[test]
fn element_rules_and_uniqueness() {
    let errors = validate(&Batch {
        tags: vec!["a".into(), "long".into(), "a".into()],
        stamps: Vec::new(),
        ids: Vec::new(),
    });
    let got: Vec<_> = errors
        .iter()
        .map(|e| (e.field.as_str(), e.rule.as_ref()))
        .collect();
    assert_eq!(got, [("tags", "uniqueItems"), ("tags[1]", "maxlength")]);
}

#[test]
fn zero_special_items_fail_unless_allowed() {
    let errors = validate(&Batch {
        tags: Vec::new(),
        stamps: vec![Utc::now(), DateTime::<Utc>::default()],
        ids: vec![Uuid::nil()],
    });
    assert_eq!(fields(&errors), ["stamps"]);
    assert_eq!(errors[0].error, fieldmark_validator::rules::EMPTY_ITEM_MESSAGE);
}

// ============================================================================
// SERIALIZATION
// ============================================================================

#[test]
fn field_errors_serialize_two_keys() {
    let errors = validate(&Address::default());
    let json = serde_json::to_value(&errors).unwrap();
    assert_eq!(json, serde_json::json!([{"field": "zip", "error": "is required"}]));
}
