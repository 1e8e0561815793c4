//! Tests for the Describe derive macro - successful cases.

use fieldmark_validator::{Describe, Record};

/// A postal address.
#[derive(Describe, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[validate("required,pattern=^[0-9]{5}$")]
    zip_code: String,
}

#[derive(Describe, serde::Deserialize)]
#[schema(xml_name = "person")]
pub struct Person {
    /// Full name.
    #[validate("required,minlength=2")]
    #[errmsg("required=Tell us your name")]
    name: String,

    #[serde(rename = "@id")]
    #[schema(example = 7)]
    id: u32,

    address: Option<Address>,

    children: Vec<Person>,

    #[serde(skip)]
    cache: Vec<u8>,

    r#type: String,
}

fn main() {
    assert_eq!(<Person as Describe>::NAME, "Person");
    assert_eq!(<Person as Describe>::XML_NAME, Some("person"));
    assert_eq!(<Address as Describe>::DESCRIPTION, Some("A postal address."));

    let wire: Vec<_> = Person::fields().iter().map(|f| f.wire_name()).collect();
    assert_eq!(wire, ["name", "@id", "address", "children", "type"]);
    assert_eq!(Address::fields()[0].wire_name(), "zipCode");

    let person = Person {
        name: String::new(),
        id: 1,
        address: None,
        children: Vec::new(),
        cache: Vec::new(),
        r#type: String::new(),
    };
    assert_eq!(person.record_name(), "Person");
    let _ = &person.cache;

    let errors = fieldmark_validator::validate(&person);
    assert_eq!(errors[0].error, "Tell us your name");
}
