use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{DeriveInput, Field, parse_macro_input};

use crate::support::{attrs, diag, serde_attrs, utils};

const SCHEMA_FIELD_KEYS: &[&str] = &["example", "default", "skip"];
const SCHEMA_CONTAINER_KEYS: &[&str] = &["xml_name"];

pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand(&input) {
        Ok(ts) => ts.into(),
        Err(e) => diag::to_compile_error(e),
    }
}

/// Everything the generated code needs about one field.
struct FieldSpec<'a> {
    field: &'a Field,
    name: String,
    wire_name: String,
    rules: Option<syn::LitStr>,
    messages: Option<syn::LitStr>,
    description: String,
    example: Option<String>,
    default: Option<String>,
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let struct_name = &input.ident;
    let fields = utils::require_named_fields(input)?;

    let container_serde = serde_attrs::parse(&input.attrs)?;
    let container_schema = attrs::parse_attrs(&input.attrs, "schema")?;
    container_schema.ensure_known("schema", SCHEMA_CONTAINER_KEYS)?;

    let mut specs = Vec::with_capacity(fields.named.len());
    let mut errors = Vec::new();
    for field in &fields.named {
        match parse_field(field, container_serde.rename_all) {
            Ok(Some(spec)) => specs.push(spec),
            Ok(None) => {}
            Err(err) => errors.push(err),
        }
    }
    if let Some(err) = diag::combine(errors) {
        return Err(err);
    }

    let name = struct_name.to_string();
    let xml_name = container_schema
        .get_literal_text("xml_name")
        .or(container_serde.rename);
    let xml_name = option_str(xml_name.as_deref());
    let description = utils::doc_string(&input.attrs);
    let description = option_str((!description.is_empty()).then_some(description.as_str()));

    let descriptors = specs.iter().map(|spec| descriptor_tokens(spec, &name));
    let accessors = specs.iter().enumerate().map(|(index, spec)| {
        let ident = &spec.field.ident;
        quote!(#index => ::fieldmark_validator::Inspect::inspect(&self.#ident),)
    });

    Ok(quote! {
        impl ::fieldmark_validator::Record for #struct_name {
            fn record_name(&self) -> &'static str {
                #name
            }

            fn descriptors(&self) -> &'static [::fieldmark_validator::FieldDescriptor] {
                <Self as ::fieldmark_validator::Describe>::fields()
            }

            fn field(&self, index: usize) -> ::fieldmark_validator::Value<'_> {
                match index {
                    #(#accessors)*
                    _ => ::fieldmark_validator::Value::Null,
                }
            }
        }

        impl ::fieldmark_validator::Inspect for #struct_name {
            fn shape() -> ::fieldmark_validator::Shape {
                ::fieldmark_validator::Shape::Record(
                    ::fieldmark_validator::core::RecordRef::of::<Self>(),
                )
            }

            fn inspect(&self) -> ::fieldmark_validator::Value<'_> {
                ::fieldmark_validator::Value::Record(self)
            }
        }

        impl ::fieldmark_validator::Describe for #struct_name {
            const NAME: &'static str = #name;
            const XML_NAME: ::core::option::Option<&'static str> = #xml_name;
            const DESCRIPTION: ::core::option::Option<&'static str> = #description;

            fn fields() -> &'static [::fieldmark_validator::FieldDescriptor] {
                use ::std::sync::OnceLock;

                static FIELDS: OnceLock<::std::vec::Vec<::fieldmark_validator::FieldDescriptor>> =
                    OnceLock::new();
                FIELDS.get_or_init(|| ::std::vec![#(#descriptors),*])
            }
        }
    })
}

fn parse_field(
    field: &Field,
    rename_all: Option<serde_attrs::RenameRule>,
) -> syn::Result<Option<FieldSpec<'_>>> {
    let Some(ident) = field.ident.as_ref() else {
        return Err(diag::error_spanned(field, "expected a named field"));
    };

    let serde = serde_attrs::parse(&field.attrs)?;
    let schema = attrs::parse_attrs(&field.attrs, "schema")?;
    schema.ensure_known("schema", SCHEMA_FIELD_KEYS)?;
    let rules = attrs::parse_string_attr(&field.attrs, "validate")?;
    let messages = attrs::parse_string_attr(&field.attrs, "errmsg")?;

    if serde.skip || schema.has_flag("skip") {
        if let Some(rules) = &rules {
            return Err(diag::error_spanned(
                rules,
                "skipped fields are never decoded and cannot carry rules",
            ));
        }
        return Ok(None);
    }

    let name = utils::unraw(ident);
    let wire_name = serde
        .rename
        .or_else(|| rename_all.map(|rule| rule.apply(&name)))
        .unwrap_or_else(|| name.clone());

    Ok(Some(FieldSpec {
        field,
        name,
        wire_name,
        rules,
        messages,
        description: utils::doc_string(&field.attrs),
        example: schema.get_literal_text("example"),
        default: schema.get_literal_text("default"),
    }))
}

fn descriptor_tokens(spec: &FieldSpec<'_>, record: &str) -> TokenStream2 {
    let FieldSpec {
        field,
        name,
        wire_name,
        ..
    } = spec;
    let ty = &field.ty;

    let rules = spec.rules.as_ref().map(|lit| quote!(.rules(#lit)));
    let messages = spec.messages.as_ref().map(|lit| quote!(.messages(#lit)));
    let description = (!spec.description.is_empty()).then(|| {
        let text = &spec.description;
        quote!(.description(#text))
    });
    let example = spec.example.as_ref().map(|text| quote!(.example(#text)));
    let default = spec.default.as_ref().map(|text| quote!(.default_value(#text)));

    quote! {
        ::fieldmark_validator::FieldDescriptor::builder(
            #name,
            #wire_name,
            <#ty as ::fieldmark_validator::Inspect>::shape(),
        )
        #rules
        #messages
        #description
        #example
        #default
        .build(#record)
    }
}

fn option_str(value: Option<&str>) -> TokenStream2 {
    match value {
        Some(text) => quote!(::core::option::Option::Some(#text)),
        None => quote!(::core::option::Option::None),
    }
}
