use syn::ext::IdentExt;
use syn::spanned::Spanned;
use syn::{Attribute, Data, DeriveInput, Expr, Fields, Lit, Meta};

/// Collects doc comments (`/// ...`) into one string, one line per line.
pub fn doc_string(attrs: &[Attribute]) -> String {
    let mut out = Vec::new();
    for attr in attrs {
        if let Meta::NameValue(nv) = &attr.meta
            && nv.path.is_ident("doc")
            && let Expr::Lit(expr_lit) = &nv.value
            && let Lit::Str(s) = &expr_lit.lit
        {
            let line = s.value().trim().to_string();
            if !line.is_empty() {
                out.push(line);
            }
        }
    }
    out.join("\n")
}

/// Returns the named fields of a non-generic struct, or a descriptive error.
pub fn require_named_fields(input: &DeriveInput) -> syn::Result<&syn::FieldsNamed> {
    let fields = match &input.data {
        Data::Struct(s) => &s.fields,
        Data::Enum(_) | Data::Union(_) => {
            return Err(syn::Error::new(
                input.ident.span(),
                "Describe can only be derived for structs with named fields",
            ));
        }
    };

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new(
            input.generics.span(),
            "Describe cannot be derived for generic structs; \
             descriptors are stored once per type",
        ));
    }

    match fields {
        Fields::Named(n) => Ok(n),
        Fields::Unnamed(_) => Err(syn::Error::new(
            fields.span(),
            "Describe requires a struct with named fields (e.g. `struct X { ... }`)",
        )),
        Fields::Unit => Err(syn::Error::new(
            input.ident.span(),
            "Describe requires a non-unit struct with fields",
        )),
    }
}

/// Field name without a raw-identifier prefix.
pub fn unraw(ident: &syn::Ident) -> String {
    ident.unraw().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doc_string_joins_lines() {
        let attrs: Vec<Attribute> = vec![
            syn::parse_quote!(#[doc = " First line."]),
            syn::parse_quote!(#[doc = ""]),
            syn::parse_quote!(#[doc = " Second line."]),
        ];
        assert_eq!(doc_string(&attrs), "First line.\nSecond line.");
    }

    #[test]
    fn test_generic_structs_are_rejected() {
        let input: DeriveInput = syn::parse_quote!(struct Wrapper<T> { inner: T });
        assert!(require_named_fields(&input).is_err());
    }

    #[test]
    fn test_tuple_structs_are_rejected() {
        let input: DeriveInput = syn::parse_quote!(struct Pair(u8, u8););
        assert!(require_named_fields(&input).is_err());
    }

    #[test]
    fn test_raw_identifiers() {
        let ident: syn::Ident = syn::parse_quote!(r#type);
        assert_eq!(unraw(&ident), "type");
    }
}
