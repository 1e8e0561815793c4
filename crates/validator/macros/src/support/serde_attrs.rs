//! The subset of `#[serde(...)]` that changes wire names.
//!
//! Field paths and schema property names must match what the decoder
//! accepts, so `rename`, `rename_all` and `skip` are read here. Every other
//! serde argument is skipped over without interpretation.

use heck::{
    ToKebabCase, ToLowerCamelCase, ToShoutyKebabCase, ToShoutySnakeCase, ToSnakeCase,
    ToUpperCamelCase,
};
use syn::{Attribute, LitStr, Result, Token, meta::ParseNestedMeta};

use crate::support::diag;

/// Serde naming options of a container or field.
#[derive(Debug, Default)]
pub struct SerdeNames {
    /// `rename = "..."`, or the `deserialize` half of `rename(...)`.
    pub rename: Option<String>,
    /// `rename_all = "..."`, or its `deserialize` half.
    pub rename_all: Option<RenameRule>,
    /// `skip` or `skip_deserializing`.
    pub skip: bool,
}

/// Case conventions accepted by `rename_all`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameRule {
    Lower,
    Upper,
    Pascal,
    Camel,
    Snake,
    ScreamingSnake,
    Kebab,
    ScreamingKebab,
}

impl RenameRule {
    fn parse(lit: &LitStr) -> Result<Self> {
        Ok(match lit.value().as_str() {
            "lowercase" => Self::Lower,
            "UPPERCASE" => Self::Upper,
            "PascalCase" => Self::Pascal,
            "camelCase" => Self::Camel,
            "snake_case" => Self::Snake,
            "SCREAMING_SNAKE_CASE" => Self::ScreamingSnake,
            "kebab-case" => Self::Kebab,
            "SCREAMING-KEBAB-CASE" => Self::ScreamingKebab,
            other => {
                return Err(diag::error_spanned(
                    lit,
                    format!("unknown rename_all convention `{other}`"),
                ));
            }
        })
    }

    /// Applies the convention to a snake_case field name.
    pub fn apply(self, field: &str) -> String {
        match self {
            Self::Lower => field.to_lowercase(),
            Self::Upper => field.to_uppercase(),
            Self::Pascal => field.to_upper_camel_case(),
            Self::Camel => field.to_lower_camel_case(),
            Self::Snake => field.to_snake_case(),
            Self::ScreamingSnake => field.to_shouty_snake_case(),
            Self::Kebab => field.to_kebab_case(),
            Self::ScreamingKebab => field.to_shouty_kebab_case(),
        }
    }
}

/// Reads naming options from every `#[serde(...)]` attribute in `attrs`.
pub fn parse(attrs: &[Attribute]) -> Result<SerdeNames> {
    let mut names = SerdeNames::default();

    for attr in attrs.iter().filter(|a| a.path().is_ident("serde")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                if let Some(lit) = directional(&meta)? {
                    names.rename = Some(lit.value());
                }
            } else if meta.path.is_ident("rename_all") {
                if let Some(lit) = directional(&meta)? {
                    names.rename_all = Some(RenameRule::parse(&lit)?);
                }
            } else if meta.path.is_ident("skip") || meta.path.is_ident("skip_deserializing") {
                names.skip = true;
            } else {
                skip_value(&meta)?;
            }
            Ok(())
        })?;
    }

    Ok(names)
}

/// Reads `key = "x"` or the `deserialize` half of `key(serialize = .., deserialize = "x")`.
fn directional(meta: &ParseNestedMeta<'_>) -> Result<Option<LitStr>> {
    if meta.input.peek(Token![=]) {
        return Ok(Some(meta.value()?.parse()?));
    }
    let mut found = None;
    meta.parse_nested_meta(|inner| {
        let lit: LitStr = inner.value()?.parse()?;
        if inner.path.is_ident("deserialize") {
            found = Some(lit);
        }
        Ok(())
    })?;
    Ok(found)
}

fn skip_value(meta: &ParseNestedMeta<'_>) -> Result<()> {
    if meta.input.peek(Token![=]) {
        meta.value()?.parse::<syn::Expr>()?;
    } else if meta.input.peek(syn::token::Paren) {
        meta.parse_nested_meta(|inner| skip_value(&inner))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rename_and_skip() {
        let attrs: Vec<Attribute> = vec![
            syn::parse_quote!(#[serde(default, rename = "Name")]),
            syn::parse_quote!(#[serde(skip_serializing_if = "Option::is_none")]),
        ];
        let names = parse(&attrs).unwrap();
        assert_eq!(names.rename.as_deref(), Some("Name"));
        assert!(!names.skip);
    }

    #[test]
    fn test_directional_rename_uses_deserialize() {
        let attrs: Vec<Attribute> =
            vec![syn::parse_quote!(#[serde(rename(serialize = "out", deserialize = "in"))])];
        assert_eq!(parse(&attrs).unwrap().rename.as_deref(), Some("in"));
    }

    #[test]
    fn test_rename_all_conventions() {
        let attrs: Vec<Attribute> = vec![syn::parse_quote!(#[serde(rename_all = "camelCase")])];
        let rule = parse(&attrs).unwrap().rename_all.unwrap();
        assert_eq!(rule.apply("created_at"), "createdAt");
        assert_eq!(RenameRule::Pascal.apply("created_at"), "CreatedAt");
        assert_eq!(RenameRule::ScreamingKebab.apply("created_at"), "CREATED-AT");
        assert_eq!(RenameRule::Lower.apply("created_at"), "created_at");
    }

    #[test]
    fn test_unknown_convention_is_an_error() {
        let attrs: Vec<Attribute> = vec![syn::parse_quote!(#[serde(rename_all = "Title Case")])];
        assert!(parse(&attrs).is_err());
    }
}
