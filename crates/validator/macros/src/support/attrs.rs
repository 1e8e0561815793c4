use syn::{
    Attribute, Ident, Lit, LitStr, Meta, Result, Token,
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
};

use crate::support::diag;

/// Parsed `#[schema(...)]` arguments.
#[derive(Debug, Clone, Default)]
pub struct AttrArgs {
    pub items: Vec<AttrItem>,
}

/// A single attribute item.
#[derive(Debug, Clone)]
pub enum AttrItem {
    /// A bare flag like `skip`.
    Flag(Ident),
    /// `key = literal`.
    KeyValue { key: Ident, value: Lit },
}

impl AttrItem {
    fn key(&self) -> &Ident {
        match self {
            AttrItem::Flag(key) | AttrItem::KeyValue { key, .. } => key,
        }
    }
}

impl AttrArgs {
    /// Literal bound to `key`.
    pub fn get_lit(&self, key: &str) -> Option<&Lit> {
        self.items.iter().find_map(|item| match item {
            AttrItem::KeyValue { key: k, value } if k == key => Some(value),
            _ => None,
        })
    }

    /// Literal bound to `key`, rendered as text.
    ///
    /// Numbers and booleans are accepted as well as strings, so
    /// `example = 42` and `example = "42"` are equivalent.
    pub fn get_literal_text(&self, key: &str) -> Option<String> {
        self.get_lit(key).and_then(|lit| match lit {
            Lit::Str(s) => Some(s.value()),
            Lit::Int(i) => Some(i.base10_digits().to_owned()),
            Lit::Float(f) => Some(f.base10_digits().to_owned()),
            Lit::Bool(b) => Some(b.value.to_string()),
            _ => None,
        })
    }

    /// Whether `flag` is present.
    pub fn has_flag(&self, flag: &str) -> bool {
        self.items
            .iter()
            .any(|item| matches!(item, AttrItem::Flag(f) if f == flag))
    }

    /// Rejects keys outside `allowed`.
    pub fn ensure_known(&self, attr: &str, allowed: &[&str]) -> Result<()> {
        match self
            .items
            .iter()
            .map(AttrItem::key)
            .find(|key| !allowed.iter().any(|a| key == a))
        {
            Some(key) => Err(diag::error_spanned(
                key,
                format!(
                    "unknown `#[{attr}]` argument `{key}`, expected one of: {}",
                    allowed.join(", ")
                ),
            )),
            None => Ok(()),
        }
    }
}

/// Parses and merges every `#[name(...)]` attribute.
pub fn parse_attrs(attrs: &[Attribute], name: &str) -> Result<AttrArgs> {
    let mut result = AttrArgs::default();

    for attr in attrs.iter().filter(|a| a.path().is_ident(name)) {
        match &attr.meta {
            Meta::Path(_) => {}
            Meta::List(list) => {
                let args = syn::parse2::<AttrArgsParser>(list.tokens.clone())?;
                result.items.extend(args.0.items);
            }
            Meta::NameValue(nv) => {
                return Err(diag::error_spanned(
                    nv,
                    format!("#[{name}] must be #[{name}(...)] (not name-value)"),
                ));
            }
        }
    }

    Ok(result)
}

/// Reads the single string argument of `#[name("...")]`.
///
/// Repeating the attribute is an error: rule and message annotations are
/// one string each.
pub fn parse_string_attr(attrs: &[Attribute], name: &str) -> Result<Option<LitStr>> {
    let mut found: Option<LitStr> = None;
    for attr in attrs.iter().filter(|a| a.path().is_ident(name)) {
        let lit = attr.parse_args::<LitStr>().map_err(|_| {
            diag::error_spanned(attr, format!("expected #[{name}(\"...\")] with a string literal"))
        })?;
        if found.is_some() {
            return Err(diag::error_spanned(
                attr,
                format!("duplicate #[{name}] attribute; combine the annotations into one string"),
            ));
        }
        found = Some(lit);
    }
    Ok(found)
}

struct AttrArgsParser(AttrArgs);

impl Parse for AttrArgsParser {
    fn parse(input: ParseStream) -> Result<Self> {
        let items = Punctuated::<AttrItemParser, Token![,]>::parse_terminated(input)?
            .into_iter()
            .map(|x| x.0)
            .collect();
        Ok(Self(AttrArgs { items }))
    }
}

struct AttrItemParser(AttrItem);

impl Parse for AttrItemParser {
    fn parse(input: ParseStream) -> Result<Self> {
        let key: Ident = input.call(syn::ext::IdentExt::parse_any)?;

        if input.peek(Token![=]) {
            input.parse::<Token![=]>()?;
            let value: Lit = input.parse()?;
            return Ok(Self(AttrItem::KeyValue { key, value }));
        }

        Ok(Self(AttrItem::Flag(key)))
    }
}
