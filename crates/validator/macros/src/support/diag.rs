use proc_macro::TokenStream;

/// Renders a `syn::Error` as `compile_error!` tokens.
pub fn to_compile_error(err: syn::Error) -> TokenStream {
    err.to_compile_error().into()
}

/// A `syn::Error` pointing at `tokens`.
pub fn error_spanned<T: quote::ToTokens>(tokens: &T, msg: impl Into<String>) -> syn::Error {
    syn::Error::new_spanned(tokens, msg.into())
}

/// Folds a list of errors into one, so every problem is reported in a
/// single compile.
pub fn combine(errors: Vec<syn::Error>) -> Option<syn::Error> {
    errors.into_iter().reduce(|mut acc, err| {
        acc.combine(err);
        acc
    })
}
