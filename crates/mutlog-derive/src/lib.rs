use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod mutable;

/// Marks a record for mutator generation and checks its `#[mutlog(...)]`
/// field attributes. Expands to nothing; the mutator itself is generated by
/// `mutlog::build!`.
#[proc_macro_derive(Mutable, attributes(mutlog))]
pub fn derive_mutable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    mutable::derive(&input)
        .unwrap_or_else(darling::Error::write_errors)
        .into()
}
