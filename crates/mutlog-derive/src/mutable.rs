use darling::Error;
use mutlog_schema::load::FieldAttrs;
use proc_macro2::TokenStream;
use syn::{Data, DeriveInput, Fields};

pub fn derive(input: &DeriveInput) -> darling::Result<TokenStream> {
    let Data::Struct(data) = &input.data else {
        return Err(Error::custom("Mutable records must be structs").with_span(&input.ident));
    };

    if !input.generics.params.is_empty() {
        return Err(
            Error::custom("Mutable records cannot be generic").with_span(&input.generics),
        );
    }

    let named = match &data.fields {
        Fields::Named(named) => Some(named),
        Fields::Unit => None,
        Fields::Unnamed(_) => {
            return Err(
                Error::custom("Mutable records need named fields").with_span(&input.ident),
            );
        }
    };

    let mut errors = Error::accumulator();
    for field in named.into_iter().flat_map(|n| n.named.iter()) {
        errors.handle(FieldAttrs::from_attrs(&field.attrs).map_err(|e| e.with_span(field)));
    }
    errors.finish()?;

    Ok(TokenStream::new())
}

///
/// TESTS
///
