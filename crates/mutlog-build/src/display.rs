use crate::{BuildError, MutatorBuilder};
use mutlog_schema::{
    node::{Record, TypeDesc},
    types::RecordDisplay,
};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};

impl MutatorBuilder<'_> {
    /// Expression rendering the value behind `expr` (a `&T`) as a `String`.
    pub(crate) fn display_value(
        &self,
        ty: &TypeDesc,
        expr: &TokenStream,
    ) -> Result<TokenStream, BuildError> {
        self.display_at(ty, expr, 0)
    }

    /// Like [`Self::display_value`], but map keys that are records carrying a
    /// change key render through it.
    pub(crate) fn display_key(
        &self,
        ty: &TypeDesc,
        expr: &TokenStream,
    ) -> Result<TokenStream, BuildError> {
        self.key_at(ty, expr, 0)
    }

    fn display_at(
        &self,
        ty: &TypeDesc,
        expr: &TokenStream,
        depth: usize,
    ) -> Result<TokenStream, BuildError> {
        let rt = &self.runtime;

        let tokens = match ty {
            TypeDesc::Primitive { .. } => quote!(::std::string::ToString::to_string(#expr)),

            TypeDesc::Named { path } => match self.schema.resolve(path) {
                Some(record) => display_record(record, expr),
                None => quote!(::std::format!("{:?}", #expr)),
            },

            TypeDesc::Opaque { .. } => quote!(::std::format!("{:?}", #expr)),

            TypeDesc::Boxed { inner } => self.display_at(inner, &quote!(&**(#expr)), depth)?,

            TypeDesc::Optional { inner } => {
                let (var, var_ty, body) = self.closure(inner, depth)?;
                quote!(#rt::value::optional(
                    ::std::option::Option::as_ref(#expr),
                    |#var: &#var_ty| #body
                ))
            }

            TypeDesc::Sequence { item } => {
                let (var, var_ty, body) = self.closure(item, depth)?;
                quote!(#rt::value::sequence(#expr, |#var: &#var_ty| #body))
            }

            TypeDesc::Set { kind, item } => {
                let (var, var_ty, body) = self.closure(item, depth)?;
                let helper = if kind.is_ordered() {
                    format_ident!("sequence")
                } else {
                    format_ident!("sequence_sorted")
                };

                quote!(#rt::value::#helper(#expr, |#var: &#var_ty| #body))
            }

            TypeDesc::Map { kind, key, value } => {
                let key_var = format_ident!("k{depth}");
                let key_ty = self.type_tokens(key)?;
                let key_body = self.key_at(key, &quote!(#key_var), depth + 1)?;
                let (var, var_ty, body) = self.closure(value, depth)?;

                let helper = if kind.is_ordered() {
                    format_ident!("map")
                } else {
                    format_ident!("map_sorted")
                };

                quote!(#rt::value::#helper(
                    #expr,
                    |#key_var: &#key_ty| #key_body,
                    |#var: &#var_ty| #body
                ))
            }
        };

        Ok(tokens)
    }

    fn key_at(
        &self,
        ty: &TypeDesc,
        expr: &TokenStream,
        depth: usize,
    ) -> Result<TokenStream, BuildError> {
        let keyed = match ty.unboxed() {
            TypeDesc::Named { path } => self.schema.resolve(path).is_some_and(|r| r.derives_key),
            _ => false,
        };

        if keyed {
            let rt = &self.runtime;
            Ok(quote!(#rt::ChangeKey::change_key(#expr)))
        } else {
            self.display_at(ty, expr, depth)
        }
    }

    // closure variable, its type and body for an element of a container
    fn closure(
        &self,
        ty: &TypeDesc,
        depth: usize,
    ) -> Result<(proc_macro2::Ident, TokenStream, TokenStream), BuildError> {
        let var = format_ident!("v{depth}");
        let var_ty = self.type_tokens(ty)?;
        let body = self.display_at(ty, &quote!(#var), depth + 1)?;

        Ok((var, var_ty, body))
    }
}

fn display_record(record: &Record, expr: &TokenStream) -> TokenStream {
    match record.display {
        RecordDisplay::Display => quote!(::std::string::ToString::to_string(#expr)),
        RecordDisplay::Debug => quote!(::std::format!("{:?}", #expr)),
        RecordDisplay::Unformatted => {
            let label = format!("{}{{..}}", record.ident);
            quote!({
                let _ = #expr;
                ::std::string::String::from(#label)
            })
        }
    }
}

///
/// TESTS
///
