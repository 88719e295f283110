use crate::{BuildError, MutatorBuilder};
use mutlog_schema::{node::TypeDesc, types::Primitive};
use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

impl MutatorBuilder<'_> {
    /// Rebuild a field type for the generated code. Collections and wrappers
    /// are fully qualified; named types lose their own-namespace qualifier.
    pub(crate) fn type_tokens(&self, ty: &TypeDesc) -> Result<TokenStream, BuildError> {
        let tokens = match ty {
            TypeDesc::Primitive {
                primitive: Primitive::String,
            } => quote!(::std::string::String),
            TypeDesc::Primitive { primitive } => parse::<syn::Type>("type", primitive.as_str())?,
            TypeDesc::Named { path } => {
                parse::<syn::Path>("type path", self.schema.namespace.strip(path))?
            }
            TypeDesc::Opaque { ty } => parse::<syn::Type>("type", self.schema.namespace.strip(ty))?,
            TypeDesc::Boxed { inner } => {
                let inner = self.type_tokens(inner)?;
                quote!(::std::boxed::Box<#inner>)
            }
            TypeDesc::Optional { inner } => {
                let inner = self.type_tokens(inner)?;
                quote!(::std::option::Option<#inner>)
            }
            TypeDesc::Sequence { item } => {
                let item = self.type_tokens(item)?;
                quote!(::std::vec::Vec<#item>)
            }
            TypeDesc::Set { kind, item } => {
                let set = quote::format_ident!("{}", kind.type_name());
                let item = self.type_tokens(item)?;
                quote!(::std::collections::#set<#item>)
            }
            TypeDesc::Map { kind, key, value } => {
                let map = quote::format_ident!("{}", kind.type_name());
                let key = self.type_tokens(key)?;
                let value = self.type_tokens(value)?;
                quote!(::std::collections::#map<#key, #value>)
            }
        };

        Ok(tokens)
    }
}

fn parse<T: syn::parse::Parse + ToTokens>(
    what: &'static str,
    text: &str,
) -> Result<TokenStream, BuildError> {
    syn::parse_str::<T>(text)
        .map(|parsed| parsed.to_token_stream())
        .map_err(|source| BuildError::InvalidSyntax {
            what,
            text: text.to_string(),
            source,
        })
}

///
/// TESTS
///
