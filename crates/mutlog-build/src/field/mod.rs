//! Per-field operation emitters, one module per field shape.

mod collection;
mod embedded;
mod optional;
mod records;
mod scalar;

use crate::{
    BuildError, MutatorBuilder,
    names::{member_ident, method_ident, method_ident_suffixed, mutator_ident},
};
use mutlog_schema::{
    classify::{RecordRef, Shape, classify},
    node::{Field, TypeDesc},
};
use proc_macro2::{Ident, TokenStream};
use quote::quote;

/// Emit every operation for `field`, chosen by its shape.
pub fn generate(builder: &MutatorBuilder, field: &Field) -> Result<TokenStream, BuildError> {
    let shape = classify(builder.schema, &field.ty);
    tracing::trace!(field = %field.ident, shape = %shape, "field classified");

    let cx = FieldContext::new(builder, field)?;

    match &shape {
        Shape::Scalar => scalar::generate(&cx),
        Shape::Collection(kind) => collection::generate(&cx, *kind),
        Shape::Optional { target } => optional::generate(&cx, target.as_ref()),
        Shape::Embedded(target) => Ok(embedded::generate(&cx, target)),
        Shape::RecordCollection { kind, target } => records::generate(&cx, *kind, target),
    }
}

///
/// FieldContext
///
/// Everything a shape emitter needs about the field being generated.
///

pub struct FieldContext<'b> {
    pub builder: &'b MutatorBuilder<'b>,
    pub field: &'b Field,
    pub member: Ident,
    pub name: String,
    pub ty: TokenStream,
}

impl<'b> FieldContext<'b> {
    fn new(builder: &'b MutatorBuilder<'b>, field: &'b Field) -> Result<Self, BuildError> {
        Ok(Self {
            builder,
            field,
            member: member_ident(field)?,
            name: field.log_name(),
            ty: builder.type_tokens(&field.ty)?,
        })
    }

    pub fn method(&self, op: &str) -> Ident {
        method_ident(op, self.field)
    }

    pub fn method_suffixed(&self, op: &str, suffix: &str) -> Ident {
        method_ident_suffixed(op, self.field, suffix)
    }

    /// `Change::new("<Name>", Operation::<op>)`
    pub fn change(&self, op: &str) -> TokenStream {
        let rt = &self.builder.runtime;
        let name = &self.name;
        let op = quote::format_ident!("{op}");

        quote!(#rt::Change::new(#name, #rt::Operation::#op))
    }

    /// Append a change to this mutator's logger.
    pub fn log(&self, change: &TokenStream) -> TokenStream {
        let rt = &self.builder.runtime;

        quote!(#rt::ChangeLogger::append(&mut *self.changes, #change);)
    }

    pub fn display(&self, ty: &TypeDesc, expr: &TokenStream) -> Result<TokenStream, BuildError> {
        self.builder.display_value(ty, expr)
    }

    pub fn display_key(
        &self,
        ty: &TypeDesc,
        expr: &TokenStream,
    ) -> Result<TokenStream, BuildError> {
        self.builder.display_key(ty, expr)
    }

    pub fn type_tokens(&self, ty: &TypeDesc) -> Result<TokenStream, BuildError> {
        self.builder.type_tokens(ty)
    }

    /// Construct the target's mutator over `inner` (a `&mut` to the record or
    /// its box), chained under `prefix`.
    pub fn nested(
        &self,
        target: &RecordRef,
        inner: &TokenStream,
        prefix: &TokenStream,
    ) -> TokenStream {
        let rt = &self.builder.runtime;
        let mutator = mutator_ident(&target.ident);
        let inner = if target.boxed {
            quote!(&mut **#inner)
        } else {
            quote!(#inner)
        };

        quote! {
            #mutator::with_logger(
                #inner,
                #rt::ChainedLogger::new(#prefix, &mut *self.changes),
            )
        }
    }

    /// `Prefix::new("<Name>")`
    pub fn prefix(&self) -> TokenStream {
        let rt = &self.builder.runtime;
        let name = &self.name;

        quote!(#rt::Prefix::new(#name))
    }

    /// `Prefix::with_key("<Name>", key)`
    pub fn keyed_prefix(&self, key: &TokenStream) -> TokenStream {
        let rt = &self.builder.runtime;
        let name = &self.name;

        quote!(#rt::Prefix::with_key(#name, #key))
    }

    pub fn mutator(target: &RecordRef) -> Ident {
        mutator_ident(&target.ident)
    }
}
