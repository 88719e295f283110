use super::{FieldContext, collection};
use crate::BuildError;
use mutlog_schema::{
    classify::{CollectionKind, RecordRef},
    node::TypeDesc,
};
use proc_macro2::TokenStream;
use quote::quote;

/// Collection operations plus element navigation for collections of records.
pub fn generate(
    cx: &FieldContext,
    kind: CollectionKind,
    target: &RecordRef,
) -> Result<TokenStream, BuildError> {
    let mut tokens = collection::set(cx)?;
    tokens.extend(collection::element_ops(cx, kind)?);

    match (kind, &cx.field.ty) {
        (CollectionKind::Sequence, _) => tokens.extend(at_index(cx, target)),
        (CollectionKind::Map(_), TypeDesc::Map { key, .. }) => {
            tokens.extend(with_key(cx, target, key)?);
        }
        _ => {}
    }

    let derives_key = cx
        .builder
        .schema
        .get(&target.ident)
        .is_some_and(|record| record.derives_key);
    if derives_key {
        tokens.extend(by_derived_key(cx, target, kind));
    }

    Ok(tokens)
}

// mutate_<f>_at(index), prefix is the field name alone
fn at_index(cx: &FieldContext, target: &RecordRef) -> TokenStream {
    let member = &cx.member;
    let mutate = cx.method_suffixed("mutate", "at");
    let mutator = FieldContext::mutator(target);
    let nested = cx.nested(target, &quote!(item), &cx.prefix());

    quote! {
        #[must_use]
        pub fn #mutate(&mut self, index: usize) -> ::std::option::Option<#mutator<'_>> {
            let item = self.inner.#member.get_mut(index)?;

            ::std::option::Option::Some(#nested)
        }
    }
}

// mutate_<f>_with(&key), prefix is Name[key]
fn with_key(
    cx: &FieldContext,
    target: &RecordRef,
    key: &TypeDesc,
) -> Result<TokenStream, BuildError> {
    let member = &cx.member;
    let mutate = cx.method_suffixed("mutate", "with");
    let mutator = FieldContext::mutator(target);
    let key_ty = cx.type_tokens(key)?;
    let rendered = cx.display_key(key, &quote!(key))?;
    let prefix = cx.keyed_prefix(&quote!(#rendered));
    let nested = cx.nested(target, &quote!(item), &quote!(prefix));

    Ok(quote! {
        #[must_use]
        pub fn #mutate(&mut self, key: &#key_ty) -> ::std::option::Option<#mutator<'_>> {
            let prefix = #prefix;
            let item = self.inner.#member.get_mut(key)?;

            ::std::option::Option::Some(#nested)
        }
    })
}

// mutate_<f>_by(&probe), located by derived change key, prefix Name[key]
fn by_derived_key(cx: &FieldContext, target: &RecordRef, kind: CollectionKind) -> TokenStream {
    let rt = &cx.builder.runtime;
    let member = &cx.member;
    let mutate = cx.method_suffixed("mutate", "by");
    let mutator = FieldContext::mutator(target);
    let prefix = cx.keyed_prefix(&quote!(key));
    let nested = cx.nested(target, &quote!(item), &quote!(prefix));

    let items = match kind {
        CollectionKind::Map(_) => quote!(values_mut),
        _ => quote!(iter_mut),
    };

    quote! {
        /// Find the element whose change key equals `probe`'s.
        #[must_use]
        pub fn #mutate<Q>(&mut self, probe: &Q) -> ::std::option::Option<#mutator<'_>>
        where
            Q: #rt::ChangeKey + ?Sized,
        {
            let key = #rt::ChangeKey::change_key(probe);
            let item = self
                .inner
                .#member
                .#items()
                .find(|item| #rt::ChangeKey::change_key(&**item) == key)?;
            let prefix = #prefix;

            ::std::option::Option::Some(#nested)
        }
    }
}
