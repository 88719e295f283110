use super::FieldContext;
use crate::BuildError;
use mutlog_schema::{classify::CollectionKind, node::TypeDesc};
use proc_macro2::TokenStream;
use quote::quote;

/// Whole-value replacement plus element operations for sequences and maps.
pub fn generate(cx: &FieldContext, kind: CollectionKind) -> Result<TokenStream, BuildError> {
    let mut tokens = set(cx)?;
    tokens.extend(element_ops(cx, kind)?);

    Ok(tokens)
}

/// `append_`/`remove_` for sequences, `insert_`/`remove_` for maps.
pub(super) fn element_ops(
    cx: &FieldContext,
    kind: CollectionKind,
) -> Result<TokenStream, BuildError> {
    match (kind, &cx.field.ty) {
        (CollectionKind::Sequence, TypeDesc::Sequence { item }) => sequence_ops(cx, item),
        (CollectionKind::Map(_), TypeDesc::Map { key, value, .. }) => map_ops(cx, key, value),
        _ => Ok(quote!()),
    }
}

/// `set_<f>(value) -> bool`
pub(super) fn set(cx: &FieldContext) -> Result<TokenStream, BuildError> {
    let FieldContext { member, ty, .. } = cx;
    let set = cx.method("set");

    let old = cx.display(&cx.field.ty, &quote!(&self.inner.#member))?;
    let new = cx.display(&cx.field.ty, &quote!(&value))?;
    let cleared = cx.change("Cleared");
    let replaced = cx.change("Set");
    let log = cx.log(&quote!(change));

    Ok(quote! {
        pub fn #set(&mut self, value: #ty) -> bool {
            if self.inner.#member.is_empty() && value.is_empty() {
                return false;
            }

            let old = #old;
            let change = if value.is_empty() {
                #cleared.with_old_value(old)
            } else {
                #replaced.with_old_value(old).with_new_value(#new)
            };
            self.inner.#member = value;
            #log

            true
        }
    })
}

fn sequence_ops(cx: &FieldContext, item: &TypeDesc) -> Result<TokenStream, BuildError> {
    let member = &cx.member;
    let append = cx.method("append");
    let remove = cx.method("remove");
    let item_ty = cx.type_tokens(item)?;

    let added = cx.change("Added");
    let removed_op = cx.change("Removed");
    let new = cx.display(item, &quote!(&value))?;
    let old = cx.display(item, &quote!(&removed))?;
    let log = cx.log(&quote!(change));

    Ok(quote! {
        /// Logs one change per appended element.
        pub fn #append(&mut self, values: impl ::std::iter::IntoIterator<Item = #item_ty>) {
            for value in values {
                let change = #added.with_new_value(#new);
                self.inner.#member.push(value);
                #log
            }
        }

        pub fn #remove(&mut self, index: usize) -> bool {
            if index >= self.inner.#member.len() {
                return false;
            }

            let removed = self.inner.#member.remove(index);
            let change = #removed_op.with_old_value(#old);
            #log

            true
        }
    })
}

fn map_ops(cx: &FieldContext, key: &TypeDesc, value: &TypeDesc) -> Result<TokenStream, BuildError> {
    let member = &cx.member;
    let insert = cx.method("insert");
    let remove = cx.method("remove");
    let key_ty = cx.type_tokens(key)?;
    let value_ty = cx.type_tokens(value)?;

    let added = cx.change("Added");
    let removed_op = cx.change("Removed");
    let insert_key = cx.display_key(key, &quote!(&key))?;
    let remove_key = cx.display_key(key, &quote!(key))?;
    let new = cx.display(value, &quote!(&value))?;
    let old = cx.display(value, &quote!(&removed))?;
    let log = cx.log(&quote!(change));

    Ok(quote! {
        /// Returns `false` without logging if `key` is already present.
        pub fn #insert(&mut self, key: #key_ty, value: #value_ty) -> bool {
            if self.inner.#member.contains_key(&key) {
                return false;
            }

            let change = #added
                .with_key(#insert_key)
                .with_new_value(#new);
            self.inner.#member.insert(key, value);
            #log

            true
        }

        pub fn #remove(&mut self, key: &#key_ty) -> bool {
            let ::std::option::Option::Some(removed) = self.inner.#member.remove(key) else {
                return false;
            };

            let change = #removed_op
                .with_key(#remove_key)
                .with_old_value(#old);
            #log

            true
        }
    })
}
