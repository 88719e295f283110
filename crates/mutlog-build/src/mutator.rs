use crate::{BuildError, MutatorBuilder, field, names::mutator_ident};
use mutlog_schema::node::Record;
use proc_macro2::TokenStream;
use quote::quote;

/// Emit the mutator struct and its impl block for one record.
pub fn generate(builder: &MutatorBuilder, record: &Record) -> Result<TokenStream, BuildError> {
    let rt = &builder.runtime;
    let ident = mutator_ident(&record.ident);
    let target = builder.type_tokens(&mutlog_schema::node::TypeDesc::named(&record.ident))?;

    let mut methods = quote!();
    for field in &record.fields {
        methods.extend(field::generate(builder, field)?);
    }

    // only the root owns a fresh logger
    let root_ctor = builder.is_root(record).then(|| {
        quote! {
            /// Start a mutation session over `inner` with an empty change log.
            #[must_use]
            pub fn new(inner: &'a mut #target) -> Self {
                Self::with_logger(inner, #rt::DefaultLogger::root())
            }
        }
    });

    let doc = format!(" Mutates a [`{}`] and records every change it makes.", record.ident);

    tracing::debug!(
        record = %record.ident,
        fields = record.fields.len(),
        root = builder.is_root(record),
        "mutator emitted"
    );

    Ok(quote! {
        #[doc = #doc]
        pub struct #ident<'a> {
            inner: &'a mut #target,
            changes: ::std::boxed::Box<dyn #rt::ChangeLogger + 'a>,
        }

        impl<'a> #ident<'a> {
            #root_ctor

            /// Mutate `inner`, sending changes to `changes`.
            #[must_use]
            pub fn with_logger(
                inner: &'a mut #target,
                changes: impl #rt::ChangeLogger + 'a,
            ) -> Self {
                Self {
                    inner,
                    changes: ::std::boxed::Box::new(changes),
                }
            }

            /// Render the whole change log this mutator writes into.
            #[must_use]
            pub fn render_changes(&self) -> ::std::vec::Vec<::std::string::String> {
                #rt::ChangeLogger::render(&*self.changes)
            }

            #methods
        }
    })
}
