// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `SignalRHub` trait implementation generation.

use proc_macro2::TokenStream;
use quote::quote;

use super::parse::HubDef;

/// Generate `impl SignalRHub` for the hub.
pub fn generate(hub: &HubDef) -> TokenStream {
    let krate = hub.krate();
    let ident = &hub.ident;
    let (impl_generics, ty_generics, where_clause) = hub.generics.split_for_impl();

    let hub_name = &hub.hub_name;
    let path = match &hub.path {
        Some(path) => quote! { #path },
        None => quote! { #krate::DEFAULT_HUB_PATH }
    };
    let auto_discover = hub.auto_discover.to_runtime(&krate);
    let lower_camel_case = hub.lower_camel_case.to_runtime(&krate);
    let document_names = &hub.document_names;
    let description = match &hub.description {
        Some(doc) => quote! { ::core::option::Option::Some(#doc) },
        None => quote! { ::core::option::Option::None }
    };

    quote! {
        #[automatically_derived]
        impl #impl_generics #krate::SignalRHub for #ident #ty_generics #where_clause {
            const HUB_NAME: &'static str = #hub_name;
            const DESCRIPTION: ::core::option::Option<&'static str> = #description;

            fn hub_documentation() -> #krate::HubDocumentation {
                const PATH: #krate::__private::DeclaredPath =
                    #krate::__private::DeclaredPath::new(#path);
                #krate::__private::declared_documentation(
                    PATH,
                    #auto_discover,
                    &[#(#document_names),*],
                    #lower_camel_case
                )
            }
        }
    }
}
