//! Contains code to generate the lookup tables, validators and list accessors of an enumeration.

use super::Constant;

impl super::Enumeration {
    /// Returns the expression which refers to `constant` from the module of the type.
    fn path(&self, constant: &Constant) -> proc_macro2::TokenStream {
        let ident = &self.ident;
        let name = &constant.ident;

        if constant.associated {
            quote::quote!(#ident::#name)
        } else {
            quote::quote!(#name)
        }
    }

    /// Returns `value` as a literal with the suffix of the wrapped primitive.
    fn literal(&self, value: i128) -> proc_macro2::TokenStream {
        let digits = syn::LitInt::new(
            &format!("{}{}", value.unsigned_abs(), self.repr), self.repr.span()
        );

        if value < 0 { quote::quote!(-#digits) } else { quote::quote!(#digits) }
    }

    /// Generates a constant block which fails to compile once a constant changes its value.
    pub(crate) fn generate_guard(&self) -> proc_macro2::TokenStream {
        let assertions = self.constants.iter().map(|c| {
            let path = self.path(c);
            let value = self.literal(c.value);
            let message = format!("`{}` changed its value, re-run enumgen", c.ident);

            quote::quote!(::core::assert!(#path.0 == #value, #message);)
        });

        quote::quote! {
            const _: () = {
                #(#assertions)*
            };
        }
    }

    /// Generates a `const fn list() -> &'static [Self]` implementation.
    pub(crate) fn generate_list(&self) -> proc_macro2::TokenStream {
        let vis = &self.vis;
        let paths = self.constants.iter().map(|c| self.path(c));

        quote::quote!(
            /// Returns all constants in declaration order.
            #[inline(always)]
            #vis const fn list() -> &'static [Self] {
                &[#(#paths),*]
            }
        )
    }

    /// Generates a `const fn list_names() -> &'static [&'static str]` implementation.
    pub(crate) fn generate_list_names(&self) -> proc_macro2::TokenStream {
        let vis = &self.vis;
        let names = self.constants.iter().map(|c| &c.name);

        quote::quote!(
            /// Returns the names of all constants in declaration order.
            #[inline(always)]
            #vis const fn list_names() -> &'static [&'static str] {
                &[#(#names),*]
            }
        )
    }

    /// Generates a `const fn list_values() -> &'static [REPR]` implementation.
    pub(crate) fn generate_list_values(&self) -> proc_macro2::TokenStream {
        let vis = &self.vis;
        let repr = &self.repr;
        let values = self.constants.iter().map(|c| self.literal(c.value));

        quote::quote!(
            /// Returns the values of all constants in declaration order.
            #[inline(always)]
            #vis const fn list_values() -> &'static [#repr] {
                &[#(#values),*]
            }
        )
    }

    /// Generates a `fn from_name(name: &str) -> Option<Self>` implementation.
    pub(crate) fn generate_from_name(&self) -> proc_macro2::TokenStream {
        let vis = &self.vis;
        let names = self.constants.iter().map(|c| &c.name);
        let paths = self.constants.iter().map(|c| self.path(c));

        quote::quote!(
            /// Returns the constant called `name`.
            #vis fn from_name(name: &str) -> ::core::option::Option<Self> {
                match name {
                    #(#names => ::core::option::Option::Some(#paths),)*
                    _ => ::core::option::Option::None
                }
            }
        )
    }

    /// Generates a `fn name(&self) -> Option<&'static str>` implementation.
    pub(crate) fn generate_name(&self) -> proc_macro2::TokenStream {
        let vis = &self.vis;
        let unique = self.unique();
        let values = unique.iter().map(|c| self.literal(c.value));
        let names = unique.iter().map(|c| &c.name);

        quote::quote!(
            /// Returns the name of the first constant with this value.
            #vis fn name(&self) -> ::core::option::Option<&'static str> {
                match self.0 {
                    #(#values => ::core::option::Option::Some(#names),)*
                    _ => ::core::option::Option::None
                }
            }
        )
    }

    /// Generates a `fn is(&self, target: &Self, or: &[Self]) -> bool` implementation.
    pub(crate) fn generate_is(&self) -> proc_macro2::TokenStream {
        let vis = &self.vis;

        quote::quote!(
            /// Returns true if the value equals `target` or any of `or`.
            #vis fn is(&self, target: &Self, or: &[Self]) -> bool {
                self.0 == target.0 || or.iter().any(|other| self.0 == other.0)
            }
        )
    }

    /// Generates a `fn validate(&self) -> Result<(), RUNTIME::Error>` implementation.
    pub(crate) fn generate_validate(&self, runtime: &syn::Path) -> proc_macro2::TokenStream {
        let vis = &self.vis;
        let ident = &self.ident;
        let values = self.unique().into_iter().map(|c| self.literal(c.value));

        quote::quote!(
            /// Returns an error if the value does not belong to any constant.
            #vis fn validate(&self) -> ::core::result::Result<(), #runtime::Error> {
                if self.is_valid() {
                    ::core::result::Result::Ok(())
                } else {
                    ::core::result::Result::Err(#runtime::Error::invalid_value(
                        ::core::concat!(::core::module_path!(), "::", ::core::stringify!(#ident)),
                        &[#(#values),*],
                        self.0
                    ))
                }
            }
        )
    }

    /// Generates a `const fn is_valid(&self) -> bool` implementation.
    pub(crate) fn generate_is_valid(&self) -> proc_macro2::TokenStream {
        let vis = &self.vis;
        let values = self.unique().into_iter().map(|c| self.literal(c.value));

        quote::quote!(
            /// Returns true if the value belongs to any constant.
            #[inline(always)]
            #vis const fn is_valid(&self) -> bool {
                ::core::matches!(self.0, #(#values)|*)
            }
        )
    }

    /// Generates a `fn enumeration() -> Result<&'static RUNTIME::Enum<&'static str, REPR>, RUNTIME::Error>`
    /// implementation, which registers all distinct values once.
    pub(crate) fn generate_enumeration(&self, runtime: &syn::Path) -> proc_macro2::TokenStream {
        let vis = &self.vis;
        let ident = &self.ident;
        let repr = &self.repr;
        let unique = self.unique();
        let names = unique.iter().map(|c| &c.name);
        let values = unique.iter().map(|c| self.literal(c.value));

        quote::quote!(
            /// Returns the runtime enumeration of all distinct values.
            #vis fn enumeration() -> ::core::result::Result<
                &'static #runtime::Enum<&'static str, #repr>, #runtime::Error
            > {
                static REGISTRY: #runtime::Registry<&'static str, #repr> = #runtime::Registry::new();

                REGISTRY.get_or_register(
                    ::core::concat!(::core::module_path!(), "::", ::core::stringify!(#ident)),
                    [#((#names, #values)),*],
                    []
                )
            }
        )
    }

    /// Generates all items for the included file.
    pub fn generate(&self, runtime: &syn::Path, registry: bool) -> proc_macro2::TokenStream {
        let ident = &self.ident;

        let guard = self.generate_guard();
        let list = self.generate_list();
        let list_names = self.generate_list_names();
        let list_values = self.generate_list_values();
        let from_name = self.generate_from_name();
        let name = self.generate_name();
        let is = self.generate_is();
        let validate = self.generate_validate(runtime);
        let is_valid = self.generate_is_valid();
        let enumeration = if registry { Some(self.generate_enumeration(runtime)) } else { None };

        quote::quote! {
            #guard

            #[allow(dead_code)]
            impl #ident {
                #list
                #list_names
                #list_values
                #from_name
                #name
                #is
                #validate
                #is_valid
                #enumeration
            }
        }
    }
}
