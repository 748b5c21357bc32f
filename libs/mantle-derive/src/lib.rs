use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::spanned::Spanned;
use syn::{parse_macro_input, Error, FnArg, Ident, ItemTrait, Pat, TraitItem, TraitItemFn, Type};

/// Attribute macro that turns an ordinary trait into an adaptable capability.
///
/// Applied to a trait `Foo`, it re-emits the trait unchanged and generates:
///
/// - `FooCap`: the zero-sized capability tag. Adapters, registrations and
///   `satisfies!` queries all name this tag.
/// - `FooImpl`: the explicit-registration trait. `impl FooImpl for T` binds
///   `T` to the capability; each method receives the concrete value as its
///   receiver.
/// - `FooProvider<T>`: the provider trait used by adapters and by
///   lookup-registration designators. Each method takes the concrete value
///   first (`it: &T`, `it: &mut T` or `it: T`, matching the receiver).
/// - Resolution impls wiring `FooCap` into `mantle`'s strategy selection:
///   explicit registration when `T: FooImpl`, native satisfaction when
///   `T: Foo`. Lookup registration needs no generated code; it is covered by
///   `mantle::Lookup`.
/// - A forwarding impl of `Foo` for `mantle::Adapter<S, FooCap, P>`, so the
///   adapter is usable anywhere a `Foo` value is expected.
///
/// Supported trait shape: methods only, no generics, no supertraits, no
/// default bodies, receivers `&self` / `&mut self` / `self`, no `Self` in
/// argument or return types.
///
/// # Example
///
/// ```ignore
/// #[mantle::capability]
/// pub trait Inflatable {
///     fn inflate(&mut self, dw: i32, dv: i32);
/// }
/// ```
#[proc_macro_attribute]
pub fn capability(attr: TokenStream, item: TokenStream) -> TokenStream {
    if !attr.is_empty() {
        return Error::new(
            proc_macro2::Span::call_site(),
            "#[capability] takes no arguments",
        )
        .to_compile_error()
        .into();
    }
    let input = parse_macro_input!(item as ItemTrait);
    match expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

/// How an operation accesses the wrapped value, from its receiver.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Access {
    Shared,
    Exclusive,
    Owning,
}

struct Operation<'a> {
    f: &'a TraitItemFn,
    access: Access,
    arg_names: Vec<Ident>,
    arg_types: Vec<&'a Type>,
}

fn expand(input: &ItemTrait) -> Result<TokenStream2, Error> {
    check_trait_shape(input)?;

    let ops = input
        .items
        .iter()
        .map(operation)
        .collect::<Result<Vec<_>, _>>()?;

    let vis = &input.vis;
    let trait_ident = &input.ident;
    let cap_ident = format_ident!("{}Cap", trait_ident);
    let reg_ident = format_ident!("{}Impl", trait_ident);
    let provider_ident = format_ident!("{}Provider", trait_ident);

    let cap_doc = format!("Capability tag for [`{trait_ident}`].");
    let reg_doc = format!(
        "Explicit registration of [`{trait_ident}`] for a concrete type.\n\n\
         Implementing this trait binds the type to the capability. Each method \
         receives the wrapped value itself as its receiver."
    );
    let provider_doc = format!(
        "Provider form of [`{trait_ident}`]: each operation takes the concrete \
         value as its leading argument.\n\n\
         Lookup-registration designators implement this trait directly; \
         explicit and native registrations reach it through \
         [`mantle::Registered`] and [`mantle::Native`]."
    );

    let reg_sigs: Vec<_> = ops
        .iter()
        .map(|op| {
            let sig = &op.f.sig;
            quote!(#sig;)
        })
        .collect();

    let provider_sigs: Vec<_> = ops
        .iter()
        .map(|op| {
            let sig = provider_signature(op);
            quote!(#sig;)
        })
        .collect();

    let registered_methods: Vec<_> = ops
        .iter()
        .map(|op| {
            let sig = provider_signature(op);
            let ident = &op.f.sig.ident;
            let names = &op.arg_names;
            quote! {
                #[inline]
                #sig {
                    <T as #reg_ident>::#ident(it #(, #names)*)
                }
            }
        })
        .collect();

    let native_methods: Vec<_> = ops
        .iter()
        .map(|op| {
            let sig = provider_signature(op);
            let ident = &op.f.sig.ident;
            let names = &op.arg_names;
            quote! {
                #[inline]
                #sig {
                    <T as #trait_ident>::#ident(it #(, #names)*)
                }
            }
        })
        .collect();

    let target = quote!(<S as ::mantle::storage::Storage>::Target);
    let storage_bound = match ops.iter().map(|op| op.access).max() {
        Some(Access::Owning) => quote!(::mantle::storage::StorageOwned),
        Some(Access::Exclusive) => quote!(::mantle::storage::StorageMut),
        _ => quote!(::mantle::storage::Storage),
    };

    let adapter_methods: Vec<_> = ops
        .iter()
        .map(|op| {
            let sig = &op.f.sig;
            let ident = &sig.ident;
            let names = &op.arg_names;
            let recovered = match op.access {
                Access::Shared => quote!(::mantle::Adapter::value(self)),
                Access::Exclusive => quote!(::mantle::Adapter::value_mut(self)),
                Access::Owning => quote!(::mantle::Adapter::into_value(self)),
            };
            quote! {
                #[inline]
                #sig {
                    <P as #provider_ident<#target>>::#ident(#recovered #(, #names)*)
                }
            }
        })
        .collect();

    Ok(quote! {
        #input

        #[doc = #cap_doc]
        #[derive(Debug, Clone, Copy)]
        #vis struct #cap_ident;

        #[doc = #reg_doc]
        #vis trait #reg_ident {
            #(#reg_sigs)*
        }

        #[doc = #provider_doc]
        #vis trait #provider_ident<T> {
            #(#provider_sigs)*
        }

        impl<T: #reg_ident> #provider_ident<T> for ::mantle::Registered {
            #(#registered_methods)*
        }

        impl<T: #trait_ident> #provider_ident<T> for ::mantle::Native {
            #(#native_methods)*
        }

        impl<T: #reg_ident> ::mantle::resolve::ResolveExplicit<T> for #cap_ident {
            type Provider = ::mantle::Registered;
        }

        impl<T: #trait_ident> ::mantle::resolve::ResolveNative<T> for #cap_ident {
            type Provider = ::mantle::Native;
        }

        impl<S, P> #trait_ident for ::mantle::Adapter<S, #cap_ident, P>
        where
            S: #storage_bound,
            P: #provider_ident<#target>,
        {
            #(#adapter_methods)*
        }
    })
}

fn check_trait_shape(input: &ItemTrait) -> Result<(), Error> {
    if let Some(param) = input.generics.params.first() {
        return Err(Error::new(
            param.span(),
            "capability traits may not be generic",
        ));
    }
    if let Some(clause) = &input.generics.where_clause {
        return Err(Error::new(
            clause.span(),
            "capability traits may not have a where clause",
        ));
    }
    if let Some(supertrait) = input.supertraits.first() {
        return Err(Error::new(
            supertrait.span(),
            "capability traits may not have supertraits",
        ));
    }
    if let Some(unsafety) = input.unsafety {
        return Err(Error::new(unsafety.span(), "unsafe traits are not supported"));
    }
    if let Some(auto) = input.auto_token {
        return Err(Error::new(auto.span(), "auto traits are not supported"));
    }
    Ok(())
}

/// Validate a trait item and classify its receiver.
fn operation(item: &TraitItem) -> Result<Operation<'_>, Error> {
    let f = match item {
        TraitItem::Fn(f) => f,
        other => {
            return Err(Error::new(
                other.span(),
                "capability traits may only contain methods",
            ))
        }
    };
    if let Some(block) = &f.default {
        return Err(Error::new(
            block.span(),
            "default method bodies are not supported",
        ));
    }
    if let Some(asyncness) = f.sig.asyncness {
        return Err(Error::new(
            asyncness.span(),
            "async capability operations are not supported",
        ));
    }
    if let Some(unsafety) = f.sig.unsafety {
        return Err(Error::new(
            unsafety.span(),
            "unsafe capability operations are not supported",
        ));
    }
    if let Some(param) = f.sig.generics.params.first() {
        return Err(Error::new(param.span(), "generic methods are not supported"));
    }

    let mut inputs = f.sig.inputs.iter();
    let access = match inputs.next() {
        Some(FnArg::Receiver(r)) => {
            if r.colon_token.is_some() {
                return Err(Error::new(r.span(), "typed receivers are not supported"));
            }
            match &r.reference {
                Some((_, Some(lifetime))) => {
                    return Err(Error::new(
                        lifetime.span(),
                        "receiver lifetimes are not supported",
                    ))
                }
                Some((_, None)) => {
                    if r.mutability.is_some() {
                        Access::Exclusive
                    } else {
                        Access::Shared
                    }
                }
                None => Access::Owning,
            }
        }
        _ => {
            return Err(Error::new(
                f.sig.ident.span(),
                "capability methods must take self",
            ))
        }
    };

    let mut arg_names = Vec::new();
    let mut arg_types = Vec::new();
    for arg in inputs {
        let FnArg::Typed(pat_ty) = arg else {
            return Err(Error::new(arg.span(), "unexpected second receiver"));
        };
        let Pat::Ident(pat) = &*pat_ty.pat else {
            return Err(Error::new(
                pat_ty.pat.span(),
                "capability method arguments must be plain identifiers",
            ));
        };
        if pat.ident == "it" {
            return Err(Error::new(
                pat.ident.span(),
                "argument name `it` is reserved for the recovered value",
            ));
        }
        if mentions_self(quote!(#pat_ty)) {
            return Err(Error::new(
                pat_ty.span(),
                "capability methods may not mention `Self`",
            ));
        }
        arg_names.push(pat.ident.clone());
        arg_types.push(&*pat_ty.ty);
    }

    let output = &f.sig.output;
    if mentions_self(quote!(#output)) {
        return Err(Error::new(
            output.span(),
            "capability methods may not mention `Self`",
        ));
    }

    Ok(Operation {
        f,
        access,
        arg_names,
        arg_types,
    })
}

/// Build the provider-form signature: the receiver becomes a leading `it`
/// argument of the matching reference kind.
fn provider_signature(op: &Operation<'_>) -> TokenStream2 {
    let ident = &op.f.sig.ident;
    let names = &op.arg_names;
    let types = &op.arg_types;
    let output = &op.f.sig.output;
    let it_ty = match op.access {
        Access::Shared => quote!(&T),
        Access::Exclusive => quote!(&mut T),
        Access::Owning => quote!(T),
    };
    quote! {
        fn #ident(it: #it_ty #(, #names: #types)*) #output
    }
}

/// Token-level scan for `Self`, which cannot be forwarded through a provider.
fn mentions_self(tokens: TokenStream2) -> bool {
    tokens.into_iter().any(|tt| match tt {
        proc_macro2::TokenTree::Ident(ident) => ident == "Self",
        proc_macro2::TokenTree::Group(group) => mentions_self(group.stream()),
        _ => false,
    })
}
