use fxhash::FxHashSet;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{
    Attribute, Data, DeriveInput, Field, Fields, FieldsNamed, GenericArgument, Ident,
    PathArguments, PathSegment, Type, Variant, Visibility,
};

/// Parsed view of an enum annotated with `#[fprog_error]`.
struct ErrorEnum<'a> {
    name: &'a Ident,
    vis: &'a Visibility,
    ext: Ident,
    variants: Vec<ErrorVariant<'a>>,
}

struct ErrorVariant<'a> {
    ident: &'a Ident,
    source: Option<(&'a Ident, &'a Type)>,
    has_context: bool,
    cfg: Vec<&'a Attribute>,
}

pub fn expand(input: DeriveInput) -> TokenStream {
    let model = match ErrorEnum::parse(&input) {
        Ok(model) => model,
        Err(err) => return err.to_compile_error(),
    };

    let derives = missing_derives(&input);
    let ext_trait = model.ext_trait();
    let source_impls = model.source_conversions();
    let internal_impls = model.internal_conversions();

    quote! {
        #derives
        #input

        #ext_trait
        #source_impls
        #internal_impls

        #[allow(dead_code)]
        fn format_context(
            context: &::core::option::Option<::std::borrow::Cow<'static, str>>,
        ) -> ::std::borrow::Cow<'static, str> {
            context.as_ref().map_or(::std::borrow::Cow::Borrowed(""), |c| {
                ::std::borrow::Cow::Owned(format!(" ({c})"))
            })
        }
    }
}

impl<'a> ErrorEnum<'a> {
    fn parse(input: &'a DeriveInput) -> syn::Result<Self> {
        let Data::Enum(data) = &input.data else {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "fprog_error can only be applied to enums",
            ));
        };

        let variants = data.variants.iter().map(ErrorVariant::parse).collect::<syn::Result<_>>()?;

        Ok(Self {
            name: &input.ident,
            vis: &input.vis,
            ext: format_ident!("{}Ext", input.ident),
            variants,
        })
    }

    fn ext_trait(&self) -> TokenStream {
        let Self { name, vis, ext, .. } = self;

        let arms = self.variants.iter().filter(|v| v.has_context).map(|v| {
            let ident = v.ident;
            let cfg = &v.cfg;
            quote! { #(#cfg)* #name::#ident { context, .. } => *context = Some(ctx.into()), }
        });

        quote! {
            #vis trait #ext<T> {
                /// Attaches a human readable context to the error, if any.
                fn context(
                    self,
                    context: impl Into<::std::borrow::Cow<'static, str>>,
                ) -> ::core::result::Result<T, #name>;
            }

            #[automatically_derived]
            impl<T> #ext<T> for ::core::result::Result<T, #name> {
                #[inline]
                fn context(self, ctx: impl Into<::std::borrow::Cow<'static, str>>) -> Self {
                    self.map_err(|mut err| {
                        #[allow(unreachable_patterns)]
                        match &mut err {
                            #(#arms)*
                            _ => {}
                        }
                        err
                    })
                }
            }
        }
    }

    fn source_conversions(&self) -> TokenStream {
        let Self { name, ext, .. } = self;

        let impls = self.variants.iter().filter(|v| !v.is_internal()).filter_map(|v| {
            let (field, ty) = v.source?;
            let ident = v.ident;
            let cfg = &v.cfg;

            Some(quote! {
                #(#cfg)*
                #[automatically_derived]
                impl ::core::convert::From<#ty> for #name {
                    #[inline]
                    fn from(#field: #ty) -> Self {
                        Self::#ident { #field, context: None }
                    }
                }

                #(#cfg)*
                #[automatically_derived]
                impl<T> #ext<T> for ::core::result::Result<T, #ty> {
                    #[inline]
                    fn context(
                        self,
                        ctx: impl Into<::std::borrow::Cow<'static, str>>,
                    ) -> ::core::result::Result<T, #name> {
                        self.map_err(|#field| #name::#ident { #field, context: Some(ctx.into()) })
                    }
                }
            })
        });

        quote! { #(#impls)* }
    }

    fn internal_conversions(&self) -> TokenStream {
        let name = self.name;
        let Some(internal) = self.variants.iter().find(|v| v.is_internal()) else {
            return TokenStream::new();
        };
        let cfg = &internal.cfg;

        quote! {
            #(#cfg)*
            #[automatically_derived]
            impl ::core::convert::From<&'static str> for #name {
                #[inline]
                fn from(message: &'static str) -> Self {
                    Self::Internal { message: ::std::borrow::Cow::Borrowed(message), context: None }
                }
            }

            #(#cfg)*
            #[automatically_derived]
            impl ::core::convert::From<String> for #name {
                #[inline]
                fn from(message: String) -> Self {
                    Self::Internal { message: ::std::borrow::Cow::Owned(message), context: None }
                }
            }
        }
    }
}

impl<'a> ErrorVariant<'a> {
    fn parse(variant: &'a Variant) -> syn::Result<Self> {
        let Fields::Named(fields) = &variant.fields else {
            return Err(syn::Error::new_spanned(
                variant,
                "fprog_error requires named fields (`source`/`message` and `context`)",
            ));
        };

        let has_context = has_context_field(fields)?;
        let source = fields
            .named
            .iter()
            .find(|field| is_source_field(field))
            .and_then(|field| field.ident.as_ref().map(|ident| (ident, &field.ty)));

        if source.is_some() && !has_context {
            return Err(syn::Error::new_spanned(
                &variant.ident,
                "fprog_error requires `context: Option<Cow<'static, str>>` for variants with a source",
            ));
        }

        Ok(Self {
            ident: &variant.ident,
            source,
            has_context,
            cfg: variant.attrs.iter().filter(|attr| attr.path().is_ident("cfg")).collect(),
        })
    }

    fn is_internal(&self) -> bool {
        self.ident == "Internal"
    }
}

fn has_context_field(fields: &FieldsNamed) -> syn::Result<bool> {
    let Some(field) =
        fields.named.iter().find(|field| field.ident.as_ref().is_some_and(|i| i == "context"))
    else {
        return Ok(false);
    };

    if is_context_type(&field.ty) {
        Ok(true)
    } else {
        Err(syn::Error::new_spanned(&field.ty, "context field must be Option<Cow<'static, str>>"))
    }
}

fn is_source_field(field: &Field) -> bool {
    field.ident.as_ref().is_some_and(|ident| ident == "source")
        || field.attrs.iter().any(|attr| attr.path().is_ident("source"))
}

fn missing_derives(input: &DeriveInput) -> TokenStream {
    let mut derived = FxHashSet::default();
    for attr in input.attrs.iter().filter(|attr| attr.path().is_ident("derive")) {
        let _ = attr.parse_nested_meta(|meta| {
            if let Some(segment) = meta.path.segments.last() {
                derived.insert(segment.ident.to_string());
            }
            Ok(())
        });
    }

    let mut missing = Vec::new();
    if !derived.contains("Debug") {
        missing.push(quote! { Debug });
    }
    if !derived.contains("Error") {
        missing.push(quote! { ::thiserror::Error });
    }

    if missing.is_empty() { TokenStream::new() } else { quote! { #[derive(#(#missing),*)] } }
}

fn last_segment(ty: &Type) -> Option<&PathSegment> {
    match ty {
        Type::Path(path) => path.path.segments.last(),
        _ => None,
    }
}

fn angle_args(segment: &PathSegment) -> Vec<&GenericArgument> {
    match &segment.arguments {
        PathArguments::AngleBracketed(args) => args.args.iter().collect(),
        _ => Vec::new(),
    }
}

/// Matches `Option<Cow<'static, str>>` (any path prefix on each segment).
fn is_context_type(ty: &Type) -> bool {
    let Some(option) = last_segment(ty).filter(|seg| seg.ident == "Option") else {
        return false;
    };
    let option_args = angle_args(option);
    let [GenericArgument::Type(cow_ty)] = option_args.as_slice() else {
        return false;
    };
    let Some(cow) = last_segment(cow_ty).filter(|seg| seg.ident == "Cow") else {
        return false;
    };

    match angle_args(cow).as_slice() {
        [GenericArgument::Lifetime(lt), GenericArgument::Type(str_ty)] => {
            lt.ident == "static" && last_segment(str_ty).is_some_and(|seg| seg.ident == "str")
        },
        _ => false,
    }
}
