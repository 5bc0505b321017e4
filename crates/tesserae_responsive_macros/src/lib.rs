use proc_macro::TokenStream;
use quote::quote;
use syn::{
    Attribute, Data, DeriveInput, Fields, LitStr, Type, parse_macro_input, parse_quote,
    spanned::Spanned,
};

/// Derives `IntoPropertyBag` for a struct of component properties.
///
/// Every named field must implement `IntoPropertySpec` (a `PropertySpec`,
/// a `Responsive` map, or an `Option` of either). `None` fields are left out
/// of the bag.
///
/// Field attributes:
/// - `#[property(rename = "name")]` uses `name` as the bag key instead of the field name.
/// - `#[property(skip)]` leaves the field out entirely.
///
/// Struct attribute `#[property_value(Type)]` picks the value type, which
/// defaults to `tesserae_responsive::Value`.
#[proc_macro_derive(IntoPropertyBag, attributes(property, property_value))]
pub fn into_property_bag_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(input: DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new(
                    data.fields.span(),
                    "#[derive(IntoPropertyBag)] needs a struct with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new(
                name.span(),
                "#[derive(IntoPropertyBag)] can only be used on structs",
            ));
        }
    };

    let value_type = get_value_type(&input.attrs)?;

    let mut inserts = Vec::with_capacity(fields.len());
    for field in fields {
        let Some(ident) = &field.ident else {
            continue;
        };

        let options = get_field_options(&field.attrs)?;
        if options.skip {
            continue;
        }

        let key = options
            .rename
            .map(|lit| lit.value())
            .unwrap_or_else(|| ident.to_string());

        inserts.push(quote! {
            bag.insert_opt(#key, self.#ident);
        });
    }

    Ok(quote! {
        impl #impl_generics ::tesserae_responsive::IntoPropertyBag for #name #ty_generics #where_clause {
            type Value = #value_type;

            fn into_property_bag(self) -> ::tesserae_responsive::PropertyBag<Self::Value> {
                let mut bag = ::tesserae_responsive::PropertyBag::new();
                #(#inserts)*
                bag
            }
        }
    })
}

fn get_value_type(attrs: &[Attribute]) -> syn::Result<Type> {
    match attrs
        .iter()
        .find(|attr| attr.path().is_ident("property_value"))
    {
        // Parse the inner tokens as a type, like #[property_value(MyValue)].
        Some(attr) => attr.parse_args::<Type>(),
        None => Ok(parse_quote!(::tesserae_responsive::Value)),
    }
}

#[derive(Default)]
struct FieldOptions {
    rename: Option<LitStr>,
    skip: bool,
}

fn get_field_options(attrs: &[Attribute]) -> syn::Result<FieldOptions> {
    let mut options = FieldOptions::default();

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("property")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                options.rename = Some(meta.value()?.parse()?);
                Ok(())
            } else if meta.path.is_ident("skip") {
                options.skip = true;
                Ok(())
            } else {
                Err(meta.error("expected `rename = \"...\"` or `skip`"))
            }
        })?;
    }

    Ok(options)
}
