use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::punctuated::Punctuated;
use syn::{parse_macro_input, DeriveInput, Path, Token};

/// Derives `Polymorphic`, `Constructible`, `Polymorph` and one `Implements<dyn Trait>`
/// per contract listed in `#[polymorph(implements(...))]`.
///
/// The type must also implement `Default`, `Serialize` and `Deserialize`.
#[proc_macro_derive(Polymorphic, attributes(polymorph))]
pub fn derive_polymorphic(input: TokenStream) -> TokenStream {
  let input = parse_macro_input!(input as DeriveInput);
  expand(&input).unwrap_or_else(syn::Error::into_compile_error).into()
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
  if !input.generics.params.is_empty() {
    return Err(syn::Error::new_spanned(
      &input.generics,
      "#[derive(Polymorphic)] does not support generic types",
    ));
  }
  let name = &input.ident;
  let contracts = parse_contracts(input)?;
  let krate = quote!(::polymorph_json_core_rs);

  let implements = contracts.iter().map(|contract| {
    quote! {
      impl #krate::Implements<dyn #contract> for #name {
        fn upcast(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn #contract> {
          self
        }
      }
    }
  });

  Ok(quote! {
    impl #krate::Polymorphic for #name {
      fn type_identity(&self) -> #krate::TypeIdentity {
        <Self as #krate::Constructible>::static_identity()
      }

      fn to_document(&self) -> ::std::result::Result<#krate::__private::Value, #krate::CodecError> {
        #krate::document::to_document(self)
      }

      fn populate(&mut self, node: &#krate::__private::Value) -> ::std::result::Result<(), #krate::CodecError> {
        #krate::document::populate(self, node)
      }

      fn as_any(&self) -> &(dyn ::std::any::Any + ::std::marker::Send + ::std::marker::Sync) {
        self
      }

      fn into_any(
        self: ::std::boxed::Box<Self>,
      ) -> ::std::boxed::Box<dyn ::std::any::Any + ::std::marker::Send + ::std::marker::Sync> {
        self
      }
    }

    impl #krate::Constructible for #name {
      fn static_identity() -> #krate::TypeIdentity {
        #krate::TypeIdentity::of::<Self>()
      }

      #[allow(unused_variables)]
      fn register_casts(casts: &mut #krate::CastRegistrar<Self>) {
        #( casts.implements::<dyn #contracts>(); )*
      }
    }

    #( #implements )*

    impl #krate::Polymorph for #name {
      fn shape() -> #krate::Shape {
        #krate::Shape::Concrete
      }

      fn encode(
        &self,
        codec: &#krate::PolymorphCodec,
      ) -> ::std::result::Result<::std::option::Option<#krate::__private::Value>, #krate::CodecError> {
        codec.write_concrete(self).map(::std::option::Option::Some)
      }

      fn decode(
        codec: &#krate::PolymorphCodec,
        node: &#krate::__private::Value,
      ) -> ::std::result::Result<::std::option::Option<Self>, #krate::CodecError> {
        codec.read_concrete::<Self>(node)
      }
    }
  })
}

fn parse_contracts(input: &DeriveInput) -> syn::Result<Vec<Path>> {
  let mut contracts = Vec::new();
  for attr in input.attrs.iter().filter(|attr| attr.path().is_ident("polymorph")) {
    attr.parse_nested_meta(|meta| {
      if meta.path.is_ident("implements") {
        let content;
        syn::parenthesized!(content in meta.input);
        let paths = Punctuated::<Path, Token![,]>::parse_terminated_with(&content, Path::parse_mod_style)?;
        contracts.extend(paths);
        Ok(())
      } else {
        Err(meta.error("expected `implements(...)`"))
      }
    })?;
  }
  Ok(contracts)
}
