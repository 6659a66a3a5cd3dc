use syn::parse::ParseStream;
use syn::{Attribute, Ident, LitStr};

/// What a field's `#[conform(...)]` attribute asks for.
pub enum FieldAttr {
    /// No attribute: visited without an annotation.
    Plain,
    /// `#[conform("trim,lower")]`
    Directives(LitStr),
    /// `#[conform(skip)]`
    Skip,
}

/// Container-level `#[conform(...)]` options.
#[derive(Default)]
pub struct ContainerAttr {
    /// `#[conform(wrapped)]`
    pub wrapped: bool,
}

fn conform_attrs(attrs: &[Attribute]) -> impl Iterator<Item = &Attribute> {
    attrs.iter().filter(|attr| attr.path().is_ident("conform"))
}

pub fn field_attr(attrs: &[Attribute]) -> syn::Result<FieldAttr> {
    let mut result = FieldAttr::Plain;
    for attr in conform_attrs(attrs) {
        if !matches!(result, FieldAttr::Plain) {
            return Err(syn::Error::new_spanned(attr, "duplicate `conform` attribute"));
        }
        result = attr.parse_args_with(|input: ParseStream| {
            if input.peek(LitStr) {
                return Ok(FieldAttr::Directives(input.parse()?));
            }
            let ident: Ident = input.parse()?;
            if ident == "skip" {
                Ok(FieldAttr::Skip)
            } else {
                Err(syn::Error::new(
                    ident.span(),
                    "expected a directive list such as \"trim,lower\" or `skip`",
                ))
            }
        })?;
    }
    Ok(result)
}

pub fn container_attr(attrs: &[Attribute]) -> syn::Result<ContainerAttr> {
    let mut result = ContainerAttr::default();
    for attr in conform_attrs(attrs) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("wrapped") {
                result.wrapped = true;
                Ok(())
            } else {
                Err(meta.error("unknown `conform` option, expected `wrapped`"))
            }
        })?;
    }
    Ok(result)
}
