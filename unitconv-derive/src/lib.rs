//! Derive macro implementation used by `unitconv-core`.
//!
//! `unitconv-derive` is an implementation detail of this workspace. The `Unit` derive expands in terms of
//! `crate::Unit`, `crate::UnitRatio` and `crate::Quantity`, so it is intended to be used by `unitconv-core` (or by
//! crates that expose an identical crate-root API).
//!
//! Most users should depend on `unitconv` instead and use the predefined converters.
//!
//! # Generated impls
//!
//! For a unit marker type `MyUnit`, the derive implements:
//!
//! - `crate::Unit for MyUnit`
//! - `core::fmt::Display for crate::Quantity<MyUnit>` (formats as `<value> <symbol>`)
//!
//! # Attributes
//!
//! The derive reads a required `#[unit(...)]` attribute:
//!
//! - `symbol = "km"`: displayed unit symbol
//! - `name = "Kilometers"`: long (plural) label; defaults to the type name
//! - `dimension = SomeDim`: dimension marker type
//! - `ratio = "1000000000"`: exact ratio to the canonical unit of the dimension
//!
//! The ratio is an exact decimal literal, optionally written as a quotient (`"5280 / 3.28084"`). It is parsed here,
//! at expansion time, into a reduced integer `numer / denom` pair so every ratio table stays `const` data with no
//! floating-point drift. Integer literals (`ratio = 1024`) are accepted as well.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::{Literal, Span, TokenStream as TokenStream2};
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, Attribute, DeriveInput, Expr, Ident, Lit, LitStr, Token,
};

/// Derive `crate::Unit` and a `Display` impl for `crate::Quantity<ThisUnit>`.
///
/// The derive must be paired with a `#[unit(...)]` attribute providing `symbol`, `dimension`, and `ratio`.
///
/// This macro is intended for use by `unitconv-core`.
#[proc_macro_derive(Unit, attributes(unit))]
pub fn derive_unit(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_unit_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_unit_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    let unit_attr = parse_unit_attribute(&input.attrs)?;

    let symbol = &unit_attr.symbol;
    let dimension = &unit_attr.dimension;
    let long_name = unit_attr
        .name
        .clone()
        .unwrap_or_else(|| LitStr::new(&name.to_string(), name.span()));
    let numer = Literal::u128_unsuffixed(unit_attr.ratio.numer);
    let denom = Literal::u128_unsuffixed(unit_attr.ratio.denom);

    let expanded = quote! {
        impl crate::Unit for #name {
            const RATIO: crate::UnitRatio = crate::UnitRatio::new(#numer, #denom);
            type Dim = #dimension;
            const SYMBOL: &'static str = #symbol;
            const NAME: &'static str = #long_name;
        }

        impl ::core::fmt::Display for crate::Quantity<#name> {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{} {}", self.value(), <#name as crate::Unit>::SYMBOL)
            }
        }
    };

    Ok(expanded)
}

/// Exact rational parsed from the `ratio = ...` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ParsedRatio {
    numer: u128,
    denom: u128,
}

/// Parsed contents of the `#[unit(...)]` attribute.
struct UnitAttribute {
    symbol: LitStr,
    name: Option<LitStr>,
    dimension: Expr,
    ratio: ParsedRatio,
}

impl Parse for UnitAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut symbol: Option<LitStr> = None;
        let mut name: Option<LitStr> = None;
        let mut dimension: Option<Expr> = None;
        let mut ratio: Option<ParsedRatio> = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "symbol" => {
                    symbol = Some(input.parse()?);
                }
                "name" => {
                    name = Some(input.parse()?);
                }
                "dimension" => {
                    dimension = Some(input.parse()?);
                }
                "ratio" => {
                    let lit: Lit = input.parse()?;
                    ratio = Some(ratio_from_lit(&lit)?);
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute `{}`", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        let symbol = symbol
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `symbol`"))?;
        let dimension = dimension.ok_or_else(|| {
            syn::Error::new(input.span(), "missing required attribute `dimension`")
        })?;
        let ratio = ratio
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `ratio`"))?;

        Ok(UnitAttribute {
            symbol,
            name,
            dimension,
            ratio,
        })
    }
}

fn parse_unit_attribute(attrs: &[Attribute]) -> syn::Result<UnitAttribute> {
    for attr in attrs {
        if attr.path().is_ident("unit") {
            return attr.parse_args::<UnitAttribute>();
        }
    }

    Err(syn::Error::new(
        Span::call_site(),
        "missing #[unit(...)] attribute",
    ))
}

// ─────────────────────────────────────────────────────────────────────────────
// Ratio literal parsing
// ─────────────────────────────────────────────────────────────────────────────

fn ratio_from_lit(lit: &Lit) -> syn::Result<ParsedRatio> {
    let (text, span) = match lit {
        Lit::Str(s) => (s.value(), s.span()),
        Lit::Int(i) => (i.base10_digits().to_string(), i.span()),
        other => {
            return Err(syn::Error::new(
                other.span(),
                "`ratio` must be a string or integer literal",
            ))
        }
    };

    parse_ratio(&text).map_err(|msg| syn::Error::new(span, msg))
}

/// Parses `"<decimal>"` or `"<decimal> / <decimal>"` into a reduced rational.
fn parse_ratio(text: &str) -> Result<ParsedRatio, String> {
    let mut parts = text.split('/');
    let head = parts.next().unwrap_or_default();
    let tail = parts.next();
    if parts.next().is_some() {
        return Err(format!("ratio `{}` has more than one `/`", text));
    }

    let (mut numer, mut denom) = parse_decimal(head.trim())?;
    if let Some(divisor) = tail {
        let (d_numer, d_denom) = parse_decimal(divisor.trim())?;
        numer = numer
            .checked_mul(d_denom)
            .ok_or_else(|| format!("ratio `{}` overflows u128", text))?;
        denom = denom
            .checked_mul(d_numer)
            .ok_or_else(|| format!("ratio `{}` overflows u128", text))?;
    }

    if numer == 0 || denom == 0 {
        return Err(format!("ratio `{}` must be non-zero", text));
    }

    let g = gcd(numer, denom);
    Ok(ParsedRatio {
        numer: numer / g,
        denom: denom / g,
    })
}

/// Parses an unsigned decimal with optional fraction and exponent into `numer / denom`.
fn parse_decimal(text: &str) -> Result<(u128, u128), String> {
    let overflow = || format!("decimal `{}` overflows u128", text);

    let (body, exponent) = match text.find(['e', 'E']) {
        Some(pos) => {
            let exp = text[pos + 1..]
                .parse::<i32>()
                .map_err(|_| format!("invalid exponent in `{}`", text))?;
            (&text[..pos], exp)
        }
        None => (text, 0),
    };

    let (int_part, frac_part) = match body.split_once('.') {
        Some((i, f)) => (i, f),
        None => (body, ""),
    };

    if int_part.is_empty() && frac_part.is_empty() {
        return Err(format!("invalid decimal `{}`", text));
    }

    let mut mantissa: u128 = 0;
    for c in int_part.chars().chain(frac_part.chars()) {
        let digit = c
            .to_digit(10)
            .ok_or_else(|| format!("invalid digit `{}` in `{}`", c, text))?;
        mantissa = mantissa
            .checked_mul(10)
            .and_then(|m| m.checked_add(u128::from(digit)))
            .ok_or_else(overflow)?;
    }

    let scale = frac_part.len() as i32 - exponent;
    if scale >= 0 {
        let denom = 10u128.checked_pow(scale as u32).ok_or_else(overflow)?;
        Ok((mantissa, denom))
    } else {
        let factor = 10u128.checked_pow((-scale) as u32).ok_or_else(overflow)?;
        Ok((mantissa.checked_mul(factor).ok_or_else(overflow)?, 1))
    }
}

fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}
