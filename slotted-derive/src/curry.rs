//! Implementation of the `curry!` procedural macro.
//!
//! # Supported Input Forms
//!
//! 1. Closure form: `curry!(|a, b| body)`, arity = parameter count
//! 2. Function name + arity form: `curry!(function_name, arity)`
//!
//! Input is read by a `Parse` impl on [`CurryInput`]: one expression, an
//! optional comma, an optional arity expression and an optional trailing
//! comma. The pair is then checked as a whole, so a misplaced closure or a
//! missing arity is reported on the offending token.
//!
//! # Generated Code Structure
//!
//! For `curry!(add, 2)` the macro generates:
//!
//! ```text
//! {
//!     let __slotted_function = add;
//!     ::slotted::curry::Curried::new(
//!         move |__slotted_invocation: ::slotted::curry::Invocation<_>| {
//!             let ::core::result::Result::Ok([__slotted_argument_0, __slotted_argument_1]) =
//!                 __slotted_invocation.into_required_array::<2usize>()
//!             else {
//!                 ::core::unreachable!("...")
//!             };
//!             __slotted_function(__slotted_argument_0, __slotted_argument_1)
//!         },
//!         2usize,
//!     )
//! }
//! ```
//!
//! The closure form is identical with the closure in place of `add`.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::{Expr, ExprClosure, ExprLit, ExprPath, Lit, Token};

/// What the macro was asked to wrap, with its arity settled.
enum CurryInput {
    Closure(ExprClosure),
    FunctionWithArity { function: ExprPath, arity: usize },
}

impl CurryInput {
    fn arity(&self) -> usize {
        match self {
            Self::Closure(closure) => closure.inputs.len(),
            Self::FunctionWithArity { arity, .. } => *arity,
        }
    }

    fn from_parts(target: Expr, arity: Option<Expr>) -> syn::Result<Self> {
        match (target, arity) {
            (Expr::Closure(closure), None) => Ok(Self::Closure(closure)),
            (Expr::Path(function), Some(arity)) => Ok(Self::FunctionWithArity {
                function,
                arity: literal_arity(&arity)?,
            }),
            (Expr::Path(function), None) => Err(syn::Error::new_spanned(
                function,
                "curry! needs an arity after a function path, as in `curry!(add, 2)`",
            )),
            (Expr::Closure(closure), Some(_)) => Err(syn::Error::new_spanned(
                closure,
                "curry! counts closure parameters itself and takes no arity",
            )),
            (other, Some(_)) => Err(syn::Error::new_spanned(
                other,
                "curry! expects a function path in front of the arity",
            )),
            (other, None) => Err(syn::Error::new_spanned(other, MISSING_TARGET)),
        }
    }
}

const MISSING_TARGET: &str = "curry! takes a closure, or a function path and its arity";

impl Parse for CurryInput {
    fn parse(input: ParseStream<'_>) -> syn::Result<Self> {
        if input.is_empty() {
            return Err(input.error(MISSING_TARGET));
        }
        let target: Expr = input.parse()?;

        let mut arity = None;
        if input.parse::<Option<Token![,]>>()?.is_some() && !input.is_empty() {
            arity = Some(input.parse::<Expr>()?);
            input.parse::<Option<Token![,]>>()?;
        }

        if !input.is_empty() {
            return Err(input.error("curry! takes at most two arguments"));
        }
        Self::from_parts(target, arity)
    }
}

fn literal_arity(expression: &Expr) -> syn::Result<usize> {
    match expression {
        Expr::Lit(ExprLit {
            lit: Lit::Int(literal),
            ..
        }) => literal.base10_parse(),
        other => Err(syn::Error::new_spanned(
            other,
            "curry! arity must be an integer literal",
        )),
    }
}

pub fn curry_impl(input: TokenStream) -> TokenStream {
    let expanded = match syn::parse::<CurryInput>(input) {
        Ok(curry_input) => generate_curried(&curry_input),
        Err(error) => error.to_compile_error(),
    };

    TokenStream::from(expanded)
}

fn generate_curried(curry_input: &CurryInput) -> TokenStream2 {
    let arity = curry_input.arity();
    let function_expression = match curry_input {
        CurryInput::Closure(closure) => quote! { #closure },
        CurryInput::FunctionWithArity { function, .. } => quote! { #function },
    };

    let argument_identifiers: Vec<_> = (0..arity)
        .map(|index| quote::format_ident!("__slotted_argument_{}", index))
        .collect();

    quote! {
        {
            let __slotted_function = #function_expression;
            ::slotted::curry::Curried::new(
                move |__slotted_invocation: ::slotted::curry::Invocation<_>| {
                    let ::core::result::Result::Ok([#(#argument_identifiers),*]) =
                        __slotted_invocation.into_required_array::<#arity>()
                    else {
                        ::core::unreachable!("a ready invocation carries exactly its arity")
                    };
                    __slotted_function(#(#argument_identifiers),*)
                },
                #arity,
            )
        }
    }
}
