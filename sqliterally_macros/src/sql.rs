use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    Expr, LitStr, Token,
    parse::{Parse, ParseStream},
    parse_macro_input,
    punctuated::Punctuated,
};

struct SqlInput {
    template: LitStr,
    args: Punctuated<Expr, Token![,]>,
}

impl Parse for SqlInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let template: LitStr = input.parse()?;
        let args = if input.is_empty() {
            Punctuated::new()
        } else {
            input.parse::<Token![,]>()?;
            Punctuated::parse_terminated(input)?
        };
        Ok(Self { template, args })
    }
}

fn split_template(template: &str) -> Result<Vec<String>, &'static str> {
    let mut pieces = Vec::new();
    let mut current = String::new();
    let mut chars = template.chars();

    while let Some(ch) = chars.next() {
        match ch {
            '{' => match chars.next() {
                Some('{') => current.push('{'),
                Some('}') => pieces.push(std::mem::take(&mut current)),
                _ => return Err("unmatched `{` in sql template, use `{{` for a literal brace"),
            },
            '}' => match chars.next() {
                Some('}') => current.push('}'),
                _ => return Err("unmatched `}` in sql template, use `}}` for a literal brace"),
            },
            _ => current.push(ch),
        }
    }

    pieces.push(current);
    Ok(pieces)
}

pub fn sql_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as SqlInput);
    expand(input).unwrap_or_else(syn::Error::into_compile_error).into()
}

fn expand(input: SqlInput) -> syn::Result<TokenStream2> {
    let pieces = split_template(&input.template.value())
        .map_err(|msg| syn::Error::new(input.template.span(), msg))?;

    let slots = pieces.len() - 1;
    if slots != input.args.len() {
        let msg = format!(
            "sql template has {} placeholder(s) but {} value(s) were given",
            slots,
            input.args.len()
        );
        return Err(syn::Error::new(input.template.span(), msg));
    }

    let args = input.args.iter();
    Ok(quote! {
        ::sqliterally::sql(
            [#(#pieces),*],
            [#(::sqliterally::IntoArg::into_arg(#args)),*],
        )
    })
}
