use proc_macro::TokenStream;

mod sql;

/// Builds a `Literal` from a template and its interpolated values.
///
/// Each `{}` in the template is one value slot, `{{` and `}}` are literal
/// braces. The number of slots is checked against the number of arguments
/// at compile time.
///
/// ```ignore
/// let movie = "Memento";
/// let literal = sql!("SELECT director FROM movies WHERE title = {}", movie)?;
/// assert_eq!("SELECT director FROM movies WHERE title = $1", literal.text());
/// ```
#[proc_macro]
pub fn sql(input: TokenStream) -> TokenStream {
    sql::sql_impl(input)
}
