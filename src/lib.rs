//! Parameterized SQL from text fragments and values.
//!
//! A [`Literal`] keeps its text pieces apart from the values bound between
//! them and renders either `$N` or `?` placeholders on demand. [`Query`]
//! collects literals per clause and builds them into one statement.
//!
//! ```
//! use sqliterally::{query, sql};
//!
//! fn main() -> sqliterally::Result<()> {
//!     let built = query()
//!         .select("*")
//!         .from("users")
//!         .where_clause(sql!("id = {}", 123)?)
//!         .build()?;
//!     assert_eq!("SELECT *\nFROM users\nWHERE id = $1", built.text());
//!     assert_eq!("SELECT *\nFROM users\nWHERE id = ?", built.sql());
//!     Ok(())
//! }
//! ```

extern crate self as sqliterally;

mod arg;
mod clause;
mod dialect;
mod error;
mod literal;
mod query;
mod raw;
mod value;
mod writer;

use std::sync::LazyLock;

use smol_str::SmolStr;

pub use arg::Arg;
pub use arg::IntoArg;
pub use clause::Clause;
pub use dialect::{Dialect, HasDialect, MySql, PlaceholderStyle, Postgres, Sqlite};
pub use error::{Error, Result};
pub use literal::IntoLiteral;
pub use literal::Literal;
pub use query::Query;
pub use value::IntoValue;
pub use value::Value;

pub use sqliterally_macros::sql;

static QUERY: LazyLock<Query> = LazyLock::new(Query::new);

/// The empty query every statement starts from.
pub fn query() -> &'static Query {
    &QUERY
}

/// Builds a literal from `n + 1` text pieces and `n` arguments.
pub fn sql<P, A>(pieces: P, args: A) -> Result<Literal>
where
    P: IntoIterator,
    P::Item: Into<SmolStr>,
    A: IntoIterator<Item = Arg>,
{
    Literal::new(pieces, args)
}

/// Builds a literal from SQL text with `?` value slots.
pub fn raw<A>(sql: &str, args: A) -> Result<Literal>
where
    A: IntoIterator<Item = Arg>,
{
    Literal::raw(sql, args)
}
