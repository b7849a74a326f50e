use crate::{Literal, Query, value::{IntoValue, Value}};

/// What may sit in a value slot while a `Literal` is being constructed.
///
/// Only `Literal` and `Query` are inlined into the surrounding text, every
/// `Value` (including `Value::Null`) keeps its own slot.
#[derive(Debug, Clone)]
pub enum Arg {
    Value(Value),
    Literal(Literal),
    Query(Query),
}

pub trait IntoArg {
    fn into_arg(self) -> Arg;
}

impl IntoArg for Arg {
    fn into_arg(self) -> Arg {
        self
    }
}

impl<T> IntoArg for T
where
    T: IntoValue,
{
    fn into_arg(self) -> Arg {
        Arg::Value(self.into_value())
    }
}

impl IntoArg for Literal {
    fn into_arg(self) -> Arg {
        Arg::Literal(self)
    }
}

impl IntoArg for &Literal {
    fn into_arg(self) -> Arg {
        Arg::Literal(self.clone())
    }
}

impl IntoArg for Query {
    fn into_arg(self) -> Arg {
        Arg::Query(self)
    }
}

impl IntoArg for &Query {
    fn into_arg(self) -> Arg {
        Arg::Query(self.clone())
    }
}
