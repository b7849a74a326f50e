/// How a placeholder slot is spelled in rendered text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderStyle {
    /// `$1`, `$2`, ...
    Positional,
    /// `?` for every slot
    Anonymous,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    Postgres,
    MySql,
    Sqlite,
}

impl Dialect {
    pub fn placeholder_style(self) -> PlaceholderStyle {
        match self {
            Dialect::Postgres => PlaceholderStyle::Positional,
            Dialect::MySql | Dialect::Sqlite => PlaceholderStyle::Anonymous,
        }
    }
}

pub trait HasDialect {
    const DIALECT: Dialect;
}

pub struct Postgres;

impl HasDialect for Postgres {
    const DIALECT: Dialect = Dialect::Postgres;
}

pub struct MySql;

impl HasDialect for MySql {
    const DIALECT: Dialect = Dialect::MySql;
}

pub struct Sqlite;

impl HasDialect for Sqlite {
    const DIALECT: Dialect = Dialect::Sqlite;
}

#[cfg(feature = "postgres")]
impl HasDialect for sqlx::Postgres {
    const DIALECT: Dialect = Dialect::Postgres;
}

#[cfg(feature = "mysql")]
impl HasDialect for sqlx::MySql {
    const DIALECT: Dialect = Dialect::MySql;
}

#[cfg(feature = "sqlite")]
impl HasDialect for sqlx::Sqlite {
    const DIALECT: Dialect = Dialect::Sqlite;
}
