use tracing::{debug, trace};

use crate::{
    Literal,
    clause::{Clause, ClauseStore},
    error::{Error, Result},
    literal::IntoLiteral,
};

/// Clause-by-clause statement builder.
///
/// A `Query` is never modified: every method returns a new `Query` and
/// leaves the receiver as it was, so a partial query can be shared and
/// extended in several directions.
#[derive(Debug, Clone, Default)]
pub struct Query {
    clauses: ClauseStore,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    fn add_to_clause(&self, clause: Clause, literal: Literal, replace: bool) -> Self {
        let clauses = if replace {
            self.clauses.replace(clause, literal)
        } else {
            self.clauses.push(clause, literal)
        };
        Self { clauses }
    }

    fn push<T: IntoLiteral>(&self, clause: Clause, fragment: T, delimiter: &str) -> Self {
        let literal = fragment.into_literal().with_delimiter(delimiter);
        self.add_to_clause(clause, literal, false)
    }

    fn replace<T: IntoLiteral>(&self, clause: Clause, fragment: T) -> Self {
        self.add_to_clause(clause, fragment.into_literal(), true)
    }

    /// Fragments currently held for `clause`, in call order.
    pub fn fragments(&self, clause: Clause) -> &[Literal] {
        self.clauses.get(clause)
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.populated().next().is_none()
    }

    // accumulating clauses

    pub fn select<T: IntoLiteral>(&self, fragment: T) -> Self {
        self.push(Clause::Select, fragment, ", ")
    }

    pub fn values<T: IntoLiteral>(&self, fragment: T) -> Self {
        self.push(Clause::Values, fragment, ", ")
    }

    pub fn set<T: IntoLiteral>(&self, fragment: T) -> Self {
        self.push(Clause::Set, fragment, ", ")
    }

    pub fn join<T: IntoLiteral>(&self, fragment: T) -> Self {
        let literal = fragment.into_literal().with_delimiter("\n").prefix("JOIN ");
        self.add_to_clause(Clause::Join, literal, false)
    }

    pub fn left_join<T: IntoLiteral>(&self, fragment: T) -> Self {
        let literal = fragment.into_literal().with_delimiter("\n").prefix("LEFT JOIN ");
        self.add_to_clause(Clause::Join, literal, false)
    }

    pub fn where_clause<T: IntoLiteral>(&self, fragment: T) -> Self {
        self.push(Clause::Where, fragment, " AND ")
    }

    pub fn or_where_clause<T: IntoLiteral>(&self, fragment: T) -> Self {
        self.push(Clause::Where, fragment, " OR ")
    }

    pub fn on_duplicate<T: IntoLiteral>(&self, fragment: T) -> Self {
        self.push(Clause::OnDuplicate, fragment, ", ")
    }

    pub fn group_by<T: IntoLiteral>(&self, fragment: T) -> Self {
        self.push(Clause::GroupBy, fragment, ", ")
    }

    pub fn having<T: IntoLiteral>(&self, fragment: T) -> Self {
        self.push(Clause::Having, fragment, " AND ")
    }

    pub fn or_having<T: IntoLiteral>(&self, fragment: T) -> Self {
        self.push(Clause::Having, fragment, " OR ")
    }

    pub fn order_by<T: IntoLiteral>(&self, fragment: T) -> Self {
        self.push(Clause::OrderBy, fragment, ", ")
    }

    pub fn returning<T: IntoLiteral>(&self, fragment: T) -> Self {
        self.push(Clause::Returning, fragment, ", ")
    }

    // replacing clauses, last call wins

    pub fn insert_into<T: IntoLiteral>(&self, fragment: T) -> Self {
        self.replace(Clause::Insert, fragment)
    }

    pub fn delete(&self) -> Self {
        self.replace(Clause::Delete, Literal::default())
    }

    pub fn update<T: IntoLiteral>(&self, fragment: T) -> Self {
        self.replace(Clause::Update, fragment)
    }

    pub fn from<T: IntoLiteral>(&self, fragment: T) -> Self {
        self.replace(Clause::From, fragment)
    }

    pub fn limit<T: IntoLiteral>(&self, fragment: T) -> Self {
        self.replace(Clause::Limit, fragment)
    }

    pub fn lock_in_share_mode(&self) -> Self {
        self.replace(Clause::Lock, Literal::constant("LOCK IN SHARE MODE"))
    }

    pub fn for_update(&self) -> Self {
        self.replace(Clause::Lock, Literal::constant("FOR UPDATE"))
    }

    // building the query

    /// Builds the statement with one clause per line.
    pub fn build(&self) -> Result<Literal> {
        self.build_with("\n")
    }

    /// Builds the statement, joining clauses with `delimiter`.
    ///
    /// Clauses are emitted in [`Clause::ALL`] order whatever order they were
    /// added in. Inside a clause each fragment is joined to the one before it
    /// with its own delimiter, so `where, or_where, where` reads `a OR b AND c`.
    /// Clauses are always joined with `delimiter` itself, an empty one included.
    pub fn build_with(&self, delimiter: &str) -> Result<Literal> {
        let mut clauses = self.clauses.populated().filter_map(|(clause, fragments)| {
            let (first, rest) = fragments.split_first()?;
            let reduced = rest
                .iter()
                .fold(first.clone(), |acc, fragment| acc.append(fragment));
            Some(reduced.prefix(clause.keyword()))
        });

        let Some(first) = clauses.next() else {
            debug!("build called on a query without clauses");
            return Err(Error::EmptyBuild);
        };

        let built = clauses.fold(first, |acc, clause| acc.append(clause.with_delimiter(delimiter)));
        trace!(placeholders = built.values().len(), "built query");
        Ok(built)
    }
}
