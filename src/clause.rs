use std::sync::Arc;

use crate::Literal;

/// One named section of a statement.
///
/// The declaration order is the order clauses are emitted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Clause {
    Select,
    Insert,
    Delete,
    Values,
    Update,
    Set,
    From,
    Join,
    Where,
    OnDuplicate,
    GroupBy,
    Having,
    OrderBy,
    Limit,
    Returning,
    Lock,
}

const CLAUSE_COUNT: usize = 16;

impl Clause {
    pub const ALL: [Clause; CLAUSE_COUNT] = [
        Clause::Select,
        Clause::Insert,
        Clause::Delete,
        Clause::Values,
        Clause::Update,
        Clause::Set,
        Clause::From,
        Clause::Join,
        Clause::Where,
        Clause::OnDuplicate,
        Clause::GroupBy,
        Clause::Having,
        Clause::OrderBy,
        Clause::Limit,
        Clause::Returning,
        Clause::Lock,
    ];

    /// Text put in front of the reduced clause.
    ///
    /// Joins and locks carry their keyword in each fragment.
    pub fn keyword(self) -> &'static str {
        match self {
            Clause::Select => "SELECT ",
            Clause::Insert => "INSERT INTO ",
            Clause::Delete => "DELETE",
            Clause::Values => "VALUES ",
            Clause::Update => "UPDATE ",
            Clause::Set => "SET ",
            Clause::From => "FROM ",
            Clause::Join => "",
            Clause::Where => "WHERE ",
            Clause::OnDuplicate => "ON DUPLICATE KEY UPDATE ",
            Clause::GroupBy => "GROUP BY ",
            Clause::Having => "HAVING ",
            Clause::OrderBy => "ORDER BY ",
            Clause::Limit => "LIMIT ",
            Clause::Returning => "RETURNING ",
            Clause::Lock => "",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Fragment lists per clause.
///
/// Lists are never mutated once stored: changing a clause allocates a new
/// list for that clause and shares every other one with the previous store.
#[derive(Debug, Clone, Default)]
pub(crate) struct ClauseStore {
    lists: [Arc<Vec<Literal>>; CLAUSE_COUNT],
}

impl ClauseStore {
    pub(crate) fn get(&self, clause: Clause) -> &[Literal] {
        &self.lists[clause.index()]
    }

    pub(crate) fn push(&self, clause: Clause, literal: Literal) -> Self {
        let current = self.get(clause);
        let mut list = Vec::with_capacity(current.len() + 1);
        list.extend_from_slice(current);
        list.push(literal);
        self.with_list(clause, list)
    }

    pub(crate) fn replace(&self, clause: Clause, literal: Literal) -> Self {
        self.with_list(clause, vec![literal])
    }

    fn with_list(&self, clause: Clause, list: Vec<Literal>) -> Self {
        let mut next = self.clone();
        next.lists[clause.index()] = Arc::new(list);
        next
    }

    /// Non-empty clauses in emission order.
    pub(crate) fn populated(&self) -> impl Iterator<Item = (Clause, &[Literal])> + '_ {
        Clause::ALL
            .into_iter()
            .map(move |clause| (clause, self.get(clause)))
            .filter(|(_, list)| !list.is_empty())
    }

    #[cfg(test)]
    pub(crate) fn shares(&self, other: &Self, clause: Clause) -> bool {
        Arc::ptr_eq(&self.lists[clause.index()], &other.lists[clause.index()])
    }
}
