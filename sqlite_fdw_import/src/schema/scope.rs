//! Table scope filtering for `LIMIT TO` / `EXCEPT` imports

use indexmap::IndexSet;

use crate::schema::types::ScopePolicy;

impl ScopePolicy {
    /// Build a `LIMIT TO` policy from table names
    pub fn limit_to<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScopePolicy::LimitTo(names.into_iter().map(Into::into).collect::<IndexSet<_>>())
    }

    /// Build an `EXCEPT` policy from table names
    pub fn except<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScopePolicy::Except(names.into_iter().map(Into::into).collect::<IndexSet<_>>())
    }

    /// Whether a source table takes part in the import. Names match exactly.
    pub fn is_in_scope(&self, table_name: &str) -> bool {
        match self {
            ScopePolicy::LimitTo(names) => names.contains(table_name),
            ScopePolicy::Except(names) => !names.contains(table_name),
            ScopePolicy::Unrestricted => true,
        }
    }
}

/// Free-function form of [`ScopePolicy::is_in_scope`]
pub fn is_in_scope(policy: &ScopePolicy, table_name: &str) -> bool {
    policy.is_in_scope(table_name)
}
