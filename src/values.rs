use crate::*;
use std::collections::BTreeMap;

/// An estimated state-value function.
///
/// Holds an entry for every state an estimator visited. Unvisited states
/// are absent: [`Values::get`] reads them as `0.0` without inserting, and
/// [`Values::contains`] tells the two apart.
///
/// Built fresh by each evaluation and handed back by value; nothing outside
/// this crate can mutate it afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Values<S>
where
    S: State,
{
    table: BTreeMap<S, Utility>,
}

impl<S> Default for Values<S>
where
    S: State,
{
    fn default() -> Self {
        Self {
            table: BTreeMap::new(),
        }
    }
}

impl<S> Values<S>
where
    S: State,
{
    /// Value of `state`, or `0.0` if it was never visited.
    pub fn get(&self, state: &S) -> Utility {
        self.table.get(state).copied().unwrap_or_default()
    }
    /// Whether `state` was visited at all.
    pub fn contains(&self, state: &S) -> bool {
        self.table.contains_key(state)
    }
    pub fn len(&self) -> usize {
        self.table.len()
    }
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
    pub fn states(&self) -> impl Iterator<Item = &S> {
        self.table.keys()
    }
    pub fn iter(&self) -> impl Iterator<Item = (&S, Utility)> {
        self.table.iter().map(|(s, v)| (s, *v))
    }
    pub(crate) fn set(&mut self, state: S, value: Utility) {
        self.table.insert(state, value);
    }
}

impl<S> FromIterator<(S, Utility)> for Values<S>
where
    S: State,
{
    fn from_iter<I: IntoIterator<Item = (S, Utility)>>(iter: I) -> Self {
        Self {
            table: iter.into_iter().collect(),
        }
    }
}

impl<S> IntoIterator for Values<S>
where
    S: State,
{
    type Item = (S, Utility);
    type IntoIter = std::collections::btree_map::IntoIter<S, Utility>;
    fn into_iter(self) -> Self::IntoIter {
        self.table.into_iter()
    }
}

/// Serialized as an ordered list of `[state, value]` pairs, so states need
/// not be valid map keys in the target format.
impl<S> serde::Serialize for Values<S>
where
    S: State + serde::Serialize,
{
    fn serialize<Z>(&self, serializer: Z) -> Result<Z::Ok, Z::Error>
    where
        Z: serde::Serializer,
    {
        serializer.collect_seq(self.table.iter())
    }
}

impl<S> std::fmt::Display for Values<S>
where
    S: State,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (state, value) in self.iter() {
            writeln!(f, "{:<24} {:>+8.4}", format!("{:?}", state), value)?;
        }
        Ok(())
    }
}
