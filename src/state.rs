/// An observable configuration of an environment.
///
/// States are opaque to the estimators. They only need to be keys in an
/// ordered table and printable for debugging.
///
/// # Requirements
///
/// - `Clone` — States are stored in trajectories and tables
/// - `Hash` + `Eq` — Usable as hash keys by callers
/// - `Ord` — Sortable for deterministic iteration and rendering
/// - `Debug` — Printable for tracing
///
/// # Blanket Implementation
///
/// Every type meeting the bounds is a `State`, so string labels, tuples,
/// and [`Hand`](crate::Hand) all work without ceremony.
pub trait State
where
    Self: Clone,
    Self: PartialEq + Eq,
    Self: PartialOrd + Ord,
    Self: std::fmt::Debug,
    Self: std::hash::Hash,
{
}

impl<T> State for T where T: Clone + Eq + Ord + std::fmt::Debug + std::hash::Hash {}
