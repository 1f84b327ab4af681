//! Text rendering of a card-game value surface.
//!
//! The reference card game's value function is a surface over
//! `(player total, dealer showing)`, one for hands without a usable ace
//! and one for hands with. [`Surface`] lays each out as a grid with the
//! player's total across and the dealer's card down. Cells for hands the
//! estimator never saw read `0.0`.
use crate::*;
use std::ops::RangeInclusive;

/// A titled view of the values of [`Hand`] states.
pub struct Surface<'v> {
    title: &'v str,
    values: &'v Values<Hand>,
}

impl<'v> Surface<'v> {
    pub fn new(title: &'v str, values: &'v Values<Hand>) -> Self {
        Self { title, values }
    }
    /// Player totals spanned by the visited hands.
    pub fn totals(&self) -> RangeInclusive<u8> {
        let min = self.values.states().map(Hand::total).min().unwrap_or(1);
        let max = self.values.states().map(Hand::total).max().unwrap_or(0);
        min..=max
    }
    /// Dealer cards spanned by the visited hands.
    pub fn dealers(&self) -> RangeInclusive<u8> {
        let min = self.values.states().map(Hand::dealer).min().unwrap_or(1);
        let max = self.values.states().map(Hand::dealer).max().unwrap_or(0);
        min..=max
    }
    /// Values laid out as `grid[dealer][total]`, offset by the range minimums.
    pub fn grid(&self, ace: bool) -> Vec<Vec<Utility>> {
        self.dealers()
            .map(|dealer| {
                self.totals()
                    .map(|total| self.values.get(&Hand::from((total, dealer, ace))))
                    .collect()
            })
            .collect()
    }
    fn rule(f: &mut std::fmt::Formatter<'_>, ends: [char; 3], cols: usize) -> std::fmt::Result {
        let [l, m, r] = ends;
        write!(f, "{}────────", l)?;
        for _ in 0..cols {
            write!(f, "{}────────", m)?;
        }
        writeln!(f, "{}", r)
    }
}

#[rustfmt::skip]
impl std::fmt::Display for Surface<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.values.is_empty() {
            return writeln!(f, "{}: no states", self.title);
        }
        let cols = self.totals().count();
        for (ace, label) in [(false, "No Usable Ace"), (true, "Usable Ace")] {
            writeln!(f, "{} ({})", self.title, label)?;
            Self::rule(f, ['┌', '┬', '┐'], cols)?;
            write!(f, "│ D \\ P  ")?;
            for total in self.totals() {
                write!(f, "│ {:>6} ", total)?;
            }
            writeln!(f, "│")?;
            Self::rule(f, ['├', '┼', '┤'], cols)?;
            for (dealer, row) in self.dealers().zip(self.grid(ace)) {
                write!(f, "│ {:>6} ", dealer)?;
                for value in row {
                    write!(f, "│ {:>+6.2} ", value)?;
                }
                writeln!(f, "│")?;
            }
            Self::rule(f, ['└', '┴', '┘'], cols)?;
        }
        Ok(())
    }
}
