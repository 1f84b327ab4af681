use crate::*;

/// What a player sees at a blackjack decision point.
///
/// - `total` — sum of the player's cards, aces counted high when usable
/// - `dealer` — value of the dealer's showing card (ace = 1)
/// - `ace` — whether the player holds an ace counted as 11
///
/// Ordered by `(total, dealer, ace)`, which is also the order the
/// value surface walks its axes.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
pub struct Hand {
    total: u8,
    dealer: u8,
    ace: bool,
}

impl Hand {
    pub fn total(&self) -> u8 {
        self.total
    }
    pub fn dealer(&self) -> u8 {
        self.dealer
    }
    pub fn ace(&self) -> bool {
        self.ace
    }
}

impl From<(u8, u8, bool)> for Hand {
    fn from((total, dealer, ace): (u8, u8, bool)) -> Self {
        Self { total, dealer, ace }
    }
}
impl From<Hand> for (u8, u8, bool) {
    fn from(hand: Hand) -> Self {
        (hand.total, hand.dealer, hand.ace)
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.ace {
            true => write!(f, "{:>2}* v {:>2}", self.total, self.dealer),
            false => write!(f, "{:>2}  v {:>2}", self.total, self.dealer),
        }
    }
}

/// The two moves available to a blackjack player.
///
/// u8 isomorphism
/// 0 = stick, 1 = hit
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
pub enum Decision {
    Stick,
    Hit,
}

impl From<Decision> for u8 {
    fn from(decision: Decision) -> u8 {
        match decision {
            Decision::Stick => 0,
            Decision::Hit => 1,
        }
    }
}
impl TryFrom<u8> for Decision {
    type Error = Violation;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            0 => Ok(Decision::Stick),
            1 => Ok(Decision::Hit),
            n => Err(Violation::InvalidAction(format!("no decision encoded as {}", n))),
        }
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Decision::Stick => write!(f, "stick"),
            Decision::Hit => write!(f, "hit"),
        }
    }
}
