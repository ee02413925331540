//! Place-value grouping tiers.

use serde::{Deserialize, Serialize};

use crate::core::InvalidInputError;

const ONES: [&str; 20] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Eleven",
    "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen", "Eighteen", "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

/// One grouping tier: amounts of `divisor` or more are named in multiples of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tier {
    pub divisor: u64,
    pub name: String,
}

impl Tier {
    pub fn new(divisor: u64, name: impl Into<String>) -> Self {
        Self {
            divisor,
            name: name.into(),
        }
    }
}

/// Ordered grouping tiers of a numbering system, largest first.
///
/// Everything below one thousand is fixed grammar (`Two Hundred and Fifty`);
/// the tiers describe how larger place values are named.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Tier>", into = "Vec<Tier>")]
pub struct NumberingSystem {
    tiers: Vec<Tier>,
}

impl NumberingSystem {
    /// Build a numbering system from tiers given in any order.
    ///
    /// The smallest tier must be 1,000, divisors must be distinct, and names
    /// must not be empty.
    pub fn new(tiers: impl IntoIterator<Item = Tier>) -> Result<Self, InvalidInputError> {
        let mut tiers: Vec<Tier> = tiers.into_iter().collect();
        tiers.sort_by(|a, b| b.divisor.cmp(&a.divisor));

        match tiers.last() {
            None => {
                return Err(InvalidInputError::new(
                    "tiers",
                    "at least one tier (1000) is required",
                ));
            }
            Some(smallest) if smallest.divisor != 1_000 => {
                return Err(InvalidInputError::new(
                    "tiers",
                    format!("smallest tier must be 1000, got {}", smallest.divisor),
                ));
            }
            Some(_) => {}
        }
        if let Some(pair) = tiers.windows(2).find(|w| w[0].divisor == w[1].divisor) {
            return Err(InvalidInputError::new(
                "tiers",
                format!("duplicate divisor {}", pair[0].divisor),
            ));
        }
        if let Some(tier) = tiers.iter().find(|t| t.name.trim().is_empty()) {
            return Err(InvalidInputError::new(
                "tiers",
                format!("tier {} has an empty name", tier.divisor),
            ));
        }

        Ok(Self { tiers })
    }

    /// Indian grouping: Crore (10^7), Lakh (10^5), Thousand.
    pub fn indian() -> Self {
        Self {
            tiers: vec![
                Tier::new(10_000_000, "Crore"),
                Tier::new(100_000, "Lakh"),
                Tier::new(1_000, "Thousand"),
            ],
        }
    }

    /// Western short-scale grouping: Trillion, Billion, Million, Thousand.
    pub fn western() -> Self {
        Self {
            tiers: vec![
                Tier::new(1_000_000_000_000, "Trillion"),
                Tier::new(1_000_000_000, "Billion"),
                Tier::new(1_000_000, "Million"),
                Tier::new(1_000, "Thousand"),
            ],
        }
    }

    /// Tiers, largest first.
    pub fn tiers(&self) -> &[Tier] {
        &self.tiers
    }

    /// Spell out a whole number. Zero is `"Zero"`.
    pub fn integer_to_words(&self, n: u128) -> String {
        if n == 0 {
            return "Zero".to_string();
        }
        let mut words = Vec::new();
        self.push_integer(n, &mut words);
        words.join(" ")
    }

    /// Push the words for `n > 0`.
    ///
    /// The quotient for a tier is spelled recursively, so a quotient that
    /// exceeds the next tier up still reads naturally ("One Lakh Crore").
    pub(crate) fn push_integer<'a>(&'a self, mut n: u128, words: &mut Vec<&'a str>) {
        for tier in &self.tiers {
            let divisor = u128::from(tier.divisor);
            if n >= divisor {
                self.push_integer(n / divisor, words);
                words.push(&tier.name);
                n %= divisor;
            }
        }
        if n > 0 {
            push_below_thousand(n as usize, words);
        }
    }
}

impl Default for NumberingSystem {
    fn default() -> Self {
        Self::indian()
    }
}

impl TryFrom<Vec<Tier>> for NumberingSystem {
    type Error = InvalidInputError;

    fn try_from(tiers: Vec<Tier>) -> Result<Self, Self::Error> {
        Self::new(tiers)
    }
}

impl From<NumberingSystem> for Vec<Tier> {
    fn from(system: NumberingSystem) -> Self {
        system.tiers
    }
}

fn push_below_thousand(n: usize, words: &mut Vec<&str>) {
    let hundreds = n / 100;
    let rest = n % 100;
    if hundreds > 0 {
        words.push(ONES[hundreds]);
        words.push("Hundred");
        if rest > 0 {
            words.push("and");
        }
    }
    if rest >= 20 {
        words.push(TENS[rest / 10]);
        if rest % 10 > 0 {
            words.push(ONES[rest % 10]);
        }
    } else if rest > 0 {
        words.push(ONES[rest]);
    }
}
