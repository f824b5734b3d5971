//! Rule tables for elementary (one-dimensional, binary, radius one)
//! cellular automata.
//!
//! A rule table maps each of the eight possible neighbourhoods
//! `(left, centre, right)` to the next state of the centre cell. The
//! neighbourhood is encoded as the 3-bit code `4*left + 2*centre + right`,
//! and entry `code` of the table is the new state.
//!
//! Tables are validated on construction: exactly eight entries, each 0 or 1.
//! A validated table can be indexed by any 3-bit code without further checks.

use interacts_core::error::{InteractError, Result};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of entries in a rule table (one per 3-cell neighbourhood).
pub const RULE_TABLE_LEN: usize = 8;

/// Encodes a neighbourhood as its 3-bit code `4*left + 2*centre + right`.
#[inline]
pub fn neighbourhood_code(left: u8, centre: u8, right: u8) -> usize {
    4 * usize::from(left) + 2 * usize::from(centre) + usize::from(right)
}

/// A validated elementary cellular automaton rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<u8>", into = "Vec<u8>"))]
pub struct RuleTable {
    entries: [u8; RULE_TABLE_LEN],
}

impl RuleTable {
    /// Creates a rule table from eight entries.
    ///
    /// # Errors
    ///
    /// Returns [`InteractError::InvalidRuleTable`] if any entry is not 0 or 1.
    pub fn new(entries: [u8; RULE_TABLE_LEN]) -> Result<Self> {
        if let Some((index, &value)) = entries.iter().enumerate().find(|&(_, &v)| v > 1) {
            return Err(InteractError::invalid_rule_table(format!(
                "entry {index} is {value}, expected 0 or 1"
            )));
        }
        Ok(Self { entries })
    }

    /// Builds the table for a Wolfram rule number.
    ///
    /// Entry `i` is bit `i` of `code`, so rule 30 (`0b0001_1110`) gives
    /// `[0, 1, 1, 1, 1, 0, 0, 0]`.
    pub fn from_wolfram_code(code: u8) -> Self {
        let mut entries = [0u8; RULE_TABLE_LEN];
        for (i, entry) in entries.iter_mut().enumerate() {
            *entry = (code >> i) & 1;
        }
        Self { entries }
    }

    /// Returns the Wolfram rule number of this table.
    pub fn wolfram_code(&self) -> u8 {
        self.entries
            .iter()
            .enumerate()
            .fold(0u8, |acc, (i, &bit)| acc | (bit << i))
    }

    /// Next state of the centre cell for a 3-bit neighbourhood code.
    ///
    /// # Panics
    ///
    /// Panics if `code >= 8`.
    #[inline]
    pub fn next_state(&self, code: usize) -> u8 {
        self.entries[code]
    }

    /// Next state of the centre cell for an explicit neighbourhood.
    #[inline]
    pub fn apply(&self, left: u8, centre: u8, right: u8) -> u8 {
        self.next_state(neighbourhood_code(left, centre, right))
    }

    /// Returns the table entries in code order.
    pub fn entries(&self) -> &[u8; RULE_TABLE_LEN] {
        &self.entries
    }
}

impl TryFrom<&[u8]> for RuleTable {
    type Error = InteractError;

    fn try_from(entries: &[u8]) -> Result<Self> {
        let entries: [u8; RULE_TABLE_LEN] = entries.try_into().map_err(|_| {
            InteractError::invalid_rule_table(format!(
                "expected {RULE_TABLE_LEN} entries, got {}",
                entries.len()
            ))
        })?;
        Self::new(entries)
    }
}

impl TryFrom<Vec<u8>> for RuleTable {
    type Error = InteractError;

    fn try_from(entries: Vec<u8>) -> Result<Self> {
        Self::try_from(entries.as_slice())
    }
}

impl From<RuleTable> for Vec<u8> {
    fn from(rule: RuleTable) -> Self {
        rule.entries.to_vec()
    }
}

impl fmt::Display for RuleTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rule {}", self.wolfram_code())
    }
}

/// Well-known elementary rules.
pub mod presets {
    use super::RuleTable;

    /// Rule 30 - chaotic, used as a random generator.
    pub const RULE_30: u8 = 30;
    /// Rule 90 - Sierpinski triangle.
    pub const RULE_90: u8 = 90;
    /// Rule 110 - Turing complete.
    pub const RULE_110: u8 = 110;
    /// Rule 184 - traffic flow.
    pub const RULE_184: u8 = 184;

    /// Rule 30 as a table.
    pub fn rule_30() -> RuleTable {
        RuleTable::from_wolfram_code(RULE_30)
    }

    /// Rule 90 as a table.
    pub fn rule_90() -> RuleTable {
        RuleTable::from_wolfram_code(RULE_90)
    }

    /// Rule 110 as a table.
    pub fn rule_110() -> RuleTable {
        RuleTable::from_wolfram_code(RULE_110)
    }
}
