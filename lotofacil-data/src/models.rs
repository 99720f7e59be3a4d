use std::collections::{BTreeMap, HashSet};

use crate::error::{LotoError, Result};

/// Largeur des numéros affichés ("01".."25").
pub const TOKEN_WIDTH: usize = 2;

pub fn format_token(n: u64) -> String {
    format!("{:0width$}", n, width = TOKEN_WIDTH)
}

/// Une combinaison référence les numéros du pool par leur position,
/// dans l'ordre relatif du pool.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Combination {
    pub indices: Box<[u16]>,
}

impl Combination {
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct CombinationSet {
    pub pool: Vec<String>,
    pub size: usize,
    pub combinations: Vec<Combination>,
}

impl CombinationSet {
    pub fn len(&self) -> usize {
        self.combinations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.combinations.is_empty()
    }

    pub fn tokens<'a>(&'a self, combo: &'a Combination) -> impl Iterator<Item = &'a str> + 'a {
        combo.indices.iter().map(|&i| self.pool[i as usize].as_str())
    }

    pub fn to_numbers(&self, combo: &Combination) -> Vec<String> {
        self.tokens(combo).map(str::to_string).collect()
    }

    /// Premier et dernier numéro de la combinaison, tels quels.
    pub fn bounds<'a>(&'a self, combo: &Combination) -> (&'a str, &'a str) {
        let first = combo.indices.first().map_or("", |&i| self.pool[i as usize].as_str());
        let last = combo.indices.last().map_or("", |&i| self.pool[i as usize].as_str());
        (first, last)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    /// Position 1-based dans le fichier exporté.
    pub position: usize,
    pub numbers: Vec<String>,
}

impl Ticket {
    pub fn label(&self) -> String {
        format!("COMB-{}", self.position)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoricalDraw {
    pub numbers: Vec<String>,
}

impl HistoricalDraw {
    pub fn new<S: Into<String>>(numbers: impl IntoIterator<Item = S>) -> Self {
        Self {
            numbers: numbers.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: BTreeMap<String, u32>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, number: &str) {
        *self.counts.entry(number.to_string()).or_insert(0) += 1;
    }

    pub fn get(&self, number: &str) -> u32 {
        self.counts.get(number).copied().unwrap_or(0)
    }

    pub fn contains(&self, number: &str) -> bool {
        self.counts.contains_key(number)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.counts.values().map(|&c| c as u64).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(k, &v)| (k.as_str(), v))
    }
}

impl<S: Into<String>> FromIterator<(S, u32)> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = (S, u32)>>(iter: I) -> Self {
        Self {
            counts: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry {
    pub number: String,
    pub count: u32,
}

impl RankedEntry {
    pub fn new(number: impl Into<String>, count: u32) -> Self {
        Self {
            number: number.into(),
            count,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeBucket {
    pub lower: u32,
    pub upper: u32,
    pub total: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionGroup {
    Most,
    Less,
    Middle,
}

impl std::fmt::Display for SelectionGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SelectionGroup::Most => write!(f, "PLUS SORTIS"),
            SelectionGroup::Less => write!(f, "MOINS SORTIS"),
            SelectionGroup::Middle => write!(f, "MILIEU"),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Classification {
    /// Tous les numéros tirés, par fréquence décroissante.
    pub ranked: Vec<RankedEntry>,
    pub not_used: Vec<RankedEntry>,
    pub most_selected: Vec<RankedEntry>,
    pub less_selected: Vec<RankedEntry>,
    pub middle_selected: Vec<RankedEntry>,
    pub fixed: Vec<RankedEntry>,
    pub complementary: Vec<Vec<RankedEntry>>,
    pub final_set: Vec<RankedEntry>,
}

impl Classification {
    pub fn group_of(&self, number: &str) -> Option<SelectionGroup> {
        let has = |group: &[RankedEntry]| group.iter().any(|e| e.number == number);
        if has(&self.most_selected) {
            Some(SelectionGroup::Most)
        } else if has(&self.less_selected) {
            Some(SelectionGroup::Less)
        } else if has(&self.middle_selected) {
            Some(SelectionGroup::Middle)
        } else {
            None
        }
    }
}

/// Un pool de numéros doit être non vide et sans doublon.
pub fn validate_pool(pool: &[String]) -> Result<()> {
    if pool.is_empty() {
        return Err(LotoError::invalid("pool de numéros vide"));
    }
    let mut seen = HashSet::with_capacity(pool.len());
    for number in pool {
        if number.is_empty() {
            return Err(LotoError::invalid("numéro vide dans le pool"));
        }
        if !seen.insert(number.as_str()) {
            return Err(LotoError::invalid(format!("numéro en double : {}", number)));
        }
    }
    Ok(())
}

/// Découpe une saisie du type "01 02 03" en numéros.
pub fn parse_pool(input: &str) -> Vec<String> {
    input.split_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_format_token() {
        assert_eq!(format_token(1), "01");
        assert_eq!(format_token(25), "25");
        assert_eq!(format_token(100), "100");
    }

    #[test]
    fn test_validate_pool_ok() {
        assert!(validate_pool(&pool(&["01", "02", "03"])).is_ok());
    }

    #[test]
    fn test_validate_pool_duplicate() {
        let err = validate_pool(&pool(&["01", "02", "01"])).unwrap_err();
        assert!(matches!(err, LotoError::InvalidInput(_)));
    }

    #[test]
    fn test_validate_pool_empty() {
        assert!(validate_pool(&[]).is_err());
    }

    #[test]
    fn test_parse_pool() {
        assert_eq!(parse_pool("  01 02\t03 \n"), pool(&["01", "02", "03"]));
        assert!(parse_pool("   ").is_empty());
    }

    #[test]
    fn test_frequency_table_counts() {
        let mut table = FrequencyTable::new();
        table.increment("02");
        table.increment("02");
        table.increment("01");
        assert_eq!(table.get("02"), 2);
        assert_eq!(table.get("01"), 1);
        assert_eq!(table.get("03"), 0);
        assert!(!table.contains("03"));
        assert_eq!(table.len(), 2);
        assert_eq!(table.total(), 3);
    }

    #[test]
    fn test_combination_set_tokens() {
        let set = CombinationSet {
            pool: pool(&["01", "05", "09"]),
            size: 2,
            combinations: vec![Combination { indices: vec![0u16, 2].into_boxed_slice() }],
        };
        let combo = &set.combinations[0];
        assert_eq!(set.to_numbers(combo), pool(&["01", "09"]));
        assert_eq!(set.bounds(combo), ("01", "09"));
    }

    #[test]
    fn test_ticket_label() {
        let ticket = Ticket {
            position: 3,
            numbers: pool(&["01", "02"]),
        };
        assert_eq!(ticket.label(), "COMB-3");
    }

    #[test]
    fn test_group_of() {
        let classification = Classification {
            most_selected: vec![RankedEntry::new("02", 5)],
            less_selected: vec![RankedEntry::new("07", 1)],
            ..Default::default()
        };
        assert_eq!(classification.group_of("02"), Some(SelectionGroup::Most));
        assert_eq!(classification.group_of("07"), Some(SelectionGroup::Less));
        assert_eq!(classification.group_of("11"), None);
    }
}
