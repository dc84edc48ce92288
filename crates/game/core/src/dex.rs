//! Dataset index over every known creature.
use std::collections::HashMap;

use crate::record::{CreatureId, CreatureRecord, canonical_name};

/// Read-only index of all creature records.
///
/// Records are kept sorted by canonical name so suggestions come out in a
/// stable order. When two records share an identifier or canonical name, the
/// one sorting last wins the lookup; both stay in the ordered sequence.
#[derive(Clone, Debug, Default)]
pub struct Dex {
    records: Vec<CreatureRecord>,
    by_id: HashMap<CreatureId, usize>,
    by_name: HashMap<String, usize>,
}

impl Dex {
    pub fn new(records: impl IntoIterator<Item = CreatureRecord>) -> Self {
        let mut records: Vec<CreatureRecord> = records.into_iter().collect();
        records.sort_by(|a, b| a.canonical_name().cmp(b.canonical_name()));

        let mut by_id = HashMap::with_capacity(records.len());
        let mut by_name = HashMap::with_capacity(records.len());
        for (idx, record) in records.iter().enumerate() {
            by_id.insert(record.id(), idx);
            by_name.insert(record.canonical_name().to_string(), idx);
        }

        Self {
            records,
            by_id,
            by_name,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in canonical-name order.
    pub fn records(&self) -> &[CreatureRecord] {
        &self.records
    }

    pub fn get(&self, id: CreatureId) -> Option<&CreatureRecord> {
        self.by_id.get(&id).map(|&idx| &self.records[idx])
    }

    /// Looks up a record by name in any casing or spacing.
    pub fn find_by_name(&self, name: &str) -> Option<&CreatureRecord> {
        self.by_name
            .get(&canonical_name(name))
            .map(|&idx| &self.records[idx])
    }

    /// Up to `limit` records whose canonical name starts with the query.
    ///
    /// A blank query suggests nothing.
    pub fn suggest(&self, query: &str, limit: usize) -> Vec<&CreatureRecord> {
        let prefix = canonical_name(query);
        if prefix.is_empty() {
            return Vec::new();
        }

        // Sorted order puts all matches in one contiguous run.
        let start = self
            .records
            .partition_point(|record| record.canonical_name() < prefix.as_str());
        self.records[start..]
            .iter()
            .take_while(|record| record.canonical_name().starts_with(&prefix))
            .take(limit)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Generation;

    fn record(id: u32, name: &str) -> CreatureRecord {
        CreatureRecord::new(
            CreatureId(id),
            name,
            1.0,
            1.0,
            ["normal"],
            Generation::from_ordinal(1),
        )
    }

    fn dex() -> Dex {
        Dex::new([
            record(25, "Pikachu"),
            record(1, "Bulbasaur"),
            record(172, "Pichu"),
            record(785, "Tapu Koko"),
            record(2, "Ivysaur"),
        ])
    }

    #[test]
    fn orders_by_canonical_name() {
        let dex = dex();
        let names: Vec<&str> = dex.records().iter().map(|r| r.canonical_name()).collect();
        assert_eq!(names, ["bulbasaur", "ivysaur", "pichu", "pikachu", "tapu-koko"]);
    }

    #[test]
    fn lookups() {
        let dex = dex();
        assert_eq!(dex.get(CreatureId(25)).map(|r| r.name()), Some("pikachu"));
        assert!(dex.get(CreatureId(999)).is_none());
        assert_eq!(
            dex.find_by_name("  TAPU koko ").map(|r| r.id()),
            Some(CreatureId(785))
        );
        assert!(dex.find_by_name("mew").is_none());
    }

    #[test]
    fn suggestions_are_prefix_matches_in_order() {
        let dex = dex();
        let names: Vec<&str> = dex.suggest("Pi", 10).iter().map(|r| r.name()).collect();
        assert_eq!(names, ["pichu", "pikachu"]);

        assert_eq!(dex.suggest("pi", 1).len(), 1);
        assert_eq!(dex.suggest("tapu k", 10)[0].id(), CreatureId(785));
        assert!(dex.suggest("", 10).is_empty());
        assert!(dex.suggest("   ", 10).is_empty());
        assert!(dex.suggest("zz", 10).is_empty());
    }

    #[test]
    fn later_duplicate_wins_lookup() {
        let dex = Dex::new([record(1, "bulbasaur"), record(1, "bulbasaur-alt")]);
        assert_eq!(dex.len(), 2);
        assert_eq!(dex.get(CreatureId(1)).map(|r| r.name()), Some("bulbasaur-alt"));
    }
}
