//! Answer selection.
use crate::record::{CreatureId, CreatureRecord};
use crate::rng::RandomSource;

/// Picks an answer uniformly at random, avoiding `exclude` when possible.
///
/// The draw is made among records whose identifier differs from `exclude`;
/// when no such record exists (a one-entry dataset, or one where every entry
/// shares the excluded id) it falls back to all records. Always terminates.
/// Returns `None` only for an empty slice.
pub fn draw_answer<'a, R: RandomSource + ?Sized>(
    records: &'a [CreatureRecord],
    exclude: Option<CreatureId>,
    rng: &mut R,
) -> Option<&'a CreatureRecord> {
    let eligible = |record: &&CreatureRecord| Some(record.id()) != exclude;
    let candidates = records.iter().filter(eligible).count();

    if candidates == 0 {
        let idx = rng.next_index(records.len());
        return records.get(idx);
    }

    let pick = rng.next_index(candidates);
    records.iter().filter(eligible).nth(pick)
}

/// Picks an identifier uniformly from `1..=max`, avoiding `exclude`.
///
/// Used when answers come from a source that can only be queried by id.
/// Returns `None` when `max` is 0.
pub fn draw_id<R: RandomSource + ?Sized>(
    max: u32,
    exclude: Option<CreatureId>,
    rng: &mut R,
) -> Option<CreatureId> {
    if max == 0 {
        return None;
    }

    match exclude {
        Some(CreatureId(previous)) if max > 1 && (1..=max).contains(&previous) => {
            // Draw from a range one shorter and step over the excluded id.
            let id = rng.next_index(max as usize - 1) as u32 + 1;
            Some(CreatureId(if id >= previous { id + 1 } else { id }))
        }
        _ => Some(CreatureId(rng.next_index(max as usize) as u32 + 1)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Generation;
    use crate::rng::PcgRng;

    fn record(id: u32) -> CreatureRecord {
        CreatureRecord::new(
            CreatureId(id),
            &format!("mon{id}"),
            1.0,
            1.0,
            ["normal"],
            Generation::from_ordinal(1),
        )
    }

    #[test]
    fn never_repeats_the_previous_answer() {
        let records: Vec<_> = (1..=3).map(record).collect();
        let mut rng = PcgRng::seeded(5);
        for _ in 0..200 {
            let drawn = draw_answer(&records, Some(CreatureId(2)), &mut rng).unwrap();
            assert_ne!(drawn.id(), CreatureId(2));
        }
    }

    #[test]
    fn single_entry_dataset_terminates() {
        let records = vec![record(1)];
        let mut rng = PcgRng::seeded(5);
        let drawn = draw_answer(&records, Some(CreatureId(1)), &mut rng).unwrap();
        assert_eq!(drawn.id(), CreatureId(1));
    }

    #[test]
    fn empty_dataset_draws_nothing() {
        let mut rng = PcgRng::seeded(5);
        assert!(draw_answer(&[], None, &mut rng).is_none());
    }

    #[test]
    fn id_draw_skips_previous_and_stays_in_range() {
        let mut rng = PcgRng::seeded(11);
        let mut seen = [false; 5];
        for _ in 0..500 {
            let CreatureId(id) = draw_id(4, Some(CreatureId(3)), &mut rng).unwrap();
            assert!((1..=4).contains(&id));
            assert_ne!(id, 3);
            seen[id as usize] = true;
        }
        assert!(seen[1] && seen[2] && seen[4]);
    }

    #[test]
    fn id_draw_edge_cases() {
        let mut rng = PcgRng::seeded(11);
        assert_eq!(draw_id(0, None, &mut rng), None);
        assert_eq!(draw_id(1, Some(CreatureId(1)), &mut rng), Some(CreatureId(1)));
        let CreatureId(id) = draw_id(10, Some(CreatureId(50)), &mut rng).unwrap();
        assert!((1..=10).contains(&id));
    }
}
