//! Lap time ranking
//!
//! Drivers with a valid lap time are ordered by duration; drivers without one
//! always follow them, in start-log order, whichever direction is requested.
//! Equal lap times are ordered by code so both directions are deterministic and
//! the timed part of the descending view is the exact reverse of the ascending one.

use std::cmp::Ordering;

use crate::{
    constants::ELIMINATION_CUTOFF,
    models::{ParticipantRecord, RankedEntry, SortOrder},
};

/// Ranking service
pub struct RankingService;

impl RankingService {
    /// Order records by lap time, untimed records last
    pub fn sort<'a, I>(records: I, order: SortOrder) -> Vec<&'a ParticipantRecord>
    where
        I: IntoIterator<Item = &'a ParticipantRecord>,
    {
        let (mut timed, untimed): (Vec<_>, Vec<_>) =
            records.into_iter().partition(|r| r.lap_time().is_some());

        timed.sort_by(|a, b| Self::compare_fastest_first(a, b));
        if order == SortOrder::Desc {
            timed.reverse();
        }

        timed.extend(untimed);
        timed
    }

    /// Build the ranked report with positions and elimination flags
    pub fn rank<'a, I>(records: I, order: SortOrder) -> Vec<RankedEntry>
    where
        I: IntoIterator<Item = &'a ParticipantRecord>,
    {
        let ordered = Self::sort(records, order);
        let total = ordered.len();
        let timed = ordered.iter().filter(|r| r.lap_time().is_some()).count();

        ordered
            .into_iter()
            .enumerate()
            .map(|(idx, record)| {
                let position = idx + 1;
                let fastest_first = Self::ascending_position(position, timed, order);

                RankedEntry {
                    position,
                    code: record.code.clone(),
                    name: record.name.clone(),
                    team: record.team.clone(),
                    lap_time: record.lap_time_display(),
                    eliminated: Self::is_eliminated(
                        fastest_first,
                        total,
                        record.lap_time().is_some(),
                    ),
                }
            })
            .collect()
    }

    /// Elimination rule, applied to a position in the ascending view
    ///
    /// Nobody is eliminated when the whole field fits under the cutoff.
    /// Otherwise only timed drivers in the top 15 advance.
    pub fn is_eliminated(ascending_position: usize, total: usize, has_lap_time: bool) -> bool {
        if total <= ELIMINATION_CUTOFF {
            return false;
        }
        !has_lap_time || ascending_position > ELIMINATION_CUTOFF
    }

    /// Map a position in `order` back to the same driver's ascending position
    fn ascending_position(position: usize, timed: usize, order: SortOrder) -> usize {
        match order {
            SortOrder::Desc if position <= timed => timed - position + 1,
            _ => position,
        }
    }

    fn compare_fastest_first(a: &ParticipantRecord, b: &ParticipantRecord) -> Ordering {
        a.lap_time()
            .cmp(&b.lap_time())
            .then_with(|| a.code.cmp(&b.code))
    }
}
