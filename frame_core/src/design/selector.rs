//! Lightest-section selection with self-weight feedback.
//!
//! Selection runs as a small state machine over three weight-ordered
//! queues, one per [`FailureMode`]. Each step looks at the globally lightest
//! queue head, adds its self-weight to the demand and either accepts it or
//! pops it. Every step shrinks a queue or terminates, so the loop is bounded
//! by the initial queue sizes.

use std::collections::VecDeque;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use super::capacity::{governing_capacity, FailureMode};
use super::{DesignFailure, DesignOutcome, MemberDesignInput, SelectedSection};
use crate::catalog::{SectionCatalog, SectionRecord};
use crate::loads::Demand;
use crate::settings::DesignSettings;

/// A section that cleared the initial flexure filter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate<'a> {
    pub record: &'a SectionRecord,
    pub mode: FailureMode,
    /// Flexural capacity for `mode` at the design span
    pub capacity: f64,
}

/// Weight-ascending queue of candidates sharing a failure mode.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateSet<'a> {
    mode: FailureMode,
    queue: VecDeque<Candidate<'a>>,
}

impl<'a> CandidateSet<'a> {
    fn new(mode: FailureMode, mut candidates: Vec<Candidate<'a>>) -> Self {
        candidates.sort_by(|a, b| a.record.weight_plf.total_cmp(&b.record.weight_plf));
        CandidateSet {
            mode,
            queue: candidates.into(),
        }
    }

    /// Failure mode shared by every candidate in the set
    pub fn mode(&self) -> FailureMode {
        self.mode
    }

    /// Lightest remaining candidate
    pub fn front(&self) -> Option<&Candidate<'a>> {
        self.queue.front()
    }

    /// Drop the lightest remaining candidate
    fn reject(&mut self) -> Option<Candidate<'a>> {
        self.queue.pop_front()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Remaining candidates, lightest first
    pub fn iter(&self) -> impl Iterator<Item = &Candidate<'a>> {
        self.queue.iter()
    }
}

/// Partition the depth-filtered catalog into the three failure-mode sets,
/// keeping only sections whose capacity exceeds the unmodified demand.
///
/// Sets are returned in [`FailureMode::ALL`] order. Records whose mode or
/// capacity cannot be determined (missing properties) are left out.
pub fn candidate_sets<'a>(
    catalog: &'a SectionCatalog,
    input: &MemberDesignInput,
    settings: &DesignSettings,
) -> [CandidateSet<'a>; 3] {
    let mut buckets: [Vec<Candidate<'a>>; 3] = Default::default();

    for record in catalog.records() {
        if input.max_depth_in > 0.0 && record.depth_in > input.max_depth_in {
            continue;
        }
        let Some((mode, capacity)) =
            governing_capacity(record, input.span_ft, input.yield_ksi, settings)
        else {
            trace!("{}: no capacity at {} ft, excluded", record.id, input.span_ft);
            continue;
        };
        if capacity > input.demand.moment {
            buckets[mode as usize].push(Candidate {
                record,
                mode,
                capacity,
            });
        }
    }

    let [plastic, inelastic, elastic] = buckets;
    [
        CandidateSet::new(FailureMode::Plastic, plastic),
        CandidateSet::new(FailureMode::InelasticLtb, inelastic),
        CandidateSet::new(FailureMode::ElasticLtb, elastic),
    ]
}

/// Why a candidate was dropped after self-weight was added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rejection {
    Flexure,
    Shear,
}

/// Outcome of one selection step.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionStep {
    Accepted(SelectedSection),
    Rejected { id: String, reason: Rejection },
    Exhausted,
}

/// Selection state: the three candidate sets plus the demand being checked.
#[derive(Debug, Clone)]
pub struct Selection<'a> {
    sets: [CandidateSet<'a>; 3],
    input: MemberDesignInput,
}

impl<'a> Selection<'a> {
    pub fn new(sets: [CandidateSet<'a>; 3], input: MemberDesignInput) -> Self {
        Selection { sets, input }
    }

    /// Total candidates still in play
    pub fn remaining(&self) -> usize {
        self.sets.iter().map(CandidateSet::len).sum()
    }

    /// Index of the set holding the globally lightest head.
    ///
    /// Exact weight ties go to the earlier set, i.e. the structurally
    /// preferable failure mode.
    fn lightest_head(&self) -> Option<usize> {
        self.sets
            .iter()
            .enumerate()
            .filter_map(|(slot, set)| set.front().map(|c| (slot, c.record.weight_plf)))
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(slot, _)| slot)
    }

    /// Check the lightest candidate with its own weight added to the demand.
    pub fn step(&mut self) -> SelectionStep {
        let Some(slot) = self.lightest_head() else {
            return SelectionStep::Exhausted;
        };
        let Some(candidate) = self.sets[slot].front().copied() else {
            return SelectionStep::Exhausted;
        };

        let factor = self.input.combination.self_weight_factor();
        let updated: Demand =
            self.input
                .demand
                .with_uniform_load(candidate.record.weight_plf, factor, self.input.span_ft);
        let shear_capacity = candidate.record.shear_capacity_kips(self.input.yield_ksi);

        let reason = if updated.moment > candidate.capacity {
            Rejection::Flexure
        } else if shear_capacity <= updated.shear {
            Rejection::Shear
        } else {
            return SelectionStep::Accepted(SelectedSection {
                section: candidate.record.clone(),
                mode: candidate.mode,
                flexural_capacity: candidate.capacity,
                shear_capacity_kips: shear_capacity,
                demand: updated,
            });
        };

        self.sets[slot].reject();
        SelectionStep::Rejected {
            id: candidate.record.id.clone(),
            reason,
        }
    }
}

/// Select the lightest adequate section.
///
/// See [`crate::design`] for the full procedure.
pub fn design(
    catalog: &SectionCatalog,
    input: &MemberDesignInput,
    settings: &DesignSettings,
) -> DesignOutcome {
    let sets = candidate_sets(catalog, input, settings);
    let mut selection = Selection::new(sets, input.clone());

    let bound = selection.remaining();
    if bound == 0 {
        debug!(
            "no section clears M = {:.1} over {} ft",
            input.demand.moment, input.span_ft
        );
        return DesignOutcome::Failed(DesignFailure::FlexureInfeasible);
    }

    for _ in 0..bound {
        match selection.step() {
            SelectionStep::Accepted(selected) => {
                debug!(
                    "selected {} ({}) for M = {:.1}, V = {:.2} over {} ft",
                    selected.section.id,
                    selected.mode,
                    selected.demand.moment,
                    selected.demand.shear,
                    input.span_ft
                );
                return DesignOutcome::Selected(selected);
            }
            SelectionStep::Rejected { id, reason } => {
                trace!("{} rejected after self-weight: {:?}", id, reason);
            }
            SelectionStep::Exhausted => break,
        }
    }

    debug!(
        "all {} candidates failed after self-weight over {} ft",
        bound, input.span_ft
    );
    DesignOutcome::Failed(DesignFailure::ShearInfeasible)
}
