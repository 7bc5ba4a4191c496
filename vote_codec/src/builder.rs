use log::debug;
use snafu::prelude::*;

pub use crate::config::*;

/// A builder for the votes of a voting session.
///
/// The builder enforces the constraints of each contest as selections are made:
/// a selection that would exceed the number of seats is refused rather than
/// silently dropped.
///
/// ```
/// use vote_codec::builder::VotesBuilder;
/// # use vote_codec::{BallotError, Contest, ContestKind, Candidate, YesNo};
/// # let contests = vec![
/// #     Contest {
/// #         id: "president".to_string(),
/// #         title: "President".to_string(),
/// #         short_title: None,
/// #         district_id: "d".to_string(),
/// #         party_id: None,
/// #         kind: ContestKind::Candidate {
/// #             seats: 1,
/// #             candidates: vec![Candidate { id: "anna".to_string(), name: "Anna".to_string(), party_id: None }],
/// #             allow_write_ins: true,
/// #         },
/// #     },
/// #     Contest {
/// #         id: "prop-1".to_string(),
/// #         title: "Proposition 1".to_string(),
/// #         short_title: None,
/// #         district_id: "d".to_string(),
/// #         party_id: None,
/// #         kind: ContestKind::YesNo,
/// #     },
/// # ];
///
/// let mut builder = VotesBuilder::new(&contests);
/// builder.select_candidate("president", "anna")?;
/// builder.set_yes_no("prop-1", Some(YesNo::No))?;
/// let votes = builder.build();
///
/// let encoded = vote_codec::encode(&contests, &votes)?;
/// assert_eq!(vote_codec::decode(&contests, &encoded)?, votes);
///
/// # Ok::<(), BallotError>(())
/// ```
pub struct VotesBuilder {
    pub(crate) _contests: Vec<Contest>,
    pub(crate) _votes: Votes,
}

impl VotesBuilder {
    pub fn new(contests: &[Contest]) -> VotesBuilder {
        VotesBuilder {
            _contests: contests.to_vec(),
            _votes: Votes::new(),
        }
    }

    /// Starts from existing votes, for example when the voter goes back to a contest.
    pub fn with_votes(contests: &[Contest], votes: &Votes) -> BallotResult<VotesBuilder> {
        let mut builder = VotesBuilder::new(contests);
        for (contest_id, vote) in votes.iter() {
            builder.set_vote(contest_id, vote.clone())?;
        }
        Ok(builder)
    }

    /// Adds a candidate of the contest after the current selections.
    pub fn select_candidate(&mut self, contest_id: &str, candidate_id: &str) -> BallotResult<()> {
        let contest = self.contest(contest_id)?;
        let candidate = match &contest.kind {
            ContestKind::Candidate { candidates, .. } => candidates
                .iter()
                .find(|c| c.id == candidate_id)
                .cloned()
                .context(InvariantViolationSnafu {
                    message: format!(
                        "contest {:?}: unknown candidate {:?}",
                        contest_id, candidate_id
                    ),
                })?,
            ContestKind::YesNo => {
                return InvariantViolationSnafu {
                    message: format!("contest {:?} is a yes/no contest", contest_id),
                }
                .fail()
            }
        };
        self.push_selection(contest_id, Selection::Candidate(candidate))
    }

    /// Adds a write-in. Surrounding whitespace is removed; the text may not be empty.
    pub fn add_write_in(&mut self, contest_id: &str, text: &str) -> BallotResult<()> {
        let contest = self.contest(contest_id)?;
        let text = text.trim();
        ensure!(
            !text.is_empty(),
            InvariantViolationSnafu {
                message: format!("contest {:?}: empty write-in", contest_id),
            }
        );
        ensure!(
            matches!(
                contest.kind,
                ContestKind::Candidate {
                    allow_write_ins: true,
                    ..
                }
            ),
            InvariantViolationSnafu {
                message: format!("contest {:?} does not allow write-ins", contest_id),
            }
        );
        self.push_selection(contest_id, Selection::WriteIn(text.to_string()))
    }

    /// Removes the selection at the given position. Later selections move up.
    pub fn deselect(&mut self, contest_id: &str, index: usize) -> BallotResult<Selection> {
        let contest = self.contest(contest_id)?.clone();
        let mut selections = self.current_selections(&contest)?;
        ensure!(
            index < selections.len(),
            InvariantViolationSnafu {
                message: format!(
                    "contest {:?}: no selection at position {}",
                    contest_id, index
                ),
            }
        );
        let removed = selections.remove(index);
        self.replace(contest_id, ContestVote::Candidate(selections));
        Ok(removed)
    }

    pub fn set_yes_no(&mut self, contest_id: &str, vote: Option<YesNo>) -> BallotResult<()> {
        self.set_vote(contest_id, ContestVote::YesNo(vote))
    }

    /// Resets the contest to no selection.
    pub fn clear(&mut self, contest_id: &str) -> BallotResult<()> {
        let vote = self.contest(contest_id)?.no_selection();
        self.replace(contest_id, vote);
        Ok(())
    }

    /// Replaces the whole vote of a contest, after checking it.
    pub fn set_vote(&mut self, contest_id: &str, vote: ContestVote) -> BallotResult<()> {
        let contest = self.contest(contest_id)?.clone();
        match (&contest.kind, &vote) {
            (ContestKind::YesNo, ContestVote::YesNo(_)) => {}
            (ContestKind::Candidate { .. }, ContestVote::Candidate(selections)) => {
                // Checked apart so that a refused vote leaves the contest untouched.
                let mut checked = VotesBuilder::new(std::slice::from_ref(&contest));
                for s in selections.iter() {
                    match s {
                        Selection::Candidate(c) => checked.select_candidate(contest_id, &c.id)?,
                        Selection::WriteIn(text) => checked.add_write_in(contest_id, text)?,
                    }
                }
                let vote = checked
                    ._votes
                    .get(contest_id)
                    .cloned()
                    .unwrap_or_else(|| contest.no_selection());
                self.replace(contest_id, vote);
                return Ok(());
            }
            _ => {
                return InvariantViolationSnafu {
                    message: format!(
                        "contest {:?}: vote {:?} does not match the contest type",
                        contest_id, vote
                    ),
                }
                .fail()
            }
        }
        self.replace(contest_id, vote);
        Ok(())
    }

    /// The number of selections the voter can still make in this contest.
    pub fn remaining_seats(&self, contest_id: &str) -> BallotResult<u32> {
        let contest = self.contest(contest_id)?;
        let used = match self._votes.get(contest_id) {
            Some(ContestVote::Candidate(selections)) => selections.len() as u32,
            Some(ContestVote::YesNo(Some(_))) => 1,
            _ => 0,
        };
        Ok(contest.seats().saturating_sub(used))
    }

    /// Freezes the votes. Contests without a selection are recorded as such.
    pub fn build(self) -> Votes {
        let mut votes = self._votes;
        for contest in self._contests.iter() {
            if votes.get(&contest.id).is_none() {
                votes = votes.with(&contest.id, contest.no_selection());
            }
        }
        votes
    }

    fn contest(&self, contest_id: &str) -> BallotResult<&Contest> {
        self._contests
            .iter()
            .find(|c| c.id == contest_id)
            .context(InvariantViolationSnafu {
                message: format!("unknown contest {:?}", contest_id),
            })
    }

    fn current_selections(&self, contest: &Contest) -> BallotResult<Vec<Selection>> {
        match (&contest.kind, self._votes.get(&contest.id)) {
            (ContestKind::Candidate { .. }, Some(ContestVote::Candidate(selections))) => {
                Ok(selections.clone())
            }
            (ContestKind::Candidate { .. }, _) => Ok(Vec::new()),
            (ContestKind::YesNo, _) => InvariantViolationSnafu {
                message: format!("contest {:?} is a yes/no contest", contest.id),
            }
            .fail(),
        }
    }

    fn push_selection(&mut self, contest_id: &str, selection: Selection) -> BallotResult<()> {
        let contest = self.contest(contest_id)?.clone();
        let mut selections = self.current_selections(&contest)?;
        ensure!(
            selections.len() < contest.seats() as usize,
            InvariantViolationSnafu {
                message: format!(
                    "contest {:?}: all {} seats are already selected",
                    contest_id,
                    contest.seats()
                ),
            }
        );
        if let Selection::Candidate(c) = &selection {
            ensure!(
                !selections.contains(&selection),
                InvariantViolationSnafu {
                    message: format!(
                        "contest {:?}: candidate {:?} is already selected",
                        contest_id, c.id
                    ),
                }
            );
        }
        debug!("push_selection: {:?}: {:?}", contest_id, selection);
        selections.push(selection);
        self.replace(contest_id, ContestVote::Candidate(selections));
        Ok(())
    }

    fn replace(&mut self, contest_id: &str, vote: ContestVote) {
        let votes = std::mem::take(&mut self._votes);
        self._votes = votes.with(contest_id, vote);
    }
}
