/*!
Resolution of the contests that appear on a ballot.

The order of the contests returned here is the positional key used by the
codec: the same encoded string decodes to a different ballot if the order
changes. For this reason, the order of the election definition is always
preserved and nothing is ever sorted.
*/

use std::collections::HashSet;
use std::str::FromStr;

use log::debug;
use snafu::prelude::*;

use crate::config::*;

pub fn find_ballot_style<'a>(
    election: &'a Election,
    ballot_style_id: &str,
) -> BallotResult<&'a BallotStyle> {
    election
        .ballot_styles
        .iter()
        .find(|bs| bs.id == ballot_style_id)
        .context(SchemaSnafu {
            message: format!("unknown ballot style {:?}", ballot_style_id),
        })
}

pub fn find_precinct<'a>(election: &'a Election, precinct_id: &str) -> BallotResult<&'a Precinct> {
    election
        .precincts
        .iter()
        .find(|p| p.id == precinct_id)
        .context(SchemaSnafu {
            message: format!("unknown precinct {:?}", precinct_id),
        })
}

/// All the ballot styles that may be handed out in the given precinct, in election order.
pub fn ballot_styles_for_precinct<'a>(
    election: &'a Election,
    precinct_id: &str,
) -> BallotResult<Vec<&'a BallotStyle>> {
    let precinct = find_precinct(election, precinct_id)?;
    Ok(election
        .ballot_styles
        .iter()
        .filter(|bs| bs.precincts.contains(&precinct.id))
        .collect())
}

/// Returns the contests of the election that appear on the given ballot style.
///
/// A contest appears if its district is one of the districts of the ballot style
/// and if it has the same party as the ballot style (nonpartisan contests only
/// appear on nonpartisan ballot styles).
pub fn resolve_contests(
    election: &Election,
    ballot_style: &BallotStyle,
) -> BallotResult<Vec<Contest>> {
    check_contest_ids(election)?;

    for district_id in ballot_style.districts.iter() {
        ensure!(
            election.districts.iter().any(|d| d.id == *district_id),
            SchemaSnafu {
                message: format!(
                    "ballot style {:?} references unknown district {:?}",
                    ballot_style.id, district_id
                ),
            }
        );
    }
    for precinct_id in ballot_style.precincts.iter() {
        ensure!(
            election.precincts.iter().any(|p| p.id == *precinct_id),
            SchemaSnafu {
                message: format!(
                    "ballot style {:?} references unknown precinct {:?}",
                    ballot_style.id, precinct_id
                ),
            }
        );
    }

    let contests: Vec<Contest> = election
        .contests
        .iter()
        .filter(|c| {
            ballot_style.districts.contains(&c.district_id) && c.party_id == ballot_style.party_id
        })
        .cloned()
        .collect();

    for c in contests.iter() {
        check_candidate_ids(c)?;
    }

    debug!(
        "resolve_contests: ballot style {:?}: {:?}",
        ballot_style.id,
        contests.iter().map(|c| c.id.as_str()).collect::<Vec<&str>>()
    );
    Ok(contests)
}

pub fn resolve_contests_for(election: &Election, ballot_style_id: &str) -> BallotResult<Vec<Contest>> {
    let ballot_style = find_ballot_style(election, ballot_style_id)?;
    resolve_contests(election, ballot_style)
}

fn check_contest_ids(election: &Election) -> BallotResult<()> {
    let mut seen: HashSet<&str> = HashSet::new();
    for c in election.contests.iter() {
        ensure!(
            seen.insert(c.id.as_str()),
            SchemaSnafu {
                message: format!("duplicate contest id {:?}", c.id),
            }
        );
    }
    Ok(())
}

// The codec finds candidates by id.
fn check_candidate_ids(contest: &Contest) -> BallotResult<()> {
    if let ContestKind::Candidate { candidates, .. } = &contest.kind {
        let mut seen: HashSet<&str> = HashSet::new();
        for cand in candidates.iter() {
            ensure!(
                seen.insert(cand.id.as_str()),
                SchemaSnafu {
                    message: format!(
                        "duplicate candidate id {:?} in contest {:?}",
                        cand.id, contest.id
                    ),
                }
            );
        }
    }
    Ok(())
}

/// A ballot style checked against a precinct, with its contests resolved.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct ResolvedBallot<'a> {
    pub precinct: &'a Precinct,
    pub ballot_style: &'a BallotStyle,
    pub contests: Vec<Contest>,
}

/// Finds the ballot style and the precinct and checks that the style is used in this precinct.
pub fn resolve_ballot<'a>(
    election: &'a Election,
    ballot_style_id: &str,
    precinct_id: &str,
) -> BallotResult<ResolvedBallot<'a>> {
    let precinct = find_precinct(election, precinct_id)?;
    let ballot_style = find_ballot_style(election, ballot_style_id)?;
    ensure!(
        ballot_style.precincts.contains(&precinct.id),
        SchemaSnafu {
            message: format!(
                "ballot style {:?} is not used in precinct {:?}",
                ballot_style.id, precinct.id
            ),
        }
    );
    let contests = resolve_contests(election, ballot_style)?;
    Ok(ResolvedBallot {
        precinct,
        ballot_style,
        contests,
    })
}

pub const ACTIVATION_CODE_PREFIX: &str = "VX";

/// The content of a voter activation card: `VX.<precinct id>.<ballot style id>`.
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
pub struct ActivationCode {
    pub precinct_id: String,
    pub ballot_style_id: String,
}

impl ActivationCode {
    pub fn resolve<'a>(&self, election: &'a Election) -> BallotResult<ResolvedBallot<'a>> {
        resolve_ballot(election, &self.ballot_style_id, &self.precinct_id)
    }
}

impl FromStr for ActivationCode {
    type Err = BallotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().split('.').collect::<Vec<&str>>().as_slice() {
            [prefix, precinct_id, ballot_style_id]
                if *prefix == ACTIVATION_CODE_PREFIX
                    && !precinct_id.is_empty()
                    && !ballot_style_id.is_empty() =>
            {
                Ok(ActivationCode {
                    precinct_id: precinct_id.to_string(),
                    ballot_style_id: ballot_style_id.to_string(),
                })
            }
            _ => SchemaSnafu {
                message: format!("invalid activation code {:?}", s),
            }
            .fail(),
        }
    }
}

impl std::fmt::Display for ActivationCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}.{}.{}",
            ACTIVATION_CODE_PREFIX, self.precinct_id, self.ballot_style_id
        )
    }
}
