/*!
Generation of test decks.

A test deck is a set of ballots that are printed and scanned before an election
to check the whole chain. Every candidate of every contest and both outcomes of
every yes/no contest appear on at least one ballot of each ballot style.
*/

use log::{debug, info};

use crate::config::*;
use crate::schema::{ballot_styles_for_precinct, find_precinct, resolve_contests};

/// Generates the test deck for one precinct, or for all the precincts.
///
/// For each ballot style, the number of ballots is the largest number of choices
/// in any of its contests. Ballot `k` marks choice `k` modulo the number of choices
/// of each contest: yes/no contests alternate between yes and no, candidate
/// contests go through the candidates in ballot order.
pub fn generate_test_deck_ballots(
    election: &Election,
    precinct_id: Option<&str>,
) -> BallotResult<Vec<Ballot>> {
    let precincts: Vec<&Precinct> = match precinct_id {
        Some(pid) => vec![find_precinct(election, pid)?],
        None => election.precincts.iter().collect(),
    };

    let mut ballots: Vec<Ballot> = Vec::new();
    for precinct in precincts {
        for ballot_style in ballot_styles_for_precinct(election, &precinct.id)? {
            let contests = resolve_contests(election, ballot_style)?;
            let num_ballots = contests
                .iter()
                .map(|c| c.choice_count())
                .max()
                .unwrap_or(0);
            debug!(
                "generate_test_deck_ballots: precinct {:?} ballot style {:?}: {} ballots",
                precinct.id, ballot_style.id, num_ballots
            );
            for ballot_num in 0..num_ballots {
                ballots.push(Ballot {
                    precinct_id: precinct.id.clone(),
                    ballot_style_id: ballot_style.id.clone(),
                    votes: test_deck_votes(&contests, ballot_num),
                });
            }
        }
    }
    info!(
        "generate_test_deck_ballots: {} ballots for {}",
        ballots.len(),
        precinct_id.unwrap_or("all precincts")
    );
    Ok(ballots)
}

fn test_deck_votes(contests: &[Contest], ballot_num: usize) -> Votes {
    contests
        .iter()
        .map(|contest| {
            let vote = match &contest.kind {
                ContestKind::YesNo if ballot_num % 2 == 0 => ContestVote::YesNo(Some(YesNo::Yes)),
                ContestKind::YesNo => ContestVote::YesNo(Some(YesNo::No)),
                // Nothing to mark in a contest that only has write-ins.
                ContestKind::Candidate { candidates, .. } if candidates.is_empty() => {
                    ContestVote::Candidate(Vec::new())
                }
                ContestKind::Candidate { candidates, .. } => {
                    let cand = candidates[ballot_num % candidates.len()].clone();
                    ContestVote::Candidate(vec![Selection::Candidate(cand)])
                }
            };
            (contest.id.clone(), vote)
        })
        .collect()
}
