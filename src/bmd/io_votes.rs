// Votes in JSON: {contestId: [candidateId | {"writeIn": text}, ...] | "yes" | "no" | null}

use serde_json::Map as JSMap;
use vote_codec::builder::VotesBuilder;

use crate::bmd::*;

const WRITE_IN_KEY: &str = "writeIn";

pub fn read_votes(path: &str, contests: &[Contest]) -> BmdResult<Votes> {
    let contents = fs::read_to_string(path).context(OpeningFileSnafu { path })?;
    let js: JSValue = serde_json::from_str(contents.as_str()).context(ParsingJsonSnafu { path })?;
    debug!("read_votes: {:?}", js);
    votes_from_json(contests, &js)
}

/// Builds the votes the same way the voting screens do, so that invalid
/// selections are refused before reaching the encoder.
pub fn votes_from_json(contests: &[Contest], js: &JSValue) -> BmdResult<Votes> {
    let obj = match js.as_object() {
        Some(x) => x,
        None => whatever!("Votes must be a JSON object, found {}", js),
    };
    let mut builder = VotesBuilder::new(contests);
    for (contest_id, value) in obj.iter() {
        let contest = contests
            .iter()
            .find(|c| c.id == *contest_id)
            .context(InvalidVotesSnafu {
                contest_id,
                message: "this contest is not on the ballot",
            })?;
        let res = match (&contest.kind, value) {
            (ContestKind::YesNo, JSValue::Null) => builder.set_yes_no(contest_id, None),
            (ContestKind::YesNo, JSValue::String(s)) if s == "yes" => {
                builder.set_yes_no(contest_id, Some(YesNo::Yes))
            }
            (ContestKind::YesNo, JSValue::String(s)) if s == "no" => {
                builder.set_yes_no(contest_id, Some(YesNo::No))
            }
            (ContestKind::Candidate { .. }, JSValue::Null) => builder.clear(contest_id),
            (ContestKind::Candidate { .. }, JSValue::Array(selections)) => {
                for s in selections.iter() {
                    let res = match s {
                        JSValue::String(candidate_id) => {
                            builder.select_candidate(contest_id, candidate_id)
                        }
                        JSValue::Object(m) => match m.get(WRITE_IN_KEY) {
                            Some(JSValue::String(text)) => builder.add_write_in(contest_id, text),
                            _ => {
                                return InvalidVotesSnafu {
                                    contest_id,
                                    message: format!("invalid write-in {}", s),
                                }
                                .fail()
                            }
                        },
                        _ => {
                            return InvalidVotesSnafu {
                                contest_id,
                                message: format!("invalid selection {}", s),
                            }
                            .fail()
                        }
                    };
                    res.context(BallotSnafu)?;
                }
                Ok(())
            }
            (_, v) => {
                return InvalidVotesSnafu {
                    contest_id,
                    message: format!("{} is not a valid vote for this contest", v),
                }
                .fail()
            }
        };
        res.context(BallotSnafu)?;
    }
    Ok(builder.build())
}

pub fn votes_to_json(votes: &Votes) -> JSValue {
    let mut res: JSMap<String, JSValue> = JSMap::new();
    for (contest_id, vote) in votes.iter() {
        let js = match vote {
            ContestVote::YesNo(Some(yn)) => json!(yn.as_str()),
            ContestVote::YesNo(None) => JSValue::Null,
            ContestVote::Candidate(selections) => JSValue::Array(
                selections
                    .iter()
                    .map(|s| match s {
                        Selection::Candidate(c) => json!(c.id),
                        Selection::WriteIn(text) => json!({ WRITE_IN_KEY: text }),
                    })
                    .collect(),
            ),
        };
        res.insert(contest_id.clone(), js);
    }
    JSValue::Object(res)
}
