// Output formats for test decks.

use crate::bmd::io_votes::votes_to_json;
use crate::bmd::*;

pub fn deck_to_json(ballots: &[Ballot]) -> JSValue {
    let l: Vec<JSValue> = ballots
        .iter()
        .map(|b| {
            json!({
                "precinctId": b.precinct_id,
                "ballotStyleId": b.ballot_style_id,
                "votes": votes_to_json(&b.votes)
            })
        })
        .collect();
    JSValue::Array(l)
}

/// One row per selection, with the contests in ballot order. Contests without a
/// selection get a row with an empty selection.
pub fn deck_to_csv(election: &Election, ballots: &[Ballot]) -> BmdResult<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(&["ballot", "precinctId", "ballotStyleId", "contestId", "selection"])
        .context(WritingCsvSnafu {})?;
    for (idx, b) in ballots.iter().enumerate() {
        let ballot_num = (idx + 1).to_string();
        let contests = resolve_contests_for(election, &b.ballot_style_id).context(BallotSnafu)?;
        for contest in contests.iter() {
            let vote = match b.votes.get(&contest.id) {
                Some(v) => v.clone(),
                None => contest.no_selection(),
            };
            let selections: Vec<String> = match &vote {
                ContestVote::YesNo(Some(yn)) => vec![yn.as_str().to_string()],
                ContestVote::YesNo(None) => vec![String::new()],
                v if v.is_empty() => vec![String::new()],
                ContestVote::Candidate(s) => s
                    .iter()
                    .map(|sel| match sel {
                        Selection::Candidate(c) => c.id.clone(),
                        Selection::WriteIn(text) => format!("write-in:{}", text),
                    })
                    .collect(),
            };
            for selection in selections.iter() {
                wtr.write_record(&[
                    ballot_num.as_str(),
                    b.precinct_id.as_str(),
                    b.ballot_style_id.as_str(),
                    contest.id.as_str(),
                    selection.as_str(),
                ])
                .context(WritingCsvSnafu {})?;
            }
        }
    }
    let bytes = match wtr.into_inner() {
        Ok(x) => x,
        Err(e) => whatever!("Failed to assemble the CSV output: {}", e),
    };
    String::from_utf8(bytes).whatever_context("CSV output is not valid UTF-8")
}

/// Compares a deck with a reference deck, ignoring the formatting of the JSON.
pub fn check_reference(computed: &JSValue, reference_path: &str) -> BmdResult<()> {
    let contents =
        fs::read_to_string(reference_path).context(OpeningFileSnafu { path: reference_path })?;
    let reference: JSValue = serde_json::from_str(contents.as_str()).context(ParsingJsonSnafu {
        path: reference_path,
    })?;
    info!("Comparing with reference deck {:?}", reference_path);
    if reference != *computed {
        let pretty_reference =
            serde_json::to_string_pretty(&reference).context(ParsingJsonSnafu {
                path: reference_path,
            })?;
        let pretty_computed = serde_json::to_string_pretty(computed).context(ParsingJsonSnafu {
            path: reference_path,
        })?;
        warn!("Found differences with the reference deck");
        print_diff(pretty_reference.as_str(), pretty_computed.as_str(), "\n");
        whatever!("Difference detected between the generated deck and the reference deck")
    }
    Ok(())
}
