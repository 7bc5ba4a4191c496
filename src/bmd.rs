use log::{debug, info, warn};

use snafu::{prelude::*, Snafu};
use vote_codec::payload::*;
use vote_codec::schema::*;
use vote_codec::test_deck::generate_test_deck_ballots;
use vote_codec::*;

use std::fs;

use serde_json::json;
use serde_json::Value as JSValue;
use text_diff::print_diff;

pub mod config_reader;
pub mod io_common;
pub mod io_deck;
pub mod io_votes;

use crate::bmd::config_reader::*;
use crate::bmd::io_common::*;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum BmdError {
    #[snafu(display("Error opening file {path}"))]
    OpeningFile {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error writing file {path}"))]
    WritingFile {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error parsing JSON from {path}"))]
    ParsingJson {
        source: serde_json::Error,
        path: String,
    },
    #[snafu(display("Error writing CSV"))]
    WritingCsv { source: csv::Error },
    #[snafu(display("Invalid election definition: {message}"))]
    InvalidElection { message: String },
    #[snafu(display("Invalid votes for contest {contest_id}: {message}"))]
    InvalidVotes { contest_id: String, message: String },
    #[snafu(display("{source}"))]
    Ballot { source: BallotError },

    #[snafu(whatever, display("{message}"))]
    Whatever {
        message: String,
        #[snafu(source(from(Box<dyn std::error::Error>, Some)))]
        source: Option<Box<dyn std::error::Error>>,
    },
}

pub type BmdResult<T> = Result<T, BmdError>;

/// The lines of the printed ballot summary, in contest order.
pub fn ballot_summary(election: &Election, contests: &[Contest], votes: &Votes) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    for contest in contests.iter() {
        lines.push(contest.title.clone());
        let vote = votes
            .get(&contest.id)
            .cloned()
            .unwrap_or_else(|| contest.no_selection());
        let empty = vote.is_empty();
        match (&contest.kind, vote) {
            (ContestKind::Candidate { seats, .. }, ContestVote::Candidate(selections))
                if !empty =>
            {
                for s in selections.iter() {
                    let line = match s {
                        Selection::Candidate(c) => {
                            match c.party_id.as_deref().and_then(|pid| election.party(pid)) {
                                Some(party) => format!("{} / {}", c.name, party.name),
                                None => c.name.clone(),
                            }
                        }
                        Selection::WriteIn(text) => format!("{} (write-in)", text),
                    };
                    lines.push(format!("    {}", line));
                }
                let remaining = *seats as usize - selections.len().min(*seats as usize);
                if remaining > 0 {
                    lines.push(format!(
                        "    [no selection for {} of {} choices]",
                        remaining, seats
                    ));
                }
            }
            (ContestKind::YesNo, ContestVote::YesNo(Some(yn))) => {
                let answer = match yn {
                    YesNo::Yes => "Yes",
                    YesNo::No => "No",
                };
                match &contest.short_title {
                    Some(t) if !t.is_empty() => lines.push(format!("    {} on {}", answer, t)),
                    _ => lines.push(format!("    {}", answer)),
                }
            }
            _ => lines.push("    [no selection]".to_string()),
        }
    }
    lines
}

/// Reads the votes and returns the content of the QR code.
pub fn run_encode(
    election_path: &str,
    ballot_style_id: Option<String>,
    precinct_id: Option<String>,
    activation_code: Option<String>,
    votes_path: &str,
    serial_number: Option<String>,
) -> BmdResult<String> {
    let (ballot_style_id, precinct_id) = match (activation_code, ballot_style_id, precinct_id) {
        (Some(code), None, None) => {
            let ac: ActivationCode = code.parse().context(BallotSnafu)?;
            (ac.ballot_style_id, ac.precinct_id)
        }
        (None, Some(bs), Some(p)) => (bs, p),
        x => {
            whatever!(
                "Either an activation code or both a ballot style and a precinct are required, found {:?}",
                x
            )
        }
    };

    let election = read_election(election_path)?;
    let resolved = resolve_ballot(&election, &ballot_style_id, &precinct_id).context(BallotSnafu)?;
    let votes = io_votes::read_votes(votes_path, &resolved.contests)?;
    for line in ballot_summary(&election, &resolved.contests, &votes) {
        debug!("{}", line);
    }

    let serial_number =
        serial_number.unwrap_or_else(|| random_serial_number(&mut rand::thread_rng()));
    let payload = encode_ballot(
        &election,
        &ballot_style_id,
        &precinct_id,
        &votes,
        &serial_number,
    )
    .context(BallotSnafu)?;
    Ok(payload.to_string())
}

/// Decodes a payload. Returns the votes in JSON, and logs the ballot summary.
pub fn run_decode(election_path: &str, payload: &str) -> BmdResult<JSValue> {
    let election = read_election(election_path)?;
    let decoded = decode_ballot(&election, payload).context(BallotSnafu)?;
    info!(
        "Ballot style {}, precinct {}, serial number {}",
        decoded.resolved.ballot_style.id, decoded.resolved.precinct.id, decoded.serial_number
    );
    for line in ballot_summary(&election, &decoded.resolved.contests, &decoded.votes) {
        info!("{}", line);
    }
    Ok(io_votes::votes_to_json(&decoded.votes))
}

/// Generates a test deck in the given format ("json" by default, or "csv").
pub fn run_test_deck(
    election_path: &str,
    precinct_id: Option<&str>,
    format: Option<&str>,
    reference_path: Option<&str>,
) -> BmdResult<String> {
    let election = read_election(election_path)?;
    let ballots = generate_test_deck_ballots(&election, precinct_id).context(BallotSnafu)?;
    info!(
        "Test deck for {}: {} ballots",
        precinct_id.unwrap_or("all precincts"),
        ballots.len()
    );

    let deck_js = io_deck::deck_to_json(&ballots);
    if let Some(p) = reference_path {
        io_deck::check_reference(&deck_js, p)?;
    }

    match format.unwrap_or("json") {
        "json" => serde_json::to_string_pretty(&deck_js)
            .whatever_context("Failed to serialize the test deck"),
        "csv" => io_deck::deck_to_csv(&election, &ballots),
        x => whatever!("Unknown output format {:?}: use json or csv", x),
    }
}
