/*!
The content of the QR code printed on a ballot.

The payload is `<ballot style id>.<precinct id>.<encoded votes>.<serial number>`.
None of the fields may contain the `.` delimiter: the encoded votes and the serial
numbers generated here never do, and identifiers are checked.
*/

use std::fmt::Display;
use std::str::FromStr;

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use log::{debug, info};
use rand::{CryptoRng, RngCore};
use snafu::prelude::*;

use crate::config::*;
use crate::schema::{resolve_ballot, ResolvedBallot};

pub const PAYLOAD_DELIMITER: char = '.';

/// Number of random bytes in a serial number.
pub const SERIAL_NUMBER_BYTES: usize = 16;

#[derive(Eq, PartialEq, Debug, Clone, Hash)]
pub struct BallotPayload {
    ballot_style_id: String,
    precinct_id: String,
    encoded_votes: String,
    serial_number: String,
}

impl BallotPayload {
    pub fn new(
        ballot_style_id: &str,
        precinct_id: &str,
        encoded_votes: &str,
        serial_number: &str,
    ) -> BallotResult<BallotPayload> {
        for (name, field) in [
            ("ballot style id", ballot_style_id),
            ("precinct id", precinct_id),
            ("encoded votes", encoded_votes),
            ("serial number", serial_number),
        ] {
            ensure!(
                !field.is_empty() && !field.contains(PAYLOAD_DELIMITER),
                InvariantViolationSnafu {
                    message: format!("{} {:?} cannot be placed in a ballot payload", name, field),
                }
            );
        }
        Ok(BallotPayload {
            ballot_style_id: ballot_style_id.to_string(),
            precinct_id: precinct_id.to_string(),
            encoded_votes: encoded_votes.to_string(),
            serial_number: serial_number.to_string(),
        })
    }

    pub fn ballot_style_id(&self) -> &str {
        &self.ballot_style_id
    }

    pub fn precinct_id(&self) -> &str {
        &self.precinct_id
    }

    pub fn encoded_votes(&self) -> &str {
        &self.encoded_votes
    }

    pub fn serial_number(&self) -> &str {
        &self.serial_number
    }
}

impl Display for BallotPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{d}{}{d}{}{d}{}",
            self.ballot_style_id,
            self.precinct_id,
            self.encoded_votes,
            self.serial_number,
            d = PAYLOAD_DELIMITER
        )
    }
}

impl FromStr for BallotPayload {
    type Err = BallotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split(PAYLOAD_DELIMITER).collect::<Vec<&str>>().as_slice() {
            [ballot_style_id, precinct_id, encoded_votes, serial_number]
                if [ballot_style_id, precinct_id, encoded_votes, serial_number]
                    .iter()
                    .all(|f| !f.is_empty()) =>
            {
                Ok(BallotPayload {
                    ballot_style_id: ballot_style_id.to_string(),
                    precinct_id: precinct_id.to_string(),
                    encoded_votes: encoded_votes.to_string(),
                    serial_number: serial_number.to_string(),
                })
            }
            fields => MalformedInputSnafu {
                message: format!(
                    "expected 4 non-empty fields in the ballot payload, found {:?}",
                    fields
                ),
            }
            .fail(),
        }
    }
}

/// Generates a serial number from the given source of randomness.
///
/// The serial number only uses the characters `A-Z a-z 0-9 - _`.
pub fn random_serial_number<R: RngCore + CryptoRng>(rng: &mut R) -> String {
    let mut bytes = [0u8; SERIAL_NUMBER_BYTES];
    rng.fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Resolves the ballot style, encodes the votes and assembles the payload.
pub fn encode_ballot(
    election: &Election,
    ballot_style_id: &str,
    precinct_id: &str,
    votes: &Votes,
    serial_number: &str,
) -> BallotResult<BallotPayload> {
    let resolved = resolve_ballot(election, ballot_style_id, precinct_id)?;
    let encoded = crate::encode(&resolved.contests, votes)?;
    let payload = BallotPayload::new(ballot_style_id, precinct_id, &encoded, serial_number)?;
    info!(
        "encode_ballot: ballot style {}, precinct {}: {} characters",
        ballot_style_id,
        precinct_id,
        payload.to_string().len()
    );
    Ok(payload)
}

/// A ballot read back from its payload.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct DecodedBallot<'a> {
    pub resolved: ResolvedBallot<'a>,
    pub serial_number: String,
    pub votes: Votes,
}

/// Parses a payload and decodes the votes with the contests of its ballot style.
pub fn decode_ballot<'a>(election: &'a Election, payload: &str) -> BallotResult<DecodedBallot<'a>> {
    let p: BallotPayload = payload.trim().parse()?;
    let resolved = resolve_ballot(election, &p.ballot_style_id, &p.precinct_id)?;
    let votes = crate::decode(&resolved.contests, &p.encoded_votes)?;
    debug!("decode_ballot: {:?} -> {:?}", p, votes);
    Ok(DecodedBallot {
        resolved,
        serial_number: p.serial_number,
        votes,
    })
}
