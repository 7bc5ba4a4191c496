mod config;
pub mod builder;
pub mod manual;
pub mod payload;
pub mod quick_start;
pub mod schema;
pub mod test_deck;

#[cfg(test)]
mod fixtures;

use std::collections::HashSet;

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use log::{debug, warn};
use snafu::prelude::*;

pub use crate::config::*;

/// The revision of the encoding produced by [encode]. See the [manual] for the layout.
pub const ENCODING_VERSION: u8 = 1;

/// Above this length, the QR code printed on the ballot may not scan reliably at its
/// physical size. Longer ballots are still encoded.
pub const SOFT_SIZE_BUDGET: usize = 256;

const YES_NO_WIDTH: u32 = 2;
const YES_NO_UNSET: u64 = 0;
const YES_NO_YES: u64 = 1;
const YES_NO_NO: u64 = 2;

// **** Private structures ****

/// Number of bits needed to write any value in 0..=max_value.
fn bit_width(max_value: u64) -> u32 {
    u64::BITS - max_value.leading_zeros()
}

// Bits are written most significant first.
struct BitWriter {
    bytes: Vec<u8>,
    bit_len: usize,
}

impl BitWriter {
    fn new() -> BitWriter {
        BitWriter {
            bytes: Vec::new(),
            bit_len: 0,
        }
    }

    fn write(&mut self, value: u64, width: u32) {
        for i in (0..width).rev() {
            if self.bit_len % 8 == 0 {
                self.bytes.push(0);
            }
            if (value >> i) & 1 == 1 {
                let last = self.bytes.len() - 1;
                self.bytes[last] |= 0x80 >> (self.bit_len % 8);
            }
            self.bit_len += 1;
        }
    }

    /// Pads the current byte with zeros.
    fn align(&mut self) {
        self.bit_len = self.bytes.len() * 8;
    }

    // LEB128
    fn write_varint(&mut self, mut value: u64) {
        self.align();
        loop {
            let low = (value & 0x7f) as u8;
            value >>= 7;
            if value == 0 {
                self.bytes.push(low);
                break;
            }
            self.bytes.push(low | 0x80);
        }
        self.align();
    }

    fn write_text(&mut self, text: &str) {
        self.write_varint(text.len() as u64);
        self.bytes.extend_from_slice(text.as_bytes());
        self.align();
    }

    fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

struct BitReader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> BitReader<'a> {
    fn new(bytes: &'a [u8]) -> BitReader<'a> {
        BitReader { bytes, pos: 0 }
    }

    fn remaining_bits(&self) -> usize {
        self.bytes.len() * 8 - self.pos
    }

    fn read(&mut self, width: u32) -> BallotResult<u64> {
        ensure!(
            self.remaining_bits() >= width as usize,
            MalformedInputSnafu {
                message: format!("truncated input at bit {}", self.pos),
            }
        );
        let mut value: u64 = 0;
        for _ in 0..width {
            let bit = (self.bytes[self.pos / 8] >> (7 - self.pos % 8)) & 1;
            value = (value << 1) | bit as u64;
            self.pos += 1;
        }
        Ok(value)
    }

    /// Skips to the next byte boundary. The skipped bits must be zero.
    fn align(&mut self) -> BallotResult<()> {
        while self.pos % 8 != 0 {
            ensure!(
                self.read(1)? == 0,
                MalformedInputSnafu {
                    message: "non-zero padding bits",
                }
            );
        }
        Ok(())
    }

    fn read_varint(&mut self) -> BallotResult<u64> {
        self.align()?;
        let mut value: u64 = 0;
        let mut shift = 0;
        loop {
            ensure!(
                shift < 63,
                MalformedInputSnafu {
                    message: "length prefix is too long",
                }
            );
            let byte = self.read(8)?;
            // Only the shortest form is produced by the writer.
            ensure!(
                !(byte == 0 && shift > 0),
                MalformedInputSnafu {
                    message: "length prefix is not minimal",
                }
            );
            value |= (byte & 0x7f) << shift;
            if byte & 0x80 == 0 {
                return Ok(value);
            }
            shift += 7;
        }
    }

    fn read_text(&mut self) -> BallotResult<String> {
        let len = self.read_varint()?;
        ensure!(
            len <= (self.remaining_bits() / 8) as u64,
            MalformedInputSnafu {
                message: format!("write-in of length {} exceeds the input", len),
            }
        );
        let start = self.pos / 8;
        let end = start + len as usize;
        self.pos = end * 8;
        String::from_utf8(self.bytes[start..end].to_vec())
            .ok()
            .context(MalformedInputSnafu {
                message: "write-in is not valid UTF-8",
            })
    }

    fn finish(&self) -> BallotResult<()> {
        ensure!(
            self.remaining_bits() == 0,
            MalformedInputSnafu {
                message: format!("{} trailing bits", self.remaining_bits()),
            }
        );
        Ok(())
    }
}

/// Encodes the votes for the given contests.
///
/// Arguments:
/// * `contests` the contests of the ballot style, in the order returned by
/// [schema::resolve_contests]. The position of a contest in this list is its
/// slot in the encoding.
/// * `votes` the votes of the voter. A contest without an entry is encoded as
/// no selection. Entries for contests that are not in `contests` are ignored.
///
/// The output only contains the characters `A-Z a-z 0-9 - _`.
pub fn encode(contests: &[Contest], votes: &Votes) -> BallotResult<String> {
    let mut writer = BitWriter::new();
    writer.write(ENCODING_VERSION as u64, 8);

    let mut write_ins: Vec<&str> = Vec::new();
    for contest in contests.iter() {
        encode_contest(&mut writer, contest, votes.get(&contest.id), &mut write_ins)?;
    }

    writer.align();
    for text in write_ins.iter() {
        writer.write_text(text);
    }

    let bytes = writer.into_bytes();
    let res = URL_SAFE_NO_PAD.encode(&bytes);
    debug!(
        "encode: {} contests, {} write-ins, {} bytes -> {:?}",
        contests.len(),
        write_ins.len(),
        bytes.len(),
        res
    );
    if res.len() > SOFT_SIZE_BUDGET {
        warn!(
            "encode: encoded ballot has {} characters, above the size budget of {}",
            res.len(),
            SOFT_SIZE_BUDGET
        );
    }
    Ok(res)
}

fn encode_contest<'v>(
    writer: &mut BitWriter,
    contest: &Contest,
    vote: Option<&'v ContestVote>,
    write_ins: &mut Vec<&'v str>,
) -> BallotResult<()> {
    match (&contest.kind, vote) {
        (ContestKind::YesNo, None) | (ContestKind::YesNo, Some(ContestVote::YesNo(None))) => {
            writer.write(YES_NO_UNSET, YES_NO_WIDTH);
        }
        (ContestKind::YesNo, Some(ContestVote::YesNo(Some(YesNo::Yes)))) => {
            writer.write(YES_NO_YES, YES_NO_WIDTH);
        }
        (ContestKind::YesNo, Some(ContestVote::YesNo(Some(YesNo::No)))) => {
            writer.write(YES_NO_NO, YES_NO_WIDTH);
        }
        (ContestKind::Candidate { seats, .. }, None) => {
            writer.write(0, bit_width(*seats as u64));
        }
        (
            ContestKind::Candidate {
                seats,
                candidates,
                allow_write_ins,
            },
            Some(ContestVote::Candidate(selections)),
        ) => {
            ensure!(
                selections.len() <= *seats as usize,
                InvariantViolationSnafu {
                    message: format!(
                        "contest {:?}: {} selections for {} seats",
                        contest.id,
                        selections.len(),
                        seats
                    ),
                }
            );
            let write_in_index = candidates.len() as u64;
            let choice_width = bit_width(write_in_index);
            writer.write(selections.len() as u64, bit_width(*seats as u64));

            let mut seen: HashSet<&str> = HashSet::new();
            for selection in selections.iter() {
                match selection {
                    Selection::Candidate(cand) => {
                        let idx = candidates
                            .iter()
                            .position(|c| c.id == cand.id)
                            .context(InvariantViolationSnafu {
                                message: format!(
                                    "contest {:?}: unknown candidate {:?}",
                                    contest.id, cand.id
                                ),
                            })?;
                        ensure!(
                            seen.insert(cand.id.as_str()),
                            InvariantViolationSnafu {
                                message: format!(
                                    "contest {:?}: candidate {:?} selected more than once",
                                    contest.id, cand.id
                                ),
                            }
                        );
                        writer.write(idx as u64, choice_width);
                    }
                    Selection::WriteIn(text) => {
                        ensure!(
                            *allow_write_ins,
                            InvariantViolationSnafu {
                                message: format!(
                                    "contest {:?} does not allow write-ins",
                                    contest.id
                                ),
                            }
                        );
                        writer.write(write_in_index, choice_width);
                        write_ins.push(text.as_str());
                    }
                }
            }
        }
        (_, Some(v)) => {
            return InvariantViolationSnafu {
                message: format!(
                    "contest {:?}: vote {:?} does not match the contest type",
                    contest.id, v
                ),
            }
            .fail();
        }
    }
    Ok(())
}

/// Decodes a string produced by [encode] with the same contests.
///
/// Every contest of `contests` is present in the result: contests without a
/// selection are returned as an empty candidate list or an unset yes/no vote.
pub fn decode(contests: &[Contest], encoded: &str) -> BallotResult<Votes> {
    let bytes = URL_SAFE_NO_PAD
        .decode(encoded)
        .ok()
        .context(MalformedInputSnafu {
            message: format!("not a valid encoded ballot: {:?}", encoded),
        })?;
    let mut reader = BitReader::new(&bytes);

    let version = reader.read(8)? as u8;
    ensure!(
        version == ENCODING_VERSION,
        UnsupportedVersionSnafu { version }
    );

    let mut decoded: Vec<(String, ContestVote)> = Vec::with_capacity(contests.len());
    for contest in contests.iter() {
        let vote = decode_contest(&mut reader, contest)?;
        decoded.push((contest.id.clone(), vote));
    }

    // The write-in texts follow, in slot order.
    reader.align()?;
    for (_, vote) in decoded.iter_mut() {
        if let ContestVote::Candidate(selections) = vote {
            for selection in selections.iter_mut() {
                if let Selection::WriteIn(text) = selection {
                    *text = reader.read_text()?;
                }
            }
        }
    }
    reader.finish()?;

    debug!("decode: {:?} -> {:?}", encoded, decoded);
    Ok(decoded.into_iter().collect())
}

// Write-ins are returned with an empty text, filled later.
fn decode_contest(reader: &mut BitReader, contest: &Contest) -> BallotResult<ContestVote> {
    match &contest.kind {
        ContestKind::YesNo => match reader.read(YES_NO_WIDTH)? {
            YES_NO_UNSET => Ok(ContestVote::YesNo(None)),
            YES_NO_YES => Ok(ContestVote::YesNo(Some(YesNo::Yes))),
            YES_NO_NO => Ok(ContestVote::YesNo(Some(YesNo::No))),
            x => MalformedInputSnafu {
                message: format!("contest {:?}: invalid yes/no value {}", contest.id, x),
            }
            .fail(),
        },
        ContestKind::Candidate {
            seats,
            candidates,
            allow_write_ins,
        } => {
            let count = reader.read(bit_width(*seats as u64))?;
            ensure!(
                count <= *seats as u64,
                MalformedInputSnafu {
                    message: format!(
                        "contest {:?}: {} selections for {} seats",
                        contest.id, count, seats
                    ),
                }
            );
            let write_in_index = candidates.len() as u64;
            let choice_width = bit_width(write_in_index);
            let mut seen: HashSet<u64> = HashSet::new();
            let capacity = count.min(reader.remaining_bits() as u64) as usize;
            let mut selections: Vec<Selection> = Vec::with_capacity(capacity);
            for _ in 0..count {
                let idx = reader.read(choice_width)?;
                if idx == write_in_index {
                    ensure!(
                        *allow_write_ins,
                        MalformedInputSnafu {
                            message: format!(
                                "contest {:?}: write-in in a contest without write-ins",
                                contest.id
                            ),
                        }
                    );
                    selections.push(Selection::WriteIn(String::new()));
                } else {
                    let cand = candidates.get(idx as usize).context(MalformedInputSnafu {
                        message: format!("contest {:?}: invalid candidate index {}", contest.id, idx),
                    })?;
                    ensure!(
                        seen.insert(idx),
                        MalformedInputSnafu {
                            message: format!(
                                "contest {:?}: candidate {:?} appears twice",
                                contest.id, cand.id
                            ),
                        }
                    );
                    selections.push(Selection::Candidate(cand.clone()));
                }
            }
            Ok(ContestVote::Candidate(selections))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::*;
    use crate::schema::resolve_contests_for;

    fn president_and_prop() -> Vec<Contest> {
        vec![
            candidate_contest(
                "president",
                "district-1",
                1,
                vec![candidate("A", "A", None), candidate("B", "B", None)],
                false,
            ),
            yes_no_contest("prop1", "district-1"),
        ]
    }

    fn full_votes(election: &Election) -> Votes {
        Votes::new()
            .with(
                "president",
                ContestVote::Candidate(vec![Selection::Candidate(sample_candidate(
                    election, "president", "bob",
                ))]),
            )
            .with(
                "city-council",
                ContestVote::Candidate(vec![
                    Selection::Candidate(sample_candidate(election, "city-council", "grace")),
                    Selection::WriteIn("Mickey Mouse".to_string()),
                    Selection::Candidate(sample_candidate(election, "city-council", "carol")),
                ]),
            )
            .with(
                "county-commissioners",
                ContestVote::Candidate(vec![Selection::WriteIn("Donald".to_string())]),
            )
            .with("prop-1", ContestVote::YesNo(Some(YesNo::No)))
            .with("measure-2", ContestVote::YesNo(None))
    }

    #[test]
    fn bit_widths() {
        assert_eq!(bit_width(0), 0);
        assert_eq!(bit_width(1), 1);
        assert_eq!(bit_width(2), 2);
        assert_eq!(bit_width(3), 2);
        assert_eq!(bit_width(4), 3);
        assert_eq!(bit_width(255), 8);
    }

    #[test]
    fn president_scenario() {
        let _ = env_logger::try_init();
        let contests = president_and_prop();
        let votes = Votes::new()
            .with(
                "president",
                ContestVote::Candidate(vec![Selection::Candidate(candidate("B", "B", None))]),
            )
            .with("prop1", ContestVote::YesNo(Some(YesNo::Yes)));
        let s = encode(&contests, &votes).unwrap();
        // version 1, then 1 selection, index 1, yes.
        assert_eq!(s, "Aag");
        assert_eq!(decode(&contests, &s).unwrap(), votes);
    }

    #[test]
    fn deterministic() {
        let election = sample_election();
        let contests = resolve_contests_for(&election, "12").unwrap();
        let votes = full_votes(&election);
        let s1 = encode(&contests, &votes).unwrap();
        let s2 = encode(&contests, &votes.clone()).unwrap();
        assert_eq!(s1, s2);
    }

    #[test]
    fn round_trip_full_ballot() {
        let election = sample_election();
        let contests = resolve_contests_for(&election, "12").unwrap();
        let votes = full_votes(&election);
        let s = encode(&contests, &votes).unwrap();
        assert!(!s.contains('.'));
        assert_eq!(decode(&contests, &s).unwrap(), votes);
    }

    #[test]
    fn selection_order_is_preserved() {
        let election = sample_election();
        let contests = resolve_contests_for(&election, "5").unwrap();
        let forward = Votes::new().with(
            "city-council",
            ContestVote::Candidate(vec![
                Selection::Candidate(sample_candidate(&election, "city-council", "carol")),
                Selection::Candidate(sample_candidate(&election, "city-council", "erin")),
            ]),
        );
        let backward = Votes::new().with(
            "city-council",
            ContestVote::Candidate(vec![
                Selection::Candidate(sample_candidate(&election, "city-council", "erin")),
                Selection::Candidate(sample_candidate(&election, "city-council", "carol")),
            ]),
        );
        let s1 = encode(&contests, &forward).unwrap();
        let s2 = encode(&contests, &backward).unwrap();
        assert_ne!(s1, s2);
        let decoded = decode(&contests, &s2).unwrap();
        assert_eq!(decoded.get("city-council"), backward.get("city-council"));
    }

    #[test]
    fn absent_contest_is_no_selection() {
        let election = sample_election();
        let contests = resolve_contests_for(&election, "12").unwrap();
        let explicit = Votes::new()
            .with("president", ContestVote::Candidate(vec![]))
            .with("city-council", ContestVote::Candidate(vec![]))
            .with("county-commissioners", ContestVote::Candidate(vec![]))
            .with("prop-1", ContestVote::YesNo(None))
            .with("measure-2", ContestVote::YesNo(None));
        let s_empty = encode(&contests, &Votes::new()).unwrap();
        let s_explicit = encode(&contests, &explicit).unwrap();
        assert_eq!(s_empty, s_explicit);
        // Abstentions are returned explicitly.
        assert_eq!(decode(&contests, &s_empty).unwrap(), explicit);
    }

    #[test]
    fn skipped_contest_differs_from_first_candidate() {
        let contests = president_and_prop();
        let skipped = encode(&contests, &Votes::new()).unwrap();
        let first = encode(
            &contests,
            &Votes::new().with(
                "president",
                ContestVote::Candidate(vec![Selection::Candidate(candidate("A", "A", None))]),
            ),
        )
        .unwrap();
        assert_ne!(skipped, first);
        let decoded = decode(&contests, &skipped).unwrap();
        assert_eq!(
            decoded.get("president"),
            Some(&ContestVote::Candidate(vec![]))
        );
    }

    #[test]
    fn too_many_selections() {
        let contests = president_and_prop();
        let votes = Votes::new().with(
            "president",
            ContestVote::Candidate(vec![
                Selection::Candidate(candidate("A", "A", None)),
                Selection::Candidate(candidate("B", "B", None)),
            ]),
        );
        let res = encode(&contests, &votes);
        assert!(
            matches!(res, Err(BallotError::InvariantViolation { .. })),
            "{:?}",
            res
        );
    }

    #[test]
    fn invalid_votes_are_rejected() {
        let contests = president_and_prop();
        let wrong_kind = Votes::new().with("prop1", ContestVote::Candidate(vec![]));
        let unknown = Votes::new().with(
            "president",
            ContestVote::Candidate(vec![Selection::Candidate(candidate("Z", "Z", None))]),
        );
        let write_in = Votes::new().with(
            "president",
            ContestVote::Candidate(vec![Selection::WriteIn("Z".to_string())]),
        );
        for votes in [wrong_kind, unknown, write_in] {
            assert!(matches!(
                encode(&contests, &votes),
                Err(BallotError::InvariantViolation { .. })
            ));
        }
    }

    #[test]
    fn duplicate_candidate_is_rejected() {
        let election = sample_election();
        let contests = resolve_contests_for(&election, "5").unwrap();
        let carol = sample_candidate(&election, "city-council", "carol");
        let votes = Votes::new().with(
            "city-council",
            ContestVote::Candidate(vec![
                Selection::Candidate(carol.clone()),
                Selection::Candidate(carol),
            ]),
        );
        assert!(matches!(
            encode(&contests, &votes),
            Err(BallotError::InvariantViolation { .. })
        ));
    }

    #[test]
    fn write_in_fidelity() {
        let election = sample_election();
        let contests = resolve_contests_for(&election, "12").unwrap();
        let tricky = [
            "Dr. J. R. R. Tolkien",
            "...",
            "a.b.c.d",
            "",
            "Zoë Ångström 候选人 🗳",
            "   spaced   ",
        ];
        for text in tricky {
            let votes = Votes::new()
                .with(
                    "city-council",
                    ContestVote::Candidate(vec![
                        Selection::WriteIn(text.to_string()),
                        Selection::WriteIn(format!("{}{}", text, text)),
                    ]),
                )
                .with(
                    "county-commissioners",
                    ContestVote::Candidate(vec![Selection::WriteIn(text.to_string())]),
                )
                .with("measure-2", ContestVote::YesNo(Some(YesNo::Yes)));
            let s = encode(&contests, &votes).unwrap();
            assert!(!s.contains('.'), "{}", s);
            let decoded = decode(&contests, &s).unwrap();
            assert_eq!(decoded.get("city-council"), votes.get("city-council"));
            assert_eq!(
                decoded.get("county-commissioners"),
                votes.get("county-commissioners")
            );
            assert_eq!(
                decoded.get("measure-2"),
                Some(&ContestVote::YesNo(Some(YesNo::Yes)))
            );
        }
    }

    #[test]
    fn long_write_in() {
        let election = sample_election();
        let contests = resolve_contests_for(&election, "5").unwrap();
        let text: String = "x".repeat(300);
        let votes = Votes::new().with(
            "city-council",
            ContestVote::Candidate(vec![Selection::WriteIn(text.clone())]),
        );
        let s = encode(&contests, &votes).unwrap();
        let decoded = decode(&contests, &s).unwrap();
        assert_eq!(
            decoded.get("city-council"),
            Some(&ContestVote::Candidate(vec![Selection::WriteIn(text)]))
        );
    }

    #[test]
    fn unsupported_version() {
        let contests = president_and_prop();
        // Same payload as the scenario, with version 2 and version 0.
        let v2 = URL_SAFE_NO_PAD.encode([2u8, 0xA8]);
        let v0 = URL_SAFE_NO_PAD.encode([0u8, 0xA8]);
        assert_eq!(
            decode(&contests, &v2),
            Err(BallotError::UnsupportedVersion { version: 2 })
        );
        assert_eq!(
            decode(&contests, &v0),
            Err(BallotError::UnsupportedVersion { version: 0 })
        );
    }

    #[test]
    fn malformed_inputs() {
        let contests = president_and_prop();
        let bad = [
            // Not base64.
            "A.g".to_string(),
            "Aa=g".to_string(),
            // Empty.
            "".to_string(),
            // Version only.
            URL_SAFE_NO_PAD.encode([1u8]),
            // Index 3 is out of range for 2 candidates.
            URL_SAFE_NO_PAD.encode([1u8, 0b1110_0000]),
            // Index 2 is a write-in, not allowed for president.
            URL_SAFE_NO_PAD.encode([1u8, 0b1100_0000]),
            // Yes/no value 3.
            URL_SAFE_NO_PAD.encode([1u8, 0b0110_0000]),
            // Non-zero padding.
            URL_SAFE_NO_PAD.encode([1u8, 0b1010_1001]),
            // Trailing byte.
            URL_SAFE_NO_PAD.encode([1u8, 0xA8, 0]),
        ];
        for s in bad.iter() {
            let res = decode(&contests, s);
            assert!(
                matches!(res, Err(BallotError::MalformedInput { .. })),
                "{:?} -> {:?}",
                s,
                res
            );
        }
    }

    #[test]
    fn malformed_write_ins() {
        let election = sample_election();
        let contests = resolve_contests_for(&election, "5").unwrap();
        let votes = Votes::new().with(
            "city-council",
            ContestVote::Candidate(vec![Selection::WriteIn("ab".to_string())]),
        );
        let s = encode(&contests, &votes).unwrap();
        let bytes = URL_SAFE_NO_PAD.decode(&s).unwrap();
        // president: 0, city-council: 1 write-in (index 5), prop-1: unset; then "ab".
        assert_eq!(bytes, vec![1u8, 0b0011_0100, 2, b'a', b'b']);

        let bad_utf8 = URL_SAFE_NO_PAD.encode([1u8, 0b0011_0100, 2, 0xfe, 0xff]);
        let long_prefix = URL_SAFE_NO_PAD.encode([1u8, 0b0011_0100, 0x82, 0x00, b'a', b'b']);
        // city-council: 2 selections, carol twice.
        let twice = URL_SAFE_NO_PAD.encode([1u8, 0b0100_0000, 0]);
        for s in [bad_utf8, long_prefix, twice].iter() {
            let res = decode(&contests, s);
            assert!(
                matches!(res, Err(BallotError::MalformedInput { .. })),
                "{:?} -> {:?}",
                s,
                res
            );
        }
    }

    #[test]
    fn truncated_write_in() {
        let election = sample_election();
        let contests = resolve_contests_for(&election, "5").unwrap();
        let votes = Votes::new().with(
            "city-council",
            ContestVote::Candidate(vec![Selection::WriteIn("Mickey".to_string())]),
        );
        let s = encode(&contests, &votes).unwrap();
        let mut bytes = URL_SAFE_NO_PAD.decode(&s).unwrap();
        bytes.pop();
        let truncated = URL_SAFE_NO_PAD.encode(&bytes);
        assert!(matches!(
            decode(&contests, &truncated),
            Err(BallotError::MalformedInput { .. })
        ));
    }

    #[test]
    fn same_string_with_other_contests() {
        // The contest list is part of the decoding key.
        let election = sample_election();
        let c12 = resolve_contests_for(&election, "12").unwrap();
        let c5 = resolve_contests_for(&election, "5").unwrap();
        let s = encode(&c12, &full_votes(&election)).unwrap();
        assert!(decode(&c5, &s).is_err());
    }
}
