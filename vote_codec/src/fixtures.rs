// Election used by the unit tests.

use crate::config::*;

pub fn candidate(id: &str, name: &str, party_id: Option<&str>) -> Candidate {
    Candidate {
        id: id.to_string(),
        name: name.to_string(),
        party_id: party_id.map(|s| s.to_string()),
    }
}

pub fn candidate_contest(
    id: &str,
    district_id: &str,
    seats: u32,
    candidates: Vec<Candidate>,
    allow_write_ins: bool,
) -> Contest {
    Contest {
        id: id.to_string(),
        title: id.to_string(),
        short_title: None,
        district_id: district_id.to_string(),
        party_id: None,
        kind: ContestKind::Candidate {
            seats,
            candidates,
            allow_write_ins,
        },
    }
}

pub fn yes_no_contest(id: &str, district_id: &str) -> Contest {
    Contest {
        id: id.to_string(),
        title: id.to_string(),
        short_title: Some(id.to_uppercase()),
        district_id: district_id.to_string(),
        party_id: None,
        kind: ContestKind::YesNo,
    }
}

fn ballot_style(id: &str, districts: &[&str], party_id: Option<&str>, precincts: &[&str]) -> BallotStyle {
    BallotStyle {
        id: id.to_string(),
        districts: districts.iter().map(|s| s.to_string()).collect(),
        party_id: party_id.map(|s| s.to_string()),
        precincts: precincts.iter().map(|s| s.to_string()).collect(),
    }
}

/// Contests, in order:
/// - president (district-1): alice, bob; 1 seat
/// - city-council (district-1): 5 candidates; 3 seats with write-ins
/// - county-commissioners (district-2): 4 candidates; 2 seats with write-ins
/// - prop-1 (district-1): yes/no
/// - measure-2 (district-2): yes/no
/// - primary-mayor (district-1, party 0): 2 candidates
///
/// Ballot styles: 12 (both districts, precinct 23), 5 (district-1, precincts 21 and 23),
/// 7 (district-1 primary for party 0, precinct 21).
pub fn sample_election() -> Election {
    let mut primary = candidate_contest(
        "primary-mayor",
        "district-1",
        1,
        vec![
            candidate("xavier", "Xavier Young", Some("0")),
            candidate("yolanda", "Yolanda Zhu", Some("0")),
        ],
        false,
    );
    primary.party_id = Some("0".to_string());
    Election {
        title: "General Election".to_string(),
        parties: vec![
            Party {
                id: "0".to_string(),
                name: "Federalist".to_string(),
            },
            Party {
                id: "1".to_string(),
                name: "People's".to_string(),
            },
        ],
        districts: vec![
            District {
                id: "district-1".to_string(),
                name: "City of Springfield".to_string(),
            },
            District {
                id: "district-2".to_string(),
                name: "Franklin County".to_string(),
            },
        ],
        precincts: vec![
            Precinct {
                id: "23".to_string(),
                name: "Center Springfield".to_string(),
            },
            Precinct {
                id: "21".to_string(),
                name: "North Springfield".to_string(),
            },
        ],
        ballot_styles: vec![
            ballot_style("12", &["district-1", "district-2"], None, &["23"]),
            ballot_style("5", &["district-1"], None, &["21", "23"]),
            ballot_style("7", &["district-1"], Some("0"), &["21"]),
        ],
        contests: vec![
            candidate_contest(
                "president",
                "district-1",
                1,
                vec![
                    candidate("alice", "Alice Adams", Some("0")),
                    candidate("bob", "Bob Brown", Some("1")),
                ],
                false,
            ),
            candidate_contest(
                "city-council",
                "district-1",
                3,
                vec![
                    candidate("carol", "Carol Chen", None),
                    candidate("dave", "Dave Diaz", None),
                    candidate("erin", "Erin Evans", None),
                    candidate("frank", "Frank Fu", None),
                    candidate("grace", "Grace Gomez", None),
                ],
                true,
            ),
            candidate_contest(
                "county-commissioners",
                "district-2",
                2,
                vec![
                    candidate("hank", "Hank Hill", None),
                    candidate("iris", "Iris Ito", None),
                    candidate("jack", "Jack Jones", None),
                    candidate("kim", "Kim Kelly", None),
                ],
                true,
            ),
            yes_no_contest("prop-1", "district-1"),
            yes_no_contest("measure-2", "district-2"),
            primary,
        ],
    }
}

/// Finds a candidate of the sample election by id.
pub fn sample_candidate(election: &Election, contest_id: &str, candidate_id: &str) -> Candidate {
    election
        .contests
        .iter()
        .find(|c| c.id == contest_id)
        .and_then(|c| match &c.kind {
            ContestKind::Candidate { candidates, .. } => {
                candidates.iter().find(|cand| cand.id == candidate_id).cloned()
            }
            ContestKind::YesNo => None,
        })
        .unwrap()
}
