use crate::bmd::*;

use serde::{Deserialize, Serialize};

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct PartyDefinition {
    pub id: String,
    pub name: String,
}

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct DistrictDefinition {
    pub id: String,
    pub name: String,
}

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct PrecinctDefinition {
    pub id: String,
    pub name: String,
}

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct BallotStyleDefinition {
    pub id: String,
    pub districts: Vec<String>,
    pub precincts: Vec<String>,
    #[serde(rename = "partyId")]
    pub party_id: Option<String>,
}

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct CandidateDefinition {
    pub id: String,
    pub name: String,
    #[serde(rename = "partyId")]
    pub party_id: Option<String>,
    #[serde(rename = "isWriteIn")]
    pub is_write_in: Option<bool>,
}

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct ContestDefinition {
    pub id: String,
    #[serde(rename = "type")]
    pub contest_type: String,
    pub title: String,
    #[serde(rename = "shortTitle")]
    pub short_title: Option<String>,
    #[serde(rename = "districtId")]
    pub district_id: String,
    #[serde(rename = "partyId")]
    pub party_id: Option<String>,
    // Candidate contests only
    pub seats: Option<u32>,
    pub candidates: Option<Vec<CandidateDefinition>>,
    #[serde(rename = "allowWriteIns")]
    pub allow_write_ins: Option<bool>,
}

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct ElectionDefinition {
    pub title: String,
    pub state: Option<String>,
    pub date: Option<String>,
    #[serde(default)]
    pub parties: Vec<PartyDefinition>,
    pub districts: Vec<DistrictDefinition>,
    pub precincts: Vec<PrecinctDefinition>,
    #[serde(rename = "ballotStyles")]
    pub ballot_styles: Vec<BallotStyleDefinition>,
    pub contests: Vec<ContestDefinition>,
}

impl ContestDefinition {
    pub fn to_contest(&self) -> BmdResult<Contest> {
        let kind = match self.contest_type.as_str() {
            "candidate" => {
                let seats = match self.seats {
                    Some(x) if x > 0 => x,
                    x => {
                        return InvalidElectionSnafu {
                            message: format!("contest {:?}: invalid seats {:?}", self.id, x),
                        }
                        .fail()
                    }
                };
                let mut candidates: Vec<Candidate> = Vec::new();
                for c in self.candidates.clone().unwrap_or_default() {
                    ensure!(
                        !c.is_write_in.unwrap_or(false),
                        InvalidElectionSnafu {
                            message: format!(
                                "contest {:?}: candidate {:?} cannot be a write-in",
                                self.id, c.id
                            ),
                        }
                    );
                    candidates.push(Candidate {
                        id: c.id,
                        name: c.name,
                        party_id: c.party_id,
                    });
                }
                ContestKind::Candidate {
                    seats,
                    candidates,
                    allow_write_ins: self.allow_write_ins.unwrap_or(false),
                }
            }
            "yesno" => ContestKind::YesNo,
            x => {
                return InvalidElectionSnafu {
                    message: format!("contest {:?}: unknown contest type {:?}", self.id, x),
                }
                .fail()
            }
        };
        Ok(Contest {
            id: self.id.clone(),
            title: self.title.clone(),
            short_title: self.short_title.clone(),
            district_id: self.district_id.clone(),
            party_id: self.party_id.clone(),
            kind,
        })
    }
}

impl ElectionDefinition {
    pub fn to_election(&self) -> BmdResult<Election> {
        let mut contests: Vec<Contest> = Vec::new();
        for c in self.contests.iter() {
            contests.push(c.to_contest()?);
        }
        Ok(Election {
            title: self.title.clone(),
            parties: self
                .parties
                .iter()
                .map(|p| Party {
                    id: p.id.clone(),
                    name: p.name.clone(),
                })
                .collect(),
            districts: self
                .districts
                .iter()
                .map(|d| District {
                    id: d.id.clone(),
                    name: d.name.clone(),
                })
                .collect(),
            precincts: self
                .precincts
                .iter()
                .map(|p| Precinct {
                    id: p.id.clone(),
                    name: p.name.clone(),
                })
                .collect(),
            ballot_styles: self
                .ballot_styles
                .iter()
                .map(|bs| BallotStyle {
                    id: bs.id.clone(),
                    districts: bs.districts.clone(),
                    party_id: bs.party_id.clone(),
                    precincts: bs.precincts.clone(),
                })
                .collect(),
            contests,
        })
    }
}

pub fn read_election(path: &str) -> BmdResult<Election> {
    let contents = fs::read_to_string(path).context(OpeningFileSnafu { path })?;
    let def: ElectionDefinition =
        serde_json::from_str(contents.as_str()).context(ParsingJsonSnafu { path })?;
    info!(
        "Read election {:?} ({}, {}): {} contests, {} ballot styles, {} precincts",
        def.title,
        def.state.as_deref().unwrap_or("no state"),
        def.date.as_deref().unwrap_or("no date"),
        def.contests.len(),
        def.ballot_styles.len(),
        def.precincts.len()
    );
    def.to_election()
}
