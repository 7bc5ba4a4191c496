// ********* Election definition ***********

use std::collections::BTreeMap;

use snafu::Snafu;

/// A candidate defined by the election.
///
/// Write-ins are never represented with this structure: see [Selection::WriteIn].
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
pub struct Candidate {
    pub id: String,
    pub name: String,
    pub party_id: Option<String>,
}

/// The type-specific part of a contest.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum ContestKind {
    /// A contest in which the voter picks up to `seats` candidates.
    Candidate {
        seats: u32,
        candidates: Vec<Candidate>,
        allow_write_ins: bool,
    },
    /// A measure with two outcomes.
    YesNo,
}

#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Contest {
    pub id: String,
    pub title: String,
    pub short_title: Option<String>,
    pub district_id: String,
    pub party_id: Option<String>,
    pub kind: ContestKind,
}

impl Contest {
    /// The number of distinct choices offered by this contest, ignoring write-ins.
    pub fn choice_count(&self) -> usize {
        match &self.kind {
            ContestKind::Candidate { candidates, .. } => candidates.len(),
            ContestKind::YesNo => 2,
        }
    }

    /// The maximum number of selections a voter may make.
    pub fn seats(&self) -> u32 {
        match &self.kind {
            ContestKind::Candidate { seats, .. } => *seats,
            ContestKind::YesNo => 1,
        }
    }

    /// The vote that corresponds to the voter skipping this contest.
    pub fn no_selection(&self) -> ContestVote {
        match &self.kind {
            ContestKind::Candidate { .. } => ContestVote::Candidate(Vec::new()),
            ContestKind::YesNo => ContestVote::YesNo(None),
        }
    }
}

#[derive(Eq, PartialEq, Debug, Clone)]
pub struct BallotStyle {
    pub id: String,
    pub districts: Vec<String>,
    pub party_id: Option<String>,
    pub precincts: Vec<String>,
}

#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Precinct {
    pub id: String,
    pub name: String,
}

#[derive(Eq, PartialEq, Debug, Clone)]
pub struct District {
    pub id: String,
    pub name: String,
}

#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Party {
    pub id: String,
    pub name: String,
}

/// An election definition, assumed to be already validated by its loader.
///
/// The order of `contests` is significant: it is the order in which contests
/// are placed on every ballot and encoded.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Election {
    pub title: String,
    pub parties: Vec<Party>,
    pub districts: Vec<District>,
    pub precincts: Vec<Precinct>,
    pub ballot_styles: Vec<BallotStyle>,
    pub contests: Vec<Contest>,
}

impl Election {
    pub fn party(&self, party_id: &str) -> Option<&Party> {
        self.parties.iter().find(|p| p.id == party_id)
    }
}

// ********* Votes ***********

#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    pub fn as_str(&self) -> &'static str {
        match self {
            YesNo::Yes => "yes",
            YesNo::No => "no",
        }
    }
}

/// One mark made by the voter in a candidate contest.
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
pub enum Selection {
    /// A candidate from the election definition.
    Candidate(Candidate),
    /// The free text typed by the voter. It is not checked against the election.
    WriteIn(String),
}

/// The vote for a single contest. The variant must match the kind of the contest.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum ContestVote {
    /// The selections, in the order in which the voter made them.
    Candidate(Vec<Selection>),
    YesNo(Option<YesNo>),
}

impl ContestVote {
    pub fn is_empty(&self) -> bool {
        match self {
            ContestVote::Candidate(selections) => selections.is_empty(),
            ContestVote::YesNo(v) => v.is_none(),
        }
    }
}

/// The selections of a voter, keyed by contest id.
///
/// Once built, votes are not modified anymore. Use the
/// [VotesBuilder](crate::builder::VotesBuilder) to assemble them during a voting session.
#[derive(Eq, PartialEq, Debug, Clone, Default)]
pub struct Votes {
    pub(crate) contests: BTreeMap<String, ContestVote>,
}

impl Votes {
    pub fn new() -> Votes {
        Votes::default()
    }

    /// Returns a copy of these votes with the vote for the given contest replaced.
    pub fn with(mut self, contest_id: &str, vote: ContestVote) -> Votes {
        self.contests.insert(contest_id.to_string(), vote);
        self
    }

    pub fn get(&self, contest_id: &str) -> Option<&ContestVote> {
        self.contests.get(contest_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ContestVote)> {
        self.contests.iter()
    }

    pub fn len(&self) -> usize {
        self.contests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contests.is_empty()
    }
}

impl FromIterator<(String, ContestVote)> for Votes {
    fn from_iter<I: IntoIterator<Item = (String, ContestVote)>>(iter: I) -> Self {
        Votes {
            contests: iter.into_iter().collect(),
        }
    }
}

/// A synthetic ballot, as produced by the test deck generator.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Ballot {
    pub precinct_id: String,
    pub ballot_style_id: String,
    pub votes: Votes,
}

// ******** Errors *********

/// Errors raised by the schema resolution, the codec and the payload functions.
#[derive(Eq, PartialEq, Debug, Clone, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum BallotError {
    /// The election definition and the ballot style do not agree.
    #[snafu(display("Schema error: {message}"))]
    Schema { message: String },
    /// The votes do not respect the constraints of the contests. This is a bug in
    /// the caller: the ballot must not be printed.
    #[snafu(display("Invariant violation: {message}"))]
    InvariantViolation { message: String },
    /// The encoded ballot cannot be interpreted.
    #[snafu(display("Malformed encoded ballot: {message}"))]
    MalformedInput { message: String },
    /// The encoded ballot was produced by a format revision this library does not read.
    #[snafu(display("Unsupported encoding version {version}"))]
    UnsupportedVersion { version: u8 },
}

pub type BallotResult<T> = Result<T, BallotError>;
