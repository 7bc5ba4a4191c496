use clap::{Parser, Subcommand};

/// Encodes and decodes the votes printed in the QR code of a ballot-marking device.
#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    #[clap(subcommand)]
    pub command: Command,

    // Other arguments
    /// If passed as an argument, will turn on verbose logging to the standard output.
    #[clap(long, global = true, takes_value = false)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Prints the payload of the QR code for the given votes.
    Encode {
        /// (file path) The election definition in JSON format.
        #[clap(short, long, value_parser)]
        election: String,
        /// The ballot style of the voter. Requires --precinct.
        #[clap(short, long, value_parser)]
        ballot_style: Option<String>,
        /// The precinct of the voter. Requires --ballot-style.
        #[clap(short, long, value_parser)]
        precinct: Option<String>,
        /// (VX.<precinct>.<ballot style>) The activation code written on the voter card. It replaces
        /// the --ballot-style and --precinct options.
        #[clap(short, long, value_parser)]
        activation_code: Option<String>,
        /// (file path) The votes in JSON format. See the documentation for the format.
        #[clap(long, value_parser)]
        votes: String,
        /// (optional) The serial number of the ballot. A random one is generated if not provided.
        #[clap(long, value_parser)]
        serial: Option<String>,
    },
    /// Reads a payload back and prints the votes in JSON format.
    Decode {
        /// (file path) The election definition in JSON format.
        #[clap(short, long, value_parser)]
        election: String,
        /// The content of the QR code.
        #[clap(long, value_parser)]
        payload: String,
        /// (file path, 'stdout' or empty) Where to write the votes.
        #[clap(short, long, value_parser)]
        out: Option<String>,
    },
    /// Generates the ballots of a test deck.
    TestDeck {
        /// (file path) The election definition in JSON format.
        #[clap(short, long, value_parser)]
        election: String,
        /// (optional) Restricts the deck to the ballot styles of one precinct.
        #[clap(short, long, value_parser)]
        precinct: Option<String>,
        /// (json or csv, default json) The output format.
        #[clap(long, value_parser)]
        format: Option<String>,
        /// (file path, 'stdout' or empty) Where to write the deck.
        #[clap(short, long, value_parser)]
        out: Option<String>,
        /// (file path) A reference deck in JSON format. If provided, the program checks that the
        /// generated deck matches the reference.
        #[clap(short, long, value_parser)]
        reference: Option<String>,
    },
}
