use crate::expand::Strategy;
use std::path::PathBuf;
use structopt::StructOpt;

const NAME: &str = "meson";

const ABOUT: &str = "
meson is a model elimination theorem prover for first-order logic.
The system reads a problem in TPTP CNF and reports an SZS status.
Without --limit the search runs until a refutation is found.
";

#[derive(StructOpt)]
#[structopt(name = NAME, author, about = ABOUT)]
pub struct Options {
    #[structopt(parse(from_os_str), help = "path to input problem")]
    pub path: PathBuf,

    #[structopt(
        long,
        help = "subgoal scheduling",
        possible_values = &["sequential", "balanced"],
        default_value = "balanced",
        parse(from_str = Strategy::new)
    )]
    pub strategy: Strategy,

    #[structopt(long, help = "give up beyond this depth")]
    pub limit: Option<usize>,

    #[structopt(long, help = "print search statistics on exit")]
    pub statistics: bool,
}

impl Options {
    pub fn parse() -> Self {
        Self::from_args()
    }
}
