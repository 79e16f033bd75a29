use meson::error::Failure;
use meson::io::{exit, szs, tptp};
use meson::options::Options;
use meson::search::Search;

fn main() {
    let options = Options::parse();
    let problem = tptp::load(&options.path);

    let search = Search::new(options.strategy).with_limit(options.limit);
    let result = search.refute(&problem.clauses);

    if options.statistics {
        for (name, value) in &search.statistics().items() {
            println!("% {}: {}", name, value);
        }
    }

    match result {
        Ok(depth) => {
            println!("% refutation found at depth {}", depth);
            szs::unsatisfiable();
            exit::success()
        }
        Err(Failure::SearchExhausted) => {
            szs::gave_up();
            exit::failure()
        }
        Err(failure) => {
            println!("% search failed: {}", failure);
            szs::gave_up();
            exit::failure()
        }
    }
}
