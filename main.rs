use std::io;
use std::process;

use doc_analyzer::{logging, session, AnalyzerError, FileSource};

fn main() {
    logging::init();

    let result = session::run(&mut io::stdin().lock(), &mut io::stdout().lock(), &FileSource);

    let code = match result {
        Ok(_) => 0,
        Err(e @ AnalyzerError::Console(_)) => {
            eprintln!("{}", e);
            e.exit_code()
        }
        Err(e) => {
            println!("{}", e);
            e.exit_code()
        }
    };
    process::exit(code);
}
