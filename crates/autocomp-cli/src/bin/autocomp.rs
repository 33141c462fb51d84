// autocomp: Prefix autocomplete with typo fallback.
//
// Answers each PREFIX argument, or prompts on stdin until 'exit'.
//
// Usage:
//   autocomp [-w WORDS] [OPTIONS] [PREFIX...]
//
// Options:
//   -w, --words PATH          Word list (default: $AUTOCOMP_WORDS, then built-in)
//       --unicode             Accept any non-whitespace characters in words
//   -n, --max-suggestions N   Maximum number of suggestions per prefix
//       --json                Print one JSON object per prefix
//   -h, --help                Print help

use std::io::{self, BufRead, Write};

use autocomp_engine::SuggestionEngine;
use tracing::info;

fn main() {
    autocomp_cli::init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let opts = autocomp_cli::parse_args(&args).unwrap_or_else(|e| autocomp_cli::fatal(&e));

    if opts.help {
        println!("{}", autocomp_cli::HELP);
        return;
    }

    let mut engine =
        autocomp_cli::load_engine(&opts).unwrap_or_else(|e| autocomp_cli::fatal(&e));
    info!(
        words = engine.trie().len(),
        alphabet = ?opts.alphabet,
        max_suggestions = ?opts.max_suggestions,
        "vocabulary loaded"
    );

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let json = opts.json;

    let answer = |prefix: &str,
                  engine: &mut SuggestionEngine,
                  out: &mut io::BufWriter<io::StdoutLock<'_>>| {
        let lookup = engine.lookup(prefix);
        let rendered = if json {
            autocomp_cli::render_json(prefix, &lookup) + "\n"
        } else {
            autocomp_cli::render_text(prefix, &lookup)
        };
        if let Err(e) = out.write_all(rendered.as_bytes()) {
            autocomp_cli::fatal(&format!("error writing output: {e}"));
        }
    };

    if !opts.prefixes.is_empty() {
        for prefix in &opts.prefixes {
            answer(prefix, &mut engine, &mut out);
        }
        let _ = out.flush();
        return;
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    'session: loop {
        if !json {
            let _ = write!(
                out,
                "\nEnter a prefix to search (or '{}' to quit): ",
                autocomp_cli::EXIT_COMMAND
            );
        }
        let _ = out.flush();

        let line = match lines.next() {
            Some(Ok(l)) => l,
            Some(Err(e)) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
            None => break,
        };
        for prefix in line.split_whitespace() {
            if prefix == autocomp_cli::EXIT_COMMAND {
                break 'session;
            }
            answer(prefix, &mut engine, &mut out);
        }
    }
    let _ = out.flush();
}
