// autocomp-cli: shared utilities for the command-line front end.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::process;

use autocomp_core::Alphabet;
use autocomp_engine::{Lookup, MatchKind, SuggestOptions, SuggestionEngine};
use tracing_subscriber::EnvFilter;

/// Environment variable naming a word-list file.
pub const WORDS_ENV: &str = "AUTOCOMP_WORDS";

/// Vocabulary used when no word list is given.
pub const SEED_WORDS: &[&str] = &[
    "apple", "app", "april", "bat", "ball", "batman", "banana", "cat", "call", "camel",
];

/// Word that ends an interactive session.
pub const EXIT_COMMAND: &str = "exit";

pub const HELP: &str = "\
autocomp: Prefix autocomplete with typo fallback.

Usage: autocomp [OPTIONS] [PREFIX...]

If PREFIX arguments are given, suggests for each and exits.
Otherwise prompts for prefixes on stdin until 'exit' or end of input.

Options:
  -w, --words PATH          Word list (whitespace separated, '#' comments)
                            Defaults to $AUTOCOMP_WORDS, then a built-in list
      --unicode             Accept any non-whitespace characters in words
  -n, --max-suggestions N   Maximum number of suggestions per prefix
      --json                Print one JSON object per prefix
  -h, --help                Print this help

Logging goes to stderr and is controlled by RUST_LOG (default: warn).";

/// Parsed command-line options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOptions {
    pub words_path: Option<PathBuf>,
    pub alphabet: Alphabet,
    pub max_suggestions: Option<usize>,
    pub json: bool,
    pub help: bool,
    pub prefixes: Vec<String>,
}

/// Parse command-line arguments (without the program name).
pub fn parse_args(args: &[String]) -> Result<CliOptions, String> {
    let mut opts = CliOptions::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if let Some(val) = arg.strip_prefix("--words=") {
            opts.words_path = Some(PathBuf::from(val));
        } else if let Some(val) = arg.strip_prefix("--max-suggestions=") {
            opts.max_suggestions = Some(parse_count(val)?);
        } else {
            match arg.as_str() {
                "-w" | "--words" => {
                    let val = iter.next().ok_or_else(|| format!("{arg} requires a value"))?;
                    opts.words_path = Some(PathBuf::from(val));
                }
                "-n" | "--max-suggestions" => {
                    let val = iter.next().ok_or_else(|| format!("{arg} requires a value"))?;
                    opts.max_suggestions = Some(parse_count(val)?);
                }
                "--unicode" => opts.alphabet = Alphabet::Unicode,
                "--json" => opts.json = true,
                "-h" | "--help" => opts.help = true,
                _ if arg.starts_with('-') => return Err(format!("unknown option: {arg}")),
                _ => opts.prefixes.push(arg.clone()),
            }
        }
    }

    Ok(opts)
}

fn parse_count(val: &str) -> Result<usize, String> {
    val.parse()
        .map_err(|_| format!("invalid number for --max-suggestions: {val}"))
}

/// Pick the word-list file: explicit path first, then `AUTOCOMP_WORDS`.
pub fn resolve_words_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(p) = explicit {
        return Some(p.to_path_buf());
    }
    std::env::var_os(WORDS_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// Build the engine described by `opts`.
pub fn load_engine(opts: &CliOptions) -> Result<SuggestionEngine, String> {
    let options = SuggestOptions {
        max_suggestions: opts.max_suggestions,
        ..SuggestOptions::default()
    };
    let mut engine = SuggestionEngine::with_options(opts.alphabet, options);

    match resolve_words_path(opts.words_path.as_deref()) {
        Some(path) => {
            let file = File::open(&path)
                .map_err(|e| format!("failed to open {}: {}", path.display(), e))?;
            engine
                .load_words(BufReader::new(file))
                .map_err(|e| format!("{}: {}", path.display(), e))?;
        }
        None => {
            engine
                .extend(SEED_WORDS)
                .map_err(|e| format!("built-in word list: {e}"))?;
        }
    }

    Ok(engine)
}

/// Human-readable rendering of one answer.
pub fn render_text(prefix: &str, lookup: &Lookup) -> String {
    let mut out = String::new();
    if lookup.kind == MatchKind::Fallback {
        out.push_str("No exact match found. Trying fallback logic...\n");
    }
    if lookup.suggestions.is_empty() {
        out.push_str(&format!("No suggestions found for \"{prefix}\".\n"));
        return out;
    }
    out.push_str(&format!("Suggestions for \"{prefix}\":\n"));
    for s in &lookup.suggestions {
        out.push_str(&format!("- {} (Frequency: {})\n", s.word, s.frequency));
    }
    out
}

/// Single-line JSON rendering of one answer.
pub fn render_json(prefix: &str, lookup: &Lookup) -> String {
    let kind = match lookup.kind {
        MatchKind::Direct => "direct",
        MatchKind::Fallback => "fallback",
    };
    serde_json::json!({
        "prefix": prefix,
        "match": kind,
        "suggestions": lookup.suggestions,
    })
    .to_string()
}

/// Install the stderr log subscriber. `RUST_LOG` overrides the default
/// `warn` level.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use autocomp_core::Suggestion;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parse_defaults() {
        let opts = parse_args(&[]).unwrap();
        assert_eq!(opts, CliOptions::default());
        assert_eq!(opts.alphabet, Alphabet::Lowercase);
    }

    #[test]
    fn parse_all_options() {
        let opts = parse_args(&args(&[
            "-w", "words.txt", "--unicode", "-n", "3", "--json", "app", "bpt",
        ]))
        .unwrap();
        assert_eq!(opts.words_path, Some(PathBuf::from("words.txt")));
        assert_eq!(opts.alphabet, Alphabet::Unicode);
        assert_eq!(opts.max_suggestions, Some(3));
        assert!(opts.json);
        assert_eq!(opts.prefixes, vec!["app", "bpt"]);
    }

    #[test]
    fn parse_equals_forms() {
        let opts = parse_args(&args(&["--words=list.txt", "--max-suggestions=7"])).unwrap();
        assert_eq!(opts.words_path, Some(PathBuf::from("list.txt")));
        assert_eq!(opts.max_suggestions, Some(7));
    }

    #[test]
    fn parse_errors() {
        assert!(parse_args(&args(&["-w"])).is_err());
        assert!(parse_args(&args(&["-n", "many"])).is_err());
        assert!(parse_args(&args(&["--bogus"])).is_err());
    }

    #[test]
    fn parse_help() {
        assert!(parse_args(&args(&["--help"])).unwrap().help);
        assert!(parse_args(&args(&["-h"])).unwrap().help);
    }

    #[test]
    fn explicit_path_wins() {
        let p = resolve_words_path(Some(Path::new("/tmp/a.txt")));
        assert_eq!(p, Some(PathBuf::from("/tmp/a.txt")));
    }

    #[test]
    fn load_engine_reads_word_file() {
        let path = std::env::temp_dir().join(format!("autocomp-cli-test-{}.txt", process::id()));
        std::fs::write(&path, "# test list\nzebra zest\nzoo\n").unwrap();
        let opts = CliOptions {
            words_path: Some(path.clone()),
            ..CliOptions::default()
        };
        let engine = load_engine(&opts).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(engine.trie().len(), 3);
        assert!(engine.trie().contains("zoo"));
    }

    #[test]
    fn load_engine_reports_missing_file() {
        let opts = CliOptions {
            words_path: Some(PathBuf::from("/nonexistent/autocomp/words.txt")),
            ..CliOptions::default()
        };
        let err = load_engine(&opts).unwrap_err();
        assert!(err.contains("failed to open"));
    }

    #[test]
    fn render_text_direct() {
        let lookup = Lookup {
            kind: MatchKind::Direct,
            suggestions: vec![Suggestion::new("app", 1), Suggestion::new("apple", 1)],
        };
        assert_eq!(
            render_text("app", &lookup),
            "Suggestions for \"app\":\n- app (Frequency: 1)\n- apple (Frequency: 1)\n"
        );
    }

    #[test]
    fn render_text_empty_fallback() {
        let lookup = Lookup {
            kind: MatchKind::Fallback,
            suggestions: Vec::new(),
        };
        assert_eq!(
            render_text("xyz", &lookup),
            "No exact match found. Trying fallback logic...\nNo suggestions found for \"xyz\".\n"
        );
    }

    #[test]
    fn render_json_shape() {
        let lookup = Lookup {
            kind: MatchKind::Fallback,
            suggestions: vec![Suggestion::new("bat", 0)],
        };
        let value: serde_json::Value = serde_json::from_str(&render_json("bpt", &lookup)).unwrap();
        assert_eq!(value["prefix"], "bpt");
        assert_eq!(value["match"], "fallback");
        assert_eq!(value["suggestions"][0]["word"], "bat");
        assert_eq!(value["suggestions"][0]["frequency"], 0);
    }
}
