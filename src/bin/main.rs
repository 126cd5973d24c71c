//! word_finder CLI: constraint-based lookup over a pIqaD vocabulary.

use std::io::{stdin, stdout, BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};
use miette::{IntoDiagnostic, Result};

use finder_core::config::{self, FinderConfig};
use finder_core::core::query::{
    apply_pattern, parse_letters, parse_pattern, position_index, resolve_token,
};
use finder_core::loader::load_all;
use finder_core::{CharacterMap, LookupError, Query, QueryResult, WordQueryEngine};

#[derive(Parser)]
#[command(name = "word_finder", version, about = "Find pIqaD words by length and letters")]
struct Cli {
    /// Mapping table (JSON array of tlhingan/latin/row/col records).
    #[arg(long, global = true, default_value = config::DEFAULT_MAPPING_PATH)]
    mapping: PathBuf,

    /// Word list, one word per line.
    #[arg(long, global = true, default_value = config::DEFAULT_WORDS_PATH)]
    words: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a single search and print the matches.
    Search {
        /// Word length in letters.
        #[arg(long, default_value_t = config::DEFAULT_WORD_LENGTH)]
        length: usize,

        /// Known letters by position, e.g. "_ a _ a" (`_` or `.` = unknown).
        #[arg(long)]
        pattern: Option<String>,

        /// Letters that must all appear, space separated (e.g. "tlh I").
        #[arg(long)]
        include: Option<String>,

        /// Letters that must not appear.
        #[arg(long)]
        exclude: Option<String>,

        /// Reject words that use any letter twice.
        #[arg(long)]
        no_repeat: bool,

        /// Maximum number of matches to print.
        #[arg(long, default_value_t = config::DEFAULT_MAX_RESULTS)]
        limit: usize,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show the glyph for a latin label, or the label for a glyph.
    Lookup {
        token: String,
    },

    /// Print the keyboard layout of the mapping.
    Keyboard,

    /// Vocabulary size and word counts per length.
    Stats,

    /// Interactive session; the result is redrawn after every change.
    Interactive {
        #[arg(long, default_value_t = config::DEFAULT_WORD_LENGTH)]
        length: usize,

        #[arg(long, default_value_t = config::DEFAULT_MAX_RESULTS)]
        limit: usize,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = FinderConfig {
        mapping_path: cli.mapping,
        words_path: cli.words,
        ..FinderConfig::default()
    };
    let (map, engine) = load_all(&config)?;

    match cli.command {
        Commands::Search {
            length,
            pattern,
            include,
            exclude,
            no_repeat,
            limit,
            json,
        } => {
            let mut query = Query::new(length).with_limit(limit).with_no_repeat(no_repeat);
            if let Some(pattern) = pattern {
                apply_pattern(&mut query, &parse_pattern(&map, &pattern)?)?;
            }
            if let Some(include) = include {
                query.include_letters = parse_letters(&map, &include)?.into_iter().collect();
            }
            if let Some(exclude) = exclude {
                query.exclude_letters = parse_letters(&map, &exclude)?.into_iter().collect();
            }

            let result = engine.search(&query);
            if json {
                let rows = engine.display(&result, &map);
                let out = serde_json::json!({
                    "total_match_count": result.total_match_count,
                    "matches": rows,
                });
                println!("{}", serde_json::to_string_pretty(&out).into_diagnostic()?);
            } else {
                print_result(&result, &engine, &map);
            }
        }
        Commands::Lookup { token } => lookup(&map, &token)?,
        Commands::Keyboard => print_keyboard(&map),
        Commands::Stats => {
            println!("{} words", engine.len());
            for (length, count) in engine.length_histogram() {
                println!("  {:>2} letters: {}", length, count);
            }
        }
        Commands::Interactive { length, limit } => {
            config.word_length = length;
            config.max_results = limit;
            interactive(&config, &map, &engine)?;
        }
    }
    Ok(())
}

fn lookup(map: &CharacterMap, token: &str) -> Result<()> {
    if let Some(glyph) = map.latin_to_glyph(token) {
        println!("{} => {} (U+{:04X})", token, glyph, glyph as u32);
        return Ok(());
    }
    let mut chars = token.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        match map.glyph_to_latin(c) {
            Some(latin) => println!("{} => {}", c, latin),
            None => println!("{} is not in the mapping", c),
        }
        return Ok(());
    }
    Err(LookupError::UnknownLabel(token.to_string()).into())
}

fn print_keyboard(map: &CharacterMap) {
    for row in map.rows() {
        let line: Vec<String> = row
            .iter()
            .map(|letter| format!("{} {:<3}", letter.glyph, letter.latin))
            .collect();
        println!("{}", line.join("  "));
    }
}

fn print_result(result: &QueryResult, engine: &WordQueryEngine, map: &CharacterMap) {
    println!(
        "{}",
        format!("Total words found: {}.", result.total_match_count).bold()
    );
    for row in engine.display(result, map) {
        println!("  {}  {}", row.word, row.latin.join(" ").cyan());
    }
}

fn print_query(query: &Query, map: &CharacterMap) {
    let label = |c: &char| {
        map.glyph_to_latin(*c)
            .map(str::to_string)
            .unwrap_or_else(|| c.to_string())
    };
    let pattern: Vec<String> = query
        .known_letters
        .iter()
        .map(|slot| slot.as_ref().map(label).unwrap_or_else(|| "_".to_string()))
        .collect();
    let include: Vec<String> = query.include_letters.iter().map(label).collect();
    let exclude: Vec<String> = query.exclude_letters.iter().map(label).collect();

    println!("Length:    {}", query.word_length);
    println!("Pattern:   {}", pattern.join(" "));
    println!("Include:   {}", include.join(" "));
    println!("Exclude:   {}", exclude.join(" "));
    println!("No repeat: {}", if query.no_repeat { "on" } else { "off" });
    println!("Limit:     {}\n", query.limit);
}

fn interactive(config: &FinderConfig, map: &CharacterMap, engine: &WordQueryEngine) -> Result<()> {
    let mut query = config.initial_query();
    let mut message = String::new();
    let mut out = stdout();

    loop {
        execute!(out, Clear(ClearType::All), MoveTo(0, 0)).into_diagnostic()?;
        println!("{}", "pIqaD Word Finder".bold());
        println!("---------------------------------------------------------------");
        println!("len N | known P L | clear P | include L.. | exclude L..");
        println!("norepeat on|off | limit N | keys | reset | exit\n");
        print_query(&query, map);
        print_result(&engine.search(&query), engine, map);
        if !message.is_empty() {
            println!("\n{}", message.as_str().red());
            message.clear();
        }
        print!("\n> ");
        out.flush().into_diagnostic()?;

        let mut input = String::new();
        if stdin().lock().read_line(&mut input).into_diagnostic()? == 0 {
            break;
        }
        let (cmd, rest) = match input.trim().split_once(' ') {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (input.trim(), ""),
        };

        let outcome: std::result::Result<(), String> = match cmd {
            "exit" | "quit" => break,
            "len" => rest
                .parse::<usize>()
                .map(|n| query.set_word_length(n))
                .map_err(|e| e.to_string()),
            "limit" => rest
                .parse::<usize>()
                .map(|n| query.limit = n)
                .map_err(|e| e.to_string()),
            "known" => set_known(&mut query, map, rest),
            "clear" => clear_known(&mut query, rest),
            "include" => parse_letters(map, rest)
                .map(|letters| query.include_letters = letters.into_iter().collect())
                .map_err(|e| e.to_string()),
            "exclude" => parse_letters(map, rest)
                .map(|letters| query.exclude_letters = letters.into_iter().collect())
                .map_err(|e| e.to_string()),
            "norepeat" => match rest {
                "on" | "off" => {
                    query.no_repeat = rest == "on";
                    Ok(())
                }
                other => Err(format!("expected on or off, got {:?}", other)),
            },
            "keys" => {
                print_keyboard(map);
                print!("\n(press Enter) ");
                out.flush().into_diagnostic()?;
                let mut pause = String::new();
                stdin().lock().read_line(&mut pause).into_diagnostic()?;
                Ok(())
            }
            "reset" => {
                query = config.initial_query();
                Ok(())
            }
            "" => Ok(()),
            other => Err(format!("unknown command {:?}", other)),
        };
        if let Err(e) = outcome {
            tracing::debug!(command = cmd, error = %e, "command rejected");
            message = e;
        }
    }
    Ok(())
}

/// `known P L`: positions are 1-based for the user.
fn set_known(query: &mut Query, map: &CharacterMap, args: &str) -> std::result::Result<(), String> {
    let (pos, letter) = args
        .split_once(' ')
        .ok_or_else(|| "usage: known POSITION LETTER".to_string())?;
    let pos: usize = pos.parse().map_err(|e: std::num::ParseIntError| e.to_string())?;
    let index = position_index(query, pos).map_err(|e| e.to_string())?;
    let glyph = resolve_token(map, letter.trim()).map_err(|e| e.to_string())?;
    query.set_known(index, Some(glyph));
    Ok(())
}

/// `clear P`: same 1-based positions as `known`.
fn clear_known(query: &mut Query, args: &str) -> std::result::Result<(), String> {
    let pos: usize = args.parse().map_err(|e: std::num::ParseIntError| e.to_string())?;
    let index = position_index(query, pos).map_err(|e| e.to_string())?;
    query.set_known(index, None);
    Ok(())
}
