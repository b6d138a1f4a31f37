//! Command-line parsing and dispatch.

use crate::catalog;
use crate::config::AppConfig;
use crate::error::{AppError, Result};
use crate::input::parse_verse_input;
use crate::render;
use searchtruth_engine::types::{DEFAULT_COLLECTION, DEFAULT_TRANSLATOR};
use searchtruth_engine::{Domain, Engine, MatchMode, Query, QueryResult, Transport};
use std::path::PathBuf;

pub const USAGE: &str = "\
usage: searchtruth [--config PATH] [--json] <command>

commands:
  quran <keyword> [chapter | chapter:verse] [--translator ID]
  hadith <keyword> [--collection ID]
  dictionary <word> [--partial]
  cities <country>
  translations | collections | countries
  help";

/// What the user asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quran {
        input: String,
        translator: String,
    },
    Hadith {
        keyword: String,
        collection: String,
    },
    Dictionary {
        word: String,
        mode: MatchMode,
    },
    Cities {
        country: String,
    },
    Translations,
    Collections,
    Countries,
    Help,
}

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub config_path: Option<PathBuf>,
    pub json: bool,
    pub command: Command,
}

/// Parse arguments, excluding the program name.
///
/// # Errors
///
/// Returns [`AppError::Usage`] for unknown commands or flags, missing
/// values, and translator or collection ids not in the catalog.
pub fn parse_args<I>(args: I) -> Result<Invocation>
where
    I: IntoIterator<Item = String>,
{
    let mut config_path = None;
    let mut json = false;
    let mut translator = None;
    let mut collection = None;
    let mut partial = false;
    let mut words = Vec::new();

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => config_path = Some(PathBuf::from(flag_value(&mut args, "--config")?)),
            "--json" => json = true,
            "--translator" | "-t" => translator = Some(flag_value(&mut args, "--translator")?),
            "--collection" | "-c" => collection = Some(flag_value(&mut args, "--collection")?),
            "--partial" => partial = true,
            "--help" | "-h" => words.insert(0, "help".to_owned()),
            flag if flag.starts_with("--") => {
                return Err(AppError::Usage(format!("unknown flag `{flag}`")));
            }
            word => words.push(word.to_owned()),
        }
    }

    let mut words = words.into_iter();
    let name = words.next().unwrap_or_else(|| "help".to_owned());
    let rest = words.collect::<Vec<_>>().join(" ");

    let command = match name.as_str() {
        "quran" => Command::Quran {
            input: required(rest, "quran needs a keyword")?,
            translator: known_translator(translator)?,
        },
        "hadith" => Command::Hadith {
            keyword: required(rest, "hadith needs a keyword")?,
            collection: known_collection(collection)?,
        },
        "dictionary" => Command::Dictionary {
            word: required(rest, "dictionary needs a word")?,
            mode: if partial {
                MatchMode::Partial
            } else {
                MatchMode::Exact
            },
        },
        "cities" => Command::Cities {
            country: required(rest, "cities needs a country")?,
        },
        "translations" => Command::Translations,
        "collections" => Command::Collections,
        "countries" => Command::Countries,
        "help" => Command::Help,
        other => {
            return Err(AppError::Usage(format!(
                "unknown command `{other}` (use quran|hadith|dictionary|cities)"
            )));
        }
    };

    Ok(Invocation {
        config_path,
        json,
        command,
    })
}

fn flag_value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String> {
    args.next()
        .ok_or_else(|| AppError::Usage(format!("{flag} requires a value")))
}

fn required(value: String, message: &str) -> Result<String> {
    if value.trim().is_empty() {
        Err(AppError::Usage(message.to_owned()))
    } else {
        Ok(value)
    }
}

fn known_translator(id: Option<String>) -> Result<String> {
    let id = id.unwrap_or_else(|| DEFAULT_TRANSLATOR.to_owned());
    match catalog::translation_by_id(&id) {
        Some(_) => Ok(id),
        None => Err(AppError::Usage(format!(
            "unknown translation `{id}` (see `searchtruth translations`)"
        ))),
    }
}

fn known_collection(id: Option<String>) -> Result<String> {
    let id = id.unwrap_or_else(|| DEFAULT_COLLECTION.to_owned());
    match catalog::collection_by_id(&id) {
        Some(_) => Ok(id),
        None => Err(AppError::Usage(format!(
            "unknown collection `{id}` (see `searchtruth collections`)"
        ))),
    }
}

impl Command {
    /// The engine query for this command, if it performs a search.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Usage`] if the verse input has no keyword.
    pub fn to_query(&self, config: &AppConfig) -> Result<Option<Query>> {
        let query = match self {
            Self::Quran { input, translator } => {
                let input = parse_verse_input(input)?;
                Query::verses(input.keyword)
                    .with_chapter(input.chapter.unwrap_or_default())
                    .with_translator(translator.as_str())
            }
            Self::Hadith {
                keyword,
                collection,
            } => Query::narrations(keyword.as_str()).with_collection(collection.as_str()),
            Self::Dictionary { word, mode } => {
                Query::dictionary(word.as_str()).with_match_mode(*mode)
            }
            Self::Cities { country } => Query::cities(country.as_str()),
            Self::Translations | Self::Collections | Self::Countries | Self::Help => {
                return Ok(None);
            }
        };
        let max_results = config.limits.max_results(query.domain);
        Ok(Some(query.with_max_results(max_results)))
    }
}

/// Run `invocation` and return the text to print.
///
/// # Errors
///
/// Returns an error only for an invalid query; lookup failures are part of
/// the rendered output.
pub async fn execute<T: Transport>(
    engine: &Engine<T>,
    invocation: &Invocation,
    config: &AppConfig,
) -> Result<String> {
    let command = &invocation.command;
    let Some(query) = command.to_query(config)? else {
        return Ok(match command {
            Command::Translations => render::render_translations(),
            Command::Collections => render::render_collections(),
            Command::Countries => render::render_countries(),
            _ => USAGE.to_owned(),
        });
    };

    if let Some(country) = query.country() {
        if !catalog::is_known_country(country) {
            tracing::debug!(country, "country not in catalog, trying anyway");
        }
    }

    let result = engine.run(&query).await?;
    if invocation.json {
        return serde_json::to_string_pretty(&result)
            .map_err(|e| AppError::Config(format!("failed to serialize result: {e}")));
    }

    let cap = query.max_results;
    let keyword = query.keyword_str();
    Ok(match (&result, query.domain) {
        (QueryResult::Cities(cities), _) => {
            render::render_cities(cities, config.limits.cities_display)
        }
        (QueryResult::Search(outcome), Domain::Verses) => render::render_verses(
            keyword,
            query.chapter(),
            query
                .translator_or_collection
                .as_deref()
                .unwrap_or(DEFAULT_TRANSLATOR),
            outcome,
            cap,
        ),
        (QueryResult::Search(outcome), Domain::Narrations) => render::render_narrations(
            keyword,
            query
                .translator_or_collection
                .as_deref()
                .unwrap_or(DEFAULT_COLLECTION),
            outcome,
            cap,
        ),
        (QueryResult::Search(outcome), _) => render::render_dictionary(keyword, outcome, cap),
    })
}
