//! Interactive read-eval-print loop over the recommender.

use std::io::{self, BufRead, Write};

use inquire::autocompletion::{Autocomplete, Replacement};
use inquire::error::InquireError;
use inquire::CustomUserError;

use crate::errors::RecommendError;
use crate::recommend::{Recommendation, Recommender};

const BANNER: &str = "🎬 Movie Recommendation System\nType a movie name (or type 'exit' to quit)\n";
const NOT_FOUND: &str = "❌ Movie not found. Please try again.";
const POINTER: &str = "👉";

/// Where the shell gets its input lines from.
pub trait LineSource {
    /// Read one line. `None` means the input is exhausted or the user
    /// cancelled the prompt.
    fn read_line(&mut self, prompt: &str, out: &mut dyn Write) -> io::Result<Option<String>>;
}

/// Plain buffered reader, used for piped stdin.
pub struct ReaderSource<R> {
    reader: R,
}

impl<R: BufRead> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for ReaderSource<R> {
    fn read_line(&mut self, prompt: &str, out: &mut dyn Write) -> io::Result<Option<String>> {
        write!(out, "{prompt} ")?;
        out.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line))
    }
}

/// Terminal prompt with item name completion.
pub struct PromptSource {
    completer: NameCompleter,
}

impl PromptSource {
    pub fn new<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            completer: NameCompleter {
                names: names.into_iter().map(str::to_string).collect(),
            },
        }
    }
}

impl LineSource for PromptSource {
    fn read_line(&mut self, prompt: &str, _out: &mut dyn Write) -> io::Result<Option<String>> {
        match inquire::Text::new(prompt)
            .with_autocomplete(self.completer.clone())
            .prompt()
        {
            Ok(line) => Ok(Some(line)),
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
            Err(InquireError::IO(err)) => Err(err),
            Err(err) => Err(io::Error::other(err.to_string())),
        }
    }
}

#[derive(Clone, Debug)]
struct NameCompleter {
    names: Vec<String>,
}

impl NameCompleter {
    fn suggestions(&self, input: &str) -> Vec<String> {
        let input = input.trim().to_lowercase();
        if input.is_empty() {
            return vec![];
        }

        self.names
            .iter()
            .filter(|name| name.to_lowercase().starts_with(&input))
            .cloned()
            .collect()
    }
}

impl Autocomplete for NameCompleter {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, CustomUserError> {
        Ok(self.suggestions(input))
    }

    fn get_completion(
        &mut self,
        input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, CustomUserError> {
        Ok(highlighted_suggestion.or_else(|| {
            let mut matches = self.suggestions(input);
            if matches.len() == 1 {
                matches.pop()
            } else {
                None
            }
        }))
    }
}

pub fn is_exit(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case("exit")
}

pub fn write_recommendations(
    out: &mut dyn Write,
    recommendations: &[Recommendation],
    show_scores: bool,
) -> io::Result<()> {
    writeln!(out, "\nRecommended Movies:")?;
    for rec in recommendations {
        if show_scores {
            writeln!(out, "{POINTER} {} ({:.3})", rec.name, rec.score)?;
        } else {
            writeln!(out, "{POINTER} {}", rec.name)?;
        }
    }
    writeln!(out)
}

pub fn write_not_found(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "{NOT_FOUND}\n")
}

pub struct Shell<'a> {
    recommender: &'a Recommender,
    top_n: usize,
    show_scores: bool,
    prompt: String,
}

impl<'a> Shell<'a> {
    pub fn new(recommender: &'a Recommender, top_n: usize) -> Self {
        Self {
            recommender,
            top_n,
            show_scores: false,
            prompt: "Enter movie name:".to_string(),
        }
    }

    pub fn with_scores(mut self, show_scores: bool) -> Self {
        self.show_scores = show_scores;
        self
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Run until "exit" (any case) or end of input.
    pub fn run(&self, source: &mut dyn LineSource, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{BANNER}")?;

        loop {
            let Some(line) = source.read_line(&self.prompt, out)? else {
                break;
            };
            let query = line.trim();

            if is_exit(query) {
                break;
            }

            if query.is_empty() {
                continue;
            }

            match self.recommender.recommend(query, self.top_n) {
                Ok(recommendations) => {
                    write_recommendations(out, &recommendations, self.show_scores)?
                }
                Err(RecommendError::NotFound(_)) => write_not_found(out)?,
            }
        }

        writeln!(out, "\nGoodbye!")?;
        out.flush()
    }
}
