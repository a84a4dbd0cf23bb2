use std::{
    collections::HashSet,
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use tracing::info;

use crate::DictionaryLoadError;

/// Default dictionary location, relative to the working directory.
pub const DEFAULT_DICTIONARY_PATH: &str = "dictionary.txt";

/// Set of legal words.
///
/// Entries are stored uppercase and lookups are case-insensitive. A dictionary
/// is never modified after it is built, so it can be shared freely between
/// validators (typically behind an `Arc`).
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// Loads a line-delimited word list from `path`.
    pub fn load<P>(path: P) -> Result<Self, DictionaryLoadError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let to_error = |source| DictionaryLoadError {
            path: path.to_owned(),
            source,
        };
        let file = File::open(path).map_err(to_error)?;
        let dictionary = Self::from_reader(BufReader::new(file)).map_err(to_error)?;
        info!(
            path = %path.display(),
            words = dictionary.len(),
            "loaded dictionary"
        );
        Ok(dictionary)
    }

    /// Reads one word per line. Trailing whitespace is trimmed and blank lines are skipped.
    pub fn from_reader<R>(reader: R) -> io::Result<Self>
    where
        R: BufRead,
    {
        let mut words = HashSet::new();
        for line in reader.lines() {
            let line = line?;
            let word = line.trim_end();
            if !word.is_empty() {
                words.insert(word.to_uppercase());
            }
        }
        Ok(Self { words })
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|word| word.as_ref().to_uppercase())
                .collect(),
        }
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        if word.chars().any(char::is_lowercase) {
            self.words.contains(&word.to_uppercase())
        } else {
            self.words.contains(word)
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
