//! Tag sources.
//!
//! The script parser hands over its tags as JSON: either one array of tag
//! objects, or a stream of objects (one per line, or simply concatenated).
//!
//! ```text
//! [{"type": "dp", "name": "Hamlet"}, {"type": "enter", "text": "Hamlet"}]
//!
//! {"type": "char", "text": "Hamlet"}
//! {"text": "To be, or not to be"}
//! ```

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use scriptck_foundation::{Error, ErrorContext, Result, Tag};
use tracing::debug;

/// Where a script's tags come from.
///
/// A source is drained once; it does not rewind.
pub trait TagSource {
    /// Name used in reports and error context.
    fn name(&self) -> &str;

    /// Reads every remaining tag, in order.
    ///
    /// # Errors
    /// Returns an error if the source cannot be read or decoded.
    fn tags(&mut self) -> Result<Vec<Tag>>;
}

// =============================================================================
// In-Memory Source
// =============================================================================

/// Tags already in memory.
#[derive(Clone, Debug, Default)]
pub struct VecTagSource {
    name: String,
    tags: Vec<Tag>,
}

impl VecTagSource {
    /// Creates a source yielding `tags`.
    #[must_use]
    pub fn new(name: impl Into<String>, tags: Vec<Tag>) -> Self {
        Self {
            name: name.into(),
            tags,
        }
    }
}

impl TagSource for VecTagSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn tags(&mut self) -> Result<Vec<Tag>> {
        Ok(std::mem::take(&mut self.tags))
    }
}

// =============================================================================
// JSON Source
// =============================================================================

/// Tags decoded from JSON.
#[derive(Debug)]
pub struct JsonTagSource<R> {
    name: String,
    reader: R,
}

impl<R: Read> JsonTagSource<R> {
    /// Creates a source reading JSON from `reader`.
    pub fn from_reader(name: impl Into<String>, reader: R) -> Self {
        Self {
            name: name.into(),
            reader,
        }
    }
}

impl JsonTagSource<BufReader<File>> {
    /// Opens a JSON tag file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let name = path.display().to_string();
        let file = File::open(path)
            .map_err(|e| Error::from(e).with_context(ErrorContext::new().with_source(&name)))?;
        Ok(Self::from_reader(name, BufReader::new(file)))
    }
}

impl<R: Read> TagSource for JsonTagSource<R> {
    fn name(&self) -> &str {
        &self.name
    }

    fn tags(&mut self) -> Result<Vec<Tag>> {
        let mut input = String::new();
        self.reader
            .read_to_string(&mut input)
            .map_err(|e| Error::from(e).with_context(ErrorContext::new().with_source(&self.name)))?;

        let tags = parse_tags(&input).map_err(|e| {
            let context = e.context.clone().unwrap_or_default().with_source(&self.name);
            e.with_context(context)
        })?;
        debug!(source = %self.name, tags = tags.len(), "decoded tag stream");
        Ok(tags)
    }
}

/// Decodes a JSON tag document.
///
/// # Errors
/// Returns a decode error pointing at the first malformed tag.
pub fn parse_tags(input: &str) -> Result<Vec<Tag>> {
    if input.trim_start().starts_with('[') {
        return serde_json::from_str(input).map_err(decode_error);
    }

    serde_json::Deserializer::from_str(input)
        .into_iter::<Tag>()
        .enumerate()
        .map(|(index, tag)| {
            tag.map_err(|e| {
                decode_error(e).with_context(ErrorContext::new().with_tag_index(index))
            })
        })
        .collect()
}

fn decode_error(err: serde_json::Error) -> Error {
    Error::decode(err.to_string(), err.line(), err.column())
}
