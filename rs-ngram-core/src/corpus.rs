use std::fs;
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::reader::Reader;

use crate::error::{NGramError, Result};

/// Tag of a corpus record.
const RECORD_TAG: &[u8] = b"excuse";
/// Tag of the free-text field of a record.
const TEXT_TAG: &[u8] = b"text";

/// `<text>` element being read.
struct TextField {
	depth: usize,
	buffer: String,
	/// Cleared once a child element opens inside the field.
	leading: bool,
}

/// Loads an XML corpus and concatenates the text of all its records.
///
/// - Every `<excuse>` element contributes the content of its first `<text>` child
/// - Texts are trimmed, empty ones are skipped
/// - Texts are joined with a single space
///
/// # Errors
/// - `MissingCorpus` if `file_path` does not exist
/// - `Io` if the file cannot be read
/// - `Xml` if the file is not well-formed
pub fn load_text_from_xml<P: AsRef<Path>>(file_path: P) -> Result<String> {
	let path = file_path.as_ref();
	if !path.exists() {
		return Err(NGramError::MissingCorpus { path: path.to_path_buf() });
	}

	let contents = fs::read_to_string(path)?;
	let excuses = parse_excuses(&contents)?;
	tracing::info!(path = %path.display(), excuses = excuses.len(), "corpus loaded");

	Ok(excuses.join(" "))
}

/// Extracts the trimmed, non-empty text of every record of an XML document.
///
/// Records may appear at any depth below the root element. Only a `<text>`
/// element that is a direct child of an `<excuse>` is read, only the first one
/// of each record, and only up to its first child element.
pub fn parse_excuses(xml: &str) -> Result<Vec<String>> {
	let mut reader = Reader::from_str(xml);

	let mut texts = Vec::new();
	let mut depth = 0usize;
	// Open records: (depth, text already read)
	let mut records: Vec<(usize, bool)> = Vec::new();
	let mut current: Option<TextField> = None;

	loop {
		match reader.read_event()? {
			Event::Start(e) => {
				depth += 1;
				if let Some(field) = current.as_mut() {
					// Only the text before the first child element belongs to the field
					field.leading = false;
				}
				let name = e.name();
				if name.as_ref() == RECORD_TAG && depth > 1 {
					records.push((depth, false));
				} else if name.as_ref() == TEXT_TAG && current.is_none() {
					if let Some(record) = records.last_mut() {
						if !record.1 && record.0 + 1 == depth {
							record.1 = true;
							current = Some(TextField { depth, buffer: String::new(), leading: true });
						}
					}
				}
			}
			Event::Empty(e) => {
				if let Some(field) = current.as_mut() {
					field.leading = false;
				}
				// <text/> has no content, but still counts as the record's text field
				if e.name().as_ref() == TEXT_TAG {
					if let Some(record) = records.last_mut() {
						if record.0 == depth {
							record.1 = true;
						}
					}
				}
			}
			Event::Text(t) => {
				if let Some(field) = current.as_mut().filter(|field| field.leading) {
					field.buffer.push_str(&t.unescape()?);
				}
			}
			Event::CData(t) => {
				if let Some(field) = current.as_mut().filter(|field| field.leading) {
					field.buffer.push_str(&String::from_utf8_lossy(&t.into_inner()));
				}
			}
			Event::End(_) => {
				if current.as_ref().is_some_and(|field| field.depth == depth) {
					if let Some(field) = current.take() {
						let trimmed = field.buffer.trim();
						if !trimmed.is_empty() {
							texts.push(trimmed.to_owned());
						}
					}
				}
				if records.last().is_some_and(|(record_depth, _)| *record_depth == depth) {
					records.pop();
				}
				depth = depth.saturating_sub(1);
			}
			Event::Eof => break,
			_ => {}
		}
	}

	Ok(texts)
}
