//! Office Open XML (DOCX / PPTX) text extraction.
//!
//! Both formats are zip archives of XML parts. Only visible text runs are
//! kept; styling, comments and embedded media are ignored.

use crate::error::{ExtractError, Result};
use quick_xml::events::Event;
use quick_xml::reader::Reader;
use std::io::{Read, Seek};
use std::path::PathBuf;
use zip::ZipArchive;

/// Element names that carry text structure in one XML vocabulary
struct Markup {
  text: &'static [u8],
  paragraph: &'static [u8],
  tab: &'static [u8],
  line_break: &'static [u8],
}

/// WordprocessingML (word/document.xml)
const WORD: Markup = Markup {
  text: b"w:t",
  paragraph: b"w:p",
  tab: b"w:tab",
  line_break: b"w:br",
};

/// DrawingML text bodies (ppt/slides/slideN.xml)
const DRAWING: Markup = Markup {
  text: b"a:t",
  paragraph: b"a:p",
  tab: b"a:tab",
  line_break: b"a:br",
};

const DOCX_BODY: &str = "word/document.xml";
const SLIDE_PREFIX: &str = "ppt/slides/slide";

/// Paragraph text of a DOCX document, one paragraph per line.
///
/// `limit` caps the decompressed size of the XML read, in bytes.
pub fn docx_text<R: Read + Seek>(reader: R, limit: u64) -> Result<String> {
  let mut archive = ZipArchive::new(reader)?;
  let mut budget = limit;
  let xml = read_part(&mut archive, DOCX_BODY, &mut budget, limit)?;
  collect_text(&xml, &WORD)
}

/// Text of every slide in presentation order.
///
/// `limit` caps the decompressed size of all slide XML together, in bytes.
pub fn pptx_text<R: Read + Seek>(reader: R, limit: u64) -> Result<String> {
  let mut archive = ZipArchive::new(reader)?;
  let mut budget = limit;

  let mut slides: Vec<(u32, String)> = archive
    .file_names()
    .filter_map(|name| slide_number(name).map(|n| (n, name.to_string())))
    .collect();
  // slide10 must follow slide9, not slide1
  slides.sort_by_key(|(n, _)| *n);

  let mut text = String::new();
  for (_, name) in slides {
    let xml = read_part(&mut archive, &name, &mut budget, limit)?;
    text.push_str(&collect_text(&xml, &DRAWING)?);
    text.push('\n');
  }
  Ok(text)
}

fn slide_number(name: &str) -> Option<u32> {
  name.strip_prefix(SLIDE_PREFIX)?.strip_suffix(".xml")?.parse().ok()
}

/// Read one XML part, charging its decompressed size against `budget`.
///
/// The declared entry size is untrusted, so the read itself is capped too.
fn read_part<R: Read + Seek>(archive: &mut ZipArchive<R>, name: &str, budget: &mut u64, limit: u64) -> Result<String> {
  let entry = archive
    .by_name(name)
    .map_err(|_| ExtractError::Malformed(format!("missing part {}", name)))?;

  let too_large = |size: u64| ExtractError::TooLarge {
    path: PathBuf::from(name),
    size,
    limit,
  };
  let used = limit - *budget;
  if entry.size() > *budget {
    return Err(too_large(used.saturating_add(entry.size())));
  }

  let mut bytes = Vec::new();
  entry.take(budget.saturating_add(1)).read_to_end(&mut bytes)?;
  let read = bytes.len() as u64;
  if read > *budget {
    return Err(too_large(used.saturating_add(read)));
  }
  *budget -= read;

  String::from_utf8(bytes).map_err(|_| ExtractError::Malformed(format!("{} is not valid UTF-8", name)))
}

fn collect_text(xml: &str, markup: &Markup) -> Result<String> {
  let mut reader = Reader::from_str(xml);
  let mut out = String::new();
  let mut in_text = false;

  loop {
    match reader.read_event()? {
      Event::Start(e) => {
        let name = e.name();
        if name.as_ref() == markup.text {
          in_text = true;
        } else if name.as_ref() == markup.tab {
          out.push('\t');
        } else if name.as_ref() == markup.line_break {
          out.push('\n');
        }
      }
      Event::Empty(e) => {
        let name = e.name();
        if name.as_ref() == markup.tab {
          out.push('\t');
        } else if name.as_ref() == markup.line_break {
          out.push('\n');
        }
      }
      Event::End(e) => {
        let name = e.name();
        if name.as_ref() == markup.text {
          in_text = false;
        } else if name.as_ref() == markup.paragraph {
          out.push('\n');
        }
      }
      Event::Text(t) if in_text => out.push_str(&t.unescape()?),
      Event::CData(t) if in_text => out.push_str(&String::from_utf8_lossy(&t)),
      Event::Eof => break,
      _ => {}
    }
  }

  Ok(out)
}
