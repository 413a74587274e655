use std::collections::HashMap;

use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::{debug, warn};

use crate::document::ContentRepresentation;
use crate::error::RenderError;
use crate::ui::document::{
    content::{RenderedDocument, Slide, SlideDeck},
    viewer::strategies::{
        ooxml::{attr_value, numbered_parts, open_package, read_part, relationship_id, Package},
        presentation::PresentationViewStrategy,
    },
};

const SLIDE_PREFIX: &str = "ppt/slides/slide";
const SLIDE_SUFFIX: &str = ".xml";
const PRESENTATION_PART: &str = "ppt/presentation.xml";
const PRESENTATION_RELS: &str = "ppt/_rels/presentation.xml.rels";

impl PresentationViewStrategy {
    pub(super) fn _parse_content(&self, content: &ContentRepresentation) -> Result<RenderedDocument, RenderError> {
        let mut package = open_package(content.as_bytes())?;
        let parts = slide_order(&mut package);
        if parts.is_empty() {
            return Err(RenderError::Conversion("presentation has no slides".to_string()));
        }

        let mut slides = Vec::with_capacity(parts.len());
        for (index, name) in parts.iter().enumerate() {
            let xml = read_part(&mut package, name)?;
            slides.push(Slide {
                number: index + 1,
                paragraphs: slide_paragraphs(&xml)?,
            });
        }

        debug!("Presentation has {} slides", slides.len());
        Ok(RenderedDocument::Slides(SlideDeck { slides }))
    }
}

/// Slide part names in presentation order: the `p:sldIdLst` of
/// `ppt/presentation.xml` when it resolves to parts in the package, otherwise
/// the slide files by number.
fn slide_order(package: &mut Package<'_>) -> Vec<String> {
    match listed_slides(package) {
        Ok(listed) if !listed.is_empty() => listed,
        Ok(_) => numbered(package),
        Err(e) => {
            warn!("Ignoring slide list: {}", e);
            numbered(package)
        }
    }
}

fn numbered(package: &Package<'_>) -> Vec<String> {
    numbered_parts(package, SLIDE_PREFIX, SLIDE_SUFFIX)
        .into_iter()
        .map(|(_, name)| name)
        .collect()
}

fn listed_slides(package: &mut Package<'_>) -> Result<Vec<String>, RenderError> {
    if package.index_for_name(PRESENTATION_PART).is_none() {
        return Ok(Vec::new());
    }
    let ids = slide_relationship_ids(&read_part(package, PRESENTATION_PART)?)?;
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    let targets = relationship_targets(&read_part(package, PRESENTATION_RELS)?)?;

    let present: Vec<String> = ids
        .iter()
        .filter_map(|id| targets.get(id))
        .filter(|name| package.index_for_name(name).is_some())
        .cloned()
        .collect();
    Ok(present)
}

/// `r:id` of every `p:sldId` in `p:sldIdLst`, in document order.
fn slide_relationship_ids(xml: &[u8]) -> Result<Vec<String>, RenderError> {
    let mut reader = Reader::from_reader(xml);
    let mut buf = Vec::new();
    let mut ids = Vec::new();
    let mut in_list = false;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) if e.local_name().as_ref() == b"sldIdLst" => in_list = true,
            Event::End(e) if e.local_name().as_ref() == b"sldIdLst" => in_list = false,
            Event::Start(e) | Event::Empty(e) if in_list && e.local_name().as_ref() == b"sldId" => {
                if let Some(id) = relationship_id(&e) {
                    ids.push(id);
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(ids)
}

/// Relationship id to package part name. Targets are relative to `ppt/`
/// unless they start with `/`.
fn relationship_targets(xml: &[u8]) -> Result<HashMap<String, String>, RenderError> {
    let mut reader = Reader::from_reader(xml);
    let mut buf = Vec::new();
    let mut targets = HashMap::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) | Event::Empty(e) if e.local_name().as_ref() == b"Relationship" => {
                if let (Some(id), Some(target)) = (attr_value(&e, b"Id"), attr_value(&e, b"Target")) {
                    let name = match target.strip_prefix('/') {
                        Some(absolute) => absolute.to_string(),
                        None => format!("ppt/{}", target),
                    };
                    targets.insert(id, name);
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(targets)
}

/// Non-blank `a:p` paragraphs, each the concatenation of its `a:t` runs.
fn slide_paragraphs(xml: &[u8]) -> Result<Vec<String>, RenderError> {
    let mut reader = Reader::from_reader(xml);
    let mut buf = Vec::new();
    let mut paragraphs = Vec::new();
    let mut current: Option<String> = None;
    let mut in_text = false;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"p" => current = Some(String::new()),
                b"t" => in_text = true,
                _ => {}
            },
            Event::Empty(e) if e.local_name().as_ref() == b"br" => {
                if let Some(text) = current.as_mut() {
                    text.push('\n');
                }
            }
            Event::Text(t) if in_text => {
                if let Some(text) = current.as_mut() {
                    text.push_str(&t.unescape()?);
                }
            }
            Event::End(e) => match e.local_name().as_ref() {
                b"t" => in_text = false,
                b"p" => {
                    if let Some(text) = current.take() {
                        if !text.trim().is_empty() {
                            paragraphs.push(text);
                        }
                    }
                }
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(paragraphs)
}
