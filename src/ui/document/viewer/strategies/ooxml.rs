//! Shared access to the ZIP parts of OOXML packages (docx, pptx).

use std::io::{Cursor, Read};

use quick_xml::events::BytesStart;
use zip::ZipArchive;

use crate::error::RenderError;

/// Decompressed size limit for a single part.
const MAX_PART_BYTES: u64 = 50 * 1024 * 1024;

pub(super) type Package<'a> = ZipArchive<Cursor<&'a [u8]>>;

pub(super) fn open_package(bytes: &[u8]) -> Result<Package<'_>, RenderError> {
    Ok(ZipArchive::new(Cursor::new(bytes))?)
}

pub(super) fn read_part(package: &mut Package<'_>, name: &str) -> Result<Vec<u8>, RenderError> {
    let entry = package
        .by_name(name)
        .map_err(|_| RenderError::Conversion(format!("{} not found in package", name)))?;
    let mut out = Vec::new();
    entry
        .take(MAX_PART_BYTES)
        .read_to_end(&mut out)
        .map_err(|e| RenderError::Conversion(e.to_string()))?;
    if out.len() as u64 >= MAX_PART_BYTES {
        return Err(RenderError::Conversion(format!("{} exceeds size limit", name)));
    }
    Ok(out)
}

/// Parts named `{prefix}{N}{suffix}`, ordered by N.
pub(super) fn numbered_parts(package: &Package<'_>, prefix: &str, suffix: &str) -> Vec<(u32, String)> {
    let mut parts: Vec<(u32, String)> = package
        .file_names()
        .filter_map(|name| {
            let number = name.strip_prefix(prefix)?.strip_suffix(suffix)?.parse().ok()?;
            Some((number, name.to_string()))
        })
        .collect();
    parts.sort();
    parts
}

/// Value of the attribute with local name `key`, namespace prefix ignored.
pub(super) fn attr_value(element: &BytesStart<'_>, key: &[u8]) -> Option<String> {
    element
        .attributes()
        .flatten()
        .find(|attr| attr.key.local_name().as_ref() == key)
        .and_then(|attr| attr.unescape_value().ok().map(|value| value.into_owned()))
}

/// Value of a namespaced `r:id`-style relationship attribute, which is not
/// the plain `id` an element may also carry.
pub(super) fn relationship_id(element: &BytesStart<'_>) -> Option<String> {
    element
        .attributes()
        .flatten()
        .find(|attr| attr.key.prefix().is_some() && attr.key.local_name().as_ref() == b"id")
        .and_then(|attr| attr.unescape_value().ok().map(|value| value.into_owned()))
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbered_parts_sort_numerically() {
        let bytes = fixtures::package(&[
            ("ppt/slides/slide10.xml", "<a/>"),
            ("ppt/slides/slide2.xml", "<a/>"),
            ("ppt/slides/_rels/slide2.xml.rels", "<a/>"),
            ("ppt/slides/slide1.xml", "<a/>"),
        ]);
        let package = open_package(&bytes).unwrap();
        let names: Vec<u32> = numbered_parts(&package, "ppt/slides/slide", ".xml")
            .into_iter()
            .map(|(n, _)| n)
            .collect();
        assert_eq!(names, vec![1, 2, 10]);
    }

    #[test]
    fn missing_part_is_a_conversion_error() {
        let bytes = fixtures::package(&[("other.xml", "<a/>")]);
        let mut package = open_package(&bytes).unwrap();
        assert!(matches!(
            read_part(&mut package, "word/document.xml"),
            Err(RenderError::Conversion(_))
        ));
    }
}
