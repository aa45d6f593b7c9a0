//! svgdat SVG Reader
//!
//! Pulls the path data out of an exported layer image. Only the first
//! `<path>` element in document order is looked at.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// Return the `d` attribute of the first `<path>` element in `svg`
pub fn first_path_data(svg: &str) -> Result<String, SvgError> {
    let mut reader = Reader::from_str(svg);
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) => {
                if e.local_name().as_ref() == b"path" {
                    tracing::debug!(
                        "Found <path> at byte {}",
                        reader.buffer_position()
                    );
                    return path_data(e);
                }
            }
            Ok(Event::Eof) => return Err(SvgError::NoPath),
            Ok(_) => {}
            Err(e) => {
                return Err(SvgError::Xml(format!(
                    "{} at byte {}",
                    e,
                    reader.error_position()
                )));
            }
        }

        buf.clear();
    }
}

fn path_data(element: &BytesStart<'_>) -> Result<String, SvgError> {
    for attr in element.attributes() {
        let attr = attr.map_err(|e| SvgError::Xml(e.to_string()))?;
        if attr.key.as_ref() == b"d" {
            let value = attr
                .unescape_value()
                .map_err(|e| SvgError::Xml(e.to_string()))?;
            return Ok(value.into_owned());
        }
    }
    Err(SvgError::MissingData)
}

/// SVG errors
#[derive(Debug, thiserror::Error)]
pub enum SvgError {
    #[error("Unable to locate image data!")]
    NoPath,

    #[error("First <path> element has no path data")]
    MissingData,

    #[error("XML error: {0}")]
    Xml(String),
}
