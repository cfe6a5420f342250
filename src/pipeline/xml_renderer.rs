//! XML document generation for one chunk.
//!
//! Output shape:
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <serials>
//!   <serial Model="JIDU6601" Manufacturer="Speedtech">SN1</serial>
//! </serials>
//! ```
//!
//! Two-space indentation, one element per line, exactly one declaration
//! line at the top. Attribute and text escaping follow standard XML rules.

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::catalog;
use crate::error::AppError;
use crate::pipeline::Chunk;

/// Renders a chunk as a UTF-8 XML document string.
///
/// The manufacturer attribute comes from the catalog, defaulting to
/// `Unknown` for unmapped models. Records whose serial number trims to
/// empty are skipped; the chunker already excludes them, but the renderer
/// re-validates. Rendering the same chunk twice yields byte-identical
/// output.
///
/// # Errors
///
/// Returns `AppError::Xml` if event serialization fails.
pub fn render_chunk(chunk: &Chunk) -> Result<String, AppError> {
    let manufacturer = catalog::manufacturer_for(&chunk.model);

    let serials: Vec<&str> = chunk
        .records
        .iter()
        .map(|r| r.serial_number.trim())
        .filter(|s| !s.is_empty())
        .collect();

    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(|e| AppError::Xml(e.to_string()))?;

    if serials.is_empty() {
        writer
            .write_event(Event::Empty(BytesStart::new("serials")))
            .map_err(|e| AppError::Xml(e.to_string()))?;
    } else {
        writer
            .write_event(Event::Start(BytesStart::new("serials")))
            .map_err(|e| AppError::Xml(e.to_string()))?;

        for serial in serials {
            let mut elem = BytesStart::new("serial");
            elem.push_attribute(("Model", chunk.model.as_str()));
            elem.push_attribute(("Manufacturer", manufacturer));

            writer
                .write_event(Event::Start(elem))
                .map_err(|e| AppError::Xml(e.to_string()))?;
            writer
                .write_event(Event::Text(BytesText::new(serial)))
                .map_err(|e| AppError::Xml(e.to_string()))?;
            writer
                .write_event(Event::End(BytesEnd::new("serial")))
                .map_err(|e| AppError::Xml(e.to_string()))?;
        }

        writer
            .write_event(Event::End(BytesEnd::new("serials")))
            .map_err(|e| AppError::Xml(e.to_string()))?;
    }

    String::from_utf8(writer.into_inner()).map_err(|e| AppError::Xml(e.to_string()))
}
