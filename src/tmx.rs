use chrono::Utc;
use crate::alignment::TranslationUnit;

// @module: TMX 1.4 document serialization

/// TMX format version written in the document root
pub const TMX_VERSION: &str = "1.4";

/// Escape the five XML-reserved characters with named entity references.
///
/// The ampersand substitution runs first so it cannot double-escape the
/// entities introduced by the later substitutions.
pub fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Current UTC time formatted for the TMX creationdate attribute (YYYYMMDDTHHMMSSZ)
pub fn creation_timestamp() -> String {
    Utc::now().format("%Y%m%dT%H%M%SZ").to_string()
}

/// Renders an ordered unit sequence into a TMX 1.4 document.
#[derive(Debug, Clone)]
pub struct TmxWriter {
    // @field: Value of the header creationtool attribute
    pub creation_tool: String,

    // @field: Value of the header creationtoolversion attribute
    pub creation_tool_version: String,
}

impl Default for TmxWriter {
    fn default() -> Self {
        TmxWriter {
            creation_tool: "tmxalign".to_string(),
            creation_tool_version: "1.0".to_string(),
        }
    }
}

impl TmxWriter {
    /// Create a writer with an explicit tool identity
    pub fn new(creation_tool: String, creation_tool_version: String) -> Self {
        TmxWriter {
            creation_tool,
            creation_tool_version,
        }
    }

    /// Serialize the units into a complete TMX document.
    ///
    /// One `tu` per unit, with a 1-based sequential `tuid` and two `tuv`
    /// elements tagged with the source and target language codes. Segment
    /// text is escaped; the caller supplies the creation timestamp so the
    /// serializer stays pure.
    pub fn serialize(
        &self,
        units: &[TranslationUnit],
        source_language: &str,
        target_language: &str,
        creation_date: &str,
    ) -> String {
        let mut document = format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<tmx version="{version}">
  <header
    creationtool="{tool}"
    creationtoolversion="{tool_version}"
    datatype="plaintext"
    segtype="sentence"
    adminlang="en"
    srclang="{source_language}"
    o-tmf="unknown"
    creationdate="{creation_date}">
  </header>
  <body>
"#,
            version = TMX_VERSION,
            tool = escape_xml(&self.creation_tool),
            tool_version = escape_xml(&self.creation_tool_version),
            source_language = escape_xml(source_language),
            creation_date = escape_xml(creation_date),
        );

        for (index, unit) in units.iter().enumerate() {
            document.push_str(&format!(
                r#"    <tu tuid="{tuid}">
      <tuv xml:lang="{source_language}">
        <seg>{source}</seg>
      </tuv>
      <tuv xml:lang="{target_language}">
        <seg>{target}</seg>
      </tuv>
    </tu>
"#,
                tuid = index + 1,
                source_language = escape_xml(source_language),
                target_language = escape_xml(target_language),
                source = escape_xml(&unit.source),
                target = escape_xml(&unit.target),
            ));
        }

        document.push_str("  </body>\n</tmx>");

        document
    }
}
