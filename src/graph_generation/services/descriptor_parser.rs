//! Namespace-aware pom.xml reader.
//!
//! Uses the quick-xml namespace resolver so that only elements bound to
//! the Maven POM 4.0.0 namespace are considered, whatever prefix the
//! document happens to use. Raw bytes are decoded according to the byte
//! order mark or the `encoding` of the XML declaration.

use super::entity_table::EntityTable;
use crate::graph_generation::domain::DependencyId;
use crate::shared::Result;
use quick_xml::encoding::{decode, detect_encoding};
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::Event;
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::{NsReader, Reader};
use std::borrow::Cow;

pub const POM_NAMESPACE: &str = "http://maven.apache.org/POM/4.0.0";

/// A `<dependency>` element that lacks one of its coordinates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedDependency {
    /// 1-based position among all `<dependency>` elements of the document
    pub position: usize,
    pub missing: &'static str,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedDescriptor {
    pub dependencies: Vec<DependencyId>,
    pub malformed: Vec<MalformedDependency>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Coordinate {
    GroupId,
    ArtifactId,
}

impl Coordinate {
    fn from_local_name(name: &[u8]) -> Option<Self> {
        match name {
            b"groupId" => Some(Self::GroupId),
            b"artifactId" => Some(Self::ArtifactId),
            _ => None,
        }
    }
}

/// Accumulator for one `<dependency>` element, allocated when it opens so
/// results keep document order even for nested elements.
#[derive(Default)]
struct DependencySlot {
    depth: usize,
    group_id: Option<String>,
    artifact_id: Option<String>,
}

/// Text capture for a `groupId`/`artifactId` child. Only the text before
/// the first nested element counts.
struct Capture {
    slot: usize,
    coordinate: Coordinate,
    depth: usize,
    sealed: bool,
    text: String,
}

/// DescriptorParser service extracting `groupId:artifactId` identifiers
pub struct DescriptorParser;

impl DescriptorParser {
    /// Parses descriptor content.
    ///
    /// Every `dependency` element in the POM namespace below the document
    /// root contributes one identifier built from its direct `groupId` and
    /// `artifactId` children. Elements missing either child are reported in
    /// [`ParsedDescriptor::malformed`] instead.
    ///
    /// # Errors
    /// Returns an error if the content cannot be decoded or is not
    /// well-formed XML.
    pub fn parse(content: impl AsRef<[u8]>) -> Result<ParsedDescriptor> {
        let text = Self::decode_document(content.as_ref())?;
        Self::parse_text(&text)
    }

    /// A byte order mark wins over the declared encoding. Without either
    /// the document is read as UTF-8.
    fn decode_document(bytes: &[u8]) -> Result<Cow<'_, str>> {
        let declared = match Reader::from_reader(bytes).read_event() {
            Ok(Event::Decl(decl)) => decl.encoder(),
            _ => None,
        };

        let (encoding, body) = match detect_encoding(bytes) {
            Some((bom_encoding, bom_len)) if bom_len > 0 => (Some(bom_encoding), &bytes[bom_len..]),
            Some((guessed, _)) if guessed.is_ascii_compatible() => (
                declared.filter(|e| e.is_ascii_compatible()).or(Some(guessed)),
                bytes,
            ),
            Some((guessed, _)) => (Some(guessed), bytes),
            None => (None, bytes),
        };

        match encoding {
            Some(encoding) => decode(body, encoding).map_err(Into::into),
            None => std::str::from_utf8(body)
                .map(Cow::Borrowed)
                .map_err(|e| anyhow::anyhow!("cannot decode input using UTF-8: {}", e)),
        }
    }

    fn parse_text(content: &str) -> Result<ParsedDescriptor> {
        let mut reader = NsReader::from_str(content);
        let mut entities = EntityTable::default();

        let mut depth = 0usize;
        let mut seen_root = false;
        let mut slots: Vec<DependencySlot> = Vec::new();
        let mut open: Vec<usize> = Vec::new();
        let mut capture: Option<Capture> = None;

        loop {
            let position = reader.buffer_position();
            let (resolved, event) = reader
                .read_resolved_event()
                .map_err(|e| anyhow::anyhow!("{} (near byte {})", e, position))?;

            let in_pom = match resolved {
                ResolveResult::Bound(Namespace(ns)) => ns == POM_NAMESPACE.as_bytes(),
                ResolveResult::Unknown(prefix) => anyhow::bail!(
                    "unbound namespace prefix '{}' (near byte {})",
                    String::from_utf8_lossy(&prefix),
                    position
                ),
                ResolveResult::Unbound => false,
            };

            match event {
                Event::Start(ref e) | Event::Empty(ref e) => {
                    let is_empty = matches!(event, Event::Empty(_));
                    if depth == 0 {
                        if seen_root {
                            anyhow::bail!("junk after document element (near byte {})", position);
                        }
                        seen_root = true;
                    }
                    let element_depth = depth + 1;
                    let local = e.local_name();
                    let name = local.as_ref();

                    if let Some(c) = capture.as_mut() {
                        c.sealed = true;
                    }

                    if in_pom && name == b"dependency" && element_depth >= 2 {
                        slots.push(DependencySlot {
                            depth: element_depth,
                            ..Default::default()
                        });
                        if !is_empty {
                            open.push(slots.len() - 1);
                        }
                    } else if in_pom && !is_empty && capture.is_none() {
                        let direct_child_of = open
                            .last()
                            .copied()
                            .filter(|&slot| element_depth == slots[slot].depth + 1);
                        if let Some(slot) = direct_child_of {
                            capture = Coordinate::from_local_name(name).map(|coordinate| Capture {
                                slot,
                                coordinate,
                                depth: element_depth,
                                sealed: false,
                                text: String::new(),
                            });
                        }
                    }

                    if !is_empty {
                        depth = element_depth;
                    }
                }
                Event::End(_) => {
                    if depth == 0 {
                        anyhow::bail!("unmatched end tag (near byte {})", position);
                    }
                    if capture.as_ref().is_some_and(|c| c.depth == depth) {
                        if let Some(c) = capture.take() {
                            Self::store(&mut slots[c.slot], c.coordinate, &c.text);
                        }
                    }
                    if open.last().is_some_and(|&slot| slots[slot].depth == depth) {
                        open.pop();
                    }
                    depth -= 1;
                }
                Event::Text(ref e) => {
                    let text = e
                        .decode()
                        .map_err(|err| anyhow::anyhow!("{} (near byte {})", err, position))?;
                    if depth == 0 {
                        if !text.trim().is_empty() {
                            anyhow::bail!("text outside the root element (near byte {})", position);
                        }
                    } else {
                        Self::append(&mut capture, depth, &text);
                    }
                }
                Event::CData(e) => {
                    let raw = e.into_inner();
                    Self::append(&mut capture, depth, &String::from_utf8_lossy(&raw));
                }
                Event::DocType(ref e) => {
                    if seen_root {
                        anyhow::bail!("DOCTYPE after the root element (near byte {})", position);
                    }
                    let doctype = e.decode()?;
                    entities = EntityTable::from_doctype(&doctype)
                        .map_err(|err| anyhow::anyhow!("{} (near byte {})", err, position))?;
                }
                Event::GeneralRef(ref e) => {
                    if depth == 0 {
                        anyhow::bail!("entity reference outside the root element (near byte {})", position);
                    }
                    let resolved = match e.resolve_char_ref()? {
                        Some(ch) => ch.to_string(),
                        None => {
                            let entity = e.decode()?;
                            match resolve_predefined_entity(&entity) {
                                Some(predefined) => predefined.to_string(),
                                None => entities
                                    .expand(&entity)
                                    .map_err(|err| anyhow::anyhow!("{} (near byte {})", err, position))?,
                            }
                        }
                    };
                    Self::append(&mut capture, depth, &resolved);
                }
                Event::Eof => {
                    if !seen_root {
                        anyhow::bail!("no root element found");
                    }
                    if depth > 0 {
                        anyhow::bail!("unexpected end of document: {} element(s) left open", depth);
                    }
                    break;
                }
                _ => {}
            }
        }

        let mut parsed = ParsedDescriptor::default();
        for (index, slot) in slots.into_iter().enumerate() {
            match (slot.group_id, slot.artifact_id) {
                (Some(group_id), Some(artifact_id)) => {
                    parsed
                        .dependencies
                        .push(DependencyId::new(group_id, artifact_id)?);
                }
                (None, _) => parsed.malformed.push(MalformedDependency {
                    position: index + 1,
                    missing: "groupId",
                }),
                (_, None) => parsed.malformed.push(MalformedDependency {
                    position: index + 1,
                    missing: "artifactId",
                }),
            }
        }

        Ok(parsed)
    }

    fn append(capture: &mut Option<Capture>, depth: usize, text: &str) {
        if let Some(c) = capture.as_mut() {
            if c.depth == depth && !c.sealed {
                c.text.push_str(text);
            }
        }
    }

    /// First occurrence wins; blank values count as missing.
    fn store(slot: &mut DependencySlot, coordinate: Coordinate, text: &str) {
        let value = text.trim();
        if value.is_empty() {
            return;
        }
        let target = match coordinate {
            Coordinate::GroupId => &mut slot.group_id,
            Coordinate::ArtifactId => &mut slot.artifact_id,
        };
        if target.is_none() {
            *target = Some(value.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pom(body: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0">
  <modelVersion>4.0.0</modelVersion>
  <groupId>com.example</groupId>
  <artifactId>app</artifactId>
{}
</project>"#,
            body
        )
    }

    fn identifiers(parsed: &ParsedDescriptor) -> Vec<String> {
        parsed.dependencies.iter().map(|d| d.to_string()).collect()
    }

    #[test]
    fn test_parse_dependencies_in_document_order() {
        let content = pom(
            r#"
  <dependencies>
    <dependency><groupId>org.a</groupId><artifactId>lib1</artifactId></dependency>
    <dependency>
      <groupId>org.b</groupId>
      <artifactId>lib2</artifactId>
      <version>2.0</version>
      <scope>test</scope>
    </dependency>
    <dependency><artifactId>lib3</artifactId><groupId>org.c</groupId></dependency>
  </dependencies>"#,
        );

        let parsed = DescriptorParser::parse(&content).unwrap();
        assert_eq!(identifiers(&parsed), vec!["org.a:lib1", "org.b:lib2", "org.c:lib3"]);
        assert!(parsed.malformed.is_empty());
    }

    #[test]
    fn test_parse_no_dependencies() {
        let parsed = DescriptorParser::parse(&pom("")).unwrap();
        assert!(parsed.dependencies.is_empty());
    }

    #[test]
    fn test_parse_matches_dependencies_anywhere_below_root() {
        let content = pom(
            r#"
  <dependencyManagement>
    <dependencies>
      <dependency><groupId>org.bom</groupId><artifactId>bom</artifactId></dependency>
    </dependencies>
  </dependencyManagement>
  <build>
    <plugins>
      <plugin>
        <groupId>org.apache.maven.plugins</groupId>
        <artifactId>maven-surefire-plugin</artifactId>
        <dependencies>
          <dependency><groupId>org.junit</groupId><artifactId>junit-platform</artifactId></dependency>
        </dependencies>
      </plugin>
    </plugins>
  </build>"#,
        );

        let parsed = DescriptorParser::parse(&content).unwrap();
        assert_eq!(identifiers(&parsed), vec!["org.bom:bom", "org.junit:junit-platform"]);
    }

    #[test]
    fn test_parse_ignores_exclusion_coordinates() {
        let content = pom(
            r#"
  <dependencies>
    <dependency>
      <exclusions>
        <exclusion><groupId>commons-logging</groupId><artifactId>commons-logging</artifactId></exclusion>
      </exclusions>
      <groupId>org.springframework</groupId>
      <artifactId>spring-core</artifactId>
    </dependency>
  </dependencies>"#,
        );

        let parsed = DescriptorParser::parse(&content).unwrap();
        assert_eq!(identifiers(&parsed), vec!["org.springframework:spring-core"]);
    }

    #[test]
    fn test_parse_requires_pom_namespace() {
        let content = r#"<project>
  <dependencies>
    <dependency><groupId>org.a</groupId><artifactId>lib1</artifactId></dependency>
  </dependencies>
</project>"#;

        let parsed = DescriptorParser::parse(content).unwrap();
        assert!(parsed.dependencies.is_empty());
    }

    #[test]
    fn test_parse_prefixed_namespace() {
        let content = r#"<m:project xmlns:m="http://maven.apache.org/POM/4.0.0">
  <m:dependencies>
    <m:dependency><m:groupId>org.a</m:groupId><m:artifactId>lib1</m:artifactId></m:dependency>
  </m:dependencies>
</m:project>"#;

        let parsed = DescriptorParser::parse(content).unwrap();
        assert_eq!(identifiers(&parsed), vec!["org.a:lib1"]);
    }

    #[test]
    fn test_parse_trims_and_unescapes_text() {
        let content = pom(
            r#"
  <dependencies>
    <dependency>
      <groupId>
        org.a
      </groupId>
      <artifactId>lib&#45;one&amp;two</artifactId>
    </dependency>
    <dependency><groupId><![CDATA[org.b]]></groupId><artifactId>lib2</artifactId></dependency>
  </dependencies>"#,
        );

        let parsed = DescriptorParser::parse(&content).unwrap();
        assert_eq!(identifiers(&parsed), vec!["org.a:lib-one&two", "org.b:lib2"]);
    }

    #[test]
    fn test_parse_reports_missing_coordinates() {
        let content = pom(
            r#"
  <dependencies>
    <dependency><groupId>org.a</groupId><artifactId>lib1</artifactId></dependency>
    <dependency><artifactId>orphan</artifactId></dependency>
    <dependency><groupId>org.c</groupId><artifactId/></dependency>
    <dependency/>
  </dependencies>"#,
        );

        let parsed = DescriptorParser::parse(&content).unwrap();
        assert_eq!(identifiers(&parsed), vec!["org.a:lib1"]);
        assert_eq!(
            parsed.malformed,
            vec![
                MalformedDependency { position: 2, missing: "groupId" },
                MalformedDependency { position: 3, missing: "artifactId" },
                MalformedDependency { position: 4, missing: "groupId" },
            ]
        );
    }

    #[test]
    fn test_parse_malformed_documents() {
        let cases = [
            "",
            "<project xmlns=\"http://maven.apache.org/POM/4.0.0\"><dependencies></project>",
            "<project xmlns=\"http://maven.apache.org/POM/4.0.0\"><dependencies>",
            "<project/><project/>",
            "<project>&unknown;</project>",
            "<x:project/>",
            "not xml at all",
        ];

        for content in cases {
            assert!(
                DescriptorParser::parse(content).is_err(),
                "expected parse failure for {:?}",
                content
            );
        }
    }

    #[test]
    fn test_parse_latin1_declaration() {
        let mut content = b"<?xml version=\"1.0\" encoding=\"ISO-8859-1\"?>\n<!-- Autor: J\xfcrgen -->\n".to_vec();
        content.extend_from_slice(
            br#"<project xmlns="http://maven.apache.org/POM/4.0.0"><dependencies>
    <dependency><groupId>org.a</groupId><artifactId>lib1</artifactId></dependency>
</dependencies></project>"#,
        );

        let parsed = DescriptorParser::parse(&content).unwrap();
        assert_eq!(identifiers(&parsed), vec!["org.a:lib1"]);
    }

    #[test]
    fn test_parse_decodes_coordinates_in_declared_encoding() {
        let content = b"<?xml version='1.0' encoding='windows-1252'?>\
<project xmlns='http://maven.apache.org/POM/4.0.0'><dependencies>\
<dependency><groupId>org.m\xfcller</groupId><artifactId>lib</artifactId></dependency>\
</dependencies></project>";

        let parsed = DescriptorParser::parse(content).unwrap();
        assert_eq!(identifiers(&parsed), vec!["org.m\u{fc}ller:lib"]);
    }

    #[test]
    fn test_parse_utf16_with_byte_order_mark() {
        let xml = pom(
            "<dependencies><dependency><groupId>org.a</groupId><artifactId>lib1</artifactId></dependency></dependencies>",
        )
        .replace("UTF-8", "UTF-16");
        let mut content = vec![0xFF, 0xFE];
        for unit in xml.encode_utf16() {
            content.extend_from_slice(&unit.to_le_bytes());
        }

        let parsed = DescriptorParser::parse(&content).unwrap();
        assert_eq!(identifiers(&parsed), vec!["org.a:lib1"]);
    }

    #[test]
    fn test_parse_utf8_byte_order_mark() {
        let mut content = vec![0xEF, 0xBB, 0xBF];
        content.extend_from_slice(pom("").as_bytes());

        assert!(DescriptorParser::parse(&content).is_ok());
    }

    #[test]
    fn test_parse_rejects_bytes_invalid_for_encoding() {
        let undeclared = b"<project xmlns='http://maven.apache.org/POM/4.0.0'>\xff</project>";
        let declared = b"<?xml version='1.0' encoding='UTF-8'?><project>\xc3\x28</project>";

        assert!(DescriptorParser::parse(undeclared).is_err());
        assert!(DescriptorParser::parse(declared).is_err());
    }

    #[test]
    fn test_parse_expands_internal_subset_entities() {
        let content = r#"<?xml version="1.0"?>
<!DOCTYPE project [
  <!ENTITY g "org.a">
  <!ENTITY lib "lib&#49;">
]>
<project xmlns="http://maven.apache.org/POM/4.0.0">
  <dependencies>
    <dependency><groupId>&g;</groupId><artifactId>&lib;</artifactId></dependency>
  </dependencies>
</project>"#;

        let parsed = DescriptorParser::parse(content).unwrap();
        assert_eq!(identifiers(&parsed), vec!["org.a:lib1"]);
    }

    #[test]
    fn test_parse_undeclared_entity_with_doctype() {
        let content = r#"<!DOCTYPE project [<!ENTITY g "org.a">]>
<project xmlns="http://maven.apache.org/POM/4.0.0">&other;</project>"#;

        let err = DescriptorParser::parse(content).unwrap_err();
        assert!(err.to_string().contains("undefined entity '&other;'"));
    }
}
