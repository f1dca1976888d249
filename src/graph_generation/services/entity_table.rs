//! General entities declared in a document's internal DTD subset.

use crate::shared::Result;
use quick_xml::escape::resolve_predefined_entity;
use std::collections::HashMap;

/// Nesting limit for entities referring to other entities
const MAX_NESTING: usize = 16;
/// Upper bound on the text a single reference may expand to
const MAX_EXPANSION: usize = 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Declaration {
    Internal(String),
    External,
}

/// Entity declarations from `<!DOCTYPE root [ ... ]>`
///
/// Only internal general entities with a literal value can be expanded.
/// Parameter entities are ignored; external entities are never fetched.
#[derive(Debug, Default)]
pub(crate) struct EntityTable {
    entities: HashMap<String, Declaration>,
}

impl EntityTable {
    /// Collects the declarations of a DOCTYPE body such as
    /// `project [<!ENTITY g "org.a">]`.
    pub(crate) fn from_doctype(doctype: &str) -> Result<Self> {
        let mut table = Self::default();
        let subset = match (doctype.find('['), doctype.rfind(']')) {
            (Some(start), Some(end)) if start < end => &doctype[start + 1..end],
            _ => return Ok(table),
        };

        let mut rest = subset;
        while let Some(next) = rest.find("<!") {
            rest = &rest[next..];
            if let Some(comment) = rest.strip_prefix("<!--") {
                let end = comment
                    .find("-->")
                    .ok_or_else(|| anyhow::anyhow!("unterminated comment in DOCTYPE"))?;
                rest = &comment[end + 3..];
            } else if let Some(declaration) = rest.strip_prefix("<!ENTITY") {
                rest = table.declare(declaration)?;
            } else {
                rest = &rest[2..];
            }
        }

        Ok(table)
    }

    /// Parses one `<!ENTITY` declaration and returns the input after it.
    fn declare<'a>(&mut self, input: &'a str) -> Result<&'a str> {
        let input = input.trim_start();
        if input.starts_with('%') {
            return Ok(input);
        }

        let name_end = input
            .find(|c: char| c.is_whitespace())
            .ok_or_else(|| anyhow::anyhow!("incomplete entity declaration in DOCTYPE"))?;
        let name = &input[..name_end];
        let body = input[name_end..].trim_start();

        let (declaration, rest) = match body.chars().next() {
            Some(quote @ ('"' | '\'')) => {
                let value_end = body[1..]
                    .find(quote)
                    .ok_or_else(|| anyhow::anyhow!("unterminated value for entity '{}'", name))?;
                (
                    Declaration::Internal(body[1..1 + value_end].to_string()),
                    &body[value_end + 2..],
                )
            }
            _ => (Declaration::External, body),
        };

        // The first declaration of a name is binding
        self.entities.entry(name.to_string()).or_insert(declaration);
        Ok(rest)
    }

    /// Replacement text of `&name;`, with nested references resolved
    pub(crate) fn expand(&self, name: &str) -> Result<String> {
        let mut output = String::new();
        self.expand_into(name, &mut Vec::new(), &mut output)?;
        Ok(output)
    }

    fn expand_into<'a>(
        &'a self,
        name: &'a str,
        active: &mut Vec<&'a str>,
        output: &mut String,
    ) -> Result<()> {
        let value = match self.entities.get(name) {
            Some(Declaration::Internal(value)) => value,
            Some(Declaration::External) => {
                anyhow::bail!("external entity '&{};' is not supported", name)
            }
            None => anyhow::bail!("undefined entity '&{};'", name),
        };
        if active.contains(&name) {
            anyhow::bail!("recursive entity reference '&{};'", name);
        }
        if active.len() >= MAX_NESTING {
            anyhow::bail!("entity '&{};' is nested too deeply", name);
        }
        if value.contains('<') {
            anyhow::bail!("entity '&{};' expands to markup, which is not supported", name);
        }

        active.push(name);
        let mut rest = value.as_str();
        while let Some(start) = rest.find('&') {
            output.push_str(&rest[..start]);
            let end = rest[start..]
                .find(';')
                .ok_or_else(|| anyhow::anyhow!("unterminated reference in entity '&{};'", name))?;
            let reference = &rest[start + 1..start + end];
            match reference.strip_prefix('#') {
                Some(code) => output.push(Self::char_ref(code)?),
                None => match resolve_predefined_entity(reference) {
                    Some(predefined) => output.push_str(predefined),
                    None => self.expand_into(reference, active, output)?,
                },
            }
            rest = &rest[start + end + 1..];
            if output.len() > MAX_EXPANSION {
                anyhow::bail!("entity '&{};' expands beyond {} bytes", name, MAX_EXPANSION);
            }
        }
        output.push_str(rest);
        active.pop();

        if output.len() > MAX_EXPANSION {
            anyhow::bail!("entity '&{};' expands beyond {} bytes", name, MAX_EXPANSION);
        }
        Ok(())
    }

    fn char_ref(code: &str) -> Result<char> {
        let value = match code.strip_prefix('x') {
            Some(hex) => u32::from_str_radix(hex, 16),
            None => code.parse::<u32>(),
        };
        value
            .ok()
            .and_then(char::from_u32)
            .ok_or_else(|| anyhow::anyhow!("invalid character reference '&#{};'", code))
    }
}
