use std::path::Path;

use crate::core::errors::{ConfError, Result};
use crate::core::models::node::ConfigNode;
use crate::core::models::parsed_config::ParsedConfig;
use crate::core::traits::parser::ConfigParser;

/// Parses the restricted YAML subset used by `remote.yml`.
///
/// Supported:
/// - Three root sections: `common:`, `environments:`, `service_ports:`
/// - Space indentation, width-agnostic (dedent is indent-relative)
/// - `key:` for nesting, `key: value` for leaves
/// - Quoted values (`"…"` and `'…'`), quotes stripped
/// - Comment lines (`# ...`) and blank lines
///
/// Not supported: lists, anchors, tags, multi-document streams, or any
/// scalar typing — every value is a plain string. Tab indentation is a
/// parse error, never silently coerced.
///
/// By default the parser is lenient: lines outside a recognized section,
/// unrecognized root keys, and duplicate keys (last wins) are tolerated,
/// because these files are hand-edited and often partially specified.
/// `strict()` turns the misplaced-line cases into errors.
pub struct YamlSubsetParser {
    strict: bool,
}

impl YamlSubsetParser {
    pub fn new() -> Self {
        Self { strict: false }
    }

    /// A parser that rejects misplaced lines instead of ignoring them.
    pub fn strict() -> Self {
        Self { strict: true }
    }
}

impl Default for YamlSubsetParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigParser for YamlSubsetParser {
    fn parse(&self, content: &str, source: &Path) -> Result<ParsedConfig> {
        // Parser state is built fresh per call; nothing is shared
        // across invocations.
        let mut state = ParserState::new(self.strict, source);

        for scanned in LineScanner::new(content, source) {
            let line = scanned?;
            state.feed(line)?;
        }

        state.finish()
    }
}

/// One meaningful line of input: leading-space count plus trimmed content.
#[derive(Debug, Clone, PartialEq)]
struct ScannedLine<'a> {
    indent: usize,
    content: &'a str,
    number: usize,
}

/// Single-pass scanner over raw lines.
///
/// Yields `(indent, content)` pairs, skipping blank lines and `#`
/// comments. A tab in leading whitespace is reported as an error.
struct LineScanner<'a> {
    lines: std::iter::Enumerate<std::str::Lines<'a>>,
    source: &'a Path,
}

impl<'a> LineScanner<'a> {
    fn new(content: &'a str, source: &'a Path) -> Self {
        Self {
            lines: content.lines().enumerate(),
            source,
        }
    }
}

impl<'a> Iterator for LineScanner<'a> {
    type Item = Result<ScannedLine<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        for (idx, raw) in self.lines.by_ref() {
            let number = idx + 1;
            let indent = raw.chars().take_while(|c| *c == ' ').count();
            if raw[indent..].starts_with('\t') {
                return Some(Err(ConfError::ParseError {
                    file: self.source.to_path_buf(),
                    detail: format!("line {number}: tab in indentation"),
                }));
            }
            let content = raw.trim();
            if content.is_empty() || content.starts_with('#') {
                continue;
            }
            return Some(Ok(ScannedLine {
                indent,
                content,
                number,
            }));
        }
        None
    }
}

/// How a trimmed line reads, before any section context is applied.
#[derive(Debug, PartialEq)]
enum LineKind<'a> {
    /// `key:` — opens a nesting level.
    BareKey(&'a str),
    /// `key: value` — a leaf entry, quotes already stripped.
    Entry(&'a str, String),
    /// No colon at all (e.g. stray list syntax).
    Other,
}

fn classify(content: &str) -> LineKind<'_> {
    if let Some(key) = content.strip_suffix(':') {
        return LineKind::BareKey(key.trim_end());
    }
    if let Some((key, value)) = content.split_once(':') {
        return LineKind::Entry(key.trim_end(), strip_quotes(value.trim()));
    }
    LineKind::Other
}

/// Remove matching surrounding quotes (single or double) from a value.
fn strip_quotes(s: &str) -> String {
    let bytes = s.as_bytes();
    if bytes.len() >= 2 {
        let first = bytes[0];
        let last = bytes[bytes.len() - 1];
        if (first == b'"' && last == b'"') || (first == b'\'' && last == b'\'') {
            return s[1..s.len() - 1].to_string();
        }
    }
    s.to_string()
}

/// The three recognized root-level sections.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Section {
    Common,
    Environments,
    ServicePorts,
}

/// Stack of `(indent, key)` frames for the currently open nesting path
/// inside a block. Dedent handling is indent-relative: any frame at or
/// below the incoming indent is closed first, so sibling keys at the
/// same depth never leak into each other's paths.
#[derive(Debug, Default)]
struct PathStack {
    frames: Vec<(usize, String)>,
}

impl PathStack {
    /// Close every level whose indent is >= the incoming line's indent.
    fn pop_to(&mut self, indent: usize) {
        while self
            .frames
            .last()
            .is_some_and(|(frame_indent, _)| *frame_indent >= indent)
        {
            self.frames.pop();
        }
    }

    fn push(&mut self, indent: usize, key: &str) {
        self.frames.push((indent, key.to_string()));
    }

    /// The open path, oldest first.
    fn path(&self) -> Vec<String> {
        self.frames.iter().map(|(_, key)| key.clone()).collect()
    }
}

/// A block being assembled under `common:` or `environments:`.
struct OpenBlock {
    name: String,
    indent: usize,
    tree: ConfigNode,
    stack: PathStack,
}

impl OpenBlock {
    fn new(name: &str, indent: usize) -> Self {
        Self {
            name: name.to_string(),
            indent,
            tree: ConfigNode::empty(),
            stack: PathStack::default(),
        }
    }
}

/// Per-parse mutable state, constructed fresh for every `parse` call.
struct ParserState<'a> {
    strict: bool,
    source: &'a Path,
    section: Option<Section>,
    block: Option<OpenBlock>,
    /// Reference indent of the first entry under `service_ports:`.
    ports_indent: Option<usize>,
    result: ParsedConfig,
}

impl<'a> ParserState<'a> {
    fn new(strict: bool, source: &'a Path) -> Self {
        Self {
            strict,
            source,
            section: None,
            block: None,
            ports_indent: None,
            result: ParsedConfig {
                source_path: Some(source.to_path_buf()),
                ..ParsedConfig::default()
            },
        }
    }

    fn feed(&mut self, line: ScannedLine<'_>) -> Result<()> {
        if line.indent == 0 {
            return self.enter_root(line);
        }
        match self.section {
            None => Self::misplaced(
                self.strict,
                self.source,
                &line,
                "content outside any recognized section",
            ),
            Some(Section::ServicePorts) => self.feed_port(line),
            Some(Section::Common) | Some(Section::Environments) => self.feed_block_line(line),
        }
    }

    /// A root-level line either opens a section or is unrecognized.
    fn enter_root(&mut self, line: ScannedLine<'_>) -> Result<()> {
        self.close_block();
        self.ports_indent = None;
        self.section = match classify(line.content) {
            LineKind::BareKey("common") => Some(Section::Common),
            LineKind::BareKey("environments") => Some(Section::Environments),
            LineKind::BareKey("service_ports") => Some(Section::ServicePorts),
            _ => {
                Self::misplaced(
                    self.strict,
                    self.source,
                    &line,
                    "unrecognized root-level content",
                )?;
                None
            }
        };
        Ok(())
    }

    /// First-level children of `service_ports:` are direct `name: port`
    /// entries; deeper or malformed lines are misplaced.
    fn feed_port(&mut self, line: ScannedLine<'_>) -> Result<()> {
        let reference = *self.ports_indent.get_or_insert(line.indent);
        if line.indent != reference {
            return Self::misplaced(
                self.strict,
                self.source,
                &line,
                "nested content under service_ports",
            );
        }
        match classify(line.content) {
            LineKind::Entry(key, value) if !key.is_empty() => {
                self.result.service_ports.insert(key.to_string(), value);
                Ok(())
            }
            _ => Self::misplaced(
                self.strict,
                self.source,
                &line,
                "expected 'service: port' under service_ports",
            ),
        }
    }

    /// Lines under `common:`/`environments:`: the first indentation level
    /// names blocks, everything deeper flattens into the active block.
    fn feed_block_line(&mut self, line: ScannedLine<'_>) -> Result<()> {
        // A line at or above the active block's indent closes it (sibling
        // block or dedent), before the current line is evaluated.
        if let Some(block) = &self.block
            && line.indent <= block.indent
        {
            let block_indent = block.indent;
            self.close_block();
            if line.indent < block_indent {
                // Dedent to somewhere between the section marker and the
                // block level; nothing can legally live there.
                return Self::misplaced(
                    self.strict,
                    self.source,
                    &line,
                    "unexpected dedent inside section",
                );
            }
        }

        match &mut self.block {
            None => match classify(line.content) {
                // Any key at the block level names a block; a scalar value
                // on the block line itself has no meaning and is dropped.
                LineKind::BareKey(name) | LineKind::Entry(name, _) if !name.is_empty() => {
                    self.block = Some(OpenBlock::new(name, line.indent));
                    Ok(())
                }
                _ => Self::misplaced(self.strict, self.source, &line, "expected a block name"),
            },
            Some(block) => {
                block.stack.pop_to(line.indent);
                match classify(line.content) {
                    LineKind::BareKey(key) if !key.is_empty() => {
                        block.stack.push(line.indent, key);
                        Ok(())
                    }
                    LineKind::Entry(key, value) if !key.is_empty() => {
                        block.tree.insert_scalar(&block.stack.path(), key, value);
                        Ok(())
                    }
                    _ => Self::misplaced(
                        self.strict,
                        self.source,
                        &line,
                        "expected 'key:' or 'key: value'",
                    ),
                }
            }
        }
    }

    /// Flush the active block into the parse result.
    fn close_block(&mut self) {
        let Some(block) = self.block.take() else {
            return;
        };
        let flat = block.tree.flatten();
        let target = match self.section {
            Some(Section::Common) => &mut self.result.common_blocks,
            Some(Section::Environments) => &mut self.result.env_blocks,
            _ => return,
        };
        // A block re-declared later in the file unions with the earlier
        // occurrence; later entries win on identical dot-paths.
        target.entry(block.name).or_default().extend(flat);
    }

    /// Leniency policy: ignored by default, an error in strict mode.
    fn misplaced(strict: bool, source: &Path, line: &ScannedLine<'_>, what: &str) -> Result<()> {
        if strict {
            return Err(ConfError::ParseError {
                file: source.to_path_buf(),
                detail: format!("line {}: {what}: {}", line.number, line.content),
            });
        }
        Ok(())
    }

    fn finish(mut self) -> Result<ParsedConfig> {
        self.close_block();
        Ok(self.result)
    }
}
