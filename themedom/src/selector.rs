//! CSS selector subset used by the widgets.
//!
//! Supported: type selectors, `*`, `.class`, `[attr]`, `[attr=value]`
//! (quoted or bare) and the descendant combinator.

use std::fmt;
use std::iter::Peekable;
use std::str::CharIndices;

use thiserror::Error;

use crate::document::{Document, Node, NodeId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectorError {
    #[error("empty selector")]
    Empty,

    #[error("unexpected character '{ch}' at position {position}")]
    UnexpectedChar { ch: char, position: usize },

    #[error("expected a name at position {position}")]
    ExpectedName { position: usize },

    #[error("unterminated attribute selector starting at position {position}")]
    UnterminatedAttribute { position: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum AttrMatch {
    Exists(String),
    Equals(String, String),
}

impl AttrMatch {
    fn matches(&self, node: &Node) -> bool {
        match self {
            AttrMatch::Exists(name) => node.has_attribute(name),
            AttrMatch::Equals(name, value) => node.attribute(name) == Some(value.as_str()),
        }
    }
}

/// One compound selector, e.g. `details.mega-menu[open]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Compound {
    tag: Option<String>,
    classes: Vec<String>,
    attributes: Vec<AttrMatch>,
}

impl Compound {
    fn matches(&self, node: &Node) -> bool {
        if let Some(tag) = &self.tag {
            if node.tag() != tag {
                return false;
            }
        }
        self.classes.iter().all(|c| node.has_class(c))
            && self.attributes.iter().all(|a| a.matches(node))
    }
}

/// A chain of compound selectors joined by descendant combinators.
/// The last compound is the subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    compounds: Vec<Compound>,
}

impl Selector {
    /// Matches every element.
    pub fn any() -> Self {
        Self {
            compounds: vec![Compound::default()],
        }
    }

    pub fn tag(tag: &str) -> Self {
        Self {
            compounds: vec![Compound {
                tag: Some(tag.to_ascii_lowercase()),
                ..Default::default()
            }],
        }
    }

    pub fn class(class: &str) -> Self {
        Self::any().with_class(class)
    }

    pub fn attr(name: &str) -> Self {
        Self::any().with_attr(name)
    }

    fn subject_mut(&mut self) -> &mut Compound {
        if self.compounds.is_empty() {
            self.compounds.push(Compound::default());
        }
        let last = self.compounds.len() - 1;
        &mut self.compounds[last]
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.subject_mut().classes.push(class.to_string());
        self
    }

    pub fn with_attr(mut self, name: &str) -> Self {
        self.subject_mut()
            .attributes
            .push(AttrMatch::Exists(name.to_ascii_lowercase()));
        self
    }

    pub fn with_attr_eq(mut self, name: &str, value: &str) -> Self {
        self.subject_mut().attributes.push(AttrMatch::Equals(
            name.to_ascii_lowercase(),
            value.to_string(),
        ));
        self
    }

    /// `self descendant`: elements matching `descendant` inside an element matching `self`.
    pub fn descendant(mut self, descendant: Selector) -> Self {
        self.compounds.extend(descendant.compounds);
        self
    }

    /// Whether the node matches, checking ancestors for descendant combinators.
    pub fn matches(&self, doc: &Document, id: NodeId) -> bool {
        let Some((subject, rest)) = self.compounds.split_last() else {
            return false;
        };
        let Some(node) = doc.node(id) else {
            return false;
        };
        if !subject.matches(node) {
            return false;
        }

        // Greedy ancestor walk is exact for descendant-only chains.
        let mut pending = rest.iter().rev().peekable();
        for ancestor in doc.ancestors(id) {
            let Some(compound) = pending.peek() else {
                break;
            };
            if doc.node(ancestor).is_some_and(|n| compound.matches(n)) {
                pending.next();
            }
        }
        pending.peek().is_none()
    }

    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        let mut chars = input.char_indices().peekable();
        let mut compounds = Vec::new();

        loop {
            while chars.peek().is_some_and(|(_, c)| c.is_whitespace()) {
                chars.next();
            }
            if chars.peek().is_none() {
                break;
            }
            compounds.push(parse_compound(&mut chars)?);
        }

        if compounds.is_empty() {
            return Err(SelectorError::Empty);
        }
        Ok(Self { compounds })
    }
}

impl std::str::FromStr for Selector {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_'
}

fn ident(chars: &mut Peekable<CharIndices<'_>>) -> String {
    let mut name = String::new();
    while let Some(&(_, c)) = chars.peek() {
        if !is_ident_char(c) {
            break;
        }
        name.push(c);
        chars.next();
    }
    name
}

fn parse_compound(chars: &mut Peekable<CharIndices<'_>>) -> Result<Compound, SelectorError> {
    let mut compound = Compound::default();
    let mut has_type = false;

    while let Some(&(position, c)) = chars.peek() {
        match c {
            c if c.is_whitespace() => break,
            '*' if !has_type && compound == Compound::default() => {
                chars.next();
                has_type = true;
            }
            '.' => {
                chars.next();
                let name = ident(chars);
                if name.is_empty() {
                    return Err(SelectorError::ExpectedName {
                        position: position + 1,
                    });
                }
                compound.classes.push(name);
            }
            '[' => {
                chars.next();
                compound.attributes.push(parse_attribute(position, chars)?);
            }
            c if is_ident_char(c) && !has_type && compound == Compound::default() => {
                compound.tag = Some(ident(chars).to_ascii_lowercase());
                has_type = true;
            }
            ch => return Err(SelectorError::UnexpectedChar { ch, position }),
        }
    }

    Ok(compound)
}

fn parse_attribute(
    start: usize,
    chars: &mut Peekable<CharIndices<'_>>,
) -> Result<AttrMatch, SelectorError> {
    let unterminated = SelectorError::UnterminatedAttribute { position: start };
    let skip_ws = |chars: &mut Peekable<CharIndices<'_>>| {
        while chars.peek().is_some_and(|(_, c)| c.is_whitespace()) {
            chars.next();
        }
    };

    skip_ws(chars);
    let name_position = chars.peek().map_or(start + 1, |(p, _)| *p);
    let name = ident(chars).to_ascii_lowercase();
    if name.is_empty() {
        if chars.peek().is_none() {
            return Err(unterminated);
        }
        return Err(SelectorError::ExpectedName {
            position: name_position,
        });
    }
    skip_ws(chars);

    match chars.next() {
        Some((_, ']')) => Ok(AttrMatch::Exists(name)),
        Some((_, '=')) => {
            skip_ws(chars);
            let value = match chars.peek() {
                Some(&(_, quote @ ('"' | '\''))) => {
                    chars.next();
                    let mut value = String::new();
                    loop {
                        match chars.next() {
                            Some((_, c)) if c == quote => break,
                            Some((_, c)) => value.push(c),
                            None => return Err(unterminated),
                        }
                    }
                    value
                }
                Some(_) => ident(chars),
                None => return Err(unterminated),
            };
            skip_ws(chars);
            match chars.next() {
                Some((_, ']')) => Ok(AttrMatch::Equals(name, value)),
                Some((position, ch)) => Err(SelectorError::UnexpectedChar { ch, position }),
                None => Err(unterminated),
            }
        }
        Some((position, ch)) => Err(SelectorError::UnexpectedChar { ch, position }),
        None => Err(unterminated),
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, compound) in self.compounds.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match &compound.tag {
                Some(tag) => f.write_str(tag)?,
                None if compound.classes.is_empty() && compound.attributes.is_empty() => {
                    f.write_str("*")?
                }
                None => {}
            }
            for class in &compound.classes {
                write!(f, ".{class}")?;
            }
            for attr in &compound.attributes {
                match attr {
                    AttrMatch::Exists(name) => write!(f, "[{name}]")?,
                    AttrMatch::Equals(name, value) => write!(f, "[{name}=\"{value}\"]")?,
                }
            }
        }
        Ok(())
    }
}
