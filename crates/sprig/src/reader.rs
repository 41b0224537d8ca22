//! Reader: recursive-descent parser from tokens to forms
//!
//! Parsing threads an immutable [`Reader`] cursor through every call. Each
//! step returns the form it read together with the advanced cursor, so no
//! parser state is shared or mutated.

use crate::error::ReadError;
use crate::form::{Form, Keyword, MapForm, SeqForm};
use crate::lexer::{tokenize, Token};
use crate::string_escape::{decode_string, is_terminated};

/// Default limit on collection nesting.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Reader configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReaderOptions {
    /// Deepest collection nesting accepted before failing with `TooDeep`
    pub max_depth: usize,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// An immutable cursor over a token sequence.
#[derive(Debug, Clone, Copy)]
pub struct Reader<'t> {
    tokens: &'t [Token],
    index: usize,
}

impl<'t> Reader<'t> {
    /// A cursor at the first token.
    pub fn new(tokens: &'t [Token]) -> Self {
        Self { tokens, index: 0 }
    }

    /// The cursor one token further on.
    pub fn next(self) -> Self {
        Self {
            tokens: self.tokens,
            index: self.index + 1,
        }
    }

    /// The token under the cursor, or `None` past the end.
    pub fn current(&self) -> Option<&'t Token> {
        self.tokens.get(self.index)
    }

    /// Position of the cursor in the token sequence.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The cursor advanced past any comment tokens.
    pub fn skip_comments(self) -> Self {
        let mut reader = self;
        while reader.current().is_some_and(Token::is_comment) {
            reader = reader.next();
        }
        reader
    }
}

/// The three collection shapes, keyed by their delimiters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CollectionKind {
    List,
    Vector,
    Map,
}

impl CollectionKind {
    fn from_open(text: &str) -> Option<Self> {
        match text {
            "(" => Some(CollectionKind::List),
            "[" => Some(CollectionKind::Vector),
            "{" => Some(CollectionKind::Map),
            _ => None,
        }
    }

    fn close(self) -> &'static str {
        match self {
            CollectionKind::List => ")",
            CollectionKind::Vector => "]",
            CollectionKind::Map => "}",
        }
    }
}

fn is_closer(text: &str) -> bool {
    matches!(text, ")" | "]" | "}")
}

/// A collection under construction.
enum Building {
    Seq(SeqForm),
    Map(MapForm),
}

impl Building {
    fn begin(kind: CollectionKind, open: Token) -> Self {
        match kind {
            CollectionKind::List | CollectionKind::Vector => {
                Building::Seq(SeqForm::new().begin(open))
            }
            CollectionKind::Map => Building::Map(MapForm::new().begin(open)),
        }
    }

    fn append(self, form: Form) -> Result<Self, ReadError> {
        Ok(match self {
            Building::Seq(seq) => Building::Seq(seq.append(form)),
            Building::Map(map) => Building::Map(map.append(form)?),
        })
    }

    fn finish(self, kind: CollectionKind, close: Token) -> Result<Form, ReadError> {
        Ok(match (self, kind) {
            (Building::Seq(seq), CollectionKind::Vector) => Form::Vector(seq.end(close)),
            (Building::Seq(seq), _) => Form::List(seq.end(close)),
            (Building::Map(map), _) => Form::HashMap(map.complete()?.end(close)),
        })
    }
}

/// Read exactly one form from `source`.
///
/// Comments may surround the form; any other trailing token is an error.
///
/// ```
/// use sprig::reader::read_str;
/// use sprig::Form;
///
/// let form = read_str("(+ 1 2)").unwrap();
/// assert_eq!(form, Form::list(vec![Form::symbol("+"), Form::int(1), Form::int(2)]));
/// ```
pub fn read_str(source: &str) -> Result<Form, ReadError> {
    read_str_with(source, &ReaderOptions::default())
}

/// [`read_str`] with explicit options.
pub fn read_str_with(source: &str, options: &ReaderOptions) -> Result<Form, ReadError> {
    let tokens = tokenize(source);
    let (form, rest) = read_form_with(Reader::new(&tokens), options)?;
    match rest.skip_comments().current() {
        Some(extra) => Err(ReadError::TrailingInput {
            token: extra.text().to_string(),
            offset: extra.offset(),
        }),
        None => Ok(form),
    }
}

/// Read the form at the cursor, returning it and the cursor after it.
pub fn read_form(reader: Reader<'_>) -> Result<(Form, Reader<'_>), ReadError> {
    read_form_with(reader, &ReaderOptions::default())
}

/// [`read_form`] with explicit options.
pub fn read_form_with<'t>(
    reader: Reader<'t>,
    options: &ReaderOptions,
) -> Result<(Form, Reader<'t>), ReadError> {
    read_form_at(reader, 0, options)
}

fn read_form_at<'t>(
    reader: Reader<'t>,
    depth: usize,
    options: &ReaderOptions,
) -> Result<(Form, Reader<'t>), ReadError> {
    let reader = reader.skip_comments();
    let token = reader.current().ok_or(ReadError::EmptyInput)?;

    if let Some(kind) = CollectionKind::from_open(token.text()) {
        return read_collection(reader, kind, depth, options);
    }
    if is_closer(token.text()) {
        return Err(ReadError::UnexpectedDelimiter {
            token: token.text().to_string(),
            offset: token.offset(),
        });
    }
    Ok((read_atom(token)?, reader.next()))
}

fn read_collection<'t>(
    reader: Reader<'t>,
    kind: CollectionKind,
    depth: usize,
    options: &ReaderOptions,
) -> Result<(Form, Reader<'t>), ReadError> {
    if depth >= options.max_depth {
        return Err(ReadError::TooDeep {
            max: options.max_depth,
        });
    }

    let open = reader.current().cloned().ok_or(ReadError::EmptyInput)?;
    let mut building = Building::begin(kind, open);
    let mut reader = reader.next();

    loop {
        reader = reader.skip_comments();
        let Some(token) = reader.current() else {
            return Err(ReadError::MismatchedDelimiter {
                expected: kind.close(),
                found: None,
            });
        };
        if token.text() == kind.close() {
            let form = building.finish(kind, token.clone())?;
            return Ok((form, reader.next()));
        }
        if is_closer(token.text()) {
            return Err(ReadError::MismatchedDelimiter {
                expected: kind.close(),
                found: Some(token.clone()),
            });
        }
        let (member, next) = read_form_at(reader, depth + 1, options)?;
        building = building.append(member)?;
        reader = next;
    }
}

fn is_integer(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Classify a single non-delimiter token.
fn read_atom(token: &Token) -> Result<Form, ReadError> {
    let text = token.text();

    match text {
        "true" => return Ok(Form::TRUE),
        "false" => return Ok(Form::FALSE),
        _ => {}
    }

    if is_integer(text) {
        let value = text
            .parse::<i64>()
            .map_err(|_| ReadError::IntegerOutOfRange {
                token: text.to_string(),
            })?;
        return Ok(Form::Int {
            value,
            token: Some(token.clone()),
        });
    }

    if let Some(name) = text.strip_prefix(':') {
        return Ok(Form::Keyword {
            keyword: Keyword::intern(name),
            token: Some(token.clone()),
        });
    }

    if text.starts_with('"') {
        if !is_terminated(text) {
            return Err(ReadError::UnbalancedString {
                offset: token.offset(),
            });
        }
        let value = decode_string(&text[1..text.len() - 1])?;
        return Ok(Form::Str {
            value: value.into(),
            token: Some(token.clone()),
        });
    }

    Ok(Form::Symbol {
        name: text.into(),
        token: Some(token.clone()),
    })
}
