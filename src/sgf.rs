//! SGF stone extraction.
//! Reads only the `AB` (add black) and `AW` (add white) setup properties of a
//! 19x19 record. Game trees, variations and move replay are ignored.
//! Coordinates use the SGF letter scheme: `a` is 0, `s` is 18.

use crate::config::RenderConfig;
use crate::error::SgfError;

/// Highest coordinate letter on a 19x19 board.
const MAX_COORD_LETTER: u8 = b's';

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

/// A placed stone. `x` is the column, `y` the row, both zero-based.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Stone {
    pub x: usize,
    pub y: usize,
    pub color: Color,
}

impl Stone {
    /// Returns `None` for coordinates off a 19x19 board.
    pub fn new(x: usize, y: usize, color: Color) -> Option<Self> {
        let max = RenderConfig::STANDARD.max_coord();
        if x > max || y > max {
            return None;
        }
        Some(Self { x, y, color })
    }
}

/// Normalizes raw SGF file content and checks its outer shape.
///
/// Surrounding whitespace is trimmed and every `\r`, `\n` and `\t` is removed.
/// The result must start with `(;` and end with `)`.
pub fn prepare_sgf(raw: &str) -> Result<String, SgfError> {
    let sgf: String = raw
        .trim()
        .chars()
        .filter(|c| !matches!(c, '\r' | '\n' | '\t'))
        .collect();

    if sgf.is_empty() {
        return Err(SgfError::InvalidInput("SGF content is empty".to_string()));
    }
    if !sgf.starts_with("(;") || !sgf.ends_with(')') {
        return Err(SgfError::InvalidInput(
            "expected content to start with \"(;\" and end with \")\"".to_string(),
        ));
    }

    Ok(sgf)
}

/// Extracts setup stones: black stones in file order, then white stones in file order.
///
/// A missing `AB` or `AW` property yields no stones of that color. Coordinate
/// pairs with letters outside `a`..`s` are skipped.
pub fn extract_stones(sgf: &str) -> Vec<Stone> {
    let mut stones = Vec::new();
    for (tag, color) in [("AB", Color::Black), ("AW", Color::White)] {
        if let Some(body) = property_body(sgf, tag) {
            stones.extend(
                coordinate_tokens(body).filter_map(|(x, y)| Stone::new(x, y, color)),
            );
        }
    }
    stones
}

/// Finds the value list of the first usable `tag[...]` property.
///
/// The body starts after `tag[` and ends before the first `]` that closes the
/// property, i.e. one followed by the next property tag, a node or tree
/// delimiter, or the end of input. The inner `][` separators stay in the body.
fn property_body<'a>(sgf: &'a str, tag: &str) -> Option<&'a str> {
    let bytes = sgf.as_bytes();
    let opener = format!("{tag}[");

    let mut search_from = 0;
    while let Some(found) = sgf[search_from..].find(&opener) {
        let tag_start = search_from + found;
        let body_start = tag_start + opener.len();
        search_from = tag_start + 1;

        // `AB` at the tail of a longer property name such as `XAB` is a different property.
        if tag_start > 0 && bytes[tag_start - 1].is_ascii_uppercase() {
            continue;
        }

        let closing = bytes[body_start..]
            .iter()
            .enumerate()
            .filter(|&(_, &b)| b == b']')
            .map(|(offset, _)| body_start + offset)
            .find(|&close| closes_property(bytes, close + 1));

        if let Some(close) = closing {
            return Some(&sgf[body_start..close]);
        }
    }
    None
}

/// Whether the text at `pos` can follow the final `]` of a property.
fn closes_property(bytes: &[u8], pos: usize) -> bool {
    match bytes.get(pos) {
        None => true,
        Some(b';' | b'(' | b')') => true,
        Some(_) => {
            let ident_len = bytes[pos..]
                .iter()
                .take_while(|b| b.is_ascii_alphanumeric() || **b == b'_')
                .count();
            ident_len > 0 && bytes.get(pos + ident_len) == Some(&b'[')
        }
    }
}

/// Yields `(x, y)` for each two-letter `[a-s][a-s]` token that sits right
/// before a `]` or the end of the body.
fn coordinate_tokens(body: &str) -> impl Iterator<Item = (usize, usize)> + '_ {
    let bytes = body.as_bytes();
    let mut i = 0;
    std::iter::from_fn(move || {
        while i + 1 < bytes.len() {
            let (a, b) = (bytes[i], bytes[i + 1]);
            let terminated = i + 2 == bytes.len() || bytes[i + 2] == b']';
            if is_coord_letter(a) && is_coord_letter(b) && terminated {
                i += 3;
                return Some(((a - b'a') as usize, (b - b'a') as usize));
            }
            i += 1;
        }
        None
    })
}

fn is_coord_letter(b: u8) -> bool {
    (b'a'..=MAX_COORD_LETTER).contains(&b)
}
