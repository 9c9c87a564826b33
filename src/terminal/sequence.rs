//! Escape-sequence parameter decoding.
//!
//! The bytes collected between `ESC [` and the terminating command letter
//! form a semicolon-separated list of decimal integers. [`decode`] turns
//! that raw buffer into a [`Params`] list; the same type doubles as a
//! cell's graphic rendition, since an SGR command stores its decoded
//! parameter list verbatim.

/// An ordered list of decoded escape parameters.
///
/// Also used as the rendition attached to each screen cell. Two lists are
/// equal only when they have identical length and identical values at
/// every index; insertion order is significant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(Vec<i64>);

impl Params {
    /// The single parameter if exactly one was given, else `default`.
    ///
    /// Lists of zero or two-plus elements both fall back to the default;
    /// single-parameter commands are defined to ignore extra values.
    pub fn single(&self, default: i64) -> i64 {
        if self.0.len() == 1 {
            self.0[0]
        } else {
            default
        }
    }

    /// Parameter at `index`, if present.
    pub fn get(&self, index: usize) -> Option<i64> {
        self.0.get(index).copied()
    }

    /// The decoded values in order.
    pub fn values(&self) -> &[i64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<i64>> for Params {
    fn from(values: Vec<i64>) -> Self {
        Params(values)
    }
}

/// Decode the raw parameter bytes of a bracketed escape sequence.
///
/// Splits on `;` and parses each piece as a decimal integer. Returns
/// `None` when any piece fails to parse (including empty pieces, as in
/// `5;;7`, and values that overflow); callers treat that the same as an
/// empty list and fall back to each command's default. An empty buffer
/// decodes to an empty list, not a failure.
pub fn decode(raw: &[u8]) -> Option<Params> {
    if raw.is_empty() {
        return Some(Params::default());
    }

    let mut values = Vec::with_capacity(1 + raw.iter().filter(|&&b| b == b';').count());
    for piece in raw.split(|&b| b == b';') {
        let text = std::str::from_utf8(piece).ok()?;
        values.push(text.parse::<i64>().ok()?);
    }
    Some(Params(values))
}
