//! UTF-8 byte emission from UTF-16 code units.
//!
//! Text is scanned one UTF-16 code unit at a time and packed into UTF-8 by
//! hand:
//!
//! ```text
//! unit < 0x80                 0xxxxxxx
//! unit < 0x800                110xxxxx 10xxxxxx
//! unit < 0x10000, not surr.   1110xxxx 10xxxxxx 10xxxxxx
//! surrogate pair              11110xxx 10xxxxxx 10xxxxxx 10xxxxxx
//! ```
//!
//! Any unit in `0xD800..0xE000` is treated as the first half of a pair and
//! consumes the unit after it. How a broken pair is handled is controlled
//! by [`SurrogatePolicy`].

use bytes::{BufMut, BytesMut};

use crate::error::FormDataError;

const SURROGATES: std::ops::Range<u32> = 0xD800..0xE000;
const LEAD_SURROGATES: std::ops::Range<u16> = 0xD800..0xDC00;
const TRAIL_SURROGATES: std::ops::Range<u16> = 0xDC00..0xE000;

/// How a surrogate unit without a valid partner is encoded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SurrogatePolicy {
    /// Pair the unit with whatever unit follows it (or `0` at the end of
    /// input) and emit the resulting four bytes. The output is malformed
    /// UTF-8 for broken pairs, but deterministic.
    #[default]
    Lenient,
    /// Fail with [`FormDataError::UnpairedSurrogate`].
    Strict,
}

/// Encode a Rust string through the code-unit encoder.
///
/// A `str` never holds a lone surrogate, so the output is always identical
/// to `input.as_bytes()`.
pub fn encode_str(input: &str, out: &mut BytesMut) {
    out.reserve(input.len());
    let mut units = input.encode_utf16();
    while let Some(unit) = units.next() {
        if SURROGATES.contains(&u32::from(unit)) {
            let trail = units.next().unwrap_or(0);
            put_code_point(combine(unit, trail), out);
        } else {
            put_code_point(u32::from(unit), out);
        }
    }
}

/// Encode a sequence of UTF-16 code units as UTF-8.
///
/// # Errors
///
/// Returns [`FormDataError::UnpairedSurrogate`] under
/// [`SurrogatePolicy::Strict`] when a surrogate is not part of a valid
/// lead/trail pair. `index` is the position of the offending lead unit.
pub fn encode_utf16<I>(
    units: I,
    policy: SurrogatePolicy,
    out: &mut BytesMut,
) -> Result<(), FormDataError>
where
    I: IntoIterator<Item = u16>,
{
    let mut units = units.into_iter().enumerate();
    while let Some((index, unit)) = units.next() {
        if !SURROGATES.contains(&u32::from(unit)) {
            put_code_point(u32::from(unit), out);
            continue;
        }

        let next = units.next().map(|(_, trail)| trail);
        let trail = match policy {
            SurrogatePolicy::Lenient => next.unwrap_or(0),
            SurrogatePolicy::Strict => match next {
                Some(trail)
                    if LEAD_SURROGATES.contains(&unit) && TRAIL_SURROGATES.contains(&trail) =>
                {
                    trail
                }
                _ => return Err(FormDataError::UnpairedSurrogate { index, unit }),
            },
        };
        put_code_point(combine(unit, trail), out);
    }
    Ok(())
}

/// Combine two surrogate halves. Only the low ten bits of each are used.
fn combine(lead: u16, trail: u16) -> u32 {
    0x10000 + (((u32::from(lead) & 0x3FF) << 10) | (u32::from(trail) & 0x3FF))
}

fn put_code_point(cp: u32, out: &mut BytesMut) {
    if cp < 0x80 {
        out.put_u8(cp as u8);
    } else if cp < 0x800 {
        out.put_slice(&[0xC0 | (cp >> 6) as u8, 0x80 | (cp & 0x3F) as u8]);
    } else if cp < 0x10000 {
        out.put_slice(&[
            0xE0 | (cp >> 12) as u8,
            0x80 | ((cp >> 6) & 0x3F) as u8,
            0x80 | (cp & 0x3F) as u8,
        ]);
    } else {
        out.put_slice(&[
            0xF0 | (cp >> 18) as u8,
            0x80 | ((cp >> 12) & 0x3F) as u8,
            0x80 | ((cp >> 6) & 0x3F) as u8,
            0x80 | (cp & 0x3F) as u8,
        ]);
    }
}
