//! The record type every sort operates on.

use std::cmp::Ordering;
use std::fmt;

use crate::error::SortError;

/// Capacity of the inline text buffers, including room for a C style terminator.
pub const TEXT_CAPACITY: usize = 64;

/// Longest text a [`BoundedText`] accepts.
pub const MAX_TEXT_LEN: usize = TEXT_CAPACITY - 1;

/// Short text stored inline, so that [`Monster`] stays `Copy` and free of heap pointers.
#[derive(Copy, Clone)]
pub struct BoundedText {
    len: u8,
    bytes: [u8; TEXT_CAPACITY],
}

impl BoundedText {
    pub fn new(text: &str) -> Result<Self, SortError> {
        let len = text.len();
        if len > MAX_TEXT_LEN {
            return Err(SortError::TextTooLong {
                len,
                max: MAX_TEXT_LEN,
            });
        }

        // Names are compared like C strings, an interior NUL would silently truncate them.
        if text.as_bytes().contains(&0) {
            return Err(SortError::InvalidText);
        }

        let mut bytes = [0u8; TEXT_CAPACITY];
        bytes[..len].copy_from_slice(text.as_bytes());

        Ok(Self {
            len: len as u8,
            bytes,
        })
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    pub fn as_str(&self) -> &str {
        // SAFETY: `bytes[..len]` was copied from a `&str` in `new` and is never modified.
        unsafe { std::str::from_utf8_unchecked(self.as_bytes()) }
    }
}

impl PartialEq for BoundedText {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for BoundedText {}

impl PartialOrd for BoundedText {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BoundedText {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        // Byte-wise, same as strcmp.
        self.as_bytes().cmp(other.as_bytes())
    }
}

impl fmt::Debug for BoundedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl fmt::Display for BoundedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A monster, the unit being sorted.
///
/// Fields are only readable, sorting may reorder monsters but never change them.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Monster {
    id: u32,
    name: BoundedText,
    element: BoundedText,
    population: u32,
    weight: f64,
}

impl Monster {
    pub fn new(
        id: u32,
        name: &str,
        element: &str,
        population: u32,
        weight: f64,
    ) -> Result<Self, SortError> {
        if !(weight >= 0.0 && weight.is_finite()) {
            return Err(SortError::InvalidWeight(weight));
        }

        Ok(Self {
            id,
            name: BoundedText::new(name)?,
            element: BoundedText::new(element)?,
            population,
            weight,
        })
    }

    #[inline]
    pub fn id(&self) -> u32 {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &BoundedText {
        &self.name
    }

    #[inline]
    pub fn element(&self) -> &BoundedText {
        &self.element
    }

    #[inline]
    pub fn population(&self) -> u32 {
        self.population
    }

    #[inline]
    pub fn weight(&self) -> f64 {
        self.weight
    }
}

impl fmt::Display for Monster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {:.6}",
            self.name, self.element, self.population, self.weight
        )
    }
}
