//! Transport category filter for the legacy station board.

use std::fmt;
use std::str::FromStr;

/// Number of positions in the provider's category mask.
pub const FILTER_WIDTH: usize = 10;

/// Error returned when a category letter is not part of the filter alphabet.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid transport category: {0:?}")]
pub struct InvalidCategory(pub char);

/// Error returned when parsing a rendered mask that is not 10 binary digits.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid product mask {0:?}: expected 10 digits of 0 or 1")]
pub struct InvalidMask(pub String);

/// A fixed-width transport category mask.
///
/// Each position switches one class of transport on the station board on or
/// off. Bits are only ever set, never cleared.
///
/// # Examples
///
/// ```
/// use delay_server::domain::ProductFilter;
///
/// let filter = ProductFilter::encode("IS").unwrap();
/// assert_eq!(filter.to_string(), "1100010000");
///
/// assert_eq!(ProductFilter::all().to_string(), "1111111111");
/// assert_eq!(ProductFilter::encode("").unwrap().to_string(), "0000000000");
///
/// assert!(ProductFilter::encode("X").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProductFilter([bool; FILTER_WIDTH]);

impl ProductFilter {
    /// A filter with every category off.
    pub fn none() -> Self {
        Self([false; FILTER_WIDTH])
    }

    /// A filter with every category on.
    pub fn all() -> Self {
        Self([true; FILTER_WIDTH])
    }

    /// Build a filter from a sequence of category letters.
    ///
    /// Aborts on the first letter outside the alphabet; no partial filter is
    /// returned. An empty sequence yields [`ProductFilter::none`].
    pub fn encode(letters: &str) -> Result<Self, InvalidCategory> {
        let mut filter = Self::none();
        for letter in letters.chars() {
            filter.set(letter)?;
        }
        Ok(filter)
    }

    /// Switch on the position(s) for one category letter.
    pub fn set(&mut self, letter: char) -> Result<(), InvalidCategory> {
        for &bit in bits_for(letter)? {
            self.0[bit] = true;
        }
        Ok(())
    }

    /// Whether the given position is on.
    pub fn is_set(&self, bit: usize) -> bool {
        self.0.get(bit).copied().unwrap_or(false)
    }

    /// Positions that are on, in ascending order.
    pub fn set_bits(&self) -> Vec<usize> {
        (0..FILTER_WIDTH).filter(|&bit| self.0[bit]).collect()
    }
}

/// Mask positions for a category letter.
fn bits_for(letter: char) -> Result<&'static [usize], InvalidCategory> {
    let bits: &'static [usize] = match letter {
        // ICE/EN/TGV and EC/IC
        'I' => &[0, 1],
        // InterRegio
        'R' => &[2],
        // RegioExpress
        'E' => &[3],
        // S-Bahn
        'S' => &[5],
        // metro, tram
        'U' | 'T' => &[9],
        // bus, postbus
        'B' | 'P' => &[6],
        'F' => &[4],
        // cable car, funicular
        'C' => &[7],
        other => return Err(InvalidCategory(other)),
    };
    Ok(bits)
}

impl fmt::Display for ProductFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &on in &self.0 {
            f.write_str(if on { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for ProductFilter {
    type Err = InvalidMask;

    /// Parse an already-rendered mask such as `"1100010000"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != FILTER_WIDTH {
            return Err(InvalidMask(s.to_string()));
        }

        let mut bits = [false; FILTER_WIDTH];
        for (bit, &b) in bits.iter_mut().zip(bytes) {
            *bit = match b {
                b'0' => false,
                b'1' => true,
                _ => return Err(InvalidMask(s.to_string())),
            };
        }
        Ok(Self(bits))
    }
}

impl fmt::Debug for ProductFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ProductFilter({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits(letters: &str) -> Vec<usize> {
        ProductFilter::encode(letters).unwrap().set_bits()
    }

    #[test]
    fn single_letters_set_table_bits() {
        assert_eq!(bits("I"), vec![0, 1]);
        assert_eq!(bits("R"), vec![2]);
        assert_eq!(bits("E"), vec![3]);
        assert_eq!(bits("S"), vec![5]);
        assert_eq!(bits("U"), vec![9]);
        assert_eq!(bits("T"), vec![9]);
        assert_eq!(bits("B"), vec![6]);
        assert_eq!(bits("P"), vec![6]);
        assert_eq!(bits("F"), vec![4]);
        assert_eq!(bits("C"), vec![7]);
    }

    #[test]
    fn intercity_and_sbahn() {
        let filter = ProductFilter::encode("IS").unwrap();
        assert_eq!(filter.to_string(), "1100010000");
    }

    #[test]
    fn every_letter_leaves_bit_8_off() {
        let filter = ProductFilter::encode("IREFSBCUTP").unwrap();
        assert_eq!(filter.to_string(), "1111111101");
    }

    #[test]
    fn repeated_letters_are_idempotent() {
        assert_eq!(
            ProductFilter::encode("BBPB").unwrap(),
            ProductFilter::encode("B").unwrap()
        );
    }

    #[test]
    fn empty_is_all_off_and_differs_from_all() {
        let empty = ProductFilter::encode("").unwrap();
        assert_eq!(empty, ProductFilter::none());
        assert_eq!(empty.to_string(), "0000000000");
        assert_ne!(empty, ProductFilter::all());
    }

    #[test]
    fn invalid_letter_is_named() {
        let err = ProductFilter::encode("IXS").unwrap_err();
        assert_eq!(err, InvalidCategory('X'));
        assert_eq!(err.to_string(), "invalid transport category: 'X'");
    }

    #[test]
    fn lowercase_rejected() {
        assert!(ProductFilter::encode("i").is_err());
    }

    #[test]
    fn parse_rendered_mask() {
        let filter: ProductFilter = "1100010000".parse().unwrap();
        assert_eq!(filter, ProductFilter::encode("IS").unwrap());
        assert_eq!("1111111111".parse::<ProductFilter>().unwrap(), ProductFilter::all());
    }

    #[test]
    fn reject_malformed_mask() {
        assert!("11111111".parse::<ProductFilter>().is_err());
        assert!("11111111111".parse::<ProductFilter>().is_err());
        assert!("11111111x1".parse::<ProductFilter>().is_err());
        assert!("".parse::<ProductFilter>().is_err());
    }

    #[test]
    fn debug() {
        assert_eq!(
            format!("{:?}", ProductFilter::encode("F").unwrap()),
            "ProductFilter(0000100000)"
        );
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    const ALPHABET: &str = "IRESUTBPFC";

    proptest! {
        /// Any string over the alphabet encodes to a 10-digit mask
        #[test]
        fn valid_letters_always_encode(s in "[IRESUTBPFC]{0,20}") {
            let filter = ProductFilter::encode(&s).unwrap();
            let rendered = filter.to_string();
            prop_assert_eq!(rendered.len(), FILTER_WIDTH);
            prop_assert!(rendered.chars().all(|c| c == '0' || c == '1'));
        }

        /// Encoding a concatenation sets the union of both halves' bits
        #[test]
        fn encoding_is_a_union(a in "[IRESUTBPFC]{0,10}", b in "[IRESUTBPFC]{0,10}") {
            let joined = ProductFilter::encode(&format!("{a}{b}")).unwrap();
            let left = ProductFilter::encode(&a).unwrap();
            let right = ProductFilter::encode(&b).unwrap();
            for bit in 0..FILTER_WIDTH {
                prop_assert_eq!(joined.is_set(bit), left.is_set(bit) || right.is_set(bit));
            }
        }

        /// Rendering then parsing yields the same filter
        #[test]
        fn render_parse_roundtrip(s in "[IRESUTBPFC]{0,10}") {
            let filter = ProductFilter::encode(&s).unwrap();
            prop_assert_eq!(filter.to_string().parse::<ProductFilter>(), Ok(filter));
        }

        /// A character outside the alphabet anywhere aborts encoding
        #[test]
        fn foreign_letter_rejected(
            prefix in "[IRESUTBPFC]{0,5}",
            bad in any::<char>().prop_filter("not in alphabet", |c| !ALPHABET.contains(*c)),
            suffix in "[IRESUTBPFC]{0,5}",
        ) {
            let input = format!("{prefix}{bad}{suffix}");
            prop_assert_eq!(ProductFilter::encode(&input), Err(InvalidCategory(bad)));
        }
    }
}
