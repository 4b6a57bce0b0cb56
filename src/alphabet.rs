//! Alphabet mapping between printable symbols and the dense index space.
//!
//! The machine operates on indices in `[0, 95]`: indices 0–94 cover the 95
//! printable ASCII symbols from space (0x20) through tilde (0x7E) in order,
//! and index 95 is reserved for the line break. Carriage returns are never
//! mapped — the scanning caller filters them out before conversion.

/// First symbol of the printable range (space).
const FIRST_SYMBOL: u32 = 0x20;

/// Last symbol of the printable range (tilde).
const LAST_SYMBOL: u32 = 0x7E;

/// Number of representable symbols: 95 printable plus the line break.
const TABLE_SIZE: usize = (LAST_SYMBOL - FIRST_SYMBOL + 2) as usize;

/// Mapping between the printable-symbol domain and the dense index space.
///
/// Constructed once and captured by the wheels and the wiring generator so
/// the alphabet bounds travel with the machine instead of living in
/// free-floating globals. All conversions are defensive: out-of-range
/// input collapses to index 0 (space) rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alphabet {
    first: u32,
    last: u32,
}

impl Default for Alphabet {
    fn default() -> Self {
        Alphabet {
            first: FIRST_SYMBOL,
            last: LAST_SYMBOL,
        }
    }
}

impl Alphabet {
    /// Returns the number of slots in the index space (96).
    pub fn table_size(&self) -> usize {
        TABLE_SIZE
    }

    /// Returns the index reserved for the line break (95).
    pub fn line_break_index(&self) -> usize {
        TABLE_SIZE - 1
    }

    /// Converts a symbol to its alphabet index.
    ///
    /// A line feed maps to the reserved line-break index. Any symbol outside
    /// the printable range collapses to index 0 (space). Callers must strip
    /// carriage returns before conversion; one that slips through collapses
    /// to 0 like any other unmapped symbol.
    ///
    /// # Parameters
    /// - `symbol`: The character to convert.
    ///
    /// # Returns
    /// The alphabet index in `[0, 95]`.
    pub fn to_index(&self, symbol: char) -> usize {
        if symbol == '\n' {
            return self.line_break_index();
        }
        let code = symbol as u32;
        if (self.first..=self.last).contains(&code) {
            (code - self.first) as usize
        } else {
            0
        }
    }

    /// Appends the symbol for an alphabet index to `out`.
    ///
    /// The line-break index emits both characters of a CRLF pair together,
    /// so transformed line breaks survive the caller-side carriage-return
    /// stripping on the next pass. An index outside `[0, 95]` emits a space.
    ///
    /// # Parameters
    /// - `index`: The alphabet index to convert.
    /// - `out`: The string to append to.
    pub fn push_symbol(&self, index: usize, out: &mut String) {
        if index == self.line_break_index() {
            out.push_str("\r\n");
        } else if index < TABLE_SIZE {
            // Safe cast: first + index stays within printable ASCII.
            out.push(char::from_u32(self.first + index as u32).unwrap_or(' '));
        } else {
            out.push(' ');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_size() {
        let alphabet = Alphabet::default();
        assert_eq!(alphabet.table_size(), 96);
        assert_eq!(alphabet.line_break_index(), 95);
    }

    #[test]
    fn test_printable_symbols_round_trip() {
        let alphabet = Alphabet::default();
        for code in 0x20u32..=0x7E {
            let symbol = char::from_u32(code).unwrap();
            let index = alphabet.to_index(symbol);
            assert_eq!(index, (code - 0x20) as usize);

            let mut out = String::new();
            alphabet.push_symbol(index, &mut out);
            assert_eq!(out.chars().next(), Some(symbol));
        }
    }

    #[test]
    fn test_line_feed_maps_to_reserved_index() {
        let alphabet = Alphabet::default();
        assert_eq!(alphabet.to_index('\n'), 95);
    }

    #[test]
    fn test_line_break_emits_crlf_pair() {
        let alphabet = Alphabet::default();
        let mut out = String::new();
        alphabet.push_symbol(95, &mut out);
        assert_eq!(out, "\r\n");
    }

    #[test]
    fn test_out_of_range_symbol_collapses_to_space() {
        let alphabet = Alphabet::default();
        assert_eq!(alphabet.to_index('é'), 0);
        assert_eq!(alphabet.to_index('\t'), 0);
        assert_eq!(alphabet.to_index('\u{7F}'), 0);
        assert_eq!(alphabet.to_index('🔐'), 0);
    }

    #[test]
    fn test_carriage_return_collapses_like_unmapped() {
        let alphabet = Alphabet::default();
        assert_eq!(alphabet.to_index('\r'), 0);
    }

    #[test]
    fn test_out_of_range_index_emits_space() {
        let alphabet = Alphabet::default();
        let mut out = String::new();
        alphabet.push_symbol(96, &mut out);
        alphabet.push_symbol(usize::MAX, &mut out);
        assert_eq!(out, "  ");
    }
}
