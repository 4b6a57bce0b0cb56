//! Seed-driven wiring table generation.
//!
//! Produces the permutation tables that key the machine: a bijection over
//! the 96-slot index space for each rotor, and a fixed-point-free involution
//! for the reflector. Both run the same displacement-and-probe mechanism:
//! each seed character displaces a probe around the slot ring, and the first
//! untaken slot from there is claimed. The reflector variant runs two
//! probes, started half a ring apart, and cross-assigns each resolved pair.

use crate::alphabet::Alphabet;
use crate::error::EnigmaError;

/// Minimum number of seed characters accepted by the generator.
pub const MIN_SEED_CHARS: usize = 10;

/// A rotor's wiring: the forward substitution and its exact inverse.
///
/// Satisfies `inverse[forward[i]] == i` for every slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotorWiring {
    /// Forward substitution table.
    pub forward: Vec<usize>,
    /// Inverse substitution table.
    pub inverse: Vec<usize>,
}

/// Generates a rotor permutation from a seed string.
///
/// A probe starts at slot 0. For each table entry the probe is displaced by
/// the offset of the current seed character, the seed cursor advances
/// cyclically, and the first untaken slot at or after the probe (wrapping)
/// is claimed as `forward[i]`. The probe rests on the claimed slot.
///
/// # Parameters
/// - `seed`: The seed string (minimum 10 characters).
/// - `alphabet`: The alphabet defining the slot ring size.
///
/// # Errors
/// Returns [`EnigmaError::SeedTooShort`] for seeds under 10 characters, and
/// [`EnigmaError::WiringExhausted`] if slot tracking is corrupted (no free
/// slot within a full ring scan — unreachable under correct loop bounds).
pub fn generate_rotor(seed: &str, alphabet: &Alphabet) -> Result<RotorWiring, EnigmaError> {
    let chars = seed_chars(seed)?;
    let size = alphabet.table_size();

    let mut taken = vec![false; size];
    let mut forward = vec![0usize; size];
    let mut inverse = vec![0usize; size];

    let mut probe = 0usize;
    let mut cursor = 0usize;

    for (i, slot_out) in forward.iter_mut().enumerate() {
        probe = (probe + seed_offset(chars[cursor], alphabet)) % size;
        cursor = (cursor + 1) % chars.len();

        let slot = claim_slot(&mut taken, probe)?;
        probe = slot;

        *slot_out = slot;
        inverse[slot] = i;
    }

    Ok(RotorWiring { forward, inverse })
}

/// Generates a reflector involution from a seed string.
///
/// Runs two interleaved probes per pair-step, one started at slot 0 and one
/// at the ring's halfway point, each consuming one seed character from the
/// shared cyclic cursor. The two resolved slots are cross-assigned. The
/// second probe only lands on unclaimed slots, so a slot is never paired
/// with itself and the result has no fixed points.
///
/// # Parameters
/// - `seed`: The seed string (minimum 10 characters).
/// - `alphabet`: The alphabet defining the slot ring size.
///
/// # Errors
/// Same failure modes as [`generate_rotor`].
pub fn generate_reflector(seed: &str, alphabet: &Alphabet) -> Result<Vec<usize>, EnigmaError> {
    let chars = seed_chars(seed)?;
    let size = alphabet.table_size();

    let mut taken = vec![false; size];
    let mut table = vec![0usize; size];

    let mut probe_a = 0usize;
    let mut probe_b = size / 2;
    let mut cursor = 0usize;

    for _ in 0..size / 2 {
        probe_a = (probe_a + seed_offset(chars[cursor], alphabet)) % size;
        cursor = (cursor + 1) % chars.len();
        let first = claim_slot(&mut taken, probe_a)?;
        probe_a = first;

        probe_b = (probe_b + seed_offset(chars[cursor], alphabet)) % size;
        cursor = (cursor + 1) % chars.len();
        let second = claim_slot(&mut taken, probe_b)?;
        probe_b = second;

        table[first] = second;
        table[second] = first;
    }

    Ok(table)
}

/// Collects seed characters, enforcing the minimum length.
fn seed_chars(seed: &str) -> Result<Vec<char>, EnigmaError> {
    let chars: Vec<char> = seed.chars().collect();
    if chars.len() < MIN_SEED_CHARS {
        return Err(EnigmaError::SeedTooShort);
    }
    Ok(chars)
}

/// Displacement contributed by one seed character.
///
/// The offset is the character's alphabet index, or 1 when that index is 0
/// (the minimum symbol, or anything outside the alphabet) so the probe
/// always moves.
fn seed_offset(symbol: char, alphabet: &Alphabet) -> usize {
    let index = alphabet.to_index(symbol);
    if index == 0 {
        1
    } else {
        index
    }
}

/// Claims the first untaken slot at or after `start`, wrapping around the
/// ring. Scans at most one full ring.
fn claim_slot(taken: &mut [bool], start: usize) -> Result<usize, EnigmaError> {
    let size = taken.len();
    for step in 0..size {
        let slot = (start + step) % size;
        if !taken[slot] {
            taken[slot] = true;
            return Ok(slot);
        }
    }
    Err(EnigmaError::WiringExhausted)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEEDS: [&str; 4] = [
        "ThisIsASimpleSeedString",
        "ForGodSoLovedTheWorldThatHeGaveHisOnlyBegottenSon",
        "0123456789",
        "~!@#$%^&*()_+{}|:<>?",
    ];

    #[test]
    fn test_rotor_wiring_is_bijection() {
        let alphabet = Alphabet::default();
        for seed in SEEDS {
            let wiring = generate_rotor(seed, &alphabet).unwrap();
            for i in 0..alphabet.table_size() {
                assert_eq!(
                    wiring.inverse[wiring.forward[i]], i,
                    "inverse[forward[{}]] broken for seed {:?}",
                    i, seed
                );
                assert_eq!(
                    wiring.forward[wiring.inverse[i]], i,
                    "forward[inverse[{}]] broken for seed {:?}",
                    i, seed
                );
            }
        }
    }

    #[test]
    fn test_reflector_is_involution_without_fixed_points() {
        let alphabet = Alphabet::default();
        for seed in SEEDS {
            let table = generate_reflector(seed, &alphabet).unwrap();
            for i in 0..alphabet.table_size() {
                assert_eq!(table[table[i]], i, "not an involution for seed {:?}", seed);
                assert_ne!(table[i], i, "fixed point at {} for seed {:?}", i, seed);
            }
        }
    }

    #[test]
    fn test_generation_is_deterministic() {
        let alphabet = Alphabet::default();
        let a = generate_rotor("DeterministicSeed", &alphabet).unwrap();
        let b = generate_rotor("DeterministicSeed", &alphabet).unwrap();
        assert_eq!(a, b);

        let ra = generate_reflector("DeterministicSeed", &alphabet).unwrap();
        let rb = generate_reflector("DeterministicSeed", &alphabet).unwrap();
        assert_eq!(ra, rb);
    }

    #[test]
    fn test_different_seeds_differ() {
        let alphabet = Alphabet::default();
        let a = generate_rotor("SeedNumberOne!", &alphabet).unwrap();
        let b = generate_rotor("SeedNumberTwo!", &alphabet).unwrap();
        assert_ne!(a.forward, b.forward);
    }

    #[test]
    fn test_short_seed_rejected() {
        let alphabet = Alphabet::default();
        assert_eq!(
            generate_rotor("123456789", &alphabet),
            Err(EnigmaError::SeedTooShort)
        );
        assert_eq!(
            generate_reflector("", &alphabet),
            Err(EnigmaError::SeedTooShort)
        );
    }

    #[test]
    fn test_minimum_offset_seed_still_valid() {
        // All-space seed forces every displacement to the fallback offset
        // of 1; the result must still be a bijection.
        let alphabet = Alphabet::default();
        let wiring = generate_rotor("          ", &alphabet).unwrap();
        for i in 0..alphabet.table_size() {
            assert_eq!(wiring.inverse[wiring.forward[i]], i);
        }
    }

    #[test]
    fn test_claim_slot_wraps_around_ring() {
        let mut taken = vec![true, true, false, true];
        assert_eq!(claim_slot(&mut taken, 3).unwrap(), 2);
        assert!(taken[2]);
    }

    #[test]
    fn test_claim_slot_exhausted() {
        let mut taken = vec![true; 4];
        assert_eq!(claim_slot(&mut taken, 0), Err(EnigmaError::WiringExhausted));
    }

    #[test]
    fn test_seed_offset_fallback() {
        let alphabet = Alphabet::default();
        assert_eq!(seed_offset(' ', &alphabet), 1);
        assert_eq!(seed_offset('\t', &alphabet), 1);
        assert_eq!(seed_offset('!', &alphabet), 1);
        assert_eq!(seed_offset('A', &alphabet), 0x41 - 0x20);
        assert_eq!(seed_offset('\n', &alphabet), 95);
    }
}
