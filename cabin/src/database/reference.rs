//! Booking reference generation.
//!
//! References are drawn uniformly at random from the 8-character
//! uppercase-alphanumeric space and checked against the full booking
//! history, so a reference is never reissued even after its seat has been
//! released.

use rand::Rng;

use crate::booking::{BookingReference, REFERENCE_ALPHABET, REFERENCE_LENGTH};
use crate::error::{Error, Result};

use super::connection::Database;

/// Maximum number of draws before generation gives up.
///
/// The reference space holds 36^8 values, so repeated collisions indicate
/// a fault rather than a crowded store.
pub const MAX_GENERATION_ATTEMPTS: u32 = 64;

/// Draws one candidate reference uniformly over the alphabet.
fn random_reference(rng: &mut impl Rng) -> BookingReference {
    let text: String = (0..REFERENCE_LENGTH)
        .map(|_| REFERENCE_ALPHABET[rng.gen_range(0..REFERENCE_ALPHABET.len())] as char)
        .collect();

    // The alphabet and length match the validation rules by construction
    BookingReference::new(text).unwrap_or_else(|e| unreachable!("generated reference invalid: {e}"))
}

impl Database {
    /// Generates a booking reference that does not appear in the history.
    ///
    /// Candidates are redrawn until one is unused. There is no reservation
    /// of the returned value; the primary key on the bookings table remains
    /// the last line of defense if the same reference is minted twice
    /// before either is recorded.
    ///
    /// # Errors
    ///
    /// Returns `Error::ReferenceSpaceExhausted` if no unused reference is
    /// found within [`MAX_GENERATION_ATTEMPTS`] draws, or a database error
    /// if the uniqueness check fails.
    pub fn generate_unique_reference(&self) -> Result<BookingReference> {
        let mut rng = rand::thread_rng();

        for attempt in 1..=MAX_GENERATION_ATTEMPTS {
            let candidate = random_reference(&mut rng);
            if !Self::reference_exists(self.connection(), &candidate)? {
                return Ok(candidate);
            }
            log::debug!(
                "booking reference {candidate} already used (attempt {attempt}), redrawing"
            );
        }

        Err(Error::ReferenceSpaceExhausted {
            attempts: MAX_GENERATION_ATTEMPTS,
        })
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    proptest! {
        #[test]
        fn random_references_always_validate(seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            let reference = random_reference(&mut rng);
            prop_assert!(BookingReference::new(reference.as_str()).is_ok());
        }
    }
}
