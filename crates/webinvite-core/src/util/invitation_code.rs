//! Invitation code generation for guest RSVP links.
//!
//! ## Summary
//! Codes are short, lowercase alphanumeric strings that end up in URLs such as
//! `/invitation/k3x9q2ab`. They are unique within one invitation's guest list;
//! global uniqueness is left to the backend.

use rand::Rng;

use crate::constants::{INVITATION_CODE_ALPHABET, INVITATION_CODE_LEN};

/// Upper bound on redraws before giving up on finding an unused code.
const MAX_ATTEMPTS: usize = 32;

/// Generate a random invitation code from the given RNG.
///
/// Always returns exactly [`INVITATION_CODE_LEN`] characters from `[a-z0-9]`.
#[must_use]
pub fn generate_invitation_code<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..INVITATION_CODE_LEN)
        .map(|_| {
            let idx = rng.gen_range(0..INVITATION_CODE_ALPHABET.len());
            char::from(INVITATION_CODE_ALPHABET[idx])
        })
        .collect()
}

/// Generate an invitation code that does not collide with any of `existing`.
///
/// Returns `None` if every attempt collided, which with 36^8 possible codes
/// only happens when the RNG is broken.
#[must_use]
pub fn generate_unique_invitation_code<'a, I>(existing: I) -> Option<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let taken: std::collections::HashSet<&str> = existing.into_iter().collect();
    let mut rng = rand::thread_rng();

    (0..MAX_ATTEMPTS)
        .map(|_| generate_invitation_code(&mut rng))
        .find(|code| !taken.contains(code.as_str()))
}

/// Returns `true` if `code` has the shape of a generated invitation code.
#[must_use]
pub fn is_valid_invitation_code(code: &str) -> bool {
    code.len() == INVITATION_CODE_LEN
        && code
            .bytes()
            .all(|b| INVITATION_CODE_ALPHABET.contains(&b))
}
