//! Session secret generation.

use rand::Rng;

/// Random bytes per session secret (128 bits of entropy).
const SECRET_BYTES: usize = 16;

/// Generate a fresh session secret: 16 random bytes, hex-encoded.
///
/// The secret is a bearer capability. Possession authorizes reads and
/// writes of the session it was issued with; there is no server-side
/// revocation list, so a caller "logs out" by discarding the pair.
pub fn generate_session_secret() -> String {
    let mut bytes = [0u8; SECRET_BYTES];
    rand::rng().fill(&mut bytes[..]);
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}
