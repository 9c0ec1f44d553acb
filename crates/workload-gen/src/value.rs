use rand::distributions::Alphanumeric;
use rand::Rng;

/// Random `[0-9A-Za-z]` string of exactly `len` characters.
///
/// Consumes one draw per character.
pub fn random_value<R: Rng + ?Sized>(len: usize, rng: &mut R) -> String {
    (0..len)
        .map(|_| char::from(rng.sample(Alphanumeric)))
        .collect()
}
