//! Die faces and the uniform draw source.

use rand::Rng;

/// Lowest face a die can show.
pub const FACE_MIN: u8 = 1;
/// Highest face a die can show.
pub const FACE_MAX: u8 = 6;

/// Draw one die face, uniformly distributed over 1..=6.
pub fn roll_die<R: Rng>(rng: &mut R) -> u8 {
    rng.gen_range(FACE_MIN..=FACE_MAX)
}

/// Draw the three faces for a round, in throw order.
pub fn roll_dice<R: Rng>(rng: &mut R) -> [u8; 3] {
    [roll_die(rng), roll_die(rng), roll_die(rng)]
}
