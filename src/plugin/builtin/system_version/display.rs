//! Display version: the version plus a random build token, for on-page use only

use rand::Rng;

/// Number of fractional digits in the build token
const TOKEN_DECIMALS: u32 = 5;

/// `"<version> build-D.DDDDD"` using the thread-local generator
pub fn display_version(version: &str) -> String {
    display_version_with(version, &mut rand::rng())
}

/// Same as [`display_version`] with a caller-supplied generator
pub fn display_version_with<R: Rng + ?Sized>(version: &str, rng: &mut R) -> String {
    format!("{} build-{}", version, build_token(rng))
}

// A value in [0, 10) with exactly five decimals. Drawn as an integer so
// rounding can never produce "10.00000".
fn build_token<R: Rng + ?Sized>(rng: &mut R) -> String {
    let scale = 10u32.pow(TOKEN_DECIMALS);
    let value = rng.random_range(0..10 * scale);
    format!(
        "{}.{:0width$}",
        value / scale,
        value % scale,
        width = TOKEN_DECIMALS as usize
    )
}
