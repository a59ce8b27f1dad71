use std::fmt;
use std::str::FromStr;

use crate::error::HashError;

/// Length of a SHA-1 digest in bytes.
pub const DIGEST_LEN: usize = 20;

/// Length of a hex-rendered SHA-1 digest.
pub const HEX_LEN: usize = DIGEST_LEN * 2;

/// A SHA-1 digest.
///
/// Renders as 40 lowercase hex characters through [`fmt::Display`] and
/// [`fmt::LowerHex`], and parses from 40 hex characters of either case.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Sha1Digest([u8; DIGEST_LEN]);

impl Sha1Digest {
    pub const fn from_bytes(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    pub const fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    pub const fn into_bytes(self) -> [u8; DIGEST_LEN] {
        self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// The five big-endian state words `h0..h4`.
    pub fn words(&self) -> [u32; 5] {
        let mut words = [0_u32; 5];
        for (word, chunk) in words.iter_mut().zip(self.0.chunks_exact(4)) {
            *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        words
    }
}

impl From<[u8; DIGEST_LEN]> for Sha1Digest {
    fn from(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Sha1Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::LowerHex for Sha1Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl fmt::Display for Sha1Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl FromStr for Sha1Digest {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bytes = [0_u8; DIGEST_LEN];
        hex::decode_to_slice(s, &mut bytes)?;
        Ok(Self(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ABC: &str = "a9993e364706816aba3e25717850c26c9cd0d89d";

    #[test]
    fn display_matches_parsed_text() {
        let digest: Sha1Digest = ABC.parse().unwrap();
        assert_eq!(digest.to_string(), ABC);
        assert_eq!(format!("{digest:x}"), ABC);
        assert_eq!(digest.to_hex(), ABC);
    }

    #[test]
    fn uppercase_parses_to_lowercase() {
        let digest: Sha1Digest = ABC.to_uppercase().parse().unwrap();
        assert_eq!(digest.to_string(), ABC);
    }

    #[test]
    fn words_are_big_endian_state() {
        let digest: Sha1Digest = ABC.parse().unwrap();
        assert_eq!(
            digest.words(),
            [0xa999_3e36, 0x4706_816a, 0xba3e_2571, 0x7850_c26c, 0x9cd0_d89d]
        );
    }

    #[test]
    fn every_rendering_agrees_with_hex_encoding() {
        let bytes: [u8; DIGEST_LEN] = std::array::from_fn(|i| (i as u8).wrapping_mul(13));
        let digest = Sha1Digest::from(bytes);
        let expected = hex::encode(bytes);
        assert_eq!(format!("{digest:x}"), expected);
        assert_eq!(digest.to_string(), expected);
        assert_eq!(digest.to_hex(), expected);
    }

    #[test]
    fn zero_bytes_keep_padding() {
        let digest = Sha1Digest::from_bytes([0; DIGEST_LEN]);
        assert_eq!(digest.to_string(), "0".repeat(HEX_LEN));
    }

    #[test]
    fn rejects_wrong_length() {
        let err = "abcd".parse::<Sha1Digest>().unwrap_err();
        assert!(matches!(
            err,
            HashError::InvalidHex(hex::FromHexError::InvalidStringLength)
        ));
    }

    #[test]
    fn rejects_non_hex() {
        let bad = format!("{}zz", &ABC[..38]);
        let err = bad.parse::<Sha1Digest>().unwrap_err();
        assert!(matches!(
            err,
            HashError::InvalidHex(hex::FromHexError::InvalidHexCharacter { .. })
        ));
    }
}
