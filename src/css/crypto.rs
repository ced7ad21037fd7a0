// css/crypto.rs from rustdvd (c) 2025 NinjaCheetah & Contributors
// https://github.com/NinjaCheetah/rustdvd
//
// Implements the CSS ciphers: the authentication cipher used during the
// drive/host handshake, the key-mangling cipher used to peel disc and title
// keys, and the player-key trial that recovers a disc key from its encrypted
// key block.

use crate::css::playerkeys::PLAYER_KEYS;
use crate::css::tables::{
    CRYPT_TAB0, CRYPT_TAB1, CRYPT_TAB2, CRYPT_TAB3, CSS_TAB1, CSS_TAB2, CSS_TAB3, CSS_TAB4,
    PERM_CHALLENGE, PERM_VARIANT, SECRET, VARIANTS,
};

/// Which key the authentication handshake is deriving. The key type selects
/// the challenge permutation row and, for the bus key types, a remapping of
/// the variant index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyType {
    Authentication = 0,
    Bus1 = 1,
    Bus2 = 2,
}

/// Offset of the self-encrypted verification slot in the disc key block.
const VERIFIER_OFFSET: usize = 0;
/// Number of 5-byte slots in the encrypted disc key block.
const DISC_KEY_SLOTS: usize = 409;

/// Runs the authentication cipher over a 10-byte challenge, producing the
/// 5-byte response key for the given key type and variant.
///
/// The cipher permutes the challenge, seeds a 25-bit and a 17-bit LFSR from
/// its upper half mixed with the secret, clocks them for 240 steps to fill a
/// 30-byte bitstream, then runs six substitution rounds over the lower half.
/// Callers must pass a variant below 32.
pub fn encrypt_key(key_type: KeyType, variant: u32, challenge: &[u8; 10]) -> [u8; 5] {
    let mut scratch = [0u8; 10];
    for i in 0..10 {
        scratch[i] = challenge[PERM_CHALLENGE[key_type as usize][i] as usize];
    }
    let css_variant = match key_type {
        KeyType::Authentication => variant as usize,
        _ => PERM_VARIANT[key_type as usize - 1][variant as usize] as usize,
    };

    // The tweak byte that makes this one of 32 variations on the cipher.
    let cse = VARIANTS[css_variant] ^ CRYPT_TAB2[css_variant];

    let mut tmp = [0u8; 5];
    for i in 0..5 {
        tmp[i] = scratch[5 + i] ^ SECRET[i] ^ CRYPT_TAB2[i];
    }

    // The |8 term and the preserved low three bits keep the register out of
    // the all-zero state and fold the seed into the tap window.
    let mut lfsr0: u32 = ((tmp[0] as u32) << 17)
        | ((tmp[1] as u32) << 9)
        | (((tmp[2] & !7) as u32) << 1)
        | 8
        | (tmp[2] & 7) as u32;
    let mut lfsr1: u32 = ((tmp[3] as u32) << 9) | 0x100 | tmp[4] as u32;

    // Clock both registers in parallel, eight bits per output byte, filling
    // the bitstream from the top down. The two feedback bits are inverted
    // and summed with a running carry.
    let mut bits = [0u8; 30];
    let mut carry = 0u8;
    for index in (0..30).rev() {
        let mut val = 0u8;
        for bit in 0..8 {
            let o_lfsr0 = ((lfsr0 >> 24) ^ (lfsr0 >> 21) ^ (lfsr0 >> 20) ^ (lfsr0 >> 12)) & 1;
            lfsr0 = (lfsr0 << 1) | o_lfsr0;
            let o_lfsr1 = ((lfsr1 >> 16) ^ (lfsr1 >> 2)) & 1;
            lfsr1 = (lfsr1 << 1) | o_lfsr1;
            let combined = (o_lfsr1 == 0) as u8 + carry + (o_lfsr0 == 0) as u8;
            carry = (combined >> 1) & 1;
            val |= (combined & 1) << bit;
        }
        bits[index] = val;
    }

    // Six substitution rounds over the low half of the scratch buffer, one
    // 5-byte window of the bitstream each. Rounds 2 and 3 push the bytes
    // through an extra substitution; every round but the last folds its top
    // byte back into the bottom before handing the buffer to the next.
    let mut cur: [u8; 5] = scratch[0..5].try_into().unwrap();
    let mut out = [0u8; 5];
    for (round, offset) in [25usize, 20, 15, 10, 5, 0].into_iter().enumerate() {
        let mut term = 0u8;
        for i in (0..5).rev() {
            let mut index = (bits[offset + i] ^ cur[i]) as usize;
            index = (CRYPT_TAB1[index] ^ !CRYPT_TAB2[index] ^ cse) as usize;
            out[i] = if round == 2 || round == 3 {
                let index = (CRYPT_TAB2[index] ^ CRYPT_TAB3[index] ^ term) as usize;
                CRYPT_TAB0[index] ^ CRYPT_TAB2[index]
            } else {
                CRYPT_TAB2[index] ^ CRYPT_TAB3[index] ^ term
            };
            term = cur[i];
        }
        if round < 5 {
            out[4] ^= out[0];
            std::mem::swap(&mut cur, &mut out);
        }
    }
    out
}

// Generate the 5 keystream bytes of the key-mangling cipher. The 17-bit
// register is kept split into its high 8 and low 9 bits; the 25-bit register
// is loaded through CSS_TAB4 with its bytes reversed so that it feeds from
// the high end.
fn key_keystream(invert: u8, crypto_key: &[u8; 5]) -> [u8; 5] {
    let mut lfsr1_lo: u32 = crypto_key[0] as u32 | 0x100;
    let mut lfsr1_hi: u32 = crypto_key[1] as u32;

    let lfsr0_raw: u32 = (((crypto_key[4] as u32) << 17)
        | ((crypto_key[3] as u32) << 9)
        | ((crypto_key[2] as u32) << 1))
        + 8
        - (crypto_key[2] & 7) as u32;
    let mut lfsr0: u32 = ((CSS_TAB4[(lfsr0_raw & 0xff) as usize] as u32) << 24)
        | ((CSS_TAB4[((lfsr0_raw >> 8) & 0xff) as usize] as u32) << 16)
        | ((CSS_TAB4[((lfsr0_raw >> 16) & 0xff) as usize] as u32) << 8)
        | CSS_TAB4[((lfsr0_raw >> 24) & 0xff) as usize] as u32;

    let mut keystream = [0u8; 5];
    let mut combined: u32 = 0;
    for k in keystream.iter_mut() {
        let mut o_lfsr1 = CSS_TAB2[lfsr1_hi as usize] ^ CSS_TAB3[lfsr1_lo as usize];
        lfsr1_hi = lfsr1_lo >> 1;
        lfsr1_lo = ((lfsr1_lo & 1) << 8) ^ o_lfsr1 as u32;
        o_lfsr1 = CSS_TAB4[o_lfsr1 as usize];

        let o_lfsr0 = ((((((lfsr0 >> 8) ^ lfsr0) >> 1) ^ lfsr0) >> 3) ^ lfsr0) >> 7;
        let o_lfsr0 = o_lfsr0 as u8;
        lfsr0 = (lfsr0 >> 8) | ((o_lfsr0 as u32) << 24);

        combined += (o_lfsr0 ^ invert) as u32 + o_lfsr1 as u32;
        *k = combined as u8;
        combined >>= 8;
    }
    keystream
}

/// Decrypts one 5-byte key with the key-mangling cipher. `invert` selects
/// the keystream polarity: the disc key trial runs with `0x00`, the title
/// key path with `0xff`.
pub fn decrypt_key(invert: u8, crypto_key: &[u8; 5], encrypted_key: &[u8; 5]) -> [u8; 5] {
    let k = key_keystream(invert, crypto_key);
    let e = encrypted_key;

    // Two CBC-style passes back to front through CSS_TAB1. The first pass
    // chains on the ciphertext, the second on its own output; d[0] of the
    // first pass wraps around onto the freshly written d[4].
    let mut d = [0u8; 5];
    d[4] = k[4] ^ CSS_TAB1[e[4] as usize] ^ e[3];
    d[3] = k[3] ^ CSS_TAB1[e[3] as usize] ^ e[2];
    d[2] = k[2] ^ CSS_TAB1[e[2] as usize] ^ e[1];
    d[1] = k[1] ^ CSS_TAB1[e[1] as usize] ^ e[0];
    d[0] = k[0] ^ CSS_TAB1[e[0] as usize] ^ d[4];

    d[4] = k[4] ^ CSS_TAB1[d[4] as usize] ^ d[3];
    d[3] = k[3] ^ CSS_TAB1[d[3] as usize] ^ d[2];
    d[2] = k[2] ^ CSS_TAB1[d[2] as usize] ^ d[1];
    d[1] = k[1] ^ CSS_TAB1[d[1] as usize] ^ d[0];
    d[0] = k[0] ^ CSS_TAB1[d[0] as usize];
    d
}

/// Decrypts a title key. This is the key-mangling cipher under another name.
pub fn decrypt_title_key(invert: u8, crypto_key: &[u8; 5], encrypted_key: &[u8; 5]) -> [u8; 5] {
    decrypt_key(invert, crypto_key, encrypted_key)
}

/// Recovers the disc key from the 2048-byte encrypted key block by trying
/// every known player key against every slot.
///
/// Slot 0 holds the disc key encrypted with itself, so a candidate that
/// decrypts the verifier slot back to itself is the disc key. Returns `None`
/// once all player keys are exhausted.
pub fn decrypt_disc_key(encrypted_keys: &[u8; 2048]) -> Option<[u8; 5]> {
    let verifier: [u8; 5] = encrypted_keys[VERIFIER_OFFSET..VERIFIER_OFFSET + 5]
        .try_into()
        .unwrap();
    for player_key in PLAYER_KEYS.iter() {
        for slot in 1..DISC_KEY_SLOTS {
            let encrypted: [u8; 5] = encrypted_keys[5 * slot..5 * slot + 5].try_into().unwrap();
            let candidate = decrypt_key(0, player_key, &encrypted);
            let verify = decrypt_key(0, &candidate, &verifier);
            if candidate == verify {
                return Some(candidate);
            }
        }
    }
    None
}

#[cfg(test)]
mod test {
    use super::*;

    // Inverse of decrypt_key with respect to the encrypted argument, used to
    // build encrypted fixtures. CSS_TAB1 is a bijection, so both mixing
    // passes unwind through its inverse.
    fn encrypt_key_fixture(invert: u8, crypto_key: &[u8; 5], plain: &[u8; 5]) -> [u8; 5] {
        let mut tab1_inv = [0u8; 256];
        for (i, v) in CSS_TAB1.iter().enumerate() {
            tab1_inv[*v as usize] = i as u8;
        }
        let k = key_keystream(invert, crypto_key);

        let mut d = [0u8; 5];
        d[0] = tab1_inv[(plain[0] ^ k[0]) as usize];
        d[1] = tab1_inv[(plain[1] ^ k[1] ^ d[0]) as usize];
        d[2] = tab1_inv[(plain[2] ^ k[2] ^ d[1]) as usize];
        d[3] = tab1_inv[(plain[3] ^ k[3] ^ d[2]) as usize];
        d[4] = tab1_inv[(plain[4] ^ k[4] ^ d[3]) as usize];

        let mut e = [0u8; 5];
        e[0] = tab1_inv[(d[0] ^ k[0] ^ d[4]) as usize];
        e[1] = tab1_inv[(d[1] ^ k[1] ^ e[0]) as usize];
        e[2] = tab1_inv[(d[2] ^ k[2] ^ e[1]) as usize];
        e[3] = tab1_inv[(d[3] ^ k[3] ^ e[2]) as usize];
        e[4] = tab1_inv[(d[4] ^ k[4] ^ e[3]) as usize];
        e
    }

    #[test]
    fn test_encrypt_key_null_challenge() {
        let key = encrypt_key(KeyType::Authentication, 0, &[0u8; 10]);
        assert_eq!(key, [0x0c, 0x0f, 0xd0, 0xe1, 0xde]);
    }

    #[test]
    fn test_encrypt_key_bus_key_types() {
        let challenge = [0x10, 0x32, 0x54, 0x76, 0x98, 0xba, 0xdc, 0xfe, 0x01, 0x23];
        assert_eq!(
            encrypt_key(KeyType::Bus1, 5, &challenge),
            [0x06, 0xac, 0xef, 0xeb, 0x72]
        );
        assert_eq!(
            encrypt_key(KeyType::Bus2, 17, &challenge),
            [0xd5, 0xcc, 0xe7, 0x9d, 0xb9]
        );
    }

    #[test]
    fn test_encrypt_key_is_deterministic() {
        let challenge = [0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99];
        for variant in 0..32 {
            assert_eq!(
                encrypt_key(KeyType::Bus2, variant, &challenge),
                encrypt_key(KeyType::Bus2, variant, &challenge)
            );
        }
    }

    #[test]
    fn test_decrypt_key_known_vectors() {
        let key = [0x01, 0xaf, 0xe3, 0x12, 0x80];
        let encrypted = [0x56, 0x0d, 0xf3, 0x44, 0x9a];
        assert_eq!(
            decrypt_key(0x00, &key, &encrypted),
            [0x8c, 0x03, 0x77, 0x1c, 0xaf]
        );
        assert_eq!(
            decrypt_key(0xff, &key, &encrypted),
            [0xa1, 0xbd, 0x1b, 0x81, 0xc8]
        );
    }

    #[test]
    fn test_decrypt_key_invert_changes_keystream() {
        let key = [0x12, 0x34, 0x56, 0x78, 0x9a];
        let encrypted = [0xde, 0xad, 0xbe, 0xef, 0x42];
        assert_ne!(
            decrypt_key(0x00, &key, &encrypted),
            decrypt_key(0xff, &key, &encrypted)
        );
    }

    #[test]
    fn test_decrypt_title_key_is_an_alias() {
        let key = [0x51, 0x67, 0x67, 0xc5, 0xe0];
        let encrypted = [0x0a, 0x1b, 0x2c, 0x3d, 0x4e];
        assert_eq!(
            decrypt_title_key(0xff, &key, &encrypted),
            decrypt_key(0xff, &key, &encrypted)
        );
    }

    #[test]
    fn test_encrypt_key_fixture_round_trips() {
        let key = [0x45, 0xed, 0x28, 0xeb, 0xd3];
        for invert in [0x00, 0xff] {
            for plain in [[0x01, 0x02, 0x03, 0x04, 0x05], [0xff, 0x00, 0xaa, 0x55, 0x7f]] {
                let encrypted = encrypt_key_fixture(invert, &key, &plain);
                assert_eq!(decrypt_key(invert, &key, &encrypted), plain);
            }
        }
    }

    #[test]
    fn test_decrypt_disc_key_recovers_planted_key() {
        let disc_key = [0x9f, 0x38, 0x6b, 0xd0, 0x4c];
        let mut block = [0u8; 2048];
        for (i, byte) in block.iter_mut().enumerate() {
            *byte = (i.wrapping_mul(7).wrapping_add(3)) as u8;
        }
        // Slot 0 is the disc key encrypted with itself; slot 1 is the disc
        // key encrypted under the first player key.
        block[0..5].copy_from_slice(&encrypt_key_fixture(0, &disc_key, &disc_key));
        let player_key = PLAYER_KEYS[0];
        block[5..10].copy_from_slice(&encrypt_key_fixture(0, &player_key, &disc_key));

        let recovered = decrypt_disc_key(&block);
        assert_eq!(recovered, Some(disc_key));
        // Self-verification: the recovered key decrypts the verifier slot
        // back to itself.
        let verifier: [u8; 5] = block[0..5].try_into().unwrap();
        assert_eq!(decrypt_key(0, &disc_key, &verifier), disc_key);
    }

    #[test]
    fn test_decrypt_disc_key_exhausts_to_none() {
        let mut block = [0u8; 2048];
        for (i, byte) in block.iter_mut().enumerate() {
            *byte = (i.wrapping_mul(7).wrapping_add(3)) as u8;
        }
        assert_eq!(decrypt_disc_key(&block), None);
    }
}
