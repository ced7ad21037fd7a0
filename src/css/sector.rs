// css/sector.rs from rustdvd (c) 2025 NinjaCheetah & Contributors
// https://github.com/NinjaCheetah/rustdvd
//
// Implements the sector descrambler. This path has its own LFSR0 tap schedule
// and output maps, distinct from the key-mangling cipher in crypto.rs; the
// two must never be folded into one parameterized routine, because a mixed-up
// tap schedule decrypts nothing while looking plausible.

use crate::css::tables::{CSS_TAB1, CSS_TAB2, CSS_TAB3, CSS_TAB4, CSS_TAB5};
use crate::css::{KEY_SIZE, SECTOR_HEADER_SIZE};

/// Descrambles a batch of sectors in place.
///
/// `sector_data` holds `blocks` sectors of `block_size` bytes each,
/// `cmi_data` one copyright management byte per sector, and `key_data` one
/// 5-byte title key per sector. Sectors whose CMI has bit 7 clear, whose key
/// is all zero, or whose PES scrambling-control field is clear are left
/// untouched; that is the normal "not encrypted" outcome, not an error. The
/// first 128 bytes of every sector are the MPEG-PS pack/system header and
/// are never scrambled.
pub fn decrypt_sector(
    sector_data: &mut [u8],
    cmi_data: &[u8],
    key_data: &[u8],
    blocks: u32,
    block_size: u32,
) {
    let blocks = blocks as usize;
    let block_size = block_size as usize;
    // Nothing on this stretch of the disc is scrambled at all.
    if cmi_data[..blocks].iter().all(|cmi| cmi & 0x80 == 0) {
        return;
    }
    if key_data[..blocks * KEY_SIZE].iter().all(|byte| *byte == 0) {
        return;
    }

    for block in 0..blocks {
        let key: [u8; 5] = key_data[block * KEY_SIZE..(block + 1) * KEY_SIZE]
            .try_into()
            .unwrap();
        if cmi_data[block] & 0x80 == 0 || key == [0u8; 5] {
            continue;
        }
        let sector = &mut sector_data[block * block_size..(block + 1) * block_size];
        if (sector[20] & 0x30) >> 4 == 0 {
            continue;
        }

        // Seed both registers from the title key XORed with the per-sector
        // salt bytes in the pack header.
        let mut lfsr1_lo: u32 = (key[0] ^ sector[0x54]) as u32 | 0x100;
        let mut lfsr1_hi: u32 = (key[1] ^ sector[0x55]) as u32;
        let mut lfsr0: u32 = ((key[2] as u32)
            | ((key[3] as u32) << 8)
            | ((key[4] as u32) << 16))
            ^ ((sector[0x56] as u32) | ((sector[0x57] as u32) << 8) | ((sector[0x58] as u32) << 16));
        let low3 = lfsr0 & 7;
        lfsr0 = lfsr0 * 2 + 8 - low3;

        let mut combined: u32 = 0;
        for i in SECTOR_HEADER_SIZE..block_size {
            let mut o_lfsr1 = CSS_TAB2[lfsr1_hi as usize] ^ CSS_TAB3[lfsr1_lo as usize];
            lfsr1_hi = lfsr1_lo >> 1;
            lfsr1_lo = ((lfsr1_lo & 1) << 8) ^ o_lfsr1 as u32;
            o_lfsr1 = CSS_TAB5[o_lfsr1 as usize];

            let o_lfsr0 = (((((((lfsr0 >> 3) ^ lfsr0) >> 1) ^ lfsr0) >> 8) ^ lfsr0) >> 5) as u8;
            // Rotate the feedback byte in twice so the next tap read sees a
            // fresh window while the register stays 32 bits wide.
            lfsr0 = (lfsr0 >> 8) | ((o_lfsr0 as u32) << 24);
            lfsr0 = (lfsr0 << 8) | o_lfsr0 as u32;
            let o_lfsr0 = CSS_TAB4[o_lfsr0 as usize];

            combined += o_lfsr0 as u32 + o_lfsr1 as u32;
            sector[i] = CSS_TAB1[sector[i] as usize] ^ combined as u8;
            combined >>= 8;
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::css::SECTOR_SIZE;

    // A deterministic scrambled sector with the PES scrambling-control bits
    // set and a recognizable fill.
    fn scrambled_sector() -> Vec<u8> {
        let mut sector: Vec<u8> = (0..SECTOR_SIZE)
            .map(|i| (i.wrapping_mul(11).wrapping_add(5)) as u8)
            .collect();
        sector[20] = 0x30;
        sector
    }

    const SECTOR_KEY: [u8; 5] = [0x51, 0x67, 0x67, 0xc5, 0xe0];

    #[test]
    fn test_decrypt_sector_known_vector() {
        let mut sector = scrambled_sector();
        let expected_header = sector[..128].to_vec();
        decrypt_sector(&mut sector, &[0xc0], &SECTOR_KEY, 1, 2048);
        assert_eq!(&sector[..128], &expected_header[..]);
        assert_eq!(
            &sector[128..144],
            &[
                0x2c, 0x8f, 0x58, 0xfa, 0xc6, 0x55, 0xac, 0x23, 0x49, 0xa5, 0x35, 0x63, 0x41,
                0xe2, 0x98, 0xcf
            ]
        );
        assert_eq!(
            &sector[1020..1028],
            &[0xfe, 0x7b, 0x2e, 0x72, 0xb8, 0xff, 0xf2, 0xac]
        );
        assert_eq!(
            &sector[2040..2048],
            &[0x49, 0xdb, 0x48, 0xb0, 0xf4, 0x19, 0x94, 0xc1]
        );
    }

    #[test]
    fn test_decrypt_sector_cmi_clear_is_passthrough() {
        let mut sector = scrambled_sector();
        let original = sector.clone();
        decrypt_sector(&mut sector, &[0x00], &SECTOR_KEY, 1, 2048);
        assert_eq!(sector, original);
    }

    #[test]
    fn test_decrypt_sector_zero_key_is_passthrough() {
        let mut sector = scrambled_sector();
        let original = sector.clone();
        decrypt_sector(&mut sector, &[0xc0], &[0u8; 5], 1, 2048);
        assert_eq!(sector, original);
    }

    #[test]
    fn test_decrypt_sector_pes_clear_is_passthrough() {
        let mut sector = scrambled_sector();
        sector[20] = 0x00;
        let original = sector.clone();
        decrypt_sector(&mut sector, &[0xc0], &SECTOR_KEY, 1, 2048);
        assert_eq!(sector, original);
    }

    #[test]
    fn test_decrypt_sector_mixed_batch() {
        let clear = scrambled_sector();
        let mut batch = scrambled_sector();
        batch.extend_from_slice(&clear);
        let mut keys = SECTOR_KEY.to_vec();
        keys.extend_from_slice(&SECTOR_KEY);

        decrypt_sector(&mut batch, &[0xc0, 0x00], &keys, 2, 2048);
        // The first sector descrambles, the second rides through untouched.
        assert_eq!(
            &batch[128..136],
            &[0x2c, 0x8f, 0x58, 0xfa, 0xc6, 0x55, 0xac, 0x23]
        );
        assert_eq!(&batch[2048..], &clear[..]);
    }
}
