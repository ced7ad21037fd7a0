// drive/region.rs from rustdvd (c) 2025 NinjaCheetah & Contributors
// https://github.com/NinjaCheetah/rustdvd
//
// Implements the structures for the drive's region playback control state and
// the disc's lead-in copyright descriptor, plus the compatibility check
// between them.

use byteorder::{BigEndian, ReadBytesExt};
use std::fmt;
use std::io::{Cursor, Read};
use thiserror::Error;

/// Size in bytes of the REPORT KEY RPC state response.
pub const RPC_STATE_SIZE: usize = 8;
/// Size in bytes of the READ DVD STRUCTURE copyright response.
pub const LEAD_IN_COPYRIGHT_SIZE: usize = 8;

#[derive(Debug, Error)]
pub enum DriveError {
    #[error("response data is {size} bytes but must be exactly {expected}")]
    InvalidSize { size: usize, expected: usize },
    #[error("response data is not in a valid format")]
    IO(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RpcStatus {
    /// No region has ever been set on the drive.
    None,
    /// A region is set and changes remain.
    Set,
    /// One user change remains.
    LastChance,
    /// The region is locked permanently.
    Permanent,
}

impl fmt::Display for RpcStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RpcStatus::None => write!(f, "None"),
            RpcStatus::Set => write!(f, "Set"),
            RpcStatus::LastChance => write!(f, "LastChance"),
            RpcStatus::Permanent => write!(f, "Permanent"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyrightProtection {
    None,
    Css,
    Cprm,
    Aacs,
    Unknown(u8),
}

#[derive(Debug)]
/// The drive's region playback control state, as reported by REPORT KEY.
/// A set bit in the region mask means playback for that region is blocked.
pub struct RpcState {
    pub data_length: u16,
    pub status: RpcStatus,
    pub vendor_resets: u8,
    pub user_changes: u8,
    pub region_mask: u8,
    pub rpc_scheme: u8,
}

#[derive(Debug)]
/// The copyright descriptor from the disc lead-in, as reported by READ DVD
/// STRUCTURE. A set bit in the region information marks the disc for that
/// region.
pub struct LeadInCopyright {
    pub data_length: u16,
    pub protection: CopyrightProtection,
    pub region_information: u8,
}

impl RpcState {
    /// Creates an RpcState from the raw 8-byte RPC state response.
    pub fn from_bytes(data: &[u8]) -> Result<Self, DriveError> {
        if data.len() != RPC_STATE_SIZE {
            return Err(DriveError::InvalidSize {
                size: data.len(),
                expected: RPC_STATE_SIZE,
            });
        }
        let mut buf = Cursor::new(data);
        let data_length = buf.read_u16::<BigEndian>()?;
        let mut reserved = [0u8; 2];
        buf.read_exact(&mut reserved)?;
        // Type code in bits 7-6, vendor resets available in 5-3, user
        // controlled changes available in 2-0.
        let packed = buf.read_u8()?;
        let status = match packed >> 6 {
            0 => RpcStatus::None,
            1 => RpcStatus::Set,
            2 => RpcStatus::LastChance,
            _ => RpcStatus::Permanent,
        };
        let vendor_resets = (packed >> 3) & 0x07;
        let user_changes = packed & 0x07;
        let region_mask = buf.read_u8()?;
        let rpc_scheme = buf.read_u8()?;
        Ok(RpcState {
            data_length,
            status,
            vendor_resets,
            user_changes,
            region_mask,
            rpc_scheme,
        })
    }
}

impl LeadInCopyright {
    /// Creates a LeadInCopyright from the raw 8-byte copyright structure
    /// response.
    pub fn from_bytes(data: &[u8]) -> Result<Self, DriveError> {
        if data.len() != LEAD_IN_COPYRIGHT_SIZE {
            return Err(DriveError::InvalidSize {
                size: data.len(),
                expected: LEAD_IN_COPYRIGHT_SIZE,
            });
        }
        let mut buf = Cursor::new(data);
        let data_length = buf.read_u16::<BigEndian>()?;
        let mut reserved = [0u8; 2];
        buf.read_exact(&mut reserved)?;
        let protection = match buf.read_u8()? {
            0 => CopyrightProtection::None,
            1 => CopyrightProtection::Css,
            2 => CopyrightProtection::Cprm,
            3 => CopyrightProtection::Aacs,
            other => CopyrightProtection::Unknown(other),
        };
        let region_information = buf.read_u8()?;
        Ok(LeadInCopyright {
            data_length,
            protection,
            region_information,
        })
    }
}

/// Gets whether the drive is allowed to play the disc.
///
/// A disc marked for all regions or none (0x00 or 0xFF) always passes.
/// Otherwise the check passes when at least one region is both marked on the
/// disc and not blocked by the drive.
pub fn check_region(rpc: &RpcState, copyright: &LeadInCopyright) -> bool {
    if copyright.region_information == 0x00 || copyright.region_information == 0xff {
        return true;
    }
    !rpc.region_mask & copyright.region_information != 0
}

#[cfg(test)]
mod test {
    use super::*;

    fn rpc_with_mask(region_mask: u8) -> RpcState {
        RpcState {
            data_length: 0x0006,
            status: RpcStatus::Set,
            vendor_resets: 4,
            user_changes: 5,
            region_mask,
            rpc_scheme: 1,
        }
    }

    fn copyright_with_region(region_information: u8) -> LeadInCopyright {
        LeadInCopyright {
            data_length: 0x0006,
            protection: CopyrightProtection::Css,
            region_information,
        }
    }

    #[test]
    fn test_check_region() {
        // Drive set to region 1, disc marked region 1.
        assert!(check_region(&rpc_with_mask(0xfe), &copyright_with_region(0x01)));
        // Drive blocks everything.
        assert!(!check_region(&rpc_with_mask(0xff), &copyright_with_region(0x01)));
        // Region-free markings always pass.
        assert!(check_region(&rpc_with_mask(0x00), &copyright_with_region(0x00)));
        assert!(check_region(&rpc_with_mask(0xff), &copyright_with_region(0xff)));
        // Disjoint drive region and disc marking.
        assert!(!check_region(&rpc_with_mask(0xfe), &copyright_with_region(0x02)));
    }

    #[test]
    fn test_rpc_state_from_bytes() {
        // Type code Set, 4 vendor resets, 5 user changes, region 1 drive,
        // RPC Phase II.
        let data = [0x00, 0x06, 0x00, 0x00, 0x65, 0xfe, 0x01, 0x00];
        let rpc = RpcState::from_bytes(&data).unwrap();
        assert_eq!(rpc.data_length, 0x0006);
        assert_eq!(rpc.status, RpcStatus::Set);
        assert_eq!(rpc.vendor_resets, 4);
        assert_eq!(rpc.user_changes, 5);
        assert_eq!(rpc.region_mask, 0xfe);
        assert_eq!(rpc.rpc_scheme, 0x01);
    }

    #[test]
    fn test_rpc_state_rejects_bad_size() {
        assert!(matches!(
            RpcState::from_bytes(&[0u8; 4]),
            Err(DriveError::InvalidSize { size: 4, expected: 8 })
        ));
    }

    #[test]
    fn test_lead_in_copyright_from_bytes() {
        let data = [0x00, 0x06, 0x00, 0x00, 0x01, 0xfe, 0x00, 0x00];
        let copyright = LeadInCopyright::from_bytes(&data).unwrap();
        assert_eq!(copyright.data_length, 0x0006);
        assert_eq!(copyright.protection, CopyrightProtection::Css);
        assert_eq!(copyright.region_information, 0xfe);
    }

    #[test]
    fn test_lead_in_copyright_unknown_protection() {
        let data = [0x00, 0x06, 0x00, 0x00, 0x10, 0x00, 0x00, 0x00];
        let copyright = LeadInCopyright::from_bytes(&data).unwrap();
        assert_eq!(copyright.protection, CopyrightProtection::Unknown(0x10));
    }
}
