// drive/mod.rs from rustdvd (c) 2025 NinjaCheetah & Contributors
// https://github.com/NinjaCheetah/rustdvd
//
// Root for the drive-side modules. The transport layer that actually issues
// the SCSI/MMC commands lives elsewhere; what lives here are the container
// shapes for its already-fetched response buffers.

pub mod region;
