// lib.rs from rustdvd (c) 2025 NinjaCheetah & Contributors
// https://github.com/NinjaCheetah/rustdvd
//
// Root level module that imports the feature modules.

pub mod css;
pub mod drive;
