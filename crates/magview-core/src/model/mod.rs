//! Canonical domain types for the gateway console.

pub mod gateway;
pub mod tier;

pub use gateway::{GatewayDevice, GatewayStatus, LteGateway, PlatformInfo, SoftwarePackage};
pub use tier::Tier;
