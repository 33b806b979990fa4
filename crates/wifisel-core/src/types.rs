//! Core types for candidate arbitration
//!
//! This module defines the fundamental value types used throughout the crate,
//! using newtype patterns for semantic validation and type safety.

use core::fmt;
use core::ops::Deref;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use alloc::string::ToString;
use alloc::vec::Vec;

use crate::errors::MacAddressError;

// ----------------------------------------------------------------------------
// Hardware Address
// ----------------------------------------------------------------------------

/// 48-bit IEEE 802 hardware address, used as the BSSID of an access point
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MacAddress([u8; 6]);

impl MacAddress {
    /// Create a new MacAddress from 6 bytes
    pub const fn new(bytes: [u8; 6]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes
    pub fn as_bytes(&self) -> &[u8; 6] {
        &self.0
    }

    /// Whether the group bit is set (multicast or broadcast)
    pub fn is_multicast(&self) -> bool {
        self.0[0] & 0x01 != 0
    }

    /// Whether the locally administered bit is set (e.g. randomized addresses)
    pub fn is_locally_administered(&self) -> bool {
        self.0[0] & 0x02 != 0
    }

    /// Broadcast address (all 0xFF)
    pub const BROADCAST: Self = Self([0xFF; 6]);

    /// All-zero address, reported by drivers for unknown BSSIDs
    pub const ZERO: Self = Self([0x00; 6]);
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(
            f,
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            a, b, c, d, e, g
        )
    }
}

impl FromStr for MacAddress {
    type Err = MacAddressError;

    /// Parse `aa:bb:cc:dd:ee:ff` (or `-` separated), case-insensitive
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(MacAddressError::Empty);
        }

        let separator = if trimmed.contains('-') { '-' } else { ':' };
        let octets: Vec<&str> = trimmed.split(separator).collect();
        if octets.len() != 6 {
            return Err(MacAddressError::WrongOctetCount {
                count: octets.len(),
            });
        }

        let mut bytes = [0u8; 6];
        for (slot, octet) in bytes.iter_mut().zip(octets.iter()) {
            if octet.len() != 2 {
                return Err(MacAddressError::InvalidOctet {
                    octet: octet.to_string(),
                });
            }
            let mut decoded = [0u8; 1];
            hex::decode_to_slice(octet, &mut decoded).map_err(|_| {
                MacAddressError::InvalidOctet {
                    octet: octet.to_string(),
                }
            })?;
            *slot = decoded[0];
        }

        Ok(Self(bytes))
    }
}

impl Deref for MacAddress {
    type Target = [u8; 6];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

// ----------------------------------------------------------------------------
// Network Configuration Identifier
// ----------------------------------------------------------------------------

/// Identifier of a saved network configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NetworkId(i32);

impl NetworkId {
    /// Create a new network id
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Get the raw id
    pub fn as_i32(&self) -> i32 {
        self.0
    }

    /// Whether this refers to a saved configuration
    pub fn is_valid(&self) -> bool {
        self.0 != Self::INVALID.0
    }

    /// Sentinel for a configuration that has not been saved
    pub const INVALID: Self = Self(-1);
}

impl Default for NetworkId {
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ----------------------------------------------------------------------------
// Timestamp
// ----------------------------------------------------------------------------

/// Millisecond timestamp since Unix epoch
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(u64);

impl Timestamp {
    /// Create a new timestamp
    pub const fn new(millis: u64) -> Self {
        Self(millis)
    }

    /// Get current timestamp
    pub fn now() -> Self {
        cfg_if::cfg_if! {
            if #[cfg(feature = "std")] {
                use std::time::{SystemTime, UNIX_EPOCH};
                let duration = SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .unwrap_or_default();
                Self(duration.as_millis() as u64)
            } else {
                // No clock without std; callers should supply scan times explicitly
                Self(0)
            }
        }
    }

    /// Get the raw milliseconds
    pub fn as_millis(&self) -> u64 {
        self.0
    }
}
