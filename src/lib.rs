//! Platform-agnostic (`no_std`) driver for hardware watchdog timers.
//!
//! ## Overview
//!
//! A watchdog timer is a countdown peripheral that resets the system unless
//! it is periodically refreshed ("kicked"). This crate provides a small,
//! backend-independent driver for such peripherals: the
//! [`watchdog::Watchdog`] driver can be backed by any hardware which
//! implements the [`watchdog::Instance`] trait, so the same API can be used
//! across microcontroller families. Backends for the Nordic nRF5x family are
//! included.
//!
//! The crate also exposes the reset reason recorded by the hardware for the
//! most recent system reset, see the [`reset`] module.
//!
//! ## Choosing a device
//!
//! Depending on your target device, you need to enable the chip feature for
//! that device. Without a chip feature only the generic driver contract is
//! available.
//!
//! ## Feature Flags
#![doc = document_features::document_features!()]
#![deny(missing_docs)]
#![no_std]

#[cfg(test)]
extern crate std;

#[cfg(all(feature = "nrf52832", feature = "nrf52840"))]
compile_error!(
    "Exactly one chip must be enabled! Please enable one of the following features: nrf52832, nrf52840"
);

cfg_if::cfg_if! {
    if #[cfg(feature = "nrf52832")] {
        pub use nrf52832_pac as pac;
    } else if #[cfg(feature = "nrf52840")] {
        pub use nrf52840_pac as pac;
    }
}

#[cfg(any(feature = "nrf52832", feature = "nrf52840"))]
pub mod reset;
pub mod watchdog;
