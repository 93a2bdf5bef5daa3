//! # Reset reason (RESETREAS)
//!
//! ## Overview
//! The power subsystem records what triggered the most recent system reset
//! in the `RESETREAS` register. The register persists through system resets:
//! unless it is cleared with [`clear_reset_reason`] before the next reset,
//! several reasons accumulate and the classification reports
//! [`ResetReason::Multiple`].
//!
//! None of these functions are idempotent; the register may be cleared
//! between calls, changing the returned value.

use crate::pac::POWER;

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct ResetReasonBits: u32 {
        /// Reset pin asserted.
        const ResetPin       = 1 << 0;
        /// Watchdog timeout.
        const Watchdog       = 1 << 1;
        /// Soft reset request (AIRCR.SYSRESETREQ).
        const SoftwareRequest = 1 << 2;
        /// CPU lockup.
        const Lockup         = 1 << 3;
        /// Wake up from System OFF by GPIO DETECT signal.
        const SystemOff      = 1 << 16;
        /// Wake up from System OFF by LPCOMP ANADETECT signal.
        const LpComparator   = 1 << 17;
        /// Wake up from System OFF by entering debug interface mode.
        const DebugInterface = 1 << 18;
        /// Wake up from System OFF by NFC field detection.
        const NfcField       = 1 << 19;
        /// Wake up from System OFF by VBUS detection.
        #[cfg(feature = "nrf52840")]
        const VbusDetect     = 1 << 20;
    }
}

/// Platform-independent classification of the most recent system reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ResetReason {
    /// The reset pin was asserted.
    Pin,
    /// A watchdog timeout reset the system.
    Watchdog,
    /// Software requested the reset.
    Software,
    /// The CPU locked up.
    Lockup,
    /// Woken from System OFF by a GPIO DETECT signal.
    SystemOff,
    /// Woken from System OFF by the low-power comparator.
    LpComparator,
    /// Woken from System OFF by entering debug interface mode.
    DebugInterface,
    /// Woken from System OFF by NFC field detection.
    NfcField,
    /// Woken from System OFF by VBUS detection.
    #[cfg(feature = "nrf52840")]
    VbusDetect,
    /// More than one reset reason is recorded in the register.
    Multiple,
    /// No reset reason is recorded.
    Unknown,
}

/// Classify the raw register contents.
fn classify(raw: u32) -> ResetReason {
    let bits = ResetReasonBits::from_bits_retain(raw);

    if bits == ResetReasonBits::ResetPin {
        ResetReason::Pin
    } else if bits == ResetReasonBits::Watchdog {
        ResetReason::Watchdog
    } else if bits == ResetReasonBits::SoftwareRequest {
        ResetReason::Software
    } else if bits == ResetReasonBits::Lockup {
        ResetReason::Lockup
    } else if bits == ResetReasonBits::SystemOff {
        ResetReason::SystemOff
    } else if bits == ResetReasonBits::LpComparator {
        ResetReason::LpComparator
    } else if bits == ResetReasonBits::DebugInterface {
        ResetReason::DebugInterface
    } else if bits == ResetReasonBits::NfcField {
        ResetReason::NfcField
    } else {
        #[cfg(feature = "nrf52840")]
        if bits == ResetReasonBits::VbusDetect {
            return ResetReason::VbusDetect;
        }

        if raw != 0 {
            // Reason not matched and not zero, multiple reasons are set.
            ResetReason::Multiple
        } else {
            ResetReason::Unknown
        }
    }
}

/// Return the reason for the last system reset.
pub fn reset_reason() -> ResetReason {
    classify(reset_reason_raw())
}

/// Return the raw contents of the reset reason register.
pub fn reset_reason_raw() -> u32 {
    let power = unsafe { &*POWER::ptr() };

    power.resetreas.read().bits()
}

/// Clear the recorded reset reasons.
///
/// The register persists between system resets on this hardware, so it
/// should be cleared once the reason has been read. Failing to do so makes
/// the cause of subsequent resets ambiguous.
pub fn clear_reset_reason() {
    let power = unsafe { &*POWER::ptr() };

    let reason = power.resetreas.read().bits();

    // The register is write-one-to-clear.
    power.resetreas.write(|w| unsafe { w.bits(reason) });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_reasons_map_to_their_variant() {
        assert_eq!(classify(1 << 0), ResetReason::Pin);
        assert_eq!(classify(1 << 1), ResetReason::Watchdog);
        assert_eq!(classify(1 << 2), ResetReason::Software);
        assert_eq!(classify(1 << 3), ResetReason::Lockup);
        assert_eq!(classify(1 << 16), ResetReason::SystemOff);
        assert_eq!(classify(1 << 17), ResetReason::LpComparator);
        assert_eq!(classify(1 << 18), ResetReason::DebugInterface);
        assert_eq!(classify(1 << 19), ResetReason::NfcField);
        #[cfg(feature = "nrf52840")]
        assert_eq!(classify(1 << 20), ResetReason::VbusDetect);
    }

    #[test]
    fn cleared_register_reads_unknown() {
        assert_eq!(classify(0), ResetReason::Unknown);
    }

    #[test]
    fn accumulated_reasons_read_multiple() {
        // Watchdog fired and the register was not cleared before the next
        // pin reset.
        assert_eq!(classify((1 << 1) | (1 << 0)), ResetReason::Multiple);
        assert_eq!(classify((1 << 2) | (1 << 16)), ResetReason::Multiple);
    }

    #[test]
    fn unrecognized_bits_read_multiple() {
        assert_eq!(classify(1 << 30), ResetReason::Multiple);
    }
}
