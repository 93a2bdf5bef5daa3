//! # Nordic nRF5x watchdog backend
//!
//! ## Overview
//! The nRF5x WDT is a 32-bit countdown driven by the 32.768 kHz low-frequency
//! clock. Once started, neither the reload value nor the running state can be
//! changed by software; the countdown continues through sleep (as configured
//! here) and only a kick or a system reset prevents expiry. The backend
//! therefore declares [`Features::update_config`] and
//! [`Features::disable_watchdog`] as `false`.
//!
//! Two LFCLK ticks after the timeout event fires the system is reset by
//! hardware. The timeout interrupt is enabled on start so a handler for the
//! `WDT` interrupt can acknowledge the event; the handler does not need to do
//! anything else, and no software action can avert the reset at that point.

use crate::{
    pac::WDT,
    watchdog::{Features, Instance},
};

/// Frequency of the low-frequency clock driving the watchdog counter.
const LFCLK_HZ: u32 = 32_768;

/// nRF5x watchdog peripheral backend.
pub struct Wdt {
    wdt: WDT,
}

impl Wdt {
    /// Construct a new instance of [`Wdt`].
    pub fn new(wdt: WDT) -> Self {
        Self { wdt }
    }

    /// Is the watchdog currently counting down?
    pub fn is_running(&self) -> bool {
        self.wdt.runstatus.read().runstatus().bit_is_set()
    }

    /// Release the PAC peripheral.
    ///
    /// Note that releasing it does not halt a started countdown.
    pub fn free(self) -> WDT {
        self.wdt
    }
}

impl Instance for Wdt {
    const TICK_HZ: u32 = LFCLK_HZ;
    const MAX_TICKS: u64 = u32::MAX as u64;
    const FEATURES: Features = Features {
        max_timeout_ms: (u32::MAX / LFCLK_HZ) * 1000,
        update_config: false,
        disable_watchdog: false,
    };

    fn configure_behaviour(&mut self) {
        // Keep counting during sleep, pause while the CPU is halted by a
        // debugger.
        self.wdt
            .config
            .modify(|_, w| w.sleep().bit(true).halt().bit(false));
    }

    fn set_reload_value(&mut self, ticks: u64) {
        // The hardware needs at least 15 ticks (458 us) in the reload value
        // register.
        self.wdt
            .crv
            .write(|w| unsafe { w.bits((ticks as u32).max(0x0000_000F)) });
    }

    fn enable_interrupt(&mut self, enable: bool) {
        if enable {
            self.wdt.intenset.write(|w| w.timeout().set_bit());
        } else {
            self.wdt.intenclr.write(|w| w.timeout().set_bit());
        }
    }

    fn clear_interrupt(&mut self) {
        self.wdt.events_timeout.write(|w| unsafe { w.bits(0) });
    }

    fn is_interrupt_set(&self) -> bool {
        self.wdt.events_timeout.read().bits() != 0
    }

    fn start(&mut self) {
        // Use reload request channel 0 only.
        self.wdt.rren.write(|w| w.rr0().set_bit());

        unsafe { cortex_m::peripheral::NVIC::unmask(crate::pac::Interrupt::WDT) };

        self.wdt.tasks_start.write(|w| unsafe { w.bits(1) });
    }

    fn request_reload(&mut self) {
        self.wdt.rr[0].write(|w| w.rr().reload());
    }

    fn stop(&mut self) {
        // Never called: the nRF5x WDT cannot be halted once started, and
        // `FEATURES.disable_watchdog` says so.
    }
}
