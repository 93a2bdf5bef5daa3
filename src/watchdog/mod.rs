//! # Watchdog Timer (WDT)
//!
//! ## Overview
//! The [Watchdog] driver can be backed by any hardware watchdog peripheral
//! which implements the [Instance] trait. This means that the same API can be
//! used to interact with the watchdog of different microcontroller families;
//! see the [nrf5x] module for the Nordic nRF5x backend.
//!
//! Once started, the watchdog counts down from its configured reload value
//! and resets the system when it wraps. To prevent the reset, the countdown
//! must be refreshed periodically by calling [`Watchdog::feed`].
//!
//! ## Configuration
//! The timeout is configured in milliseconds and converted into backend
//! native tick units using the backend's counter frequency. Timeouts which
//! convert to zero ticks, or to a tick count at or above the counter's
//! maximum representable value, are rejected before any hardware is touched.
//!
//! Not every watchdog can be stopped or reconfigured once it is running. The
//! backend declares what the hardware supports in [`Instance::FEATURES`];
//! query it with [`Watchdog::features`] before relying on [`Watchdog::stop`].
//!
//! ## Examples
//!
//! ```rust, no_run
//! use wdt_hal::watchdog::{nrf5x::Wdt, Config, Watchdog};
//!
//! let peripherals = unsafe { wdt_hal::pac::Peripherals::steal() };
//!
//! let mut watchdog = Watchdog::new(Wdt::new(peripherals.WDT));
//! watchdog.start(Config { timeout_ms: 2_000 })?;
//!
//! // Somewhere in the main loop, more often than every two seconds:
//! watchdog.feed();
//! # Ok::<(), wdt_hal::watchdog::Error>(())
//! ```

#[cfg(any(feature = "nrf52832", feature = "nrf52840"))]
pub mod nrf5x;

/// Watchdog errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The requested timeout is zero or does not fit the hardware counter.
    InvalidTimeout,
    /// The operation is not supported by the hardware.
    NotSupported,
}

/// Watchdog configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Countdown duration before the system is reset, in milliseconds.
    pub timeout_ms: u32,
}

/// Watchdog functionality supported by a backend's hardware.
///
/// This is a capability record declared by each backend; it is fixed per
/// hardware family and never changes at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Features {
    /// Largest configurable timeout, in milliseconds.
    pub max_timeout_ms: u32,
    /// Whether the timeout can be changed after the watchdog was started.
    pub update_config: bool,
    /// Whether a running watchdog can be stopped.
    ///
    /// Backends only declare this when the hardware can truly halt the
    /// physical countdown. Merely masking the timeout interrupt while the
    /// counter keeps running does not count as stop support.
    pub disable_watchdog: bool,
}

/// Functionality provided by any watchdog peripheral.
pub trait Instance {
    /// Frequency of the clock driving the countdown, in Hz.
    const TICK_HZ: u32;

    /// Maximum representable value of the reload counter.
    ///
    /// Reload values must be strictly below this; loading the maximum itself
    /// would silently wrap on some hardware.
    const MAX_TICKS: u64;

    /// The backend's static capability record.
    const FEATURES: Features;

    /// Apply the backend's countdown policy during sleep and debug halt.
    fn configure_behaviour(&mut self);

    /// Load the reload value, in ticks, into the counter.
    ///
    /// The driver guarantees `0 < ticks < MAX_TICKS`.
    fn set_reload_value(&mut self, ticks: u64);

    /// Enable or disable the timeout interrupt source.
    fn enable_interrupt(&mut self, enable: bool);

    /// Acknowledge a pending timeout event.
    fn clear_interrupt(&mut self);

    /// Has the timeout event fired?
    fn is_interrupt_set(&self) -> bool;

    /// Start the countdown.
    fn start(&mut self);

    /// Request a countdown reload.
    ///
    /// Must be a single dedicated register write, harmless when the
    /// watchdog was never started.
    fn request_reload(&mut self);

    /// Halt the physical countdown.
    ///
    /// Only called by the driver when [`Features::disable_watchdog`] is
    /// declared by the backend.
    fn stop(&mut self);
}

/// Watchdog timer driver, generic over the hardware backend.
pub struct Watchdog<WDT> {
    wdt: WDT,
    timeout_ms: u32,
}

impl<WDT> Watchdog<WDT>
where
    WDT: Instance,
{
    /// Construct a new instance of [`Watchdog`].
    ///
    /// The countdown is not started until [`Watchdog::start`] is called.
    pub fn new(wdt: WDT) -> Self {
        Self { wdt, timeout_ms: 0 }
    }

    /// Configure and start the watchdog.
    ///
    /// The timeout is converted into backend tick units; timeouts converting
    /// to zero ticks or to a tick count at or above the counter's maximum
    /// are rejected with [`Error::InvalidTimeout`] without touching the
    /// hardware.
    ///
    /// On success the countdown is running and [`Watchdog::feed`] must be
    /// called periodically to prevent a system reset. Calling `start` again
    /// after a success is backend-defined; hardware which latches its
    /// configuration once started (such as the nRF5x WDT) will ignore the
    /// new settings.
    pub fn start(&mut self, config: Config) -> Result<(), Error> {
        // 64-bit intermediate, the multiplication overflows 32 bits for
        // perfectly reasonable timeouts.
        let ticks = u64::from(config.timeout_ms) * u64::from(WDT::TICK_HZ) / 1000;

        if ticks == 0 || ticks >= WDT::MAX_TICKS {
            return Err(Error::InvalidTimeout);
        }

        // Keep the accepted value for read back.
        self.timeout_ms = config.timeout_ms;

        self.wdt.configure_behaviour();
        self.wdt.set_reload_value(ticks);
        self.wdt.enable_interrupt(true);
        self.wdt.start();

        Ok(())
    }

    /// Feed the watchdog timer.
    ///
    /// Resets the countdown to the configured reload value. Callable at any
    /// time; feeding a watchdog that was never started has no effect.
    pub fn feed(&mut self) {
        self.wdt.request_reload();
    }

    /// Stop the watchdog timer.
    ///
    /// Returns [`Error::NotSupported`], without any side effects, when the
    /// backend reports that the hardware cannot halt a running countdown.
    pub fn stop(&mut self) -> Result<(), Error> {
        if !WDT::FEATURES.disable_watchdog {
            return Err(Error::NotSupported);
        }

        self.wdt.enable_interrupt(false);
        self.wdt.stop();

        Ok(())
    }

    /// The configured timeout in milliseconds, or 0 if the watchdog was
    /// never successfully started.
    ///
    /// Pure read of driver state, no hardware access.
    pub fn reload_value_ms(&self) -> u32 {
        self.timeout_ms
    }

    /// The backend's static capability record.
    ///
    /// Constant per backend; unaffected by `start`/`stop` history and safe
    /// to call before [`Watchdog::start`].
    pub fn features(&self) -> Features {
        WDT::FEATURES
    }

    /// Acknowledge a pending timeout event.
    ///
    /// The timeout interrupt handler does not have to take any corrective
    /// action (the reset on expiry is performed by hardware regardless), but
    /// it should acknowledge the event so the peripheral releases the
    /// interrupt line.
    pub fn clear_interrupt(&mut self) {
        self.wdt.clear_interrupt();
    }

    /// Check if the timeout event is set.
    pub fn is_interrupt_set(&self) -> bool {
        self.wdt.is_interrupt_set()
    }

    /// Release the backend peripheral.
    pub fn release(self) -> WDT {
        self.wdt
    }
}

#[cfg(feature = "embedded-hal-02")]
impl<WDT> embedded_hal_02::watchdog::Watchdog for Watchdog<WDT>
where
    WDT: Instance,
{
    fn feed(&mut self) {
        self.feed();
    }
}
