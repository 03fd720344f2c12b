//! Status indicator LED.
use crate::hal::{
    gpio::{ConfigurablePin, OutputPin},
    led::Toggle,
};

/// Solid (non-blinking) monochrome LED
///
/// # Example
/// ```
/// # use bootwire_lib::devices::led::*;
/// # use bootwire_lib::hal::led::Toggle;
/// # use bootwire_lib::hal::doubles::gpio::MockPin;
/// # let pin = MockPin::default();
/// let mut led = MonochromeLed::new(pin, Logic::Inverted);
///
/// led.toggle();
/// assert!(led.is_on());
/// # assert!(led.pin().is_low());
/// ```
pub struct MonochromeLed<Pin: OutputPin> {
    pin: Pin,
    is_on: bool,
    logic: Logic,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Logic {
    /// Logical high equals "on"
    Direct,
    /// Logical high equals "off" (LED wired to the supply rail)
    Inverted,
}

// Extension trait to ensure LED pins are correctly
// operated based on the led's direct or inverted logic
trait LedPin: OutputPin {
    fn off(&mut self, logic: Logic) {
        if let Logic::Direct = logic {
            self.set_low();
        } else {
            self.set_high();
        }
    }

    fn on(&mut self, logic: Logic) {
        if let Logic::Direct = logic {
            self.set_high();
        } else {
            self.set_low();
        }
    }
}

// Blanket implementation of LedPin for all output pins
impl<Pin: OutputPin> LedPin for Pin {}

impl<Pin: OutputPin> MonochromeLed<Pin> {
    pub fn new(mut pin: Pin, logic: Logic) -> Self {
        pin.off(logic);
        Self { pin, is_on: false, logic }
    }
    pub fn is_on(&self) -> bool { self.is_on }
    pub fn pin(&self) -> &Pin { &self.pin }
}

impl<Pin: OutputPin + ConfigurablePin> MonochromeLed<Pin> {
    /// Like `new`, for pins that must be switched to output first.
    pub fn configured(mut pin: Pin, logic: Logic) -> Self {
        pin.configure_as_output();
        Self::new(pin, logic)
    }
}

impl<Pin: OutputPin> Toggle for MonochromeLed<Pin> {
    fn on(&mut self) {
        if !self.is_on {
            self.pin.on(self.logic);
        }
        self.is_on = true;
    }

    fn off(&mut self) {
        if self.is_on {
            self.pin.off(self.logic);
        }
        self.is_on = false;
    }

    fn toggle(&mut self) {
        if self.is_on {
            self.off();
        } else {
            self.on();
        }
    }
}

/// Stand-in for debug lines built without a status indicator.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoIndicator;

impl Toggle for NoIndicator {
    fn on(&mut self) {}
    fn off(&mut self) {}
    fn toggle(&mut self) {}
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::hal::doubles::{
        gpio::MockPin,
        timeline::{Timeline, Trace},
    };

    #[test]
    fn monochrome_led_defaults_to_logic_low_with_direct_logic() {
        // Given
        let led = MonochromeLed::new(MockPin::default(), Logic::Direct);

        // then
        assert!(led.pin.is_low());
    }

    #[test]
    fn monochrome_led_defaults_to_logic_high_with_inverted_logic() {
        // Given
        let led = MonochromeLed::new(MockPin::default(), Logic::Inverted);

        // then
        assert!(led.pin.is_high());
    }

    #[test]
    fn inverted_led_sinks_current_when_on() {
        // Given
        let mut led = MonochromeLed::new(MockPin::default(), Logic::Inverted);

        // When
        led.on();

        // Then
        assert!(led.pin.is_low());

        // When
        led.off();

        // Then
        assert!(led.pin.is_high());
    }

    #[test]
    fn configured_led_is_an_output_before_it_is_driven() {
        // Given
        let timeline = Timeline::new();

        // When
        let mut led = MonochromeLed::configured(timeline.pin(), Logic::Inverted);
        led.on();

        // Then
        assert!(led.pin.configured);
        assert_eq!(timeline.traces(), vec![Trace::Configured, Trace::High, Trace::Low]);
    }

    #[test]
    fn repeated_switching_does_not_touch_the_pin() {
        // Given
        let mut led = MonochromeLed::new(MockPin::default(), Logic::Direct);

        // When
        led.on();
        led.on();
        led.off();
        led.off();

        // Then (initial off, one on, one off)
        assert_eq!(led.pin.changes, vec![false, true, false]);
    }
}
