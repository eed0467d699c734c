use arduino_hal::{
    port::{
        mode::{Output, PwmOutput},
        Pin, PinOps,
    },
    simple_pwm::PwmPinOps,
};
use clawbot::{Direction, Power};

/// DC motor on an H-bridge driver with direction and PWM inputs.
///
/// # Type Parameters
///
/// - `D`: direction pin
/// - `TC`: timer generating the PWM signal
/// - `P`: PWM pin
pub struct Motor<D, TC, P> {
    /// Pin selecting the direction of rotation.
    pin_direction: Pin<Output, D>,
    /// Pin carrying the power as a PWM duty cycle.
    pin_pwm: Pin<PwmOutput<TC>, P>,
}

impl<D: PinOps, TC, P: PinOps + PwmPinOps<TC>> Motor<D, TC, P> {
    /// Creates a new `Motor`.
    ///
    /// The motor starts with no power.
    ///
    /// # Parameters
    ///
    /// - `pin_direction`: Pin to use for direction signals.
    /// - `pin_pwm`: Pin to use for power.
    pub fn new(
        pin_direction: Pin<Output, D>,
        mut pin_pwm: Pin<PwmOutput<TC>, P>,
    ) -> Self {
        pin_pwm.set_duty(Power::OFF.get_value());
        pin_pwm.enable();
        Self {
            pin_direction,
            pin_pwm,
        }
    }
}

/// The `Motor` interface that allows the motor to be driven by `clawbot`.
impl<D: PinOps, TC, P: PinOps + PwmPinOps<TC>> clawbot::Channel
    for Motor<D, TC, P>
{
    fn drive(&mut self, direction: Direction, power: Power) {
        match direction {
            Direction::Forward => self.pin_direction.set_high(),
            Direction::Reverse => self.pin_direction.set_low(),
        }
        self.pin_pwm.set_duty(power.get_value());
    }

    fn stop(&mut self) {
        self.pin_pwm.set_duty(Power::OFF.get_value());
    }
}
