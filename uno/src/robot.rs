use crate::devices::Motor;
use arduino_hal::{
    default_serial, delay_ms,
    hal::port::{PD0, PD1},
    pac::USART0,
    pins,
    port::{
        mode::{Input, Output},
        Pin, D10, D11, D2, D3, D4, D5, D6, D9,
    },
    prelude::*,
    simple_pwm::{IntoPwmPin, Prescaler, Timer0Pwm, Timer1Pwm, Timer2Pwm},
    Delay, I2c, Peripherals, Pins, Usart,
};
use clawbot::{vl53l0x::Vl53l0x, Channels, Controller};
use ufmt::uwriteln;

type BaseLeft = Motor<D2, Timer1Pwm, D9>;
type BaseRight = Motor<D3, Timer1Pwm, D10>;
type ClawGrip = Motor<D4, Timer2Pwm, D11>;
type ClawLift = Motor<D6, Timer0Pwm, D5>;
type RobotController = Controller<
    Channels<BaseLeft, BaseRight, ClawGrip, ClawLift>,
    Vl53l0x<I2c, Delay>,
    Delay,
>;

pub struct Robot {
    serial: Usart<USART0, Pin<Input, PD0>, Pin<Output, PD1>>,
    controller: RobotController,
}

impl Robot {
    const BAUD_RATE: u32 = 9600;
    const I2C_SPEED: u32 = 100_000;

    pub fn new() -> Self {
        let peripherals: Peripherals = unsafe { Peripherals::steal() };
        let pins: Pins = pins!(peripherals);
        let mut serial = default_serial!(peripherals, pins, Self::BAUD_RATE);

        // Announce the robot!
        delay_ms(100);
        uwriteln!(&mut serial, "CLAWBOT").unwrap_infallible();

        // Motors
        let timer0 = Timer0Pwm::new(peripherals.TC0, Prescaler::Prescale64);
        let timer1 = Timer1Pwm::new(peripherals.TC1, Prescaler::Prescale64);
        let timer2 = Timer2Pwm::new(peripherals.TC2, Prescaler::Prescale64);
        let channels = Channels {
            base_left: Motor::new(
                pins.d2.into_output(),
                pins.d9.into_output().into_pwm(&timer1),
            ),
            base_right: Motor::new(
                pins.d3.into_output(),
                pins.d10.into_output().into_pwm(&timer1),
            ),
            claw_grip: Motor::new(
                pins.d4.into_output(),
                pins.d11.into_output().into_pwm(&timer2),
            ),
            claw_lift: Motor::new(
                pins.d6.into_output(),
                pins.d5.into_output().into_pwm(&timer0),
            ),
        };

        // Ranging sensor
        let i2c = I2c::new(
            peripherals.TWI,
            pins.a4.into_pull_up_input(),
            pins.a5.into_pull_up_input(),
            Self::I2C_SPEED,
        );
        let sensor = Vl53l0x::new(i2c, Delay::new());

        let controller =
            Controller::boot(channels, sensor, Delay::new(), |event| {
                uwriteln!(&mut serial, "{}", event).unwrap_infallible()
            });

        Self { serial, controller }
    }

    /// Block for the next line of input, then handle it and write the reply.
    pub fn next_command(&mut self) {
        let serial = &mut self.serial;
        let reply = self
            .controller
            .next_reply(|| nb::block!(serial.read()).unwrap_infallible());
        reply.write_to(&mut self.serial).unwrap_infallible();
    }
}
