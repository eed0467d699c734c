#![no_std]
#![no_main]

mod devices;
mod robot;

use panic_halt as _;
use robot::Robot;

#[arduino_hal::entry]
fn main() -> ! {
    let mut robot = Robot::new();
    loop {
        robot.next_command();
    }
}
