mod motor;

pub use motor::Motor;
