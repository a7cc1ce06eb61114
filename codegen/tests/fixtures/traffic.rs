pub struct Light(i16);

pub const LIGHT_OFF: Light = Light(-1);
pub const LIGHT_RED: Light = Light(0);
pub const LIGHT_YELLOW: Light = Light(LIGHT_RED.0 + 1);
pub const LIGHT_GREEN: Light = Light(1 << 1);
pub const LIGHT_STOP: Light = LIGHT_RED;

const STEP: i16 = 4;

impl Light {
    pub const BLINKING: Self = Self(STEP * 4);
}
