use super::traits::Button;
use embassy_stm32::exti::ExtiInput;

pub struct GpioButton<'d> {
    pin: ExtiInput<'d>,
}

impl<'d> GpioButton<'d> {
    pub fn new(pin: ExtiInput<'d>) -> Self {
        Self { pin }
    }
}

impl<'d> Button for GpioButton<'d> {
    async fn wait_for_press(&mut self) {
        // Pulled-up line: a press drives it low
        self.pin.wait_for_falling_edge().await;
    }
}
