use crate::errors::Result;

pub enum FlowCtrl {
    Continue,
    Finish,
}

pub trait Flow {
    fn render(&mut self) -> Result<()>;
    fn handle_input(&mut self, input: &str) -> Result<FlowCtrl>;

    /// Runs once when the loop ends, for farewell output.
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}
