use crate::layers::Layer;

/// Plain gradient descent with a learning rate fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sgd {
    learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    /// Applies one update to a layer whose gradients are already computed.
    pub fn step(&self, layer: &mut Layer) {
        layer.apply_gradients(self.learning_rate);
    }
}
