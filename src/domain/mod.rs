// Domain layer: models and ports. Concrete collaborators live under adapters/ and config/.

pub mod model;
pub mod ports;
