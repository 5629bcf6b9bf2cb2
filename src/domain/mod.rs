// Domain layer: value types shared by the calculators and the presentation
// layer. No behavior beyond serde derives.

pub mod model;
