use std::io::{self, Write};

pub const DEFAULT_BRAND: &str = "Ford";
pub const DEFAULT_MODEL: &str = "Mustang";
pub const HONK: &str = "Tuut, tuut!";

/// Capabilities shared by every vehicle.
pub trait Vehicle {
    fn brand(&self) -> &str;

    /// Writes the greeting line to `out`.
    fn honk_to(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{HONK}")
    }

    /// Writes the greeting line to stdout.
    fn honk(&self) {
        let _ = self.honk_to(&mut io::stdout().lock());
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleBase {
    brand: String,
}

impl VehicleBase {
    pub fn new(brand: impl Into<String>) -> Self {
        Self {
            brand: brand.into(),
        }
    }
}

impl Default for VehicleBase {
    fn default() -> Self {
        Self::new(DEFAULT_BRAND)
    }
}

impl Vehicle for VehicleBase {
    fn brand(&self) -> &str {
        &self.brand
    }
}

/// A vehicle with a model name.
///
/// Brand and honking come from the embedded [`VehicleBase`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Car {
    base: VehicleBase,
    model_name: String,
}

impl Car {
    pub fn new(model_name: impl Into<String>) -> Self {
        Self::with_base(VehicleBase::default(), model_name)
    }

    pub fn with_base(base: VehicleBase, model_name: impl Into<String>) -> Self {
        Self {
            base,
            model_name: model_name.into(),
        }
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// `"<brand> <model>"`, e.g. `"Ford Mustang"`.
    pub fn describe(&self) -> String {
        format!("{} {}", self.brand(), self.model_name)
    }
}

impl Default for Car {
    fn default() -> Self {
        Self::new(DEFAULT_MODEL)
    }
}

impl Vehicle for Car {
    fn brand(&self) -> &str {
        self.base.brand()
    }

    fn honk_to(&self, out: &mut dyn Write) -> io::Result<()> {
        self.base.honk_to(out)
    }
}
