use primer_common::values::vehicle::DEFAULT_MODEL;
use primer_common::values::{Car, Vehicle, VehicleBase};

use crate::terminal::print;

pub fn car(brand: Option<String>, model: Option<String>) -> anyhow::Result<()> {
    let base: VehicleBase = brand.map(VehicleBase::new).unwrap_or_default();
    let car: Car = Car::with_base(base, model.unwrap_or_else(|| DEFAULT_MODEL.to_string()));

    car.honk();
    print::print_status(car.describe());
    Ok(())
}
