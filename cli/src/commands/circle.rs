use anyhow::Context;
use colored::*;
use primer_common::values::Circle;

use crate::terminal::{colors, print};

pub fn circle(radius: i32) -> anyhow::Result<()> {
    let circle: Circle = Circle::new(radius).context("creating circle")?;

    print::set_key_width(13);
    print::aligned_line("Radius", circle.radius().to_string().color(colors::NUMBER));
    print::aligned_line("Diameter", circle.diameter().to_string().color(colors::NUMBER));
    print::aligned_line("Circumference", format!("{:.4}", circle.circumference()));
    print::aligned_line("Area", format!("{:.4}", circle.area()));
    Ok(())
}
