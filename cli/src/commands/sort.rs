use colored::*;
use primer_core::collections::sort as sorting;

use crate::terminal::{colors, print};

pub fn sort(values: Vec<i32>, merge: bool) -> anyhow::Result<()> {
    let (method, sorted): (&str, Vec<i32>) = if merge {
        let mut values: Vec<i32> = values;
        sorting::merge_sort(&mut values);
        ("merge sort", values)
    } else {
        ("standard sort", sorting::sorted(values))
    };

    let rendered: Vec<(String, ColoredString)> = sorted
        .iter()
        .enumerate()
        .map(|(i, v)| (i.to_string(), v.to_string().color(colors::NUMBER)))
        .collect();

    print::print_status(method);
    print::as_tree_one_level(rendered);
    Ok(())
}
