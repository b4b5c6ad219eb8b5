use anyhow::Context;
use colored::*;
use primer_core::collections::MaxHeap;

use crate::terminal::{colors, print};

pub fn heap(values: Vec<i32>, max_size: Option<usize>) -> anyhow::Result<()> {
    let mut heap: MaxHeap = MaxHeap::new(max_size.unwrap_or(values.len()));

    for value in values {
        heap.insert(value).context("building heap")?;
    }

    for line in heap.describe() {
        print::print_status(line);
    }

    let mut drained: Vec<String> = Vec::with_capacity(heap.len());
    while let Ok(value) = heap.extract_max() {
        drained.push(value.to_string());
    }
    print::aligned_line("Extracted", drained.join(" ").color(colors::NUMBER));
    Ok(())
}
