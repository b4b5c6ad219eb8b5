use anyhow::Context;
use primer_core::collections::BoundedStack;

use crate::terminal::print;

pub fn stack(items: Vec<String>, capacity: usize) -> anyhow::Result<()> {
    let mut stack: BoundedStack<String> = BoundedStack::with_capacity(capacity);

    for item in items {
        stack
            .push(item)
            .with_context(|| format!("pushing onto a stack of capacity {capacity}"))?;
    }

    let mut idx: usize = 0;
    while let Ok(item) = stack.pop() {
        print::entry(idx, &item);
        idx += 1;
    }
    Ok(())
}
