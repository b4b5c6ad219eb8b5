use primer_common::values::Counter;
use tracing::warn;

use crate::terminal::print;

pub fn counter(ops: &str) -> anyhow::Result<()> {
    let mut counter: Counter = Counter::new();

    for (position, op) in ops.chars().enumerate() {
        match op {
            '+' => counter.increase(),
            '-' => counter.decrease(),
            c if c.is_whitespace() => continue,
            other => {
                warn!("Unexpected step '{other}' at position {position}");
                anyhow::bail!("counter steps must be '+' or '-', got '{other}'");
            }
        }
    }

    counter.display_inner();
    print::aligned_line("Final value", counter.num().to_string());
    Ok(())
}
