use std::io::{self, Write};

use tracing::debug;

pub const VIEW_MESSAGE: &str = "This is an inner class";

/// An integer that only moves in steps of one.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Counter {
    num: i32,
}

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn num(&self) -> i32 {
        self.num
    }

    pub fn increase(&mut self) {
        self.num = self.num.wrapping_add(1);
        debug!(num = self.num, "counter increased");
    }

    pub fn decrease(&mut self) {
        self.num = self.num.wrapping_sub(1);
        debug!(num = self.num, "counter decreased");
    }

    /// Borrows a read-only view of this counter.
    pub fn view(&self) -> CounterView<'_> {
        CounterView { counter: self }
    }

    /// Prints the counter through a fresh view.
    pub fn display_inner(&self) {
        self.view().print();
    }
}

/// Read-only helper scoped to one [`Counter`].
///
/// Holds a shared borrow, so the counter cannot change while a view is
/// alive.
#[derive(Debug, Clone, Copy)]
pub struct CounterView<'a> {
    counter: &'a Counter,
}

impl CounterView<'_> {
    pub fn num(&self) -> i32 {
        self.counter.num
    }

    pub fn print_to(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{VIEW_MESSAGE}")?;
        writeln!(out, "{}", self.counter.num)
    }

    pub fn print(&self) {
        let _ = self.print_to(&mut io::stdout().lock());
    }
}
