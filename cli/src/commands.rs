pub mod car;
pub mod circle;
pub mod counter;
pub mod heap;
pub mod person;
pub mod sort;
pub mod stack;
pub mod style;
pub mod user;

use chrono::NaiveDate;
use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "primer")]
#[command(about = "Small value objects and collections, driven from the terminal.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Seed for favourite-number generation
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Hide headers and separators (repeatable)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Disable coloured output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the derived measures of a circle
    #[command(alias = "c")]
    Circle {
        #[arg(allow_negative_numbers = true)]
        radius: i32,
    },
    /// Create a person and report name, age and favourite number
    #[command(alias = "p")]
    Person {
        #[arg(long)]
        first: Option<String>,
        #[arg(long)]
        last: Option<String>,
        /// Birthday as YYYY-MM-DD (defaults to today)
        #[arg(long)]
        born: Option<NaiveDate>,
        /// Reference date for the age as YYYY-MM-DD (defaults to today)
        #[arg(long)]
        today: Option<NaiveDate>,
    },
    /// Build a user record and print every field
    #[command(alias = "u")]
    User {
        email: String,
        name: String,
        password: String,
        #[arg(long, allow_negative_numbers = true)]
        age: Option<i32>,
        #[arg(long, allow_negative_numbers = true)]
        height: Option<f64>,
    },
    /// Honk and describe a car
    #[command(alias = "v")]
    Car {
        #[arg(long)]
        brand: Option<String>,
        #[arg(long)]
        model: Option<String>,
    },
    /// Apply a sequence of '+' and '-' steps to a counter
    #[command(alias = "n")]
    Counter {
        #[arg(allow_hyphen_values = true)]
        ops: String,
    },
    /// Look up a text style by name
    #[command(alias = "t")]
    Style {
        label: String,
        /// Require the exact upper-case name
        #[arg(long)]
        exact: bool,
    },
    /// Push items onto a bounded stack, then pop them all
    #[command(alias = "s")]
    Stack {
        #[arg(required = true, allow_hyphen_values = true)]
        items: Vec<String>,
        #[arg(long, default_value_t = primer_core::collections::stack::DEFAULT_CAPACITY)]
        capacity: usize,
    },
    /// Insert values into a max-heap, then drain it
    #[command(alias = "h")]
    Heap {
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i32>,
        /// Maximum heap size (defaults to the number of values)
        #[arg(long)]
        max_size: Option<usize>,
    },
    /// Sort integers
    #[command(alias = "o")]
    Sort {
        #[arg(allow_negative_numbers = true)]
        values: Vec<i32>,
        /// Use the merge sort instead of the standard sort
        #[arg(long)]
        merge: bool,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
