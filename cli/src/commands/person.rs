use chrono::{Local, NaiveDate};
use colored::*;
use primer_common::config::Config;
use primer_common::random::RandomSource;
use primer_common::values::Person;
use primer_core::random;

use crate::terminal::{colors, print};

pub fn person(
    first: Option<String>,
    last: Option<String>,
    born: Option<NaiveDate>,
    today: Option<NaiveDate>,
    cfg: &Config,
) -> anyhow::Result<()> {
    let mut source: Box<dyn RandomSource> = random::from_config(cfg);
    let first: String = first.unwrap_or_default();
    let last: String = last.unwrap_or_default();

    let person: Person = match born {
        Some(birthday) => Person::with_birthday(first, last, birthday, &mut source),
        None if first.is_empty() && last.is_empty() => Person::new(&mut source),
        None => Person::with_name(first, last, &mut source),
    };
    let today: NaiveDate = today.unwrap_or_else(|| Local::now().date_naive());

    print::set_key_width(16);
    print::aligned_line("Full name", person.full_name());
    print::aligned_line("Birthday", person.birthday().to_string());
    print::aligned_line(
        "Age",
        format!("{} (as of {today})", person.age(today)),
    );
    print::aligned_line(
        "Favourite number",
        person.favourite_number().to_string().color(colors::NUMBER),
    );
    Ok(())
}
