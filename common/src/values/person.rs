use chrono::{Datelike, Local, NaiveDate};
use tracing::debug;

use crate::random::RandomSource;

/// Exclusive upper limit for [`Person::favourite_number`].
pub const FAVOURITE_NUMBER_BOUND: u32 = 42;

/// A person with a name, a birthday and a randomly assigned favourite
/// number.
///
/// There are no setters. A different person is a new `Person`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    first_name: String,
    last_name: String,
    birthday: NaiveDate,
    favourite_number: u32,
}

impl Person {
    /// Nameless person born today.
    pub fn new(random: &mut impl RandomSource) -> Self {
        Self::with_birthday("", "", today(), random)
    }

    /// Named person born today.
    pub fn with_name(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        random: &mut impl RandomSource,
    ) -> Self {
        Self::with_birthday(first_name, last_name, today(), random)
    }

    pub fn with_birthday(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        birthday: NaiveDate,
        random: &mut impl RandomSource,
    ) -> Self {
        // The modulo keeps the invariant even if a source ignores its bound.
        let favourite_number: u32 =
            random.next_below(FAVOURITE_NUMBER_BOUND) % FAVOURITE_NUMBER_BOUND;
        let person = Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            birthday,
            favourite_number,
        };
        debug!(
            name = %person.full_name(),
            %birthday,
            favourite_number,
            "person created"
        );
        person
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn birthday(&self) -> NaiveDate {
        self.birthday
    }

    /// First and last name separated by a single space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Years between the birthday and `today`, counting only the year
    /// component.
    ///
    /// Month and day are ignored: someone born in December 1990 is `34`
    /// on 1 January 2024.
    pub fn age(&self, today: NaiveDate) -> i32 {
        today.year() - self.birthday.year()
    }

    /// Always in `0..FAVOURITE_NUMBER_BOUND`.
    pub fn favourite_number(&self) -> u32 {
        self.favourite_number
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
