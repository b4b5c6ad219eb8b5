#![cfg(test)]
use chrono::NaiveDate;
use primer_common::config::Config;
use primer_common::random::RandomSource;
use primer_common::values::person::FAVOURITE_NUMBER_BOUND;
use primer_common::values::{Car, Circle, Counter, Person, TextStyle, User, Vehicle};
use primer_common::{ErrorKind, PrimerError};
use primer_core::random::{self, SeededRandom, ThreadRandom};
use proptest::prelude::*;
use rstest::rstest;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Two people built from the same seed get the same favourite number.
#[test]
fn seeded_people_share_favourite_number() {
    let cfg: Config = Config {
        seed: Some(2024),
        ..Config::default()
    };

    let mut first: Box<dyn RandomSource> = random::from_config(&cfg);
    let mut second: Box<dyn RandomSource> = random::from_config(&cfg);

    let ada: Person = Person::with_name("Ada", "Lovelace", &mut first);
    let alan: Person = Person::with_name("Alan", "Turing", &mut second);

    assert_eq!(ada.favourite_number(), alan.favourite_number());
    assert_eq!(ada.full_name(), "Ada Lovelace");
}

#[test]
fn thread_random_people_stay_in_range() {
    let mut source: ThreadRandom = ThreadRandom::new();
    for _ in 0..500 {
        let person: Person = Person::new(&mut source);
        assert!(person.favourite_number() < FAVOURITE_NUMBER_BOUND);
    }
}

#[test]
fn age_uses_year_only() {
    let mut source: SeededRandom = SeededRandom::new(1);
    let person: Person =
        Person::with_birthday("Ada", "Lovelace", date(1990, 12, 31), &mut source);
    assert_eq!(person.age(date(2024, 1, 1)), 34);
}

#[rstest]
#[case(1, 2)]
#[case(7, 14)]
#[case(1_000, 2_000)]
fn circle_diameter_is_twice_radius(#[case] radius: i32, #[case] diameter: i64) -> anyhow::Result<()> {
    let circle: Circle = Circle::new(radius)?;
    assert_eq!(circle.diameter(), diameter);
    Ok(())
}

#[test]
fn errors_convert_into_anyhow() {
    let result: anyhow::Result<Circle> = Circle::new(-2).map_err(anyhow::Error::from);
    let err: anyhow::Error = result.unwrap_err();
    let primer: &PrimerError = err.downcast_ref::<PrimerError>().unwrap();
    assert_eq!(primer.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn text_style_lookup_matches_every_variant() {
    for style in TextStyle::ALL {
        let lower: String = style.name().to_lowercase();
        assert_eq!(TextStyle::lookup(&lower), Ok(style));
    }
    assert_eq!(
        TextStyle::lookup("xyz").map_err(|e| e.kind()),
        Err(ErrorKind::InvalidArgument)
    );
}

#[test]
fn counter_sequence_ends_at_one() {
    let mut counter: Counter = Counter::new();
    counter.increase();
    counter.increase();
    counter.decrease();
    assert_eq!(counter.num(), 1);

    let mut out: Vec<u8> = Vec::new();
    counter.view().print_to(&mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "This is an inner class\n1\n");
}

#[test]
fn car_honks_like_vehicle() {
    let car: Car = Car::default();
    let mut out: Vec<u8> = Vec::new();
    car.honk_to(&mut out).unwrap();
    assert_eq!(out, b"Tuut, tuut!\n");
    assert_eq!(car.describe(), "Ford Mustang");
}

proptest! {
    #[test]
    fn user_fields_round_trip(
        email in ".*",
        name in ".*",
        age in proptest::option::of(any::<i32>()),
        height in proptest::option::of(-1.0e6..1.0e6f64),
    ) {
        let mut user = User::default();
        user.set_email(email.clone());
        user.set_name(name.clone());
        user.set_age(age);
        user.set_height(height);

        prop_assert_eq!(user.email(), email.as_str());
        prop_assert_eq!(user.name(), name.as_str());
        prop_assert_eq!(user.password(), "");
        prop_assert_eq!(user.age(), age);
        prop_assert_eq!(user.height(), height);
    }
}
