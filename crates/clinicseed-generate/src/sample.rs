//! Faker-backed field samplers.
//!
//! Thin wrappers over fake-rs plus the handful of formats the fake crate
//! does not cover (SSN, the clinic's `.ru` email shape, plate codes).
//! Every sampler takes the caller's RNG so runs stay reproducible.

use chrono::{Duration, Months, NaiveDate};
use fake::Fake;
use fake::faker::lorem::en::{Paragraph, Sentence, Word, Words};
use fake::faker::name::en::{FirstName, LastName};
use fake::faker::phone_number::en::PhoneNumber;
use rand::Rng;

pub fn first_name(rng: &mut impl Rng) -> String {
    FirstName().fake_with_rng(rng)
}

pub fn last_name(rng: &mut impl Rng) -> String {
    LastName().fake_with_rng(rng)
}

pub fn phone_number(rng: &mut impl Rng) -> String {
    PhoneNumber().fake_with_rng(rng)
}

pub fn word(rng: &mut impl Rng) -> String {
    Word().fake_with_rng(rng)
}

/// Free-text blurb, the counterpart of the original faker's `text()`.
pub fn text(rng: &mut impl Rng) -> String {
    Paragraph(1..3).fake_with_rng(rng)
}

/// Short name of 1-3 words.
pub fn short_name(rng: &mut impl Rng) -> String {
    let words: Vec<String> = Words(1..4).fake_with_rng(rng);
    words.join(" ")
}

/// 1-3 sentences joined into one description.
pub fn sentences(rng: &mut impl Rng) -> String {
    let sentences: Vec<String> = fake::faker::lorem::en::Sentences(1..4).fake_with_rng(rng);
    sentences.join(" ")
}

/// A security question: a faked sentence with its final period swapped
/// for a question mark.
pub fn question(rng: &mut impl Rng) -> String {
    let sentence: String = Sentence(4..10).fake_with_rng(rng);
    format!("{}?", sentence.trim_end_matches('.'))
}

/// `123-45-6789` shaped SSN.
pub fn ssn(rng: &mut impl Rng) -> String {
    format!(
        "{:03}-{:02}-{:04}",
        rng.random_range(0..=999_u32),
        rng.random_range(0..=99_u32),
        rng.random_range(0..=9999_u32)
    )
}

/// The clinic's email shape: two faked words, an `@`, two more words, and
/// the `.ru` suffix.
pub fn ru_email(rng: &mut impl Rng) -> String {
    format!(
        "{}{}@{}{}.ru",
        word(rng),
        word(rng),
        word(rng),
        word(rng)
    )
}

/// License-plate style facility model code.
pub fn plate_code(rng: &mut impl Rng) -> String {
    let letters: String = (0..3)
        .map(|_| char::from(rng.random_range(b'A'..=b'Z')))
        .collect();
    format!("{letters}-{:04}", rng.random_range(0..=9999_u32))
}

/// `HH:MM` wall-clock time.
pub fn clock_time(rng: &mut impl Rng) -> String {
    format!(
        "{:02}:{:02}",
        rng.random_range(0..24_u32),
        rng.random_range(0..60_u32)
    )
}

/// Uniform date in the inclusive `[min, max]` window. A reversed window
/// collapses to `min`.
pub fn date_between(rng: &mut impl Rng, min: NaiveDate, max: NaiveDate) -> NaiveDate {
    let span = (max - min).num_days();
    if span <= 0 {
        return min;
    }
    min + Duration::days(rng.random_range(0..=span))
}

pub fn years_before(date: NaiveDate, years: u32) -> NaiveDate {
    date.checked_sub_months(Months::new(years * 12)).unwrap_or(date)
}

pub fn days_before(date: NaiveDate, days: i64) -> NaiveDate {
    date - Duration::days(days)
}

pub fn days_after(date: NaiveDate, days: i64) -> NaiveDate {
    date + Duration::days(days)
}
