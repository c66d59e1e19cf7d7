//! The injected fake-data capability.
//!
//! [`FakeSource`] is the entropy boundary of the engine: generators and name
//! heuristics draw every random value through it, so tests can seed it and
//! callers can swap it out entirely.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use fake::Fake;
use fake::faker::address::en::{CityName, CountryName, PostCode, StateName};
use fake::faker::company::en::CompanyName;
use fake::faker::currency::en::CurrencyCode;
use fake::faker::internet::en::{DomainSuffix, SafeEmail, Username};
use fake::faker::lorem::en::{Word, Words};
use fake::faker::name::en::{FirstName, LastName, Name, Title};
use fake::faker::phone_number::en::PhoneNumber;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of plausible random values consumed by the generator set.
pub trait FakeSource {
    fn words(&mut self, count: usize) -> Vec<String>;
    fn boolean(&mut self) -> bool;
    fn date_time(&mut self) -> NaiveDateTime;
    fn date(&mut self) -> NaiveDate;
    fn time(&mut self) -> NaiveTime;
    /// Random float in `[min, max]` rounded to `precision` digits.
    fn random_float(&mut self, precision: u32, min: f64, max: f64) -> f64;
    /// Random single digit, 0 through 9.
    fn random_digit(&mut self) -> i64;
    /// Random index in `0..upper`; 0 when `upper` is 0.
    fn random_index(&mut self, upper: usize) -> usize;
    fn random_element(&mut self, values: &[String]) -> Option<String>;
    /// Up to `count` distinct random elements of `values`.
    fn random_elements(&mut self, values: &[String], count: usize) -> Vec<String>;
    /// Free text of at least `length` characters (approximate bound).
    fn text(&mut self, length: usize) -> String;
    fn unix_time(&mut self) -> i64;
    fn uuid(&mut self) -> String;
    fn safe_email(&mut self) -> String;
    fn name(&mut self) -> String;
    fn first_name(&mut self) -> String;
    fn last_name(&mut self) -> String;
    fn user_name(&mut self) -> String;
    fn url(&mut self) -> String;
    fn phone_number(&mut self) -> String;
    fn city(&mut self) -> String;
    fn postcode(&mut self) -> String;
    fn state(&mut self) -> String;
    fn country(&mut self) -> String;
    fn currency_code(&mut self) -> String;
    fn company(&mut self) -> String;
    fn title(&mut self) -> String;
}

/// Default [`FakeSource`] backed by the `fake` crate over a seedable rng.
pub struct FakeData<R: RngCore = ChaCha8Rng> {
    rng: R,
}

impl FakeData<ChaCha8Rng> {
    pub fn new() -> Self {
        Self {
            rng: ChaCha8Rng::from_rng(&mut rand::rng()),
        }
    }

    /// Deterministic source for reproducible synthesis.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Default for FakeData<ChaCha8Rng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore> FakeData<R> {
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: RngCore> FakeSource for FakeData<R> {
    fn words(&mut self, count: usize) -> Vec<String> {
        Words(count..count + 1).fake_with_rng(&mut self.rng)
    }

    fn boolean(&mut self) -> bool {
        self.rng.random_bool(0.5)
    }

    fn date_time(&mut self) -> NaiveDateTime {
        chrono::DateTime::from_timestamp(self.unix_time(), 0)
            .map(|value| value.naive_utc())
            .unwrap_or_default()
    }

    fn date(&mut self) -> NaiveDate {
        self.date_time().date()
    }

    fn time(&mut self) -> NaiveTime {
        let seconds = self.rng.random_range(0..86_400);
        NaiveTime::from_num_seconds_from_midnight_opt(seconds, 0).unwrap_or_default()
    }

    fn random_float(&mut self, precision: u32, min: f64, max: f64) -> f64 {
        let value = self.rng.random_range(min..=max);
        let factor = 10_f64.powi(precision as i32);
        (value * factor).round() / factor
    }

    fn random_digit(&mut self) -> i64 {
        self.rng.random_range(0..=9)
    }

    fn random_index(&mut self, upper: usize) -> usize {
        if upper == 0 {
            return 0;
        }
        self.rng.random_range(0..upper)
    }

    fn random_element(&mut self, values: &[String]) -> Option<String> {
        if values.is_empty() {
            return None;
        }
        let idx = self.rng.random_range(0..values.len());
        Some(values[idx].clone())
    }

    fn random_elements(&mut self, values: &[String], count: usize) -> Vec<String> {
        let take = count.min(values.len());
        let mut indices: Vec<usize> = (0..values.len()).collect();
        for i in 0..take {
            let j = self.rng.random_range(i..indices.len());
            indices.swap(i, j);
        }
        indices
            .into_iter()
            .take(take)
            .map(|idx| values[idx].clone())
            .collect()
    }

    fn text(&mut self, length: usize) -> String {
        let mut out = String::new();
        while out.chars().count() < length {
            let word: String = Word().fake_with_rng(&mut self.rng);
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(&word);
        }
        out
    }

    fn unix_time(&mut self) -> i64 {
        self.rng.random_range(0..=chrono::Utc::now().timestamp())
    }

    fn uuid(&mut self) -> String {
        let bytes: [u8; 16] = self.rng.random();
        uuid::Uuid::from_bytes(bytes).to_string()
    }

    fn safe_email(&mut self) -> String {
        SafeEmail().fake_with_rng(&mut self.rng)
    }

    fn name(&mut self) -> String {
        Name().fake_with_rng(&mut self.rng)
    }

    fn first_name(&mut self) -> String {
        FirstName().fake_with_rng(&mut self.rng)
    }

    fn last_name(&mut self) -> String {
        LastName().fake_with_rng(&mut self.rng)
    }

    fn user_name(&mut self) -> String {
        Username().fake_with_rng(&mut self.rng)
    }

    fn url(&mut self) -> String {
        let host: String = Word().fake_with_rng(&mut self.rng);
        let suffix: String = DomainSuffix().fake_with_rng(&mut self.rng);
        format!("https://www.{host}.{suffix}/")
    }

    fn phone_number(&mut self) -> String {
        PhoneNumber().fake_with_rng(&mut self.rng)
    }

    fn city(&mut self) -> String {
        CityName().fake_with_rng(&mut self.rng)
    }

    fn postcode(&mut self) -> String {
        PostCode().fake_with_rng(&mut self.rng)
    }

    fn state(&mut self) -> String {
        StateName().fake_with_rng(&mut self.rng)
    }

    fn country(&mut self) -> String {
        CountryName().fake_with_rng(&mut self.rng)
    }

    fn currency_code(&mut self) -> String {
        CurrencyCode().fake_with_rng(&mut self.rng)
    }

    fn company(&mut self) -> String {
        CompanyName().fake_with_rng(&mut self.rng)
    }

    fn title(&mut self) -> String {
        Title().fake_with_rng(&mut self.rng)
    }
}
