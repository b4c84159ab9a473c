//! Person and place generators backed by the `fake` crate.

use fake::faker::address::en::{CityName, StateName, StreetName, ZipCode};
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::faker::phone_number::en::PhoneNumber;
use fake::Fake;
use rand::Rng;

pub fn generate_name<R: Rng>(rng: &mut R) -> String {
    Name().fake_with_rng(rng)
}

pub fn generate_email<R: Rng>(rng: &mut R) -> String {
    SafeEmail().fake_with_rng(rng)
}

/// Two-line postal address: street, then city, state and zip.
pub fn generate_address<R: Rng>(rng: &mut R) -> String {
    let street: String = StreetName().fake_with_rng(rng);
    let city: String = CityName().fake_with_rng(rng);
    let state: String = StateName().fake_with_rng(rng);
    let zip: String = ZipCode().fake_with_rng(rng);
    format!("{street}\n{city}, {state} {zip}")
}

/// Phone number cut to at most `max_len` characters.
pub fn generate_phone<R: Rng>(rng: &mut R, max_len: usize) -> String {
    let phone: String = PhoneNumber().fake_with_rng(rng);
    truncate_chars(&phone, max_len)
}

/// A city name used as a warehouse location.
pub fn generate_location<R: Rng>(rng: &mut R) -> String {
    CityName().fake_with_rng(rng)
}

fn truncate_chars(value: &str, max_len: usize) -> String {
    value.chars().take(max_len).collect()
}
