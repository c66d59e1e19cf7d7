//! Name-based generator lookup, independent of column type.
//!
//! Exact, case-sensitive match over a fixed table of common snake_case field
//! names. No fuzzy or substring matching.

use tablesmith_core::Value;

use crate::faker::FakeSource;

/// Guess a value for a column purely from its name.
///
/// Returns `None` when the name is not in the table; a match always wins over
/// cast- and type-based generation.
pub fn guess(column: &str, faker: &mut dyn FakeSource) -> Option<Value> {
    let value = match column {
        "email" | "e_mail" | "email_address" => Value::Text(faker.safe_email()),
        "name" => Value::Text(faker.name()),
        "first_name" => Value::Text(faker.first_name()),
        "last_name" => Value::Text(faker.last_name()),
        "login" | "username" => Value::Text(faker.user_name()),
        "dob" | "date_of_birth" => Value::Text(faker.date().format("%Y-%m-%d").to_string()),
        "uuid" => Value::Text(faker.uuid()),
        "url" | "website" => Value::Text(faker.url()),
        "phone" | "phone_number" | "telephone" | "tel" => Value::Text(faker.phone_number()),
        "town" | "city" => Value::Text(faker.city()),
        "zip" | "zip_code" | "zipcode" | "postal_code" | "postalcode" | "post_code"
        | "postcode" => Value::Text(faker.postcode()),
        "state" | "province" | "county" => Value::Text(faker.state()),
        "country" => Value::Text(faker.country()),
        "currency_code" | "currency" => Value::Text(faker.currency_code()),
        "company" | "company_name" | "companyname" | "employer" => Value::Text(faker.company()),
        "title" => Value::Text(faker.title()),
        _ => return None,
    };
    Some(value)
}
