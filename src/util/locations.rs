/// Michigan cities accepted at signup. Signup and profile edits reject any
/// location outside this list; "Other" is the catch-all.
pub const MICHIGAN_CITIES: [&str; 15] = [
    "Detroit",
    "Grand Rapids",
    "Warren",
    "Sterling Heights",
    "Ann Arbor",
    "Lansing",
    "Flint",
    "Dearborn",
    "Livonia",
    "Troy",
    "Westland",
    "Farmington Hills",
    "Kalamazoo",
    "Royal Oak",
    "Other",
];

pub fn is_valid_location(location: &str) -> bool {
    MICHIGAN_CITIES.contains(&location)
}
