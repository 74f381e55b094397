// src/config/states.rs
//! Reference set for "went to a US high school": states, DC and the
//! inhabited territories, by full name and postal abbreviation.

const US_STATES: &[(&str, &str)] = &[
    ("Alabama", "AL"), ("Alaska", "AK"), ("Arizona", "AZ"), ("Arkansas", "AR"),
    ("California", "CA"), ("Colorado", "CO"), ("Connecticut", "CT"), ("Delaware", "DE"),
    ("Florida", "FL"), ("Georgia", "GA"), ("Hawaii", "HI"), ("Idaho", "ID"),
    ("Illinois", "IL"), ("Indiana", "IN"), ("Iowa", "IA"), ("Kansas", "KS"),
    ("Kentucky", "KY"), ("Louisiana", "LA"), ("Maine", "ME"), ("Maryland", "MD"),
    ("Massachusetts", "MA"), ("Michigan", "MI"), ("Minnesota", "MN"), ("Mississippi", "MS"),
    ("Missouri", "MO"), ("Montana", "MT"), ("Nebraska", "NE"), ("Nevada", "NV"),
    ("New Hampshire", "NH"), ("New Jersey", "NJ"), ("New Mexico", "NM"), ("New York", "NY"),
    ("North Carolina", "NC"), ("North Dakota", "ND"), ("Ohio", "OH"), ("Oklahoma", "OK"),
    ("Oregon", "OR"), ("Pennsylvania", "PA"), ("Rhode Island", "RI"), ("South Carolina", "SC"),
    ("South Dakota", "SD"), ("Tennessee", "TN"), ("Texas", "TX"), ("Utah", "UT"),
    ("Vermont", "VT"), ("Virginia", "VA"), ("Washington", "WA"), ("West Virginia", "WV"),
    ("Wisconsin", "WI"), ("Wyoming", "WY"),
    ("District of Columbia", "DC"),
    ("Puerto Rico", "PR"), ("Guam", "GU"), ("U.S. Virgin Islands", "VI"),
    ("American Samoa", "AS"), ("Northern Mariana Islands", "MP"),
];

/// True when `token` names a US state or territory (ASCII case-insensitive).
pub fn is_us_state(token: &str) -> bool {
    let t = token.trim();
    if t.is_empty() { return false; }
    US_STATES
        .iter()
        .any(|(name, abbr)| t.eq_ignore_ascii_case(name) || t.eq_ignore_ascii_case(abbr))
}

/// Trailing token after the last comma, trimmed: `"Akron, OH"` → `"OH"`.
pub fn trailing_token(field: &str) -> &str {
    match field.rfind(',') {
        Some(i) => field[i + 1..].trim(),
        None => field.trim(),
    }
}
