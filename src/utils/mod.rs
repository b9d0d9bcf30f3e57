// Utility functions

/// `mailto:` target for the card's email anchor.
pub fn mailto_href(email: &str) -> String {
    format!("mailto:{}", email)
}

/// `tel:` target for the card's phone anchor.
pub fn tel_href(phone: &str) -> String {
    format!("tel:{}", phone)
}

/// JSONPlaceholder serves bare hostnames; the anchor needs a scheme.
pub fn website_url(website: &str) -> String {
    format!("https://{}", website)
}

/// DiceBear initials avatar, seeded by the user's display name.
pub fn avatar_url(name: &str) -> String {
    format!(
        "https://api.dicebear.com/7.x/initials/svg?seed={}",
        percent_encode(name)
    )
}

// Minimal percent-encoding for a query value. Unreserved characters per
// RFC 3986 pass through, everything else is encoded byte-wise.
fn percent_encode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}
