//! Random tokens and slugs.

/// 16 random bytes as 32 lowercase hex characters.
///
/// Used for share links, public view links and the OAuth state parameter.
pub fn generate_token() -> String {
    let bytes: [u8; 16] = rand::random();
    hex::encode(bytes)
}

/// Lowercases `name` and collapses every run of characters outside `[a-z0-9]`
/// into a single dash, trimming dashes from both ends.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;

    for c in name.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
    }

    slug
}

/// `slugify(name)` followed by a dash and `suffix_bytes` random bytes in hex.
pub fn generate_slug(name: &str, suffix_bytes: usize) -> String {
    let mut base = slugify(name);
    if base.is_empty() {
        base = "organization".to_string();
    }

    let suffix: Vec<u8> = (0..suffix_bytes).map(|_| rand::random::<u8>()).collect();

    format!("{}-{}", base, hex::encode(suffix))
}
