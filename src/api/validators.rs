use regex::Regex;

/// Hetzner API tokens are alphanumeric; the form caps them at 32 characters.
pub fn validate_api_token(token: &str) -> bool {
    let re = Regex::new(r"^[0-9A-Za-z]{1,32}$").unwrap();
    re.is_match(token)
}

/// The form caps the watched directory at 255 characters; it must be an
/// absolute path.
pub fn validate_directory(directory: &str) -> bool {
    !directory.is_empty() && directory.len() <= 255 && directory.starts_with('/')
}
