//! Field validators for the contact form. Pure functions over the raw field values;
//! the DOM layer maps the returned messages onto the per-field error elements.

/// Name: required, letters and spaces only, at least two characters.
pub fn name(value: &str) -> Result<(), &'static str> {
    let value = value.trim();

    if value.is_empty() {
        return Err("Name is required");
    }

    if !value
        .chars()
        .all(|c| c.is_ascii_alphabetic() || c.is_whitespace())
    {
        return Err("Name can only contain letters and spaces");
    }

    if value.chars().count() < 2 {
        return Err("Name must be at least 2 characters long");
    }

    Ok(())
}

/// Email: required, structurally `local@host.tld` with no whitespace.
pub fn email(value: &str) -> Result<(), &'static str> {
    let value = value.trim();

    if value.is_empty() {
        return Err("Email is required");
    }

    if !is_structurally_valid_email(value) {
        return Err("Please enter a valid email address");
    }

    Ok(())
}

fn is_structurally_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    // A second `@` anywhere in the domain is also malformed.
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Phone: optional, but when present digits only and at least ten of them.
pub fn phone(value: &str) -> Result<(), &'static str> {
    let value = value.trim();

    if value.is_empty() {
        return Ok(());
    }

    if !value.chars().all(|c| c.is_ascii_digit()) {
        return Err("Phone number can only contain digits");
    }

    if value.chars().count() < 10 {
        return Err("Phone number must be at least 10 digits long");
    }

    Ok(())
}

/// Subject: a selection is required.
pub fn subject(value: &str) -> Result<(), &'static str> {
    if value.is_empty() {
        return Err("Please select a subject");
    }

    Ok(())
}

/// Message: required.
pub fn message(value: &str) -> Result<(), &'static str> {
    if value.trim().is_empty() {
        return Err("Message is required");
    }

    Ok(())
}

/// Strip everything but digits from a phone field and cap the length, mirroring what
/// the input filter enforces as the user types.
pub fn sanitize_phone(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).take(15).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_rules() {
        assert_eq!(name(""), Err("Name is required"));
        assert_eq!(name("   "), Err("Name is required"));
        assert_eq!(name("A1"), Err("Name can only contain letters and spaces"));
        assert_eq!(name("A"), Err("Name must be at least 2 characters long"));
        assert_eq!(name("Mary Jane"), Ok(()));
    }

    #[test]
    fn email_rules() {
        assert_eq!(email(""), Err("Email is required"));
        assert_eq!(email("no-at-sign"), Err("Please enter a valid email address"));
        assert_eq!(email("a@b"), Err("Please enter a valid email address"));
        assert_eq!(email("a@.com"), Err("Please enter a valid email address"));
        assert_eq!(email("a@b."), Err("Please enter a valid email address"));
        assert_eq!(email("a b@c.d"), Err("Please enter a valid email address"));
        assert_eq!(email("player@example.com"), Ok(()));
        assert_eq!(email("player@mail.example.co.uk"), Ok(()));
    }

    #[test]
    fn phone_is_optional_but_strict_when_present() {
        assert_eq!(phone(""), Ok(()));
        assert_eq!(phone("12345abc90"), Err("Phone number can only contain digits"));
        assert_eq!(
            phone("123456789"),
            Err("Phone number must be at least 10 digits long")
        );
        assert_eq!(phone("4477151123"), Ok(()));
    }

    #[test]
    fn subject_and_message_are_required() {
        assert_eq!(subject(""), Err("Please select a subject"));
        assert_eq!(subject("support"), Ok(()));
        assert_eq!(message("  \n "), Err("Message is required"));
        assert_eq!(message("hello"), Ok(()));
    }

    #[test]
    fn phone_sanitizer_strips_and_caps() {
        assert_eq!(sanitize_phone("+44 (77) 151-1234"), "44771511234");
        assert_eq!(sanitize_phone("123456789012345678"), "123456789012345");
    }
}
