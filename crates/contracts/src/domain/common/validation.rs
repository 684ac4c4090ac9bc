/// Field must contain something other than whitespace.
pub fn require_non_blank(value: &str, field_label: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{} wajib diisi", field_label));
    }
    Ok(())
}

/// Optional e-mail: empty is accepted, otherwise a single `@` with text on both sides.
pub fn require_email(value: &str) -> Result<(), String> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(());
    }
    match value.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => {
            Ok(())
        }
        _ => Err("Format email tidak valid".into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_non_blank() {
        assert!(require_non_blank("Kamera", "Nama").is_ok());
        assert_eq!(
            require_non_blank("   ", "Nama"),
            Err("Nama wajib diisi".to_string())
        );
    }

    #[test]
    fn test_require_email() {
        assert!(require_email("").is_ok());
        assert!(require_email("budi@example.com").is_ok());
        assert!(require_email("budi.example.com").is_err());
        assert!(require_email("@example.com").is_err());
        assert!(require_email("a@b@c").is_err());
    }
}
