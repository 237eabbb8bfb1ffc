//! vCard 4.0 contact cards for exam authors.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Contact details of a teacher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub tel: Option<String>,
}

impl Contact {
    /// Build a contact, rejecting an empty name or obviously invalid fields.
    pub fn new(name: &str, email: Option<&str>, tel: Option<&str>) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            anyhow::bail!("contact name must not be empty");
        }

        let email = email.map(str::trim).filter(|e| !e.is_empty());
        if let Some(e) = email {
            if !e.contains('@') {
                anyhow::bail!("invalid email address: {e}");
            }
        }

        let tel = tel.map(str::trim).filter(|t| !t.is_empty());
        if let Some(t) = tel {
            let valid = t
                .chars()
                .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | ' ' | '.' | '(' | ')'));
            if !valid {
                anyhow::bail!("invalid phone number: {t}");
            }
        }

        Ok(Self {
            name: name.to_string(),
            email: email.map(String::from),
            tel: tel.map(String::from),
        })
    }

    /// Render as a vCard 4.0 string with CRLF line endings.
    pub fn to_vcard(&self) -> String {
        let mut lines = vec![
            "BEGIN:VCARD".to_string(),
            "VERSION:4.0".to_string(),
            format!("FN:{}", escape_text(&self.name)),
        ];
        if let Some(email) = &self.email {
            lines.push(format!("EMAIL:{}", escape_text(email)));
        }
        if let Some(tel) = &self.tel {
            lines.push(format!("TEL:{}", escape_text(tel)));
        }
        lines.push("END:VCARD".to_string());

        let mut card = lines.join("\r\n");
        card.push_str("\r\n");
        card
    }

    /// Write the vCard to `path`.
    pub fn write(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_vcard())
            .with_context(|| format!("failed to write vCard to {}", path.display()))?;
        Ok(())
    }
}

fn escape_text(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace(',', "\\,")
        .replace(';', "\\;")
        .replace('\n', "\\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_card() {
        let card = Contact::new("Ada Lovelace", None, None).unwrap().to_vcard();
        assert_eq!(
            card,
            "BEGIN:VCARD\r\nVERSION:4.0\r\nFN:Ada Lovelace\r\nEND:VCARD\r\n"
        );
    }

    #[test]
    fn full_card_field_order() {
        let card = Contact::new("Ada", Some("ada@example.org"), Some("+44 20 1234"))
            .unwrap()
            .to_vcard();
        let lines: Vec<_> = card.lines().collect();
        assert_eq!(
            lines,
            vec![
                "BEGIN:VCARD",
                "VERSION:4.0",
                "FN:Ada",
                "EMAIL:ada@example.org",
                "TEL:+44 20 1234",
                "END:VCARD"
            ]
        );
    }

    #[test]
    fn special_characters_are_escaped() {
        let card = Contact::new("Doe, Jane; PhD", None, None).unwrap().to_vcard();
        assert!(card.contains("FN:Doe\\, Jane\\; PhD"));
    }

    #[test]
    fn blank_optional_fields_are_dropped() {
        let contact = Contact::new("Ada", Some("  "), Some("")).unwrap();
        assert!(contact.email.is_none());
        assert!(contact.tel.is_none());
    }

    #[test]
    fn rejects_invalid_input() {
        assert!(Contact::new("   ", None, None).is_err());
        assert!(Contact::new("Ada", Some("not-an-email"), None).is_err());
        assert!(Contact::new("Ada", None, Some("call me")).is_err());
    }

    #[test]
    fn write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ada.vcf");
        Contact::new("Ada", None, None).unwrap().write(&path).unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().starts_with("BEGIN:VCARD"));
    }
}
