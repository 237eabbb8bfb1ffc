//! The `giftq contact` command.

use std::path::PathBuf;

use anyhow::Result;

use giftq_report::Contact;

pub fn execute(
    name: String,
    email: Option<String>,
    tel: Option<String>,
    output: Option<PathBuf>,
) -> Result<()> {
    let contact = Contact::new(&name, email.as_deref(), tel.as_deref())?;

    match output {
        Some(path) => {
            contact.write(&path)?;
            println!("Created {}", path.display());
        }
        None => print!("{}", contact.to_vcard()),
    }

    Ok(())
}
