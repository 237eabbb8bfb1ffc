//! The `giftq init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("giftq.toml").exists() {
        println!("giftq.toml already exists, skipping.");
    } else {
        std::fs::write("giftq.toml", SAMPLE_CONFIG)?;
        println!("Created giftq.toml");
    }

    std::fs::create_dir_all("data")?;
    let sample_path = std::path::Path::new("data/sample.gift");
    if sample_path.exists() {
        println!("data/sample.gift already exists, skipping.");
    } else {
        std::fs::write(sample_path, SAMPLE_QUESTIONS)?;
        println!("Created data/sample.gift");
    }

    println!("\nNext steps:");
    println!("  1. Add your .gift files to data/");
    println!("  2. Run: giftq find --query planet");
    println!("  3. Run: giftq profile --exam data/sample.gift");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# giftq configuration

data_dir = "./data"
extension = "gift"

# Bounds for `giftq generate`
min_questions = 15
max_questions = 20
"#;

const SAMPLE_QUESTIONS: &str = r#"// Sample question bank
$CATEGORY: $course$/Astronomy

::Earth shape:: The Earth is roughly spherical. {T}

::Planet count:: How many planets orbit the Sun? {#8}

::Largest planet:: Which planet is the largest? {=Jupiter ~Mars ~Venus}

::Red planet:: Name the red planet. {=Mars =the red planet}

::Moons:: Match each planet with one of its moons. {
=Earth -> Moon
=Mars -> Phobos
=Jupiter -> Europa
}

::Observation:: Describe the last time you looked at the night sky. {}

::Reading:: The next questions are about the solar system.
"#;
