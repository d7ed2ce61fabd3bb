//! Declarative Configuration Example
//!
//! Loads a validation plan from JSON, registers a custom named rule the
//! document refers to, and shows configuration errors surfacing before any
//! form is validated.

use validity::prelude::*;
use validity::serde_impl::ConfigSpec;

const SIGNUP: &str = r##"{
    "fields": {
        "#email": [{ "rule": "required" }, { "rule": "email" }],
        "#zip": [{ "rule": "zip" }]
    },
    "showAlerts": false,
    "messages": { "zip": "Enter a five digit ZIP code." }
}"##;

const TYPO: &str = r##"{ "fields": { "#email": [{ "rule": "emial" }] } }"##;

fn registry() -> RuleRegistry {
    let mut registry = RuleRegistry::new();
    registry.register("zip", |f: &FieldSnapshot| {
        f.value.len() == 5 && f.value.bytes().all(|b| b.is_ascii_digit())
    });
    registry
}

fn load(json: &str) -> Result<SubmissionController, Box<dyn std::error::Error>> {
    let spec: ConfigSpec = serde_json::from_str(json)?;
    Ok(SubmissionController::from_config(spec.into(), &registry())?)
}

fn main() {
    println!("=== Declarative Configuration Example ===\n");

    match load(TYPO) {
        Ok(_) => println!("unexpected: typo accepted"),
        Err(err) => println!("Rejected before validation: {}\n", err),
    }

    let controller = match load(SIGNUP) {
        Ok(controller) => controller,
        Err(err) => {
            eprintln!("bad configuration: {}", err);
            return;
        }
    };

    for zip in ["9021", "90210"] {
        let mut form = MemoryForm::new("signup")
            .with_field("#email", MemoryField::new("email", "a@b.co"))
            .with_field("#zip", MemoryField::new("zip", zip));
        let outcome = controller.run(&mut form);
        match outcome.errors().current() {
            Some(error) => println!("zip {:?}: {}", zip, error),
            None => println!("zip {:?}: ok", zip),
        }
    }
}
