//! Newsletter Form Example
//!
//! Walks one signup form through several submission attempts:
//! - Untouched placeholder text rejected by `required`
//! - Short-circuit on the first failing field
//! - A custom inline rule next to the built-ins
//! - Alerts routed through a notifier, completion callback on every attempt

use validity::prelude::*;

fn controller() -> SubmissionController {
    let config = Configuration::new()
        .field(
            "#search",
            [Rule::required().with_message("Type something to search for.")],
        )
        .field("#email", [Rule::required(), Rule::email()])
        .field(
            "#login",
            [Rule::predicate(|f: &FieldSnapshot| f.value == "Secret key")
                .with_message("Invalid secret key.")],
        )
        .on_error(|form, errors| {
            if let Some(error) = errors.current() {
                println!("  [{}] highlight {}", form.id(), error.selector);
            }
        })
        .callback(|form, status, _| {
            println!("  [{}] submit allowed: {}", form.id(), status);
        });

    match SubmissionController::from_config(config, &RuleRegistry::new()) {
        Ok(controller) => controller.with_notifier(|message: &str| println!("  ALERT: {}", message)),
        Err(err) => {
            eprintln!("bad configuration: {}", err);
            std::process::exit(1);
        }
    }
}

fn set(form: &mut MemoryForm, selector: &str, value: &str) {
    if let Some(field) = form.field_mut(selector) {
        field.set_value(value.to_string());
    }
}

fn main() {
    // cargo run --example newsletter --features tracing
    #[cfg(feature = "tracing")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Newsletter Form Example ===\n");

    let controller = controller();
    let mut form = MemoryForm::new("newsletter")
        .with_field("#search", MemoryField::with_default("search", "Search"))
        .with_field("#email", MemoryField::with_default("email", "you@example.com"))
        .with_field("#login", MemoryField::new("login", ""));

    println!("Attempt 1: untouched form");
    controller.run_validation(&mut form);
    println!("  #search now shows {:?}\n", form.value("#search"));

    println!("Attempt 2: search filled, bad email");
    set(&mut form, "#search", "rust");
    set(&mut form, "#email", "not-an-email");
    controller.run_validation(&mut form);

    println!("\nAttempt 3: good email, wrong key");
    set(&mut form, "#email", "reader@example.com");
    set(&mut form, "#login", "guess");
    let outcome = controller.run(&mut form);
    println!("  phases: {:?}", outcome.phase_trail());

    println!("\nAttempt 4: everything valid");
    set(&mut form, "#login", "Secret key");
    let outcome = controller.run(&mut form);
    println!("  fields checked: {}", outcome.fields_checked());
}
