//! Registration Form
//!
//! This example walks the registration form through a typical session.
//!
//! Key concepts:
//! - Rule indicators repainted on every password keystroke
//! - Tri-state confirmation feedback (undetermined, match, mismatch)
//! - Submission gated with every violation reported at once
//!
//! Run with: cargo run --example registration_form

use signup_guard::form::{Field, RegistrationForm, SubmitDecision};

fn print_rules(form: &RegistrationForm) {
    for rule in form.render().rules {
        println!(
            "    [{}] {} ({})",
            rule.status.text_class(),
            rule.description,
            rule.name
        );
    }
}

fn main() {
    println!("=== Registration Form Example ===\n");

    let mut form = RegistrationForm::default();

    println!("Step 1: Empty form");
    print_rules(&form);
    println!();

    println!("Step 2: Typing \"abc\"");
    form.on_password_input("abc");
    print_rules(&form);
    println!();

    println!("Step 3: Submitting too early");
    if let SubmitDecision::Blocked {
        message,
        violations,
    } = form.on_submit()
    {
        println!("  Blocked: {message}");
        for violation in violations {
            println!("    - {violation}");
        }
    }
    println!();

    println!("Step 4: Strong password, confirmation typed with a typo");
    form.on_password_input("Passw0rd!");
    let indicator = form.on_confirmation_input("Passw0rd");
    println!(
        "  Confirmation: {:?} {}",
        indicator.state,
        indicator.message.unwrap_or_default()
    );
    println!();

    println!("Step 5: Showing the confirmation field and fixing it");
    let visibility = form.toggle_visibility(Field::Confirmation);
    println!("  Confirmation input type: {}", visibility.input_type());
    let indicator = form.on_confirmation_input("Passw0rd!");
    println!(
        "  Confirmation: {:?} {}",
        indicator.state,
        indicator.message.unwrap_or_default()
    );
    println!();

    println!("Step 6: Submitting");
    println!("  Allowed: {}", form.on_submit().is_allowed());

    println!("\n=== Example Complete ===");
}
