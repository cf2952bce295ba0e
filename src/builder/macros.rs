//! Macros for declaring rule sets.

/// Declare an ordered [`RuleSet`](crate::core::RuleSet) from named predicates.
///
/// Rules appear in the resulting set in the order they are written.
///
/// # Example
///
/// ```
/// use signup_guard::password_rules;
///
/// let rules = password_rules! {
///     "length" => "At least 12 characters": |p| p.chars().count() >= 12,
///     "no_spaces" => "No spaces": |p| !p.contains(' '),
/// };
///
/// assert_eq!(rules.len(), 2);
/// assert!(rules.evaluate("correct horse battery").iter().any(|o| !o.passed));
/// ```
#[macro_export]
macro_rules! password_rules {
    (
        $(
            $name:literal => $description:literal : $predicate:expr
        ),* $(,)?
    ) => {
        $crate::core::RuleSet::from_rules(vec![
            $(
                $crate::core::PasswordRule::new($name, $description, $predicate)
            ),*
        ])
    };
}

#[cfg(test)]
mod tests {
    use crate::core::RuleSet;

    #[test]
    fn password_rules_macro_preserves_order() {
        let rules = password_rules! {
            "b" => "second letter": |p| p.contains('b'),
            "a" => "first letter": |p| p.contains('a'),
        };

        let names: Vec<&str> = rules.iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn password_rules_macro_can_restate_standard_rules() {
        let declared = password_rules! {
            "length" => "Минимум 8 символов": |p| p.chars().count() >= 8,
            "uppercase" => "Заглавная буква": |p| p.chars().any(|c| c.is_ascii_uppercase()),
            "lowercase" => "Строчная буква": |p| p.chars().any(|c| c.is_ascii_lowercase()),
            "number" => "Цифра": |p| p.chars().any(|c| c.is_ascii_digit()),
            "special" => "Спецсимвол": |p| p.chars().any(|c| "!@#$%^&*(),.?\":{}|<>".contains(c)),
        };
        let standard = RuleSet::standard();

        for password in ["", "abc", "Passw0rd!", "PASSWORD", "12345678", "a{b"] {
            assert_eq!(declared.evaluate(password), standard.evaluate(password));
        }
    }

    #[test]
    fn password_rules_macro_accepts_empty_list() {
        let rules = password_rules! {};

        assert!(rules.is_empty());
    }
}
