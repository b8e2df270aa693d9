//! Text helpers: capitalization, `{placeholder}` substitution and PascalCase conversion.
use std::fmt::Display;

pub trait StrExt {
    /// Uppercase the first character; the rest is left as-is.
    fn capitalize(&self) -> String;

    /// Replace every `{key}` with the corresponding value, applying pairs in iteration order.
    /// Placeholders without a value are left untouched.
    fn format_with<I, K, V>(&self, values: I) -> String
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Display;

    /// `"foo_bar-baz qux"` becomes `"FooBarBazQux"`: split on runs of `-`, `_` and whitespace,
    /// capitalize each word, lowercase the remainder.
    fn to_pascal_case(&self) -> String;
}

fn is_word_separator(c: char) -> bool {
    c == '-' || c == '_' || c.is_whitespace()
}

impl StrExt for str {
    fn capitalize(&self) -> String {
        let mut chars = self.chars();
        match chars.next() {
            None => String::new(),
            Some(first) => first.to_uppercase().chain(chars).collect(),
        }
    }

    fn format_with<I, K, V>(&self, values: I) -> String
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Display,
    {
        let mut result = self.to_owned();
        for (key, value) in values {
            let placeholder = format!("{{{}}}", key.as_ref());
            result = result.replace(&placeholder, &value.to_string());
        }
        result
    }

    fn to_pascal_case(&self) -> String {
        self.split(is_word_separator)
            .filter(|word| !word.is_empty())
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    None => String::new(),
                    Some(first) => first
                        .to_uppercase()
                        .chain(chars.flat_map(char::to_lowercase))
                        .collect(),
                }
            })
            .collect()
    }
}
