#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

#[macro_export]
macro_rules! date_rule {
    (
        name: $name:expr,
        pattern: $pat:literal
        $(, buckets: $buckets:expr)?
        , prod: |$groups:ident, $order:ident| $body:block
        $(,)?
    ) => {{
        $crate::DateRule {
            name: $name,
            pattern: $crate::regex!($pat),
            buckets: { 0 $(| $buckets)? },
            production: Box::new(
                move |$groups: &[&str], $order: $crate::DateOrder| -> Option<chrono::NaiveDate> { $body },
            ),
        }
    }};
}
