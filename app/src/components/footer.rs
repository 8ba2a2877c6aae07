use chrono::{Datelike as _, Utc};
use leptos::{
    html::{div, footer},
    prelude::*,
};

/// Name printed in the copyright line.
pub const SITE_NAME: &str = "MyApp";

pub fn copyright(year: i32) -> String {
    format!("\u{a9} {year} {SITE_NAME}. All rights reserved.")
}

pub fn component() -> impl IntoView {
    footer().class("mt-16 bg-gray-100 border-t").child(
        div()
            .class("container py-6 px-4 mx-auto text-sm text-center text-gray-600")
            .child(copyright(Utc::now().year())),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copyright_line() {
        assert_eq!(copyright(2025), "\u{a9} 2025 MyApp. All rights reserved.");
    }
}
