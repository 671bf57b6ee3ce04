//! Template filters.
//!
//! The filters the templates rely on: date formatting and CSS
//! minification. All of them are pure; a bad input fails the render, and
//! the render failure fails the build.

use chrono::NaiveDate;
use minijinja::{Environment, Error, ErrorKind};

/// Default date pattern, `2024-03-05` style.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Register all filters on a template environment.
pub fn register(env: &mut Environment<'_>) {
    env.add_filter("date", date);
    env.add_filter("readable_date", readable_date);
    env.add_filter("html_date_string", readable_date);
    env.add_filter("cssmin", cssmin);
}

/// Format an ISO date with an optional chrono pattern.
pub fn date(value: String, format: Option<String>) -> Result<String, Error> {
    use chrono::format::{Item, StrftimeItems};
    use std::fmt::Write;

    let parsed = NaiveDate::parse_from_str(&value, "%Y-%m-%d").map_err(|e| {
        Error::new(
            ErrorKind::InvalidOperation,
            format!("invalid date {value:?}: {e}"),
        )
    })?;

    let pattern = format.unwrap_or_else(|| DEFAULT_DATE_FORMAT.to_string());

    // Unknown specifiers parse as Item::Error; formatting one panics, so
    // reject the pattern up front.
    let items: Vec<Item> = StrftimeItems::new(&pattern).collect();
    if items.contains(&Item::Error) {
        return Err(Error::new(
            ErrorKind::InvalidOperation,
            format!("invalid date pattern {pattern:?}"),
        ));
    }

    // Time-of-day specifiers are valid chrono items but cannot be
    // rendered from a bare date; write! surfaces that as an error.
    let mut out = String::new();
    write!(out, "{}", parsed.format_with_items(items.into_iter())).map_err(|_| {
        Error::new(
            ErrorKind::InvalidOperation,
            format!("date pattern {pattern:?} cannot format {value:?}"),
        )
    })?;

    Ok(out)
}

/// The fixed-pattern variant used for visible dates and `<time datetime>`.
pub fn readable_date(value: String) -> Result<String, Error> {
    date(value, None)
}

/// Minify CSS with lightningcss.
pub fn cssmin(css: String) -> Result<String, Error> {
    use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

    let stylesheet = StyleSheet::parse(&css, ParserOptions::default()).map_err(|e| {
        Error::new(ErrorKind::InvalidOperation, format!("CSS parse error: {e}"))
    })?;

    let minified = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..Default::default()
        })
        .map_err(|e| Error::new(ErrorKind::InvalidOperation, format!("CSS minify error: {e}")))?;

    Ok(minified.code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pattern_round_trips_iso_dates() {
        assert_eq!(date("2024-03-05".to_string(), None).unwrap(), "2024-03-05");
    }

    #[test]
    fn custom_patterns_are_honored() {
        assert_eq!(
            date("2024-03-05".to_string(), Some("%B %e, %Y".to_string())).unwrap(),
            "March  5, 2024"
        );
    }

    #[test]
    fn invalid_dates_error_out() {
        assert!(date("yesterday".to_string(), None).is_err());
    }

    #[test]
    fn unknown_pattern_specifiers_error_out() {
        assert!(date("2024-03-05".to_string(), Some("%Q".to_string())).is_err());
    }

    #[test]
    fn time_of_day_patterns_error_out_for_dates() {
        assert!(date("2024-03-05".to_string(), Some("%H:%M".to_string())).is_err());
    }

    #[test]
    fn cssmin_strips_whitespace() {
        let css = ".card {\n    background-color: blue;\n    padding: 10px;\n}\n";

        let minified = cssmin(css.to_string()).unwrap();

        assert!(!minified.contains('\n'));
        assert!(minified.contains(".card"));
    }

    #[test]
    fn cssmin_rejects_malformed_css() {
        assert!(cssmin("} .card {".to_string()).is_err());
    }

    #[test]
    fn filters_work_inside_templates() {
        let mut env = Environment::new();
        register(&mut env);
        env.add_template("t", "{{ d | readable_date }} / {{ d | date('%Y') }}")
            .unwrap();

        let out = env
            .get_template("t")
            .unwrap()
            .render(minijinja::context! { d => "2024-03-05" })
            .unwrap();

        assert_eq!(out, "2024-03-05 / 2024");
    }
}
