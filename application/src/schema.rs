use error_stack::Report;
use serde_json::Value;
use url::Url;

use kernel::KernelError;

use crate::transfer::BookDto;

/// Value constraints a single payload field must satisfy.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum FieldKind {
    Text,
    Uri,
    Integer,
    NonNegativeInteger,
}

/// One row of the declarative book schema.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub name: &'static str,
    pub kind: FieldKind,
}

/// The full book schema. Every field is required on create and on update;
/// partial payloads are rejected, never merged.
pub const BOOK_FIELDS: [FieldRule; 8] = [
    FieldRule {
        name: "isbn",
        kind: FieldKind::Text,
    },
    FieldRule {
        name: "amazon_url",
        kind: FieldKind::Uri,
    },
    FieldRule {
        name: "author",
        kind: FieldKind::Text,
    },
    FieldRule {
        name: "language",
        kind: FieldKind::Text,
    },
    FieldRule {
        name: "pages",
        kind: FieldKind::NonNegativeInteger,
    },
    FieldRule {
        name: "publisher",
        kind: FieldKind::Text,
    },
    FieldRule {
        name: "title",
        kind: FieldKind::Text,
    },
    FieldRule {
        name: "year",
        kind: FieldKind::Integer,
    },
];

impl FieldRule {
    fn check(&self, value: Option<&Value>) -> Option<String> {
        let Some(value) = value else {
            return Some(format!("\"{}\" is required", self.name));
        };
        match self.kind {
            FieldKind::Text => value
                .as_str()
                .is_none()
                .then(|| format!("\"{}\" must be a string", self.name)),
            FieldKind::Uri => match value.as_str() {
                None => Some(format!("\"{}\" must be a string", self.name)),
                Some(raw) if Url::parse(raw).is_err() => {
                    Some(format!("\"{}\" must be a valid URL", self.name))
                }
                Some(_) => None,
            },
            FieldKind::Integer => as_i32(value)
                .is_none()
                .then(|| format!("\"{}\" must be an integer", self.name)),
            FieldKind::NonNegativeInteger => match as_i32(value) {
                Some(n) if n >= 0 => None,
                _ => Some(format!("\"{}\" must be a non-negative integer", self.name)),
            },
        }
    }
}

fn as_i32(value: &Value) -> Option<i32> {
    value.as_i64().and_then(|n| i32::try_from(n).ok())
}

/// Walks the rule table over an untrusted payload and collects every
/// violated constraint, not just the first.
pub fn validate(rules: &[FieldRule], payload: &Value) -> Result<(), Vec<String>> {
    let Some(object) = payload.as_object() else {
        return Err(vec!["payload must be a JSON object".to_string()]);
    };
    let violations: Vec<String> = rules
        .iter()
        .filter_map(|rule| rule.check(object.get(rule.name)))
        .collect();
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

/// Validates a payload against [`BOOK_FIELDS`] and shapes it into a
/// [`BookDto`]. Fields outside the schema are ignored.
pub fn parse_book(payload: &Value) -> error_stack::Result<BookDto, KernelError> {
    validate(&BOOK_FIELDS, payload)
        .map_err(|violations| Report::new(KernelError::Validation(violations)))?;
    serde_json::from_value(payload.clone()).map_err(|error| {
        Report::from(error).change_context(KernelError::Validation(vec![
            "payload did not match the book schema".to_string(),
        ]))
    })
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use kernel::KernelError;

    use crate::schema::{parse_book, validate, BOOK_FIELDS};

    fn valid_payload() -> serde_json::Value {
        json!({
            "isbn": "0691023518",
            "amazon_url": "http://a.co/eobPtX2",
            "author": "RL Stine",
            "language": "english",
            "pages": 138,
            "publisher": "Scholastic",
            "title": "Night of the Living Dummy",
            "year": 1996,
        })
    }

    #[test]
    fn accepts_complete_payload() {
        assert_eq!(validate(&BOOK_FIELDS, &valid_payload()), Ok(()));

        let dto = parse_book(&valid_payload()).unwrap();
        assert_eq!(dto.isbn, "0691023518");
        assert_eq!(dto.pages, 138);
        assert_eq!(dto.year, 1996);
    }

    #[test]
    fn lists_every_missing_field() {
        let payload = json!({ "isbn": "0691161519" });
        let violations = validate(&BOOK_FIELDS, &payload).unwrap_err();

        assert_eq!(violations.len(), 7);
        assert!(violations.contains(&"\"amazon_url\" is required".to_string()));
        assert!(violations.contains(&"\"year\" is required".to_string()));
        assert!(!violations.iter().any(|v| v.contains("\"isbn\"")));
    }

    #[test]
    fn lists_every_type_violation() {
        let payload = json!({
            "isbn": 123141,
            "amazon_url": 1341,
            "author": 15365,
            "language": 1242141,
            "pages": "onetwo",
            "publisher": 134124,
            "title": 23123,
            "year": "fivethousand",
        });
        let violations = validate(&BOOK_FIELDS, &payload).unwrap_err();

        assert_eq!(violations.len(), 8);
    }

    #[test]
    fn rejects_malformed_url() {
        let mut payload = valid_payload();
        payload["amazon_url"] = json!("not a url");
        let violations = validate(&BOOK_FIELDS, &payload).unwrap_err();

        assert_eq!(violations, vec!["\"amazon_url\" must be a valid URL".to_string()]);
    }

    #[test]
    fn rejects_negative_pages_and_fractional_year() {
        let mut payload = valid_payload();
        payload["pages"] = json!(-1);
        payload["year"] = json!(1996.5);
        let violations = validate(&BOOK_FIELDS, &payload).unwrap_err();

        assert_eq!(
            violations,
            vec![
                "\"pages\" must be a non-negative integer".to_string(),
                "\"year\" must be an integer".to_string(),
            ]
        );
    }

    #[test]
    fn rejects_non_object_payload() {
        let violations = validate(&BOOK_FIELDS, &json!("just a string")).unwrap_err();
        assert_eq!(violations, vec!["payload must be a JSON object".to_string()]);
    }

    #[test]
    fn ignores_fields_outside_the_schema() {
        let mut payload = valid_payload();
        payload["shelf"] = json!("A3");
        assert!(parse_book(&payload).is_ok());
    }

    #[test]
    fn parse_reports_validation_context() {
        let report = parse_book(&json!({})).unwrap_err();
        match report.current_context() {
            KernelError::Validation(violations) => assert_eq!(violations.len(), 8),
            other => panic!("expected validation error, got {other}"),
        }
    }
}
