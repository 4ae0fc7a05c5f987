//! Per-field predicate checks invoked by the document layer before
//! persistence.
//!
//! Validators are pure over the candidate value except for the
//! cross-collection variants, which read the persisted collections through
//! [`CollectionRead`]. Each check returns success or a [`ValidationError`]
//! naming the violated constraint.

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;
use serde_json::Value;

use crate::error::ValidationError;

/// Read-only view over persisted collections, used by existence and
/// uniqueness validators. Keeps the model crate storage-agnostic.
pub trait CollectionRead {
    fn contains_key(&self, collection: &str, key: &str) -> bool;
    fn field_of(&self, collection: &str, key: &str, field: &str) -> Option<Value>;
    fn email_taken(&self, collection: &str, email: &str) -> bool;
}

/// A [`CollectionRead`] with no collections. Handy for validating
/// documents whose chains carry no cross-collection checks.
pub struct NoCollections;

impl CollectionRead for NoCollections {
    fn contains_key(&self, _collection: &str, _key: &str) -> bool {
        false
    }

    fn field_of(&self, _collection: &str, _key: &str, _field: &str) -> Option<Value> {
        None
    }

    fn email_taken(&self, _collection: &str, _email: &str) -> bool {
        false
    }
}

/// Ambient state validators evaluate against: the run's reference date and
/// the persisted collections.
pub struct ValidationContext<'a> {
    pub today: NaiveDate,
    pub store: &'a dyn CollectionRead,
}

/// One link in a field's validator chain.
#[derive(Debug, Clone)]
pub enum Validator {
    /// Field must be present and neither null nor an empty string.
    NotNull,
    /// Field must be a boolean.
    Bool,
    /// `local@domain.tld` shape.
    Email,
    /// `YYYY-MM-DD`; absent or empty passes.
    DateFormat,
    /// `YYYY-MM-DD`, strictly before the run's reference date.
    DatePast,
    /// `\d{3}-\d{2}-\d{4}`.
    Ssn,
    /// Object carrying zip, country, city, street, and building.
    Address,
    /// Non-empty list of `{question, answer}` pairs with non-empty text.
    SecurityQuestions,
    /// Value must belong to a closed enumeration.
    Enumeration(&'static [&'static str]),
    /// Referenced key must exist in the patients collection.
    PatientExists,
    /// Referenced key, when present, must exist in the staff collection.
    StaffExists,
    /// Referenced key, when present, must exist in the staff collection
    /// and carry the `doctor` designation.
    DoctorExists,
    /// No document in the target collection may already hold this email.
    EmailUnique { collection: &'static str },
}

impl Validator {
    pub fn check(
        &self,
        field: &str,
        value: Option<&Value>,
        ctx: &ValidationContext<'_>,
    ) -> Result<(), ValidationError> {
        match self {
            Validator::NotNull => check_not_null(field, value),
            // Everything else treats an absent or null field as "nothing to
            // check"; chains that require presence lead with NotNull.
            _ => match value {
                None | Some(Value::Null) => Ok(()),
                Some(value) => self.check_present(field, value, ctx),
            },
        }
    }

    fn check_present(
        &self,
        field: &str,
        value: &Value,
        ctx: &ValidationContext<'_>,
    ) -> Result<(), ValidationError> {
        match self {
            Validator::NotNull => unreachable!("handled in check"),
            Validator::Bool => match value {
                Value::Bool(_) => Ok(()),
                _ => Err(ValidationError::new(field, "expected a boolean")),
            },
            Validator::Email => check_email(field, value),
            Validator::DateFormat => check_date_format(field, value),
            Validator::DatePast => check_date_past(field, value, ctx.today),
            Validator::Ssn => check_ssn(field, value),
            Validator::Address => check_address(field, value),
            Validator::SecurityQuestions => check_security_questions(field, value),
            Validator::Enumeration(allowed) => check_enumeration(field, value, allowed),
            Validator::PatientExists => {
                let key = require_str(field, value)?;
                if ctx.store.contains_key(crate::schema::PATIENTS, key) {
                    Ok(())
                } else {
                    Err(ValidationError::new(field, "patient id doesn't exist"))
                }
            }
            Validator::StaffExists => {
                let key = require_str(field, value)?;
                if key.is_empty() || ctx.store.contains_key(crate::schema::STAFF, key) {
                    Ok(())
                } else {
                    Err(ValidationError::new(field, "staff id doesn't exist"))
                }
            }
            Validator::DoctorExists => check_doctor_exists(field, value, ctx),
            Validator::EmailUnique { collection } => {
                let email = require_str(field, value)?;
                if ctx.store.email_taken(collection, email) {
                    Err(ValidationError::new(
                        field,
                        "this email is already registered in the system",
                    ))
                } else {
                    Ok(())
                }
            }
        }
    }
}

const ADDRESS_REQUIRED_FIELDS: &[&str] = &["zip", "country", "city", "street", "building"];

fn check_not_null(field: &str, value: Option<&Value>) -> Result<(), ValidationError> {
    match value {
        None | Some(Value::Null) => Err(ValidationError::new(field, "must not be null")),
        Some(Value::String(s)) if s.is_empty() => {
            Err(ValidationError::new(field, "must not be null or empty"))
        }
        Some(_) => Ok(()),
    }
}

fn check_email(field: &str, value: &Value) -> Result<(), ValidationError> {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    let re = EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[^@\s]+@[^@\s]+\.[A-Za-z]{2,}$").expect("email regex compiles")
    });
    let email = require_str(field, value)?;
    if re.is_match(email) {
        Ok(())
    } else {
        Err(ValidationError::new(field, "not a valid email address"))
    }
}

fn parse_date(field: &str, raw: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
        ValidationError::new(
            field,
            format!("date should be formatted as YYYY-MM-DD, got '{raw}'"),
        )
    })
}

fn check_date_format(field: &str, value: &Value) -> Result<(), ValidationError> {
    let raw = require_str(field, value)?;
    if raw.is_empty() {
        return Ok(());
    }
    parse_date(field, raw).map(|_| ())
}

fn check_date_past(field: &str, value: &Value, today: NaiveDate) -> Result<(), ValidationError> {
    let raw = require_str(field, value)?;
    let date = parse_date(field, raw)?;
    if date >= today {
        return Err(ValidationError::new(field, "date is not in the past"));
    }
    Ok(())
}

fn check_ssn(field: &str, value: &Value) -> Result<(), ValidationError> {
    static SSN_RE: OnceLock<Regex> = OnceLock::new();
    let re = SSN_RE
        .get_or_init(|| Regex::new(r"^\d{3}-\d{2}-\d{4}$").expect("ssn regex compiles"));
    let ssn = require_str(field, value)?;
    if re.is_match(ssn) {
        Ok(())
    } else {
        Err(ValidationError::new(
            field,
            "ssn should be formatted as 123-45-6789",
        ))
    }
}

fn check_address(field: &str, value: &Value) -> Result<(), ValidationError> {
    let object = value
        .as_object()
        .ok_or_else(|| ValidationError::new(field, "address must be an object"))?;
    for required in ADDRESS_REQUIRED_FIELDS {
        if !object.contains_key(*required) {
            return Err(ValidationError::new(
                field,
                format!("address field '{required}' is missing"),
            ));
        }
    }
    Ok(())
}

fn check_security_questions(field: &str, value: &Value) -> Result<(), ValidationError> {
    let list = value
        .as_array()
        .ok_or_else(|| ValidationError::new(field, "security questions must be a list"))?;
    if list.is_empty() {
        return Err(ValidationError::new(
            field,
            "security questions must not be empty",
        ));
    }
    for entry in list {
        let pair = entry
            .as_object()
            .ok_or_else(|| ValidationError::new(field, "bad security question format"))?;
        for part in ["question", "answer"] {
            match pair.get(part).and_then(Value::as_str) {
                Some(text) if !text.is_empty() => {}
                Some(_) => return Err(ValidationError::new(field, format!("empty {part}"))),
                None => {
                    return Err(ValidationError::new(field, "bad security question format"));
                }
            }
        }
    }
    Ok(())
}

fn check_enumeration(
    field: &str,
    value: &Value,
    allowed: &[&str],
) -> Result<(), ValidationError> {
    let candidate = require_str(field, value)?;
    if allowed.contains(&candidate) {
        Ok(())
    } else {
        Err(ValidationError::new(
            field,
            format!("'{candidate}' is not a permitted value"),
        ))
    }
}

fn check_doctor_exists(
    field: &str,
    value: &Value,
    ctx: &ValidationContext<'_>,
) -> Result<(), ValidationError> {
    let key = require_str(field, value)?;
    if key.is_empty() {
        return Ok(());
    }
    let designation = ctx
        .store
        .field_of(crate::schema::STAFF, key, "designation")
        .and_then(|value| value.as_str().map(str::to_string));
    match designation {
        Some(designation) if designation == "doctor" => Ok(()),
        _ => Err(ValidationError::new(field, "doctor id doesn't exist")),
    }
}

fn require_str<'a>(field: &str, value: &'a Value) -> Result<&'a str, ValidationError> {
    value
        .as_str()
        .ok_or_else(|| ValidationError::new(field, "expected a string"))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    struct StubStore;

    impl CollectionRead for StubStore {
        fn contains_key(&self, collection: &str, key: &str) -> bool {
            match collection {
                crate::schema::PATIENTS => key == "100",
                crate::schema::STAFF => key == "7" || key == "8",
                _ => false,
            }
        }

        fn field_of(&self, collection: &str, key: &str, field: &str) -> Option<Value> {
            if collection == crate::schema::STAFF && field == "designation" {
                return match key {
                    "7" => Some(json!("doctor")),
                    "8" => Some(json!("nurse")),
                    _ => None,
                };
            }
            None
        }

        fn email_taken(&self, _collection: &str, email: &str) -> bool {
            email == "taken@clinic.ru"
        }
    }

    fn ctx() -> ValidationContext<'static> {
        ValidationContext {
            today: NaiveDate::from_ymd_opt(2026, 8, 26).unwrap(),
            store: &StubStore,
        }
    }

    fn check(validator: Validator, value: Value) -> Result<(), ValidationError> {
        validator.check("field", Some(&value), &ctx())
    }

    #[test]
    fn not_null_rejects_missing_null_and_empty() {
        let ctx = ctx();
        assert!(Validator::NotNull.check("f", None, &ctx).is_err());
        assert!(Validator::NotNull.check("f", Some(&Value::Null), &ctx).is_err());
        assert!(Validator::NotNull.check("f", Some(&json!("")), &ctx).is_err());
        assert!(Validator::NotNull.check("f", Some(&json!("x")), &ctx).is_ok());
        assert!(Validator::NotNull.check("f", Some(&json!(false)), &ctx).is_ok());
    }

    #[test]
    fn date_format_accepts_iso_and_empty() {
        assert!(check(Validator::DateFormat, json!("2024-02-29")).is_ok());
        assert!(check(Validator::DateFormat, json!("")).is_ok());
        assert!(check(Validator::DateFormat, json!("29-02-2024")).is_err());
        assert!(check(Validator::DateFormat, json!("2024-13-01")).is_err());
    }

    #[test]
    fn date_past_requires_strictly_earlier_date() {
        assert!(check(Validator::DatePast, json!("1990-05-01")).is_ok());
        assert!(check(Validator::DatePast, json!("2026-08-26")).is_err());
        assert!(check(Validator::DatePast, json!("2030-01-01")).is_err());
    }

    #[test]
    fn ssn_must_match_pattern() {
        assert!(check(Validator::Ssn, json!("123-45-6789")).is_ok());
        assert!(check(Validator::Ssn, json!("123456789")).is_err());
        assert!(check(Validator::Ssn, json!("12-345-6789")).is_err());
    }

    #[test]
    fn address_requires_full_field_set() {
        let full = json!({
            "zip": "420111", "country": "Россия", "state": "Республика Татарстан",
            "city": "Казань", "street": "Баумана", "building": "5", "flat": 12
        });
        assert!(check(Validator::Address, full).is_ok());

        let missing = json!({"zip": "420111", "country": "Россия", "city": "Казань",
            "street": "Баумана"});
        let err = check(Validator::Address, missing).unwrap_err();
        assert!(err.message.contains("building"));
    }

    #[test]
    fn security_questions_require_nonempty_pairs() {
        let good = json!([{"question": "Mother's maiden name?", "answer": "Smith"}]);
        assert!(check(Validator::SecurityQuestions, good).is_ok());

        assert!(check(Validator::SecurityQuestions, json!([])).is_err());
        let empty_answer = json!([{"question": "Pet?", "answer": ""}]);
        assert!(check(Validator::SecurityQuestions, empty_answer).is_err());
        let missing_question = json!([{"answer": "Smith"}]);
        assert!(check(Validator::SecurityQuestions, missing_question).is_err());
    }

    #[test]
    fn enumeration_membership() {
        let v = Validator::Enumeration(crate::enumerators::PAYMENT_TYPES);
        assert!(check(v.clone(), json!("Cash")).is_ok());
        assert!(check(v, json!("Barter")).is_err());
    }

    #[test]
    fn doctor_reference_requires_doctor_designation() {
        assert!(check(Validator::DoctorExists, json!("7")).is_ok());
        // Exists but is a nurse.
        assert!(check(Validator::DoctorExists, json!("8")).is_err());
        assert!(check(Validator::DoctorExists, json!("999")).is_err());
        // Absent or empty doctor reference is allowed.
        assert!(check(Validator::DoctorExists, json!("")).is_ok());
        assert!(
            Validator::DoctorExists
                .check("doctor", None, &ctx())
                .is_ok()
        );
    }

    #[test]
    fn patient_and_staff_references_resolve() {
        assert!(check(Validator::PatientExists, json!("100")).is_ok());
        assert!(check(Validator::PatientExists, json!("101")).is_err());
        assert!(check(Validator::StaffExists, json!("8")).is_ok());
        assert!(check(Validator::StaffExists, json!("999")).is_err());
    }

    #[test]
    fn email_uniqueness_reads_target_collection() {
        let v = Validator::EmailUnique {
            collection: crate::schema::PATIENTS,
        };
        assert!(check(v.clone(), json!("fresh@clinic.ru")).is_ok());
        assert!(check(v, json!("taken@clinic.ru")).is_err());
    }
}
