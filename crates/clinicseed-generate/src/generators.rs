//! One generator per entity type.
//!
//! Each routine is a bounded loop: sample field values, resolve foreign
//! keys through random limit-1 queries against already-seeded collections,
//! assemble a document, and persist it. Generators run in dependency
//! order; a validation failure aborts the run, except for the email
//! resample path noted below.

use chrono::NaiveDate;
use rand::Rng;
use rand::seq::IndexedRandom;
use serde_json::{Value, json};

use clinicseed_model::enumerators::{
    APPOINTMENT_STATUS, DOCTOR_DESIGNATIONS, EVENT_TYPES, LEAVE_APPLY_STATUS, PAYMENT_TYPES,
    STAFF_DESIGNATIONS, SYMPTOMS,
};
use clinicseed_model::{Document, NoCollections, ValidationContext, Validator, schema};

use crate::errors::SeedError;
use crate::sample;
use crate::store::{MemoryStore, handle};
use crate::streets::{StreetBook, StreetRecord};

// Placeholder credentials shared by every seeded account.
const AUTH_METHOD: &str = "sha256";
const AUTH_SALT: &str = "W5i/Zy7G(BTPjZ,w";
const AUTH_HASH: &str = "beac9317a9808becae1ef1b7b0bedff85a381ca38501e7d1841d7c88609424af";

/// The three membership groups every other generator links into. Runs
/// first so edges always point at existing endpoints.
pub fn generate_usergroups(store: &mut MemoryStore) -> Result<(), SeedError> {
    for name in ["doctors", "staff", "patients"] {
        let mut doc = Document::new();
        doc.set("name", name);
        store.insert(schema::USERGROUPS, doc)?;
    }
    Ok(())
}

/// Staff roster. A draw of 1-in-10 yields a doctor (with a random
/// speciality and membership in the doctors group); otherwise a non-doctor
/// designation, with the first such record forced to `admin` so exactly
/// one primary admin exists per run.
pub fn generate_staff(
    store: &mut MemoryStore,
    streets: &StreetBook,
    count: usize,
    rng: &mut impl Rng,
) -> Result<(), SeedError> {
    let doctors_group = group_handle(store, "doctors")?;
    let staff_group = group_handle(store, "staff")?;
    let today = store.today();
    let mut admin_exists = false;

    for _ in 0..count {
        let address = streets.pick(rng).clone();

        let mut doc = Document::new();
        doc.set("ssn", sample::ssn(rng));
        doc.set("email", sampled_email(rng, today));
        doc.set("first_name", sample::first_name(rng));
        doc.set("last_name", sample::last_name(rng));
        doc.set("phone_number", sample::phone_number(rng));
        doc.set("birth_date", birth_date(rng, today));
        doc.set(
            "address",
            address_json(&address, rng.random_range(1..=1000)),
        );
        doc.set("authData", auth_stanza());

        let group = if rng.random_range(1..=10) == 1 {
            doc.set("designation", "doctor");
            let speciality = DOCTOR_DESIGNATIONS.choose(rng).copied().unwrap_or("");
            doc.set("doctor_designation", speciality);
            &doctors_group
        } else {
            if admin_exists {
                let idx = rng.random_range(0..STAFF_DESIGNATIONS.len() - 2);
                doc.set("designation", STAFF_DESIGNATIONS[idx]);
            } else {
                doc.set(
                    "designation",
                    STAFF_DESIGNATIONS[STAFF_DESIGNATIONS.len() - 2],
                );
                admin_exists = true;
            }
            &staff_group
        };
        let group = group.clone();

        doc.set("security_questions", security_questions(rng));
        let key = store.insert(schema::STAFF, doc)?;

        let mut membership = Document::new();
        membership.set("_from", handle(schema::STAFF, &key));
        membership.set("_to", group);
        store.insert(schema::MEMBER_OF, membership)?;
    }
    Ok(())
}

/// Visitors and patients, drawn together. Two independent draws split the
/// population into three segments: visited and registered (`r == 1`),
/// visited only (`d == 0`), and registered only (`d == 1`).
pub fn generate_visitors_patients(
    store: &mut MemoryStore,
    streets: &StreetBook,
    draws: usize,
    rng: &mut impl Rng,
) -> Result<(), SeedError> {
    let patients_group = group_handle(store, "patients")?;
    let today = store.today();

    for _ in 0..draws {
        let r = rng.random_range(1..=100);
        let d = rng.random_range(0..=1);
        let address = streets.pick(rng).clone();
        let first = sample::first_name(rng);
        let last = sample::last_name(rng);

        if r == 1 || d == 0 {
            let mut visitor = Document::new();
            visitor.set("first_name", first.clone());
            visitor.set("last_name", last.clone());
            visitor.set(
                "visited_date",
                iso(sample::date_between(
                    rng,
                    sample::years_before(today, 2),
                    sample::days_before(today, 1),
                )),
            );
            visitor.set("registered", r == 1);
            store.insert(schema::VISITORS, visitor)?;
        }

        if r == 1 || d == 1 {
            let coords = street_coordinates(streets, &address.street, &address.house)?;

            let mut patient = Document::new();
            patient.set("email", sampled_email(rng, today));
            patient.set("first_name", first);
            patient.set("last_name", last);
            patient.set("phone_number", sample::phone_number(rng));
            patient.set("birth_date", birth_date(rng, today));
            patient.set("ssn", sample::ssn(rng));
            patient.set(
                "address",
                address_json(&address, rng.random_range(1..=1000)),
            );
            patient.set("residential_area", json!(coords));
            patient.set("authData", auth_stanza());
            patient.set("security_questions", security_questions(rng));

            let key = store.insert(schema::PATIENTS, patient)?;
            let mut membership = Document::new();
            membership.set("_from", handle(schema::PATIENTS, &key));
            membership.set("_to", patients_group.clone());
            store.insert(schema::MEMBER_OF, membership)?;
        }
    }
    Ok(())
}

pub fn generate_tips(
    store: &mut MemoryStore,
    count: usize,
    rng: &mut impl Rng,
) -> Result<(), SeedError> {
    for _ in 0..count {
        let mut doc = Document::new();
        doc.set("text", sample::text(rng));
        store.insert(schema::TIPS, doc)?;
    }
    Ok(())
}

pub fn generate_home_remedies(
    store: &mut MemoryStore,
    count: usize,
    rng: &mut impl Rng,
) -> Result<(), SeedError> {
    for _ in 0..count {
        let mut doc = Document::new();
        doc.set("description", sample::text(rng));
        doc.set("symptoms", sample_symptoms(rng, 5));
        doc.set("actions", sample::text(rng));
        store.insert(schema::HOME_REMEDIES, doc)?;
    }
    Ok(())
}

pub fn generate_facilities(
    store: &mut MemoryStore,
    count: usize,
    rng: &mut impl Rng,
) -> Result<(), SeedError> {
    for _ in 0..count {
        let mut doc = Document::new();
        doc.set("model", sample::plate_code(rng));
        doc.set("description", sample::text(rng));
        store.insert(schema::FACILITIES, doc)?;
    }
    Ok(())
}

pub fn generate_events(
    store: &mut MemoryStore,
    count: usize,
    rng: &mut impl Rng,
) -> Result<(), SeedError> {
    for _ in 0..count {
        let mut doc = Document::new();
        doc.set("name", sample::short_name(rng));
        doc.set(
            "type",
            EVENT_TYPES.choose(rng).copied().unwrap_or(EVENT_TYPES[0]),
        );
        doc.set("description", sample::sentences(rng));
        store.insert(schema::EVENTS, doc)?;
    }
    Ok(())
}

/// Appointments. Patient is a required foreign key; doctor and
/// appointment date are populated only for the `Assigned`/`Completed`
/// statuses, a rejection reason only for `Rejected`. `New`/`Reviewed`
/// appointments intentionally stay untriaged.
pub fn generate_appointments(
    store: &mut MemoryStore,
    streets: &StreetBook,
    count: usize,
    rng: &mut impl Rng,
) -> Result<(), SeedError> {
    let today = store.today();

    for _ in 0..count {
        let (patient_key, street, building) = {
            let patient = store
                .random_one(schema::PATIENTS, rng)
                .ok_or_else(|| SeedError::Exhausted(schema::PATIENTS.to_string()))?;
            let address = patient
                .get("address")
                .and_then(Value::as_object)
                .ok_or_else(|| SeedError::Reference("patient without address".to_string()))?;
            let field = |name: &str| {
                address
                    .get(name)
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string()
            };
            (
                patient.key().unwrap_or_default().to_string(),
                field("street"),
                field("building"),
            )
        };
        let coords = street_coordinates(streets, &street, &building)?;

        let mut doc = Document::with_defaults(&schema::appointments());
        doc.set("patient", patient_key);
        doc.set("symptoms", sample_symptoms(rng, 3));
        doc.set("description", sample::text(rng));
        let created = sample::date_between(rng, sample::days_before(today, 90), today);
        doc.set("date_created", iso(created));
        doc.set(
            "since_when",
            iso(sample::date_between(
                rng,
                sample::years_before(today, 2),
                created,
            )),
        );

        let payment = rng.random_range(0..=2);
        doc.set("payment_type", PAYMENT_TYPES[payment]);
        // Free appointments count as settled; the rest flip a coin.
        let payed = if payment == 2 {
            true
        } else {
            rng.random_bool(0.5)
        };
        doc.set("payed", payed);
        doc.set("urgent", rng.random_range(0..=100) == 1);
        doc.set("residential_area", json!(coords));

        let status = rng.random_range(0..=4);
        doc.set("status", APPOINTMENT_STATUS[status]);
        match status {
            2 => {
                doc.set("doctor", random_doctor_key(store, rng)?);
                doc.set(
                    "appointment_date",
                    iso(sample::date_between(
                        rng,
                        today,
                        sample::days_after(today, 180),
                    )),
                );
            }
            3 => {
                doc.set("doctor", random_doctor_key(store, rng)?);
                doc.set(
                    "appointment_date",
                    iso(sample::date_between(rng, created, today)),
                );
            }
            4 => {
                doc.set("reject_reason", sample::text(rng));
            }
            _ => {}
        }

        store.insert(schema::APPOINTMENTS, doc)?;
    }
    Ok(())
}

/// Timetable edges: every doctor gets assigned a random appointment per
/// round.
pub fn generate_timetable(
    store: &mut MemoryStore,
    rounds: usize,
    rng: &mut impl Rng,
) -> Result<(), SeedError> {
    let today = store.today();
    let doctor_keys: Vec<String> = store
        .docs(schema::STAFF)
        .iter()
        .filter(|doc| doc.get_str("designation") == Some("doctor"))
        .filter_map(|doc| doc.key().map(str::to_string))
        .collect();
    if doctor_keys.is_empty() {
        return Err(SeedError::Exhausted(schema::STAFF.to_string()));
    }
    if store.is_empty(schema::APPOINTMENTS) {
        return Err(SeedError::Exhausted(schema::APPOINTMENTS.to_string()));
    }

    for _ in 0..rounds {
        for doctor in &doctor_keys {
            let appointment = store
                .random_one(schema::APPOINTMENTS, rng)
                .and_then(|doc| doc.key().map(str::to_string))
                .ok_or_else(|| SeedError::Exhausted(schema::APPOINTMENTS.to_string()))?;

            let mut edge = Document::new();
            edge.set("_from", handle(schema::STAFF, doctor));
            edge.set("_to", handle(schema::APPOINTMENTS, &appointment));
            edge.set(
                "date",
                iso(sample::date_between(
                    rng,
                    sample::years_before(today, 90),
                    today,
                )),
            );
            edge.set("time", sample::clock_time(rng));
            edge.set("description", sample::text(rng));
            store.insert(schema::IS_APPOINTED, edge)?;
        }
    }
    Ok(())
}

/// Leave applications. One admin reviews every non-new application;
/// rejected ones additionally carry a reason.
pub fn generate_leave_applies(
    store: &mut MemoryStore,
    count: usize,
    rng: &mut impl Rng,
) -> Result<(), SeedError> {
    let today = store.today();
    let admin_key = store
        .random_where(schema::STAFF, rng, |doc| {
            doc.get_str("designation") == Some("admin")
        })
        .and_then(|doc| doc.key().map(str::to_string))
        .ok_or_else(|| SeedError::Exhausted(schema::STAFF.to_string()))?;

    for _ in 0..count {
        let member = store
            .random_one(schema::STAFF, rng)
            .and_then(|doc| doc.key().map(str::to_string))
            .ok_or_else(|| SeedError::Exhausted(schema::STAFF.to_string()))?;

        let mut doc = Document::new();
        doc.set("member", member);
        doc.set("leave_reason", sample::text(rng));
        let begin = sample::date_between(rng, today, sample::days_after(today, 180));
        doc.set("beginning_date", iso(begin));
        doc.set(
            "ending_date",
            iso(sample::date_between(rng, begin, sample::days_after(today, 365))),
        );

        let status = rng.random_range(0..=2);
        doc.set("status", LEAVE_APPLY_STATUS[status]);
        if status != 0 {
            doc.set("reviewed_by", admin_key.clone());
        }
        if status == 2 {
            doc.set("reject_reason", sample::text(rng));
        }

        store.insert(schema::LEAVE_APPLY, doc)?;
    }
    Ok(())
}

fn group_handle(store: &MemoryStore, name: &str) -> Result<String, SeedError> {
    store
        .first_where(schema::USERGROUPS, |doc| doc.get_str("name") == Some(name))
        .and_then(|doc| doc.key())
        .map(|key| handle(schema::USERGROUPS, key))
        .ok_or_else(|| SeedError::Exhausted(schema::USERGROUPS.to_string()))
}

fn random_doctor_key(store: &MemoryStore, rng: &mut impl Rng) -> Result<String, SeedError> {
    store
        .random_where(schema::STAFF, rng, |doc| {
            doc.get_str("designation") == Some("doctor")
        })
        .and_then(|doc| doc.key().map(str::to_string))
        .ok_or_else(|| SeedError::Exhausted(schema::STAFF.to_string()))
}

/// Sample an email, resampling once if the faker produced something the
/// format validator rejects. This is the run's only retry path.
fn sampled_email(rng: &mut impl Rng, today: NaiveDate) -> String {
    let ctx = ValidationContext {
        today,
        store: &NoCollections,
    };
    let email = sample::ru_email(rng);
    let candidate = Value::String(email.clone());
    if Validator::Email.check("email", Some(&candidate), &ctx).is_ok() {
        email
    } else {
        sample::ru_email(rng)
    }
}

fn birth_date(rng: &mut impl Rng, today: NaiveDate) -> String {
    iso(sample::date_between(
        rng,
        sample::years_before(today, 90),
        sample::years_before(today, 18),
    ))
}

fn address_json(record: &StreetRecord, flat: u32) -> Value {
    json!({
        "zip": record.zip_code,
        "country": "Россия",
        "state": "Республика Татарстан",
        "city": "Казань",
        "street": record.street,
        "building": record.house,
        "flat": flat,
    })
}

fn auth_stanza() -> Value {
    json!({
        "method": AUTH_METHOD,
        "salt": AUTH_SALT,
        "hash": AUTH_HASH,
    })
}

fn security_questions(rng: &mut impl Rng) -> Value {
    let count = rng.random_range(1..=4);
    let questions: Vec<Value> = (0..count)
        .map(|_| {
            json!({
                "question": sample::question(rng),
                "answer": sample::word(rng),
            })
        })
        .collect();
    Value::Array(questions)
}

/// `k` symptom picks with replacement, `k` in `1..=max`.
fn sample_symptoms(rng: &mut impl Rng, max: usize) -> Value {
    let count = rng.random_range(1..=max);
    let picks: Vec<&str> = (0..count)
        .map(|_| SYMPTOMS.choose(rng).copied().unwrap_or(SYMPTOMS[0]))
        .collect();
    json!(picks)
}

fn street_coordinates(
    streets: &StreetBook,
    street: &str,
    house: &str,
) -> Result<[f64; 2], SeedError> {
    streets
        .coordinates(street, house)
        .ok_or_else(|| SeedError::Reference(format!("no coordinates for {street}, {house}")))
}

fn iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    fn setup() -> (MemoryStore, StreetBook, ChaCha8Rng) {
        let store = MemoryStore::new(NaiveDate::from_ymd_opt(2026, 8, 26).unwrap());
        let streets = StreetBook::load(&StreetBook::bundled_path()).expect("bundled streets");
        let rng = ChaCha8Rng::seed_from_u64(2024);
        (store, streets, rng)
    }

    #[test]
    fn staff_run_produces_exactly_one_admin_and_membership_edges() {
        let (mut store, streets, mut rng) = setup();
        generate_usergroups(&mut store).unwrap();
        generate_staff(&mut store, &streets, 80, &mut rng).unwrap();

        assert_eq!(store.len(schema::STAFF), 80);
        assert_eq!(store.len(schema::MEMBER_OF), 80);

        let admins = store
            .docs(schema::STAFF)
            .iter()
            .filter(|doc| doc.get_str("designation") == Some("admin"))
            .count();
        assert_eq!(admins, 1);

        for doc in store.docs(schema::STAFF) {
            let has_speciality = doc.get("doctor_designation").is_some();
            let is_doctor = doc.get_str("designation") == Some("doctor");
            assert_eq!(has_speciality, is_doctor);
        }
    }

    #[test]
    fn visitor_patient_segments_are_consistent() {
        let (mut store, streets, mut rng) = setup();
        generate_usergroups(&mut store).unwrap();
        generate_visitors_patients(&mut store, &streets, 300, &mut rng).unwrap();

        // Both sides of the split must have been hit at these odds.
        assert!(store.len(schema::VISITORS) > 0);
        assert!(store.len(schema::PATIENTS) > 0);
        // Every patient joined the patients group.
        let memberships = store.len(schema::MEMBER_OF);
        assert_eq!(memberships, store.len(schema::PATIENTS));

        for visitor in store.docs(schema::VISITORS) {
            assert!(visitor.get("registered").is_some());
            let visited = visitor.get_str("visited_date").unwrap();
            assert!(visited < "2026-08-26");
        }
    }

    #[test]
    fn timetable_needs_doctors() {
        let (mut store, _streets, mut rng) = setup();
        let err = generate_timetable(&mut store, 1, &mut rng).unwrap_err();
        assert!(matches!(err, SeedError::Exhausted(_)));
    }

    #[test]
    fn events_use_the_closed_type_set() {
        let (mut store, _streets, mut rng) = setup();
        generate_events(&mut store, 20, &mut rng).unwrap();
        for event in store.docs(schema::EVENTS) {
            let kind = event.get_str("type").unwrap();
            assert!(EVENT_TYPES.contains(&kind));
        }
    }
}
