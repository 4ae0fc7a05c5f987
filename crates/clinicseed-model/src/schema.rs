//! Declarative collection definitions: field names bound to ordered
//! validator chains and default values.

use serde_json::json;

use crate::document::{CollectionKind, CollectionSchema, FieldSchema};
use crate::enumerators::{
    APPOINTMENT_STATUS, DOCTOR_DESIGNATIONS, EVENT_TYPES, LEAVE_APPLY_STATUS, PAYMENT_TYPES,
    STAFF_DESIGNATIONS,
};
use crate::validators::Validator;

pub const STAFF: &str = "clinic_Staff";
pub const PATIENTS: &str = "clinic_Patients";
pub const VISITORS: &str = "clinic_Visitors";
pub const APPOINTMENTS: &str = "clinic_Appointments";
pub const TIPS: &str = "clinic_Tips";
pub const HOME_REMEDIES: &str = "clinic_HomeRemedies";
pub const FACILITIES: &str = "clinic_Facilities";
pub const EVENTS: &str = "clinic_Events";
pub const LEAVE_APPLY: &str = "clinic_LeaveApply";
pub const USERGROUPS: &str = "clinic_Usergroups";
pub const MEMBER_OF: &str = "clinic_memberOf";
pub const IS_APPOINTED: &str = "clinic_isAppointed";

/// All collection schemas, in the order the store registers them.
pub fn all() -> Vec<CollectionSchema> {
    vec![
        usergroups(),
        staff(),
        patients(),
        visitors(),
        tips(),
        home_remedies(),
        facilities(),
        events(),
        appointments(),
        leave_applies(),
        member_of(),
        is_appointed(),
    ]
}

pub fn staff() -> CollectionSchema {
    CollectionSchema {
        name: STAFF,
        kind: CollectionKind::Document,
        fields: vec![
            FieldSchema::new(
                "email",
                vec![
                    Validator::NotNull,
                    Validator::Email,
                    Validator::EmailUnique { collection: STAFF },
                ],
            ),
            FieldSchema::new("first_name", vec![Validator::NotNull]),
            FieldSchema::new("last_name", vec![Validator::NotNull]),
            FieldSchema::new("birth_date", vec![Validator::NotNull, Validator::DatePast]),
            FieldSchema::new("ssn", vec![Validator::NotNull, Validator::Ssn]),
            FieldSchema::new("address", vec![Validator::NotNull, Validator::Address]),
            FieldSchema::new("phone_number", vec![Validator::NotNull]),
            FieldSchema::new(
                "designation",
                vec![
                    Validator::NotNull,
                    Validator::Enumeration(STAFF_DESIGNATIONS),
                ],
            ),
            // Present only for doctors; the empty sentinel is a member of
            // the enumeration.
            FieldSchema::new(
                "doctor_designation",
                vec![Validator::Enumeration(DOCTOR_DESIGNATIONS)],
            ),
            FieldSchema::new(
                "security_questions",
                vec![Validator::NotNull, Validator::SecurityQuestions],
            ),
        ],
    }
}

pub fn patients() -> CollectionSchema {
    CollectionSchema {
        name: PATIENTS,
        kind: CollectionKind::Document,
        fields: vec![
            FieldSchema::new(
                "email",
                vec![
                    Validator::NotNull,
                    Validator::Email,
                    Validator::EmailUnique {
                        collection: PATIENTS,
                    },
                ],
            ),
            FieldSchema::new("first_name", vec![Validator::NotNull]),
            FieldSchema::new("last_name", vec![Validator::NotNull]),
            FieldSchema::new("birth_date", vec![Validator::NotNull, Validator::DatePast]),
            FieldSchema::new("ssn", vec![Validator::NotNull, Validator::Ssn]),
            FieldSchema::new("address", vec![Validator::NotNull, Validator::Address]),
            FieldSchema::new("phone_number", vec![Validator::NotNull]),
            FieldSchema::new(
                "security_questions",
                vec![Validator::NotNull, Validator::SecurityQuestions],
            ),
        ],
    }
}

pub fn visitors() -> CollectionSchema {
    CollectionSchema {
        name: VISITORS,
        kind: CollectionKind::Document,
        fields: vec![
            FieldSchema::new("first_name", vec![Validator::NotNull]),
            FieldSchema::new("last_name", vec![Validator::NotNull]),
            FieldSchema::new("registered", vec![Validator::Bool]),
            FieldSchema::new(
                "visited_date",
                vec![Validator::NotNull, Validator::DateFormat],
            ),
        ],
    }
}

pub fn appointments() -> CollectionSchema {
    CollectionSchema {
        name: APPOINTMENTS,
        kind: CollectionKind::Document,
        fields: vec![
            FieldSchema::new(
                "patient",
                vec![Validator::NotNull, Validator::PatientExists],
            )
            .with_default(json!("")),
            FieldSchema::new("doctor", vec![Validator::DoctorExists]),
            FieldSchema::new("symptoms", vec![Validator::NotNull]).with_default(json!([])),
            FieldSchema::new("description", vec![Validator::NotNull]).with_default(json!("")),
            FieldSchema::new(
                "date_created",
                vec![Validator::NotNull, Validator::DateFormat],
            )
            .with_default(json!("")),
            FieldSchema::new(
                "since_when",
                vec![Validator::NotNull, Validator::DateFormat],
            )
            .with_default(json!("")),
            FieldSchema::new(
                "payment_type",
                vec![Validator::NotNull, Validator::Enumeration(PAYMENT_TYPES)],
            )
            .with_default(json!("")),
            FieldSchema::new("payed", vec![Validator::NotNull, Validator::Bool])
                .with_default(json!(false)),
            FieldSchema::new("urgent", vec![Validator::Bool]).with_default(json!(false)),
            FieldSchema::new(
                "status",
                vec![
                    Validator::NotNull,
                    Validator::Enumeration(APPOINTMENT_STATUS),
                ],
            )
            .with_default(json!("New")),
            FieldSchema::new("appointment_date", vec![Validator::DateFormat]),
            FieldSchema::new("cancel_reason", vec![]),
            FieldSchema::new("reject_reason", vec![]),
        ],
    }
}

pub fn tips() -> CollectionSchema {
    CollectionSchema {
        name: TIPS,
        kind: CollectionKind::Document,
        fields: vec![FieldSchema::new("text", vec![Validator::NotNull])],
    }
}

pub fn home_remedies() -> CollectionSchema {
    CollectionSchema {
        name: HOME_REMEDIES,
        kind: CollectionKind::Document,
        fields: vec![
            FieldSchema::new("description", vec![Validator::NotNull]),
            FieldSchema::new("symptoms", vec![Validator::NotNull]),
            FieldSchema::new("actions", vec![Validator::NotNull]),
        ],
    }
}

pub fn facilities() -> CollectionSchema {
    CollectionSchema {
        name: FACILITIES,
        kind: CollectionKind::Document,
        fields: vec![
            FieldSchema::new("model", vec![Validator::NotNull]),
            FieldSchema::new("description", vec![Validator::NotNull]),
        ],
    }
}

pub fn events() -> CollectionSchema {
    CollectionSchema {
        name: EVENTS,
        kind: CollectionKind::Document,
        fields: vec![
            FieldSchema::new("name", vec![Validator::NotNull]),
            FieldSchema::new(
                "type",
                vec![Validator::NotNull, Validator::Enumeration(EVENT_TYPES)],
            ),
            FieldSchema::new("description", vec![Validator::NotNull]),
        ],
    }
}

pub fn leave_applies() -> CollectionSchema {
    CollectionSchema {
        name: LEAVE_APPLY,
        kind: CollectionKind::Document,
        fields: vec![
            FieldSchema::new("member", vec![Validator::NotNull, Validator::StaffExists]),
            FieldSchema::new("leave_reason", vec![Validator::NotNull]),
            FieldSchema::new(
                "beginning_date",
                vec![Validator::NotNull, Validator::DateFormat],
            ),
            FieldSchema::new(
                "ending_date",
                vec![Validator::NotNull, Validator::DateFormat],
            ),
            FieldSchema::new(
                "status",
                vec![
                    Validator::NotNull,
                    Validator::Enumeration(LEAVE_APPLY_STATUS),
                ],
            ),
            FieldSchema::new("reviewed_by", vec![Validator::StaffExists]),
            FieldSchema::new("reject_reason", vec![]),
        ],
    }
}

pub fn usergroups() -> CollectionSchema {
    CollectionSchema {
        name: USERGROUPS,
        kind: CollectionKind::Document,
        fields: vec![FieldSchema::new("name", vec![Validator::NotNull])],
    }
}

pub fn member_of() -> CollectionSchema {
    CollectionSchema {
        name: MEMBER_OF,
        kind: CollectionKind::Edge,
        fields: vec![
            FieldSchema::new("_from", vec![Validator::NotNull]),
            FieldSchema::new("_to", vec![Validator::NotNull]),
        ],
    }
}

pub fn is_appointed() -> CollectionSchema {
    CollectionSchema {
        name: IS_APPOINTED,
        kind: CollectionKind::Edge,
        fields: vec![
            FieldSchema::new("_from", vec![Validator::NotNull]),
            FieldSchema::new("_to", vec![Validator::NotNull]),
            FieldSchema::new("date", vec![Validator::NotNull, Validator::DateFormat]),
            FieldSchema::new("time", vec![Validator::NotNull]),
            FieldSchema::new("description", vec![Validator::NotNull]),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_collection_has_a_unique_name() {
        let schemas = all();
        let names: std::collections::BTreeSet<_> =
            schemas.iter().map(|schema| schema.name).collect();
        assert_eq!(names.len(), schemas.len());
    }

    #[test]
    fn edge_collections_declare_endpoints() {
        for schema in all() {
            if schema.kind == CollectionKind::Edge {
                let fields: Vec<_> = schema.fields.iter().map(|field| field.name).collect();
                assert!(fields.contains(&"_from"), "{} missing _from", schema.name);
                assert!(fields.contains(&"_to"), "{} missing _to", schema.name);
            }
        }
    }

    #[test]
    fn appointment_defaults_match_the_untriaged_state() {
        let doc = crate::document::Document::with_defaults(&appointments());
        assert_eq!(doc.get_str("status"), Some("New"));
        assert_eq!(doc.get("payed"), Some(&json!(false)));
        assert_eq!(doc.get("urgent"), Some(&json!(false)));
        assert!(doc.get("doctor").is_none());
    }
}
