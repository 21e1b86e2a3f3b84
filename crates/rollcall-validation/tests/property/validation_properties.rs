use rollcall_validation::normalize::normalize;
use rollcall_validation::{MentionExtractor, ValidationEngine};
use proptest::prelude::*;
use serde_json::{json, Value};

fn name_token() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{1,8}"
}

fn student() -> impl Strategy<Value = Value> {
    (
        name_token(),
        name_token(),
        proptest::option::of("S[0-9]{1,4}"),
        proptest::option::of(prop_oneof![
            (0.0f64..100.0).prop_map(Value::from),
            "[0-9]{1,2}%".prop_map(Value::from),
        ]),
    )
        .prop_map(|(first, last, id, rate)| {
            let mut record = json!({"firstName": first, "lastName": last});
            if let Some(id) = id {
                record["studentId"] = Value::from(id);
            }
            if let Some(rate) = rate {
                record["attendanceRate"] = rate;
            }
            record
        })
}

fn payload() -> impl Strategy<Value = Value> {
    prop::collection::vec(student(), 0..6).prop_flat_map(|students| {
        let map: serde_json::Map<String, Value> = students
            .iter()
            .enumerate()
            .map(|(i, s)| (format!("k{i}"), s.clone()))
            .collect();
        prop_oneof![
            Just(Value::Array(students.clone())),
            Just(json!({ "students": students.clone() })),
            Just(json!({ "students": Value::Object(map) })),
        ]
    })
}

fn narrative() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            (name_token(), name_token()).prop_map(|(f, l)| format!("{f} {l}")),
            (name_token(), name_token(), "S[0-9]{1,4}").prop_map(|(f, l, id)| format!("{f} {l} ({id})")),
            "[a-z ,.]{0,20}",
        ],
        0..5,
    )
    .prop_map(|parts| parts.join(" and "))
}

// ── Idempotence: the same input always yields the same result ─────────────

proptest! {
    #[test]
    fn validation_is_idempotent(text in narrative(), data in payload()) {
        let engine = ValidationEngine::default();
        let first = engine.validate_and_fix(&text, &data);
        let second = engine.validate_and_fix(&text, &data);
        prop_assert_eq!(first, second);
    }
}

// ── Auto-fix never mutates the caller's payload ───────────────────────────

proptest! {
    #[test]
    fn auto_fix_leaves_input_untouched(text in narrative(), data in payload()) {
        let before = data.clone();
        let _ = ValidationEngine::default().validate_and_fix(&text, &data);
        prop_assert_eq!(data, before);
    }

    #[test]
    fn fixed_payload_exists_iff_applied(text in narrative(), data in payload()) {
        let result = ValidationEngine::default().validate_and_fix(&text, &data);
        let report = result.auto_fixes.unwrap();
        prop_assert_eq!(report.applied, report.fixed_structured_data.is_some());
        prop_assert_eq!(report.applied, !report.details.is_empty());
    }
}

// ── Validity and counts agree with the issues ─────────────────────────────

proptest! {
    #[test]
    fn valid_iff_no_errors(text in narrative(), data in payload()) {
        let result = ValidationEngine::default().validate(&text, &data);
        prop_assert_eq!(result.valid, result.error_count() == 0);
        prop_assert_eq!(result.summary.present_in_structured_data, normalize(&data).len());
    }

    #[test]
    fn normalized_length_matches_student_entries(students in prop::collection::vec(student(), 0..8)) {
        let n = students.len();
        prop_assert_eq!(normalize(&Value::Array(students.clone())).len(), n);
        prop_assert_eq!(normalize(&json!({"students": students})).len(), n);
    }
}

// ── The extractor never panics and spans always index the input ──────────

proptest! {
    #[test]
    fn extractor_is_total_on_arbitrary_text(text in "\\PC{0,200}") {
        let mentions = MentionExtractor::default().extract(&text);
        for m in &mentions {
            prop_assert!(m.matched_span.start < m.matched_span.end);
            prop_assert!(text.get(m.matched_span.start..m.matched_span.end).is_some());
            prop_assert!(!m.full_name.is_empty());
        }
        for pair in mentions.windows(2) {
            prop_assert!(pair[0].matched_span.end <= pair[1].matched_span.start);
        }
    }
}
