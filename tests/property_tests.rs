/// Property-based tests using proptest
/// Tests invariants of request validation that should hold for all inputs
use people_enrichment_api::models::{EnrichedPerson, Person};
use proptest::prelude::*;

fn person(name: String, surname: String) -> Person {
    Person {
        name,
        surname,
        patronymic: None,
    }
}

proptest! {
    #[test]
    fn person_validation_never_panics(name in "\\PC*", surname in "\\PC*") {
        let _ = person(name, surname).validate();
    }

    #[test]
    fn non_blank_name_and_surname_are_accepted(
        name in "[A-Za-z]{1,20}",
        surname in "[A-Za-z]{1,20}"
    ) {
        prop_assert!(person(name, surname).validate().is_ok());
    }

    #[test]
    fn blank_name_or_surname_is_rejected(
        filled in "[A-Za-z]{1,20}",
        blank in "[ \\t]{0,3}",
        blank_first in proptest::bool::ANY
    ) {
        let p = if blank_first {
            person(blank, filled)
        } else {
            person(filled, blank)
        };
        prop_assert!(p.validate().is_err());
    }

    #[test]
    fn update_requires_positive_age(age in i32::MIN..=0) {
        let ep = EnrichedPerson {
            person: person("Dmitriy".to_string(), "Ivanov".to_string()),
            age,
            gender: "male".to_string(),
            nationality: "UA".to_string(),
        };
        prop_assert!(ep.validate_complete().is_err());
    }

    #[test]
    fn enriched_person_json_preserves_identity(
        name in "[A-Za-z]{1,20}",
        surname in "[A-Za-z]{1,20}",
        patronymic in proptest::option::of("[A-Za-z]{1,20}"),
        age in 0i32..130
    ) {
        let ep = EnrichedPerson {
            person: Person { name, surname, patronymic },
            age,
            gender: "female".to_string(),
            nationality: "PL".to_string(),
        };
        let json = serde_json::to_string(&ep).unwrap();
        let back: EnrichedPerson = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, ep);
    }
}
