use chrono::{TimeZone, Utc};
use gatehouse_core::{AccessType, Resident, ResidentForm};
use uuid::Uuid;

fn filled_form() -> ResidentForm {
    ResidentForm {
        name: "Grace Okafor".to_string(),
        house_number: "E-501".to_string(),
        access_type: "Staff".to_string(),
    }
}

#[test]
fn valid_payload_passes_through_unchanged() {
    let validated = filled_form().validate().unwrap();
    assert_eq!(validated.name, "Grace Okafor");
    assert_eq!(validated.house_number, "E-501");
    assert_eq!(validated.access_type, AccessType::Staff);
}

#[test]
fn empty_name_reports_a_field_message() {
    let mut form = filled_form();
    form.name = "   ".to_string();

    let errors = form.validate().unwrap_err();
    assert_eq!(errors.name.as_deref(), Some("Name is required"));
    assert!(errors.house_number.is_none());
    assert!(errors.access_type.is_none());
}

#[test]
fn empty_house_number_reports_a_field_message() {
    let mut form = filled_form();
    form.house_number = String::new();

    let errors = form.validate().unwrap_err();
    assert_eq!(
        errors.house_number.as_deref(),
        Some("House number is required")
    );
}

#[test]
fn free_text_access_type_is_rejected() {
    let mut form = filled_form();
    form.access_type = "Contractor".to_string();

    let errors = form.validate().unwrap_err();
    assert_eq!(
        errors.access_type.as_deref(),
        Some("Access type must be one of Resident, Visitor or Staff")
    );
}

#[test]
fn multiple_failures_report_one_message_per_field() {
    let form = ResidentForm {
        name: String::new(),
        house_number: String::new(),
        access_type: "anything".to_string(),
    };

    let errors = form.validate().unwrap_err();
    assert!(errors.name.is_some());
    assert!(errors.house_number.is_some());
    assert!(errors.access_type.is_some());
    assert!(!errors.is_empty());

    let rendered = errors.to_string();
    assert!(rendered.contains("Name is required"));
    assert!(rendered.contains("House number is required"));
}

#[test]
fn blank_form_preselects_resident_access() {
    let form = ResidentForm::default();
    assert_eq!(form.access_type, "Resident");
    assert!(form.name.is_empty());
}

#[test]
fn prefilled_form_mirrors_the_record() {
    let resident = Resident {
        id: Uuid::new_v4(),
        name: "Lateef Olawale".to_string(),
        house_number: "A-102".to_string(),
        access_type: AccessType::Visitor,
        last_visit: Utc.with_ymd_and_hms(2025, 1, 13, 11, 20, 0).unwrap(),
    };

    let form = ResidentForm::prefilled(&resident);
    assert_eq!(form.name, "Lateef Olawale");
    assert_eq!(form.house_number, "A-102");
    assert_eq!(form.access_type, "Visitor");

    let validated = form.validate().unwrap();
    assert_eq!(validated.access_type, AccessType::Visitor);
}
