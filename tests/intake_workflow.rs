use applicant_intake::intake::report::render_applications;
use applicant_intake::intake::{
    AddOutcome, Applicant, ApplicantRegistry, DeleteOutcome, EducationLevel,
    EmergencyContactLevel, PersonalInfo,
};

fn jane_doe() -> Applicant {
    let mut info = PersonalInfo::new(
        "Jane Doe",
        "1992-07-04",
        "Female",
        "804 Walnut St, Des Moines",
        "0015152550148",
        "+12025550123",
        "jane.doe@example.com",
    )
    .expect("valid personal info");
    info.set_emergency_contact("John Doe", "Spouse", "5152550190", EmergencyContactLevel::Primary)
        .expect("valid emergency contact");

    let mut applicant = Applicant::new(info);
    applicant.add_language("English", "excellent", "excellent", "excellent");
    applicant.add_language("Spanish", "good", "bad", "good");
    applicant
        .add_education(
            EducationLevel::Bachelor,
            "Drake University",
            "Des Moines",
            "USA",
            "2010-08-23",
            "2014-05-17",
            "BSc, Cum Laude",
            "Accounting",
        )
        .expect("valid education entry");
    applicant
        .add_work_experience(
            "Principal Financial",
            "Des Moines",
            "2014-06-02",
            "2019-11-29",
            "Accountant",
            "Career change",
        )
        .expect("valid work experience entry");
    applicant.set_major_skills("bookkeeping, auditing");
    applicant
}

#[test]
fn register_search_delete_lifecycle() {
    let mut registry = ApplicantRegistry::new();

    let applicant = jane_doe();
    // "+12025550123" normalizes to the bare national number.
    assert_eq!(applicant.personal_info().phone_number_mobile(), 2025550123);
    assert_eq!(registry.add(applicant), AddOutcome::Added);

    // Lookup is case-insensitive exact match.
    let found = registry.search("jane doe");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].personal_info().full_name(), "Jane Doe");

    assert_eq!(registry.delete("Jane Doe"), DeleteOutcome::Deleted { removed: 1 });
    assert!(registry.search("Jane Doe").is_empty());
    assert!(registry.is_empty());
}

#[test]
fn resubmission_is_rejected_but_distinct_identities_coexist() {
    let mut registry = ApplicantRegistry::new();
    registry.add(jane_doe());

    assert_eq!(registry.add(jane_doe()), AddOutcome::AlreadyApplied);
    assert_eq!(registry.len(), 1);

    // Same name with a different mobile number is a different person.
    let mut namesake = jane_doe();
    namesake
        .personal_info_mut()
        .set_phone_number_mobile("2025550199")
        .expect("valid phone accepted");
    assert_eq!(registry.add(namesake), AddOutcome::Added);
    assert_eq!(registry.len(), 2);
    assert_eq!(registry.search("Jane Doe").len(), 2);
}

#[test]
fn report_covers_every_section() {
    let rendered = render_applications([&jane_doe()]);

    assert!(rendered.contains("*****  Application 1  *****"));
    assert!(rendered.contains("Full Name: Jane Doe"));
    assert!(rendered.contains("Date of Birth: 1992-07-04"));
    assert!(rendered.contains("Phone number (mobile): 2025550123"));
    assert!(rendered.contains("Primary: John Doe (Spouse), 5152550190"));
    assert!(rendered.contains("Secondary: none"));
    assert!(rendered.contains("Language: Spanish"));
    assert!(rendered.contains("Education Level: Bachelor's Degree"));
    assert!(rendered.contains("Certificates list: BSc,  Cum Laude"));
    assert!(rendered.contains("Company: Principal Financial"));
    assert!(rendered.contains("Major Skills: bookkeeping, auditing"));
}

#[test]
fn report_announces_when_nothing_matches() {
    let empty: Vec<&Applicant> = Vec::new();
    let rendered = render_applications(empty);
    assert!(rendered.contains("No applications found!"));
}

#[test]
fn registry_listing_serializes_to_json() {
    let mut registry = ApplicantRegistry::new();
    registry.add(jane_doe());

    let value = serde_json::to_value(registry.list()).expect("applicants serialize");
    let entries = value.as_array().expect("top level is an array");
    assert_eq!(entries.len(), 1);

    let personal = &entries[0]["personal_info"];
    assert_eq!(personal["full_name"], "Jane Doe");
    assert_eq!(personal["phone_number_mobile"], 2025550123_u64);
    assert_eq!(personal["date_of_birth"], "1992-07-04");
    assert_eq!(entries[0]["languages"].as_array().map(Vec::len), Some(2));
}
