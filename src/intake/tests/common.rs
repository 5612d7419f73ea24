use crate::intake::domain::{Applicant, EducationLevel, PersonalInfo};

pub(super) fn personal_info(full_name: &str, mobile: &str) -> PersonalInfo {
    PersonalInfo::new(
        full_name,
        "1990-04-12",
        "Female",
        "12 Grand Ave, Des Moines",
        "5152550148",
        mobile,
        "applicant@example.com",
    )
    .expect("valid personal info")
}

pub(super) fn applicant(full_name: &str, mobile: &str) -> Applicant {
    Applicant::new(personal_info(full_name, mobile))
}

pub(super) fn full_applicant(full_name: &str, mobile: &str) -> Applicant {
    let mut applicant = applicant(full_name, mobile);
    applicant.add_language("Spanish", "excellent", "good", "excellent");
    applicant
        .add_education(
            EducationLevel::Bachelor,
            "Drake University",
            "Des Moines",
            "USA",
            "2008-08-20",
            "2012-05-12",
            "BSc,Honors",
            "Computer Science",
        )
        .expect("valid education entry");
    applicant
        .add_work_experience(
            "Casey's",
            "Ankeny",
            "2012-06-01",
            "2015-03-31",
            "Analyst",
            "Relocation",
        )
        .expect("valid work experience entry");
    applicant.set_major_skills("SQL, reporting");
    applicant
}
