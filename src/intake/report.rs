//! Human-readable rendering of applicant records for the CLI.

use std::fmt::Write as _;

use super::domain::{Applicant, EmergencyContact};

const RULE: &str = "*****######******######*******######";

/// Render a numbered text report for a set of applicants, or a
/// "no applications" notice when the set is empty.
pub fn render_applications<'a, I>(applicants: I) -> String
where
    I: IntoIterator<Item = &'a Applicant>,
{
    let mut output = String::new();
    let mut rendered = 0;

    for (index, applicant) in applicants.into_iter().enumerate() {
        rendered += 1;
        render_applicant(&mut output, index + 1, applicant);
    }

    if rendered == 0 {
        // Writing into a String cannot fail.
        let _ = writeln!(output, "{RULE}");
        let _ = writeln!(output, "No applications found!");
        let _ = writeln!(output, "{RULE}");
    }
    output
}

fn render_applicant(out: &mut String, number: usize, applicant: &Applicant) {
    let info = applicant.personal_info();

    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "\n*****  Application {number}  *****\n");
    let _ = writeln!(out, "{RULE}\n");
    let _ = writeln!(out, "Full Name: {}", info.full_name());
    let _ = writeln!(out, "Date of Birth: {}", info.date_of_birth());
    let _ = writeln!(out, "Sex: {}", info.sex());
    let _ = writeln!(out, "Home Address: {}", info.home_address());
    let _ = writeln!(out, "Phone number (home): {}", info.phone_number_home());
    let _ = writeln!(out, "Phone number (mobile): {}", info.phone_number_mobile());
    let _ = writeln!(out, "Email Address: {}\n", info.email_address());

    let _ = writeln!(out, "-----  Emergency Contacts:  -----\n");
    render_contact(out, "Primary", info.emergency_contact_primary());
    render_contact(out, "Secondary", info.emergency_contact_secondary());

    let _ = writeln!(out, "-----  Languages:  -----\n");
    for language in applicant.languages() {
        let _ = writeln!(out, "Language: {}", language.language());
        let _ = writeln!(out, "Read Ability: {}", language.read_ability());
        let _ = writeln!(out, "Write Ability: {}", language.write_ability());
        let _ = writeln!(out, "Speak Ability: {}\n", language.speak_ability());
    }

    let _ = writeln!(out, "-----  Educational Background:  -----\n");
    for education in applicant.educational_background() {
        let _ = writeln!(out, "Education Level: {}", education.education_level().label());
        let _ = writeln!(out, "University Name: {}", education.university_name());
        let _ = writeln!(out, "University Location: {}", education.university_location());
        let _ = writeln!(out, "University Country: {}", education.university_country());
        let _ = writeln!(out, "Attended from: {}", education.attended_from());
        let _ = writeln!(out, "Attended till: {}", education.attended_to());
        let _ = writeln!(out, "Certificates list: {}", education.certificates().join(", "));
        let _ = writeln!(out, "Main field of study: {}\n", education.main_field_of_study());
    }

    let _ = writeln!(out, "-----  Work Experience:  -----\n");
    for experience in applicant.work_experience() {
        let _ = writeln!(out, "Company: {}", experience.company_name());
        let _ = writeln!(out, "Location: {}", experience.location());
        let _ = writeln!(out, "Employed from: {}", experience.employed_from());
        let _ = writeln!(out, "Employed till: {}", experience.employed_to());
        let _ = writeln!(out, "Position: {}", experience.position());
        let _ = writeln!(out, "Reason for leaving: {}\n", experience.reason_for_leaving());
    }

    let _ = writeln!(out, "Major Skills: {}", applicant.major_skills());
}

fn render_contact(out: &mut String, slot: &str, contact: Option<&EmergencyContact>) {
    match contact {
        Some(contact) => {
            let _ = writeln!(
                out,
                "{slot}: {} ({}), {}\n",
                contact.name(),
                contact.relationship(),
                contact.phone_number()
            );
        }
        None => {
            let _ = writeln!(out, "{slot}: none\n");
        }
    }
}
