use std::hash::{Hash, Hasher};

use chrono::NaiveDate;
use serde::Serialize;

use super::validate::{normalize_email, normalize_phone, parse_date, FieldError, ValidationError};

/// Applications hold at most this many work-experience entries; additions
/// past the cap are accepted and dropped without error.
pub const MAX_WORK_EXPERIENCE: usize = 3;

/// Closed set of education levels offered by the intake menu, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EducationLevel {
    HighSchool,
    Associate,
    Bachelor,
    Master,
    Doctorate,
}

impl EducationLevel {
    pub const ALL: [EducationLevel; 5] = [
        EducationLevel::HighSchool,
        EducationLevel::Associate,
        EducationLevel::Bachelor,
        EducationLevel::Master,
        EducationLevel::Doctorate,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            EducationLevel::HighSchool => "High School Diploma",
            EducationLevel::Associate => "Associate's Degree",
            EducationLevel::Bachelor => "Bachelor's Degree",
            EducationLevel::Master => "Master's Degree",
            EducationLevel::Doctorate => "PhD/Doctorate Degree",
        }
    }

    /// Resolve a 1-based menu index as presented by the interactive prompt.
    pub fn from_index(index: usize) -> Result<Self, ValidationError> {
        index
            .checked_sub(1)
            .and_then(|slot| Self::ALL.get(slot))
            .copied()
            .ok_or_else(|| ValidationError::InvalidArgument {
                value: index.to_string(),
                expected: "education level (1-5)",
            })
    }
}

/// Selector for the two emergency-contact slots on [`PersonalInfo`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EmergencyContactLevel {
    Primary,
    Secondary,
}

impl EmergencyContactLevel {
    pub const ALL: [EmergencyContactLevel; 2] =
        [EmergencyContactLevel::Primary, EmergencyContactLevel::Secondary];

    pub const fn label(self) -> &'static str {
        match self {
            EmergencyContactLevel::Primary => "Primary",
            EmergencyContactLevel::Secondary => "Secondary",
        }
    }

    /// Resolve a 1-based menu index as presented by the interactive prompt.
    pub fn from_index(index: usize) -> Result<Self, ValidationError> {
        index
            .checked_sub(1)
            .and_then(|slot| Self::ALL.get(slot))
            .copied()
            .ok_or_else(|| ValidationError::InvalidArgument {
                value: index.to_string(),
                expected: "emergency contact level (1-2)",
            })
    }
}

/// Contact triple stored against one of the [`PersonalInfo`] slots.
///
/// Only constructed through [`PersonalInfo::set_emergency_contact`], so the
/// phone number has always passed [`normalize_phone`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmergencyContact {
    name: String,
    relationship: String,
    phone_number: u64,
}

impl EmergencyContact {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn relationship(&self) -> &str {
        &self.relationship
    }

    pub fn phone_number(&self) -> u64 {
        self.phone_number
    }
}

/// Identity and contact details for a single applicant.
///
/// Phone, email, and date fields only ever hold values that passed the
/// validators in [`validate`](super::validate). Setters re-run the relevant
/// validator and keep the previous value when the replacement fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonalInfo {
    full_name: String,
    date_of_birth: NaiveDate,
    sex: String,
    home_address: String,
    phone_number_home: u64,
    phone_number_mobile: u64,
    email_address: String,
    emergency_contact_primary: Option<EmergencyContact>,
    emergency_contact_secondary: Option<EmergencyContact>,
}

impl PersonalInfo {
    /// Build a record from raw form input. Fails atomically on the first
    /// field that does not validate.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        full_name: &str,
        date_of_birth: &str,
        sex: &str,
        home_address: &str,
        phone_number_home: &str,
        phone_number_mobile: &str,
        email_address: &str,
    ) -> Result<Self, FieldError> {
        Ok(Self {
            full_name: full_name.to_string(),
            date_of_birth: parse_date(date_of_birth)
                .map_err(|source| FieldError::new("date_of_birth", source))?,
            sex: sex.to_string(),
            home_address: home_address.to_string(),
            phone_number_home: normalize_phone(phone_number_home)
                .map_err(|source| FieldError::new("phone_number_home", source))?,
            phone_number_mobile: normalize_phone(phone_number_mobile)
                .map_err(|source| FieldError::new("phone_number_mobile", source))?,
            email_address: normalize_email(email_address)
                .map_err(|source| FieldError::new("email_address", source))?,
            emergency_contact_primary: None,
            emergency_contact_secondary: None,
        })
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn date_of_birth(&self) -> NaiveDate {
        self.date_of_birth
    }

    pub fn sex(&self) -> &str {
        &self.sex
    }

    pub fn home_address(&self) -> &str {
        &self.home_address
    }

    pub fn phone_number_home(&self) -> u64 {
        self.phone_number_home
    }

    pub fn phone_number_mobile(&self) -> u64 {
        self.phone_number_mobile
    }

    pub fn email_address(&self) -> &str {
        &self.email_address
    }

    pub fn emergency_contact_primary(&self) -> Option<&EmergencyContact> {
        self.emergency_contact_primary.as_ref()
    }

    pub fn emergency_contact_secondary(&self) -> Option<&EmergencyContact> {
        self.emergency_contact_secondary.as_ref()
    }

    pub fn set_full_name(&mut self, name: &str) {
        self.full_name = name.to_string();
    }

    pub fn set_date_of_birth(&mut self, raw: &str) -> Result<(), FieldError> {
        self.date_of_birth =
            parse_date(raw).map_err(|source| FieldError::new("date_of_birth", source))?;
        Ok(())
    }

    pub fn set_sex(&mut self, sex: &str) {
        self.sex = sex.to_string();
    }

    pub fn set_home_address(&mut self, address: &str) {
        self.home_address = address.to_string();
    }

    pub fn set_phone_number_home(&mut self, raw: &str) -> Result<(), FieldError> {
        self.phone_number_home =
            normalize_phone(raw).map_err(|source| FieldError::new("phone_number_home", source))?;
        Ok(())
    }

    pub fn set_phone_number_mobile(&mut self, raw: &str) -> Result<(), FieldError> {
        self.phone_number_mobile = normalize_phone(raw)
            .map_err(|source| FieldError::new("phone_number_mobile", source))?;
        Ok(())
    }

    pub fn set_email_address(&mut self, raw: &str) -> Result<(), FieldError> {
        self.email_address =
            normalize_email(raw).map_err(|source| FieldError::new("email_address", source))?;
        Ok(())
    }

    /// Validate the contact's phone number and store the triple in the slot
    /// selected by `level`. The other slot is left untouched.
    pub fn set_emergency_contact(
        &mut self,
        name: &str,
        relationship: &str,
        phone_number: &str,
        level: EmergencyContactLevel,
    ) -> Result<(), FieldError> {
        let field = match level {
            EmergencyContactLevel::Primary => "emergency_contact_primary",
            EmergencyContactLevel::Secondary => "emergency_contact_secondary",
        };
        let phone_number =
            normalize_phone(phone_number).map_err(|source| FieldError::new(field, source))?;

        let contact = EmergencyContact {
            name: name.to_string(),
            relationship: relationship.to_string(),
            phone_number,
        };
        match level {
            EmergencyContactLevel::Primary => self.emergency_contact_primary = Some(contact),
            EmergencyContactLevel::Secondary => self.emergency_contact_secondary = Some(contact),
        }
        Ok(())
    }
}

/// Self-assessed language proficiency. Free text throughout, no validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Language {
    language: String,
    read_ability: String,
    write_ability: String,
    speak_ability: String,
}

impl Language {
    pub fn new(language: &str, read_ability: &str, write_ability: &str, speak_ability: &str) -> Self {
        Self {
            language: language.to_string(),
            read_ability: read_ability.to_string(),
            write_ability: write_ability.to_string(),
            speak_ability: speak_ability.to_string(),
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn read_ability(&self) -> &str {
        &self.read_ability
    }

    pub fn write_ability(&self) -> &str {
        &self.write_ability
    }

    pub fn speak_ability(&self) -> &str {
        &self.speak_ability
    }

    pub fn set_language(&mut self, language: &str) {
        self.language = language.to_string();
    }

    pub fn set_read_ability(&mut self, read: &str) {
        self.read_ability = read.to_string();
    }

    pub fn set_write_ability(&mut self, write: &str) {
        self.write_ability = write.to_string();
    }

    pub fn set_speak_ability(&mut self, speak: &str) {
        self.speak_ability = speak.to_string();
    }
}

/// One entry of an applicant's educational history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Education {
    education_level: EducationLevel,
    university_name: String,
    university_location: String,
    university_country: String,
    attended_from: NaiveDate,
    attended_to: NaiveDate,
    certificates: Vec<String>,
    main_field_of_study: String,
}

impl Education {
    /// Build an entry from raw form input; `certificates` is a
    /// comma-separated list kept as raw tokens. No ordering is enforced
    /// between `attended_from` and `attended_to`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        level: EducationLevel,
        university_name: &str,
        university_location: &str,
        university_country: &str,
        attended_from: &str,
        attended_to: &str,
        certificates: &str,
        main_field_of_study: &str,
    ) -> Result<Self, FieldError> {
        Ok(Self {
            education_level: level,
            university_name: university_name.to_string(),
            university_location: university_location.to_string(),
            university_country: university_country.to_string(),
            attended_from: parse_date(attended_from)
                .map_err(|source| FieldError::new("attended_from", source))?,
            attended_to: parse_date(attended_to)
                .map_err(|source| FieldError::new("attended_to", source))?,
            certificates: split_certificates(certificates),
            main_field_of_study: main_field_of_study.to_string(),
        })
    }

    pub fn education_level(&self) -> EducationLevel {
        self.education_level
    }

    pub fn university_name(&self) -> &str {
        &self.university_name
    }

    pub fn university_location(&self) -> &str {
        &self.university_location
    }

    pub fn university_country(&self) -> &str {
        &self.university_country
    }

    pub fn attended_from(&self) -> NaiveDate {
        self.attended_from
    }

    pub fn attended_to(&self) -> NaiveDate {
        self.attended_to
    }

    pub fn certificates(&self) -> &[String] {
        &self.certificates
    }

    pub fn main_field_of_study(&self) -> &str {
        &self.main_field_of_study
    }

    pub fn set_education_level(&mut self, level: EducationLevel) {
        self.education_level = level;
    }

    pub fn set_university_name(&mut self, name: &str) {
        self.university_name = name.to_string();
    }

    pub fn set_university_location(&mut self, location: &str) {
        self.university_location = location.to_string();
    }

    pub fn set_university_country(&mut self, country: &str) {
        self.university_country = country.to_string();
    }

    pub fn set_attended_from(&mut self, raw: &str) -> Result<(), FieldError> {
        self.attended_from =
            parse_date(raw).map_err(|source| FieldError::new("attended_from", source))?;
        Ok(())
    }

    pub fn set_attended_to(&mut self, raw: &str) -> Result<(), FieldError> {
        self.attended_to =
            parse_date(raw).map_err(|source| FieldError::new("attended_to", source))?;
        Ok(())
    }

    /// Re-split the comma-separated list; a no-op when the token sequence is
    /// unchanged.
    pub fn set_certificates(&mut self, raw: &str) {
        let tokens = split_certificates(raw);
        if tokens != self.certificates {
            self.certificates = tokens;
        }
    }

    pub fn set_main_field_of_study(&mut self, main: &str) {
        self.main_field_of_study = main.to_string();
    }
}

fn split_certificates(raw: &str) -> Vec<String> {
    raw.split(',').map(str::to_string).collect()
}

/// One entry of an applicant's employment history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkExperience {
    company_name: String,
    location: String,
    employed_from: NaiveDate,
    employed_to: NaiveDate,
    position: String,
    reason_for_leaving: String,
}

impl WorkExperience {
    pub fn new(
        company: &str,
        location: &str,
        employed_from: &str,
        employed_to: &str,
        position: &str,
        reason: &str,
    ) -> Result<Self, FieldError> {
        Ok(Self {
            company_name: company.to_string(),
            location: location.to_string(),
            employed_from: parse_date(employed_from)
                .map_err(|source| FieldError::new("employed_from", source))?,
            employed_to: parse_date(employed_to)
                .map_err(|source| FieldError::new("employed_to", source))?,
            position: position.to_string(),
            reason_for_leaving: reason.to_string(),
        })
    }

    pub fn company_name(&self) -> &str {
        &self.company_name
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn employed_from(&self) -> NaiveDate {
        self.employed_from
    }

    pub fn employed_to(&self) -> NaiveDate {
        self.employed_to
    }

    pub fn position(&self) -> &str {
        &self.position
    }

    pub fn reason_for_leaving(&self) -> &str {
        &self.reason_for_leaving
    }

    pub fn set_company_name(&mut self, name: &str) {
        self.company_name = name.to_string();
    }

    pub fn set_location(&mut self, location: &str) {
        self.location = location.to_string();
    }

    pub fn set_employed_from(&mut self, raw: &str) -> Result<(), FieldError> {
        self.employed_from =
            parse_date(raw).map_err(|source| FieldError::new("employed_from", source))?;
        Ok(())
    }

    pub fn set_employed_to(&mut self, raw: &str) -> Result<(), FieldError> {
        self.employed_to =
            parse_date(raw).map_err(|source| FieldError::new("employed_to", source))?;
        Ok(())
    }

    pub fn set_position(&mut self, position: &str) {
        self.position = position.to_string();
    }

    pub fn set_reason_for_leaving(&mut self, reason: &str) {
        self.reason_for_leaving = reason.to_string();
    }
}

/// A full application: personal details plus the repeated sections.
///
/// Identity is the (full name, normalized mobile number) pair; equality and
/// hashing both derive from exactly that pair so duplicate checks and
/// hash-keyed containers stay consistent.
#[derive(Debug, Clone, Serialize)]
pub struct Applicant {
    personal_info: PersonalInfo,
    languages: Vec<Language>,
    educational_background: Vec<Education>,
    work_experience: Vec<WorkExperience>,
    major_skills: String,
}

impl Applicant {
    pub fn new(personal_info: PersonalInfo) -> Self {
        Self {
            personal_info,
            languages: Vec::new(),
            educational_background: Vec::new(),
            work_experience: Vec::new(),
            major_skills: String::new(),
        }
    }

    pub fn personal_info(&self) -> &PersonalInfo {
        &self.personal_info
    }

    pub fn personal_info_mut(&mut self) -> &mut PersonalInfo {
        &mut self.personal_info
    }

    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    pub fn educational_background(&self) -> &[Education] {
        &self.educational_background
    }

    pub fn work_experience(&self) -> &[WorkExperience] {
        &self.work_experience
    }

    pub fn major_skills(&self) -> &str {
        &self.major_skills
    }

    pub fn set_major_skills(&mut self, skills: &str) {
        self.major_skills = skills.to_string();
    }

    pub fn add_language(
        &mut self,
        language: &str,
        read_ability: &str,
        write_ability: &str,
        speak_ability: &str,
    ) {
        self.languages
            .push(Language::new(language, read_ability, write_ability, speak_ability));
    }

    #[allow(clippy::too_many_arguments)]
    pub fn add_education(
        &mut self,
        level: EducationLevel,
        university_name: &str,
        university_location: &str,
        university_country: &str,
        attended_from: &str,
        attended_to: &str,
        certificates: &str,
        main_field_of_study: &str,
    ) -> Result<(), FieldError> {
        self.educational_background.push(Education::new(
            level,
            university_name,
            university_location,
            university_country,
            attended_from,
            attended_to,
            certificates,
            main_field_of_study,
        )?);
        Ok(())
    }

    /// Append a work-experience entry. Once [`MAX_WORK_EXPERIENCE`] entries
    /// exist the call is accepted and the entry dropped without error or
    /// validation.
    pub fn add_work_experience(
        &mut self,
        company: &str,
        location: &str,
        employed_from: &str,
        employed_to: &str,
        position: &str,
        reason: &str,
    ) -> Result<(), FieldError> {
        if self.work_experience.len() >= MAX_WORK_EXPERIENCE {
            tracing::debug!(company, "work experience cap reached; entry dropped");
            return Ok(());
        }

        self.work_experience.push(WorkExperience::new(
            company,
            location,
            employed_from,
            employed_to,
            position,
            reason,
        )?);
        Ok(())
    }
}

impl PartialEq for Applicant {
    fn eq(&self, other: &Self) -> bool {
        self.personal_info.full_name == other.personal_info.full_name
            && self.personal_info.phone_number_mobile == other.personal_info.phone_number_mobile
    }
}

impl Eq for Applicant {}

impl Hash for Applicant {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.personal_info.full_name.hash(state);
        self.personal_info.phone_number_mobile.hash(state);
    }
}
