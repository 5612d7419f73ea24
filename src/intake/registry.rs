use super::domain::Applicant;

/// Outcome of [`ApplicantRegistry::add`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    AlreadyApplied,
}

/// Outcome of [`ApplicantRegistry::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    Updated { replaced: usize },
    NotFound,
}

/// Outcome of [`ApplicantRegistry::delete`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted { removed: usize },
    NotFound,
}

/// Ordered, duplicate-free, session-scoped collection of applicants.
///
/// Duplicate detection on insert uses [`Applicant`] identity (full name plus
/// normalized mobile number). Name lookups are case-insensitive exact
/// matches. `NotFound` is reported once per call, only when no entry matched
/// at all. Outcomes are plain values; the error taxonomy is reserved for
/// field validation.
#[derive(Debug, Default)]
pub struct ApplicantRegistry {
    applicants: Vec<Applicant>,
}

impl ApplicantRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the applicant, unless an identity-equal entry already exists;
    /// the rejected applicant is dropped and the collection left unchanged.
    pub fn add(&mut self, applicant: Applicant) -> AddOutcome {
        if self.applicants.contains(&applicant) {
            tracing::debug!(
                full_name = applicant.personal_info().full_name(),
                "duplicate application rejected"
            );
            return AddOutcome::AlreadyApplied;
        }

        self.applicants.push(applicant);
        AddOutcome::Added
    }

    /// All applicants whose stored full name matches, in insertion order.
    /// Duplicate names with distinct mobile numbers all come back.
    pub fn search(&self, full_name: &str) -> Vec<&Applicant> {
        let needle = full_name.to_lowercase();
        self.applicants
            .iter()
            .filter(|applicant| applicant.personal_info().full_name().to_lowercase() == needle)
            .collect()
    }

    /// Replace every name match in place, preserving each entry's position.
    pub fn update(&mut self, full_name: &str, new_applicant: Applicant) -> UpdateOutcome {
        let needle = full_name.to_lowercase();
        let slots: Vec<usize> = self
            .applicants
            .iter()
            .enumerate()
            .filter(|(_, applicant)| {
                applicant.personal_info().full_name().to_lowercase() == needle
            })
            .map(|(index, _)| index)
            .collect();

        if slots.is_empty() {
            return UpdateOutcome::NotFound;
        }

        let replaced = slots.len();
        for index in slots {
            self.applicants[index] = new_applicant.clone();
        }
        UpdateOutcome::Updated { replaced }
    }

    /// Remove every name match. `retain` walks the collection once, so
    /// removal never skips or revisits shifted entries.
    pub fn delete(&mut self, full_name: &str) -> DeleteOutcome {
        let needle = full_name.to_lowercase();
        let before = self.applicants.len();
        self.applicants
            .retain(|applicant| applicant.personal_info().full_name().to_lowercase() != needle);

        let removed = before - self.applicants.len();
        if removed == 0 {
            DeleteOutcome::NotFound
        } else {
            DeleteOutcome::Deleted { removed }
        }
    }

    /// All applicants in insertion order.
    pub fn list(&self) -> &[Applicant] {
        &self.applicants
    }

    pub fn len(&self) -> usize {
        self.applicants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.applicants.is_empty()
    }
}
