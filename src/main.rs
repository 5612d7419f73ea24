use std::io::{self, Write};

use applicant_intake::config::AppConfig;
use applicant_intake::error::AppError;
use applicant_intake::intake::report;
use applicant_intake::intake::{
    AddOutcome, Applicant, ApplicantRegistry, DeleteOutcome, EducationLevel,
    EmergencyContactLevel, FieldError, PersonalInfo, UpdateOutcome,
};
use applicant_intake::telemetry;
use clap::Parser;
use tracing::info;

const MENU_RULE: &str =
    "*****######*****######*****######*****######*****######******######*******######";

#[derive(Parser, Debug)]
#[command(
    name = "Applicant Intake Manager",
    about = "Collect, search, update, and delete job-application records for a session",
    version
)]
struct Cli {
    /// Override APP_LOG_LEVEL for this run
    #[arg(long)]
    log_level: Option<String>,
    /// Override APP_MAX_BAD_ATTEMPTS for this run
    #[arg(long)]
    max_bad_attempts: Option<u32>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let mut config = AppConfig::load()?;
    if let Some(level) = cli.log_level {
        config.telemetry.log_level = level;
    }
    if let Some(limit) = cli.max_bad_attempts {
        config.intake.max_bad_attempts = limit;
    }
    telemetry::init(&config.telemetry)?;
    info!(environment = ?config.environment, "starting applicant intake session");

    Session::new(config.intake.max_bad_attempts).run()
}

/// Input-collection failure: either the terminal went away or a field
/// failed validation and the operator gets to retry.
#[derive(Debug)]
enum CollectError {
    Io(io::Error),
    Invalid(FieldError),
}

impl From<io::Error> for CollectError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<FieldError> for CollectError {
    fn from(value: FieldError) -> Self {
        Self::Invalid(value)
    }
}

/// Interactive session state: the registry plus the bad-attempt counter,
/// passed around explicitly rather than captured by the menu loop.
struct Session {
    registry: ApplicantRegistry,
    bad_attempts: u32,
    max_bad_attempts: u32,
}

impl Session {
    fn new(max_bad_attempts: u32) -> Self {
        Self {
            registry: ApplicantRegistry::new(),
            bad_attempts: 0,
            max_bad_attempts,
        }
    }

    fn run(&mut self) -> Result<(), AppError> {
        loop {
            print_menu();
            let choice = prompt("Enter your choice")?;
            match choice.trim() {
                "1" => {
                    if !self.handle_add()? {
                        break;
                    }
                }
                "2" => self.handle_search()?,
                "3" => self.handle_update()?,
                "4" => self.handle_delete()?,
                "5" => print!("{}", report::render_applications(self.registry.list())),
                "6" => self.handle_json_dump()?,
                "7" => {
                    println!("Bye!");
                    break;
                }
                other => println!("Unrecognized choice '{other}'."),
            }
        }
        Ok(())
    }

    /// Returns `false` once the bad-attempt budget is exhausted and the
    /// session should end.
    fn handle_add(&mut self) -> Result<bool, AppError> {
        match collect_applicant() {
            Ok(applicant) => {
                let full_name = applicant.personal_info().full_name().to_string();
                match self.registry.add(applicant) {
                    AddOutcome::Added => {
                        info!(%full_name, "application added");
                        println!("Application added successfully!");
                    }
                    AddOutcome::AlreadyApplied => {
                        println!("You have already applied for this job!");
                    }
                }
            }
            Err(CollectError::Io(err)) => return Err(err.into()),
            Err(CollectError::Invalid(err)) => {
                self.bad_attempts += 1;
                println!("{err}");
                if self.bad_attempts >= self.max_bad_attempts {
                    println!("Too many bad attempts. Please try again later!");
                    return Ok(false);
                }
            }
        }
        Ok(true)
    }

    fn handle_search(&self) -> Result<(), AppError> {
        let full_name = prompt("Enter Full Name to search")?;
        let matches = self.registry.search(&full_name);
        if matches.is_empty() {
            println!("Applicant with name '{full_name}' doesn't exist!");
        } else {
            println!("Search Results:");
            print!("{}", report::render_applications(matches));
        }
        Ok(())
    }

    fn handle_update(&mut self) -> Result<(), AppError> {
        let full_name = prompt("Enter Full Name to update")?;
        if self.registry.search(&full_name).is_empty() {
            println!("Applicant with name '{full_name}' doesn't exist!");
            return Ok(());
        }

        match collect_applicant() {
            Ok(replacement) => match self.registry.update(&full_name, replacement) {
                UpdateOutcome::Updated { replaced } => {
                    info!(%full_name, replaced, "application updated");
                    println!("Application updated successfully!");
                }
                UpdateOutcome::NotFound => {
                    println!("Applicant with name '{full_name}' doesn't exist!");
                }
            },
            Err(CollectError::Io(err)) => return Err(err.into()),
            Err(CollectError::Invalid(err)) => println!("{err}"),
        }
        Ok(())
    }

    fn handle_delete(&mut self) -> Result<(), AppError> {
        let full_name = prompt("Enter Full Name to delete")?;
        match self.registry.delete(&full_name) {
            DeleteOutcome::Deleted { removed } => {
                info!(%full_name, removed, "application deleted");
                println!("Application deleted successfully!");
            }
            DeleteOutcome::NotFound => {
                println!("Applicant with name '{full_name}' doesn't exist!");
            }
        }
        Ok(())
    }

    fn handle_json_dump(&self) -> Result<(), AppError> {
        let body = serde_json::to_string_pretty(self.registry.list())?;
        println!("{body}");
        Ok(())
    }
}

fn print_menu() {
    println!("\n{MENU_RULE}");
    println!("\tWelcome to the Career Training Institution Application Manager");
    println!("{MENU_RULE}");
    println!("\t\t1. Add Application");
    println!("\t\t2. Search Application");
    println!("\t\t3. Update Application");
    println!("\t\t4. Delete Application");
    println!("\t\t5. Display All Applications");
    println!("\t\t6. Dump Applications as JSON");
    println!("\t\t7. Exit");
}

fn collect_applicant() -> Result<Applicant, CollectError> {
    let personal_info = PersonalInfo::new(
        &prompt("Full Name")?,
        &prompt("Date of Birth (YYYY-MM-DD)")?,
        &prompt("Sex (Male/Female)")?,
        &prompt("Home Address")?,
        &prompt("Phone number (home)")?,
        &prompt("Phone number (mobile)")?,
        &prompt("Email Address")?,
    )?;
    let mut applicant = Applicant::new(personal_info);

    for level in EmergencyContactLevel::ALL {
        println!("Enter {} emergency contact:", level.label().to_lowercase());
        applicant.personal_info_mut().set_emergency_contact(
            &prompt("Emergency Contact Full Name")?,
            &prompt("Relationship with Contact")?,
            &prompt("Phone number of Emergency Contact")?,
            level,
        )?;
    }

    loop {
        applicant.add_language(
            &prompt("Language")?,
            &prompt("Ability to Read (excellent/good/bad)")?,
            &prompt("Ability to Write (excellent/good/bad)")?,
            &prompt("Ability to Speak (excellent/good/bad)")?,
        );
        if !wants_more("Do you want to add another language (y/n)?")? {
            break;
        }
    }

    loop {
        let level = select_education_level()?;
        applicant.add_education(
            level,
            &prompt("School name")?,
            &prompt("School location")?,
            &prompt("School country")?,
            &prompt("Attended from (YYYY-MM-DD)")?,
            &prompt("Attended till (YYYY-MM-DD)")?,
            &prompt("Certificates list (comma-separated)")?,
            &prompt("Main field of study")?,
        )?;
        if !wants_more("Do you want to add another education entry (y/n)?")? {
            break;
        }
    }

    for _ in 0..3 {
        if !wants_more("Do you want to add work experience (y/n)?")? {
            break;
        }
        applicant.add_work_experience(
            &prompt("Company Name")?,
            &prompt("Location")?,
            &prompt("Employed from (YYYY-MM-DD)")?,
            &prompt("Employed till (YYYY-MM-DD)")?,
            &prompt("Position")?,
            &prompt("Reason for leaving")?,
        )?;
    }

    applicant.set_major_skills(&prompt("Major skills (comma-separated)")?);
    Ok(applicant)
}

fn select_education_level() -> Result<EducationLevel, CollectError> {
    println!("Select your education level:");
    for (slot, level) in EducationLevel::ALL.iter().enumerate() {
        println!("{}. {}", slot + 1, level.label());
    }

    loop {
        let choice = prompt("Enter the number corresponding to your choice")?;
        match choice.trim().parse::<usize>().ok().map(EducationLevel::from_index) {
            Some(Ok(level)) => return Ok(level),
            _ => println!(
                "Invalid choice. Please enter a number between 1 and {}.",
                EducationLevel::ALL.len()
            ),
        }
    }
}

fn prompt(label: &str) -> io::Result<String> {
    print!("{label}: ");
    io::stdout().flush()?;
    read_response(&mut io::stdin().lock())
}

/// A 0-byte read means stdin was closed; surface it as an error so the menu
/// loop ends instead of spinning on empty answers.
fn read_response<R: io::BufRead>(input: &mut R) -> io::Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed before the session finished",
        ));
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Collection continues until the operator answers `n`; anything else keeps
/// going.
fn wants_more(label: &str) -> io::Result<bool> {
    Ok(!prompt(label)?.trim().eq_ignore_ascii_case("n"))
}

#[cfg(test)]
mod tests {
    use super::read_response;
    use std::io::{self, Cursor};

    #[test]
    fn read_response_strips_the_line_ending() {
        let mut input = Cursor::new("Jane Doe\r\n");
        assert_eq!(read_response(&mut input).expect("line reads"), "Jane Doe");
    }

    #[test]
    fn read_response_reports_closed_input() {
        let mut input = Cursor::new("");
        let err = read_response(&mut input).expect_err("closed input is an error");
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
