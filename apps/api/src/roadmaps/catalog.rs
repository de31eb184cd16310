#![allow(dead_code)]

//! Static roadmap catalog — maps the two form selections to fixed
//! checklist texts.
//!
//! `lookup` is pure and total over the selection domain: every
//! combination yields a defined (possibly empty) string, never an error.

use serde::{Deserialize, Serialize};

/// Experience level selected in the form. `Unselected` is the placeholder
/// option; the state is recreated from the form on every interaction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    #[default]
    Unselected,
    Beginner,
    Intermediate,
    Advanced,
}

/// Career interest area selected in the form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterestArea {
    #[default]
    Unselected,
    DataScience,
    DigitalMarketing,
    ProgrammingCourses,
    ProductManagement,
    SoftwareDevelopment,
    BankingFinance,
    Cybersecurity,
}

impl ExperienceLevel {
    /// Label shown in the form's experience dropdown.
    pub fn label(&self) -> &'static str {
        match self {
            ExperienceLevel::Unselected => "Select",
            ExperienceLevel::Beginner => "Beginner",
            ExperienceLevel::Intermediate => "Intermediate",
            ExperienceLevel::Advanced => "Advanced",
        }
    }
}

impl InterestArea {
    /// Label shown in the form's interest dropdown.
    pub fn label(&self) -> &'static str {
        match self {
            InterestArea::Unselected => "Select",
            InterestArea::DataScience => "Data Science & Analytics",
            InterestArea::DigitalMarketing => "Digital Marketing With AI",
            InterestArea::ProgrammingCourses => "Programming Courses",
            InterestArea::ProductManagement => "Product Management",
            InterestArea::SoftwareDevelopment => "Software Development",
            InterestArea::BankingFinance => "Banking & Finance",
            InterestArea::Cybersecurity => "Cybersecurity Courses",
        }
    }
}

/// Starter checklist for a beginner targeting data science.
const DATA_SCIENCE_STARTER: &str = "✅ Learn Python\n✅ Learn Pandas & Numpy\n✅ Study Statistics\n✅ Do small data projects\n✅ Learn Power BI / Tableau";

/// Security track, shown for every experience level.
const CYBERSECURITY_TRACK: &str = "✅ Learn Networking Basics\n✅ Explore OWASP Top 10\n✅ Use Kali Linux Tools\n✅ Practice on TryHackMe\n✅ Get CompTIA or CEH";

/// Generic starting points when both fields are selected but no dedicated
/// track exists for the pair.
const GENERAL_TRACK: &str = "✅ Explore foundational concepts\n✅ Take beginner-friendly courses\n✅ Build small projects\n✅ Contribute to GitHub\n✅ Read blogs & join communities";

/// Looks up the fixed roadmap for a selection pair.
///
/// Branch order matters: the cybersecurity track overrides experience,
/// and the generic track only applies once both fields are selected.
/// Anything else renders nothing.
pub fn lookup(experience: ExperienceLevel, interest: InterestArea) -> &'static str {
    if experience == ExperienceLevel::Beginner && interest == InterestArea::DataScience {
        DATA_SCIENCE_STARTER
    } else if interest == InterestArea::Cybersecurity {
        CYBERSECURITY_TRACK
    } else if experience != ExperienceLevel::Unselected && interest != InterestArea::Unselected {
        GENERAL_TRACK
    } else {
        ""
    }
}
