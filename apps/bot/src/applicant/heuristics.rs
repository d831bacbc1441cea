//! The two judgement calls the applicant makes: which photo to send and how
//! good a fit the job is. Pure functions, no I/O.

use crate::models::headshot::{NAUGHTIES_BOYBAND, TASTEFUL_CABLEKNIT};

/// Every word there is, as far as the hair-gel test is concerned.
pub const DICTIONARY: [&str; 4] = ["literally", "all", "the", "words"];

/// Matched skills at or above this count pay the bills.
pub const BILLS_PAID_THRESHOLD: usize = 4;

/// True when the company name, with every `s` turned into a `z`, is a word.
pub fn use_too_much_hair_gel(company_name: &str) -> bool {
    let gelled = company_name.replace('s', "z");
    DICTIONARY.contains(&gelled.as_str())
}

/// Asset key of the headshot to send to `company_name`.
pub fn headshot_key(company_name: &str) -> &'static str {
    if use_too_much_hair_gel(company_name) {
        NAUGHTIES_BOYBAND
    } else {
        TASTEFUL_CABLEKNIT
    }
}

/// Outcome of comparing the applicant's skills against a job's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillVerdict {
    BillsPaid,
    LearnFast,
}

impl SkillVerdict {
    pub fn from_matches(matched: usize) -> Self {
        if matched >= BILLS_PAID_THRESHOLD {
            SkillVerdict::BillsPaid
        } else {
            SkillVerdict::LearnFast
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            SkillVerdict::BillsPaid => "Bills paid 💷",
            SkillVerdict::LearnFast => "Apply anyway and learn fast! 👍",
        }
    }
}
