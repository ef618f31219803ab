use crate::data::student::{Gender, StudentDetails};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudentField {
    FirstName,
    LastName,
    Gender,
    Dob,
    MotherTongue,
    Nationality,
    FatherName,
    MotherName,
    ContactNumber,
    FatherOccupation,
    MotherOccupation,
    FamilyIncome,
}

impl fmt::Display for StudentField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::FirstName => "first name",
            Self::LastName => "last name",
            Self::Gender => "gender",
            Self::Dob => "dob",
            Self::MotherTongue => "mother tongue",
            Self::Nationality => "nationality",
            Self::FatherName => "father name",
            Self::MotherName => "mother name",
            Self::ContactNumber => "contact number",
            Self::FatherOccupation => "father occupation",
            Self::MotherOccupation => "mother occupation",
            Self::FamilyIncome => "family income",
        })
    }
}

type Rule = (StudentField, fn(&StudentDetails) -> bool);

/// Checked top to bottom; the first failing field is the one reported.
const RULES: [Rule; 12] = [
    (StudentField::FirstName, |s| is_mandatory_alphabetic(&s.first_name)),
    (StudentField::LastName, |s| is_optional_alphabetic(&s.last_name)),
    (StudentField::Gender, |s| is_valid_gender(&s.gender)),
    (StudentField::Dob, |s| s.dob.is_empty() || is_valid_dob(&s.dob)),
    (StudentField::MotherTongue, |s| is_optional_alphabetic(&s.mother_tongue)),
    (StudentField::Nationality, |s| is_mandatory_alphabetic(&s.nationality)),
    (StudentField::FatherName, |s| is_optional_alphabetic(&s.father_name)),
    (StudentField::MotherName, |s| is_optional_alphabetic(&s.mother_name)),
    (StudentField::ContactNumber, |s| is_valid_contact_number(s.contact_number)),
    (StudentField::FatherOccupation, |s| is_optional_alphabetic(&s.father_occupation)),
    (StudentField::MotherOccupation, |s| is_optional_alphabetic(&s.mother_occupation)),
    (StudentField::FamilyIncome, |s| is_valid_family_income(s.family_income)),
];

/// Returns the first field that fails its rule, if any.
pub fn first_invalid_field(details: &StudentDetails) -> Option<StudentField> {
    RULES
        .iter()
        .find(|(_, check)| !check(details))
        .map(|(field, _)| *field)
}

pub fn is_mandatory_alphabetic(value: &str) -> bool {
    !value.is_empty() && is_optional_alphabetic(value)
}

pub fn is_optional_alphabetic(value: &str) -> bool {
    value.chars().all(|c| c.is_ascii_alphabetic())
}

pub fn is_valid_gender(value: &str) -> bool {
    value.is_empty() || Gender::parse(value).is_some()
}

/// `MM-DD-YYYY`. Thirty-day months are capped at 30, but the other months all allow 31,
/// February and leap years included.
pub fn is_valid_dob(dob: &str) -> bool {
    let mut parts = dob.split('-').map(str::parse::<i32>);
    let (Some(Ok(mm)), Some(Ok(dd)), Some(Ok(yyyy)), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return false;
    };

    if !(1..=12).contains(&mm) || !(1..=31).contains(&dd) || !(1000..=9999).contains(&yyyy) {
        return false;
    }

    //TODO: reject 31 for February and the other short months, and handle leap years
    if matches!(mm, 4 | 6 | 9 | 11) {
        return dd <= 30;
    }

    true
}

/// Zero means no income was given.
pub const fn is_valid_family_income(income: i64) -> bool {
    income >= 0
}

/// Counts characters of the decimal rendering, so a sign counts too.
pub fn is_valid_contact_number(contact_number: i64) -> bool {
    contact_number.to_string().len() == 10
}
