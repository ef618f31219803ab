use crate::data::student::{Student, StudentDetails};

/// True when some existing row matches the candidate on every field except the identifier.
/// Strings compare exactly, with no case folding or trimming.
pub fn is_duplicate<'a>(
    candidate: &StudentDetails,
    existing: impl IntoIterator<Item = &'a Student>,
) -> bool {
    existing
        .into_iter()
        .any(|student| student.details == *candidate)
}
