use docfacts_core::document::Document;
use docfacts_core::facts::Expectation;
use docfacts_core::types::{CheckError, CheckId};

pub fn ensure(check: CheckId, condition: bool, message: &str) -> Result<(), CheckError> {
    if condition {
        Ok(())
    } else {
        Err(CheckError::assertion(check, message))
    }
}

pub fn ensure_member<T: PartialEq>(
    check: CheckId,
    set: &[T],
    item: &T,
    message: &str,
) -> Result<(), CheckError> {
    ensure(check, set.contains(item), message)
}

pub fn ensure_not_member<T: PartialEq>(
    check: CheckId,
    set: &[T],
    item: &T,
    message: &str,
) -> Result<(), CheckError> {
    ensure(check, !set.contains(item), message)
}

/// Require every expectation to be a substring of `text`, in order. The first
/// missing phrase wins.
pub fn ensure_phrases(
    check: CheckId,
    text: &str,
    expectations: &[Expectation],
) -> Result<(), CheckError> {
    for e in expectations {
        ensure(check, text.contains(e.needle), e.message)?;
    }
    Ok(())
}

pub fn ensure_document_phrases(
    check: CheckId,
    doc: &Document,
    expectations: &[Expectation],
) -> Result<(), CheckError> {
    for e in expectations {
        ensure(check, doc.contains(e.needle), e.message)?;
    }
    Ok(())
}
