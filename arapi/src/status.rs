//! Status lists and the outcome of a call.

use std::fmt;

use arapi_sys::*;
use serde::Serialize;

use crate::codec::Codec;
use crate::error::Result;
use crate::list::from_native_list;

/// Severity of one status entry.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Severity {
    Note,
    Warning,
    Error,
    Fatal,
}

impl Severity {
    /// Map a native message type or return code. Anything past `FATAL`
    /// (a bad status) counts as fatal.
    pub fn from_native(code: u32) -> Severity {
        match code {
            AR_RETURN_OK => Severity::Note,
            AR_RETURN_WARNING => Severity::Warning,
            AR_RETURN_ERROR => Severity::Error,
            _ => Severity::Fatal,
        }
    }

    pub const fn outcome(self) -> Outcome {
        match self {
            Severity::Note => Outcome::Ok,
            Severity::Warning => Outcome::Warning,
            Severity::Error | Severity::Fatal => Outcome::Failure,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Note => "note",
            Severity::Warning => "warning",
            Severity::Error => "error",
            Severity::Fatal => "fatal",
        })
    }
}

/// Three-way result of a native call.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize)]
pub enum Outcome {
    Ok,
    Warning,
    Failure,
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct StatusEntry {
    pub severity: Severity,
    pub code: i32,
    pub message: String,
    pub appended: Option<String>,
}

impl fmt::Display for StatusEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {}] {}", self.severity, self.code, self.message)?;
        if let Some(appended) = &self.appended {
            write!(f, " : {appended}")?;
        }
        Ok(())
    }
}

/// The ordered status report returned alongside every call.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize)]
#[serde(transparent)]
pub struct StatusList(Vec<StatusEntry>);

impl StatusList {
    pub fn new(entries: Vec<StatusEntry>) -> Self {
        Self(entries)
    }

    pub fn entries(&self) -> &[StatusEntry] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn max_severity(&self) -> Option<Severity> {
        self.0.iter().map(|e| e.severity).max()
    }

    /// Outcome from the entries alone; an empty list is `Ok`.
    pub fn outcome(&self) -> Outcome {
        self.max_severity().map_or(Outcome::Ok, Severity::outcome)
    }

    /// Decode a native status list.
    ///
    /// # Safety
    ///
    /// `raw` must be a list filled in by the native library.
    pub unsafe fn from_native(raw: &ARStatusList, codec: &Codec) -> Result<Self> {
        // SAFETY: per the caller; message strings are null or terminated.
        let entries = unsafe {
            from_native_list(raw, |s| {
                Ok(StatusEntry {
                    severity: Severity::from_native(s.messageType),
                    code: s.messageNum,
                    message: codec.decode_text(s.messageText)?,
                    appended: codec.decode_ptr(s.appendedText)?,
                })
            })
        }?;
        Ok(Self(entries))
    }
}

impl fmt::Display for StatusList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("no status");
        }
        for (i, entry) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            entry.fmt(f)?;
        }
        Ok(())
    }
}

impl IntoIterator for StatusList {
    type Item = StatusEntry;
    type IntoIter = std::vec::IntoIter<StatusEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Combine the return code with the list: the worse of the two wins.
pub fn outcome_of(rc: i32, status: &StatusList) -> Outcome {
    let from_rc = Severity::from_native(rc.max(0) as u32).outcome();
    from_rc.max(status.outcome())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(severity: Severity, code: i32) -> StatusEntry {
        StatusEntry {
            severity,
            code,
            message: format!("message {code}"),
            appended: None,
        }
    }

    #[test]
    fn empty_list_is_ok() {
        assert_eq!(StatusList::default().outcome(), Outcome::Ok);
        assert_eq!(outcome_of(0, &StatusList::default()), Outcome::Ok);
    }

    #[test]
    fn worst_entry_decides() {
        let list = StatusList::new(vec![entry(Severity::Note, 1), entry(Severity::Warning, 2)]);
        assert_eq!(list.outcome(), Outcome::Warning);
        let list = StatusList::new(vec![entry(Severity::Fatal, 3), entry(Severity::Note, 4)]);
        assert_eq!(list.outcome(), Outcome::Failure);
    }

    #[test]
    fn return_code_can_raise_the_outcome() {
        let notes = StatusList::new(vec![entry(Severity::Note, 1)]);
        assert_eq!(outcome_of(AR_RETURN_ERROR as i32, &notes), Outcome::Failure);
        assert_eq!(outcome_of(AR_RETURN_WARNING as i32, &notes), Outcome::Warning);
        assert_eq!(outcome_of(AR_RETURN_BAD_STATUS as i32, &notes), Outcome::Failure);
    }

    #[test]
    fn display_joins_entries() {
        let mut e = entry(Severity::Error, 303);
        e.appended = Some("HelpDesk".into());
        let list = StatusList::new(vec![e, entry(Severity::Warning, 72)]);
        assert_eq!(
            list.to_string(),
            "[error 303] message 303 : HelpDesk; [warning 72] message 72"
        );
    }

    #[test]
    fn decodes_native_entries() {
        let codec = Codec::default();
        let text = c"Form does not exist";
        let mut raw = [ARStatusStruct {
            messageType: AR_RETURN_ERROR,
            messageNum: 303,
            messageText: text.as_ptr() as *mut _,
            appendedText: std::ptr::null_mut(),
        }];
        let list = ARStatusList::from_raw_parts(raw.as_mut_ptr(), 1);
        // SAFETY: `raw` and `text` outlive the call.
        let status = unsafe { StatusList::from_native(&list, &codec) }.unwrap();
        assert_eq!(status.entries()[0].severity, Severity::Error);
        assert_eq!(status.entries()[0].message, "Form does not exist");
        assert_eq!(status.outcome(), Outcome::Failure);
    }
}
