//! Bounded rendering of name lists.

/// Separator between names in a rendered list.
const SEPARATOR: &str = ", ";

/// A name list rendered into a bounded buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameList {
    /// The leading names that fit, joined with `", "`.
    pub text: String,
    /// True when at least one name was dropped.
    pub truncated: bool,
}

/// Join `names` with `", "` without exceeding `capacity` bytes.
///
/// Names are appended whole: the first name that does not fit (with its
/// separator) is dropped together with everything after it, and `truncated`
/// reports that the output is incomplete. The result never exceeds
/// `capacity`.
pub fn join_names<'a, I>(names: I, capacity: usize) -> NameList
where
    I: IntoIterator<Item = &'a str>,
{
    let mut text = String::new();
    let mut truncated = false;

    for name in names {
        let needed = if text.is_empty() {
            name.len()
        } else {
            SEPARATOR.len() + name.len()
        };
        if text.len() + needed > capacity {
            truncated = true;
            break;
        }
        if !text.is_empty() {
            text.push_str(SEPARATOR);
        }
        text.push_str(name);
    }

    NameList { text, truncated }
}
