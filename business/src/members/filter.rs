//! Case-insensitive search over member attributes.

use crate::member::Member;

/// True when any attribute contains `needle`, where `needle` is already lowercased.
fn matches_lowercase(member: &Member, needle: &str) -> bool {
    member
        .attribute_texts()
        .iter()
        .any(|text| text.to_lowercase().contains(needle))
}

/// True when any attribute of `member` contains `term`, ignoring case.
/// An empty term matches everything.
pub fn matches(member: &Member, term: &str) -> bool {
    term.is_empty() || matches_lowercase(member, &term.to_lowercase())
}

/// Members matching `term`, in list order.
pub fn filter_members<'a>(members: &'a [Member], term: &str) -> Vec<&'a Member> {
    if term.is_empty() {
        return members.iter().collect();
    }

    let needle = term.to_lowercase();
    members
        .iter()
        .filter(|member| matches_lowercase(member, &needle))
        .collect()
}
