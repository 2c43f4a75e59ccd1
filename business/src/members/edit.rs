use ustr::Ustr;

use crate::member::{Member, MemberField};

/// Working copy of the row being edited inline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDraft {
    member: Member,
}

impl EditDraft {
    pub fn new(member: Member) -> Self {
        Self { member }
    }

    pub fn id(&self) -> Ustr {
        self.member.id
    }

    pub fn field(&self, field: MemberField) -> &str {
        self.member.field(field)
    }

    pub fn set(&mut self, field: MemberField, value: impl Into<String>) {
        *self.member.field_mut(field) = value.into();
    }

    pub fn into_member(self) -> Member {
        self.member
    }
}
