mod members;

pub use members::{MemberAction, members_panel};
