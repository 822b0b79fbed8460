use serde::{Deserialize, Serialize};

/// First id handed out by the roster; later ids increment per registration.
pub const MEMBER_ID_BASE: u64 = 1001;

/// A registered patron. `borrowed_titles` is keyed by title, not book id,
/// so returns resolve through titles (ambiguous when titles collide; a
/// known trade-off of the workflow).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: u64,
    pub name: String,
    pub borrowed_titles: Vec<String>,
}

/// Members in registration order.
#[derive(Default)]
pub struct MemberRoster {
    members: Vec<Member>,
}

impl MemberRoster {
    pub fn new() -> Self {
        MemberRoster::default()
    }

    pub fn from_members(members: Vec<Member>) -> Self {
        MemberRoster { members }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Register a member and return the assigned id.
    pub fn register(&mut self, name: impl Into<String>) -> u64 {
        let id = MEMBER_ID_BASE + self.members.len() as u64;
        self.members.push(Member {
            id,
            name: name.into(),
            borrowed_titles: Vec::new(),
        });
        id
    }

    pub fn get(&self, id: u64) -> Option<&Member> {
        self.members.iter().find(|member| member.id == id)
    }

    pub fn get_mut(&mut self, id: u64) -> Option<&mut Member> {
        self.members.iter_mut().find(|member| member.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Member> {
        self.members.iter()
    }

    pub fn snapshot(&self) -> Vec<Member> {
        self.members.clone()
    }
}
