use rendezvous_core::{ConnectionId, Member, RoomId};
use std::collections::HashMap;

/// Room id -> members currently in that room, in join order.
///
/// Every mutation hands back a point-in-time snapshot so callers can compute
/// notifications against a consistent view.
#[derive(Debug, Default)]
pub struct RoomPresence {
    rooms: HashMap<RoomId, Vec<Member>>,
}

impl RoomPresence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn members_of(&self, room_id: &str) -> Vec<Member> {
        self.rooms.get(room_id).cloned().unwrap_or_default()
    }

    /// Appends `member` and returns the membership as it was before the append.
    ///
    /// A record already held by the same handle is replaced, so a handle is
    /// never listed twice in one room.
    pub fn join(&mut self, room_id: RoomId, member: Member) -> Vec<Member> {
        let members = self.rooms.entry(room_id).or_default();
        members.retain(|m| m.handle != member.handle);

        let before = members.clone();
        members.push(member);
        before
    }

    /// Removes the handle's record and returns who is still in the room.
    /// An emptied room is dropped entirely.
    pub fn leave(&mut self, handle: &ConnectionId, room_id: &str) -> Vec<Member> {
        let Some(members) = self.rooms.get_mut(room_id) else {
            return Vec::new();
        };

        members.retain(|m| &m.handle != handle);
        if members.is_empty() {
            self.rooms.remove(room_id);
            return Vec::new();
        }

        members.clone()
    }

    pub fn contains_room(&self, room_id: &str) -> bool {
        self.rooms.contains_key(room_id)
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }
}
