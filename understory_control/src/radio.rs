// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mutually exclusive radio groups.
//!
//! Radio controls only know the name of their group. Membership lives in a
//! [`RadioGroups`] registry owned by the caller, which is also responsible
//! for unchecking peers when a member raises
//! [`Checked`](crate::ControlEventKind::Checked).
//!
//! ```
//! use understory_control::RadioGroups;
//!
//! let mut groups = RadioGroups::new();
//! groups.register("size", 1_u32);
//! groups.register("size", 2);
//! groups.register("size", 3);
//! groups.register("color", 4);
//!
//! let peers: Vec<_> = groups.peers("size", &2).copied().collect();
//! assert_eq!(peers, [1, 3]);
//!
//! groups.unregister("size", &1);
//! assert_eq!(groups.members("size"), &[2, 3]);
//! ```

use alloc::string::String;
use hashbrown::HashMap;
use smallvec::SmallVec;

/// Group name to member ids, in registration order.
#[derive(Clone, Debug)]
pub struct RadioGroups<K> {
    groups: HashMap<String, SmallVec<[K; 4]>>,
}

impl<K> Default for RadioGroups<K> {
    fn default() -> Self {
        Self {
            groups: HashMap::new(),
        }
    }
}

impl<K: PartialEq> RadioGroups<K> {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `id` to `group`. Registering twice is a no-op.
    pub fn register(&mut self, group: &str, id: K) {
        match self.groups.get_mut(group) {
            Some(members) => {
                if !members.contains(&id) {
                    members.push(id);
                }
            }
            None => {
                let mut members = SmallVec::new();
                members.push(id);
                self.groups.insert(String::from(group), members);
            }
        }
    }

    /// Remove `id` from `group`. Empty groups are dropped.
    ///
    /// Returns `true` if `id` was a member.
    pub fn unregister(&mut self, group: &str, id: &K) -> bool {
        let Some(members) = self.groups.get_mut(group) else {
            return false;
        };
        let Some(pos) = members.iter().position(|m| m == id) else {
            return false;
        };
        members.remove(pos);
        if members.is_empty() {
            self.groups.remove(group);
        }
        true
    }

    /// Members of `group`.
    pub fn members(&self, group: &str) -> &[K] {
        self.groups.get(group).map(|m| m.as_slice()).unwrap_or(&[])
    }

    /// Members of `group` other than `id`.
    pub fn peers<'a>(
        &'a self,
        group: &str,
        id: &'a K,
    ) -> impl Iterator<Item = &'a K> + use<'a, K> {
        self.members(group).iter().filter(move |m| *m != id)
    }

    /// Number of non-empty groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns `true` if no group has members.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
