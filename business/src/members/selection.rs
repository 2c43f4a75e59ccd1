use std::collections::HashSet;

use ustr::Ustr;

/// Ids of the rows ticked by the operator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: HashSet<Ustr>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &Ustr) -> bool {
        self.ids.contains(id)
    }

    /// Flip `id`. Returns whether it is selected afterwards.
    pub fn toggle(&mut self, id: Ustr) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    pub fn insert_all(&mut self, ids: impl IntoIterator<Item = Ustr>) {
        self.ids.extend(ids);
    }

    pub fn remove_all<'a>(&mut self, ids: impl IntoIterator<Item = &'a Ustr>) {
        for id in ids {
            self.ids.remove(id);
        }
    }

    pub fn remove(&mut self, id: &Ustr) -> bool {
        self.ids.remove(id)
    }

    /// Drop every id for which `keep` is false.
    pub fn retain(&mut self, keep: impl FnMut(&Ustr) -> bool) {
        self.ids.retain(keep);
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
